//! Ranked tracks/artists as delivered by the data endpoint, plus the query
//! that windows them.

use crate::constants::{DISPLAY_LIMIT, MAX_TOP_ITEMS, TEMPO_MAX, TEMPO_MIN};
use crate::error::{CoreError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Track,
    Artist,
}

impl ItemKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            ItemKind::Track => "/top_tracks",
            ItemKind::Artist => "/top_artists",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            ItemKind::Track => "tracks",
            ItemKind::Artist => "artists",
        }
    }
}

/// Artist credit in any of the shapes the endpoint has been seen to send.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Artists {
    Joined(String),
    List(Vec<ArtistRef>),
    Single(Named),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ArtistRef {
    Name(String),
    Object(Named),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Album {
    Name(String),
    Object(Named),
}

/// One ranked track or artist. Every field is optional on the wire, and a
/// field of the wrong type falls back to its default without touching the
/// others.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DomainItem {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_rank")]
    pub rank: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub kind: ItemKind,
    #[serde(deserialize_with = "lenient")]
    pub bpm: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub tempo: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub energy: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub popularity: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub album_image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub artists: Option<Artists>,
    #[serde(deserialize_with = "lenient")]
    pub artist: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub album: Option<Album>,
    #[serde(deserialize_with = "lenient")]
    pub album_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub genres: Vec<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Ranks arrive as integers, occasionally as whole floats.
fn lenient_rank<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(rank_from_value(&Value::deserialize(deserializer)?))
}

fn rank_from_value(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|r| r.fract() == 0.0 && *r >= 0.0 && *r <= u32::MAX as f64)
                .map(|r| r as u64)
        })
        .and_then(|r| u32::try_from(r).ok())
}

impl DomainItem {
    pub fn track(name: &str, rank: u32) -> Self {
        Self {
            name: Some(name.to_string()),
            rank: Some(rank),
            ..Default::default()
        }
    }

    pub fn artist(name: &str, rank: u32) -> Self {
        Self {
            kind: ItemKind::Artist,
            ..Self::track(name, rank)
        }
    }

    pub fn is_artist(&self) -> bool {
        self.kind == ItemKind::Artist
    }

    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(fallback)
    }

    /// Artwork URL, preferring the item's own image over its album's.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or(self.album_image.as_deref())
            .filter(|u| !u.is_empty())
    }

    fn rank_prefix(&self) -> String {
        self.rank.map(|r| format!("#{r} ")).unwrap_or_default()
    }

    /// Text used for background bands and fruit captions.
    pub fn display_label(&self) -> String {
        if self.is_artist() {
            self.name_or("Unknown Artist").to_string()
        } else {
            format!("{}{}", self.rank_prefix(), self.name_or("Unknown Track"))
        }
    }

    /// Title printed around a record's ring.
    pub fn vinyl_title(&self) -> String {
        if self.is_artist() {
            self.name_or("Unknown artist").to_string()
        } else {
            format!("{}{}", self.rank_prefix(), self.name_or(""))
        }
    }

    /// Comma-joined artist credit; empty for artist items.
    pub fn artist_names(&self) -> String {
        if self.is_artist() {
            return String::new();
        }
        let joined = match &self.artists {
            Some(Artists::Joined(s)) => s.clone(),
            Some(Artists::List(list)) => list
                .iter()
                .filter_map(|a| match a {
                    ArtistRef::Name(n) => Some(n.as_str()),
                    ArtistRef::Object(o) => o.name.as_deref(),
                })
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            Some(Artists::Single(o)) => o.name.clone().unwrap_or_default(),
            None => String::new(),
        };
        if joined.is_empty() {
            self.artist.clone().unwrap_or_default()
        } else {
            joined
        }
    }

    pub fn album_title(&self) -> String {
        if self.is_artist() {
            return String::new();
        }
        match &self.album {
            Some(Album::Name(n)) if !n.is_empty() => n.clone(),
            Some(Album::Object(Named { name: Some(n) })) if !n.is_empty() => n.clone(),
            _ => self.album_name.clone().unwrap_or_default(),
        }
    }

    /// Explicit tempo, if the source provided one.
    pub fn explicit_tempo(&self) -> Option<f64> {
        let valid = |t: &f64| t.is_finite() && *t > 0.0;
        self.bpm.filter(valid).or(self.tempo.filter(valid))
    }

    /// Tempo to animate with. Without an explicit value, energy (or
    /// popularity as a stand-in for energy) maps onto 60..180 and is then
    /// clamped to the supported band.
    pub fn tempo_estimate(&self) -> f64 {
        if let Some(t) = self.explicit_tempo() {
            return t;
        }
        let energy = self
            .energy
            .or(self.popularity.map(|p| p / 100.0))
            .filter(|e| e.is_finite())
            .unwrap_or(0.5)
            .clamp(0.0, 1.0);
        (energy * 120.0 + 60.0).round().clamp(TEMPO_MIN, TEMPO_MAX)
    }

    /// Best-effort conversion that never fails. Bad fields default one by
    /// one; an entry that is not an object at all becomes a default item.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<DomainItem>(value) {
            Ok(item) => item,
            Err(e) => {
                log::warn!("[items] malformed item ({e}); using defaults");
                Self::default()
            }
        }
    }
}

#[derive(Deserialize)]
struct TopItemsPayload {
    #[serde(default)]
    items: Vec<Value>,
}

/// Parse a `{ "items": [...] }` payload. Only a body that is not JSON at all
/// is an error; individual items are converted leniently.
pub fn parse_top_items(body: &str) -> Result<Vec<DomainItem>> {
    let payload: TopItemsPayload = serde_json::from_str(body)?;
    Ok(payload.items.into_iter().map(DomainItem::from_value).collect())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    ShortTerm,
    MediumTerm,
    #[default]
    LongTerm,
}

impl TimeRange {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "1 month",
            TimeRange::MediumTerm => "6 months",
            TimeRange::LongTerm => "1 year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short_term" => Ok(TimeRange::ShortTerm),
            "medium_term" => Ok(TimeRange::MediumTerm),
            "long_term" => Ok(TimeRange::LongTerm),
            other => Err(CoreError::UnknownTimeRange(other.to_string())),
        }
    }
}

/// One fetch window over the ranked list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopItemsQuery {
    pub kind: ItemKind,
    pub time_range: TimeRange,
    pub start_rank: u32,
}

impl Default for TopItemsQuery {
    fn default() -> Self {
        Self {
            kind: ItemKind::Track,
            time_range: TimeRange::default(),
            start_rank: 1,
        }
    }
}

impl TopItemsQuery {
    /// Highest start rank that still leaves a full window.
    pub const MAX_START_RANK: u32 = MAX_TOP_ITEMS - DISPLAY_LIMIT + 1;

    pub fn offset(&self) -> u32 {
        self.start_rank.clamp(1, Self::MAX_START_RANK)
    }

    pub fn end_rank(&self) -> u32 {
        (self.offset() + DISPLAY_LIMIT - 1).min(MAX_TOP_ITEMS)
    }

    pub fn url(&self) -> String {
        format!(
            "{}?offset={}&time_range={}",
            self.kind.endpoint(),
            self.offset(),
            self.time_range
        )
    }

    pub fn range_label(&self) -> String {
        format!("Ranks {} - {}", self.offset(), self.end_rank())
    }
}
