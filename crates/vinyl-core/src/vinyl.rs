//! The spinning, hoverable record drawn for each materialized item.
//!
//! Geometry lives here so the renderer only has to replay it: grooves, the
//! palette spiral on the label, per-glyph placement of the title around the
//! ring, and the upright info panel.

use crate::color::{Palette, Rgb};
use crate::constants::{GROOVE_STEP, SPIRAL_SEGMENTS, SPIRAL_TURNS};
use crate::item::DomainItem;
use crate::layout::LayoutEntry;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Width of rendered text, supplied by whatever surface draws it.
pub trait TextMeasure {
    fn width(&self, text: &str) -> f64;
}

/// Radians per second for a tempo. Unset or non-positive tempos stand still.
pub fn angular_velocity_for_tempo(tempo: Option<f64>, spins_per_beat: f64) -> f64 {
    match tempo {
        Some(t) if t.is_finite() && t > 0.0 => t / 60.0 * spins_per_beat * TAU,
        _ => 0.0,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub pos: DVec2,
    /// Rotation that puts the glyph's baseline on the ring tangent.
    pub angle: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralStroke {
    pub from: DVec2,
    pub to: DVec2,
    pub color: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSide {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfoPanel {
    pub origin: DVec2,
    pub size: DVec2,
    pub side: PanelSide,
    pub padding: f64,
    pub line_height: f64,
    pub font_size: f64,
    pub lines: Vec<String>,
}

impl InfoPanel {
    pub fn line_origin(&self, i: usize) -> DVec2 {
        self.origin + DVec2::new(self.padding, self.padding + self.line_height * i as f64)
    }
}

pub const PANEL_PADDING: f64 = 10.0;
pub const PANEL_GAP: f64 = 16.0;

#[derive(Clone, Debug)]
pub struct Vinyl {
    pub index: usize,
    pub position: DVec2,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub rotation: f64,
    pub angular_velocity: f64,
    pub palette: Palette,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub tempo: Option<f64>,
    hover_override: Option<Vec<String>>,
    hovered: bool,
}

impl Vinyl {
    pub fn new(index: usize, position: DVec2, outer_radius: f64, inner_radius: f64) -> Self {
        Self {
            index,
            position,
            outer_radius,
            inner_radius,
            rotation: 0.0,
            angular_velocity: 0.0,
            palette: Palette::default(),
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            tempo: None,
            hover_override: None,
            hovered: false,
        }
    }

    /// Build the record for a layout entry; spin follows the item's tempo estimate.
    pub fn from_entry(
        entry: &LayoutEntry,
        outer_radius: f64,
        inner_radius: f64,
        spins_per_beat: f64,
    ) -> Self {
        let item = &entry.item;
        let mut v = Self::new(entry.index, entry.position, outer_radius, inner_radius);
        v.palette = entry.palette;
        v.title = item.vinyl_title();
        v.artist = item.artist_names();
        v.album = item.album_title();
        v.set_tempo(Some(item.tempo_estimate()), spins_per_beat);
        if item.is_artist() {
            v.set_hover_lines(Some(artist_hover_lines(item)));
        }
        v
    }

    pub fn update(&mut self, dt_sec: f64) {
        self.rotation += self.angular_velocity * dt_sec;
    }

    pub fn contains(&self, p: DVec2) -> bool {
        self.position.distance_squared(p) <= self.outer_radius * self.outer_radius
    }

    /// Recompute the hover flag from the pointer; `None` means off-canvas.
    pub fn update_hover(&mut self, pointer: Option<DVec2>) -> bool {
        self.hovered = pointer.is_some_and(|p| self.contains(p));
        self.hovered
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_tempo(&mut self, tempo: Option<f64>, spins_per_beat: f64) {
        self.tempo = tempo.filter(|t| t.is_finite() && *t > 0.0);
        self.angular_velocity = angular_velocity_for_tempo(self.tempo, spins_per_beat);
    }

    pub fn set_hover_lines(&mut self, lines: Option<Vec<String>>) {
        self.hover_override = lines;
    }

    pub fn info_lines(&self) -> Vec<String> {
        if let Some(lines) = &self.hover_override {
            return lines.clone();
        }
        [
            self.title.clone(),
            if self.artist.is_empty() {
                String::new()
            } else {
                format!("by {}", self.artist)
            },
            self.album.clone(),
            self.tempo
                .map(|t| format!("{} BPM", t.round() as i64))
                .unwrap_or_default(),
        ]
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect()
    }

    /// Groove radii between the label and the edge, in disc space.
    pub fn groove_radii(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut r = self.inner_radius + GROOVE_STEP;
        while r < self.outer_radius - 4.0 {
            out.push(r);
            r += GROOVE_STEP;
        }
        out
    }

    pub fn center_dot_radius(&self) -> f64 {
        self.inner_radius * 0.2
    }

    /// Archimedean spiral on the label, in disc space, colors interleaved
    /// stroke by stroke.
    pub fn spiral_strokes(&self) -> Vec<SpiralStroke> {
        let colors = self.palette.colors();
        let start = self.center_dot_radius();
        let span = (self.inner_radius * 0.9 - start).max(0.0);
        let at = |i: usize| {
            let t = i as f64 / SPIRAL_SEGMENTS as f64;
            let theta = t * SPIRAL_TURNS * TAU;
            let r = start + span * t;
            DVec2::new(r * theta.cos(), r * theta.sin())
        };
        (0..SPIRAL_SEGMENTS)
            .map(|i| SpiralStroke {
                from: at(i),
                to: at(i + 1),
                color: colors[i % colors.len()],
            })
            .collect()
    }

    pub fn ring_font_size(&self) -> f64 {
        self.outer_radius * 0.16
    }

    /// Upper-cased title laid along the ring between label and edge, centered
    /// at the top of the disc, in disc space.
    pub fn ring_glyphs(&self, measure: &impl TextMeasure) -> Vec<Glyph> {
        if self.title.is_empty() {
            return Vec::new();
        }
        let text = self.title.to_uppercase();
        let radius = (self.outer_radius + self.inner_radius) / 2.0;
        let mut buf = [0u8; 4];
        let widths: Vec<(char, f64)> = text
            .chars()
            .map(|ch| (ch, measure.width(ch.encode_utf8(&mut buf))))
            .collect();
        let total: f64 = widths.iter().map(|(_, w)| w).sum();
        let mut current = -FRAC_PI_2 - total / radius / 2.0;
        widths
            .into_iter()
            .map(|(ch, w)| {
                let step = w / radius;
                let angle = current + step / 2.0;
                current += step;
                Glyph {
                    ch,
                    pos: DVec2::new(radius * angle.cos(), radius * angle.sin()),
                    angle: angle + FRAC_PI_2,
                }
            })
            .collect()
    }

    pub fn panel_font_size(&self) -> f64 {
        (self.outer_radius * 0.12).floor().max(12.0)
    }

    /// Info panel beside the disc in screen space. Sits to the right unless
    /// that would overflow `canvas`, then flips left; always kept on canvas.
    pub fn info_panel(&self, measure: &impl TextMeasure, canvas: DVec2) -> Option<InfoPanel> {
        let lines = self.info_lines();
        if lines.is_empty() {
            return None;
        }
        let font_size = self.panel_font_size();
        let line_height = font_size * 1.2;
        let widest = lines.iter().map(|l| measure.width(l)).fold(0.0, f64::max);
        let size = DVec2::new(
            widest + PANEL_PADDING * 2.0,
            line_height * lines.len() as f64 + PANEL_PADDING * 2.0,
        );
        let right_x = self.position.x + self.outer_radius + PANEL_GAP;
        let (x, side) = if right_x + size.x > canvas.x {
            (self.position.x - self.outer_radius - PANEL_GAP - size.x, PanelSide::Left)
        } else {
            (right_x, PanelSide::Right)
        };
        let x = x.clamp(0.0, (canvas.x - size.x).max(0.0));
        let y = (self.position.y - size.y / 2.0).clamp(0.0, (canvas.y - size.y).max(0.0));
        Some(InfoPanel {
            origin: DVec2::new(x, y),
            size,
            side,
            padding: PANEL_PADDING,
            line_height,
            font_size,
            lines,
        })
    }
}

fn artist_hover_lines(item: &DomainItem) -> Vec<String> {
    let genres = if item.genres.is_empty() {
        "Unknown".to_string()
    } else {
        item.genres.join(", ")
    };
    vec![
        format!("Artist: {}", item.name_or("Unknown")),
        format!(
            "Popularity: {}",
            item.popularity
                .map(|p| format!("{}", p.round() as i64))
                .unwrap_or_else(|| "N/A".to_string())
        ),
        format!("Genres: {genres}"),
    ]
}
