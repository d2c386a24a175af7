//! Palette extraction for album art.
//!
//! An image is reduced to a handful of representative colors with a small
//! k-means pass over its opaque pixels. Results are cached per image URL for
//! the lifetime of the page.

use crate::constants::{
    ALPHA_THRESHOLD, KMEANS_ITERATIONS, KMEANS_K, LUMINANCE_THRESHOLD, PALETTE_TOP_N,
};
use crate::error::{CoreError, Result};
use fnv::FnvHashMap;
use rand::Rng;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in \[0, 1\].
    pub fn luminance(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    #[inline]
    fn distance_sq(self, other: Rgb) -> i32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        dr * dr + dg * dg + db * db
    }

    /// CSS string with an alpha channel, for translucent fills.
    pub fn to_css_alpha(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// Swatch used whenever an image is missing, unreachable or fully transparent.
pub const DEFAULT_SWATCH: Rgb = Rgb::BLACK;

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Black text on light fills, white text on dark ones.
pub fn contrasting_text_color(fill: Rgb) -> Rgb {
    if fill.luminance() < LUMINANCE_THRESHOLD {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

/// Foreground/secondary pair derived from an item's artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::solid(DEFAULT_SWATCH)
    }
}

impl Palette {
    pub const fn solid(color: Rgb) -> Self {
        Self {
            primary: color,
            secondary: color,
        }
    }

    /// Build from a ranked color list; a missing second color repeats the first.
    pub fn from_ranked(colors: &[Rgb]) -> Self {
        match colors {
            [] => Self::default(),
            [only] => Self::solid(*only),
            [first, second, ..] => Self {
                primary: *first,
                secondary: *second,
            },
        }
    }

    pub fn colors(&self) -> [Rgb; 2] {
        [self.primary, self.secondary]
    }
}

#[derive(Clone, Debug)]
pub struct KMeansParams {
    pub k: usize,
    pub iterations: usize,
    pub top_n: usize,
    pub alpha_threshold: u8,
}

impl Default for KMeansParams {
    fn default() -> Self {
        Self {
            k: KMEANS_K,
            iterations: KMEANS_ITERATIONS,
            top_n: PALETTE_TOP_N,
            alpha_threshold: ALPHA_THRESHOLD,
        }
    }
}

/// Collect RGB triples from an RGBA buffer, skipping pixels at or below the
/// alpha threshold.
pub fn opaque_pixels(rgba: &[u8], alpha_threshold: u8) -> Result<Vec<Rgb>> {
    if rgba.len() % 4 != 0 {
        return Err(CoreError::RaggedPixels(rgba.len()));
    }
    Ok(rgba
        .chunks_exact(4)
        .filter(|px| px[3] > alpha_threshold)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect())
}

/// Rank the dominant colors of `pixels` with k-means.
///
/// Returns exactly `top_n` colors, most populous cluster first, padded with
/// [`DEFAULT_SWATCH`]. Clusters that end an iteration empty are reseeded from
/// a random pixel, so results are only deterministic for a seeded `rng`.
pub fn find_dominant_colors<R: Rng + ?Sized>(
    pixels: &[Rgb],
    params: &KMeansParams,
    rng: &mut R,
) -> Vec<Rgb> {
    if pixels.is_empty() || params.k == 0 {
        return vec![DEFAULT_SWATCH; params.top_n];
    }
    let k = params.k;
    let mut centers: SmallVec<[Rgb; 8]> = (0..k).map(|i| pixels[(i * 3) % pixels.len()]).collect();
    let mut counts: SmallVec<[usize; 8]> = SmallVec::from_elem(0, k);

    for _ in 0..params.iterations {
        let mut sums: SmallVec<[[u64; 3]; 8]> = SmallVec::from_elem([0; 3], k);
        counts.iter_mut().for_each(|c| *c = 0);
        for px in pixels {
            let mut best = 0usize;
            let mut best_d = i32::MAX;
            for (idx, c) in centers.iter().enumerate() {
                let d = px.distance_sq(*c);
                if d < best_d {
                    best_d = d;
                    best = idx;
                }
            }
            counts[best] += 1;
            sums[best][0] += px.r as u64;
            sums[best][1] += px.g as u64;
            sums[best][2] += px.b as u64;
        }
        for idx in 0..k {
            let n = counts[idx] as u64;
            if n == 0 {
                centers[idx] = pixels[rng.gen_range(0..pixels.len())];
                continue;
            }
            let mean = |sum: u64| ((sum as f64 / n as f64).round()).clamp(0.0, 255.0) as u8;
            centers[idx] = Rgb::new(mean(sums[idx][0]), mean(sums[idx][1]), mean(sums[idx][2]));
        }
    }

    let mut ranked: SmallVec<[(Rgb, usize); 8]> =
        centers.iter().copied().zip(counts.iter().copied()).collect();
    // stable: ties keep cluster order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    (0..params.top_n)
        .map(|i| ranked.get(i).map(|(c, _)| *c).unwrap_or(DEFAULT_SWATCH))
        .collect()
}

/// Full pipeline from raw RGBA bytes to a palette. Never fails: unusable
/// buffers resolve to the default palette.
pub fn palette_from_rgba<R: Rng + ?Sized>(rgba: &[u8], params: &KMeansParams, rng: &mut R) -> Palette {
    match opaque_pixels(rgba, params.alpha_threshold) {
        Ok(pixels) => Palette::from_ranked(&find_dominant_colors(&pixels, params, rng)),
        Err(e) => {
            log::warn!("[color] {e}; using default palette");
            Palette::default()
        }
    }
}

/// Page-lifetime memo of extracted palettes, keyed by image URL. Never evicts.
#[derive(Default, Debug)]
pub struct PaletteCache {
    entries: FnvHashMap<String, Palette>,
}

impl PaletteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<Palette> {
        self.entries.get(url).copied()
    }

    pub fn insert(&mut self, url: impl Into<String>, palette: Palette) {
        self.entries.insert(url.into(), palette);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
