//! Places ranked items, plus the caterpillar's head and tail, along a
//! generated wave path.

use crate::color::Palette;
use crate::constants::{
    ANCHOR_SIZE_FACTOR, CANVAS_HEIGHT, CANVAS_LEFT_PADDING, CANVAS_WIDTH, SPACING_FACTOR,
    VINYL_COUNT, VINYL_INNER_RADIUS, VINYL_OUTER_RADIUS, WAVE_START_OFFSET,
};
use crate::curve::{CurvePath, PathParams};
use crate::item::DomainItem;
use crate::waveform::Waveform;
use glam::DVec2;
use std::f64::consts::PI;

#[derive(Clone, Debug)]
pub struct LayoutConfig {
    pub canvas: DVec2,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub left_padding: f64,
    pub start_offset: f64,
    pub anchor_size: DVec2,
    pub anchor_margin: f64,
    pub waveform: Waveform,
    pub max_items: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let edge = VINYL_OUTER_RADIUS * ANCHOR_SIZE_FACTOR;
        Self {
            canvas: DVec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            outer_radius: VINYL_OUTER_RADIUS,
            inner_radius: VINYL_INNER_RADIUS,
            left_padding: CANVAS_LEFT_PADDING,
            start_offset: WAVE_START_OFFSET,
            anchor_size: DVec2::splat(edge),
            anchor_margin: VINYL_OUTER_RADIUS,
            waveform: Waveform::Sine,
            max_items: VINYL_COUNT,
        }
    }
}

impl LayoutConfig {
    /// Arc length between neighbouring record centers.
    pub fn spacing(&self) -> f64 {
        self.outer_radius * SPACING_FACTOR
    }

    /// Starting amplitude for `count` records: tall enough that neighbours
    /// on the steepest stretch would still be `spacing` apart, bounded by
    /// the canvas.
    pub fn initial_amplitude(&self, count: usize) -> f64 {
        let r = self.outer_radius;
        let padding = r + 20.0;
        let available = self.canvas.x - 2.0 * padding;
        let spreading = available / (count.saturating_sub(1)).max(1) as f64;
        let target = self.spacing();
        let spacing_x = spreading.max(r * 2.4).min(target * 0.75);
        let frequency = PI / (count * 10).max(1) as f64;
        let sin_half = match (frequency / 2.0).sin() {
            s if s != 0.0 => s,
            _ => 1.0,
        };
        let max_vertical = (target * target - spacing_x * spacing_x).max(0.0).sqrt();
        let base = max_vertical / (2.0 * sin_half) * 0.4;
        base.max(r).min(self.canvas.y / 2.0 - r)
    }

    pub fn path_params(&self, count: usize) -> PathParams {
        PathParams {
            waveform: self.waveform,
            start_offset: self.start_offset,
            left_padding: self.left_padding,
            ..PathParams::new(
                self.canvas.x,
                self.canvas.y,
                self.outer_radius,
                self.spacing(),
                self.initial_amplitude(count),
            )
        }
    }

    /// Margin keeping an anchor sprite mostly on canvas.
    fn anchor_clamp_margin(&self) -> f64 {
        self.anchor_margin + self.anchor_size.x / 2.0 + 8.0
    }

    pub fn clamp_anchor(&self, p: DVec2) -> DVec2 {
        let m = self.anchor_clamp_margin();
        let size = self.anchor_size;
        let min = DVec2::new(-size.x / 2.0 + m, -size.y / 2.0 + m);
        let max = DVec2::new(
            self.canvas.x + size.x / 1.7 - m,
            self.canvas.y + size.y / 2.0 - m,
        );
        DVec2::new(p.x.clamp(min.x, max.x.max(min.x)), p.y.clamp(min.y, max.y.max(min.y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    Head,
    Tail,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPlacement {
    pub kind: AnchorKind,
    pub arc_length: f64,
    pub position: DVec2,
}

#[derive(Clone, Debug)]
pub struct LayoutEntry {
    pub index: usize,
    pub item: DomainItem,
    pub arc_length: f64,
    pub position: DVec2,
    pub palette: Palette,
    materialized: bool,
}

impl LayoutEntry {
    pub fn is_materialized(&self) -> bool {
        self.materialized
    }
}

#[derive(Clone, Debug)]
pub struct Layout {
    path: CurvePath,
    spacing: f64,
    entries: Vec<LayoutEntry>,
    pub head: AnchorPlacement,
    pub tail: AnchorPlacement,
}

impl Layout {
    /// Lay out up to `config.max_items` items. Missing palettes use the default.
    pub fn build(items: &[DomainItem], palettes: &[Palette], config: &LayoutConfig) -> Self {
        let items = &items[..items.len().min(config.max_items)];
        let count = items.len();
        let spacing = config.spacing();
        let path = config.path_params(count).generate(count);
        let required = count.saturating_sub(1) as f64 * spacing;

        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let arc_length = index as f64 * spacing;
                LayoutEntry {
                    index,
                    item: item.clone(),
                    arc_length,
                    position: path.sample_extended(arc_length),
                    palette: palettes.get(index).copied().unwrap_or_default(),
                    materialized: false,
                }
            })
            .collect::<Vec<_>>();

        let anchor = |kind, arc_length: f64| AnchorPlacement {
            kind,
            arc_length,
            position: config.clamp_anchor(path.sample_extended(arc_length)),
        };
        let head = anchor(AnchorKind::Head, -(spacing * 0.8));
        let tail = anchor(AnchorKind::Tail, required + spacing);

        log::debug!(
            "[layout] {} entries, path length {:.1}, amplitude {:.1}",
            entries.len(),
            path.total_length(),
            path.amplitude()
        );
        Self {
            path,
            spacing,
            entries,
            head,
            tail,
        }
    }

    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &DomainItem> {
        self.entries.iter().map(|e| &e.item)
    }

    /// Swap in an extracted palette without moving anything.
    pub fn apply_palette(&mut self, index: usize, palette: Palette) -> bool {
        match self.entries.get_mut(index) {
            Some(e) => {
                e.palette = palette;
                true
            }
            None => false,
        }
    }

    /// Mark an entry as materialized. Yields it only the first time.
    pub fn materialize(&mut self, index: usize) -> Option<&LayoutEntry> {
        let entry = self.entries.get_mut(index)?;
        if entry.materialized {
            return None;
        }
        entry.materialized = true;
        Some(entry)
    }

    pub fn materialized_count(&self) -> usize {
        self.entries.iter().filter(|e| e.materialized).count()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.entries.len()
    }
}
