//! Layered waveform bands drawn behind the records, one per item color.

use crate::color::{contrasting_text_color, Rgb, DEFAULT_SWATCH};
use crate::constants::{WAVE_COLOR_LIMIT, WAVE_OPACITY, WAVE_SPEED_DEFAULT, WAVE_SPEED_MAX, WAVE_SPEED_MIN};
use crate::item::DomainItem;
use crate::waveform::Waveform;
use glam::DVec2;
use std::f64::consts::TAU;

/// One filled band, ready to be replayed onto a canvas.
#[derive(Clone, Debug)]
pub struct WaveBand {
    pub color: Rgb,
    pub text_color: Rgb,
    pub label: String,
    pub amplitude: f64,
    pub center: f64,
    /// One sample per horizontal pixel, `x` from 0 to `width` inclusive.
    pub points: Vec<DVec2>,
    pub label_y: f64,
}

#[derive(Clone, Debug)]
pub struct WaveBackground {
    colors: Vec<Rgb>,
    labels: Vec<String>,
    phase: f64,
    speed: f64,
    opacity: f64,
    visible: bool,
    show_labels: bool,
    shape: Waveform,
    running: bool,
}

impl Default for WaveBackground {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            labels: Vec::new(),
            phase: 0.0,
            speed: WAVE_SPEED_DEFAULT,
            opacity: WAVE_OPACITY,
            visible: true,
            show_labels: true,
            shape: Waveform::Sine,
            running: false,
        }
    }
}

impl WaveBackground {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace band colors and labels and start animating. Colors beyond the
    /// limit are dropped; missing labels become `Item N`.
    pub fn set_palette(&mut self, colors: &[Rgb], labels: &[String]) {
        self.colors = colors.iter().copied().take(WAVE_COLOR_LIMIT).collect();
        if self.colors.is_empty() {
            self.colors.push(DEFAULT_SWATCH);
        }
        let mut labels: Vec<String> = labels.iter().take(WAVE_COLOR_LIMIT).cloned().collect();
        while labels.len() < self.colors.len() {
            labels.push(format!("Item {}", labels.len() + 1));
        }
        labels.truncate(self.colors.len());
        self.labels = labels;
        self.running = true;
    }

    /// Derive drift speed from the items' average tempo estimate.
    pub fn set_speed_from_items(&mut self, items: &[DomainItem]) {
        if items.is_empty() {
            self.speed = WAVE_SPEED_DEFAULT;
            return;
        }
        let avg = items.iter().map(DomainItem::tempo_estimate).sum::<f64>() / items.len() as f64;
        self.speed = (avg / 120.0 * WAVE_SPEED_DEFAULT).clamp(WAVE_SPEED_MIN, WAVE_SPEED_MAX);
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        if opacity.is_nan() {
            return;
        }
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.show_labels = show;
    }

    pub fn set_shape(&mut self, shape: Waveform) {
        self.shape = shape;
    }

    /// Clear colors and reset phase and speed. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.running = false;
        self.colors.clear();
        self.labels.clear();
        self.phase = 0.0;
        self.speed = WAVE_SPEED_DEFAULT;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether anything would be painted this frame.
    pub fn is_drawable(&self) -> bool {
        self.running && self.visible && self.opacity > 0.0 && !self.colors.is_empty()
    }

    pub fn update(&mut self, dt_sec: f64) {
        if self.is_drawable() {
            self.phase += self.speed * dt_sec;
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn shows_labels(&self) -> bool {
        self.show_labels
    }

    pub fn shape(&self) -> Waveform {
        self.shape
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn bands(&self, width: f64, height: f64) -> Vec<WaveBand> {
        if self.colors.is_empty() || width <= 0.0 {
            return Vec::new();
        }
        let shape = self.shape;
        let spacing = height / (self.colors.len() + 1) as f64;
        self.colors
            .iter()
            .zip(&self.labels)
            .enumerate()
            .map(|(i, (&color, label))| {
                let fi = i as f64;
                let amplitude = 24.0 + fi * 4.0;
                let freq = 1.0 + fi * 0.15;
                let shift = self.phase * (0.4 + fi * 0.2);
                let center = spacing * (fi + 1.0) + shape.evaluate(self.phase * 0.8 + fi) * 12.0;
                let stretch = amplitude * (1.0 + fi * 0.05);
                let points = (0..=width.floor() as usize)
                    .map(|x| {
                        let x = x as f64;
                        let arg = x / width * TAU * freq + shift;
                        DVec2::new(x, center + shape.evaluate(arg) * stretch)
                    })
                    .collect();
                WaveBand {
                    color,
                    text_color: contrasting_text_color(color),
                    label: label.clone(),
                    amplitude,
                    center,
                    points,
                    label_y: (center - amplitude - 12.0).max(20.0),
                }
            })
            .collect()
    }
}
