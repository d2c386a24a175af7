//! Sampled waveform path that records are strung along.

use crate::constants::{PATH_EDGE_PADDING, PATH_PHASE, PATH_STEPS};
use crate::waveform::Waveform;
use glam::DVec2;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub pos: DVec2,
    /// Arc length from the first sample up to this one.
    pub length: f64,
}

#[derive(Clone, Debug, Default)]
pub struct CurvePath {
    points: Vec<CurvePoint>,
    total_length: f64,
    amplitude: f64,
}

impl CurvePath {
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Amplitude the path was traced with, after clamping or rescaling.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at arc length `target`, clamped to the path's domain.
    pub fn sample(&self, target: f64) -> DVec2 {
        let Some(first) = self.points.first() else {
            return DVec2::ZERO;
        };
        let clamped = target.clamp(0.0, self.total_length.max(0.0));
        if clamped <= 0.0 {
            return first.pos;
        }
        let i = self.points.partition_point(|p| p.length < clamped);
        match (i.checked_sub(1).map(|j| self.points[j]), self.points.get(i)) {
            (Some(prev), Some(curr)) => {
                let segment = curr.length - prev.length;
                let ratio = if segment == 0.0 {
                    0.0
                } else {
                    (clamped - prev.length) / segment
                };
                prev.pos.lerp(curr.pos, ratio)
            }
            (None, Some(curr)) => curr.pos,
            _ => self.points[self.points.len() - 1].pos,
        }
    }

    /// Like [`sample`](Self::sample), but targets outside `[0, total]`
    /// continue in a straight line along the nearest end segment, exactly
    /// `|overshoot|` away from that end.
    pub fn sample_extended(&self, target: f64) -> DVec2 {
        let n = self.points.len();
        if n == 0 {
            return DVec2::ZERO;
        }
        if (0.0..=self.total_length).contains(&target) {
            return self.sample(target);
        }
        if target < 0.0 {
            let first = self.points[0].pos;
            let next = self.points.get(1).map_or(first, |p| p.pos);
            return offset_along(first, next, -target, false);
        }
        let last = self.points[n - 1].pos;
        let prev = if n >= 2 { self.points[n - 2].pos } else { last };
        let overshoot = target - self.total_length;
        offset_along(last, last + (last - prev), overshoot, true)
    }
}

/// Move `distance` from `base` toward (or away from) `neighbor`.
fn offset_along(base: DVec2, neighbor: DVec2, distance: f64, forward: bool) -> DVec2 {
    let dir = neighbor - base;
    let len = dir.length();
    let len = if len > 0.0 { len } else { 1.0 };
    let sign = if forward { 1.0 } else { -1.0 };
    base + dir / len * distance * sign
}

#[derive(Clone, Debug)]
pub struct PathParams {
    pub width: f64,
    pub height: f64,
    /// Radius of the discs placed along the path.
    pub radius: f64,
    /// Target arc length between neighbouring discs.
    pub spacing: f64,
    pub amplitude: f64,
    pub waveform: Waveform,
    pub phase: f64,
    pub steps: usize,
    /// Extra left inset reserved for the fruit lane.
    pub start_offset: f64,
    pub left_padding: f64,
}

impl PathParams {
    pub fn new(width: f64, height: f64, radius: f64, spacing: f64, amplitude: f64) -> Self {
        Self {
            width,
            height,
            radius,
            spacing,
            amplitude,
            waveform: Waveform::Sine,
            phase: PATH_PHASE,
            steps: PATH_STEPS,
            start_offset: 0.0,
            left_padding: 0.0,
        }
    }

    fn padding(&self) -> f64 {
        self.radius + PATH_EDGE_PADDING
    }

    fn usable_width(&self) -> f64 {
        let base = (self.width - 2.0 * self.padding() - self.start_offset).max(0.0);
        (base - self.left_padding).max(0.0)
    }

    fn bottom(&self) -> f64 {
        self.height - self.padding() - self.radius - 4.0
    }

    fn top(&self) -> f64 {
        self.padding() + self.radius + 4.0
    }

    /// Largest amplitude that keeps the first pass inside the canvas.
    pub fn max_amplitude(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0) / 2.0
    }

    /// Arc length needed to place `count` discs at `spacing`.
    pub fn required_length(&self, count: usize) -> f64 {
        count.saturating_sub(1) as f64 * self.spacing
    }

    /// Trace the path at exactly `amplitude`, without any clamping.
    pub fn trace(&self, amplitude: f64) -> CurvePath {
        let steps = self.steps.max(1);
        let x0 = self.padding() + self.start_offset + self.left_padding;
        let usable = self.usable_width();
        let bottom = self.bottom();
        let mut points = Vec::with_capacity(steps + 1);
        let mut total = 0.0;
        let mut prev: Option<DVec2> = None;
        for i in 0..=steps {
            let u = i as f64 / steps as f64;
            let pos = DVec2::new(
                x0 + u * usable,
                bottom - amplitude * (1.0 + self.waveform.evaluate(self.phase + u * TAU)),
            );
            if let Some(p) = prev {
                total += pos.distance(p);
            }
            points.push(CurvePoint { pos, length: total });
            prev = Some(pos);
        }
        CurvePath {
            points,
            total_length: total,
            amplitude,
        }
    }

    /// Build a path long enough for `count` discs.
    ///
    /// The first pass clamps the amplitude to the canvas. When that falls
    /// short, the path is rebuilt exactly once with the amplitude scaled by
    /// the length deficit, floored at the amplitude whose vertical travel
    /// alone covers the required length.
    pub fn generate(&self, count: usize) -> CurvePath {
        let amplitude = self.amplitude.clamp(0.0, self.max_amplitude());
        let path = self.trace(amplitude);
        let required = self.required_length(count);
        if path.total_length >= required {
            return path;
        }
        let proportional = amplitude * required / path.total_length.max(1.0);
        let travel = self.waveform.unit_travel(self.phase, self.steps);
        let travel = if travel > 0.0 { travel } else { 1.0 };
        let floor = required * (1.0 + 1e-6) / travel;
        let rescaled = proportional.max(floor);
        log::debug!(
            "[curve] length {:.1} < required {:.1}; amplitude {:.1} -> {:.1}",
            path.total_length,
            required,
            amplitude,
            rescaled
        );
        self.trace(rescaled)
    }
}
