use crate::error::CoreError;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// Periodic shapes shared by the record path and the wave background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Triangle,
    Saw,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Saw,
    ];

    /// Evaluate the shape at `value` radians. Output lies in \[-1, 1\].
    pub fn evaluate(self, value: f64) -> f64 {
        let phase = normalized_phase(value);
        match self {
            Waveform::Sine => value.sin(),
            Waveform::Square => {
                let s = value.sin();
                if s > 0.0 {
                    1.0
                } else if s < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Saw => phase * 2.0 - 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Saw => "saw",
        }
    }

    /// Total vertical travel of `1 + evaluate(phase + 2πu)` over `steps`
    /// evenly spaced samples of one period.
    pub fn unit_travel(self, phase: f64, steps: usize) -> f64 {
        let steps = steps.max(1);
        let mut prev = self.evaluate(phase);
        let mut travel = 0.0;
        for i in 1..=steps {
            let u = i as f64 / steps as f64;
            let v = self.evaluate(phase + u * TAU);
            travel += (v - prev).abs();
            prev = v;
        }
        travel
    }
}

/// Map any angle onto its position within one period, in \[0, 1).
#[inline]
pub fn normalized_phase(value: f64) -> f64 {
    (value / TAU).rem_euclid(1.0)
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "triangle" => Ok(Waveform::Triangle),
            "saw" | "sawtooth" => Ok(Waveform::Saw),
            other => Err(CoreError::UnknownWaveform(other.to_string())),
        }
    }
}
