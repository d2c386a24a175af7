use vinyl_core::Waveform;

/// What a key press does to the scene or page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    SetShape(Waveform),
    ToggleLabels,
    ToggleBackground,
    /// Signed opacity delta.
    AdjustOpacity(f64),
    Eat,
    ToggleHint,
}

#[inline]
pub fn shape_for_digit(key: &str) -> Option<Waveform> {
    match key {
        "1" => Some(Waveform::Sine),
        "2" => Some(Waveform::Square),
        "3" => Some(Waveform::Triangle),
        "4" => Some(Waveform::Saw),
        _ => None,
    }
}

pub fn action_for_key(key: &str) -> Option<KeyAction> {
    if let Some(shape) = shape_for_digit(key) {
        return Some(KeyAction::SetShape(shape));
    }
    match key {
        "l" | "L" => Some(KeyAction::ToggleLabels),
        "b" | "B" => Some(KeyAction::ToggleBackground),
        "+" | "=" => Some(KeyAction::AdjustOpacity(crate::constants::OPACITY_KEY_STEP)),
        "-" | "_" => Some(KeyAction::AdjustOpacity(-crate::constants::OPACITY_KEY_STEP)),
        "e" | "E" => Some(KeyAction::Eat),
        "h" | "H" => Some(KeyAction::ToggleHint),
        _ => None,
    }
}

/// Slider position (0..=100) for an opacity in \[0, 1\].
#[inline]
pub fn opacity_to_percent(opacity: f64) -> u32 {
    (opacity.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Opacity for a slider value; unparseable input yields `None`.
pub fn percent_to_opacity(value: &str) -> Option<f64> {
    let pct: f64 = value.trim().parse().ok()?;
    pct.is_finite().then(|| (pct / 100.0).clamp(0.0, 1.0))
}
