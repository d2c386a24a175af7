// Host-side tests for the key bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod keymap {
    include!("../src/keymap.rs");
}

use constants::OPACITY_KEY_STEP;
use keymap::*;
use vinyl_core::Waveform;

#[test]
fn digits_select_wave_shapes() {
    assert_eq!(shape_for_digit("1"), Some(Waveform::Sine));
    assert_eq!(shape_for_digit("2"), Some(Waveform::Square));
    assert_eq!(shape_for_digit("3"), Some(Waveform::Triangle));
    assert_eq!(shape_for_digit("4"), Some(Waveform::Saw));
    assert_eq!(shape_for_digit("5"), None);
    assert_eq!(shape_for_digit("0"), None);
    assert_eq!(
        action_for_key("3"),
        Some(KeyAction::SetShape(Waveform::Triangle))
    );
}

#[test]
fn letters_are_case_insensitive() {
    for (lower, upper, action) in [
        ("l", "L", KeyAction::ToggleLabels),
        ("b", "B", KeyAction::ToggleBackground),
        ("e", "E", KeyAction::Eat),
        ("h", "H", KeyAction::ToggleHint),
    ] {
        assert_eq!(action_for_key(lower), Some(action));
        assert_eq!(action_for_key(upper), Some(action));
    }
}

#[test]
fn plus_and_minus_step_opacity() {
    for key in ["+", "="] {
        assert_eq!(
            action_for_key(key),
            Some(KeyAction::AdjustOpacity(OPACITY_KEY_STEP))
        );
    }
    for key in ["-", "_"] {
        assert_eq!(
            action_for_key(key),
            Some(KeyAction::AdjustOpacity(-OPACITY_KEY_STEP))
        );
    }
}

#[test]
fn unbound_keys_do_nothing() {
    for key in ["x", "Enter", " ", "ArrowUp", "", "11"] {
        assert_eq!(action_for_key(key), None, "{key:?}");
    }
}

#[test]
fn opacity_percent_conversions() {
    assert_eq!(opacity_to_percent(0.7), 70);
    assert_eq!(opacity_to_percent(0.0), 0);
    assert_eq!(opacity_to_percent(1.5), 100);
    assert_eq!(opacity_to_percent(-0.2), 0);
    assert_eq!(percent_to_opacity("55"), Some(0.55));
    assert_eq!(percent_to_opacity(" 100 "), Some(1.0));
    assert_eq!(percent_to_opacity("150"), Some(1.0));
    assert_eq!(percent_to_opacity("-3"), Some(0.0));
    assert_eq!(percent_to_opacity("abc"), None);
    assert_eq!(percent_to_opacity("NaN"), None);
}

#[test]
fn opacity_steps_round_trip_through_the_slider() {
    let mut opacity = 0.7;
    for _ in 0..3 {
        opacity += OPACITY_KEY_STEP;
    }
    let pct = opacity_to_percent(opacity);
    assert_eq!(pct, 85);
    let back = percent_to_opacity(&pct.to_string()).unwrap();
    assert!((back - 0.85).abs() < 1e-12);
}
