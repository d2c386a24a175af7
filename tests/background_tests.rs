use vinyl_core::constants::{WAVE_OPACITY, WAVE_SPEED_DEFAULT, WAVE_SPEED_MAX, WAVE_SPEED_MIN};
use vinyl_core::*;

fn with_bpm(bpm: f64) -> DomainItem {
    let mut item = DomainItem::track("x", 1);
    item.bpm = Some(bpm);
    item
}

#[test]
fn missing_labels_are_padded() {
    let mut bg = WaveBackground::new();
    bg.set_palette(&[Rgb::WHITE, Rgb::BLACK, Rgb::new(1, 2, 3)], &["a".to_string()]);
    assert_eq!(bg.labels(), ["a", "Item 2", "Item 3"]);
    assert!(bg.is_running());
}

#[test]
fn extra_labels_and_colors_are_dropped() {
    let mut bg = WaveBackground::new();
    let colors = vec![Rgb::WHITE; 14];
    let labels: Vec<String> = (0..14).map(|i| format!("L{i}")).collect();
    bg.set_palette(&colors, &labels);
    assert_eq!(bg.colors().len(), 10);
    assert_eq!(bg.labels().len(), 10);

    bg.set_palette(&[Rgb::WHITE], &labels);
    assert_eq!(bg.labels(), ["L0"]);
}

#[test]
fn empty_palette_draws_one_default_band() {
    let mut bg = WaveBackground::new();
    bg.set_palette(&[], &[]);
    assert_eq!(bg.colors(), [DEFAULT_SWATCH]);
    assert_eq!(bg.labels(), ["Item 1"]);
}

#[test]
fn speed_tracks_average_tempo_within_bounds() {
    let mut bg = WaveBackground::new();
    bg.set_speed_from_items(&[with_bpm(120.0), with_bpm(120.0)]);
    assert_eq!(bg.speed(), WAVE_SPEED_MIN);
    bg.set_speed_from_items(&[with_bpm(240.0)]);
    assert_eq!(bg.speed(), WAVE_SPEED_MAX);
    bg.set_speed_from_items(&[with_bpm(180.0)]);
    assert!((bg.speed() - 0.45).abs() < 1e-12);
    bg.set_speed_from_items(&[]);
    assert_eq!(bg.speed(), WAVE_SPEED_DEFAULT);
}

#[test]
fn stop_is_idempotent() {
    let mut bg = WaveBackground::new();
    bg.set_palette(&[Rgb::WHITE], &[]);
    bg.set_speed_from_items(&[with_bpm(240.0)]);
    bg.update(1.0);
    bg.stop();
    bg.stop();
    assert!(!bg.is_running());
    assert!(bg.colors().is_empty());
    assert!(bg.labels().is_empty());
    assert_eq!(bg.phase(), 0.0);
    assert_eq!(bg.speed(), WAVE_SPEED_DEFAULT);
}

#[test]
fn phase_advances_only_while_drawable() {
    let mut bg = WaveBackground::new();
    bg.update(1.0);
    assert_eq!(bg.phase(), 0.0);

    bg.set_palette(&[Rgb::WHITE], &[]);
    bg.update(1.0);
    assert!((bg.phase() - bg.speed()).abs() < 1e-12);

    let frozen = bg.phase();
    bg.set_visible(false);
    bg.update(1.0);
    assert_eq!(bg.phase(), frozen);

    bg.set_visible(true);
    bg.set_opacity(0.0);
    assert!(!bg.is_drawable());
    bg.update(1.0);
    assert_eq!(bg.phase(), frozen);
}

#[test]
fn opacity_is_clamped_and_ignores_nan() {
    let mut bg = WaveBackground::new();
    assert_eq!(bg.opacity(), WAVE_OPACITY);
    bg.set_opacity(2.0);
    assert_eq!(bg.opacity(), 1.0);
    bg.set_opacity(f64::NAN);
    assert_eq!(bg.opacity(), 1.0);
    bg.set_opacity(-1.0);
    assert_eq!(bg.opacity(), 0.0);
}

#[test]
fn bands_are_stacked_down_the_canvas() {
    let mut bg = WaveBackground::new();
    bg.set_shape(Waveform::Triangle);
    bg.set_palette(&[Rgb::BLACK, Rgb::WHITE, Rgb::new(200, 0, 0)], &[]);
    let bands = bg.bands(100.0, 400.0);
    assert_eq!(bands.len(), 3);
    let spacing = 400.0 / 4.0;
    for (i, band) in bands.iter().enumerate() {
        assert_eq!(band.points.len(), 101);
        assert_eq!(band.points[0].x, 0.0);
        assert_eq!(band.points[100].x, 100.0);
        assert!((band.center - spacing * (i as f64 + 1.0)).abs() <= 12.0);
        assert!(band.label_y >= 20.0);
        assert_eq!(band.label, format!("Item {}", i + 1));
    }
    assert_eq!(bands[0].text_color, Rgb::WHITE);
    assert_eq!(bands[1].text_color, Rgb::BLACK);
}

#[test]
fn no_bands_without_colors() {
    let bg = WaveBackground::new();
    assert!(bg.bands(100.0, 100.0).is_empty());
    assert!(!bg.is_drawable());
}
