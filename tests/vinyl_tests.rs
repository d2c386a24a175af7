use glam::DVec2;
use std::f64::consts::TAU;
use vinyl_core::constants::SPINS_PER_BEAT;
use vinyl_core::*;

struct FixedWidth(f64);

impl TextMeasure for FixedWidth {
    fn width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.0
    }
}

fn disc_at(x: f64, y: f64) -> Vinyl {
    let mut v = Vinyl::new(0, DVec2::new(x, y), 68.0, 32.0);
    v.title = "Song".to_string();
    v
}

fn first_entry(item: DomainItem) -> LayoutEntry {
    Layout::build(&[item], &[], &LayoutConfig::default()).entries()[0].clone()
}

#[test]
fn hit_test_covers_the_disc() {
    let v = disc_at(300.0, 200.0);
    assert!(v.contains(v.position));
    assert!(v.contains(v.position + DVec2::new(68.0, 0.0)));
    assert!(!v.contains(v.position + DVec2::new(69.0, 0.0)));
    assert!(!v.contains(v.position + DVec2::new(50.0, 50.0)));
}

#[test]
fn hover_follows_pointer() {
    let mut v = disc_at(300.0, 200.0);
    assert!(v.update_hover(Some(DVec2::new(310.0, 190.0))));
    assert!(v.is_hovered());
    assert!(!v.update_hover(None));
    assert!(!v.is_hovered());
}

#[test]
fn angular_velocity_is_positive_for_supported_tempos() {
    for bpm in 70..=200 {
        let w = angular_velocity_for_tempo(Some(bpm as f64), SPINS_PER_BEAT);
        assert!(w.is_finite() && w > 0.0, "bpm {bpm}: {w}");
    }
    let w = angular_velocity_for_tempo(Some(120.0), 0.05);
    assert!((w - 2.0 * 0.05 * TAU).abs() < 1e-12);
}

#[test]
fn missing_tempo_stands_still() {
    for tempo in [None, Some(0.0), Some(-5.0), Some(f64::NAN), Some(f64::INFINITY)] {
        assert_eq!(angular_velocity_for_tempo(tempo, SPINS_PER_BEAT), 0.0);
    }
    let mut v = disc_at(0.0, 0.0);
    v.set_tempo(Some(f64::NAN), SPINS_PER_BEAT);
    assert_eq!(v.tempo, None);
    v.update(1.0);
    assert_eq!(v.rotation, 0.0);
}

#[test]
fn rotation_integrates_angular_velocity() {
    let mut v = disc_at(0.0, 0.0);
    v.angular_velocity = 1.0;
    v.update(0.5);
    v.update(0.25);
    assert!((v.rotation - 0.75).abs() < 1e-12);
}

#[test]
fn track_record_lists_title_artist_album_and_tempo() {
    let mut item = DomainItem::track("Song", 1);
    item.artist = Some("A, B".to_string());
    item.album_name = Some("Album".to_string());
    item.bpm = Some(128.0);
    let v = Vinyl::from_entry(&first_entry(item), 68.0, 32.0, SPINS_PER_BEAT);
    assert_eq!(v.title, "#1 Song");
    assert_eq!(v.info_lines(), vec!["#1 Song", "by A, B", "Album", "128 BPM"]);
    assert!(v.angular_velocity > 0.0);
}

#[test]
fn artist_record_uses_artist_lines() {
    let mut item = DomainItem::artist("Band", 2);
    item.popularity = Some(81.4);
    item.genres = vec!["rock".to_string(), "indie".to_string()];
    let v = Vinyl::from_entry(&first_entry(item), 68.0, 32.0, SPINS_PER_BEAT);
    assert_eq!(v.title, "Band");
    assert_eq!(
        v.info_lines(),
        vec!["Artist: Band", "Popularity: 81", "Genres: rock, indie"]
    );

    let bare = Vinyl::from_entry(&first_entry(DomainItem::artist("", 3)), 68.0, 32.0, SPINS_PER_BEAT);
    assert_eq!(
        bare.info_lines(),
        vec!["Artist: Unknown", "Popularity: N/A", "Genres: Unknown"]
    );
}

#[test]
fn info_panel_sits_right_then_flips_left() {
    let measure = FixedWidth(7.0);
    let canvas = DVec2::new(1440.0, 760.0);

    let right = disc_at(200.0, 300.0).info_panel(&measure, canvas).unwrap();
    assert_eq!(right.side, PanelSide::Right);
    assert!((right.origin.x - (200.0 + 68.0 + PANEL_GAP)).abs() < 1e-9);

    let left = disc_at(1400.0, 300.0).info_panel(&measure, canvas).unwrap();
    assert_eq!(left.side, PanelSide::Left);
    assert!(left.origin.x + left.size.x <= 1400.0 - 68.0);
    assert_eq!(left.size.x, 4.0 * 7.0 + 2.0 * PANEL_PADDING);
}

#[test]
fn info_panel_stays_inside_vertically() {
    let measure = FixedWidth(7.0);
    let canvas = DVec2::new(1440.0, 760.0);
    let top = disc_at(300.0, 0.0).info_panel(&measure, canvas).unwrap();
    assert_eq!(top.origin.y, 0.0);
    let bottom = disc_at(300.0, 760.0).info_panel(&measure, canvas).unwrap();
    assert!((bottom.origin.y + bottom.size.y - 760.0).abs() < 1e-9);
    assert!((top.line_origin(1).y - top.line_origin(0).y - top.line_height).abs() < 1e-9);
}

#[test]
fn flipped_panel_is_kept_on_canvas() {
    let measure = FixedWidth(7.0);
    let canvas = DVec2::new(400.0, 300.0);
    let mut v = disc_at(200.0, 150.0);
    v.title = "A Rather Long Title!".to_string();
    let panel = v.info_panel(&measure, canvas).unwrap();
    assert_eq!(panel.side, PanelSide::Left);
    assert_eq!(panel.origin.x, 0.0);
    assert!(panel.origin.x + panel.size.x <= canvas.x);

    // wider than the whole canvas: pinned to the left edge
    v.title = "x".repeat(80);
    let panel = v.info_panel(&measure, canvas).unwrap();
    assert_eq!(panel.origin.x, 0.0);
}

#[test]
fn empty_record_has_no_panel() {
    let v = Vinyl::new(0, DVec2::ZERO, 68.0, 32.0);
    assert!(v.info_panel(&FixedWidth(7.0), DVec2::new(100.0, 100.0)).is_none());
}

#[test]
fn ring_text_is_centered_at_the_top() {
    let mut v = disc_at(0.0, 0.0);
    v.title = "#1 ab".to_string();
    let glyphs = v.ring_glyphs(&FixedWidth(7.0));
    let text: String = glyphs.iter().map(|g| g.ch).collect();
    assert_eq!(text, "#1 AB");
    assert!(glyphs[0].pos.x < 0.0);
    assert!(glyphs[4].pos.x > 0.0);
    assert!(glyphs[2].pos.x.abs() < 1e-9);
    assert!(glyphs.iter().all(|g| g.pos.y < 0.0));
    let radius = (68.0 + 32.0) / 2.0;
    for g in &glyphs {
        assert!((g.pos.length() - radius).abs() < 1e-9);
    }
}

#[test]
fn label_geometry_stays_on_the_disc() {
    let mut v = disc_at(0.0, 0.0);
    v.palette = Palette::from_ranked(&[Rgb::WHITE, Rgb::BLACK]);
    let grooves = v.groove_radii();
    assert!(!grooves.is_empty());
    assert!(grooves.iter().all(|r| *r > v.inner_radius && *r < v.outer_radius));
    let strokes = v.spiral_strokes();
    assert_eq!(strokes[0].color, Rgb::WHITE);
    assert_eq!(strokes[1].color, Rgb::BLACK);
    assert!(strokes.iter().all(|s| s.to.length() <= v.inner_radius));
}
