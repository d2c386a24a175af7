use vinyl_core::*;

fn tracks(n: usize) -> Vec<DomainItem> {
    (1..=n).map(|i| DomainItem::track(&format!("Song {i}"), i as u32)).collect()
}

#[test]
fn entries_are_spaced_along_the_path() {
    let config = LayoutConfig::default();
    let layout = Layout::build(&tracks(12), &[], &config);
    assert_eq!(layout.len(), 12);
    let spacing = config.spacing();
    for (i, e) in layout.entries().iter().enumerate() {
        assert_eq!(e.index, i);
        assert!((e.arc_length - i as f64 * spacing).abs() < 1e-9);
        assert!(!e.is_materialized());
    }
    for pair in layout.entries().windows(2) {
        let chord = pair[0].position.distance(pair[1].position);
        assert!(chord > 0.0 && chord <= spacing + 1e-6, "chord {chord}");
    }
}

#[test]
fn item_count_is_capped() {
    let layout = Layout::build(&tracks(20), &[], &LayoutConfig::default());
    assert_eq!(layout.len(), 15);
    assert_eq!(layout.entries()[14].item.rank, Some(15));
}

#[test]
fn anchors_bracket_the_records_and_stay_clamped() {
    let config = LayoutConfig::default();
    let layout = Layout::build(&tracks(8), &[], &config);
    let spacing = config.spacing();
    assert_eq!(layout.head.kind, AnchorKind::Head);
    assert_eq!(layout.tail.kind, AnchorKind::Tail);
    assert!((layout.head.arc_length + 0.8 * spacing).abs() < 1e-9);
    assert!((layout.tail.arc_length - 8.0 * spacing).abs() < 1e-9);
    for anchor in [layout.head, layout.tail] {
        assert_eq!(config.clamp_anchor(anchor.position), anchor.position);
    }
}

#[test]
fn clamp_anchor_pulls_far_points_back() {
    let config = LayoutConfig::default();
    let p = config.clamp_anchor(glam::DVec2::new(-5000.0, 5000.0));
    assert!(p.x > -5000.0 && p.y < 5000.0);
    assert_eq!(config.clamp_anchor(p), p);
}

#[test]
fn missing_palettes_use_default() {
    let given = Palette::solid(Rgb::new(200, 10, 10));
    let layout = Layout::build(&tracks(3), &[given], &LayoutConfig::default());
    assert_eq!(layout.entries()[0].palette, given);
    assert_eq!(layout.entries()[1].palette, Palette::default());
    assert_eq!(layout.entries()[2].palette, Palette::default());
}

#[test]
fn palette_swap_keeps_positions() {
    let mut layout = Layout::build(&tracks(5), &[], &LayoutConfig::default());
    let before: Vec<_> = layout.entries().iter().map(|e| e.position).collect();
    let p = Palette::from_ranked(&[Rgb::WHITE, Rgb::new(1, 2, 3)]);
    assert!(layout.apply_palette(2, p));
    assert!(!layout.apply_palette(5, p));
    let after: Vec<_> = layout.entries().iter().map(|e| e.position).collect();
    assert_eq!(before, after);
    assert_eq!(layout.entries()[2].palette, p);
}

#[test]
fn materialize_yields_each_entry_once() {
    let mut layout = Layout::build(&tracks(3), &[], &LayoutConfig::default());
    assert!(layout.materialize(1).is_some());
    assert!(layout.materialize(1).is_none());
    assert!(layout.materialize(7).is_none());
    assert_eq!(layout.materialized_count(), 1);
    assert!(layout.entries()[1].is_materialized());
    assert!(layout.is_last(2));
    assert!(!layout.is_last(1));
}

#[test]
fn empty_input_builds_empty_layout() {
    let layout = Layout::build(&[], &[], &LayoutConfig::default());
    assert!(layout.is_empty());
    assert_eq!(layout.materialized_count(), 0);
}
