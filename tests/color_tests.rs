use rand::rngs::StdRng;
use rand::SeedableRng;
use vinyl_core::constants::ALPHA_THRESHOLD;
use vinyl_core::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn rgba(pixels: &[Rgb], alpha: u8) -> Vec<u8> {
    pixels.iter().flat_map(|p| [p.r, p.g, p.b, alpha]).collect()
}

#[test]
fn all_black_image_yields_black_pair() {
    let pixels = vec![Rgb::BLACK; 64];
    let colors = find_dominant_colors(&pixels, &KMeansParams::default(), &mut rng());
    assert_eq!(colors, vec![Rgb::BLACK, Rgb::BLACK]);
}

#[test]
fn empty_pixels_fall_back_to_default_swatch() {
    let params = KMeansParams {
        top_n: 4,
        ..KMeansParams::default()
    };
    let colors = find_dominant_colors(&[], &params, &mut rng());
    assert_eq!(colors, vec![DEFAULT_SWATCH; 4]);
}

#[test]
fn most_populous_cluster_ranks_first() {
    let red = Rgb::new(220, 20, 20);
    let blue = Rgb::new(20, 20, 220);
    // every fourth pixel is blue: 30 red, 10 blue
    let pixels: Vec<Rgb> = (0..40).map(|i| if i % 4 == 3 { blue } else { red }).collect();
    for seed in 0..8 {
        let mut r = StdRng::seed_from_u64(seed);
        let colors = find_dominant_colors(&pixels, &KMeansParams::default(), &mut r);
        assert_eq!(colors, vec![red, blue], "seed {seed}");
    }
}

#[test]
fn transparent_pixels_are_ignored() {
    let mut buf = rgba(&[Rgb::new(255, 0, 0); 4], 255);
    buf.extend(rgba(&[Rgb::new(0, 255, 0); 8], ALPHA_THRESHOLD));
    let pixels = opaque_pixels(&buf, ALPHA_THRESHOLD).unwrap();
    assert_eq!(pixels.len(), 4);
    assert!(pixels.iter().all(|p| *p == Rgb::new(255, 0, 0)));
}

#[test]
fn ragged_buffer_is_an_error() {
    let err = opaque_pixels(&[1, 2, 3, 4, 5], 16).unwrap_err();
    assert!(matches!(err, CoreError::RaggedPixels(5)));
    let palette = palette_from_rgba(&[1, 2, 3], &KMeansParams::default(), &mut rng());
    assert_eq!(palette, Palette::default());
}

#[test]
fn fully_transparent_image_gives_default_palette() {
    let buf = rgba(&[Rgb::WHITE; 16], 0);
    let palette = palette_from_rgba(&buf, &KMeansParams::default(), &mut rng());
    assert_eq!(palette, Palette::solid(DEFAULT_SWATCH));
}

#[test]
fn palette_from_ranked_repeats_single_color() {
    let c = Rgb::new(10, 20, 30);
    assert_eq!(Palette::from_ranked(&[c]), Palette::solid(c));
    assert_eq!(Palette::from_ranked(&[]), Palette::default());
    let p = Palette::from_ranked(&[c, Rgb::WHITE, Rgb::BLACK]);
    assert_eq!(p.colors(), [c, Rgb::WHITE]);
}

#[test]
fn text_color_contrasts_with_fill() {
    assert_eq!(contrasting_text_color(Rgb::BLACK), Rgb::WHITE);
    assert_eq!(contrasting_text_color(Rgb::WHITE), Rgb::BLACK);
    assert_eq!(contrasting_text_color(Rgb::new(255, 255, 0)), Rgb::BLACK);
    assert_eq!(contrasting_text_color(Rgb::new(0, 0, 180)), Rgb::WHITE);
}

#[test]
fn rgb_displays_as_css() {
    assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
}

#[test]
fn css_alpha_is_clamped() {
    assert_eq!(Rgb::new(1, 2, 3).to_css_alpha(2.0), "rgba(1, 2, 3, 1.000)");
    assert_eq!(Rgb::new(1, 2, 3).to_css_alpha(0.3), "rgba(1, 2, 3, 0.300)");
}

#[test]
fn palette_cache_memoizes_by_url() {
    let mut cache = PaletteCache::new();
    assert!(cache.is_empty());
    let p = Palette::solid(Rgb::new(9, 9, 9));
    cache.insert("https://img/a.jpg", p);
    assert_eq!(cache.get("https://img/a.jpg"), Some(p));
    assert_eq!(cache.get("https://img/b.jpg"), None);
    assert_eq!(cache.len(), 1);
}
