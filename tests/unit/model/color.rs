use super::*;

fn assert_hsl(rgb: [u8; 3], h: f64, s: f64, l: f64) {
    let hsl = Rgb8::from(rgb).to_hsl();
    assert!((hsl.h - h).abs() < 1e-9, "{rgb:?} hue {}", hsl.h);
    assert!((hsl.s - s).abs() < 1e-9, "{rgb:?} saturation {}", hsl.s);
    assert!((hsl.l - l).abs() < 1e-9, "{rgb:?} lightness {}", hsl.l);
}

#[test]
fn primaries_map_to_expected_hues() {
    assert_hsl([255, 0, 0], 0.0, 100.0, 50.0);
    assert_hsl([0, 255, 0], 120.0, 100.0, 50.0);
    assert_hsl([0, 0, 255], 240.0, 100.0, 50.0);
    assert_hsl([255, 0, 255], 300.0, 100.0, 50.0);
}

#[test]
fn greys_have_no_hue_or_saturation() {
    assert_hsl([0, 0, 0], 0.0, 0.0, 0.0);
    assert_hsl([255, 255, 255], 0.0, 0.0, 100.0);
    let grey = Rgb8::new(128, 128, 128).to_hsl();
    assert_eq!(grey.h, 0.0);
    assert_eq!(grey.s, 0.0);
}

#[test]
fn hue_is_always_below_a_full_turn() {
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(51) {
            for b in (0..=255).step_by(51) {
                let hsl = Rgb8::new(r, g, b).to_hsl();
                assert!((0.0..360.0).contains(&hsl.h));
                assert!((0.0..=100.0).contains(&hsl.s));
                assert!((0.0..=100.0).contains(&hsl.l));
            }
        }
    }
}

#[test]
fn hsl_back_to_rgb_recovers_palette_colors() {
    for rgb in [[255, 0, 0], [0, 0, 255], [12, 200, 99], [240, 240, 10], [80, 80, 80]] {
        let c = Rgb8::from(rgb);
        assert_eq!(c.to_hsl().to_rgb8(), c);
    }
}

#[test]
fn css_string_matches_canvas_syntax() {
    assert_eq!(Rgb8::new(1, 22, 255).to_string(), "rgb(1, 22, 255)");
}

#[test]
fn deserializes_from_triple() {
    let c: Rgb8 = serde_json::from_str("[10, 20, 30]").unwrap();
    assert_eq!(c, Rgb8::new(10, 20, 30));
    assert_eq!(serde_json::to_string(&c).unwrap(), "[10,20,30]");
}
