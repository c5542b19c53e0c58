// Host-side tests for the grayscale color model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/color.rs"]
mod color;

use color::*;

#[test]
fn css_output_has_equal_channels() {
    let c = GrayColor {
        gray: 100.4,
        alpha: 0.5,
    };
    assert_eq!(c.css(), "rgba(100, 100, 100, 0.5)");

    let c = GrayColor {
        gray: 300.0,
        alpha: 1.0,
    };
    assert_eq!(c.css(), "rgba(255, 255, 255, 1)");
}

#[test]
fn shifted_clamps_to_displayable_range() {
    let c = GrayColor {
        gray: 240.0,
        alpha: 0.7,
    };
    assert_eq!(c.shifted(50.0, 0.7).gray, 255.0);
    assert_eq!(c.shifted(-300.0, 0.7).gray, 0.0);
}

#[test]
fn base_gray_bands_per_theme() {
    for i in 0..100 {
        let r = i as f32 / 100.0;
        let dark = base_gray(true, r);
        let light = base_gray(false, r);
        assert!(dark >= 130.0 && dark <= 220.0, "dark base: {}", dark);
        assert!(light >= 30.0 && light <= 120.0, "light base: {}", light);
        // dark-theme particles are always brighter than light-theme ones
        assert!(dark > light);
    }
}

#[test]
fn metallic_banding_dark_theme() {
    let base = 200.0;
    assert_eq!(grayscale(base, 1.0, 0.9, true).gray, 240.0);
    assert_eq!(grayscale(base, 1.0, 0.5, true).gray, 200.0);
    assert_eq!(grayscale(base, 1.0, 0.1, true).gray, 160.0);

    // below the cap the boost applies untouched
    assert_eq!(grayscale(130.0, 1.0, 0.9, true).gray, 210.0);
}

#[test]
fn metallic_banding_light_theme() {
    let base = 110.0;
    assert_eq!(grayscale(base, 1.0, 0.9, false).gray, 200.0);
    assert_eq!(grayscale(base, 1.0, 0.5, false).gray, 170.0);
    assert_eq!(grayscale(base, 1.0, 0.1, false).gray, 130.0);
}

#[test]
fn alpha_is_seventy_percent_of_opacity() {
    for opacity in [0.2, 0.5, 0.95] {
        let c = grayscale(100.0, opacity, 0.5, true);
        assert!((c.alpha - opacity * 0.7).abs() < 1e-6);
    }
}

#[test]
fn higher_metallic_never_darkens() {
    for dark_mode in [true, false] {
        for base_step in 0..10 {
            let base = 30.0 + base_step as f32 * 15.0;
            let low = grayscale(base, 0.5, 0.1, dark_mode).gray;
            let mid = grayscale(base, 0.5, 0.5, dark_mode).gray;
            let high = grayscale(base, 0.5, 0.9, dark_mode).gray;
            assert!(mid >= low);
            assert!(high >= mid);
        }
    }
}
