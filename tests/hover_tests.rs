// Host-side tests for the blob hover state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/hover.rs"]
mod hover;

use constants::*;
use hover::HoverState;

#[test]
fn intensity_ramps_while_hovering() {
    let mut h = HoverState::new();
    h.enter();
    for k in 1..=5 {
        h.step();
        assert!((h.intensity - k as f32 * HOVER_RAMP_PER_FRAME).abs() < 1e-6);
    }
}

#[test]
fn intensity_caps_at_one() {
    let mut h = HoverState::new();
    h.enter();
    for _ in 0..100 {
        h.step();
    }
    assert_eq!(h.intensity, 1.0);
}

#[test]
fn intensity_decays_after_leave_and_floors_at_zero() {
    let mut h = HoverState::new();
    h.enter();
    for _ in 0..100 {
        h.step();
    }
    h.leave();
    h.step();
    assert!((h.intensity - (1.0 - HOVER_DECAY_PER_FRAME)).abs() < 1e-6);
    for _ in 0..100 {
        h.step();
    }
    assert_eq!(h.intensity, 0.0);
}

#[test]
fn ramp_is_faster_than_decay() {
    // the settle-out is intentionally longer than the ramp-in
    assert!(HOVER_RAMP_PER_FRAME > HOVER_DECAY_PER_FRAME);

    let mut h = HoverState::new();
    h.enter();
    let mut frames_up = 0;
    while h.intensity < 1.0 {
        h.step();
        frames_up += 1;
    }
    h.leave();
    let mut frames_down = 0;
    while h.intensity > 0.0 {
        h.step();
        frames_down += 1;
    }
    assert!(frames_down > frames_up);
}

#[test]
fn last_active_only_follows_while_hovering() {
    let mut h = HoverState::new();

    h.set_pointer(0.5, 0.5);
    assert_eq!(h.mouse, [0.5, 0.5]);
    assert_eq!(h.last_active, [0.0, 0.0]);

    h.enter();
    h.set_pointer(-0.25, 0.75);
    assert_eq!(h.last_active, [-0.25, 0.75]);

    h.leave();
    h.set_pointer(0.9, -0.9);
    assert_eq!(h.mouse, [0.9, -0.9]);
    // the engaged position persists after the pointer leaves
    assert_eq!(h.last_active, [-0.25, 0.75]);
}

#[test]
fn touch_flags_toggle() {
    let mut h = HoverState::new();
    assert!(!h.touch_active);
    h.touch_start();
    assert!(h.touch_active);
    h.touch_end();
    assert!(!h.touch_active);
}

#[test]
fn reentry_resumes_from_decayed_intensity() {
    let mut h = HoverState::new();
    h.enter();
    for _ in 0..10 {
        h.step();
    }
    h.leave();
    for _ in 0..5 {
        h.step();
    }
    let resumed_from = h.intensity;
    assert!(resumed_from > 0.0);
    h.enter();
    h.step();
    assert!((h.intensity - (resumed_from + HOVER_RAMP_PER_FRAME)).abs() < 1e-6);
}
