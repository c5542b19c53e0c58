// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(TIME_STEP > 0.0 && TIME_STEP < 0.1);
    assert!(NOISE_OFFSET_STEP > 0.0);
    assert!(NOISE_DISPLACEMENT_PX > 0.0);
    assert!(WRAP_MARGIN_PX > 0.0);
    assert!(Z_WRAP_LIMIT > 0.0);
    assert!(POINTER_RADIUS_PX > 0.0);
    assert!(REPEL_FORCE > 0.0 && REPEL_FORCE <= 1.0);
    assert!(POINTER_IDLE_TIMEOUT_MS > 0.0);
    assert!(CONNECTION_CLOCK_HZ > 0.0);
    assert!(CONNECTION_REBUILD_MODULO > 0);
    assert!(FLOW_AFFINITY_DISCOUNT > 0.0 && FLOW_AFFINITY_DISCOUNT < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_thresholds_are_ordered() {
    // hard cutoff is the outermost distance gate
    assert!(CURVE_DISTANCE_THRESHOLD_PX < MAX_DRAW_DISTANCE_PX);
    assert!(GLOW_DISTANCE_MAX_PX < CURVE_DISTANCE_THRESHOLD_PX);

    // glow demands more metal than curving does
    assert!(GLOW_METALLIC_THRESHOLD > CURVE_METALLIC_THRESHOLD);

    assert!(MAX_LINE_THICKNESS_PX > 0.0);
    assert!(TURBULENCE_AMPLITUDE_PX > 0.0);
    assert!(TRAIL_ALPHA > 0.0 && TRAIL_ALPHA < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_ramp_outpaces_decay() {
    assert!(HOVER_RAMP_PER_FRAME > 0.0 && HOVER_RAMP_PER_FRAME <= 1.0);
    assert!(HOVER_DECAY_PER_FRAME > 0.0 && HOVER_DECAY_PER_FRAME <= 1.0);
    assert!(HOVER_RAMP_PER_FRAME > HOVER_DECAY_PER_FRAME);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn blob_constants_are_sane() {
    assert!(BLOB_RADIUS > 0.0);
    assert!(BLOB_SUBDIVISIONS >= 1);
    // camera must sit outside the undeformed sphere
    assert!(BLOB_CAMERA_Z > BLOB_RADIUS);
    assert!(BLOB_FOV_DEGREES > 0.0 && BLOB_FOV_DEGREES < 180.0);
    assert!(BLOB_NOISE_STRENGTH > 0.0);
    assert!(BLOB_FLOW_SPEED > 0.0);
    assert!(BLOB_GLOW_INTENSITY > 0.0);
    assert!(SHIMMER_AMOUNT > 0.0 && SHIMMER_AMOUNT < 1.0);
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
}
