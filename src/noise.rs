//! Hand-composed sinusoidal field noise for the 2D liquid simulation.
//!
//! This is deliberately not gradient/simplex noise: the field's visual
//! signature comes from domain-warped sine/cosine products blended by a
//! per-particle distortion weight. The blob mesh uses genuine simplex
//! noise in its shaders; the two functions must stay distinct.

/// A 3-vector displacement sampled from the layered noise field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    pub nx: f32,
    pub ny: f32,
    pub nz: f32,
}

/// Sample the two-layer liquid noise field.
///
/// `x`, `y`, `z` are the particle's scrolling noise offsets (already
/// scaled into field space), `time` is the field's simulated time and
/// `distortion` in \[0, 1\] blends the slow base layer toward the faster
/// second layer.
pub fn liquid_noise(x: f32, y: f32, z: f32, time: f32, distortion: f32) -> Displacement {
    // Layer 1: slow, large-scale motion
    let nx1 = (x * 0.02 + time * 0.1).sin() * (y * 0.02).cos() * (z * 0.03).sin();
    let ny1 = (x * 0.03).cos() * (y * 0.03 + time * 0.05).sin() * (z * 0.01).cos();
    let nz1 = (x * 0.01).sin() * (y * 0.01).cos() * (z * 0.03 + time * 0.08).sin();

    // Layer 2: higher frequencies, counter-phased
    let nx2 = (x * 0.05 + time * 0.2).sin() * (y * 0.04 - time * 0.15).cos();
    let ny2 = (x * 0.04 - time * 0.25).cos() * (y * 0.06 + time * 0.1).sin();
    let nz2 = (x * 0.03 + time * 0.1).sin() * (y * 0.02 - time * 0.05).cos();

    Displacement {
        nx: nx1 * (1.0 - distortion) + nx2 * distortion,
        ny: ny1 * (1.0 - distortion) + ny2 * distortion,
        nz: nz1 * (1.0 - distortion) + nz2 * distortion,
    }
}
