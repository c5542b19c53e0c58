//! Pure styling math for the frame renderer: everything the painter
//! needs per connection and per particle, computed without touching the
//! canvas API so it can be tested host-side.

use crate::constants::*;
use crate::field::LiquidPoint;
use smallvec::SmallVec;

/// One stop of a grayscale linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub t: f32,
    pub gray: f32,
    pub alpha: f32,
}

/// Stroke geometry for a connection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinePath {
    Direct,
    Quadratic { cpx: f32, cpy: f32 },
}

/// Additive-blended emphasis pass for highly metallic, close pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPass {
    pub gray: f32,
    pub alpha: f32,
    pub thickness: f32,
}

/// Everything needed to stroke one connection.
#[derive(Clone, Debug)]
pub struct ConnectionStyle {
    pub thickness: f32,
    pub path: LinePath,
    pub stops: SmallVec<[GradientStop; 3]>,
    pub glow: Option<GlowPass>,
}

/// Compute the stroke style for the directed link a -> b, or `None` when
/// the pair is beyond the hard draw cutoff or fades to nothing.
pub fn connection_style(
    a: &LiquidPoint,
    b: &LiquidPoint,
    time: f32,
    dark_mode: bool,
) -> Option<ConnectionStyle> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance > MAX_DRAW_DISTANCE_PX {
        return None;
    }

    let intensity_by_dist = 1.0 - distance / MAX_DRAW_DISTANCE_PX;
    let phase_alignment = ((a.morph_phase - b.morph_phase) / 2.0).sin().abs();
    let metallic_factor = (a.metallic + b.metallic) / 2.0;
    let intensity =
        intensity_by_dist * (0.5 + phase_alignment * 0.5) * (0.7 + metallic_factor * 0.3);
    if intensity <= 0.0 {
        return None;
    }

    let pulse = 0.7 + (time * 2.0 + (a.morph_phase + b.morph_phase) / 2.0).sin() * 0.3;
    let line_opacity = (intensity * 0.6 * pulse).min(0.9);

    let gray_a = a.color.gray;
    let gray_b = b.color.gray;
    let mut stops: SmallVec<[GradientStop; 3]> = SmallVec::new();
    stops.push(GradientStop {
        t: 0.0,
        gray: gray_a,
        alpha: line_opacity,
    });
    if metallic_factor > 0.5 {
        let mid_t = 0.4 + (time + a.morph_phase).sin() * 0.1;
        let boost = intensity * metallic_factor;
        let mid_gray = if dark_mode {
            ((gray_a + gray_b) / 2.0 + 40.0 * boost).min(255.0)
        } else {
            ((gray_a + gray_b) / 2.0 + 20.0 * boost).min(200.0)
        };
        stops.push(GradientStop {
            t: mid_t,
            gray: mid_gray,
            alpha: (line_opacity * 1.2).min(1.0),
        });
    }
    stops.push(GradientStop {
        t: 1.0,
        gray: gray_b,
        alpha: line_opacity,
    });

    let base_thickness = a.size.min(b.size) * 0.3;
    let dynamic = base_thickness * intensity * (0.5 + metallic_factor * 1.0);
    let thickness = (dynamic * pulse).min(MAX_LINE_THICKNESS_PX);

    let path = if metallic_factor > CURVE_METALLIC_THRESHOLD
        || distance > CURVE_DISTANCE_THRESHOLD_PX
    {
        // Control point offset perpendicular to the chord by a
        // time-varying turbulence term
        let mid_x = (a.x + b.x) / 2.0;
        let mid_y = (a.y + b.y) / 2.0;
        let perp_x = -(b.y - a.y);
        let perp_y = b.x - a.x;
        let perp_len = (perp_x * perp_x + perp_y * perp_y).sqrt();
        if perp_len > 1e-6 {
            let turbulence = (time * 0.5 + (a.noise_offset_x + b.noise_offset_x) / 2.0).sin()
                * TURBULENCE_AMPLITUDE_PX;
            LinePath::Quadratic {
                cpx: mid_x + perp_x / perp_len * turbulence,
                cpy: mid_y + perp_y / perp_len * turbulence,
            }
        } else {
            LinePath::Direct
        }
    } else {
        LinePath::Direct
    };

    let glow = if metallic_factor > GLOW_METALLIC_THRESHOLD && distance < GLOW_DISTANCE_MAX_PX {
        let gray = if dark_mode {
            ((gray_a + gray_b) / 2.0 + 50.0).min(255.0)
        } else {
            ((gray_a + gray_b) / 2.0 - 30.0).max(20.0)
        };
        Some(GlowPass {
            gray,
            alpha: line_opacity * 0.4,
            thickness: thickness * 3.0,
        })
    } else {
        None
    };

    Some(ConnectionStyle {
        thickness,
        path,
        stops,
        glow,
    })
}

/// Shape pulsing shared by the particle pass.
pub fn size_pulse(time: f32, morph_phase: f32) -> f32 {
    (time * 2.0 + morph_phase).sin() * 0.2 + 0.8
}

/// Slow brightness oscillation layered onto the particle glow.
pub fn brightness_shift(time: f32, morph_phase: f32) -> f32 {
    (time * 0.5 + morph_phase).sin() * 15.0
}

/// High-metallic particles render as distorted polygons, the rest as
/// plain circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Blob { sides: usize },
    Circle,
}

pub fn shape_kind(metallic: f32) -> ShapeKind {
    if metallic > 0.7 {
        ShapeKind::Blob {
            sides: 6 + (metallic * 6.0).floor() as usize,
        }
    } else {
        ShapeKind::Circle
    }
}

/// Radial distance of a blob vertex at `angle`, before centering.
pub fn blob_radius_at(angle: f32, time: f32, morphed_size: f32, distort_strength: f32) -> f32 {
    morphed_size * (0.7 + (angle * 3.0 + time).sin() * 0.3 * distort_strength)
}

/// Specular-style orbiting highlight for metallic particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub alpha: f32,
}

pub fn highlight(p: &LiquidPoint, time: f32, morphed_size: f32) -> Option<Highlight> {
    if p.metallic <= 0.3 {
        return None;
    }
    let angle = time * 0.3 + p.morph_phase;
    Some(Highlight {
        x: p.x + angle.cos() * morphed_size * 0.4,
        y: p.y + angle.sin() * morphed_size * 0.4,
        size: morphed_size * 0.3 * p.metallic,
        alpha: 0.7 * p.metallic,
    })
}
