//! Grayscale color model for the particle field.
//!
//! The field renders in gray + alpha only. The banding below (three
//! metallic bands, separately tuned per theme) replaced an earlier
//! hue-based palette on purpose; hue must not creep back in.

/// A gray + alpha color, stored numerically so the renderer can derive
/// gradient stops without re-parsing a CSS string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrayColor {
    pub gray: f32,
    pub alpha: f32,
}

impl GrayColor {
    /// Render as a CSS `rgba(...)` string with equal R, G and B channels.
    pub fn css(&self) -> String {
        let g = self.gray.round().clamp(0.0, 255.0) as u32;
        format!("rgba({}, {}, {}, {})", g, g, g, self.alpha)
    }

    /// Same gray shifted by `delta`, clamped to the displayable range.
    pub fn shifted(&self, delta: f32, alpha: f32) -> GrayColor {
        GrayColor {
            gray: (self.gray + delta).clamp(0.0, 255.0),
            alpha,
        }
    }
}

/// Base gray band sampled at particle creation. `r01` is a uniform
/// random in \[0, 1).
pub fn base_gray(dark_mode: bool, r01: f32) -> f32 {
    if dark_mode {
        130.0 + (r01 * 90.0).floor()
    } else {
        30.0 + (r01 * 90.0).floor()
    }
}

/// Theme- and metallic-banded grayscale, computed once at creation.
pub fn grayscale(base: f32, opacity: f32, metallic: f32, dark_mode: bool) -> GrayColor {
    let alpha = opacity * 0.7;
    let gray = if dark_mode {
        if metallic > 0.7 {
            (base + 80.0).min(240.0)
        } else if metallic > 0.3 {
            (base + 40.0).min(200.0)
        } else {
            base.min(160.0)
        }
    } else {
        if metallic > 0.7 {
            (base + 100.0).min(200.0)
        } else if metallic > 0.3 {
            (base + 60.0).min(170.0)
        } else {
            (base + 20.0).min(140.0)
        }
    };
    GrayColor { gray, alpha }
}
