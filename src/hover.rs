//! Hover state for the blob: an asymmetric ramp/decay intensity scalar
//! plus the "last engaged pointer" memory that keeps deformation and
//! color bleed alive after the pointer leaves.

use crate::constants::{HOVER_DECAY_PER_FRAME, HOVER_RAMP_PER_FRAME};

#[derive(Clone, Copy, Debug, Default)]
pub struct HoverState {
    /// 0..=1, ramps while hovered, decays (slower) after leave.
    pub intensity: f32,
    pub hovering: bool,
    pub touch_active: bool,
    /// Live pointer position in NDC (\[-1, 1\] both axes).
    pub mouse: [f32; 2],
    /// Pointer position last recorded while hovering; persists after the
    /// pointer leaves the surface.
    pub last_active: [f32; 2],
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move in NDC. The last-active position only
    /// follows the pointer while it is over the surface.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.mouse = [x, y];
        if self.hovering {
            self.last_active = [x, y];
        }
    }

    pub fn enter(&mut self) {
        self.hovering = true;
    }

    pub fn leave(&mut self) {
        self.hovering = false;
    }

    pub fn touch_start(&mut self) {
        self.touch_active = true;
    }

    pub fn touch_end(&mut self) {
        self.touch_active = false;
    }

    /// Advance one frame: +0.05 toward 1 while hovered, -0.03 toward 0
    /// after leave. The asymmetry is intentional.
    pub fn step(&mut self) {
        if self.hovering {
            self.intensity = (self.intensity + HOVER_RAMP_PER_FRAME).min(1.0);
        } else {
            self.intensity = (self.intensity - HOVER_DECAY_PER_FRAME).max(0.0);
        }
    }
}
