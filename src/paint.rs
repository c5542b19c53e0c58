//! Frame renderer: paints the particle field onto a 2D canvas, themed,
//! with a partial-opacity background overwrite for the trailing look.

use crate::constants::*;
use crate::field::{LiquidField, LiquidPoint};
use crate::style::{self, LinePath, ShapeKind};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

fn rgba(gray: f32, alpha: f32) -> String {
    let g = gray.round().clamp(0.0, 255.0) as u32;
    format!("rgba({}, {}, {}, {})", g, g, g, alpha)
}

impl Painter {
    /// Acquire the 2D context. `None` disables the field entirely; the
    /// page keeps working without a background.
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => match ctx.dyn_into::<web::CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => {
                    log::warn!("2d context has unexpected type, field disabled");
                    return None;
                }
            },
            _ => {
                log::warn!("2d context unavailable, field disabled");
                return None;
            }
        };
        Some(Painter { canvas, ctx })
    }

    /// Paint one frame: trail overwrite, connection pass, particle pass.
    /// `dark_mode` is the live theme; stored particle colors are frozen
    /// but the trail and emphasis tints follow the current theme.
    pub fn draw(&self, field: &LiquidField, dark_mode: bool) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        let bg_gray = if dark_mode {
            TRAIL_GRAY_DARK
        } else {
            TRAIL_GRAY_LIGHT
        };
        self.ctx
            .set_fill_style_str(&rgba(bg_gray as f32, TRAIL_ALPHA));
        self.ctx.fill_rect(0.0, 0.0, w, h);

        for p in &field.points {
            for &ci in &p.connections {
                // Bounds check: a stale index draws nothing rather than
                // panicking mid-frame.
                if let Some(other) = field.points.get(ci) {
                    self.draw_connection(p, other, field.time, dark_mode);
                }
            }
        }

        for p in &field.points {
            self.draw_point(p, field.time, dark_mode);
        }
    }

    fn draw_connection(&self, a: &LiquidPoint, b: &LiquidPoint, time: f32, dark_mode: bool) {
        let Some(s) = style::connection_style(a, b, time, dark_mode) else {
            return;
        };

        let gradient = self.ctx.create_linear_gradient(
            a.x as f64,
            a.y as f64,
            b.x as f64,
            b.y as f64,
        );
        for stop in &s.stops {
            _ = gradient.add_color_stop(stop.t.clamp(0.0, 1.0), &rgba(stop.gray, stop.alpha));
        }
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(s.thickness as f64);
        self.trace_path(a, b, s.path);
        self.ctx.stroke();

        if let Some(glow) = s.glow {
            self.ctx.save();
            self.ctx
                .set_stroke_style_str(&rgba(glow.gray, glow.alpha));
            self.ctx.set_line_width(glow.thickness as f64);
            _ = self.ctx.set_global_composite_operation("lighter");
            self.trace_path(a, b, s.path);
            self.ctx.stroke();
            self.ctx.restore();
        }
    }

    fn trace_path(&self, a: &LiquidPoint, b: &LiquidPoint, path: LinePath) {
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        match path {
            LinePath::Quadratic { cpx, cpy } => {
                self.ctx
                    .quadratic_curve_to(cpx as f64, cpy as f64, b.x as f64, b.y as f64);
            }
            LinePath::Direct => {
                self.ctx.line_to(b.x as f64, b.y as f64);
            }
        }
    }

    fn draw_point(&self, p: &LiquidPoint, time: f32, dark_mode: bool) {
        self.ctx.save();

        let morphed = p.size * style::size_pulse(time, p.morph_phase);
        let shift = style::brightness_shift(time, p.morph_phase);
        let gray = p.color.gray;
        let alpha = p.color.alpha;

        let glow_radius = morphed * (2.0 + p.metallic);
        match self.ctx.create_radial_gradient(
            p.x as f64,
            p.y as f64,
            0.0,
            p.x as f64,
            p.y as f64,
            glow_radius as f64,
        ) {
            Ok(gradient) => {
                _ = gradient.add_color_stop(0.0, &rgba(gray + shift, alpha));
                _ = gradient.add_color_stop(0.3, &rgba(gray + shift * 0.7, alpha * 0.6));
                _ = gradient.add_color_stop(1.0, &rgba(gray, 0.0));
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            // degenerate radius: fall back to the cached flat color
            Err(_) => self.ctx.set_fill_style_str(&p.css),
        }
        match style::shape_kind(p.metallic) {
            ShapeKind::Blob { sides } => self.fill_blob_polygon(p, time, morphed, sides),
            ShapeKind::Circle => {
                self.ctx.begin_path();
                _ = self.ctx.arc(
                    p.x as f64,
                    p.y as f64,
                    morphed as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                self.ctx.fill();
            }
        }

        if let Some(hl) = style::highlight(p, time, morphed) {
            let hl_gray = if dark_mode { 255.0 } else { 20.0 };
            if let Ok(gradient) = self.ctx.create_radial_gradient(
                hl.x as f64,
                hl.y as f64,
                0.0,
                hl.x as f64,
                hl.y as f64,
                hl.size as f64,
            ) {
                _ = gradient.add_color_stop(0.0, &rgba(hl_gray, hl.alpha));
                _ = gradient.add_color_stop(1.0, &rgba(hl_gray, 0.0));
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                self.ctx.begin_path();
                _ = self.ctx.arc(
                    hl.x as f64,
                    hl.y as f64,
                    hl.size as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                self.ctx.fill();
            }
        }

        self.ctx.restore();
    }

    /// Distorted polygon with quadratic-curve smoothing between vertices.
    fn fill_blob_polygon(&self, p: &LiquidPoint, time: f32, morphed: f32, sides: usize) {
        self.ctx.begin_path();
        let angle_step = std::f32::consts::TAU / sides as f32;
        for i in 0..sides {
            let angle = i as f32 * angle_step + time * p.morph_speed + p.morph_phase;
            let radial = style::blob_radius_at(angle, time, morphed, p.distort_strength);
            let x = p.x + angle.cos() * radial;
            let y = p.y + angle.sin() * radial;
            if i == 0 {
                self.ctx.move_to(x as f64, y as f64);
            } else {
                let prev_angle = (i as f32 - 1.0) * angle_step + time * p.morph_speed + p.morph_phase;
                let cp_dist = radial * 0.55;
                let cpx = p.x + (prev_angle + angle_step * 0.5).cos() * cp_dist;
                let cpy = p.y + (prev_angle + angle_step * 0.5).sin() * cp_dist;
                self.ctx
                    .quadratic_curve_to(cpx as f64, cpy as f64, x as f64, y as f64);
            }
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}
