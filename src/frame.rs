//! Per-frame driver: advances the particle field and the blob from one
//! requestAnimationFrame callback, sharing interaction state with the
//! event closures through `Rc<RefCell<...>>`.

use crate::audio::AmbientAudio;
use crate::blob::BlobState;
use crate::field::{LiquidField, PointerTracker};
use crate::hover::HoverState;
use crate::paint::Painter;
use crate::theme;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// How strongly ambient audio energy leans on the blob's hover ramp.
const AMBIENT_HOVER_GAIN: f32 = 0.05;

pub struct FrameContext<'a> {
    pub field: Option<Rc<RefCell<LiquidField>>>,
    pub painter: Option<Painter>,
    pub tracker: Rc<RefCell<PointerTracker>>,

    pub blob: Option<BlobState<'a>>,
    pub blob_canvas: Option<web::HtmlCanvasElement>,
    pub hover: Rc<RefCell<HoverState>>,

    pub audio: Option<AmbientAudio>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let pointer = self.tracker.borrow().sample(js_sys::Date::now());

        // The live theme drives the trail and blob palettes every frame;
        // particle colors stay as seeded.
        let dark_mode = theme::is_dark_mode();

        // The field only steps when it can also be drawn; without a 2D
        // context the simulation stays idle.
        if let (Some(field), Some(painter)) = (&self.field, &self.painter) {
            let mut field = field.borrow_mut();
            field.step(pointer);
            painter.draw(&field, dark_mode);
        }

        self.hover.borrow_mut().step();
        if let Some(audio) = &mut self.audio {
            let ambient = audio.intensity();
            if ambient > 0.0 {
                let mut hover = self.hover.borrow_mut();
                hover.intensity = (hover.intensity + ambient * AMBIENT_HOVER_GAIN).min(1.0);
            }
        }

        if let Some(blob) = &mut self.blob {
            if let Some(canvas) = &self.blob_canvas {
                blob.resize_if_needed(canvas.width(), canvas.height());
            }
            let hover = *self.hover.borrow();
            if let Err(e) = blob.render(dt_sec, &hover, dark_mode) {
                match e {
                    wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                        if let Some(canvas) = &self.blob_canvas {
                            blob.resize_if_needed(canvas.width(), canvas.height());
                        }
                    }
                    other => log::error!("render error: {:?}", other),
                }
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<BlobState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match BlobState::new(leaked_canvas).await {
        Ok(b) => Some(b),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
