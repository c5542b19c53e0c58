#![cfg(target_arch = "wasm32")]
//! Procedural background animation for the site shell: a 2D liquid
//! particle field on `#liquid-canvas` and a WebGPU metal blob on
//! `#blob-canvas`. Either canvas may be absent; whatever is present is
//! driven from a single requestAnimationFrame loop.

use crate::field::{FieldParams, LiquidField, PointerTracker};
use crate::hover::HoverState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod blob;
mod color;
mod constants;
mod dom;
mod events;
mod field;
mod frame;
mod hover;
mod mesh;
mod noise;
mod paint;
mod style;
mod theme;

const FIELD_CANVAS_ID: &str = "liquid-canvas";
const BLOB_CANVAS_ID: &str = "blob-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("liquid-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let dark_mode = theme::is_dark_mode();

    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    let hover = Rc::new(RefCell::new(HoverState::new()));

    let mut field = None;
    let mut painter = None;
    if let Some(canvas) = dom::canvas_by_id(&document, FIELD_CANVAS_ID) {
        dom::sync_canvas_backing_size(&canvas);
        // No 2D context means no simulation either; the field only
        // exists alongside a working painter.
        if let Some(p) = paint::Painter::new(canvas.clone()) {
            let params = match canvas.get_attribute("data-field").as_deref() {
                Some("gallery") => FieldParams::gallery(),
                _ => FieldParams::home(),
            };
            let seed = js_sys::Date::now() as u64;
            let f = Rc::new(RefCell::new(LiquidField::new(
                params,
                canvas.width() as f32,
                canvas.height() as f32,
                dark_mode,
                seed,
            )));
            log::info!(
                "[field] {} particles over {}x{}",
                params.particle_count,
                canvas.width(),
                canvas.height()
            );
            events::wire_field_pointer(&canvas, tracker.clone());
            events::wire_field_resize(&canvas, f.clone());
            painter = Some(p);
            field = Some(f);
        }
    }

    let mut blob = None;
    let mut blob_canvas = None;
    if let Some(canvas) = dom::canvas_by_id(&document, BLOB_CANVAS_ID) {
        dom::sync_canvas_backing_size(&canvas);
        events::wire_backing_resize(&canvas);
        events::wire_blob_pointer(&canvas, hover.clone());
        blob = frame::init_gpu(&canvas).await;
        blob_canvas = Some(canvas);
    }

    if field.is_none() && blob.is_none() {
        log::warn!("no animation canvas on this page, nothing to do");
        return Ok(());
    }

    let audio = audio::init();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        painter,
        tracker,
        blob,
        blob_canvas,
        hover,
        audio,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
