//! DOM event wiring. Every closure is leaked with `forget`; the handlers
//! live for the lifetime of the page.

use crate::dom;
use crate::field::{LiquidField, PointerTracker};
use crate::hover::HoverState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level pointer tracking for the field. Moves anywhere on the
/// page repel particles, not just moves over the canvas.
pub fn wire_field_pointer(
    canvas: &web::HtmlCanvasElement,
    tracker: Rc<RefCell<PointerTracker>>,
) {
    let canvas = canvas.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = dom::pointer_canvas_px(&ev, &canvas);
        tracker.borrow_mut().record_move(x, y, js_sys::Date::now());
    }) as Box<dyn FnMut(web::PointerEvent)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    }
    on_move.forget();
}

/// Resize keeps the backing store at device resolution and rescales the
/// particle base positions into the new dimensions.
pub fn wire_field_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<LiquidField>>) {
    let canvas = canvas.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        field
            .borrow_mut()
            .rescale(canvas.width() as f32, canvas.height() as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

/// Keep a canvas backing store sized to its CSS box on window resize.
/// The GPU surface picks the new size up on the next frame.
pub fn wire_backing_resize(canvas: &web::HtmlCanvasElement) {
    let canvas = canvas.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

/// Hover and touch wiring for the blob canvas. Pointer coordinates are
/// delivered to the shaders in [-1, 1] with +y up.
pub fn wire_blob_pointer(canvas: &web::HtmlCanvasElement, hover: Rc<RefCell<HoverState>>) {
    {
        let canvas_move = canvas.clone();
        let hover_move = hover.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (x, y) = dom::pointer_element_ndc(&ev, &canvas_move);
            hover_move.borrow_mut().set_pointer(x, y);
        }) as Box<dyn FnMut(web::PointerEvent)>);
        _ = canvas
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
        on_move.forget();
    }
    {
        let hover_enter = hover.clone();
        let on_enter = Closure::wrap(Box::new(move |_: web::PointerEvent| {
            hover_enter.borrow_mut().enter();
        }) as Box<dyn FnMut(web::PointerEvent)>);
        _ = canvas
            .add_event_listener_with_callback("pointerenter", on_enter.as_ref().unchecked_ref());
        on_enter.forget();
    }
    {
        let hover_leave = hover.clone();
        let on_leave = Closure::wrap(Box::new(move |_: web::PointerEvent| {
            hover_leave.borrow_mut().leave();
        }) as Box<dyn FnMut(web::PointerEvent)>);
        _ = canvas
            .add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    }
    {
        let hover_start = hover.clone();
        let on_touch_start = Closure::wrap(Box::new(move |_: web::Event| {
            hover_start.borrow_mut().touch_start();
        }) as Box<dyn FnMut(web::Event)>);
        _ = canvas.add_event_listener_with_callback(
            "touchstart",
            on_touch_start.as_ref().unchecked_ref(),
        );
        on_touch_start.forget();
    }
    for name in ["touchend", "touchcancel"] {
        let hover_end = hover.clone();
        let on_touch_end = Closure::wrap(Box::new(move |_: web::Event| {
            hover_end.borrow_mut().touch_end();
        }) as Box<dyn FnMut(web::Event)>);
        _ = canvas.add_event_listener_with_callback(name, on_touch_end.as_ref().unchecked_ref());
        on_touch_end.forget();
    }
}
