//! DOM wiring: bootstraps the engine and owns every trigger source.
//!
//! Three independent triggers feed one single-threaded pipeline: input events
//! (irregular), the per-sample replay timers (one outstanding [`Timeout`] per
//! rendered sample), and the animation-frame fade tick. Live and replayed
//! samples both enter through [`inject`], so the rest of the engine never
//! distinguishes the two.
//!
//! Every listener closure is `forget()`-ed: the toy runs for the page
//! lifetime and nothing is ever unhooked, so leaking the closures is the
//! intended ownership model.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use crate::engine::Engine;
use crate::input::{self, PointerSample};

/// Canvas element id in `static/index.html`.
const CANVAS_ID: &str = "kaleido";

/// Clear button element id.
const CLEAR_BUTTON_ID: &str = "clear";

/// Shared engine handle; every closure holds a clone.
type Shared = Rc<RefCell<Engine>>;

/// Entry point, invoked by the WASM loader once the module is instantiated.
///
/// # Errors
///
/// Returns `Err` if the expected DOM elements are missing or a browser call
/// fails during setup.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("canvas not found")?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()?;

    // Device pixel ratio is read once here; resizes keep the startup value.
    let dpr = window.device_pixel_ratio();
    let width = window.inner_width()?.as_f64().ok_or("inner_width not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("inner_height not a number")?;

    let mut engine = Engine::new(canvas.clone(), ctx);
    engine.set_viewport(width, height, dpr)?;
    let engine: Shared = Rc::new(RefCell::new(engine));
    log::info!("kaleido started: {width}x{height} css px at dpr {dpr}");

    wire_mouse(&window, &engine)?;
    wire_touch(&canvas, &engine)?;
    wire_clear(&document, &engine)?;
    wire_resize(&window, &engine)?;
    start_fade_loop(&window, &engine)?;
    Ok(())
}

/// The single entry point for both live and replayed samples.
///
/// A surviving sample is drawn and then re-queued unchanged after the replay
/// delay. A stale sample is dropped here and never re-queued, so after a
/// clear the feedback stream drains within one delay interval — staleness
/// filtering substitutes for timer cancellation.
fn inject(engine: &Shared, sample: PointerSample) {
    let (dots, delay_ms) = {
        let eng = engine.borrow();
        match eng.core.process(&sample) {
            Some(dots) => (dots, eng.core.config.effective_delay_ms()),
            None => return,
        }
    };
    if let Err(err) = engine.borrow().draw(&dots) {
        log::warn!("draw failed: {err:?}");
    }
    let engine_for_replay = Rc::clone(engine);
    Timeout::new(delay_ms, move || inject(&engine_for_replay, sample)).forget();
}

fn wire_mouse(window: &Window, engine: &Shared) -> Result<(), JsValue> {
    let engine_for_cb = Rc::clone(engine);
    let closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
        let sample = {
            let generation = engine_for_cb.borrow().core.generation;
            input::sample_from_mouse(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                ev.buttons(),
                generation,
            )
        };
        if let Some(sample) = sample {
            inject(&engine_for_cb, sample);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_touch(canvas: &HtmlCanvasElement, engine: &Shared) -> Result<(), JsValue> {
    let engine_for_cb = Rc::clone(engine);
    let closure = Closure::wrap(Box::new(move |ev: TouchEvent| {
        // Keep the page from scrolling or zooming while drawing.
        ev.prevent_default();
        let touches = ev.touches();
        let mut points = Vec::new();
        for i in 0..touches.length() {
            if let Some(touch) = touches.item(i) {
                points.push((f64::from(touch.client_x()), f64::from(touch.client_y())));
            }
        }
        let samples = {
            let generation = engine_for_cb.borrow().core.generation;
            input::samples_from_touches(&points, generation)
        };
        for sample in samples {
            inject(&engine_for_cb, sample);
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_clear(document: &Document, engine: &Shared) -> Result<(), JsValue> {
    let button = document
        .get_element_by_id(CLEAR_BUTTON_ID)
        .ok_or("clear button not found")?;
    let engine_for_cb = Rc::clone(engine);
    let closure = Closure::wrap(Box::new(move || {
        if let Err(err) = engine_for_cb.borrow_mut().clear() {
            log::warn!("clear failed: {err:?}");
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_resize(window: &Window, engine: &Shared) -> Result<(), JsValue> {
    let engine_for_cb = Rc::clone(engine);
    let window_for_cb = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Err(err) = resize_to_window(&window_for_cb, &engine_for_cb) {
            log::warn!("resize failed: {err:?}");
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn resize_to_window(window: &Window, engine: &Shared) -> Result<(), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("inner_width not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("inner_height not a number")?;
    let dpr = engine.borrow().core.dpr;
    log::debug!("resize: {width}x{height} css px");
    engine.borrow_mut().set_viewport(width, height, dpr)
}

/// Start the per-frame fade tick.
///
/// The closure holder keeps the `requestAnimationFrame` callback alive so it
/// can reschedule itself from within its own body (holder pattern: create the
/// `Closure` first, then reference it from inside).
fn start_fade_loop(window: &Window, engine: &Shared) -> Result<(), JsValue> {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let engine_for_cb = Rc::clone(engine);
    let window_for_cb = window.clone();
    *holder.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = engine_for_cb.borrow().fade() {
            log::warn!("fade failed: {err:?}");
        }
        if let Some(closure) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = window_for_cb.request_animation_frame(closure.as_ref().unchecked_ref()) {
                log::warn!("request_animation_frame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(closure) = holder.borrow().as_ref() {
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}
