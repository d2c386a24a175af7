#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use vinyl_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod controls;
mod dom;
mod events;
mod fetch;
mod frame;
mod images;
mod input;
mod keymap;
mod overlay;
mod render;

// The background canvas tracks the container width; records keep fixed coordinates.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::fit_canvas_width(&canvas_resize, CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vinyl-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let surfaces = render::Surfaces::from_document(&document)?;
    wire_canvas_resize(&surfaces.wave.canvas);

    let app = Rc::new(RefCell::new(app::App::new(
        document.clone(),
        StdRng::from_entropy(),
    )));

    controls::wire_controls(&app, &document);
    events::wire_global_keydown(app.clone());
    events::wire_input_handlers(app.clone(), surfaces.vinyl.canvas.clone());
    app.borrow_mut().sync_wave_settings();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app, surfaces)));
    frame::start_loop(frame_ctx);
    log::info!("vinyl-web ready");
    Ok(())
}
