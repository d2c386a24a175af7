use crate::app::SharedApp;
use crate::input;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer tracking on the record canvas; hover is resolved in the scene tick.
pub fn wire_input_handlers(app: SharedApp, canvas: web::HtmlCanvasElement) {
    wire_pointermove(&app, &canvas);
    wire_pointerleave(&app, &canvas);
}

fn wire_pointermove(app: &SharedApp, canvas: &web::HtmlCanvasElement) {
    let app = app.clone();
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let size = DVec2::new(target.width() as f64, target.height() as f64);
        let pos = input::pointer_canvas_px(&ev, &target).filter(|p| input::inside_canvas(*p, size));
        if let Some(scene) = app.borrow_mut().scene.as_mut() {
            scene.set_pointer(pos);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(app: &SharedApp, canvas: &web::HtmlCanvasElement) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if let Some(scene) = app.borrow_mut().scene.as_mut() {
            scene.set_pointer(None);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
