use crate::app::{App, SharedApp};
use crate::controls;
use crate::keymap::{action_for_key, KeyAction};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Typing into a form field should not drive the scene.
fn is_typing_target(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some_and(|input| {
            let kind = input.type_();
            kind == "text" || kind == "search" || kind == "number"
        })
}

pub fn apply_key_action(app: &mut App, action: KeyAction) {
    match action {
        KeyAction::SetShape(shape) => {
            app.wave.shape = shape;
            controls::sync_shape_radios(&app.document, shape);
        }
        KeyAction::ToggleLabels => {
            app.wave.show_labels = !app.wave.show_labels;
            controls::sync_labels_checkbox(&app.document, app.wave.show_labels);
        }
        KeyAction::ToggleBackground => {
            app.wave.visible = !app.wave.visible;
        }
        KeyAction::AdjustOpacity(delta) => {
            app.wave.opacity = (app.wave.opacity + delta).clamp(0.0, 1.0);
            controls::sync_opacity_slider(&app.document, app.wave.opacity);
        }
        KeyAction::Eat => {
            app.start_eating();
            return;
        }
        KeyAction::ToggleHint => {
            overlay::toggle_hint(&app.document);
            return;
        }
    }
    app.sync_wave_settings();
    overlay::set_hint_visible(&app.document, true);
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &SharedApp) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || is_typing_target(ev) {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    log::debug!("[keys] {:?}", action);
    apply_key_action(&mut app.borrow_mut(), action);
    ev.prevent_default();
}

pub fn wire_global_keydown(app: SharedApp) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
