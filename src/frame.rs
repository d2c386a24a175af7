use crate::app::SharedApp;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::controls;
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use vinyl_core::SceneEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: SharedApp,
    pub surfaces: render::Surfaces,
    pub last_instant: Instant,
    pub events: Vec<SceneEvent>,
    pub pointer_cursor: bool,
    pub last_draw_error: Option<String>,
}

impl FrameContext {
    pub fn new(app: SharedApp, surfaces: render::Surfaces) -> Self {
        Self {
            app,
            surfaces,
            last_instant: Instant::now(),
            events: Vec::new(),
            pointer_cursor: false,
            last_draw_error: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f64(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let shared = self.app.clone();
        let mut app = shared.borrow_mut();
        let app = &mut *app;
        let Some(scene) = app.scene.as_mut() else {
            self.surfaces.clear_all();
            self.set_cursor(false);
            return;
        };

        self.events.clear();
        scene.tick(dt, &mut self.events);
        for ev in &self.events {
            match ev {
                SceneEvent::TailShown => {
                    log::info!("[frame] all {} records served", scene.vinyls().len());
                    overlay::status(&app.document, "All eaten! Hover a record for details.");
                    controls::set_eat_enabled(&app.document, false);
                }
                other => log::debug!("[frame] {:?}", other),
            }
        }

        match render::draw_scene(&self.surfaces, scene, &app.sprites) {
            Ok(()) => self.last_draw_error = None,
            Err(e) => {
                // log once per distinct failure, not every frame
                let msg = format!("{:?}", e);
                if self.last_draw_error.as_deref() != Some(msg.as_str()) {
                    log::warn!("[frame] draw failed: {msg}");
                    self.last_draw_error = Some(msg);
                }
            }
        }
        let hovered = scene.any_hovered();
        self.set_cursor(hovered);
    }

    fn set_cursor(&mut self, pointer: bool) {
        if self.pointer_cursor == pointer {
            return;
        }
        self.pointer_cursor = pointer;
        let cursor = if pointer { "pointer" } else { "default" };
        _ = self
            .surfaces
            .vinyl
            .canvas
            .style()
            .set_property("cursor", cursor);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
