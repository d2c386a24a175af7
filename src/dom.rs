use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has unexpected type: {:?}", e))
}

pub fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn create_canvas(document: &web::Document, width: u32, height: u32) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

fn add_listener(target: &web::EventTarget, event: &str, handler: Box<dyn FnMut(web::Event)>) {
    let closure = Closure::wrap(handler);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", Box::new(move |_| handler()));
    }
}

/// Listen for `event` on an input element, handing over the element itself.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    handler: impl FnMut(&web::HtmlInputElement) + 'static,
) {
    if let Some(input) = input_by_id(document, element_id) {
        listen_input(&input, event, handler);
    }
}

pub fn listen_input(
    input: &web::HtmlInputElement,
    event: &str,
    mut handler: impl FnMut(&web::HtmlInputElement) + 'static,
) {
    let target = input.clone();
    add_listener(input, event, Box::new(move |_| handler(&target)));
}

/// Every radio of group `name`, for wiring change handlers.
pub fn radio_group(document: &web::Document, name: &str) -> Vec<web::HtmlInputElement> {
    let Ok(list) = document.query_selector_all(&format!("input[type='radio'][name='{name}']")) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlInputElement>().ok())
        .collect()
}

pub fn checked_radio_value(document: &web::Document, name: &str) -> Option<String> {
    radio_group(document, name)
        .into_iter()
        .find(|r| r.checked())
        .map(|r| r.value())
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if disabled {
            _ = el.set_attribute("disabled", "");
        } else {
            _ = el.remove_attribute("disabled");
        }
    }
}

/// Pin the backing store to `height` and at least `min_width`, widening to
/// the element's laid-out width.
pub fn fit_canvas_width(canvas: &web::HtmlCanvasElement, min_width: u32, height: u32) {
    let rect_w = canvas.get_bounding_client_rect().width().ceil() as u32;
    let parent_w = canvas
        .parent_element()
        .map(|p| p.client_width().max(0) as u32)
        .unwrap_or(0);
    canvas.set_width(min_width.max(rect_w).max(parent_w));
    canvas.set_height(height);
}

pub fn navigate(path: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(path) {
            log::error!("[dom] navigate to {path} failed: {:?}", e);
        }
    }
}
