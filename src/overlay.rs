use crate::constants::{HINT_OVERLAY_ID, RANGE_STATUS_ID};
use crate::dom;
use web_sys as web;

/// One-line status under the controls.
#[inline]
pub fn status(document: &web::Document, text: &str) {
    dom::set_text(document, RANGE_STATUS_ID, text);
}

/// The overlay is hidden through the `hidden` class only.
pub fn set_hint_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        _ = el.class_list().toggle_with_force("hidden", !visible);
    }
}

pub fn toggle_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        _ = el.class_list().toggle("hidden");
    }
}

/// Refresh the hint overlay with the current background settings.
pub fn update_hint(document: &web::Document, shape: &str, opacity: f64, visible: bool, labels: bool) {
    let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) else {
        return;
    };
    let on_off = |b: bool| if b { "on" } else { "off" };
    el.set_inner_html(&format!(
        "<div class='hint-card'>Wave: {shape} · Opacity: {:.0}% · Background: {} · Labels: {}<br>\
         1-4 shape · l labels · b background · +/- opacity · e eat · h hide</div>",
        opacity * 100.0,
        on_off(visible),
        on_off(labels)
    ));
}
