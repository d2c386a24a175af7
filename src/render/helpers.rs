use crate::constants::UI_FONT_FAMILY;
use std::f64::consts::TAU;
use vinyl_core::TextMeasure;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Measures with whatever font is currently set on the context.
pub struct CanvasMeasure<'a>(pub &'a web::CanvasRenderingContext2d);

impl TextMeasure for CanvasMeasure<'_> {
    fn width(&self, text: &str) -> f64 {
        self.0.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }
}

#[inline]
pub fn ui_font(size_px: f64) -> String {
    format!("{size_px}px {UI_FONT_FAMILY}")
}

pub fn fill_circle(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    radius: f64,
    fill: &str,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(fill);
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

/// Trace a rounded rectangle path; the caller fills or strokes it.
pub fn rounded_rect(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let rr = r.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + rr, y);
    ctx.line_to(x + w - rr, y);
    ctx.quadratic_curve_to(x + w, y, x + w, y + rr);
    ctx.line_to(x + w, y + h - rr);
    ctx.quadratic_curve_to(x + w, y + h, x + w - rr, y + h);
    ctx.line_to(x + rr, y + h);
    ctx.quadratic_curve_to(x, y + h, x, y + h - rr);
    ctx.line_to(x, y + rr);
    ctx.quadratic_curve_to(x, y, x + rr, y);
    ctx.close_path();
}

/// Draw `img` centered on (`x`, `y`) at `w`×`h`, rotated by `rotation`.
pub fn draw_centered_image(
    ctx: &web::CanvasRenderingContext2d,
    img: &web::HtmlImageElement,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    rotation: f64,
) -> Result<(), JsValue> {
    ctx.save();
    let drawn = (|| -> Result<(), JsValue> {
        ctx.translate(x, y)?;
        if rotation != 0.0 {
            ctx.rotate(rotation)?;
        }
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, -w / 2.0, -h / 2.0, w, h)
    })();
    ctx.restore();
    drawn
}
