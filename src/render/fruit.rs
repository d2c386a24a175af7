use super::helpers::draw_centered_image;
use crate::images::SpriteSheet;
use vinyl_core::Fruit;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Draw a pulsing fruit, keeping its image's aspect ratio.
pub fn draw_fruit(
    ctx: &web::CanvasRenderingContext2d,
    fruit: &Fruit,
    sheet: &SpriteSheet,
) -> Result<(), JsValue> {
    let Some(img) = sheet.fruit(fruit.kind) else {
        return Ok(());
    };
    let (iw, ih) = (img.natural_width() as f64, img.natural_height() as f64);
    if iw <= 0.0 || ih <= 0.0 {
        return Ok(());
    }
    let w = fruit.draw_width();
    let h = ih / iw * w;
    draw_centered_image(ctx, img, fruit.position.x, fruit.position.y, w, h, 0.0)
}
