use super::helpers::draw_centered_image;
use crate::images::SpriteSheet;
use vinyl_core::AnchorSprite;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Draw a caterpillar end if it is visible and its image has loaded.
pub fn draw_anchor(
    ctx: &web::CanvasRenderingContext2d,
    sprite: &AnchorSprite,
    sheet: &SpriteSheet,
) -> Result<(), JsValue> {
    if !sprite.visible {
        return Ok(());
    }
    let Some(img) = sheet.anchor(sprite) else {
        return Ok(());
    };
    draw_centered_image(
        ctx,
        img,
        sprite.position.x,
        sprite.position.y,
        sprite.size.x,
        sprite.size.y,
        sprite.rotation,
    )
}
