use crate::constants::WAVE_LABEL_FONT;
use vinyl_core::constants::WAVE_LABEL_ALPHA;
use vinyl_core::WaveBackground;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Paint the background bands. Each band is composited behind the ones
/// already drawn; labels go on top in a translucent text color.
pub fn draw_background(
    ctx: &web::CanvasRenderingContext2d,
    background: &WaveBackground,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    if !background.is_drawable() {
        return Ok(());
    }
    ctx.save();
    ctx.set_global_alpha(background.opacity());
    ctx.set_global_composite_operation("destination-over")?;
    let drawn = (|| -> Result<(), JsValue> {
        for band in background.bands(width, height) {
            ctx.set_fill_style_str(&band.color.to_string());
            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            for p in &band.points {
                ctx.line_to(p.x, p.y);
            }
            ctx.line_to(width, 0.0);
            ctx.close_path();
            ctx.fill();

            if background.shows_labels() && !band.label.is_empty() {
                ctx.set_global_composite_operation("source-over")?;
                ctx.set_global_alpha(1.0);
                ctx.set_fill_style_str(&band.text_color.to_css_alpha(WAVE_LABEL_ALPHA));
                ctx.set_font(WAVE_LABEL_FONT);
                ctx.set_text_align("center");
                ctx.set_text_baseline("bottom");
                ctx.fill_text(&band.label, width / 2.0, band.label_y)?;
                ctx.set_global_alpha(background.opacity());
                ctx.set_global_composite_operation("destination-over")?;
            }
        }
        Ok(())
    })();
    ctx.restore();
    drawn
}
