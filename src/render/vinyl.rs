use super::helpers::{fill_circle, rounded_rect, ui_font, CanvasMeasure};
use crate::constants::*;
use glam::DVec2;
use std::f64::consts::TAU;
use vinyl_core::Vinyl;
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn draw_vinyl(ctx: &web::CanvasRenderingContext2d, vinyl: &Vinyl) -> Result<(), JsValue> {
    ctx.save();
    let drawn = draw_disc(ctx, vinyl);
    ctx.restore();
    drawn
}

fn draw_disc(ctx: &web::CanvasRenderingContext2d, vinyl: &Vinyl) -> Result<(), JsValue> {
    ctx.translate(vinyl.position.x, vinyl.position.y)?;
    ctx.rotate(vinyl.rotation)?;

    fill_circle(ctx, 0.0, 0.0, vinyl.outer_radius, DISC_EDGE_FILL)?;

    ctx.set_stroke_style_str(GROOVE_STROKE);
    ctx.set_line_width(1.0);
    for r in vinyl.groove_radii() {
        ctx.begin_path();
        ctx.arc(0.0, 0.0, r, 0.0, TAU)?;
        ctx.stroke();
    }

    fill_circle(
        ctx,
        0.0,
        0.0,
        vinyl.inner_radius,
        &vinyl.palette.primary.to_string(),
    )?;

    ctx.set_line_width(SPIRAL_LINE_WIDTH);
    ctx.set_line_cap("round");
    for stroke in vinyl.spiral_strokes() {
        ctx.set_stroke_style_str(&stroke.color.to_string());
        ctx.begin_path();
        ctx.move_to(stroke.from.x, stroke.from.y);
        ctx.line_to(stroke.to.x, stroke.to.y);
        ctx.stroke();
    }

    fill_circle(ctx, 0.0, 0.0, vinyl.center_dot_radius(), CENTER_DOT_FILL)?;

    draw_ring_title(ctx, vinyl)
}

fn draw_ring_title(ctx: &web::CanvasRenderingContext2d, vinyl: &Vinyl) -> Result<(), JsValue> {
    ctx.set_font(&ui_font(vinyl.ring_font_size()));
    ctx.set_fill_style_str(RING_TEXT_FILL);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let mut buf = [0u8; 4];
    for glyph in vinyl.ring_glyphs(&CanvasMeasure(ctx)) {
        ctx.save();
        let drawn = (|| -> Result<(), JsValue> {
            ctx.translate(glyph.pos.x, glyph.pos.y)?;
            ctx.rotate(glyph.angle)?;
            ctx.fill_text(glyph.ch.encode_utf8(&mut buf), 0.0, 0.0)
        })();
        ctx.restore();
        drawn?;
    }
    Ok(())
}

/// Upright hover panel beside the disc, drawn in screen space.
pub fn draw_info_panel(
    ctx: &web::CanvasRenderingContext2d,
    vinyl: &Vinyl,
    canvas: DVec2,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_font(&ui_font(vinyl.panel_font_size()));
    let Some(panel) = vinyl.info_panel(&CanvasMeasure(ctx), canvas) else {
        ctx.restore();
        return Ok(());
    };
    ctx.set_fill_style_str(PANEL_FILL);
    rounded_rect(
        ctx,
        panel.origin.x,
        panel.origin.y,
        panel.size.x,
        panel.size.y,
        PANEL_CORNER_RADIUS,
    );
    ctx.fill();

    ctx.set_fill_style_str(PANEL_TEXT_FILL);
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    let drawn = panel.lines.iter().enumerate().try_for_each(|(i, line)| {
        let at = panel.line_origin(i);
        ctx.fill_text(line, at.x, at.y)
    });
    ctx.restore();
    drawn
}
