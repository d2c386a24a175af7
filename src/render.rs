use crate::constants::{FRUIT_CANVAS_ID, VINYL_CANVAS_ID, WAVE_CANVAS_ID};
use crate::dom;
use crate::images::SpriteSheet;
use glam::DVec2;
use vinyl_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, FRUIT_LANE_HEIGHT, FRUIT_LANE_WIDTH};
use vinyl_core::Scene;
use wasm_bindgen::JsValue;
use web_sys as web;

mod fruit;
mod helpers;
mod sprites;
mod vinyl;
mod waves;

// ===================== Canvas2D surfaces =====================

pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    fn from_id(document: &web::Document, id: &str, width: f64, height: f64) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, id)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    pub fn clear(&self) {
        let s = self.size();
        self.ctx.clear_rect(0.0, 0.0, s.x, s.y);
    }
}

/// The three stacked canvases: background bands, records, fruit lane.
pub struct Surfaces {
    pub wave: Surface,
    pub vinyl: Surface,
    pub fruit: Surface,
}

impl Surfaces {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let wave = Surface::from_id(document, WAVE_CANVAS_ID, CANVAS_WIDTH, CANVAS_HEIGHT)?;
        dom::fit_canvas_width(&wave.canvas, CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
        Ok(Self {
            wave,
            vinyl: Surface::from_id(document, VINYL_CANVAS_ID, CANVAS_WIDTH, CANVAS_HEIGHT)?,
            fruit: Surface::from_id(document, FRUIT_CANVAS_ID, FRUIT_LANE_WIDTH, FRUIT_LANE_HEIGHT)?,
        })
    }

    pub fn clear_all(&self) {
        self.wave.clear();
        self.vinyl.clear();
        self.fruit.clear();
    }
}

/// Draw one frame of `scene` across all three canvases.
pub fn draw_scene(surfaces: &Surfaces, scene: &Scene, sheet: &SpriteSheet) -> Result<(), JsValue> {
    let wave_size = surfaces.wave.size();
    waves::draw_background(&surfaces.wave.ctx, scene.background(), wave_size.x, wave_size.y)?;
    draw_records(&surfaces.vinyl, scene, sheet)?;
    draw_fruit_lane(&surfaces.fruit, scene, sheet)
}

/// Head first, records in the order they appeared, tail last, then the
/// hover panels above everything.
fn draw_records(surface: &Surface, scene: &Scene, sheet: &SpriteSheet) -> Result<(), JsValue> {
    surface.clear();
    let ctx = &surface.ctx;
    let caterpillar = scene.caterpillar();
    sprites::draw_anchor(ctx, &caterpillar.head, sheet)?;
    for v in scene.vinyls() {
        vinyl::draw_vinyl(ctx, v)?;
    }
    sprites::draw_anchor(ctx, &caterpillar.tail, sheet)?;
    let size = surface.size();
    for v in scene.hovered_vinyls() {
        vinyl::draw_info_panel(ctx, v, size)?;
    }
    Ok(())
}

fn draw_fruit_lane(surface: &Surface, scene: &Scene, sheet: &SpriteSheet) -> Result<(), JsValue> {
    surface.clear();
    for f in scene.spawner().active() {
        fruit::draw_fruit(&surface.ctx, f, sheet)?;
    }
    Ok(())
}
