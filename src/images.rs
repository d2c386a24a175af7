//! Image loading: caterpillar/fruit sprites and album-art palettes.

use crate::constants::{HEAD_ASSET, HEAD_CLOSED_ASSET, TAIL_ASSET};
use crate::dom;
use rand::Rng;
use vinyl_core::constants::THUMBNAIL_SIZE;
use vinyl_core::{palette_from_rgba, AnchorKind, AnchorSprite, FruitKind, KMeansParams, Palette};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Load `src` anonymously and resolve once it has decoded.
pub async fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    img.set_cross_origin(Some("anonymous"));
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);
    let loaded = JsFuture::from(promise).await;
    img.set_onload(None);
    img.set_onerror(None);
    loaded.map_err(|_| anyhow::anyhow!("failed to load image {src}"))?;
    Ok(img)
}

/// RGBA bytes of `img` scaled down to a `size`×`size` offscreen canvas.
pub fn thumbnail_rgba(
    document: &web::Document,
    img: &web::HtmlImageElement,
    size: u32,
) -> anyhow::Result<Vec<u8>> {
    let canvas = dom::create_canvas(document, size, size)?;
    let ctx = dom::context_2d(&canvas)?;
    let s = size as f64;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, s, s)
        .map_err(js_err)?;
    // Throws for tainted canvases (no CORS headers on the art host).
    let data = ctx.get_image_data(0.0, 0.0, s, s).map_err(js_err)?;
    Ok(data.data().0)
}

pub fn palette_from_image<R: Rng + ?Sized>(
    document: &web::Document,
    img: &web::HtmlImageElement,
    params: &KMeansParams,
    rng: &mut R,
) -> anyhow::Result<Palette> {
    let rgba = thumbnail_rgba(document, img, THUMBNAIL_SIZE)?;
    Ok(palette_from_rgba(&rgba, params, rng))
}

#[inline]
pub fn is_drawable(img: &web::HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}

/// Start loading without waiting; drawing skips images that are not ready.
fn preload(src: &str) -> Option<web::HtmlImageElement> {
    match web::HtmlImageElement::new() {
        Ok(img) => {
            img.set_src(src);
            Some(img)
        }
        Err(e) => {
            log::warn!("[images] cannot create image for {src}: {:?}", e);
            None
        }
    }
}

pub struct SpriteSheet {
    fruits: Vec<(FruitKind, web::HtmlImageElement)>,
    head: Option<web::HtmlImageElement>,
    head_closed: Option<web::HtmlImageElement>,
    tail: Option<web::HtmlImageElement>,
}

impl SpriteSheet {
    pub fn load() -> Self {
        let fruits = FruitKind::ALL
            .iter()
            .filter_map(|&kind| preload(kind.asset()).map(|img| (kind, img)))
            .collect();
        Self {
            fruits,
            head: preload(HEAD_ASSET),
            head_closed: preload(HEAD_CLOSED_ASSET),
            tail: preload(TAIL_ASSET),
        }
    }

    pub fn fruit(&self, kind: FruitKind) -> Option<&web::HtmlImageElement> {
        self.fruits
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, img)| img)
            .filter(|img| is_drawable(img))
    }

    /// Image for an anchor's current frame. A missing closed-mouth frame
    /// falls back to the open one.
    pub fn anchor(&self, sprite: &AnchorSprite) -> Option<&web::HtmlImageElement> {
        let primary = match sprite.kind {
            AnchorKind::Head => self.head.as_ref(),
            AnchorKind::Tail => self.tail.as_ref(),
        };
        let alternate = match sprite.kind {
            AnchorKind::Head if sprite.alternate_frame => self.head_closed.as_ref(),
            _ => None,
        };
        alternate
            .filter(|img| is_drawable(img))
            .or(primary)
            .filter(|img| is_drawable(img))
    }
}
