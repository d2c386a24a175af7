//! Page-level state shared between DOM handlers and the frame loop.

use crate::controls;
use crate::fetch;
use crate::images::{self, SpriteSheet};
use crate::overlay;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use vinyl_core::constants::{DISPLAY_LIMIT, WAVE_OPACITY};
use vinyl_core::{DomainItem, KMeansParams, PaletteCache, Scene, SceneConfig, TopItemsQuery, Waveform};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Background settings the user controls; they outlive any one scene.
#[derive(Clone, Copy, Debug)]
pub struct WaveSettings {
    pub shape: Waveform,
    pub opacity: f64,
    pub visible: bool,
    pub show_labels: bool,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            shape: Waveform::Sine,
            opacity: WAVE_OPACITY,
            visible: true,
            show_labels: true,
        }
    }
}

pub struct App {
    pub document: web::Document,
    pub scene: Option<Scene>,
    pub sprites: SpriteSheet,
    pub palettes: PaletteCache,
    pub kmeans: KMeansParams,
    pub wave: WaveSettings,
    pub rng: StdRng,
    /// Bumped per fetch so only the latest response builds a scene.
    pub request_id: u64,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    pub fn new(document: web::Document, rng: StdRng) -> Self {
        Self {
            document,
            scene: None,
            sprites: SpriteSheet::load(),
            palettes: PaletteCache::new(),
            kmeans: KMeansParams::default(),
            wave: WaveSettings::default(),
            rng,
            request_id: 0,
        }
    }

    /// Push the current background settings into the live scene.
    pub fn sync_wave_settings(&mut self) {
        let wave = self.wave;
        if let Some(scene) = self.scene.as_mut() {
            let bg = scene.background_mut();
            bg.set_shape(wave.shape);
            bg.set_opacity(wave.opacity);
            bg.set_visible(wave.visible);
            bg.set_show_labels(wave.show_labels);
        }
        overlay::update_hint(
            &self.document,
            wave.shape.name(),
            wave.opacity,
            wave.visible,
            wave.show_labels,
        );
    }

    pub fn teardown_scene(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.teardown();
        }
    }

    /// "Eat!": start the fruit sequence if the scene is ready.
    pub fn start_eating(&mut self) {
        let started = self.scene.as_mut().is_some_and(Scene::start_playback);
        if started {
            controls::set_eat_enabled(&self.document, false);
            overlay::status(&self.document, "Now eating the data!");
        }
    }

    fn install_scene(&mut self, items: &[DomainItem], query: &TopItemsQuery) -> Option<u64> {
        self.teardown_scene();
        let kind = query.kind.plural();
        if items.is_empty() {
            self.scene = None;
            controls::set_eat_enabled(&self.document, false);
            overlay::status(
                &self.document,
                &format!("No {kind} found starting at rank {}.", query.offset()),
            );
            return None;
        }
        let scene = Scene::create(items, SceneConfig::default());
        let generation = scene.generation();
        self.scene = Some(scene);
        self.sync_wave_settings();
        controls::set_eat_enabled(&self.document, true);
        overlay::status(
            &self.document,
            &format!(
                "Showing {} {kind} from the last {}, starting from rank {}. Press \"Eat!\" to animate.",
                items.len(),
                query.time_range.label(),
                query.offset()
            ),
        );
        controls::set_range_label(&self.document, query);
        Some(generation)
    }

    /// Apply a palette only if the scene it was extracted for is still live.
    fn apply_palette_for(&mut self, generation: u64, index: usize, palette: vinyl_core::Palette) {
        match self.scene.as_mut() {
            Some(scene) if scene.generation() == generation && !scene.is_torn_down() => {
                scene.apply_palette(index, palette);
            }
            _ => log::debug!("[app] dropping palette {index} for stale scene #{generation}"),
        }
    }
}

/// "Update filter": tear down the current scene, fetch the selected window
/// and build a new scene from it.
pub fn apply_current_range(app: &SharedApp) {
    let (query, request_id) = {
        let mut a = app.borrow_mut();
        a.teardown_scene();
        a.request_id += 1;
        let query = controls::read_query(&a.document);
        controls::set_eat_enabled(&a.document, false);
        overlay::status(
            &a.document,
            &format!("Fetching top {} from Spotify...", query.kind.plural()),
        );
        (query, a.request_id)
    };
    let app = app.clone();
    spawn_local(async move {
        let result = fetch::fetch_top_items(&query).await;
        let generation = {
            let mut a = app.borrow_mut();
            if a.request_id != request_id {
                log::debug!("[app] dropping stale response for request {request_id}");
                return;
            }
            match result {
                Ok(mut items) => {
                    items.truncate(DISPLAY_LIMIT as usize);
                    let generation = a.install_scene(&items, &query);
                    generation.map(|g| (g, items))
                }
                Err(e) => {
                    log::error!("[app] fetch failed: {:?}", e);
                    overlay::status(
                        &a.document,
                        &format!("Unable to load top {}: {e}", query.kind.plural()),
                    );
                    None
                }
            }
        };
        if let Some((generation, items)) = generation {
            load_palettes(&app, generation, &items);
        }
    });
}

/// Resolve every item's palette (cache first, then the network) and hot-swap
/// it into the scene it belongs to.
fn load_palettes(app: &SharedApp, generation: u64, items: &[DomainItem]) {
    for (index, item) in items.iter().enumerate() {
        let Some(url) = item.image_url().map(str::to_string) else {
            continue;
        };
        let cached = app.borrow().palettes.get(&url);
        if let Some(palette) = cached {
            app.borrow_mut().apply_palette_for(generation, index, palette);
            continue;
        }
        let app = app.clone();
        spawn_local(async move {
            let loaded = images::load_image(&url).await;
            let mut a = app.borrow_mut();
            let a = &mut *a;
            let palette = match loaded.and_then(|img| {
                images::palette_from_image(&a.document, &img, &a.kmeans, &mut a.rng)
            }) {
                Ok(p) => p,
                Err(e) => {
                    log::warn!("[app] palette for {url}: {e}; using default");
                    vinyl_core::Palette::default()
                }
            };
            a.palettes.insert(url, palette);
            a.apply_palette_for(generation, index, palette);
        });
    }
}
