//! One visualization run: layout, records, caterpillar, fruit pipeline and
//! background, advanced together by a single tick.
//!
//! A scene is created from fetched items, optionally started, ticked once per
//! frame and torn down when a new fetch replaces it. Asynchronous results
//! (palettes) are matched against [`Scene::generation`] so late arrivals for a
//! discarded scene can be ignored by the caller.

use crate::background::WaveBackground;
use crate::color::Palette;
use crate::constants::SPINS_PER_BEAT;
use crate::item::DomainItem;
use crate::layout::{Layout, LayoutConfig};
use crate::spawner::{FruitSpawner, SpawnerConfig};
use crate::sprite::Caterpillar;
use crate::vinyl::Vinyl;
use crate::waveform::Waveform;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// When records appear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaterializeMode {
    /// Each record appears when its fruit finishes crossing the lane.
    #[default]
    Deferred,
    /// Every record is present from creation; fruit completions are no-ops.
    Immediate,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub layout: LayoutConfig,
    pub spawner: SpawnerConfig,
    pub materialize: MaterializeMode,
    pub spins_per_beat: f64,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            spawner: SpawnerConfig::default(),
            materialize: MaterializeMode::Deferred,
            spins_per_beat: SPINS_PER_BEAT,
            seed: 0x5eed_1e55,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    PlaybackStarted,
    FruitSpawned(usize),
    Materialized(usize),
    TailShown,
}

pub struct Scene {
    generation: u64,
    config: SceneConfig,
    layout: Layout,
    vinyls: Vec<Vinyl>,
    caterpillar: Caterpillar,
    spawner: FruitSpawner,
    background: WaveBackground,
    pointer: Option<DVec2>,
    rng: StdRng,
    pending: Vec<SceneEvent>,
    active: bool,
    torn_down: bool,
    // scratch buffers reused every tick
    spawned: Vec<usize>,
    completed: Vec<usize>,
}

impl Scene {
    pub fn create(items: &[DomainItem], config: SceneConfig) -> Self {
        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        let layout = Layout::build(items, &[], &config.layout);
        let caterpillar = Caterpillar::new(layout.head, layout.tail, config.layout.anchor_size);
        let mut spawner = FruitSpawner::new(config.spawner.clone());
        let placed: Vec<DomainItem> = layout.items().cloned().collect();
        spawner.prepare(&placed);

        let mut background = WaveBackground::new();
        background.set_speed_from_items(&placed);

        let mut scene = Self {
            generation,
            rng: StdRng::seed_from_u64(config.seed),
            config,
            layout,
            vinyls: Vec::new(),
            caterpillar,
            spawner,
            background,
            pointer: None,
            pending: Vec::new(),
            active: false,
            torn_down: false,
            spawned: Vec::new(),
            completed: Vec::new(),
        };
        scene.refresh_background_palette();
        if scene.config.materialize == MaterializeMode::Immediate {
            for index in 0..scene.layout.len() {
                scene.materialize(index);
            }
            // nothing to report before the first tick
            scene.pending.clear();
        }
        log::info!(
            "[scene] #{} created with {} items ({:?})",
            scene.generation,
            scene.layout.len(),
            scene.config.materialize
        );
        scene
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Playback can start: there is something to show and it has not run yet.
    pub fn is_ready(&self) -> bool {
        !self.torn_down && !self.layout.is_empty() && !self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Show the head and start feeding fruit. Returns false if the scene is
    /// empty, already playing or torn down.
    pub fn start_playback(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.active = true;
        self.caterpillar.show_head();
        self.pending.push(SceneEvent::PlaybackStarted);
        if let Some(index) = self.spawner.start(&mut self.rng) {
            self.pending.push(SceneEvent::FruitSpawned(index));
        }
        log::info!("[scene] #{} playback started", self.generation);
        true
    }

    /// Advance everything by `dt` in a fixed order: spawner, materialization,
    /// caterpillar, records, background.
    pub fn tick(&mut self, dt: Duration, out_events: &mut Vec<SceneEvent>) {
        out_events.append(&mut self.pending);
        if self.torn_down {
            return;
        }
        let dt_sec = dt.as_secs_f64();

        self.spawned.clear();
        self.completed.clear();
        self.spawner
            .tick(dt, &mut self.rng, &mut self.spawned, &mut self.completed);
        out_events.extend(self.spawned.iter().map(|&i| SceneEvent::FruitSpawned(i)));

        let completed = std::mem::take(&mut self.completed);
        for &index in &completed {
            self.materialize(index);
        }
        self.completed = completed;
        out_events.append(&mut self.pending);

        self.caterpillar.update(dt_sec);

        for vinyl in &mut self.vinyls {
            vinyl.update_hover(self.pointer);
            if self.active {
                vinyl.update(dt_sec);
            }
        }

        self.background.update(dt_sec);
    }

    fn materialize(&mut self, index: usize) {
        let Some(entry) = self.layout.materialize(index) else {
            return;
        };
        let cfg = &self.config.layout;
        let vinyl = Vinyl::from_entry(
            entry,
            cfg.outer_radius,
            cfg.inner_radius,
            self.config.spins_per_beat,
        );
        log::debug!("[scene] record {} '{}' materialized", index, vinyl.title);
        self.vinyls.push(vinyl);
        self.pending.push(SceneEvent::Materialized(index));
        if self.layout.is_last(index) && self.caterpillar.show_tail() {
            self.pending.push(SceneEvent::TailShown);
        }
    }

    /// Pointer position in canvas pixels; `None` once it leaves the canvas.
    pub fn set_pointer(&mut self, pointer: Option<DVec2>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    /// Swap in an extracted palette for one item, updating its record (if
    /// already shown) and the background band.
    pub fn apply_palette(&mut self, index: usize, palette: Palette) -> bool {
        if !self.layout.apply_palette(index, palette) {
            return false;
        }
        if let Some(v) = self.vinyls.iter_mut().find(|v| v.index == index) {
            v.palette = palette;
        }
        if !self.torn_down {
            self.refresh_background_palette();
        }
        true
    }

    fn refresh_background_palette(&mut self) {
        let colors: Vec<_> = self.layout.entries().iter().map(|e| e.palette.primary).collect();
        let labels: Vec<String> = self.layout.items().map(DomainItem::display_label).collect();
        self.background.set_palette(&colors, &labels);
    }

    pub fn set_wave_shape(&mut self, shape: Waveform) {
        self.background.set_shape(shape);
    }

    /// Stop the fruit timer and every animation. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.active = false;
        self.spawner.clear();
        self.background.stop();
        self.caterpillar.hide_all();
        self.pointer = None;
        self.pending.clear();
        log::info!("[scene] #{} torn down", self.generation);
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Records in materialization order.
    pub fn vinyls(&self) -> &[Vinyl] {
        &self.vinyls
    }

    pub fn hovered_vinyls(&self) -> impl Iterator<Item = &Vinyl> {
        self.vinyls.iter().filter(|v| v.is_hovered())
    }

    pub fn any_hovered(&self) -> bool {
        self.vinyls.iter().any(Vinyl::is_hovered)
    }

    pub fn caterpillar(&self) -> &Caterpillar {
        &self.caterpillar
    }

    pub fn spawner(&self) -> &FruitSpawner {
        &self.spawner
    }

    pub fn background(&self) -> &WaveBackground {
        &self.background
    }

    pub fn background_mut(&mut self) -> &mut WaveBackground {
        &mut self.background
    }
}
