//! Timed fruit pipeline feeding items to the caterpillar one at a time.
//!
//! Each spawned fruit crosses a short lane; the tick on which it first
//! reaches the lane's end reports its item index exactly once.

use crate::constants::{
    FRUIT_BASE_SIZE_MIN, FRUIT_BASE_SIZE_SPAN, FRUIT_DEFAULT_POPULARITY, FRUIT_LANE_HEIGHT,
    FRUIT_LANE_WIDTH, FRUIT_MAX_SCALE, FRUIT_MIN_SCALE, FRUIT_MOVE_MARGIN, FRUIT_MOVE_SECS,
    FRUIT_SPAWN_INTERVAL, FRUIT_TEMPO_MAX, TEMPO_MIN, VINYL_COUNT,
};
use crate::item::DomainItem;
use glam::DVec2;
use rand::Rng;
use std::collections::VecDeque;
use std::f64::consts::{PI, TAU};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FruitKind {
    Apple,
    Pear,
    Orange,
    Grape,
    Strawberry,
}

impl FruitKind {
    pub const ALL: [FruitKind; 5] = [
        FruitKind::Apple,
        FruitKind::Pear,
        FruitKind::Orange,
        FruitKind::Grape,
        FruitKind::Strawberry,
    ];

    pub fn asset(self) -> &'static str {
        match self {
            FruitKind::Apple => "assets/caterpillar_apple.png",
            FruitKind::Pear => "assets/caterpillar_pear.png",
            FruitKind::Orange => "assets/caterpillar_orange.png",
            FruitKind::Grape => "assets/caterpillar_grape.png",
            FruitKind::Strawberry => "assets/caterpillar_strawberry.png",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Pulse tempo for a fruit: popularity scaled into a bounded BPM-like range.
pub fn fruit_tempo(item: &DomainItem) -> f64 {
    let popularity = item
        .popularity
        .filter(|p| p.is_finite())
        .unwrap_or(FRUIT_DEFAULT_POPULARITY);
    (popularity * 1.8).round().clamp(TEMPO_MIN, FRUIT_TEMPO_MAX)
}

#[derive(Clone, Debug)]
pub struct Fruit {
    pub index: usize,
    pub kind: FruitKind,
    pub label: String,
    pub position: DVec2,
    pub velocity: DVec2,
    pub base_size: f64,
    pub age: f64,
    pub tempo: f64,
    pub pulses_per_beat: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub phase: f64,
    pub completion_x: f64,
    completed: bool,
}

impl Fruit {
    pub fn update(&mut self, dt_sec: f64) {
        self.age += dt_sec;
        self.position += self.velocity * dt_sec;
    }

    /// Current size multiplier from the tempo-driven sinusoid.
    pub fn scale(&self) -> f64 {
        if self.tempo <= 0.0 {
            return 1.0;
        }
        let freq = self.tempo / 60.0 * self.pulses_per_beat;
        let t = 0.5 * (1.0 + (TAU * freq * self.age + self.phase).sin());
        self.min_scale + t * (self.max_scale - self.min_scale)
    }

    pub fn draw_width(&self) -> f64 {
        self.base_size * self.scale()
    }

    /// Direction-aware: at or past the completion line in the travel direction.
    pub fn has_reached_completion(&self) -> bool {
        if self.velocity.x >= 0.0 {
            self.position.x >= self.completion_x
        } else {
            self.position.x <= self.completion_x
        }
    }

    /// Edge-triggered: true only on the first call after crossing.
    fn take_completion(&mut self) -> bool {
        if self.completed || !self.has_reached_completion() {
            return false;
        }
        self.completed = true;
        true
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[derive(Clone, Debug)]
pub struct SpawnerConfig {
    pub lane: DVec2,
    pub interval: Duration,
    pub move_secs: f64,
    pub margin: f64,
    pub max_items: usize,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            lane: DVec2::new(FRUIT_LANE_WIDTH, FRUIT_LANE_HEIGHT),
            interval: FRUIT_SPAWN_INTERVAL,
            move_secs: FRUIT_MOVE_SECS,
            margin: FRUIT_MOVE_MARGIN,
            max_items: VINYL_COUNT,
        }
    }
}

impl SpawnerConfig {
    pub fn start_x(&self) -> f64 {
        -(self.margin * 3.0)
    }

    pub fn completion_x(&self) -> f64 {
        self.lane.x - self.margin * 3.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct FruitSpawner {
    config: SpawnerConfig,
    queue: VecDeque<(usize, DomainItem)>,
    total: usize,
    active: Vec<Fruit>,
    clock: Duration,
    running: bool,
}

impl FruitSpawner {
    pub fn new(config: SpawnerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    /// Load a fresh queue; stops any running sequence.
    pub fn prepare(&mut self, items: &[DomainItem]) {
        self.clear();
        self.queue = items
            .iter()
            .take(self.config.max_items)
            .cloned()
            .enumerate()
            .collect();
        self.total = self.queue.len();
    }

    /// Spawn the first fruit now and arm the interval timer.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.queue.is_empty() {
            return None;
        }
        self.active.clear();
        self.clock = Duration::ZERO;
        self.running = true;
        let spawned = self.spawn_next(rng);
        if self.queue.is_empty() {
            self.running = false;
        }
        spawned
    }

    /// Disarm the interval timer. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.running = false;
        self.clock = Duration::ZERO;
    }

    pub fn clear(&mut self) {
        self.stop();
        self.queue.clear();
        self.active.clear();
        self.total = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn active(&self) -> &[Fruit] {
        &self.active
    }

    fn spawn_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let (index, item) = self.queue.pop_front()?;
        let cfg = &self.config;
        let start_x = cfg.start_x();
        let completion_x = cfg.completion_x();
        let travel = (completion_x - start_x).max(0.0);
        let move_secs = if cfg.move_secs > 0.0 { cfg.move_secs } else { 1.0 };
        let fruit = Fruit {
            index,
            kind: FruitKind::random(rng),
            label: item.display_label(),
            position: DVec2::new(start_x, cfg.lane.y / 2.0),
            velocity: DVec2::new(travel / move_secs, 0.0),
            base_size: FRUIT_BASE_SIZE_MIN + rng.gen::<f64>() * FRUIT_BASE_SIZE_SPAN,
            age: 0.0,
            tempo: fruit_tempo(&item),
            pulses_per_beat: 1.0,
            min_scale: FRUIT_MIN_SCALE,
            max_scale: FRUIT_MAX_SCALE,
            phase: index as f64 / self.total.max(1) as f64 * PI,
            completion_x,
            completed: false,
        };
        log::debug!("[spawner] fruit {} ({:?}) for '{}'", index, fruit.kind, fruit.label);
        self.active.push(fruit);
        if self.queue.is_empty() {
            self.running = false;
        }
        Some(index)
    }

    /// Advance timers and fruits by `dt`. Newly spawned indices go to
    /// `spawned`, indices whose fruit finished its run go to `completed`.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        dt: Duration,
        rng: &mut R,
        spawned: &mut Vec<usize>,
        completed: &mut Vec<usize>,
    ) {
        if self.running {
            self.clock += dt;
            while self.running && self.clock >= self.config.interval {
                self.clock -= self.config.interval;
                if let Some(i) = self.spawn_next(rng) {
                    spawned.push(i);
                }
            }
        }
        let dt_sec = dt.as_secs_f64();
        for fruit in &mut self.active {
            fruit.update(dt_sec);
            if fruit.take_completion() {
                completed.push(fruit.index);
            }
        }
        self.active.retain(|f| !f.completed);
    }
}
