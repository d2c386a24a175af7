use std::f64::consts::PI;
use std::time::Duration;

// Shared layout/animation tuning constants used by the core and the web frontend.

// Data windows
pub const MAX_TOP_ITEMS: u32 = 100; // ranked items the data source can return
pub const DISPLAY_LIMIT: u32 = 10; // items fetched per rank window
pub const VINYL_COUNT: usize = 15; // hard cap on records in one scene

// Scene canvas
pub const CANVAS_WIDTH: f64 = 1440.0;
pub const CANVAS_HEIGHT: f64 = 760.0;
pub const CANVAS_LEFT_PADDING: f64 = 150.0;

// Records
pub const VINYL_OUTER_RADIUS: f64 = 68.0;
pub const VINYL_INNER_RADIUS: f64 = 32.0;
pub const SPACING_FACTOR: f64 = 2.1; // center-to-center distance in outer radii
pub const SPINS_PER_BEAT: f64 = 0.05; // one full turn every 20 beats
pub const GROOVE_STEP: f64 = 6.0;
pub const SPIRAL_TURNS: f64 = 3.0;
pub const SPIRAL_SEGMENTS: usize = 72;

// Wave path
pub const PATH_STEPS: usize = 600;
pub const PATH_EDGE_PADDING: f64 = 20.0; // added to the radius on every side
pub const PATH_PHASE: f64 = -PI / 2.0; // start at the bottom of the canvas

// Fruit lane
pub const FRUIT_LANE_WIDTH: f64 = 280.0;
pub const FRUIT_LANE_HEIGHT: f64 = 360.0;
pub const FRUIT_SPAWN_INTERVAL: Duration = Duration::from_millis(2000);
pub const FRUIT_MOVE_SECS: f64 = 2.0;
pub const FRUIT_MOVE_MARGIN: f64 = 24.0;
pub const FRUIT_BASE_SIZE_MIN: f64 = 120.0;
pub const FRUIT_BASE_SIZE_SPAN: f64 = 60.0;
pub const FRUIT_MIN_SCALE: f64 = 0.92;
pub const FRUIT_MAX_SCALE: f64 = 1.08;
pub const FRUIT_DEFAULT_POPULARITY: f64 = 75.0;

// Caterpillar anchors
pub const ANCHOR_SIZE_FACTOR: f64 = 2.5; // sprite edge in outer radii
pub const WAVE_START_OFFSET: f64 = FRUIT_LANE_WIDTH / 3.0;
pub const TAIL_ROTATION_SPEED: f64 = 0.3; // rad/s
pub const HEAD_MOUTH_TOGGLE_SECS: f64 = 0.35;
pub const HEAD_CLOSED_ROTATION: f64 = -PI / 12.0;

// Tempo proxy
pub const TEMPO_MIN: f64 = 70.0;
pub const TEMPO_MAX: f64 = 180.0;
pub const FRUIT_TEMPO_MAX: f64 = 200.0;

// Wave background
pub const WAVE_COLOR_LIMIT: usize = 10;
pub const WAVE_OPACITY: f64 = 0.7;
pub const WAVE_SPEED_DEFAULT: f64 = 0.3;
pub const WAVE_SPEED_MIN: f64 = 0.4;
pub const WAVE_SPEED_MAX: f64 = 0.5;
pub const WAVE_LABEL_ALPHA: f64 = 0.3;

// Color extraction
pub const THUMBNAIL_SIZE: u32 = 32;
pub const ALPHA_THRESHOLD: u8 = 16;
pub const KMEANS_K: usize = 3;
pub const KMEANS_ITERATIONS: usize = 6;
pub const PALETTE_TOP_N: usize = 2;
pub const LUMINANCE_THRESHOLD: f64 = 0.7;
