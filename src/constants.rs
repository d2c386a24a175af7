// Front-end wiring and drawing constants. Layout and animation tuning lives
// in `vinyl_core::constants`.

// Canvases
pub const WAVE_CANVAS_ID: &str = "wave-canvas";
pub const VINYL_CANVAS_ID: &str = "vinyl-canvas";
pub const FRUIT_CANVAS_ID: &str = "fruit-canvas";

// Controls
pub const APPLY_RANGE_ID: &str = "apply-range";
pub const EAT_BUTTON_ID: &str = "eat-button";
pub const START_RANGE_ID: &str = "start-range";
pub const RANGE_LABEL_ID: &str = "range-label";
pub const RANGE_STATUS_ID: &str = "range-status";
pub const WAVE_OPACITY_ID: &str = "wave-opacity";
pub const WAVE_OPACITY_VALUE_ID: &str = "wave-opacity-value";
pub const SHOW_WAVE_LABELS_ID: &str = "show-wave-labels";
pub const HINT_OVERLAY_ID: &str = "hint-overlay";
pub const LOGIN_BUTTON_ID: &str = "login-button";
pub const LOGOUT_BUTTON_ID: &str = "logout-button";

// Radio groups
pub const TIME_RANGE_GROUP: &str = "time-range";
pub const DATA_TYPE_GROUP: &str = "data-type";
pub const WAVE_SHAPE_GROUP: &str = "wave-shape";

// Navigation targets
pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";

// Caterpillar sprites
pub const HEAD_ASSET: &str = "assets/caterpillar_head.png";
pub const HEAD_CLOSED_ASSET: &str = "assets/caterpillar_head_closed.png";
pub const TAIL_ASSET: &str = "assets/caterpillar_butt.png";

// Keyboard
pub const OPACITY_KEY_STEP: f64 = 0.05;

// Frame pacing
// Longest step fed to the scene; longer gaps (hidden tab) are clamped.
pub const MAX_FRAME_DT_SEC: f64 = 0.25;

// Record styling
pub const DISC_EDGE_FILL: &str = "#0f0f0f";
pub const GROOVE_STROKE: &str = "rgba(255,255,255,0.04)";
pub const CENTER_DOT_FILL: &str = "#f0f0f0";
pub const RING_TEXT_FILL: &str = "#ffffff";
pub const SPIRAL_LINE_WIDTH: f64 = 2.0;
pub const UI_FONT_FAMILY: &str =
    "system-ui, -apple-system, BlinkMacSystemFont, \"Segoe UI\", sans-serif";

// Hover panel
pub const PANEL_FILL: &str = "rgba(0,0,0,0.7)";
pub const PANEL_TEXT_FILL: &str = "#ffffff";
pub const PANEL_CORNER_RADIUS: f64 = 8.0;

// Background labels
pub const WAVE_LABEL_FONT: &str = "bold 18px sans-serif";
