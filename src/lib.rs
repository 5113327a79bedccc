//! Blink Invaders - a webcam-controlled arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gesture FSM, swarm AI, collisions, waves)
//! - `settings`: Data-driven gameplay tuning
//!
//! The engine never touches pixels. The shell feeds it abstract per-tick
//! signals (face rectangle or absence, eyes-open boolean, command key,
//! wall-clock time) and gets back an immutable [`sim::Snapshot`] plus discrete
//! [`sim::TickEvents`] for rendering, HUD and audio cues. Video capture,
//! face/eye detection and drawing all live outside this crate.

pub mod settings;
pub mod sim;

pub use settings::Tuning;

/// Game configuration constants
pub mod consts {
    /// Player lives at session start
    pub const MAX_LIVES: i32 = 3;

    /// Ship geometry - vertical position is fixed relative to the bottom edge
    pub const SHIP_Y_OFFSET: f32 = 80.0;
    pub const SHIP_WIDTH: f32 = 80.0;
    pub const SHIP_HEIGHT: f32 = 30.0;

    /// Bullet climb per tick (pixels)
    pub const BULLET_SPEED: f32 = 12.0;

    /// Minimum seconds between fires
    pub const BLINK_COOLDOWN: f64 = 0.35;
    /// Consecutive eyes-closed frames before a closure counts as a blink
    pub const EYES_CLOSED_FRAMES: u32 = 2;
    /// Maximum open-frame gap for a closure to still read as a brief blink
    pub const EYES_OPEN_MAX_GAP: u32 = 10;
    /// How long a face detection stays valid without a fresh sighting (seconds)
    pub const FACE_GRACE: f64 = 1.0;

    /// Enemy formation (level 1 base values; scaled per wave)
    pub const ENEMY_COLS_BASE: u32 = 6;
    pub const ENEMY_COLS_MAX: u32 = 8;
    pub const ENEMY_ROWS: u32 = 3;
    pub const ENEMY_W: f32 = 50.0;
    pub const ENEMY_H: f32 = 30.0;
    pub const ENEMY_H_GAP: f32 = 20.0;
    pub const ENEMY_V_GAP: f32 = 26.0;
    pub const ENEMY_TOP_Y: f32 = 60.0;
    pub const ENEMY_SPEED_BASE: f32 = 3.0;
    pub const ENEMY_SPEED_MAX: f32 = 12.0;
    pub const ENEMY_STEP_DOWN: f32 = 18.0;
    pub const ENEMY_MOVE_INTERVAL_BASE: f64 = 0.08;
    pub const ENEMY_MOVE_INTERVAL_MIN: f64 = 0.02;
    /// Per-level geometric shrink applied to the step interval
    pub const ENEMY_INTERVAL_DECAY: f64 = 0.96;

    /// Horizontal margin the swarm bounces off
    pub const MARGIN_X: f32 = 10.0;
    /// Slack above the ship baseline at which an enemy counts as breaching
    pub const FLOOR_SLACK: f32 = 5.0;

    /// Scoring
    pub const KILL_REWARD: u32 = 10;
    pub const WAVE_CLEAR_BONUS: u32 = 100;
}
