//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per captured frame, driven by the shell
//! - Wall-clock timestamps supplied by the caller, never read internally
//! - Fixed mutation order (gesture -> collisions -> swarm -> wave check)
//! - No capture, rendering or audio dependencies

pub mod collision;
pub mod gesture;
pub mod state;
pub mod swarm;
pub mod tick;
pub mod wave;

pub use gesture::BlinkDetector;
pub use state::{Bullet, Enemy, EnemyBox, GamePhase, GameState, Snapshot, Swarm};
pub use tick::{Command, FaceRect, TickEvents, TickInput, tick};
pub use wave::spawn_wave;
