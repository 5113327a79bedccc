//! Wave generation and clearance
//!
//! Each wave is a fresh, horizontally centered grid of enemies. Column count,
//! step speed and step interval scale with level, saturating at caps so high
//! levels stay playable. Clearing a wave destroys the old collection; nothing
//! from it survives into the next one.

use glam::Vec2;

use super::state::{Enemy, GameState, Swarm};
use crate::consts::*;

/// Columns for a level: one more per level, up to the cap
pub fn columns_for_level(level: u32) -> u32 {
    (ENEMY_COLS_BASE + level.saturating_sub(1)).min(ENEMY_COLS_MAX)
}

/// Horizontal pixels per swarm step, capped
pub fn speed_for_level(level: u32) -> f32 {
    (ENEMY_SPEED_BASE + level.saturating_sub(1) as f32).min(ENEMY_SPEED_MAX)
}

/// Seconds between swarm steps: shrinks geometrically, floored
pub fn interval_for_level(level: u32) -> f64 {
    (ENEMY_MOVE_INTERVAL_BASE * ENEMY_INTERVAL_DECAY.powi(level.saturating_sub(1) as i32))
        .max(ENEMY_MOVE_INTERVAL_MIN)
}

/// Build a freshly centered formation and its movement parameters for a level
pub fn spawn_wave(level: u32, viewport_w: f32, now: f64) -> (Vec<Enemy>, Swarm) {
    let cols = columns_for_level(level);
    let total_w = cols as f32 * ENEMY_W + (cols - 1) as f32 * ENEMY_H_GAP;
    let start_x = ((viewport_w - total_w) / 2.0).max(MARGIN_X);

    let mut enemies = Vec::with_capacity((ENEMY_ROWS * cols) as usize);
    for r in 0..ENEMY_ROWS {
        for c in 0..cols {
            enemies.push(Enemy::new(Vec2::new(
                start_x + c as f32 * (ENEMY_W + ENEMY_H_GAP),
                ENEMY_TOP_Y + r as f32 * (ENEMY_H + ENEMY_V_GAP),
            )));
        }
    }

    let swarm = Swarm {
        dir: 1.0,
        speed: speed_for_level(level),
        interval: interval_for_level(level),
        last_move: now,
    };
    (enemies, swarm)
}

/// Wave-clear check. When no enemy remains alive, award the clear bonus,
/// increment the level and spawn the next formation. Returns true when a new
/// wave was spawned.
///
/// Safe to call every tick: a freshly spawned wave has live enemies, so a
/// second call cannot double-advance.
pub fn check_and_advance(state: &mut GameState, now: f64) -> bool {
    if state.enemies.iter().any(|e| e.alive) {
        return false;
    }
    state.score += WAVE_CLEAR_BONUS;
    state.level += 1;
    let (enemies, swarm) = spawn_wave(state.level, state.viewport.x, now);
    state.enemies = enemies;
    state.swarm = swarm;
    log::info!(
        "Wave cleared: level {} begins with {} columns at {} px/step",
        state.level,
        columns_for_level(state.level),
        state.swarm.speed
    );
    true
}
