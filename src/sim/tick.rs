//! Per-frame state machine dispatch
//!
//! One tick per captured frame: the shell supplies fresh sensor signals and
//! the wall clock, the engine mutates state in a fixed order (gesture ->
//! collisions -> swarm -> wave check) so runs are reproducible given
//! identical inputs and timestamps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{Bullet, GamePhase, GameState};
use super::swarm;
use super::wave;
use crate::consts::*;

/// Axis-aligned face bounding box from the vision layer, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl FaceRect {
    pub fn center_x(&self) -> f32 {
        (self.min.x + self.max.x) / 2.0
    }
}

/// Discrete user intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Pause,
    Restart,
    Quit,
}

/// Sensor and command input for one tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary detected face, or absent this frame
    pub face: Option<FaceRect>,
    /// Whether eye features were found within the face rectangle
    pub eyes_open: bool,
    pub command: Option<Command>,
    /// Wall-clock time in seconds; all timing gates compare against this
    pub now: f64,
}

/// Discrete outcomes of one tick, for the audio-cue/feedback layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// A blink gesture fired a bullet
    pub fired: bool,
    /// Enemies destroyed by bullets this tick
    pub hits: u32,
    /// Lives lost to breaching enemies this tick
    pub lives_lost: u32,
    /// A wave was cleared and the next one spawned
    pub wave_cleared: bool,
    /// Quit was requested; the shell should exit its loop
    pub quit: bool,
}

/// Ship x for a face center, clamped to keep the hull inside the viewport.
/// Face rectangles partially outside the frame are clamped first.
fn project_ship_x(face: &FaceRect, viewport_w: f32) -> f32 {
    let cx = face.center_x().clamp(0.0, viewport_w);
    (cx - SHIP_WIDTH / 2.0).clamp(0.0, viewport_w - SHIP_WIDTH)
}

/// Advance the engine by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();
    let now = input.now;

    // Quit is accepted in every state and is the only exit
    if input.command == Some(Command::Quit) {
        events.quit = true;
        return events;
    }

    // Ship tracking runs in every state. A stale or absent face holds the
    // last known x rather than recentering.
    let face_recent = if let Some(face) = &input.face {
        state.ship_x = project_ship_x(face, state.viewport.x);
        state.last_face_seen = now;
        true
    } else {
        now - state.last_face_seen < state.tuning.face_grace
    };
    state.eyes_open = input.eyes_open;

    match state.phase {
        GamePhase::Menu => {
            if input.command == Some(Command::Start) {
                state.reset_session(now);
                state.phase = GamePhase::Playing;
                log::info!("Session started");
            }
        }

        GamePhase::Paused => {
            if input.command == Some(Command::Pause) {
                // Timers are wall-clock and not re-based here: a long pause
                // allows one immediate swarm step and one immediate fire on
                // resume. Accepted behavior, pending a product decision.
                state.detector.reset();
                state.phase = GamePhase::Playing;
                log::info!("Resumed");
            }
        }

        GamePhase::GameOver => {
            if input.command == Some(Command::Restart) {
                state.reset_session(now);
                state.phase = GamePhase::Playing;
                log::info!("Session restarted");
            }
        }

        GamePhase::Playing => {
            if input.command == Some(Command::Pause) {
                state.detector.reset();
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return events;
            }

            // Blink gesture -> bullet from the ship muzzle
            if state
                .detector
                .update(input.eyes_open, face_recent, now, &state.tuning)
            {
                state.bullets.push(Bullet {
                    pos: Vec2::new(
                        state.ship_x + SHIP_WIDTH / 2.0,
                        state.viewport.y - SHIP_Y_OFFSET - SHIP_HEIGHT / 2.0,
                    ),
                });
                events.fired = true;
                log::debug!("Blink fire at x={}", state.ship_x + SHIP_WIDTH / 2.0);
            }

            let pass = collision::advance_bullets(&mut state.bullets, &mut state.enemies);
            state.score += pass.score_delta;
            events.hits = pass.kills;

            let lost =
                collision::resolve_breaches(&mut state.enemies, state.ship_x, state.viewport);
            if lost > 0 {
                state.lives -= lost as i32;
                events.lives_lost = lost;
                log::debug!("{lost} breach(es), lives now {}", state.lives);
            }

            swarm::advance(
                &mut state.enemies,
                &mut state.swarm,
                state.viewport.x,
                now,
            );

            events.wave_cleared = wave::check_and_advance(state, now);

            if state.lives <= 0 {
                state.detector.reset();
                state.phase = GamePhase::GameOver;
                log::info!(
                    "Game over at level {} with score {}",
                    state.level,
                    state.score
                );
            }
        }
    }

    events
}
