//! Blink-to-fire gesture detection
//!
//! A small FSM over a noisy per-frame eyes-open boolean. Cascade-style eye
//! detectors drop single frames routinely, so a closure only arms the
//! detector after a minimum run of closed frames, and the closed->open
//! transition that completes the blink is rate-limited by a cooldown. Very
//! long closures read as "eyes off", not a gesture.

use serde::{Deserialize, Serialize};

use crate::settings::Tuning;

/// Blink gesture recognizer state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlinkDetector {
    closed_frames: u32,
    open_frames: u32,
    was_closed: bool,
    last_fire: f64,
}

impl Default for BlinkDetector {
    fn default() -> Self {
        Self {
            closed_frames: 0,
            open_frames: 0,
            was_closed: false,
            // Eligible to fire on the first valid gesture, whatever the
            // caller's clock origin is
            last_fire: f64::NEG_INFINITY,
        }
    }
}

impl BlinkDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return counters and the armed flag to neutral. The last-fire time is
    /// kept so the cooldown spacing holds across resets.
    pub fn reset(&mut self) {
        self.closed_frames = 0;
        self.open_frames = 0;
        self.was_closed = false;
    }

    /// Feed one frame of the eye signal. Returns true when a blink-to-fire
    /// gesture completes on this frame.
    ///
    /// A stale face (`face_recent == false`) resets the FSM and never fires:
    /// whatever was being tracked is noise, not a gesture.
    pub fn update(&mut self, eyes_open: bool, face_recent: bool, now: f64, tuning: &Tuning) -> bool {
        if !face_recent {
            self.reset();
            return false;
        }

        if eyes_open {
            self.open_frames += 1;
            let fired = self.was_closed
                && self.open_frames <= tuning.eyes_open_max_gap
                && now - self.last_fire > tuning.blink_cooldown;
            if fired {
                self.last_fire = now;
            }
            self.was_closed = false;
            self.closed_frames = 0;
            fired
        } else {
            self.closed_frames += 1;
            self.open_frames = 0;
            if self.closed_frames >= tuning.eyes_closed_frames {
                self.was_closed = true;
            }
            false
        }
    }

    /// Fraction of the fire cooldown that has elapsed (1.0 = ready to fire)
    pub fn cooldown_fraction(&self, now: f64, tuning: &Tuning) -> f32 {
        if tuning.blink_cooldown <= 0.0 {
            return 1.0;
        }
        ((now - self.last_fire) / tuning.blink_cooldown).clamp(0.0, 1.0) as f32
    }
}
