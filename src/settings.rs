//! Gameplay tuning
//!
//! The knobs a product owner adjusts without recompiling: session lives,
//! blink thresholds and the face grace window. Defaults match the shipped
//! balance; a JSON file can override them. Fixed geometry stays in
//! [`crate::consts`].

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay knobs, serialized as JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tuning {
    /// Lives at session start
    pub max_lives: i32,
    /// Minimum seconds between blink fires
    pub blink_cooldown: f64,
    /// Consecutive closed frames before a closure arms the detector
    pub eyes_closed_frames: u32,
    /// Maximum open-frame gap for a closure to still count as a brief blink
    pub eyes_open_max_gap: u32,
    /// Seconds a face sighting stays valid
    pub face_grace: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_lives: MAX_LIVES,
            blink_cooldown: BLINK_COOLDOWN,
            eyes_closed_frames: EYES_CLOSED_FRAMES,
            eyes_open_max_gap: EYES_OPEN_MAX_GAP,
            face_grace: FACE_GRACE,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults when the file
    /// is missing or malformed. Missing fields take their default values.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write tuning as pretty JSON
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Tuning saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_balance() {
        let t = Tuning::default();
        assert_eq!(t.max_lives, 3);
        assert_eq!(t.blink_cooldown, 0.35);
        assert_eq!(t.eyes_closed_frames, 2);
        assert_eq!(t.eyes_open_max_gap, 10);
        assert_eq!(t.face_grace, 1.0);
    }

    #[test]
    fn json_round_trip() {
        let t = Tuning {
            max_lives: 5,
            blink_cooldown: 0.5,
            ..Default::default()
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let back: Tuning = serde_json::from_str(r#"{"max_lives": 9}"#).unwrap();
        assert_eq!(back.max_lives, 9);
        assert_eq!(back.blink_cooldown, 0.35);
    }
}
