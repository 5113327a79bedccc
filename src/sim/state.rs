//! Game state and core simulation types
//!
//! All session state lives here as plain owned structs. The original vision
//! demo kept these as loosely related mutable globals; the engine instead
//! threads one [`GameState`] through pure per-tick functions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::gesture::BlinkDetector;
use super::wave;
use crate::consts::*;
use crate::settings::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a start command
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-session; timers keep running on the wall clock
    Paused,
    /// Run ended, waiting for restart or quit
    GameOver,
}

/// One enemy in the formation. Fixed-size box, top-left anchored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub alive: bool,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, alive: true }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + Vec2::new(ENEMY_W, ENEMY_H)
    }

    /// Point containment against this enemy's box (edges inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        self.pos.x <= p.x && p.x <= max.x && self.pos.y <= p.y && p.y <= max.y
    }

    /// AABB overlap: none of the four separating-axis conditions hold
    pub fn overlaps(&self, other_min: Vec2, other_max: Vec2) -> bool {
        let max = self.max();
        !(max.x < other_min.x
            || self.pos.x > other_max.x
            || max.y < other_min.y
            || self.pos.y > other_max.y)
    }
}

/// A player bullet, climbing toward the top edge
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
}

/// Formation movement parameters, regenerated with each wave
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Swarm {
    /// +1.0 moving right, -1.0 moving left
    pub dir: f32,
    /// Horizontal pixels per step
    pub speed: f32,
    /// Wall-clock seconds between steps
    pub interval: f64,
    /// Timestamp of the last step taken
    pub last_move: f64,
}

/// Complete engine state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Frame dimensions, fixed for the session (read once from the capture)
    pub viewport: Vec2,
    /// Gameplay knobs
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: i32,
    /// 1-based, increments on each cleared wave
    pub level: u32,
    /// Ship x, projected from the most recent valid face rectangle
    pub ship_x: f32,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub swarm: Swarm,
    pub detector: BlinkDetector,
    /// Timestamp of the last tick that carried a face rectangle
    pub last_face_seen: f64,
    /// Raw eyes-open flag from the last tick, echoed for the HUD
    pub eyes_open: bool,
}

impl GameState {
    /// Create a fresh engine in the menu phase. A formation is spawned so the
    /// title screen has something behind it, exactly like a live session.
    pub fn new(viewport: Vec2, tuning: Tuning, now: f64) -> Self {
        let lives = tuning.max_lives;
        let (enemies, swarm) = wave::spawn_wave(1, viewport.x, now);
        Self {
            viewport,
            tuning,
            phase: GamePhase::Menu,
            score: 0,
            lives,
            level: 1,
            ship_x: 0.0,
            bullets: Vec::new(),
            enemies,
            swarm,
            detector: BlinkDetector::new(),
            last_face_seen: f64::NEG_INFINITY,
            eyes_open: false,
        }
    }

    /// Full session reset: lives to max, score to 0, level to 1, bullets
    /// cleared, fresh level-1 swarm. Used for both menu start and restart.
    pub fn reset_session(&mut self, now: f64) {
        self.lives = self.tuning.max_lives;
        self.score = 0;
        self.level = 1;
        self.bullets.clear();
        let (enemies, swarm) = wave::spawn_wave(1, self.viewport.x, now);
        self.enemies = enemies;
        self.swarm = swarm;
        self.detector.reset();
    }

    /// Y of the ship's bottom edge (the defense line enemies must not reach)
    pub fn ship_baseline(&self) -> f32 {
        self.viewport.y - SHIP_Y_OFFSET
    }

    /// Immutable per-tick output for the rendering/HUD layer
    pub fn snapshot(&self, now: f64) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            level: self.level,
            enemies: self
                .enemies
                .iter()
                .filter(|e| e.alive)
                .map(|e| EnemyBox {
                    min: e.min(),
                    max: e.max(),
                })
                .collect(),
            bullets: self.bullets.iter().map(|b| b.pos).collect(),
            ship_x: self.ship_x,
            eyes_open: self.eyes_open,
            cooldown_ready: self.detector.cooldown_fraction(now, &self.tuning),
        }
    }
}

/// Axis-aligned box of one alive enemy, in viewport pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyBox {
    pub min: Vec2,
    pub max: Vec2,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: i32,
    pub level: u32,
    /// Alive enemies only, in formation order
    pub enemies: Vec<EnemyBox>,
    pub bullets: Vec<Vec2>,
    pub ship_x: f32,
    pub eyes_open: bool,
    /// Fraction of the fire cooldown elapsed (1.0 = ready), for the HUD bar
    pub cooldown_ready: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_lists_alive_enemies_only() {
        let state = {
            let mut s = GameState::new(Vec2::new(640.0, 480.0), Tuning::default(), 0.0);
            s.enemies[0].alive = false;
            s.enemies[1].alive = false;
            s
        };
        let total = state.enemies.len();
        let snap = state.snapshot(0.0);
        assert_eq!(snap.enemies.len(), total - 2);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.level, 1);
    }

    #[test]
    fn enemy_box_containment_and_overlap() {
        let e = Enemy::new(Vec2::new(100.0, 60.0));
        assert!(e.contains(Vec2::new(100.0, 60.0)));
        assert!(e.contains(Vec2::new(150.0, 90.0)));
        assert!(!e.contains(Vec2::new(151.0, 75.0)));
        assert!(!e.contains(Vec2::new(120.0, 91.0)));

        // Touching edges still count as overlap
        assert!(e.overlaps(Vec2::new(150.0, 90.0), Vec2::new(200.0, 120.0)));
        assert!(!e.overlaps(Vec2::new(151.0, 60.0), Vec2::new(200.0, 90.0)));
    }

    #[test]
    fn reset_restores_session_defaults() {
        let mut state = GameState::new(Vec2::new(640.0, 480.0), Tuning::default(), 0.0);
        state.score = 500;
        state.lives = 1;
        state.level = 4;
        state.bullets.push(Bullet {
            pos: Vec2::new(10.0, 10.0),
        });
        state.reset_session(1.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.iter().all(|e| e.alive));
        assert_eq!(state.swarm.dir, 1.0);
    }
}
