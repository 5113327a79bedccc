//! Swarm formation movement
//!
//! The formation advances on a wall-clock interval, decoupled from frame
//! rate, so the per-level interval shrink is a real difficulty ramp rather
//! than an FPS artifact. At a margin the whole formation drops one row height
//! and reverses instead of moving horizontally.

use super::state::{Enemy, Swarm};
use crate::consts::*;

/// Horizontal extent (min left edge, max right edge) of the live formation.
/// `None` when nothing is alive; the bounds of an empty swarm are meaningless
/// and callers must not step one.
pub fn bounds(enemies: &[Enemy]) -> Option<(f32, f32)> {
    let mut extent: Option<(f32, f32)> = None;
    for e in enemies.iter().filter(|e| e.alive) {
        let (left, right) = extent.unwrap_or((f32::INFINITY, f32::NEG_INFINITY));
        extent = Some((left.min(e.pos.x), right.max(e.pos.x + ENEMY_W)));
    }
    extent
}

/// Step the formation if its interval has elapsed.
///
/// No-op while the interval is pending or no enemy is alive. When the next
/// horizontal step would reach or cross a margin, every alive enemy drops by
/// [`ENEMY_STEP_DOWN`] and the direction inverts; no horizontal move happens
/// on that step.
pub fn advance(enemies: &mut [Enemy], swarm: &mut Swarm, viewport_w: f32, now: f64) {
    if now - swarm.last_move <= swarm.interval {
        return;
    }
    let Some((left, right)) = bounds(enemies) else {
        return;
    };
    swarm.last_move = now;

    let at_edge = (swarm.dir > 0.0 && right + swarm.speed >= viewport_w - MARGIN_X)
        || (swarm.dir < 0.0 && left - swarm.speed <= MARGIN_X);

    if at_edge {
        for e in enemies.iter_mut().filter(|e| e.alive) {
            e.pos.y += ENEMY_STEP_DOWN;
        }
        swarm.dir = -swarm.dir;
    } else {
        for e in enemies.iter_mut().filter(|e| e.alive) {
            e.pos.x += swarm.speed * swarm.dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn swarm(dir: f32, speed: f32) -> Swarm {
        Swarm {
            dir,
            speed,
            interval: 0.0,
            last_move: -1.0,
        }
    }

    #[test]
    fn moves_horizontally_away_from_edges() {
        let mut enemies = vec![Enemy::new(Vec2::new(100.0, 60.0))];
        let mut s = swarm(1.0, 5.0);
        advance(&mut enemies, &mut s, 500.0, 0.0);
        assert_eq!(enemies[0].pos, Vec2::new(105.0, 60.0));
        assert_eq!(s.dir, 1.0);
        assert_eq!(s.last_move, 0.0);
    }

    #[test]
    fn bounces_and_descends_at_right_margin() {
        // Right edge 485 + speed 5 reaches 490 = width 500 - margin 10
        let mut enemies = vec![Enemy::new(Vec2::new(435.0, 60.0))];
        let mut s = swarm(1.0, 5.0);
        advance(&mut enemies, &mut s, 500.0, 0.0);
        assert_eq!(enemies[0].pos.x, 435.0);
        assert_eq!(enemies[0].pos.y, 60.0 + ENEMY_STEP_DOWN);
        assert_eq!(s.dir, -1.0);
    }

    #[test]
    fn bounces_at_left_margin() {
        // Left edge 14 - speed 5 crosses the margin at 10
        let mut enemies = vec![Enemy::new(Vec2::new(14.0, 60.0))];
        let mut s = swarm(-1.0, 5.0);
        advance(&mut enemies, &mut s, 500.0, 0.0);
        assert_eq!(enemies[0].pos.x, 14.0);
        assert_eq!(enemies[0].pos.y, 60.0 + ENEMY_STEP_DOWN);
        assert_eq!(s.dir, 1.0);
    }

    #[test]
    fn time_gated_not_frame_gated() {
        let mut enemies = vec![Enemy::new(Vec2::new(100.0, 60.0))];
        let mut s = Swarm {
            dir: 1.0,
            speed: 5.0,
            interval: 0.08,
            last_move: 0.0,
        };
        // Many frames inside the interval: no movement
        for i in 1..=7 {
            advance(&mut enemies, &mut s, 500.0, i as f64 * 0.01);
        }
        assert_eq!(enemies[0].pos.x, 100.0);
        // Once the interval elapses, exactly one step
        advance(&mut enemies, &mut s, 500.0, 0.09);
        assert_eq!(enemies[0].pos.x, 105.0);
        assert_eq!(s.last_move, 0.09);
    }

    #[test]
    fn dead_swarm_is_a_no_op() {
        let mut e = Enemy::new(Vec2::new(100.0, 60.0));
        e.alive = false;
        let mut enemies = vec![e];
        let mut s = swarm(1.0, 5.0);
        advance(&mut enemies, &mut s, 500.0, 0.0);
        assert_eq!(enemies[0].pos, Vec2::new(100.0, 60.0));
        // The step was not consumed either
        assert_eq!(s.last_move, -1.0);
    }

    #[test]
    fn bounds_track_live_enemies_only() {
        let mut enemies = vec![
            Enemy::new(Vec2::new(50.0, 60.0)),
            Enemy::new(Vec2::new(200.0, 60.0)),
            Enemy::new(Vec2::new(400.0, 60.0)),
        ];
        assert_eq!(bounds(&enemies), Some((50.0, 400.0 + ENEMY_W)));
        enemies[2].alive = false;
        assert_eq!(bounds(&enemies), Some((50.0, 200.0 + ENEMY_W)));
        enemies[0].alive = false;
        enemies[1].alive = false;
        assert_eq!(bounds(&enemies), None);
    }
}
