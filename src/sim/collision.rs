//! Bullet advancement and collision resolution
//!
//! Two passes per tick: bullets climb and are tested point-in-box against
//! alive enemies, then the breach pass destroys any enemy that reaches the
//! ship baseline or overlaps the ship hull, at the cost of a life each.

use glam::Vec2;

use super::state::{Bullet, Enemy};
use crate::consts::*;

/// Outcome of one bullet pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulletPass {
    pub score_delta: u32,
    pub kills: u32,
}

/// Advance every bullet one tick and resolve bullet/enemy hits.
///
/// A bullet that crosses the top edge is silently discarded before any
/// collision test. A surviving bullet is tested against alive enemies in
/// formation order; the first containing box wins and the bullet is retired,
/// so one bullet scores at most one kill.
pub fn advance_bullets(bullets: &mut Vec<Bullet>, enemies: &mut [Enemy]) -> BulletPass {
    let mut pass = BulletPass::default();
    bullets.retain_mut(|b| {
        b.pos.y -= BULLET_SPEED;
        if b.pos.y <= 0.0 {
            return false;
        }
        for e in enemies.iter_mut().filter(|e| e.alive) {
            if e.contains(b.pos) {
                e.alive = false;
                pass.score_delta += KILL_REWARD;
                pass.kills += 1;
                return false;
            }
        }
        true
    });
    pass
}

/// Destroy enemies that breach the defense line. Returns lives lost.
///
/// Reaching the ship baseline (bottom edge within [`FLOOR_SLACK`] of it) is
/// terminal regardless of horizontal position - the enemy leaked past the
/// defense. Otherwise a standard AABB overlap with the ship hull also costs
/// a life. Either way the enemy is destroyed; the session only ends when
/// lives run out.
pub fn resolve_breaches(enemies: &mut [Enemy], ship_x: f32, viewport: Vec2) -> u32 {
    let baseline = viewport.y - SHIP_Y_OFFSET;
    let ship_min = Vec2::new(ship_x, baseline - SHIP_HEIGHT);
    let ship_max = Vec2::new(ship_x + SHIP_WIDTH, baseline);

    let mut lives_lost = 0;
    for e in enemies.iter_mut().filter(|e| e.alive) {
        if e.pos.y + ENEMY_H >= baseline - FLOOR_SLACK {
            e.alive = false;
            lives_lost += 1;
            continue;
        }
        if e.overlaps(ship_min, ship_max) {
            e.alive = false;
            lives_lost += 1;
        }
    }
    lives_lost
}
