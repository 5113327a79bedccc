//! Blink Invaders headless demo driver
//!
//! Feeds the engine a scripted session: a synthetic face sweeping across the
//! viewport with seeded sensor jitter, blinking on a schedule and dropping
//! out occasionally. Useful for eyeballing the log output and as an
//! end-to-end smoke run; a real shell supplies webcam-derived signals and a
//! renderer instead.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use blink_invaders::Tuning;
use blink_invaders::sim::{Command, FaceRect, GamePhase, GameState, TickInput, tick};

/// Simulated capture rate
const FRAME_DT: f64 = 1.0 / 30.0;

fn main() {
    env_logger::init();

    let viewport = Vec2::new(640.0, 480.0);
    let tuning = match std::env::var("BLINK_TUNING") {
        Ok(path) => Tuning::load_from(std::path::Path::new(&path)),
        Err(_) => Tuning::default(),
    };

    let mut state = GameState::new(viewport, tuning, 0.0);
    let mut rng = Pcg32::seed_from_u64(7);
    let mut now = 0.0;

    let start = TickInput {
        command: Some(Command::Start),
        eyes_open: true,
        now,
        ..Default::default()
    };
    tick(&mut state, &start);

    for frame in 0u32..6000 {
        now += FRAME_DT;

        // Face sweeps side to side with a little detector jitter; every 40th
        // frame the detector loses it entirely
        let sweep = ((now * 0.6).sin() as f32 * 0.5 + 0.5) * viewport.x;
        let cx = (sweep + rng.random_range(-4.0..4.0)).clamp(0.0, viewport.x);
        let face = (frame % 40 != 39).then(|| FaceRect {
            min: Vec2::new(cx - 60.0, 90.0),
            max: Vec2::new(cx + 60.0, 210.0),
        });

        // Blink every 12 frames: two closed, the rest open
        let eyes_open = frame % 12 >= 2;

        let input = TickInput {
            face,
            eyes_open,
            command: None,
            now,
        };
        let events = tick(&mut state, &input);

        if events.wave_cleared {
            log::info!("demo: wave cleared at frame {frame}");
        }
        if state.phase == GamePhase::GameOver {
            log::info!("demo: game over at frame {frame}");
            break;
        }
    }

    let snap = state.snapshot(now);
    println!(
        "final: phase={:?} score={} lives={} level={} enemies={}",
        snap.phase,
        snap.score,
        snap.lives,
        snap.level,
        snap.enemies.len()
    );
}
