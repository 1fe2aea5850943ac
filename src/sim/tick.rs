//! Fixed timestep simulation tick
//!
//! One tick advances the runner, runs the spawner and off-screen
//! cleanup, then scans for collisions. Ticks are live only while the
//! session is Running; in every other phase the loop is suspended and
//! `tick` returns without touching state. A collision is reported as a
//! typed event rather than through callbacks, and it is the sole
//! trigger for the Running -> Quiz transition.

use super::collision;
use super::spawn;
use super::state::{ObstacleId, Phase, SessionState};

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing noteworthy happened
    None,
    /// The runner hit this obstacle; the session is now in Quiz
    Collision(ObstacleId),
}

/// Advance the session by one fixed timestep.
///
/// No-op unless the phase is Running. At most one collision event is
/// raised per tick; the first overlapping obstacle in spawn order wins.
pub fn tick(state: &mut SessionState, dt: f32) -> TickEvent {
    if state.phase != Phase::Running {
        return TickEvent::None;
    }

    state.time_ticks += 1;

    // Motion step: runner advances, obstacles are fixed in world space,
    // so they close on the runner at exactly the run speed.
    state.runner.pos.x += state.config.run_speed * dt;

    spawn::cleanup(state);
    spawn::spawn_step(state);

    let threshold = state.config.collision_radius();
    if let Some(id) = collision::scan(state.runner.pos, &state.obstacles, threshold) {
        state.enter_quiz(id);
        log::debug!("collision with {:?}, entering quiz", id);
        return TickEvent::Collision(id);
    }

    TickEvent::None
}
