//! Probabilistic obstacle spawner and off-screen cleanup
//!
//! Each Running tick, with a small fixed probability and subject to a
//! live-obstacle cap, a new obstacle appears at a random vertical
//! position within the playable band, horizontally offset ahead of the
//! runner. All randomness comes from the session's seeded RNG so runs
//! replay deterministically.

use glam::Vec2;
use rand::Rng;

use super::state::{Obstacle, SessionState};

/// Maybe spawn one obstacle ahead of the runner
pub fn spawn_step(state: &mut SessionState) {
    if state.obstacles.len() >= state.config.max_obstacles {
        return;
    }
    if state.rng.random::<f32>() >= state.config.spawn_chance {
        return;
    }

    let ahead = state
        .rng
        .random_range(state.config.spawn_ahead_min..state.config.spawn_ahead_max);
    let y = state
        .rng
        .random_range(state.config.band_min_y..state.config.band_max_y);
    let pos = Vec2::new(state.runner.pos.x + ahead, y);

    let id = state.next_obstacle_id();
    state.obstacles.push(Obstacle { id, pos });
    log::trace!("spawned obstacle {:?} at {:?}", id, pos);
}

/// Despawn obstacles that have scrolled behind the runner beyond the
/// cleanup margin. The pending (quiz-linked) obstacle is exempt.
pub fn cleanup(state: &mut SessionState) {
    let cutoff = state.runner.pos.x - state.config.cleanup_margin;
    let pending = state.pending;
    state
        .obstacles
        .retain(|o| Some(o.id) == pending || o.pos.x >= cutoff);
}
