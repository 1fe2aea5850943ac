//! Data-driven simulation tuning
//!
//! Every gameplay tunable lives here so hosts can ship balance files
//! without recompiling. Defaults mirror `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation parameters for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Runner horizontal speed (units/sec) while Running
    pub run_speed: f32,
    /// Runner bounding size (diameter used for the overlap test)
    pub runner_size: f32,
    /// Obstacle bounding size
    pub obstacle_size: f32,
    /// Per-tick spawn probability
    pub spawn_chance: f32,
    /// Horizontal spawn window ahead of the runner
    pub spawn_ahead_min: f32,
    pub spawn_ahead_max: f32,
    /// Playable vertical band for spawned obstacles
    pub band_min_y: f32,
    pub band_max_y: f32,
    /// Maximum concurrent live obstacles
    pub max_obstacles: usize,
    /// Distance behind the runner at which obstacles despawn
    pub cleanup_margin: f32,
    /// Score awarded per correct answer
    pub points_per_correct: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            run_speed: RUN_SPEED,
            runner_size: RUNNER_SIZE,
            obstacle_size: OBSTACLE_SIZE,
            spawn_chance: SPAWN_CHANCE,
            spawn_ahead_min: SPAWN_AHEAD_MIN,
            spawn_ahead_max: SPAWN_AHEAD_MAX,
            band_min_y: BAND_MIN_Y,
            band_max_y: BAND_MAX_Y,
            max_obstacles: MAX_OBSTACLES,
            cleanup_margin: CLEANUP_MARGIN,
            points_per_correct: POINTS_PER_CORRECT,
        }
    }
}

impl SimConfig {
    /// Collision threshold: overlap when center distance is below this
    pub fn collision_radius(&self) -> f32 {
        (self.runner_size + self.obstacle_size) / 2.0
    }
}
