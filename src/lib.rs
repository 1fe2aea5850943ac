//! Quiz Runner - an auto-runner game core gated by quiz questions
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, session state)
//! - `quiz`: Question bank and quiz items
//! - `config`: Data-driven simulation tuning
//!
//! Presentation is external: renderers read the session state each tick
//! and never mutate it. All mutation flows through `SessionState`'s
//! `start`/`answer`/`reset`/`tick` surface.

pub mod config;
pub mod quiz;
pub mod sim;

pub use config::SimConfig;
pub use quiz::{BankError, QuestionBank, QuizItem};
pub use sim::{Obstacle, ObstacleId, Phase, SessionState, TickEvent};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Runner defaults
    pub const RUN_SPEED: f32 = 180.0;
    pub const RUNNER_SIZE: f32 = 32.0;
    /// Runner reset position (origin column, mid-band)
    pub const RUNNER_START_X: f32 = 0.0;
    pub const RUNNER_START_Y: f32 = 120.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 28.0;
    /// Per-tick spawn probability while Running
    pub const SPAWN_CHANCE: f32 = 0.02;
    /// Horizontal spawn window ahead of the runner
    pub const SPAWN_AHEAD_MIN: f32 = 400.0;
    pub const SPAWN_AHEAD_MAX: f32 = 700.0;
    /// Playable vertical band for spawns
    pub const BAND_MIN_Y: f32 = 40.0;
    pub const BAND_MAX_Y: f32 = 200.0;
    /// Maximum concurrent live obstacles
    pub const MAX_OBSTACLES: usize = 4;
    /// Distance behind the runner at which obstacles are cleaned up
    pub const CLEANUP_MARGIN: f32 = 80.0;

    /// Score awarded per correct answer
    pub const POINTS_PER_CORRECT: u32 = 10;
}
