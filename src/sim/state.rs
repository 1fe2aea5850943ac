//! Session state and core simulation types
//!
//! All state for one play session lives here, owned by a single
//! `SessionState` value. The phase machine (Idle, Running, Quiz,
//! GameOver) is driven exclusively by `start`/`answer`/`reset` plus the
//! per-tick collision result; renderers read snapshots and never
//! mutate.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::consts::{RUNNER_START_X, RUNNER_START_Y};
use crate::quiz::{QuestionBank, QuizItem};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Created, not yet started
    #[default]
    Idle,
    /// Active gameplay, tick loop advancing
    Running,
    /// Suspended on a collision, waiting for an answer
    Quiz,
    /// Run ended on a wrong answer
    GameOver,
}

/// Strongly-typed obstacle handle (monotone per session)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObstacleId(pub u32);

/// The auto-moving runner. Exactly one per session; repositioned to the
/// origin column on (re)start, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    pub pos: Vec2,
}

impl Runner {
    fn at_start() -> Self {
        Self {
            pos: Vec2::new(RUNNER_START_X, RUNNER_START_Y),
        }
    }
}

/// An obstacle the runner can collide with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub pos: Vec2,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Run seed; the RNG is reseeded from this on every (re)start
    pub seed: u64,
    /// Spawner RNG (rides along with snapshots for deterministic replay)
    pub rng: Pcg32,
    /// Current phase
    pub phase: Phase,
    /// Score, +`points_per_correct` per correct answer
    pub score: u32,
    /// Index into the question bank, wraps modulo bank length
    pub question_index: usize,
    /// Obstacle under quiz resolution, if any
    pub pending: Option<ObstacleId>,
    /// The player's runner
    pub runner: Runner,
    /// Live obstacles (spawn order, stable for collision tie-breaking)
    pub obstacles: Vec<Obstacle>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulation tuning
    pub config: SimConfig,
    /// Question bank for this session
    pub bank: QuestionBank,
    /// Next obstacle ID
    next_id: u32,
}

impl SessionState {
    /// Create a new session in Idle with default tuning and the builtin bank
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SimConfig::default(), QuestionBank::builtin())
    }

    /// Create a new session in Idle with explicit tuning and bank
    pub fn with_config(seed: u64, config: SimConfig, bank: QuestionBank) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Idle,
            score: 0,
            question_index: 0,
            pending: None,
            runner: Runner::at_start(),
            obstacles: Vec::new(),
            time_ticks: 0,
            config,
            bank,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub(crate) fn next_obstacle_id(&mut self) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Begin or restart a session.
    ///
    /// Legal from Idle and GameOver; a no-op while Running or Quiz.
    /// Resets score, question index, obstacles, and the runner, and
    /// reseeds the RNG so restarts replay deterministically.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Idle | Phase::GameOver => {
                self.rng = Pcg32::seed_from_u64(self.seed);
                self.score = 0;
                self.question_index = 0;
                self.pending = None;
                self.obstacles.clear();
                self.runner = Runner::at_start();
                self.time_ticks = 0;
                self.phase = Phase::Running;
                log::debug!("session started (seed {})", self.seed);
            }
            Phase::Running | Phase::Quiz => {
                log::debug!("start() ignored in {:?}", self.phase);
            }
        }
    }

    /// Resolve the active quiz.
    ///
    /// Legal only in Quiz; a no-op in any other phase. A correct answer
    /// scores, advances the question rotation, removes the pending
    /// obstacle, and resumes Running. Anything else ends the run.
    pub fn answer(&mut self, selected: usize) {
        if self.phase != Phase::Quiz {
            log::debug!("answer() ignored in {:?}", self.phase);
            return;
        }

        let correct = self.bank.item_at(self.question_index).correct;
        if selected == correct {
            self.score += self.config.points_per_correct;
            self.question_index = (self.question_index + 1) % self.bank.len();
            if let Some(id) = self.pending.take() {
                self.obstacles.retain(|o| o.id != id);
            }
            self.phase = Phase::Running;
            log::debug!("correct answer, score {}", self.score);
        } else {
            self.pending = None;
            self.obstacles.clear();
            self.phase = Phase::GameOver;
            log::debug!("wrong answer, game over at score {}", self.score);
        }
    }

    /// Return to Idle, clearing score and obstacles
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.score = 0;
        self.question_index = 0;
        self.pending = None;
        self.obstacles.clear();
        self.runner = Runner::at_start();
        self.time_ticks = 0;
        self.phase = Phase::Idle;
    }

    /// Record the colliding obstacle and suspend play for a quiz.
    /// Called by the tick loop, never by hosts.
    pub(crate) fn enter_quiz(&mut self, id: ObstacleId) {
        debug_assert_eq!(self.phase, Phase::Running);
        self.pending = Some(id);
        self.phase = Phase::Quiz;
    }

    /// The quiz item on display, Some only during Quiz
    pub fn active_item(&self) -> Option<&QuizItem> {
        match self.phase {
            Phase::Quiz => Some(self.bank.item_at(self.question_index)),
            _ => None,
        }
    }

    /// Final score of the run, Some only in GameOver
    pub fn final_score(&self) -> Option<u32> {
        match self.phase {
            Phase::GameOver => Some(self.score),
            _ => None,
        }
    }

    /// Positions of live obstacles, in spawn order
    pub fn obstacle_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.obstacles.iter().map(|o| o.pos)
    }
}
