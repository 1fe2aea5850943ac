//! Collision detection between the runner and live obstacles
//!
//! Overlap is a center-distance test: a collision occurs when the
//! Euclidean distance between runner and obstacle centers drops below
//! (runner_size + obstacle_size) / 2. The scan returns the first
//! qualifying obstacle in iteration order and stops - at most one
//! collision per tick, ties broken by spawn order.

use glam::Vec2;

use super::state::{Obstacle, ObstacleId};

/// Find the first obstacle overlapping the runner, if any
pub fn scan(runner_pos: Vec2, obstacles: &[Obstacle], threshold: f32) -> Option<ObstacleId> {
    obstacles
        .iter()
        .find(|o| o.pos.distance(runner_pos) < threshold)
        .map(|o| o.id)
}
