//! End-to-end session scenarios driven through the public surface only.

use glam::Vec2;
use quiz_runner::consts::SIM_DT;
use quiz_runner::sim::{Obstacle, ObstacleId, Phase, TickEvent, tick};
use quiz_runner::{QuestionBank, QuizItem, SessionState, SimConfig};

/// Tuning with the spawner disabled so collisions are fully scripted
fn quiet_config() -> SimConfig {
    SimConfig {
        spawn_chance: 0.0,
        ..Default::default()
    }
}

/// Drop an obstacle on the runner and tick once to trigger the quiz
fn force_collision(state: &mut SessionState, id: u32) -> TickEvent {
    state.obstacles.push(Obstacle {
        id: ObstacleId(id),
        pos: state.runner.pos + Vec2::new(1.0, 0.0),
    });
    tick(state, SIM_DT)
}

#[test]
fn single_item_bank_full_round() {
    let bank = QuestionBank::new(vec![QuizItem::new("2+2?", &["3", "4"], 1)]).unwrap();
    let mut state = SessionState::with_config(1, quiet_config(), bank);

    state.start();
    assert_eq!(state.phase, Phase::Running);

    let event = force_collision(&mut state, 10);
    assert!(matches!(event, TickEvent::Collision(ObstacleId(10))));
    assert_eq!(state.phase, Phase::Quiz);
    assert_eq!(state.active_item().unwrap().prompt, "2+2?");

    // Correct: resume with +10, index wraps mod 1
    state.answer(1);
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.score, 10);
    assert_eq!(state.question_index, 0);
    assert!(state.obstacles.is_empty());

    // Second collision, wrong answer: game over, score unchanged
    force_collision(&mut state, 11);
    assert_eq!(state.phase, Phase::Quiz);
    state.answer(0);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.final_score(), Some(10));
    assert!(state.obstacles.is_empty());
}

#[test]
fn five_item_bank_index_sequence() {
    let items = (0..5usize)
        .map(|i| QuizItem::new(&format!("q{i}"), &["a", "b", "c"], i % 3))
        .collect();
    let bank = QuestionBank::new(items).unwrap();
    let mut state = SessionState::with_config(2, quiet_config(), bank);
    state.start();

    let mut seen = Vec::new();
    for id in [20, 21] {
        force_collision(&mut state, id);
        let correct = state.active_item().unwrap().correct;
        state.answer(correct);
        seen.push(state.question_index);
    }
    assert_eq!(seen, vec![1, 2]);
    assert_eq!(state.score, 20);
}

#[test]
fn restart_from_game_over_resets_everything() {
    let mut state =
        SessionState::with_config(3, quiet_config(), QuestionBank::builtin());
    state.start();

    force_collision(&mut state, 30);
    let correct = state.active_item().unwrap().correct;
    state.answer(correct);
    force_collision(&mut state, 31);
    let wrong = (state.active_item().unwrap().correct + 1) % 3;
    state.answer(wrong);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.final_score(), Some(10));

    state.start();
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.question_index, 0);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.runner.pos.x, quiz_runner::consts::RUNNER_START_X);
}

#[test]
fn pending_obstacle_survives_quiz_suspension() {
    let mut state =
        SessionState::with_config(4, quiet_config(), QuestionBank::builtin());
    state.start();
    state.runner.pos.x = 1000.0;
    state.obstacles.push(Obstacle {
        id: ObstacleId(40),
        pos: state.runner.pos,
    });
    tick(&mut state, SIM_DT);
    assert_eq!(state.phase, Phase::Quiz);
    assert_eq!(state.pending, Some(ObstacleId(40)));

    // Ticks during Quiz are suspended entirely
    for _ in 0..100 {
        assert_eq!(tick(&mut state, SIM_DT), TickEvent::None);
    }
    assert_eq!(state.obstacles.len(), 1);
    assert_eq!(state.pending, Some(ObstacleId(40)));
}

#[test]
fn seeded_sessions_replay_identically() {
    let mut a = SessionState::new(777);
    let mut b = SessionState::new(777);
    for state in [&mut a, &mut b] {
        state.start();
        for _ in 0..2000 {
            if let TickEvent::Collision(_) = tick(state, SIM_DT) {
                let correct = state.active_item().unwrap().correct;
                state.answer(correct);
            }
        }
    }
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
