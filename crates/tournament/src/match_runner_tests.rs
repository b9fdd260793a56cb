use checkers_core::{Board, Engine, Player, SearchResult};
use heuristic_engine::HeuristicEngine;
use random_engine::RandomEngine;

use super::*;

struct Resigner;

impl Engine for Resigner {
    fn search(&mut self, _board: &Board, _player: Player) -> SearchResult {
        SearchResult::none()
    }

    fn name(&self) -> &str {
        "resigner"
    }
}

fn quiet(num_games: u32, max_turns: u32) -> MatchRunner {
    MatchRunner::new(MatchConfig {
        num_games,
        max_turns,
        verbose: false,
        ..Default::default()
    })
}

#[test]
fn test_self_play() {
    let mut engine1 = RandomEngine::seeded(1);
    let mut engine2 = RandomEngine::seeded(2);

    let result = quiet(4, 300).run_match(&mut engine1, &mut engine2);

    assert_eq!(result.total_games(), 4);
    assert_eq!(result.faults, 0);
}

#[test]
fn test_heuristic_against_random() {
    let mut engine1 = HeuristicEngine::seeded(5);
    let mut engine2 = RandomEngine::seeded(6);

    let result = quiet(2, 300).run_match(&mut engine1, &mut engine2);

    assert_eq!(result.total_games(), 2);
    assert_eq!(result.faults, 0);
}

#[test]
fn test_fault_loses_the_game() {
    let mut resigner = Resigner;
    let mut engine = RandomEngine::seeded(3);

    // The resigner faults on its first turn whether it moves first or second.
    let result = quiet(4, 300).run_match(&mut resigner, &mut engine);

    assert_eq!(result.losses, 4);
    assert_eq!(result.faults, 4);
    assert_eq!(result.score(), 0.0);
}

#[test]
fn test_turn_cap_is_a_draw() {
    let mut engine1 = RandomEngine::seeded(1);
    let mut engine2 = RandomEngine::seeded(2);

    let result = quiet(3, 0).run_match(&mut engine1, &mut engine2);

    assert_eq!(result.draws, 3);
    assert_eq!(result.score(), 0.5);
}

#[test]
fn test_game_result_flip() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
    assert_eq!(MatchResult::new().score(), 0.5);
}
