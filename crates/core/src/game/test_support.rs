//! Shared fixtures for the `game` test suites.

use super::*;
use crate::rng::ScriptedRng;

pub(super) fn scripted_game(draws: impl IntoIterator<Item = u64>) -> Game<ScriptedRng> {
    scripted_game_with(Rules::default(), draws)
}

pub(super) fn scripted_game_with(
    rules: Rules,
    draws: impl IntoIterator<Item = u64>,
) -> Game<ScriptedRng> {
    let state = GameState::new(&rules);
    Game::with_state(rules, state, ScriptedRng::new(draws))
}

pub(super) fn add_monster(game: &mut Game<ScriptedRng>, pos: Pos, hp: i32) -> MonsterId {
    game.state.insert_monster(pos, hp)
}

/// Puts a monster on every edge cell so the next spawn overflows.
pub(super) fn fill_edge(game: &mut Game<ScriptedRng>) {
    for cell in grid::EDGE_CELLS {
        game.state.insert_monster(cell, 6);
    }
}

pub(super) fn place_warrior(game: &mut Game<ScriptedRng>, kind: WarriorKind, pos: Pos) {
    game.state.warrior_mut(kind).pos = pos;
}

pub(super) fn attack(
    game: &mut Game<ScriptedRng>,
    warrior: WarriorKind,
    target: Pos,
) -> ActionOutcome {
    game.select_action(warrior, ActionKind::Attack).expect("attack should arm");
    game.resolve_target(target).expect("attack should resolve")
}

pub(super) fn activate(
    game: &mut Game<ScriptedRng>,
    warrior: WarriorKind,
    tile: TileKind,
) -> ActionOutcome {
    let pos = game.state.tile_pos(tile).expect("tile on board");
    game.select_action(warrior, ActionKind::Activate).expect("activate should arm");
    game.resolve_target(pos).expect("activation should resolve")
}
