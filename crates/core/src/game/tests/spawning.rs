//! Spawn engine: wave size, placement, traps and overflow damage.

use std::collections::BTreeSet;

use super::support::*;

#[test]
fn single_spawn_follows_scripted_cell_and_hp() {
    // count draw 0 -> 1 monster; cell draw 4 -> (1, 2); hp draw 3 -> 6
    let mut game = scripted_game([0, 4, 3]);
    let summary = game.end_turn().expect("end turn");

    assert_eq!(summary.spawn.planned, 1);
    assert_eq!(summary.spawn.spawned.len(), 1);
    let spawned = summary.spawn.spawned[0];
    assert_eq!(spawned.pos, Pos::new(1, 2));
    assert_eq!(spawned.hp, 6);
    assert_eq!(game.state.monsters[spawned.id].pos, Pos::new(1, 2));
    assert_eq!(summary.monsters_remaining, 49);
}

#[test]
fn second_spawn_skips_the_cell_claimed_earlier_in_the_wave() {
    // Both cell draws are 0; the second pick sees (0, 0) already claimed.
    let mut game = scripted_game([1, 0, 0, 0, 0]);
    let summary = game.end_turn().expect("end turn");

    let cells: Vec<Pos> = summary.spawn.spawned.iter().map(|spawn| spawn.pos).collect();
    assert_eq!(cells, vec![Pos::new(0, 0), Pos::new(1, 0)]);
    assert_eq!(summary.monsters_remaining, 48);
}

#[test]
fn spawns_avoid_cells_holding_monsters_and_never_use_the_center() {
    let mut game = scripted_game([1, 0, 0, 0, 0]);
    add_monster(&mut game, Pos::new(0, 0), 5);

    let summary = game.end_turn().expect("end turn");
    let cells: Vec<Pos> = summary.spawn.spawned.iter().map(|spawn| spawn.pos).collect();
    assert_eq!(cells, vec![Pos::new(1, 0), Pos::new(2, 0)]);
    assert!(game.state.monsters.values().all(|monster| monster.pos != grid::CENTER));
}

#[test]
fn trap_swallows_the_spawn_and_is_consumed() {
    let mut game = scripted_game([0, 0, 0]);
    activate(&mut game, WarriorKind::A, TileKind::Quarry);
    assert!(game.state.traps.contains(&Pos::new(0, 0)));

    let summary = game.end_turn().expect("end turn");

    assert_eq!(summary.spawn.trap_kills, vec![Pos::new(0, 0)]);
    assert!(summary.spawn.spawned.is_empty());
    assert!(game.state.traps.is_empty());
    assert!(game.state.monsters.is_empty());
    assert_eq!(summary.monsters_remaining, 49, "trap kill counted exactly once");
}

#[test]
fn trap_is_one_shot_within_a_wave() {
    // Both spawns draw (0, 0); the trapped one does not claim the cell.
    let mut game = scripted_game([1, 0, 0, 0, 2]);
    game.state.traps.insert(Pos::new(0, 0));

    let summary = game.end_turn().expect("end turn");

    assert_eq!(summary.spawn.trap_kills, vec![Pos::new(0, 0)]);
    assert_eq!(summary.spawn.spawned.len(), 1);
    assert_eq!(summary.spawn.spawned[0].pos, Pos::new(0, 0));
    assert_eq!(summary.spawn.spawned[0].hp, 5);
    assert_eq!(summary.monsters_remaining, 48);
}

#[test]
fn full_edge_costs_one_life_and_abandons_the_wave() {
    let mut game = scripted_game([1]);
    fill_edge(&mut game);

    let summary = game.end_turn().expect("end turn");

    assert_eq!(summary.spawn.planned, 2);
    assert_eq!(summary.spawn.overflow_damage, 1);
    assert!(summary.spawn.spawned.is_empty());
    assert_eq!(summary.life_points, 2);
    assert_eq!(game.state.monsters.len(), 8);
    assert_eq!(summary.monsters_remaining, 50);
}

#[test]
fn wave_that_fills_the_last_cell_overflows_on_its_second_spawn() {
    let mut game = scripted_game([1, 0, 0]);
    for cell in &grid::EDGE_CELLS[1..] {
        add_monster(&mut game, *cell, 4);
    }

    let summary = game.end_turn().expect("end turn");

    assert_eq!(summary.spawn.spawned.len(), 1);
    assert_eq!(summary.spawn.spawned[0].pos, Pos::new(0, 0));
    assert_eq!(summary.spawn.overflow_damage, 1);
    assert_eq!(summary.life_points, 2);
}

#[test]
fn monster_ids_stay_unique_across_turns() {
    let mut game = scripted_game([]);
    let mut seen = BTreeSet::new();
    for _ in 0..4 {
        let summary = game.end_turn().expect("end turn");
        for spawn in summary.spawn.spawned {
            assert!(seen.insert(spawn.id), "id {:?} reused", spawn.id);
            game.state.monsters.remove(spawn.id);
        }
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn oversized_hp_roll_saturates_instead_of_wrapping() {
    let rules = Rules {
        monster_hp: crate::rules::RollRange::new(3_000_000_000, 3_000_000_000),
        ..Rules::default()
    };
    let mut game = scripted_game_with(rules, [0, 0, 0]);
    let summary = game.end_turn().expect("end turn");

    assert_eq!(summary.spawn.spawned[0].hp, i32::MAX);
    assert!(game.state.monsters.values().all(|monster| monster.hp > 0));
}
