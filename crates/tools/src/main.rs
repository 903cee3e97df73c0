use std::path::PathBuf;

use anyhow::{Context, Result};
use bastion_core::grid;
use bastion_core::{
    ActionKind, Game, GameStatus, LogEvent, Pos, RandomSource, Rules, TileKind, WarriorKind,
};
use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Play a seeded session headlessly with a greedy policy")]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Stop after this many turns even if the game is still running
    #[arg(short, long, default_value_t = 200)]
    turns: u32,
    /// TOML file overriding the default rules
    #[arg(short, long)]
    rules: Option<PathBuf>,
    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    status: GameStatus,
    turns: u32,
    life_points: u32,
    monsters_remaining: u32,
    slain: usize,
    trapped: usize,
    overflow_hits: usize,
    snapshot_hash: u64,
}

fn monster_hp_at<R: RandomSource>(game: &Game<R>, pos: Pos) -> Option<i32> {
    game.state().monsters_at(pos).map(|monster| monster.hp).min()
}

fn weakest_target<R: RandomSource>(game: &Game<R>, kind: WarriorKind) -> Option<Pos> {
    game.attackable_positions(kind)
        .into_iter()
        .filter_map(|pos| monster_hp_at(game, pos).map(|hp| (hp, pos)))
        .min()
        .map(|(_, pos)| pos)
}

/// A cell from which `kind` would have something to hit.
fn firing_position<R: RandomSource>(game: &Game<R>, kind: WarriorKind) -> Option<Pos> {
    let state = game.state();
    grid::all_cells().find(|from| {
        state.monsters.values().any(|monster| grid::in_attack_shape(kind, *from, monster.pos))
    })
}

fn take_turn<R: RandomSource>(game: &mut Game<R>) -> Result<()> {
    for kind in WarriorKind::ALL {
        while game.status() == GameStatus::Active && game.state().budget(kind) > 0 {
            let (action, target) = if let Some(target) = weakest_target(game, kind) {
                (ActionKind::Attack, target)
            } else if game.state().life_points < game.rules().initial_life_points {
                let dispensary = game.state().tile_pos(TileKind::Dispensary);
                (ActionKind::Activate, dispensary.context("board has no dispensary")?)
            } else if let Some(from) = firing_position(game, kind) {
                (ActionKind::Move, from)
            } else {
                let quarry = game.state().tile_pos(TileKind::Quarry);
                (ActionKind::Activate, quarry.context("board has no quarry")?)
            };

            game.select_action(kind, action)?;
            let outcome = game.resolve_target(target)?;
            if let (ActionKind::Activate, Some(tile)) = (action, game.state().tile_at(target)) {
                log::info!("{kind:?} activates {tile:?}: {}", tile.description());
            }
            if !outcome.budget_consumed {
                break;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rules = match &args.rules {
        Some(path) => Rules::load(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        None => Rules::default(),
    };

    let mut game = Game::new(args.seed, rules);
    while game.status() == GameStatus::Active && game.state().turn_count < args.turns {
        take_turn(&mut game)?;
        if game.status() == GameStatus::Active {
            let summary = game.end_turn()?;
            log::info!(
                "turn {}: spawned {} trapped {} overflow {}",
                summary.turn_count,
                summary.spawn.spawned.len(),
                summary.spawn.trap_kills.len(),
                summary.spawn.overflow_damage
            );
        }
    }

    let count = |pred: fn(&LogEvent) -> bool| game.log().iter().filter(|event| pred(event)).count();
    let report = Report {
        seed: args.seed,
        status: game.status(),
        turns: game.state().turn_count,
        life_points: game.state().life_points,
        monsters_remaining: game.state().monsters_remaining,
        slain: count(|event| matches!(event, LogEvent::MonsterSlain { .. })),
        trapped: count(|event| matches!(event, LogEvent::TrapSprung { .. })),
        overflow_hits: count(|event| matches!(event, LogEvent::BoardOverflow { .. })),
        snapshot_hash: game.snapshot_hash(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Session complete.");
        println!("Outcome: {:?} after {} turns", report.status, report.turns);
        println!("Life: {}  Remaining: {}", report.life_points, report.monsters_remaining);
        println!(
            "Slain: {}  Trapped: {}  Overflows: {}",
            report.slain, report.trapped, report.overflow_hits
        );
        println!("Snapshot Hash: {}", report.snapshot_hash);
    }

    Ok(())
}
