use anyhow::{Result, bail};
use bastion_core::grid;
use bastion_core::{
    ActionKind, Command, DeferredEffect, EffectKind, Game, GameStatus, HpCut, Pos, Rules,
    WarriorKind,
};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    commands: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_pos(rng: &mut ChaCha8Rng) -> Pos {
    // Occasionally one cell off the board on either side.
    Pos::new(choose(rng, &[-1, 0, 1, 2, 3]), choose(rng, &[-1, 0, 1, 2, 3]))
}

fn random_command(rng: &mut ChaCha8Rng, game: &Game) -> Command {
    let warrior = choose(rng, &WarriorKind::ALL);
    match rng.next_u64() % 10 {
        0..=2 => Command::SelectAction { warrior, action: choose(rng, &ActionKind::ALL) },
        3..=6 => Command::ResolveTarget(random_pos(rng)),
        7 => Command::EndTurn,
        8 => {
            let monster = game.state().monsters.keys().next();
            match (game.pending_deferred(), monster) {
                (Some(_), Some(monster)) => {
                    let cut = choose(rng, &[HpCut::One, HpCut::Two]);
                    Command::ApplyDeferred(choose(
                        rng,
                        &[
                            DeferredEffect::Remove { monster },
                            DeferredEffect::Weaken { monster, cut },
                            DeferredEffect::Debuff { monster, tag: "marked".to_string() },
                        ],
                    ))
                }
                _ => {
                    let to = random_pos(rng);
                    Command::ApplyDeferred(DeferredEffect::Teleport { warrior, to })
                }
            }
        }
        _ => {
            let effect = choose(rng, &[EffectKind::ExtraMovement, EffectKind::ExtraAttack]);
            Command::ConsumeEffect(effect)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} commands...", args.seed, args.commands);
    let rules = Rules::default();
    let mut game = Game::new(args.seed, rules.clone());
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut remaining = game.state().monsters_remaining;
    let mut rejected = 0;

    for step in 0..args.commands {
        if game.status() != GameStatus::Active {
            println!("Finished with outcome {:?} after {} commands", game.status(), step);
            break;
        }
        let command = random_command(&mut rng, &game);
        if let Err(err) = game.apply(command.clone()) {
            log::debug!("rejected {command:?}: {err}");
            rejected += 1;
        }

        // Assert invariants
        let state = game.state();
        if state.monsters_remaining > remaining {
            bail!("Invariant failed: quota grew at step {step}");
        }
        remaining = state.monsters_remaining;
        if state.life_points > rules.initial_life_points {
            bail!("Invariant failed: life above maximum at step {step}");
        }
        if state.monsters.values().any(|monster| monster.hp <= 0) {
            bail!("Invariant failed: dead monster left on board at step {step}");
        }
        if state.warriors.iter().any(|warrior| !grid::in_bounds(warrior.pos)) {
            bail!("Invariant failed: warrior off board at step {step}");
        }
    }

    println!("Fuzzing completed successfully ({rejected} commands rejected).");
    Ok(())
}
