use bastion_core::replay::replay_to_end;
use bastion_core::{ActionKind, Command, Game, GameStatus, InputJournal, Pos, Rules, WarriorKind};

fn scripted_session(seed: u64) -> Game {
    let mut game = Game::new(seed, Rules::default());
    let commands = [
        Command::SelectAction { warrior: WarriorKind::A, action: ActionKind::Activate },
        Command::ResolveTarget(Pos::new(0, 0)),
        Command::EndTurn,
        Command::SelectAction { warrior: WarriorKind::B, action: ActionKind::Move },
        Command::ResolveTarget(Pos::new(0, 0)),
        Command::EndTurn,
        Command::EndTurn,
    ];
    for command in commands {
        let _ = game.apply(command);
    }
    game
}

#[test]
fn identical_seeds_produce_identical_sessions() {
    let left = scripted_session(12345);
    let right = scripted_session(12345);

    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
    assert_eq!(left.log(), right.log());
}

#[test]
fn different_seeds_diverge() {
    let hashes: Vec<u64> = (0..8).map(|seed| scripted_session(seed).snapshot_hash()).collect();
    let first = hashes[0];
    assert!(
        hashes.iter().any(|hash| *hash != first),
        "eight seeds should not all produce the same board"
    );
}

#[test]
fn journal_replays_to_the_same_snapshot() {
    let game = scripted_session(4242);
    let result = replay_to_end(game.journal()).expect("replay");

    assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
    assert_eq!(result.final_turn, 3);
    assert_eq!(result.final_status, game.status());
}

#[test]
fn journal_survives_a_json_round_trip() {
    let game = scripted_session(99);
    let json = serde_json::to_string(game.journal()).expect("serialize");
    let decoded: InputJournal = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(&decoded, game.journal());
    let result = replay_to_end(&decoded).expect("replay");
    assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
}

#[test]
fn seeded_autoplay_reaches_a_verdict() {
    let mut game = Game::new(7, Rules::default());
    for _ in 0..500 {
        if game.status() != GameStatus::Active {
            break;
        }
        game.end_turn().expect("end turn");
    }
    assert_eq!(game.status(), GameStatus::Lost, "idle warriors cannot hold the edge");
}
