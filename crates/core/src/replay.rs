use crate::{GameStatus, game::Game, journal::InputJournal};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    InvalidRules,
    Diverged { seq: u64 },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_status: GameStatus,
    pub final_snapshot_hash: u64,
    pub final_turn: u32,
    pub rejected_inputs: usize,
}

/// Rebuilds a seeded session and feeds it every journaled command in order.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.rules.validate().is_err() {
        return Err(ReplayError::InvalidRules);
    }
    let mut game = Game::new(journal.seed, journal.rules.clone());
    let mut rejected_inputs = 0;

    for record in &journal.inputs {
        let accepted = game.apply(record.command.clone()).is_ok();
        if accepted != record.accepted {
            return Err(ReplayError::Diverged { seq: record.seq });
        }
        if !accepted {
            rejected_inputs += 1;
        }
    }

    Ok(ReplayResult {
        final_status: game.status(),
        final_snapshot_hash: game.snapshot_hash(),
        final_turn: game.state().turn_count,
        rejected_inputs,
    })
}
