pub mod game;
pub mod grid;
pub mod journal;
pub mod replay;
pub mod rng;
pub mod rules;
pub mod state;
pub mod types;

pub use game::{CommandOutcome, Game};
pub use journal::{InputJournal, InputRecord};
pub use replay::*;
pub use rng::{RandomSource, ScriptedRng};
pub use rules::{RollRange, Rules, RulesError};
pub use state::{ActiveEffects, GameState, Monster, Tile, Warrior};
pub use types::*;
