use serde::{Deserialize, Serialize};

use crate::rules::Rules;
use crate::types::Command;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub rules: Rules,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub command: Command,
    /// Whether the engine accepted the command when it was first issued.
    pub accepted: bool,
}

impl InputJournal {
    pub fn new(seed: u64, rules: Rules) -> Self {
        Self { format_version: 1, seed, rules, inputs: Vec::new() }
    }

    pub fn append(&mut self, command: Command, accepted: bool) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, command, accepted });
    }
}
