//! Tunable session rules and their TOML loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid;

/// Monster hp lives in an `i32` once on the board.
const MAX_MONSTER_HP: u32 = i32::MAX as u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub initial_life_points: u32,
    pub total_monsters: u32,
    pub actions_per_warrior: u32,
    pub spawn_count: RollRange,
    pub monster_hp: RollRange,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            initial_life_points: 3,
            total_monsters: 50,
            actions_per_warrior: 2,
            spawn_count: RollRange::new(1, 2),
            monster_hp: RollRange::new(3, 6),
        }
    }
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed rules: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid rule `{rule}`: {reason}")]
    Invalid { rule: &'static str, reason: &'static str },
}

impl Rules {
    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        let rules: Rules = toml::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let text = fs::read_to_string(path)
            .map_err(|source| RulesError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        check_count("initial_life_points", self.initial_life_points)?;
        check_count("total_monsters", self.total_monsters)?;
        check_count("actions_per_warrior", self.actions_per_warrior)?;
        check_range("spawn_count", self.spawn_count)?;
        if self.spawn_count.max as usize > grid::EDGE_CELLS.len() {
            return Err(RulesError::Invalid {
                rule: "spawn_count",
                reason: "maximum exceeds the number of edge cells",
            });
        }
        check_range("monster_hp", self.monster_hp)?;
        if self.monster_hp.max > MAX_MONSTER_HP {
            return Err(RulesError::Invalid {
                rule: "monster_hp",
                reason: "maximum does not fit a signed 32-bit hp",
            });
        }
        Ok(())
    }
}

fn check_count(rule: &'static str, value: u32) -> Result<(), RulesError> {
    if value == 0 {
        return Err(RulesError::Invalid { rule, reason: "must be at least 1" });
    }
    Ok(())
}

fn check_range(rule: &'static str, range: RollRange) -> Result<(), RulesError> {
    if range.min == 0 {
        return Err(RulesError::Invalid { rule, reason: "minimum must be at least 1" });
    }
    if range.min > range.max {
        return Err(RulesError::Invalid { rule, reason: "minimum exceeds maximum" });
    }
    Ok(())
}
