//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use slotmap::Key;
use xxhash_rust::xxh3::Xxh3;

use super::*;

fn warrior_code(kind: Option<WarriorKind>) -> u8 {
    match kind {
        None => 0,
        Some(WarriorKind::A) => 1,
        Some(WarriorKind::B) => 2,
        Some(WarriorKind::C) => 3,
    }
}

impl<R: RandomSource> Game<R> {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.state.turn_count);
        hasher.write_u32(self.state.life_points);
        hasher.write_u32(self.state.monsters_remaining);
        hasher.write_u8(match self.status {
            GameStatus::Active => 0,
            GameStatus::Won => 1,
            GameStatus::Lost => 2,
        });

        for warrior in &self.state.warriors {
            hasher.write_i32(warrior.pos.x);
            hasher.write_i32(warrior.pos.y);
        }
        for budget in self.state.action_budget {
            hasher.write_u32(budget);
        }

        for (id, monster) in &self.state.monsters {
            hasher.write_u64(id.data().as_ffi());
            hasher.write_i32(monster.hp);
            hasher.write_i32(monster.pos.x);
            hasher.write_i32(monster.pos.y);
            hasher.write_u8(u8::from(monster.debuff.is_some()));
        }
        for trap in &self.state.traps {
            hasher.write_i32(trap.x);
            hasher.write_i32(trap.y);
        }

        hasher.write_u8(warrior_code(self.state.effects.extra_movement));
        hasher.write_u8(warrior_code(self.state.effects.extra_attack));
        hasher.finish()
    }
}
