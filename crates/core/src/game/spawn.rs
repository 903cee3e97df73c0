//! End-of-turn monster spawning on the board's edge cells.

use super::*;

impl<R: RandomSource> Game<R> {
    /// Rolls this turn's wave. Traps swallow the spawn that lands on them; a full
    /// edge costs one life point and abandons the rest of the wave.
    pub(super) fn spawn_wave(&mut self) -> SpawnReport {
        let planned = self.rng.roll(self.rules.spawn_count);
        let mut report = SpawnReport { planned, ..SpawnReport::default() };
        let mut batch: Vec<(Pos, i32)> =
            Vec::with_capacity((planned as usize).min(grid::EDGE_CELLS.len()));

        for _ in 0..planned {
            let open: Vec<Pos> = grid::EDGE_CELLS
                .iter()
                .copied()
                .filter(|cell| {
                    !self.state.is_monster_at(*cell) && !batch.iter().any(|(pos, _)| pos == cell)
                })
                .collect();

            if open.is_empty() {
                self.state.lose_life();
                report.overflow_damage += 1;
                self.log.push(LogEvent::BoardOverflow { life_points: self.state.life_points });
                log::info!("edge is full, life points down to {}", self.state.life_points);
                break;
            }

            let cell = open[self.rng.pick(open.len())];
            let hp = i32::try_from(self.rng.roll(self.rules.monster_hp)).unwrap_or(i32::MAX);

            if self.state.traps.remove(&cell) {
                self.state.record_kills(1);
                report.trap_kills.push(cell);
                self.log.push(LogEvent::TrapSprung { pos: cell });
            } else {
                batch.push((cell, hp));
            }
        }

        for (pos, hp) in batch {
            let id = self.state.insert_monster(pos, hp);
            report.spawned.push(SpawnedMonster { id, pos, hp });
            self.log.push(LogEvent::MonsterSpawned { monster: id, pos, hp });
        }
        // Monsters entering the board count against the quota as well.
        self.state.record_kills(report.spawned.len() as u32);

        log::debug!(
            "wave of {planned}: {} spawned, {} trapped",
            report.spawned.len(),
            report.trap_kills.len()
        );
        report
    }
}
