//! Turn lifecycle: spawn, refill action budgets, advance the counter.

use super::*;

impl<R: RandomSource> Game<R> {
    pub fn end_turn(&mut self) -> Result<TurnSummary, GameError> {
        let result = self.finish_turn();
        self.journal.append(Command::EndTurn, result.is_ok());
        result
    }

    fn finish_turn(&mut self) -> Result<TurnSummary, GameError> {
        self.ensure_active()?;

        let spawn = self.spawn_wave();
        self.state.action_budget = [self.rules.actions_per_warrior; 3];
        self.state.turn_count += 1;
        self.selection = Selection::Idle;
        self.pending_deferred = None;
        self.log.push(LogEvent::TurnEnded { turn_count: self.state.turn_count });
        self.refresh_status();

        log::info!(
            "turn {} done: life {} remaining {}",
            self.state.turn_count,
            self.state.life_points,
            self.state.monsters_remaining
        );
        Ok(TurnSummary {
            spawn,
            turn_count: self.state.turn_count,
            life_points: self.state.life_points,
            monsters_remaining: self.state.monsters_remaining,
            status: self.status,
        })
    }
}
