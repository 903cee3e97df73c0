//! Target resolution for an armed warrior action: move, attack or activate.

use super::*;

impl<R: RandomSource> Game<R> {
    pub fn resolve_target(&mut self, target: Pos) -> Result<ActionOutcome, GameError> {
        let result = self.resolve_selected(target);
        self.journal.append(Command::ResolveTarget(target), result.is_ok());
        result
    }

    fn resolve_selected(&mut self, target: Pos) -> Result<ActionOutcome, GameError> {
        self.ensure_active()?;
        if !grid::in_bounds(target) {
            return Err(GameError::OutOfBounds(target));
        }
        let Selection::ActionChosen { warrior, action } = self.selection else {
            return Err(GameError::NothingArmed);
        };
        if self.state.budget(warrior) == 0 {
            return Err(GameError::NoActionsLeft(warrior));
        }

        let mut outcome = ActionOutcome {
            warrior,
            action,
            target,
            budget_consumed: false,
            actions_left: 0,
            damaged: Vec::new(),
            killed: Vec::new(),
            deferred: None,
            status: self.status,
        };

        match action {
            ActionKind::Move => {
                self.move_warrior(warrior, target);
                outcome.budget_consumed = true;
            }
            ActionKind::Attack => {
                self.attack(warrior, target, &mut outcome);
                // A swing that hits nothing is free and keeps the attack armed.
                outcome.budget_consumed = !outcome.damaged.is_empty();
            }
            ActionKind::Activate => {
                outcome.deferred = self.activate_tile(warrior, target);
                outcome.budget_consumed = true;
            }
        }

        if outcome.budget_consumed {
            self.state.spend_action(warrior);
            self.selection = Selection::Idle;
        }
        self.refresh_status();

        outcome.actions_left = self.state.budget(warrior);
        outcome.status = self.status;
        Ok(outcome)
    }

    fn move_warrior(&mut self, warrior: WarriorKind, to: Pos) {
        let from = self.state.warrior(warrior).pos;
        self.state.warrior_mut(warrior).pos = to;
        self.log.push(LogEvent::WarriorMoved { warrior, from, to });
        log::debug!("{warrior:?} moved {from:?} -> {to:?}");
    }

    fn attack(&mut self, warrior: WarriorKind, target: Pos, outcome: &mut ActionOutcome) {
        let from = self.state.warrior(warrior).pos;
        if !grid::in_attack_shape(warrior, from, target) {
            log::debug!("{warrior:?} at {from:?} cannot reach {target:?}");
            return;
        }

        let damage = warrior.damage();
        let hits: Vec<MonsterId> =
            self.state.monsters_at(target).map(|monster| monster.id).collect();
        for id in hits {
            let monster = &mut self.state.monsters[id];
            monster.hp -= damage;
            let hp = monster.hp;
            outcome.damaged.push(MonsterHit { id, hp });
            self.log.push(LogEvent::MonsterHit { warrior, monster: id, hp });

            if hp <= 0 {
                self.state.monsters.remove(id);
                outcome.killed.push(id);
                self.log.push(LogEvent::MonsterSlain { monster: id, pos: target });
            }
        }
        self.state.record_kills(outcome.killed.len() as u32);
    }
}
