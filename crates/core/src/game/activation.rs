//! Tile activation effects, including the second half of the tiles whose target
//! is picked by the UI after activation.

use super::*;

impl<R: RandomSource> Game<R> {
    /// Applies the engine-side effect of the tile at `target`. Tiles that need a
    /// further target leave a pending request instead.
    pub(super) fn activate_tile(
        &mut self,
        warrior: WarriorKind,
        target: Pos,
    ) -> Option<DeferredRequest> {
        let tile = self.state.tile_at(target)?;
        self.log.push(LogEvent::TileActivated { warrior, tile });
        log::debug!("{warrior:?} activated {tile:?} at {target:?}");

        match tile {
            TileKind::Quarry => {
                if self.state.traps.insert(target) {
                    self.log.push(LogEvent::TrapPlaced { pos: target });
                }
                None
            }
            TileKind::Fountain => {
                let mut count = 0;
                for monster in self.state.monsters.values_mut() {
                    if monster.debuff.take().is_some() {
                        count += 1;
                    }
                }
                self.log.push(LogEvent::DebuffsCleared { count });
                None
            }
            TileKind::Tavern => {
                self.grant_effect(EffectKind::ExtraMovement, warrior);
                None
            }
            TileKind::Market => {
                self.grant_effect(EffectKind::ExtraAttack, warrior);
                None
            }
            TileKind::Dispensary => {
                self.state.restore_life(self.rules.initial_life_points);
                self.log.push(LogEvent::LifeRestored { life_points: self.state.life_points });
                None
            }
            TileKind::Tower | TileKind::Trebuchet | TileKind::Crypt | TileKind::Armory => {
                let request = DeferredRequest { tile, warrior };
                self.pending_deferred = Some(request);
                Some(request)
            }
        }
    }

    /// Completes a pending Tower, Trebuchet, Crypt or Armory activation with the
    /// target the UI collected. A bad target leaves the request pending.
    pub fn apply_deferred_effect(
        &mut self,
        effect: DeferredEffect,
    ) -> Result<DeferredOutcome, GameError> {
        let result = self.resolve_deferred(&effect);
        self.journal.append(Command::ApplyDeferred(effect), result.is_ok());
        result
    }

    fn resolve_deferred(&mut self, effect: &DeferredEffect) -> Result<DeferredOutcome, GameError> {
        self.ensure_active()?;
        let pending = self.pending_deferred.ok_or(GameError::NoPendingEffect)?;
        if pending.tile != effect.tile() {
            let offered = effect.tile();
            return Err(GameError::DeferredMismatch { pending: pending.tile, offered });
        }

        let mut killed = None;
        match effect {
            DeferredEffect::Teleport { warrior, to } => {
                if !grid::in_bounds(*to) {
                    return Err(GameError::OutOfBounds(*to));
                }
                self.state.warrior_mut(*warrior).pos = *to;
                self.log.push(LogEvent::WarriorTeleported { warrior: *warrior, to: *to });
            }
            DeferredEffect::Debuff { monster, tag } => {
                let target = self.monster_mut(*monster)?;
                target.debuff = Some(tag.clone());
                self.log.push(LogEvent::MonsterDebuffed { monster: *monster });
            }
            DeferredEffect::Remove { monster } => {
                let removed = self
                    .state
                    .monsters
                    .remove(*monster)
                    .ok_or(GameError::UnknownMonster(*monster))?;
                self.state.record_kills(1);
                killed = Some(*monster);
                self.log.push(LogEvent::MonsterSlain { monster: *monster, pos: removed.pos });
            }
            DeferredEffect::Weaken { monster, cut } => {
                let target = self.monster_mut(*monster)?;
                target.hp -= cut.amount();
                let (hp, pos) = (target.hp, target.pos);
                let warrior = pending.warrior;
                self.log.push(LogEvent::MonsterHit { warrior, monster: *monster, hp });
                if hp <= 0 {
                    self.state.monsters.remove(*monster);
                    self.state.record_kills(1);
                    killed = Some(*monster);
                    self.log.push(LogEvent::MonsterSlain { monster: *monster, pos });
                }
            }
        }

        self.pending_deferred = None;
        self.refresh_status();
        Ok(DeferredOutcome { tile: pending.tile, killed, status: self.status })
    }

    fn monster_mut(&mut self, id: MonsterId) -> Result<&mut Monster, GameError> {
        self.state.monsters.get_mut(id).ok_or(GameError::UnknownMonster(id))
    }
}
