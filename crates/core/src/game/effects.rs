//! Cross-turn effects granted by the Tavern and Market.
//! Grants persist across turns; the engine never spends them on its own.

use super::*;

impl<R: RandomSource> Game<R> {
    pub(super) fn grant_effect(&mut self, effect: EffectKind, warrior: WarriorKind) {
        self.state.effects.grant(effect, warrior);
        self.log.push(LogEvent::EffectGranted { effect, warrior });
    }

    pub fn effect_holder(&self, effect: EffectKind) -> Option<WarriorKind> {
        self.state.effects.holder(effect)
    }

    /// Clears the effect and returns whoever held it.
    pub fn consume_effect(&mut self, effect: EffectKind) -> Option<WarriorKind> {
        let holder = self.state.effects.take(effect);
        if let Some(warrior) = holder {
            self.log.push(LogEvent::EffectConsumed { effect, warrior });
        }
        self.journal.append(Command::ConsumeEffect(effect), true);
        holder
    }
}
