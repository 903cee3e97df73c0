//! One game session: the owned state plus the command surface the UI drives.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::grid;
use crate::journal::InputJournal;
use crate::rng::RandomSource;
use crate::rules::Rules;
use crate::state::{GameState, Monster};
use crate::types::*;

mod actions;
mod activation;
mod effects;
mod hash;
mod spawn;
mod turn;

#[cfg(test)]
mod test_support;

/// Result of [`Game::apply`], one variant per command family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Selected,
    Action(ActionOutcome),
    Deferred(DeferredOutcome),
    EffectConsumed(Option<WarriorKind>),
    TurnEnded(TurnSummary),
}

pub struct Game<R = ChaCha8Rng> {
    seed: u64,
    rules: Rules,
    rng: R,
    state: GameState,
    selection: Selection,
    pending_deferred: Option<DeferredRequest>,
    status: GameStatus,
    log: Vec<LogEvent>,
    journal: InputJournal,
}

impl Game<ChaCha8Rng> {
    pub fn new(seed: u64, rules: Rules) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new(&rules);
        Self::assemble(seed, rules, state, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Starts a session from an explicit state and random source. The journal of
    /// such a session records seed 0 and only replays if `rng` is the seeded default.
    pub fn with_state(rules: Rules, state: GameState, rng: R) -> Self {
        Self::assemble(0, rules, state, rng)
    }

    fn assemble(seed: u64, rules: Rules, state: GameState, rng: R) -> Self {
        let journal = InputJournal::new(seed, rules.clone());
        let mut game = Self {
            seed,
            rules,
            rng,
            state,
            selection: Selection::Idle,
            pending_deferred: None,
            status: GameStatus::Active,
            log: Vec::new(),
            journal,
        };
        game.refresh_status();
        game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn pending_deferred(&self) -> Option<DeferredRequest> {
        self.pending_deferred
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    /// Arms `kind`, dropping any half-chosen action and any pending tile effect.
    /// Ignored once the game is over.
    pub fn select_warrior(&mut self, kind: WarriorKind) {
        if let Err(err) = self.arm_warrior(kind) {
            log::debug!("ignored selection of {kind:?}: {err}");
        }
    }

    fn arm_warrior(&mut self, kind: WarriorKind) -> Result<(), GameError> {
        let result = self.ensure_active();
        if result.is_ok() {
            self.selection = Selection::Armed(kind);
            self.pending_deferred = None;
        }
        self.journal.append(Command::SelectWarrior(kind), result.is_ok());
        result
    }

    pub fn select_action(
        &mut self,
        warrior: WarriorKind,
        action: ActionKind,
    ) -> Result<(), GameError> {
        let result = self.choose_action(warrior, action);
        self.journal.append(Command::SelectAction { warrior, action }, result.is_ok());
        result
    }

    fn choose_action(&mut self, warrior: WarriorKind, action: ActionKind) -> Result<(), GameError> {
        self.ensure_active()?;
        if self.state.budget(warrior) == 0 {
            return Err(GameError::NoActionsLeft(warrior));
        }
        self.selection = Selection::ActionChosen { warrior, action };
        self.pending_deferred = None;
        log::debug!("{warrior:?} armed for {action:?}");
        Ok(())
    }

    pub fn available_actions(&self, kind: WarriorKind) -> Vec<ActionKind> {
        if self.status.is_terminal() || self.state.budget(kind) == 0 {
            return Vec::new();
        }
        ActionKind::ALL.to_vec()
    }

    /// Every cell the warrior's attack shape reaches from where it stands,
    /// whether or not a monster is there.
    pub fn attackable_positions(&self, kind: WarriorKind) -> BTreeSet<Pos> {
        let from = self.state.warrior(kind).pos;
        grid::all_cells().filter(|cell| grid::in_attack_shape(kind, from, *cell)).collect()
    }

    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, GameError> {
        match command {
            Command::SelectWarrior(kind) => {
                self.arm_warrior(kind).map(|()| CommandOutcome::Selected)
            }
            Command::SelectAction { warrior, action } => {
                self.select_action(warrior, action).map(|()| CommandOutcome::Selected)
            }
            Command::ResolveTarget(target) => {
                self.resolve_target(target).map(CommandOutcome::Action)
            }
            Command::ApplyDeferred(effect) => {
                self.apply_deferred_effect(effect).map(CommandOutcome::Deferred)
            }
            Command::ConsumeEffect(effect) => {
                Ok(CommandOutcome::EffectConsumed(self.consume_effect(effect)))
            }
            Command::EndTurn => self.end_turn().map(CommandOutcome::TurnEnded),
        }
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver(self.status));
        }
        Ok(())
    }

    /// Re-evaluates win/loss after life points or the quota moved. Terminal
    /// states are sticky.
    fn refresh_status(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        let next = if self.state.life_points == 0 {
            GameStatus::Lost
        } else if self.state.monsters_remaining == 0 {
            GameStatus::Won
        } else {
            GameStatus::Active
        };
        if next.is_terminal() {
            self.status = next;
            self.selection = Selection::Idle;
            self.pending_deferred = None;
            self.log.push(LogEvent::GameEnded { status: next });
            log::info!("game ended {next:?} on turn {}", self.state.turn_count);
        }
    }
}
