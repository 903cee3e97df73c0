use std::collections::BTreeSet;

use slotmap::SlotMap;

use crate::grid;
use crate::rules::Rules;
use crate::types::*;

const WARRIOR_START: [Pos; 3] = [Pos::new(1, 1), Pos::new(0, 1), Pos::new(2, 1)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warrior {
    pub kind: WarriorKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub id: MonsterId,
    pub hp: i32,
    pub pos: Pos,
    pub debuff: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub pos: Pos,
}

/// Holders of the tile-granted effects. At most one warrior holds each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveEffects {
    pub extra_movement: Option<WarriorKind>,
    pub extra_attack: Option<WarriorKind>,
}

impl ActiveEffects {
    pub fn holder(&self, effect: EffectKind) -> Option<WarriorKind> {
        match effect {
            EffectKind::ExtraMovement => self.extra_movement,
            EffectKind::ExtraAttack => self.extra_attack,
        }
    }

    /// Hands the effect to `warrior`, replacing any previous holder.
    pub fn grant(&mut self, effect: EffectKind, warrior: WarriorKind) {
        *self.slot(effect) = Some(warrior);
    }

    pub fn take(&mut self, effect: EffectKind) -> Option<WarriorKind> {
        self.slot(effect).take()
    }

    fn slot(&mut self, effect: EffectKind) -> &mut Option<WarriorKind> {
        match effect {
            EffectKind::ExtraMovement => &mut self.extra_movement,
            EffectKind::ExtraAttack => &mut self.extra_attack,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub warriors: [Warrior; 3],
    pub monsters: SlotMap<MonsterId, Monster>,
    pub tiles: [Tile; 9],
    pub life_points: u32,
    pub turn_count: u32,
    pub monsters_remaining: u32,
    pub traps: BTreeSet<Pos>,
    pub effects: ActiveEffects,
    pub action_budget: [u32; 3],
}

impl GameState {
    pub fn new(rules: &Rules) -> Self {
        let warriors =
            WarriorKind::ALL.map(|kind| Warrior { kind, pos: WARRIOR_START[kind.index()] });
        let mut cells = grid::all_cells();
        let tiles = TileKind::LAYOUT.map(|kind| Tile {
            kind,
            pos: cells.next().unwrap_or(grid::CENTER),
        });

        Self {
            warriors,
            monsters: SlotMap::with_key(),
            tiles,
            life_points: rules.initial_life_points,
            turn_count: 0,
            monsters_remaining: rules.total_monsters,
            traps: BTreeSet::new(),
            effects: ActiveEffects::default(),
            action_budget: [rules.actions_per_warrior; 3],
        }
    }

    pub fn warrior(&self, kind: WarriorKind) -> &Warrior {
        &self.warriors[kind.index()]
    }

    pub fn warrior_mut(&mut self, kind: WarriorKind) -> &mut Warrior {
        &mut self.warriors[kind.index()]
    }

    pub fn budget(&self, kind: WarriorKind) -> u32 {
        self.action_budget[kind.index()]
    }

    pub fn spend_action(&mut self, kind: WarriorKind) {
        let budget = &mut self.action_budget[kind.index()];
        *budget = budget.saturating_sub(1);
    }

    pub fn tile_at(&self, pos: Pos) -> Option<TileKind> {
        self.tiles.iter().find(|tile| tile.pos == pos).map(|tile| tile.kind)
    }

    pub fn tile_pos(&self, kind: TileKind) -> Option<Pos> {
        self.tiles.iter().find(|tile| tile.kind == kind).map(|tile| tile.pos)
    }

    pub fn monsters_at(&self, pos: Pos) -> impl Iterator<Item = &Monster> {
        self.monsters.values().filter(move |monster| monster.pos == pos)
    }

    pub fn is_monster_at(&self, pos: Pos) -> bool {
        self.monsters_at(pos).next().is_some()
    }

    pub fn insert_monster(&mut self, pos: Pos, hp: i32) -> MonsterId {
        self.monsters.insert_with_key(|id| Monster { id, hp, pos, debuff: None })
    }

    /// Counts monsters taken out of the quota, never dropping below zero.
    pub fn record_kills(&mut self, count: u32) {
        self.monsters_remaining = self.monsters_remaining.saturating_sub(count);
    }

    pub fn lose_life(&mut self) {
        self.life_points = self.life_points.saturating_sub(1);
    }

    pub fn restore_life(&mut self, max: u32) {
        self.life_points = (self.life_points + 1).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout_places_one_tile_per_cell() {
        let state = GameState::new(&Rules::default());
        assert_eq!(state.tile_at(Pos::new(0, 0)), Some(TileKind::Quarry));
        assert_eq!(state.tile_at(Pos::new(1, 1)), Some(TileKind::Trebuchet));
        assert_eq!(state.tile_at(Pos::new(2, 2)), Some(TileKind::Armory));
        let cells: BTreeSet<Pos> = state.tiles.iter().map(|tile| tile.pos).collect();
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn starting_roster_and_counters_follow_rules() {
        let rules = Rules { actions_per_warrior: 4, total_monsters: 7, ..Rules::default() };
        let state = GameState::new(&rules);
        assert_eq!(state.warrior(WarriorKind::A).pos, Pos::new(1, 1));
        assert_eq!(state.warrior(WarriorKind::B).pos, Pos::new(0, 1));
        assert_eq!(state.warrior(WarriorKind::C).pos, Pos::new(2, 1));
        assert_eq!(state.action_budget, [4, 4, 4]);
        assert_eq!(state.monsters_remaining, 7);
        assert_eq!(state.life_points, 3);
    }

    #[test]
    fn counters_saturate_at_their_bounds() {
        let mut state = GameState::new(&Rules::default());
        state.restore_life(3);
        assert_eq!(state.life_points, 3);
        for _ in 0..5 {
            state.lose_life();
        }
        assert_eq!(state.life_points, 0);

        state.monsters_remaining = 1;
        state.record_kills(3);
        assert_eq!(state.monsters_remaining, 0);
    }

    #[test]
    fn effect_grants_replace_previous_holder() {
        let mut effects = ActiveEffects::default();
        effects.grant(EffectKind::ExtraAttack, WarriorKind::A);
        effects.grant(EffectKind::ExtraAttack, WarriorKind::C);
        assert_eq!(effects.holder(EffectKind::ExtraAttack), Some(WarriorKind::C));
        assert_eq!(effects.holder(EffectKind::ExtraMovement), None);
        assert_eq!(effects.take(EffectKind::ExtraAttack), Some(WarriorKind::C));
        assert_eq!(effects.holder(EffectKind::ExtraAttack), None);
    }

    #[test]
    fn monster_ids_are_not_reused_after_removal() {
        let mut state = GameState::new(&Rules::default());
        let first = state.insert_monster(Pos::new(0, 0), 3);
        state.monsters.remove(first);
        let second = state.insert_monster(Pos::new(0, 0), 3);
        assert_ne!(first, second);
        assert_eq!(state.monsters[second].id, second);
    }
}
