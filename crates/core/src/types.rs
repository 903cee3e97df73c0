use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Stable monster handle. Keys are generational, so an id is never reused
    /// within a session even after the monster it named is gone.
    pub struct MonsterId;
}

/// Board coordinate. `x` is the column and `y` the row; ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WarriorKind {
    A,
    B,
    C,
}

impl WarriorKind {
    pub const ALL: [WarriorKind; 3] = [WarriorKind::A, WarriorKind::B, WarriorKind::C];

    pub const fn index(self) -> usize {
        match self {
            WarriorKind::A => 0,
            WarriorKind::B => 1,
            WarriorKind::C => 2,
        }
    }

    /// Damage dealt to every monster hit by one attack.
    pub const fn damage(self) -> i32 {
        match self {
            WarriorKind::A => 3,
            WarriorKind::B => 2,
            WarriorKind::C => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Quarry,
    Fountain,
    Tower,
    Tavern,
    Trebuchet,
    Market,
    Dispensary,
    Crypt,
    Armory,
}

impl TileKind {
    /// Row-major starting layout, one kind per cell.
    pub const LAYOUT: [TileKind; 9] = [
        TileKind::Quarry,
        TileKind::Fountain,
        TileKind::Tower,
        TileKind::Tavern,
        TileKind::Trebuchet,
        TileKind::Market,
        TileKind::Dispensary,
        TileKind::Crypt,
        TileKind::Armory,
    ];

    pub const fn description(self) -> &'static str {
        match self {
            TileKind::Quarry => "Place a trap on a selected tile",
            TileKind::Fountain => "Remove debuffs from all monsters",
            TileKind::Tower => "Teleport another warrior to a selected tile",
            TileKind::Tavern => "Give the selected warrior an extra movement",
            TileKind::Trebuchet => "Target a monster to apply a debuff",
            TileKind::Market => "Give the selected warrior extra attack power",
            TileKind::Dispensary => "Increase life points by 1",
            TileKind::Crypt => "Remove a selected monster from the board",
            TileKind::Armory => "Reduce a selected monster's HP by 1 or 2",
        }
    }

    /// True when activation needs a second target picked by the UI.
    pub const fn is_deferred(self) -> bool {
        matches!(self, TileKind::Tower | TileKind::Trebuchet | TileKind::Crypt | TileKind::Armory)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Move,
    Attack,
    Activate,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Move, ActionKind::Attack, ActionKind::Activate];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    ExtraMovement,
    ExtraAttack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HpCut {
    One,
    Two,
}

impl HpCut {
    pub const fn amount(self) -> i32 {
        match self {
            HpCut::One => 1,
            HpCut::Two => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Idle,
    Armed(WarriorKind),
    ActionChosen { warrior: WarriorKind, action: ActionKind },
}

/// Left behind by activating a tile whose effect needs a second target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredRequest {
    pub tile: TileKind,
    pub warrior: WarriorKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredEffect {
    Teleport { warrior: WarriorKind, to: Pos },
    Debuff { monster: MonsterId, tag: String },
    Remove { monster: MonsterId },
    Weaken { monster: MonsterId, cut: HpCut },
}

impl DeferredEffect {
    pub const fn tile(&self) -> TileKind {
        match self {
            DeferredEffect::Teleport { .. } => TileKind::Tower,
            DeferredEffect::Debuff { .. } => TileKind::Trebuchet,
            DeferredEffect::Remove { .. } => TileKind::Crypt,
            DeferredEffect::Weaken { .. } => TileKind::Armory,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeferredOutcome {
    pub tile: TileKind,
    pub killed: Option<MonsterId>,
    pub status: GameStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonsterHit {
    pub id: MonsterId,
    /// Hit points after damage; zero or below means the monster was removed.
    pub hp: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub warrior: WarriorKind,
    pub action: ActionKind,
    pub target: Pos,
    pub budget_consumed: bool,
    pub actions_left: u32,
    pub damaged: Vec<MonsterHit>,
    pub killed: Vec<MonsterId>,
    pub deferred: Option<DeferredRequest>,
    pub status: GameStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpawnedMonster {
    pub id: MonsterId,
    pub pos: Pos,
    pub hp: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpawnReport {
    pub planned: u32,
    pub spawned: Vec<SpawnedMonster>,
    pub trap_kills: Vec<Pos>,
    pub overflow_damage: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    pub spawn: SpawnReport,
    pub turn_count: u32,
    pub life_points: u32,
    pub monsters_remaining: u32,
    pub status: GameStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    IllegalAction,
    InvalidTarget,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("warrior {0:?} has no actions left this turn")]
    NoActionsLeft(WarriorKind),
    #[error("game is over: {0:?}")]
    GameOver(GameStatus),
    #[error("no warrior action is armed")]
    NothingArmed,
    #[error("no deferred tile effect is pending")]
    NoPendingEffect,
    #[error("pending {pending:?} effect cannot take a {offered:?} target")]
    DeferredMismatch { pending: TileKind, offered: TileKind },
    #[error("position ({}, {}) is outside the board", .0.x, .0.y)]
    OutOfBounds(Pos),
    #[error("no monster with id {0:?} on the board")]
    UnknownMonster(MonsterId),
}

impl GameError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            GameError::NoActionsLeft(_)
            | GameError::GameOver(_)
            | GameError::NothingArmed
            | GameError::NoPendingEffect
            | GameError::DeferredMismatch { .. } => ErrorKind::IllegalAction,
            GameError::OutOfBounds(_) | GameError::UnknownMonster(_) => ErrorKind::InvalidTarget,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LogEvent {
    WarriorMoved { warrior: WarriorKind, from: Pos, to: Pos },
    MonsterHit { warrior: WarriorKind, monster: MonsterId, hp: i32 },
    MonsterSlain { monster: MonsterId, pos: Pos },
    TileActivated { warrior: WarriorKind, tile: TileKind },
    TrapPlaced { pos: Pos },
    TrapSprung { pos: Pos },
    DebuffsCleared { count: usize },
    EffectGranted { effect: EffectKind, warrior: WarriorKind },
    EffectConsumed { effect: EffectKind, warrior: WarriorKind },
    LifeRestored { life_points: u32 },
    WarriorTeleported { warrior: WarriorKind, to: Pos },
    MonsterDebuffed { monster: MonsterId },
    MonsterSpawned { monster: MonsterId, pos: Pos, hp: i32 },
    BoardOverflow { life_points: u32 },
    TurnEnded { turn_count: u32 },
    GameEnded { status: GameStatus },
}

/// One player command, in the serialisable form kept by the input journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    SelectWarrior(WarriorKind),
    SelectAction { warrior: WarriorKind, action: ActionKind },
    ResolveTarget(Pos),
    ApplyDeferred(DeferredEffect),
    ConsumeEffect(EffectKind),
    EndTurn,
}
