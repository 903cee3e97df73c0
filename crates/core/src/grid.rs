//! Coordinate math for the 3x3 board: bounds, distances and the line predicates
//! behind warrior attack shapes.

use crate::types::{Pos, WarriorKind};

pub const BOARD_SIZE: i32 = 3;

pub const CENTER: Pos = Pos::new(1, 1);

/// The eight non-center cells, in the order the spawn engine draws from.
pub const EDGE_CELLS: [Pos; 8] = [
    Pos::new(0, 0),
    Pos::new(1, 0),
    Pos::new(2, 0),
    Pos::new(0, 2),
    Pos::new(1, 2),
    Pos::new(2, 2),
    Pos::new(0, 1),
    Pos::new(2, 1),
];

pub fn in_bounds(pos: Pos) -> bool {
    (0..BOARD_SIZE).contains(&pos.x) && (0..BOARD_SIZE).contains(&pos.y)
}

/// All nine cells, row-major.
pub fn all_cells() -> impl Iterator<Item = Pos> {
    (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Pos::new(x, y)))
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

pub fn same_row_or_column(a: Pos, b: Pos) -> bool {
    a.x == b.x || a.y == b.y
}

/// Shares a row or column and is at least two cells away.
pub fn ranged_line(a: Pos, b: Pos) -> bool {
    same_row_or_column(a, b) && manhattan(a, b) > 1
}

/// Whether a warrior of `kind` standing on `from` can strike `target`.
pub fn in_attack_shape(kind: WarriorKind, from: Pos, target: Pos) -> bool {
    match kind {
        WarriorKind::A => manhattan(from, target) == 1,
        WarriorKind::B => ranged_line(from, target),
        WarriorKind::C => same_row_or_column(from, target),
    }
}
