//! Injectable random draws for the spawn engine.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::rules::RollRange;

pub trait RandomSource {
    fn next_draw(&mut self) -> u64;

    /// Uniform value in `range`, inclusive on both ends.
    fn roll(&mut self, range: RollRange) -> u32 {
        let span = u64::from(range.max.saturating_sub(range.min)) + 1;
        range.min + (self.next_draw() % span) as u32
    }

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_draw() % len as u64) as usize
    }
}

impl RandomSource for ChaCha8Rng {
    fn next_draw(&mut self) -> u64 {
        self.next_u64()
    }
}

/// Replays a fixed sequence of draws, then yields zero forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    draws: VecDeque<u64>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = u64>) -> Self {
        Self { draws: draws.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_draw(&mut self) -> u64 {
        self.draws.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn roll_stays_inside_requested_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        for _ in 0..200 {
            let value = rng.roll(RollRange::new(3, 6));
            assert!((3..=6).contains(&value));
        }
    }

    #[test]
    fn roll_reaches_both_ends_of_a_small_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rolls: Vec<u32> = (0..64).map(|_| rng.roll(RollRange::new(1, 2))).collect();
        assert!(rolls.contains(&1));
        assert!(rolls.contains(&2));
    }

    #[test]
    fn scripted_draws_map_directly_onto_rolls_and_picks() {
        let mut rng = ScriptedRng::new([1, 9, 2]);
        assert_eq!(rng.roll(RollRange::new(1, 2)), 2);
        assert_eq!(rng.pick(8), 1);
        assert_eq!(rng.roll(RollRange::new(3, 6)), 5);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.pick(8), 0, "exhausted script keeps drawing zero");
    }
}
