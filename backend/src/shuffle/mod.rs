//! Fisher-Yates shuffle
//!
//! Walks from the last index down to 1, swapping each position with an
//! index drawn from `[0, i]`. The upper bound is inclusive; drawing from
//! `[0, i)` is also a valid shuffle but yields a different permutation
//! for the same draws.
//!
//! Two drivers exist:
//! - `shuffle` draws each index straight from a source (a `StreamRng`
//!   consumes `len - 1` counted draws).
//! - `shuffle_seeded` draws one long from a stream and runs the shuffle
//!   on a `java.util.Random` seeded with it, which is how the game
//!   shuffles decks, relic pools and the map room pool.

use crate::rng::{JavaRandom, StreamRng};

/// Source of shuffle indices
pub trait ShuffleSource {
    /// Uniform index in `[0, upper]`
    fn index_inclusive(&mut self, upper: usize) -> usize;
}

impl ShuffleSource for StreamRng {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        self.draw_int_inclusive(0, upper as i32) as usize
    }
}

impl ShuffleSource for JavaRandom {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        self.next_int(upper as i32 + 1) as usize
    }
}

/// Shuffle in place, drawing `len - 1` indices from `source`
///
/// # Example
/// ```
/// use spire_seed_core::rng::StreamRng;
/// use spire_seed_core::shuffle::shuffle;
///
/// let mut rng = StreamRng::new(42);
/// let mut items = vec![1, 2, 3, 4];
/// shuffle(&mut items, &mut rng);
/// assert_eq!(rng.counter(), 3);
/// ```
pub fn shuffle<T, S: ShuffleSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.index_inclusive(i);
        items.swap(i, j);
    }
}

/// Shuffle with a `java.util.Random` seeded from one `draw_long()`
///
/// Consumes exactly one counted draw from `stream`, even for empty or
/// single-element slices.
pub fn shuffle_seeded<T>(items: &mut [T], stream: &mut StreamRng) {
    let mut java = JavaRandom::new(stream.draw_long());
    shuffle(items, &mut java);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_draw_nothing() {
        let mut rng = StreamRng::new(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        let mut single = vec![9];
        shuffle(&mut single, &mut rng);
        assert_eq!(rng.counter(), 0);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_seeded_shuffle_costs_one_draw() {
        let mut rng = StreamRng::new(1);
        let mut items: Vec<u32> = (0..40).collect();
        shuffle_seeded(&mut items, &mut rng);
        assert_eq!(rng.counter(), 1);

        let mut empty: Vec<u32> = Vec::new();
        shuffle_seeded(&mut empty, &mut rng);
        assert_eq!(rng.counter(), 2);
    }

    #[test]
    fn test_golden_direct_shuffle() {
        let mut rng = StreamRng::new(64_004_406_012_856);
        let mut items: Vec<u32> = (0..10).collect();
        shuffle(&mut items, &mut rng);
        assert_eq!(items, vec![1, 9, 7, 2, 8, 0, 6, 3, 4, 5]);
        assert_eq!(rng.counter(), 9);
    }

    #[test]
    fn test_golden_seeded_shuffle() {
        let mut rng = StreamRng::new(64_004_406_012_856);
        let mut items: Vec<u32> = (0..10).collect();
        shuffle_seeded(&mut items, &mut rng);
        assert_eq!(items, vec![8, 3, 7, 2, 6, 4, 0, 5, 9, 1]);
    }
}
