//! Shuffle tests
//!
//! Critical invariants tested:
//! - Direct shuffles cost `len - 1` draws, seeded shuffles cost exactly one
//! - Results are permutations of the input
//! - Known seeds reproduce known orders

use proptest::prelude::*;
use spire_seed_core::rng::{JavaRandom, StreamRng};
use spire_seed_core::shuffle::{shuffle, shuffle_seeded};

const TESTSEED1: i64 = 64_004_406_012_856;

#[test]
fn test_direct_shuffle_golden() {
    let mut rng = StreamRng::new(TESTSEED1);
    let mut items: Vec<u32> = (0..10).collect();
    shuffle(&mut items, &mut rng);
    assert_eq!(items, vec![1, 9, 7, 2, 8, 0, 6, 3, 4, 5]);
    assert_eq!(rng.counter(), 9);
}

#[test]
fn test_seeded_shuffle_golden() {
    let mut rng = StreamRng::new(TESTSEED1);
    let mut items: Vec<u32> = (0..10).collect();
    shuffle_seeded(&mut items, &mut rng);
    assert_eq!(items, vec![8, 3, 7, 2, 6, 4, 0, 5, 9, 1]);
    assert_eq!(rng.counter(), 1);
}

#[test]
fn test_seeded_shuffle_equals_java_shuffle_of_drawn_long() {
    let mut rng = StreamRng::new(TESTSEED1);
    let mut probe = rng.clone();

    let mut seeded: Vec<u32> = (0..25).collect();
    shuffle_seeded(&mut seeded, &mut rng);

    let mut java = JavaRandom::new(probe.draw_long());
    let mut manual: Vec<u32> = (0..25).collect();
    shuffle(&mut manual, &mut java);

    assert_eq!(seeded, manual);
}

#[test]
fn test_trivial_slices() {
    let mut rng = StreamRng::new(1);
    let mut empty: Vec<u8> = Vec::new();
    shuffle(&mut empty, &mut rng);
    let mut single = vec![7];
    shuffle(&mut single, &mut rng);
    assert_eq!(rng.counter(), 0);
    assert_eq!(single, vec![7]);

    shuffle_seeded(&mut empty, &mut rng);
    shuffle_seeded(&mut single, &mut rng);
    assert_eq!(rng.counter(), 2);
}

proptest! {
    #[test]
    fn prop_shuffles_are_permutations(seed in any::<i64>(), len in 0usize..60) {
        let original: Vec<usize> = (0..len).collect();

        let mut rng = StreamRng::new(seed);
        let mut direct = original.clone();
        shuffle(&mut direct, &mut rng);
        prop_assert_eq!(rng.counter() as usize, len.saturating_sub(1));
        direct.sort_unstable();
        prop_assert_eq!(&direct, &original);

        let mut rng = StreamRng::new(seed);
        let mut seeded = original.clone();
        shuffle_seeded(&mut seeded, &mut rng);
        prop_assert_eq!(rng.counter(), 1);
        seeded.sort_unstable();
        prop_assert_eq!(&seeded, &original);
    }
}
