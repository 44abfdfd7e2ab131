//! Property tests for frame segmentation (pure domain, no DB).
//!
//! These tests validate the pairwise grouping laws: frame count, frame
//! widths, and lossless round-tripping of the input order.

use backend::domain::frames::{frames, MAX_PINS};
use proptest::prelude::*;

proptest! {
    /// Property: n throws always segment into ceil(n/2) frames
    #[test]
    fn prop_frame_count(
        pins in prop::collection::vec(0u8..=MAX_PINS, 0..128),
    ) {
        let count = frames(&pins).count();
        prop_assert_eq!(count, pins.len().div_ceil(2));
    }

    /// Property: every frame holds two throws, except a trailing single
    /// for odd-length input
    #[test]
    fn prop_frame_widths(
        pins in prop::collection::vec(0u8..=MAX_PINS, 0..128),
    ) {
        let segmented: Vec<&[u8]> = frames(&pins).collect();
        if let Some((last, rest)) = segmented.split_last() {
            for frame in rest {
                prop_assert_eq!(frame.len(), 2);
            }
            let expected = if pins.len() % 2 == 0 { 2 } else { 1 };
            prop_assert_eq!(last.len(), expected);
        } else {
            prop_assert!(pins.is_empty());
        }
    }

    /// Property: concatenating the frames reproduces the input exactly
    #[test]
    fn prop_round_trip(
        pins in prop::collection::vec(0u8..=MAX_PINS, 0..128),
    ) {
        let rebuilt: Vec<u8> = frames(&pins).flatten().copied().collect();
        prop_assert_eq!(rebuilt, pins);
    }
}

#[test]
fn documented_scenarios() {
    let collect = |pins: &[u8]| -> Vec<Vec<u8>> { frames(pins).map(<[u8]>::to_vec).collect() };

    assert_eq!(collect(&[]), Vec::<Vec<u8>>::new());
    assert_eq!(collect(&[6, 3, 4, 4]), vec![vec![6, 3], vec![4, 4]]);
    // Strikes are paired naively, not scored
    assert_eq!(collect(&[10, 7, 2]), vec![vec![10, 7], vec![2]]);
    assert_eq!(collect(&[5]), vec![vec![5]]);
}
