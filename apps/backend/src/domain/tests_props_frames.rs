//! Property tests for frame segmentation (pure domain, no DB).
//!
//! Properties tested:
//! - Any sequence of n throws produces ceil(n/2) frames
//! - Every frame has 2 throws except a trailing single when n is odd
//! - Concatenating the frames reproduces the input exactly

use proptest::prelude::*;

use crate::domain::frames::{frames, MAX_PINS};

proptest! {
    #[test]
    fn prop_frame_count_is_ceil_half(
        pins in prop::collection::vec(0u8..=MAX_PINS, 0..64),
    ) {
        let count = frames(&pins).count();
        prop_assert_eq!(count, pins.len().div_ceil(2));
    }

    #[test]
    fn prop_frames_are_pairs_with_optional_trailing_single(
        pins in prop::collection::vec(0u8..=MAX_PINS, 0..64),
    ) {
        let segmented: Vec<&[u8]> = frames(&pins).collect();
        for (i, frame) in segmented.iter().enumerate() {
            if i + 1 < segmented.len() {
                prop_assert_eq!(frame.len(), 2, "only the last frame may be short");
            } else {
                let expected = if pins.len() % 2 == 0 { 2 } else { 1 };
                prop_assert_eq!(frame.len(), expected);
            }
        }
    }

    #[test]
    fn prop_concatenation_round_trips(
        pins in prop::collection::vec(0u8..=MAX_PINS, 0..64),
    ) {
        let rebuilt: Vec<u8> = frames(&pins).flatten().copied().collect();
        prop_assert_eq!(rebuilt, pins);
    }
}
