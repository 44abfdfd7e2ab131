use crate::domain::frames::frames;

fn collect(pins: &[u8]) -> Vec<Vec<u8>> {
    frames(pins).map(|f| f.to_vec()).collect()
}

#[test]
fn empty_sequence_yields_no_frames() {
    assert_eq!(collect(&[]), Vec::<Vec<u8>>::new());
}

#[test]
fn even_count_pairs_cleanly() {
    assert_eq!(collect(&[6, 3, 4, 4]), vec![vec![6, 3], vec![4, 4]]);
}

#[test]
fn single_throw_is_its_own_frame() {
    assert_eq!(collect(&[5]), vec![vec![5]]);
}

#[test]
fn odd_count_leaves_trailing_single() {
    assert_eq!(collect(&[6, 3, 4]), vec![vec![6, 3], vec![4]]);
}

// A strike is NOT treated specially: it pairs with the following throw and
// earns no bonus. This locks in the observed pairwise behavior; real
// ten-pin frame rules are out of scope.
#[test]
fn strike_does_not_close_frame_early() {
    assert_eq!(collect(&[10, 7, 2]), vec![vec![10, 7], vec![2]]);
}

#[test]
fn segmentation_is_lazy() {
    let pins = [1, 2, 3, 4, 5, 6];
    let mut it = frames(&pins);
    assert_eq!(it.next(), Some(&[1u8, 2][..]));
    assert_eq!(it.next(), Some(&[3u8, 4][..]));
    assert_eq!(it.next(), Some(&[5u8, 6][..]));
    assert_eq!(it.next(), None);
}
