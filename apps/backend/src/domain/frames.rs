//! Frame segmentation of an ordered throw sequence.

/// Highest pin count a single throw can record.
pub const MAX_PINS: u8 = 10;

/// Groups a game's ordered throws into frames of up to two consecutive
/// throws: frame *i* holds the throws at positions 2i and 2i+1, and a
/// trailing single throw forms its own frame when the count is odd.
///
/// Deliberately naive: a strike does not close its frame early and earns
/// no bonus; it is paired with whatever throw follows. Empty input yields
/// an empty sequence.
pub fn frames(pins: &[u8]) -> impl Iterator<Item = &[u8]> {
    pins.chunks(2)
}
