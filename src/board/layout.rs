//! Grid width heuristic.

/// Display column count for a deck of `n` cards.
///
/// `floor(n/2)` clamped to `[2, 12]`, with odd results rounded down to the
/// nearest even value - except 11, which rounds up to 12 so large decks
/// keep a wide grid. Always even, always in `[2, 12]`.
#[must_use]
pub fn column_count(n: usize) -> usize {
    let columns = (n / 2).clamp(2, 12);
    if columns % 2 != 0 {
        if columns == 11 {
            12
        } else {
            columns - 1
        }
    } else {
        columns
    }
}
