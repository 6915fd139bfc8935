//! Non-destructive Fisher–Yates shuffle over an injected random source.

use rand::Rng;

/// Returns a uniformly random permutation of `items`, leaving `items` untouched.
///
/// Walks the copy from the last index down to the first, swapping each slot
/// with one drawn uniformly from `0..=index`. Equal values are treated as
/// distinct positions.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for index in (0..shuffled.len()).rev() {
        let pick = rng.random_range(0..=index);
        shuffled.swap(index, pick);
    }

    shuffled
}
