//! Random subset selection

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick up to `count` elements of `pool` without replacement, in random order.
///
/// `pool` is never mutated. When `count` exceeds the pool length every
/// element is returned (shuffled); there is no padding and no error.
pub fn pick_random<T: Clone, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
