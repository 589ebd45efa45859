//! Random comparator shuffle
//!
//! The published mazes ordered their carve directions by sorting a
//! four-element array with a comparator that ignores its arguments and
//! returns `rand() - 0.5`. The resulting permutation depends entirely on
//! the sequence of comparisons the JavaScript engine performs, so this
//! module replays V8's TimSort for short arrays step by step:
//!
//! 1. Count the initial run starting at index 0. The first comparison
//!    decides whether the run is descending; the run extends while each
//!    further comparison agrees. A descending run is reversed in place.
//! 2. Binary-insert every remaining element into the sorted prefix.
//!
//! Arrays shorter than 64 elements never reach the merge phase, so this is
//! the complete algorithm for them. Each comparison draws one float from
//! the generator and counts as "less than" when the draw is below 0.5.

use crate::rng::Mulberry32;

/// Longest slice that V8 sorts with a single binary-insertion run
pub const MAX_SHUFFLE_LEN: usize = 63;

/// Permute `items` in place exactly like a random-comparator sort
pub fn comparator_shuffle<T>(items: &mut [T], rng: &mut Mulberry32) {
    debug_assert!(items.len() <= MAX_SHUFFLE_LEN, "slice too long for the short-array path");

    let mut less = || rng.next_f64() - 0.5 < 0.0;
    let len = items.len();
    if len < 2 {
        return;
    }

    let run = count_and_make_run(items, &mut less);
    binary_insertion_sort(items, run, &mut less);
}

/// Find the leading run and normalise it to ascending order
///
/// Returns the run length (at least 2 for slices of 2 or more).
fn count_and_make_run<T>(items: &mut [T], less: &mut impl FnMut() -> bool) -> usize {
    let descending = less();
    let mut run = 2;

    for _ in 2..items.len() {
        let lt = less();
        if lt != descending {
            break;
        }
        run += 1;
    }

    if descending {
        items[..run].reverse();
    }
    run
}

/// Insert `items[start..]` one at a time into the sorted prefix
fn binary_insertion_sort<T>(items: &mut [T], start: usize, less: &mut impl FnMut() -> bool) {
    for current in start..items.len() {
        let mut left = 0;
        let mut right = current;

        while left < right {
            let mid = left + ((right - left) >> 1);
            if less() {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        // Shift items[left..current] one slot right and drop the pivot in
        items[left..=current].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_permutation() {
        let mut rng = Mulberry32::new(777);
        for _ in 0..200 {
            let mut items = [0u8, 1, 2, 3];
            comparator_shuffle(&mut items, &mut rng);
            let mut sorted = items;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_short_slices_draw_nothing() {
        let mut rng = Mulberry32::new(5);
        let mut reference = rng.clone();

        let mut empty: [u8; 0] = [];
        comparator_shuffle(&mut empty, &mut rng);
        let mut one = [9u8];
        comparator_shuffle(&mut one, &mut rng);

        assert_eq!(one, [9]);
        assert_eq!(rng.next_u32(), reference.next_u32());
    }

    #[test]
    fn test_pair_swaps_on_low_draw() {
        // A pair costs exactly one comparison; a "less" result reverses it
        let mut probe = Mulberry32::new(42);
        let swapped = probe.next_f64() < 0.5;

        let mut rng = Mulberry32::new(42);
        let mut pair = ['a', 'b'];
        comparator_shuffle(&mut pair, &mut rng);
        assert_eq!(pair, if swapped { ['b', 'a'] } else { ['a', 'b'] });
    }

    #[test]
    fn test_known_orders() {
        // Orders V8 produced for three consecutive sorts on one stream
        let cases: [(u32, [[u8; 4]; 3]); 3] = [
            (1, [[0, 1, 2, 3], [1, 3, 0, 2], [3, 2, 1, 0]]),
            (7, [[2, 1, 0, 3], [3, 2, 1, 0], [0, 3, 1, 2]]),
            (42, [[0, 1, 3, 2], [0, 1, 3, 2], [3, 1, 0, 2]]),
        ];

        for (seed, orders) in cases {
            let mut rng = Mulberry32::new(seed);
            for want in orders {
                let mut items = [0u8, 1, 2, 3];
                comparator_shuffle(&mut items, &mut rng);
                assert_eq!(items, want, "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let mut a = Mulberry32::new(2024);
        let mut b = Mulberry32::new(2024);
        for _ in 0..50 {
            let mut x = [0u8, 1, 2, 3];
            let mut y = [0u8, 1, 2, 3];
            comparator_shuffle(&mut x, &mut a);
            comparator_shuffle(&mut y, &mut b);
            assert_eq!(x, y);
        }
    }
}
