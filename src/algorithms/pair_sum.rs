//! [Pair Sum]: Finds the first pair of positions in a sequence whose values
//! add up to a target, using a single scan backed by a [hash table] of
//! previously seen values.
//!
//! [Pair Sum]: https://en.wikipedia.org/wiki/Subset_sum_problem
//! [hash table]: https://en.wikipedia.org/wiki/Hash_table

use std::collections::HashMap;

/// Returns the first pair of indices `(i, j)`, with `i < j`, such that
/// `nums[i] + nums[j] == target`, or [`None`] if no such pair exists.
///
/// "First" means the pair completed earliest during a left-to-right scan:
/// the smallest valid `j`, and for that `j` the earliest valid `i`. When a
/// value occurs more than once, only its first occurrence is remembered as a
/// potential complement.
///
/// An absent pair is an ordinary outcome, not an error.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Each element is visited once; for every position the
/// complement `target - nums[j]` is probed in the map of previously seen
/// values, and a hit resolves the pair immediately.
///
/// # Examples
///
/// ```
/// use ksum::prelude::*;
///
/// let nums = [2, 7, 11, 15];
///
/// assert_eq!(pair_sum(&nums, 9), Some((0, 1)));
/// assert_eq!(pair_sum(&nums, 100), None);
/// ```
pub fn pair_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (j, &num) in nums.iter().enumerate() {
        if let Some(&i) = seen.get(&(target - num)) {
            return Some((i, j));
        }

        // First occurrence wins; later duplicates keep the earlier index.
        seen.entry(num).or_insert(j);
    }

    None
}
