//! [3SUM]: Enumerates every unique triplet of values in a sequence that sums
//! to zero, using a sort followed by a [two-pointer] sweep per anchor.
//!
//! [3SUM]: https://en.wikipedia.org/wiki/3SUM
//! [two-pointer]: https://en.wikipedia.org/wiki/Two_pointers_technique

/// Returns every unique value triplet `(a, b, c)`, with `a <= b <= c`, such
/// that `a + b + c == 0`.
///
/// Uniqueness is by value: a triplet appears once no matter how many index
/// combinations produce it. Emission order follows the ascending anchor
/// position in the sorted copy and carries no meaning; callers should compare
/// results as sets.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time. After an *O*(*n log n*) sort, each anchor value
/// drives a single inward sweep of two pointers over the remaining suffix,
/// and sortedness guarantees each step discards part of the search space.
///
/// # Examples
///
/// ```
/// use ksum::prelude::*;
///
/// let nums = [-1, 0, 1, 2, -1, -4];
///
/// assert_eq!(zero_sum_triplets(&nums), [(-1, -1, 2), (-1, 0, 1)]);
/// assert!(zero_sum_triplets(&[1, 2, -2, -1]).is_empty());
/// ```
pub fn zero_sum_triplets(nums: &[i64]) -> Vec<(i64, i64, i64)> {
    let mut triplets = Vec::new();

    if nums.len() < 3 {
        return triplets;
    }

    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();

    for i in 0..n - 2 {
        // A repeated anchor value can only reproduce triplets already found.
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }

        let mut left = i + 1;
        let mut right = n - 1;

        while left < right {
            let total = sorted[i] + sorted[left] + sorted[right];

            if total == 0 {
                triplets.push((sorted[i], sorted[left], sorted[right]));

                // Step both pointers past runs of equal values so the same
                // triplet is never emitted twice.
                while left < right && sorted[left] == sorted[left + 1] {
                    left += 1;
                }
                while left < right && sorted[right] == sorted[right - 1] {
                    right -= 1;
                }

                left += 1;
                right -= 1;
            } else if total < 0 {
                left += 1;
            } else {
                right -= 1;
            }
        }
    }

    triplets
}
