//! Sequence-Search Algorithms.

pub mod pair_sum;
pub mod zero_sum_triplets;

/// Sequence-Search Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::pair_sum::*;
    #[doc(no_inline)]
    pub use super::zero_sum_triplets::*;
}
