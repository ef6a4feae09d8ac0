//! Pair-Sum & Zero-Sum-Triplet Search

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod collections;

/// Pair-Sum & Zero-Sum-Triplet Search Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::linked;

    #[doc(no_inline)]
    pub use super::collections::binary_tree::TreeNode;
    #[doc(no_inline)]
    pub use super::collections::graph::Graph;
    #[doc(no_inline)]
    pub use super::collections::linked_list::ListNode;

    #[doc(no_inline)]
    pub use super::algorithms::pair_sum::*;
    #[doc(no_inline)]
    pub use super::algorithms::zero_sum_triplets::*;
}
