//! Shared Data-Structure Definitions.

pub mod binary_tree;
pub mod graph;
pub mod linked_list;

/// Shared Data-Structure Definitions Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::linked;

    #[doc(no_inline)]
    pub use super::binary_tree::TreeNode;
    #[doc(no_inline)]
    pub use super::graph::Graph;
    #[doc(no_inline)]
    pub use super::linked_list::ListNode;
}
