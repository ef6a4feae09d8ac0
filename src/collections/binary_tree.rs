//! A [binary tree] node with owned children.
//!
//! [binary tree]: https://en.wikipedia.org/wiki/Binary_tree

/// A [binary tree] node with owned children.
///
/// Each child is an owned, optional subtree, so dropping a node drops the
/// whole subtree beneath it.
///
/// [binary tree]: https://en.wikipedia.org/wiki/Binary_tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Value stored at this node.
    pub val: i64,
    /// Left subtree, or [`None`] for a missing child.
    pub left: Option<Box<TreeNode>>,
    /// Right subtree, or [`None`] for a missing child.
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a leaf node holding `val`, with no children.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksum::prelude::*;
    ///
    /// let leaf = TreeNode::new(7);
    ///
    /// assert_eq!(leaf.val, 7);
    /// assert!(leaf.left.is_none());
    /// assert!(leaf.right.is_none());
    /// ```
    #[inline]
    pub const fn new(val: i64) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Creates a node holding `val` with the given subtrees as children.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksum::prelude::*;
    ///
    /// let root = TreeNode::with_children(1, Some(TreeNode::new(2)), None);
    ///
    /// assert_eq!(root.left.as_ref().map(|n| n.val), Some(2));
    /// assert!(root.right.is_none());
    /// ```
    pub fn with_children(val: i64, left: Option<TreeNode>, right: Option<TreeNode>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf() {
        let node = TreeNode::new(42);
        assert_eq!(node.val, 42);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }

    #[test]
    fn test_with_children() {
        let root = TreeNode::with_children(
            1,
            Some(TreeNode::new(2)),
            Some(TreeNode::with_children(3, Some(TreeNode::new(4)), None)),
        );

        assert_eq!(root.val, 1);
        assert_eq!(root.left.as_ref().unwrap().val, 2);

        let right = root.right.as_ref().unwrap();
        assert_eq!(right.val, 3);
        assert_eq!(right.left.as_ref().unwrap().val, 4);
    }

    #[test]
    fn test_default_is_zero_leaf() {
        assert_eq!(TreeNode::default(), TreeNode::new(0));
    }
}
