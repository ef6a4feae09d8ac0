//! A [singly-linked list] node with an owned tail.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

/// Creates a linked list containing the arguments, returning its head.
///
/// # Examples
///
/// ```
/// use ksum::prelude::*;
///
/// let head = linked![1, 2, 3].unwrap();
/// assert_eq!(head.values(), [1, 2, 3]);
///
/// let empty = linked![];
/// assert!(empty.is_none());
/// ```
#[macro_export]
macro_rules! linked {
    ($($elem:expr),* $(,)?) => {
        $crate::collections::linked_list::ListNode::from_slice(&[$($elem),*])
    };
}

/// A [singly-linked list] node with an owned tail.
///
/// The `next` field owns the rest of the list, so dropping the head drops
/// every node after it.
///
/// [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListNode {
    /// Value stored at this node.
    pub val: i64,
    /// The rest of the list, or [`None`] at the tail.
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    /// Creates a detached node holding `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksum::prelude::*;
    ///
    /// let node = ListNode::new(3);
    ///
    /// assert_eq!(node.val, 3);
    /// assert!(node.next.is_none());
    /// ```
    #[inline]
    pub const fn new(val: i64) -> Self {
        Self { val, next: None }
    }

    /// Builds a list from the values in order, returning its head, or
    /// [`None`] for an empty slice.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is assembled back to front, each node
    /// taking ownership of the chain built so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksum::prelude::*;
    ///
    /// let head = ListNode::from_slice(&[4, 5, 6]).unwrap();
    ///
    /// assert_eq!(head.val, 4);
    /// assert_eq!(head.next.unwrap().val, 5);
    /// ```
    pub fn from_slice(vals: &[i64]) -> Option<Box<Self>> {
        let mut head = None;

        for &val in vals.iter().rev() {
            let mut node = Box::new(Self::new(val));
            node.next = head;
            head = Some(node);
        }

        head
    }

    /// Collects the values from this node to the tail, in list order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksum::prelude::*;
    ///
    /// let head = linked![9, 8, 7].unwrap();
    ///
    /// assert_eq!(head.values(), [9, 8, 7]);
    /// ```
    pub fn values(&self) -> Vec<i64> {
        let mut vals = Vec::new();
        let mut current = Some(self);

        while let Some(node) = current {
            vals.push(node.val);
            current = node.next.as_deref();
        }

        vals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_node() {
        let node = ListNode::new(10);
        assert_eq!(node.val, 10);
        assert!(node.next.is_none());
    }

    #[test]
    fn test_from_slice_preserves_order() {
        let head = ListNode::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(head.values(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_from_empty_slice() {
        assert!(ListNode::from_slice(&[]).is_none());
    }

    #[test]
    fn test_single_node_list() {
        let head = ListNode::from_slice(&[5]).unwrap();
        assert_eq!(head.val, 5);
        assert!(head.next.is_none());
    }

    #[test]
    fn test_linked_macro() {
        let head = linked![3, 1, 2].unwrap();
        assert_eq!(head.values(), [3, 1, 2]);
        assert!(linked![].is_none());
    }

    #[test]
    fn test_drop_long_list() {
        // Dropping the head walks the owned chain without issue.
        let vals: Vec<i64> = (0..10_000).collect();
        let head = ListNode::from_slice(&vals).unwrap();
        assert_eq!(head.values().len(), vals.len());
    }
}
