//! An undirected [graph] with index-based adjacency.
//!
//! [graph]: https://en.wikipedia.org/wiki/Graph_(abstract_data_type)

/// An undirected [graph] holding an integer value per node, with neighbors
/// stored as node indices.
///
/// Index-based adjacency sidesteps ownership cycles entirely: a node never
/// holds a reference to another node, only its index.
///
/// [graph]: https://en.wikipedia.org/wiki/Graph_(abstract_data_type)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Value stored at each node, indexed by node.
    vals: Vec<i64>,
    /// Neighbor indices of each node, indexed by node.
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a new, empty `Graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksum::prelude::*;
    ///
    /// let graph = Graph::new();
    /// assert_eq!(graph.len(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            vals: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Adds a node holding `val` with no neighbors, returning its index.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksum::prelude::*;
    ///
    /// let mut graph = Graph::new();
    ///
    /// let a = graph.add_node(1);
    /// let b = graph.add_node(2);
    ///
    /// assert_eq!((a, b), (0, 1));
    /// ```
    pub fn add_node(&mut self, val: i64) -> usize {
        self.vals.push(val);
        self.adjacency.push(Vec::new());
        self.vals.len() - 1
    }

    /// Adds an undirected edge between nodes `a` and `b`, recording each as a
    /// neighbor of the other.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksum::prelude::*;
    ///
    /// let mut graph = Graph::new();
    ///
    /// let a = graph.add_node(1);
    /// let b = graph.add_node(2);
    /// graph.add_edge(a, b);
    ///
    /// assert_eq!(graph.neighbors(a), [b]);
    /// assert_eq!(graph.neighbors(b), [a]);
    /// ```
    pub fn add_edge(&mut self, a: usize, b: usize) {
        assert!(a < self.vals.len() && b < self.vals.len());

        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Returns the value stored at node `node`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn value(&self, node: usize) -> i64 {
        self.vals[node]
    }

    /// Returns the neighbor indices of node `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Returns the number of nodes in the graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_add_nodes() {
        let mut graph = Graph::new();

        assert_eq!(graph.add_node(10), 0);
        assert_eq!(graph.add_node(20), 1);
        assert_eq!(graph.add_node(30), 2);

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.value(1), 20);
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn test_edges_are_undirected() {
        let mut graph = Graph::new();
        let a = graph.add_node(1);
        let b = graph.add_node(2);
        let c = graph.add_node(3);

        graph.add_edge(a, b);
        graph.add_edge(a, c);

        assert_eq!(graph.neighbors(a), [b, c]);
        assert_eq!(graph.neighbors(b), [a]);
        assert_eq!(graph.neighbors(c), [a]);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Graph::new();
        let a = graph.add_node(0);

        graph.add_edge(a, a);

        // Both endpoint entries land on the same node.
        assert_eq!(graph.neighbors(a), [a, a]);
    }

    #[test]
    #[should_panic]
    fn test_edge_out_of_bounds() {
        let mut graph = Graph::new();
        graph.add_node(1);
        graph.add_edge(0, 1);
    }
}
