//! A module for building minimum spanning trees.

use std::{cmp::Reverse, collections::BinaryHeap};

use serde::{Deserialize, Serialize};

use crate::{edge::Edge, graph::GraphIndex};

/// The edges committed by Prim's algorithm and their total weight.
///
/// When the root's component doesn't cover the whole graph the tree only spans that component,
/// see [`SpanningTree::spans`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree<T> {
    edges: Vec<Edge<T>>,
    total_weight: u64,
}

impl<T> SpanningTree<T> {
    pub(crate) fn new(edges: Vec<Edge<T>>, total_weight: u64) -> Self {
        Self {
            edges,
            total_weight,
        }
    }

    /// The tree edges in the order they were committed, each oriented away from the root.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Sum of the weights of the tree edges.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of tree edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns whether the tree reaches all of `vertex_count` vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b", 1);
    /// graph.add_edge("c", "d", 1);
    ///
    /// let tree = graph.minimum_spanning_tree(&"a").unwrap();
    /// assert!(!tree.spans(graph.vertex_count()));
    /// ```
    pub fn spans(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }
}

/// Prim's algorithm from `root`, returns the `(from, to, weight)` tree edges and their total
/// weight.
///
/// Candidates are ordered by `(weight, from, to)`, equal weights fall back to index order.
pub fn prim(
    adjacency: &[Vec<(GraphIndex, u64)>],
    root: GraphIndex,
) -> (Vec<(GraphIndex, GraphIndex, u64)>, u64) {
    let mut visited = vec![false; adjacency.len()];
    let mut tree = Vec::new();
    let mut total_weight = 0;
    let mut frontier = BinaryHeap::new();

    visited[root] = true;
    frontier.extend(
        adjacency[root]
            .iter()
            .map(|&(to, weight)| Reverse((weight, root, to))),
    );

    while let Some(Reverse((weight, from, to))) = frontier.pop() {
        if visited[to] {
            continue;
        }

        visited[to] = true;
        tree.push((from, to, weight));
        total_weight += weight;

        frontier.extend(
            adjacency[to]
                .iter()
                .filter(|(next, _)| !visited[*next])
                .map(|&(next, weight)| Reverse((weight, to, next))),
        );
    }

    (tree, total_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Undirected square 0-1-2-3-0 with a heavy diagonal 0-2.
    fn square() -> Vec<Vec<(GraphIndex, u64)>> {
        vec![
            vec![(1, 1), (3, 4), (2, 9)],
            vec![(0, 1), (2, 2)],
            vec![(1, 2), (3, 3), (0, 9)],
            vec![(2, 3), (0, 4)],
        ]
    }

    #[test]
    fn picks_lightest_edges() {
        let (tree, total_weight) = prim(&square(), 0);

        assert_eq!(tree, vec![(0, 1, 1), (1, 2, 2), (2, 3, 3)]);
        assert_eq!(total_weight, 6);
    }

    #[test]
    fn same_weight_from_any_root() {
        for root in 0..4 {
            let (tree, total_weight) = prim(&square(), root);

            assert_eq!(tree.len(), 3);
            assert_eq!(total_weight, 6);
        }
    }

    #[test]
    fn ties_break_on_index() {
        // Star around 0 with equal weights.
        let adjacency = vec![
            vec![(2, 1), (1, 1), (3, 1)],
            vec![(0, 1)],
            vec![(0, 1)],
            vec![(0, 1)],
        ];

        let (tree, _) = prim(&adjacency, 0);

        assert_eq!(tree, vec![(0, 1, 1), (0, 2, 1), (0, 3, 1)]);
    }

    #[test]
    fn only_reachable_component() {
        let adjacency = vec![vec![(1, 5)], vec![(0, 5)], vec![(3, 1)], vec![(2, 1)]];
        let (tree, total_weight) = prim(&adjacency, 0);

        assert_eq!(tree, vec![(0, 1, 5)]);
        assert_eq!(total_weight, 5);
    }

    #[test]
    fn isolated_root() {
        let adjacency = vec![vec![(0, 1)], vec![]];
        let (tree, total_weight) = prim(&adjacency, 0);

        assert!(tree.is_empty());
        assert_eq!(total_weight, 0);
    }

    #[test]
    fn spans() {
        let tree: SpanningTree<&str> = SpanningTree::new(vec![Edge::new("a", "b")], 1);

        assert!(tree.spans(2));
        assert!(!tree.spans(3));
        assert!(SpanningTree::<&str>::new(vec![], 0).spans(1));
        assert!(SpanningTree::<&str>::new(vec![], 0).spans(0));
    }
}
