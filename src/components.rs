//! A module for computing connected and strongly connected components over index lists.

use crate::{graph::GraphIndex, traversal};

/// Groups the vertices into components, seeding a new component from each vertex not yet
/// reached, in index order.
pub fn connected(indices: &[Vec<GraphIndex>]) -> Vec<Vec<GraphIndex>> {
    let mut visited = vec![false; indices.len()];
    let mut components = Vec::new();

    for vertex in 0..indices.len() {
        if !visited[vertex] {
            components.push(traversal::depth_first(indices, vertex, &mut visited));
        }
    }

    components
}

/// Kosaraju's two-pass algorithm.
///
/// The first pass records the post-order finishing sequence over the original edges, the second
/// pass walks the transposed edges in reverse finishing order, every walk collecting exactly one
/// strongly connected component.
pub fn strongly_connected(indices: &[Vec<GraphIndex>]) -> Vec<Vec<GraphIndex>> {
    let num_nodes = indices.len();

    let mut visited = vec![false; num_nodes];
    let mut finished = Vec::with_capacity(num_nodes);

    for vertex in 0..num_nodes {
        traversal::post_order(indices, vertex, &mut visited, &mut finished);
    }

    let transposed = traversal::transpose(indices);
    visited.fill(false);

    let mut components = Vec::new();
    while let Some(vertex) = finished.pop() {
        if !visited[vertex] {
            components.push(traversal::depth_first(&transposed, vertex, &mut visited));
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut components: Vec<Vec<GraphIndex>>) -> Vec<Vec<GraphIndex>> {
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort();
        components
    }

    #[test]
    fn connected_partitions_in_seed_order() {
        // {0, 2}, {1}, {3, 4}
        let indices = vec![vec![2], vec![], vec![0], vec![4], vec![3]];

        assert_eq!(
            connected(&indices),
            vec![vec![0, 2], vec![1], vec![3, 4]]
        );
    }

    #[test]
    fn connected_empty() {
        assert!(connected(&[]).is_empty());
    }

    #[test]
    fn strongly_connected_two_cycles() {
        // 0 <-> 1 -> 2 <-> 3, 3 -> 4
        let indices = vec![vec![1], vec![0, 2], vec![3], vec![2, 4], vec![]];

        assert_eq!(
            sorted(strongly_connected(&indices)),
            vec![vec![0, 1], vec![2, 3], vec![4]]
        );
    }

    #[test]
    fn strongly_connected_dag_is_all_singletons() {
        let indices = vec![vec![1, 2], vec![2], vec![]];
        let components = strongly_connected(&indices);

        assert_eq!(components.len(), 3);
        // Sources finish last, so they come out first.
        assert_eq!(components[0], vec![0]);
    }

    #[test]
    fn strongly_connected_self_loop() {
        let indices = vec![vec![0], vec![]];

        assert_eq!(sorted(strongly_connected(&indices)), vec![vec![0], vec![1]]);
    }
}
