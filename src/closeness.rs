//! A module for performing the computation of closeness

use crate::{graph::GraphIndex, progress::Progress, traversal};

/// `(reachable - 1) / total distance` over the vertices reachable from `index`, counting
/// `index` itself. Zero when nothing else is reachable.
fn closeness_for_node(index: usize, indices: &[Vec<GraphIndex>]) -> f64 {
    let (reached, distance) = traversal::breadth_first(indices, index);
    let total_path_length: usize = distance.iter().flatten().sum();

    if reached.len() > 1 && total_path_length > 0 {
        (reached.len() - 1) as f64 / total_path_length as f64
    } else {
        0.0
    }
}

/// Computes the raw closeness of every vertex, `progress` is updated after each one.
pub fn compute_closeness(indices: &[Vec<GraphIndex>], progress: &mut dyn Progress) -> Vec<f64> {
    let num_nodes = indices.len();

    (0..num_nodes)
        .map(|index| {
            let closeness = closeness_for_node(index, indices);
            progress.update(index + 1, num_nodes);
            closeness
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closeness(indices: &[Vec<GraphIndex>]) -> Vec<f64> {
        compute_closeness(indices, &mut |_: usize, _: usize| {})
    }

    #[test]
    fn path() {
        // 0 - 1 - 2
        let indices = vec![vec![1], vec![0, 2], vec![1]];

        assert_eq!(closeness(&indices), vec![2.0 / 3.0, 1.0, 2.0 / 3.0]);
    }

    #[test]
    fn only_reachable_vertices_count() {
        // 0 - 1 and an isolated 2.
        let indices = vec![vec![1], vec![0], vec![]];

        assert_eq!(closeness(&indices), vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn directed_sink() {
        // 0 -> 1 -> 2, nothing is reachable from the sink.
        let indices = vec![vec![1], vec![2], vec![]];

        assert_eq!(closeness(&indices), vec![2.0 / 3.0, 1.0, 0.0]);
    }

    #[test]
    fn self_loop_alone() {
        assert_eq!(closeness(&[vec![0]]), vec![0.0]);
    }
}
