//! A module for performing the computation of betweenness

use std::collections::VecDeque;

use crate::{graph::GraphIndex, progress::Progress};

/// this is an implementation of Ulrik Brandes's
/// A Faster Algorithm for Betweenness Centrality
/// http://snap.stanford.edu/class/cs224w-readings/brandes01centrality.pdf
/// page 10, "Algorithm 1: Betweenness centrality in unweighted graphs"
fn betweenness_for_node(index: usize, indices: &[Vec<GraphIndex>], betweenness_count: &mut [f64]) {
    let num_nodes = indices.len();

    let mut sigma: Vec<f64> = vec![0.0; num_nodes];
    let mut distance: Vec<Option<usize>> = vec![None; num_nodes];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];
    let mut delta: Vec<f64> = vec![0.0; num_nodes];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut stack: Vec<usize> = Vec::with_capacity(num_nodes);

    sigma[index] = 1.0;
    distance[index] = Some(0);
    queue.push_back(index);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        let next = distance[v].map(|d| d + 1);

        for &w in &indices[v] {
            if distance[w].is_none() {
                distance[w] = next;
                queue.push_back(w);
            }
            if distance[w] == next {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    // Farthest vertices first.
    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            if sigma[w] > 0.0 {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
        }
        if w != index {
            betweenness_count[w] += delta[w];
        }
    }
}

/// Runs the accumulation from every vertex as a source and returns the raw scores, halved since
/// each pair's shortest paths are accumulated from both of its ends.
///
/// `progress` is updated after each source.
pub fn compute_betweenness(indices: &[Vec<GraphIndex>], progress: &mut dyn Progress) -> Vec<f64> {
    let num_nodes = indices.len();

    let mut betweenness_count: Vec<f64> = vec![0.0; num_nodes];

    for index in 0..num_nodes {
        betweenness_for_node(index, indices, &mut betweenness_count);
        progress.update(index + 1, num_nodes);
    }

    for count in &mut betweenness_count {
        *count /= 2.0;
    }

    betweenness_count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn betweenness(indices: &[Vec<GraphIndex>]) -> Vec<f64> {
        compute_betweenness(indices, &mut |_: usize, _: usize| {})
    }

    #[test]
    fn path() {
        // 0 - 1 - 2 - 3
        let indices = vec![vec![1], vec![0, 2], vec![1, 3], vec![2]];

        assert_eq!(betweenness(&indices), vec![0.0, 2.0, 2.0, 0.0]);
    }

    #[test]
    fn star() {
        // Center 0 with three leaves, every leaf pair routes through the center.
        let indices = vec![vec![1, 2, 3], vec![0], vec![0], vec![0]];

        assert_eq!(betweenness(&indices), vec![3.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn split_shortest_paths() {
        // Square 0-1-2-3-0, two shortest paths between opposite corners.
        let indices = vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]];

        assert_eq!(betweenness(&indices), vec![0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn directed_path_is_halved() {
        // 0 -> 1 -> 2, the single 0 to 2 path is only seen from 0.
        let indices = vec![vec![1], vec![2], vec![]];

        assert_eq!(betweenness(&indices), vec![0.0, 0.5, 0.0]);
    }

    #[test]
    fn reports_each_source() {
        let indices = vec![vec![1], vec![0], vec![]];
        let mut updates = Vec::new();

        compute_betweenness(&indices, &mut |current: usize, total: usize| {
            updates.push((current, total))
        });

        assert_eq!(updates, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn empty() {
        assert!(betweenness(&[]).is_empty());
    }
}
