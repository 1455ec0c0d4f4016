//! Index-level walks shared by the connectivity, spanning tree and centrality computations.
//!
//! Every walk takes the graph as a list of neighbour indices per vertex and never recurses, so
//! the call stack stays flat regardless of the graph's size.

use std::collections::VecDeque;

use crate::graph::GraphIndex;

/// Breadth-first walk from `source`.
///
/// Returns the visit order and the hop distance from `source` to every vertex, `None` for the
/// vertices that can't be reached.
pub fn breadth_first(
    indices: &[Vec<GraphIndex>],
    source: GraphIndex,
) -> (Vec<GraphIndex>, Vec<Option<usize>>) {
    let mut distance: Vec<Option<usize>> = vec![None; indices.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        let next = distance[current].map(|d| d + 1);

        for &w in &indices[current] {
            if distance[w].is_none() {
                distance[w] = next;
                queue.push_back(w);
            }
        }
    }

    (order, distance)
}

/// Depth-first walk from `source` over the vertices not yet marked in `visited`, marking the
/// ones it reaches. Returns them in visit order.
pub fn depth_first(
    indices: &[Vec<GraphIndex>],
    source: GraphIndex,
    visited: &mut [bool],
) -> Vec<GraphIndex> {
    let mut reached = Vec::new();
    let mut stack = vec![source];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }

        visited[current] = true;
        reached.push(current);

        // Pushed in reverse so neighbours are entered in adjacency order.
        stack.extend(indices[current].iter().rev().filter(|&&w| !visited[w]));
    }

    reached
}

/// Depth-first walk from `source` that appends each vertex to `finished` once all the vertices
/// reachable through it are done (post-order).
///
/// The walk is a state machine over `(vertex, next neighbour position)` frames.
pub fn post_order(
    indices: &[Vec<GraphIndex>],
    source: GraphIndex,
    visited: &mut [bool],
    finished: &mut Vec<GraphIndex>,
) {
    if visited[source] {
        return;
    }

    visited[source] = true;
    let mut stack: Vec<(GraphIndex, usize)> = vec![(source, 0)];

    while let Some(frame) = stack.last_mut() {
        let (vertex, position) = *frame;

        match indices[vertex].get(position) {
            Some(&next) => {
                frame.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    stack.push((next, 0));
                }
            }
            None => {
                finished.push(vertex);
                stack.pop();
            }
        }
    }
}

/// Reverses every edge of the index lists into a freshly allocated structure.
pub fn transpose(indices: &[Vec<GraphIndex>]) -> Vec<Vec<GraphIndex>> {
    let mut transposed = vec![Vec::new(); indices.len()];

    for (source, targets) in indices.iter().enumerate() {
        for &target in targets {
            transposed[target].push(source);
        }
    }

    transposed
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 -> 2 -> 0, 2 -> 3
    fn cycle_with_tail() -> Vec<Vec<GraphIndex>> {
        vec![vec![1], vec![2], vec![0, 3], vec![]]
    }

    #[test]
    fn breadth_first_distances() {
        // Path 0 - 1 - 2 - 3 plus an isolated 4.
        let indices = vec![vec![1], vec![0, 2], vec![1, 3], vec![2], vec![]];
        let (order, distance) = breadth_first(&indices, 0);

        assert_eq!(order, vec![0, 1, 2, 3]);
        assert_eq!(distance, vec![Some(0), Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn breadth_first_follows_direction() {
        let (order, distance) = breadth_first(&cycle_with_tail(), 3);

        assert_eq!(order, vec![3]);
        assert_eq!(distance, vec![None, None, None, Some(0)]);
    }

    #[test]
    fn depth_first_marks_reachable() {
        let indices = vec![vec![1, 2], vec![3], vec![], vec![], vec![0]];
        let mut visited = vec![false; indices.len()];

        assert_eq!(depth_first(&indices, 0, &mut visited), vec![0, 1, 3, 2]);
        assert_eq!(visited, vec![true, true, true, true, false]);

        // Already visited vertices aren't walked again.
        assert_eq!(depth_first(&indices, 4, &mut visited), vec![4]);
    }

    #[test]
    fn post_order_finishes_descendants_first() {
        let mut visited = vec![false; 4];
        let mut finished = Vec::new();

        post_order(&cycle_with_tail(), 0, &mut visited, &mut finished);

        assert_eq!(finished, vec![3, 2, 1, 0]);
        assert!(visited.iter().all(|v| *v));
    }

    #[test]
    fn post_order_skips_visited_source() {
        let mut visited = vec![true, false, false, false];
        let mut finished = Vec::new();

        post_order(&cycle_with_tail(), 0, &mut visited, &mut finished);

        assert!(finished.is_empty());
    }

    #[test]
    fn post_order_handles_deep_paths() {
        let n = 100_000;
        let indices: Vec<Vec<GraphIndex>> = (0..n)
            .map(|i| if i + 1 < n { vec![i + 1] } else { vec![] })
            .collect();
        let mut visited = vec![false; n];
        let mut finished = Vec::with_capacity(n);

        post_order(&indices, 0, &mut visited, &mut finished);

        assert_eq!(finished.len(), n);
        assert_eq!(finished.first(), Some(&(n - 1)));
        assert_eq!(finished.last(), Some(&0));
    }

    #[test]
    fn transpose_reverses_edges() {
        assert_eq!(
            transpose(&cycle_with_tail()),
            vec![vec![2], vec![0], vec![1], vec![2]]
        );
    }
}
