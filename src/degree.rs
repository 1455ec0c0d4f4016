//! A module for performing the computation of degrees

use crate::{centrality::DegreeMode, graph::GraphIndex};

/// Counts the edges at each vertex. Undirected graphs ignore `mode`, their degree is the length
/// of the neighbour list.
pub fn compute_degree(indices: &[Vec<GraphIndex>], directed: bool, mode: DegreeMode) -> Vec<f64> {
    let outgoing = indices.iter().map(|targets| targets.len());

    if !directed || mode == DegreeMode::Out {
        return outgoing.map(|d| d as f64).collect();
    }

    let mut incoming = vec![0usize; indices.len()];
    for &target in indices.iter().flatten() {
        incoming[target] += 1;
    }

    match mode {
        DegreeMode::In => incoming.into_iter().map(|d| d as f64).collect(),
        _ => outgoing
            .zip(incoming)
            .map(|(out, inc)| (out + inc) as f64)
            .collect(),
    }
}
