//! Costar is a small toolkit for analysing collaboration networks (who worked with whom), though
//! it applies to any weighted, directed or undirected graph.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure, built once from one or
//! more weighted edges and then analysed read-only: connected and strongly connected components,
//! minimum spanning trees, and degree, betweenness and closeness centrality.
//!
//! ```rust
//! use costar::centrality::{top_k, DegreeMode};
//! use costar::collab::Credit;
//! use costar::graph::Graph;
//!
//! // Construct the co-star graph from a couple of credits.
//! let credits = vec![
//!     Credit::new(vec!["ANN", "BOB", "CAT"], vec!["DEE"]),
//!     Credit::new(vec!["CAT", "DAN"], vec!["DEE"]),
//! ];
//! let graph = Graph::co_star(&credits);
//! assert_eq!(graph.info(), (4, 4));
//!
//! // Compute some metrics on the graph.
//! let components = graph.connected_components();
//! assert_eq!(components.len(), 1);
//!
//! let tree = graph.minimum_spanning_tree(&"ANN").unwrap();
//! assert_eq!(tree.total_weight(), 3);
//!
//! let betweenness = graph.betweenness_centrality(true);
//! let ranked = top_k(&betweenness, 1);
//! assert_eq!(ranked[0].0, "CAT");
//!
//! let degree = graph.degree_centrality(DegreeMode::Total, false);
//! assert_eq!(degree[&"CAT"].raw, 3.0);
//! ```

#[cfg(test)]
macro_rules! graph {
    ($kind:ident: $($path:expr),*) => {{
        let mut graph = $crate::graph::Graph::$kind();

        $(
            let mut iter = $path.into_iter().peekable();
            while let (Some(a), Some(b)) = (iter.next(), iter.peek()) {
                graph.add_edge(a, *b, 1);
            }
        )*

        graph
    }}
}

mod betweenness;
pub mod centrality;
mod closeness;
pub mod collab;
mod components;
pub mod config;
mod degree;
pub mod edge;
pub mod error;
pub mod graph;
pub mod progress;
pub mod spanning;
mod traversal;
