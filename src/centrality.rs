//! A module for the centrality measures.
//!
//! All three measures are reached through a [`CentralityQuery`], created with
//! [`Graph::centrality`]:
//!
//! ```
//! use costar::{centrality::DegreeMode, graph::Graph};
//!
//! let mut graph = Graph::undirected();
//! graph.add_edge("a", "b", 1);
//! graph.add_edge("b", "c", 1);
//! graph.add_edge("x", "y", 1);
//!
//! let largest = graph.largest_component();
//! let closeness = graph
//!     .centrality()
//!     .normalized(true)
//!     .restrict_to(&largest)
//!     .closeness();
//!
//! assert_eq!(closeness.len(), 3);
//! assert_eq!(closeness[&"b"].raw, 1.0);
//!
//! let degree = graph.degree_centrality(DegreeMode::Total, false);
//! assert_eq!(degree[&"b"].raw, 2.0);
//! ```

use std::{
    collections::HashMap,
    fmt::{self, Debug},
    hash::Hash,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    betweenness, closeness,
    config::AnalysisConfig,
    degree,
    error::{Error, Result},
    graph::{Graph, GraphIndex},
    progress::Progress,
};

/// The score of a single vertex. Without normalization both values are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Centrality {
    pub raw: f64,
    pub normalized: f64,
}

/// Scores for every vertex a computation covered.
pub type CentralityMap<T> = HashMap<T, Centrality>;

/// Which edges make up the degree of a vertex in a directed graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeMode {
    /// Edges ending at the vertex.
    In,
    /// Edges starting at the vertex.
    Out,
    /// Both of the above.
    #[default]
    Total,
}

impl fmt::Display for DegreeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Out => write!(f, "out"),
            Self::Total => write!(f, "total"),
        }
    }
}

impl FromStr for DegreeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "total" => Ok(Self::Total),
            _ => Err(Error::UnknownDegreeMode(s.to_owned())),
        }
    }
}

/// Settings for a single centrality computation over a graph.
///
/// Restricting the query to a subset evaluates the measure on the subgraph the subset induces:
/// traversals never leave it and normalizations use the subset's size as the vertex count.
pub struct CentralityQuery<'a, T> {
    graph: &'a Graph<T>,
    normalize: bool,
    subset: Option<Vec<bool>>,
    progress: Option<&'a mut dyn Progress>,
}

impl<'a, T> CentralityQuery<'a, T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn new(graph: &'a Graph<T>) -> Self {
        Self {
            graph,
            normalize: false,
            subset: None,
            progress: None,
        }
    }

    /// Sets whether the normalized values are computed, off by default.
    pub fn normalized(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Only scores the given vertices, on the subgraph they induce. Vertices that aren't in the
    /// graph are ignored.
    pub fn restrict_to<'v, I>(mut self, vertices: I) -> Self
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        let mut subset = vec![false; self.graph.vertex_count()];
        for index in vertices
            .into_iter()
            .filter_map(|vertex| self.graph.index_of(vertex))
        {
            subset[index] = true;
        }

        self.subset = Some(subset);
        self
    }

    /// Reports progress of the per-vertex passes to `progress`.
    pub fn progress(mut self, progress: &'a mut dyn Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Applies the shared analysis settings.
    pub fn configured(self, config: &AnalysisConfig) -> Self {
        self.normalized(config.normalize)
    }

    /// Degree centrality, normalized by `|V| - 1`. `mode` only matters for directed graphs.
    #[instrument(skip(self))]
    pub fn degree(self, mode: DegreeMode) -> CentralityMap<T> {
        let (members, indices) = self.graph.scope(self.subset.as_deref());
        let raw = degree::compute_degree(&indices, self.graph.is_directed(), mode);

        let n = members.len();
        let scores = self.collect(&members, raw, |raw| {
            if n > 1 {
                raw / (n - 1) as f64
            } else {
                raw
            }
        });

        debug!(vertices = n, "degree centrality computed");

        scores
    }

    /// Betweenness centrality (Brandes) over unweighted hop paths, normalized by
    /// `2 / ((|V| - 1)(|V| - 2))` for undirected graphs and `1 / ((|V| - 1)(|V| - 2))` for directed
    /// ones.
    #[instrument(skip_all)]
    pub fn betweenness(mut self) -> CentralityMap<T> {
        let (members, indices) = self.graph.scope(self.subset.as_deref());
        let raw = match self.progress.take() {
            Some(progress) => betweenness::compute_betweenness(&indices, progress),
            None => betweenness::compute_betweenness(&indices, &mut |_: usize, _: usize| {}),
        };

        let n = members.len();
        let pairs = if self.graph.is_directed() { 1.0 } else { 2.0 };
        let scores = self.collect(&members, raw, |raw| {
            if n > 2 {
                raw * (pairs / ((n - 1) * (n - 2)) as f64)
            } else {
                raw
            }
        });

        debug!(vertices = n, "betweenness centrality computed");

        scores
    }

    /// Closeness centrality, `(reachable - 1) / total distance` over the vertices reachable from
    /// each vertex, normalized by multiplying with `|V| - 1`.
    #[instrument(skip_all)]
    pub fn closeness(mut self) -> CentralityMap<T> {
        let (members, indices) = self.graph.scope(self.subset.as_deref());
        let raw = match self.progress.take() {
            Some(progress) => closeness::compute_closeness(&indices, progress),
            None => closeness::compute_closeness(&indices, &mut |_: usize, _: usize| {}),
        };

        let n = members.len();
        let scores = self.collect(&members, raw, |raw| {
            if n > 1 {
                raw * (n - 1) as f64
            } else {
                raw
            }
        });

        debug!(vertices = n, "closeness centrality computed");

        scores
    }

    fn collect(
        &self,
        members: &[GraphIndex],
        raw: Vec<f64>,
        normalize: impl Fn(f64) -> f64,
    ) -> CentralityMap<T> {
        members
            .iter()
            .zip(raw)
            .map(|(&index, raw)| {
                let normalized = if self.normalize { normalize(raw) } else { raw };
                (self.graph.vertex(index).clone(), Centrality { raw, normalized })
            })
            .collect()
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Starts a centrality computation over this graph.
    pub fn centrality(&self) -> CentralityQuery<'_, T> {
        CentralityQuery::new(self)
    }

    /// Returns a mapping of vertices to their degree centrality (number of connections).
    pub fn degree_centrality(&self, mode: DegreeMode, normalize: bool) -> CentralityMap<T> {
        self.centrality().normalized(normalize).degree(mode)
    }

    /// Returns a mapping of vertices to their betweenness centrality.
    pub fn betweenness_centrality(&self, normalize: bool) -> CentralityMap<T> {
        self.centrality().normalized(normalize).betweenness()
    }

    /// Returns a mapping of vertices to their closeness centrality.
    pub fn closeness_centrality(&self, normalize: bool) -> CentralityMap<T> {
        self.centrality().normalized(normalize).closeness()
    }
}

/// Ranks the vertices by raw score, highest first, keeping at most `k`. Equal scores are ordered
/// by vertex.
///
/// # Examples
///
/// ```
/// use costar::{centrality::{top_k, DegreeMode}, graph::Graph};
///
/// let mut graph = Graph::undirected();
/// graph.add_edge("hub", "b", 1);
/// graph.add_edge("hub", "a", 1);
///
/// let ranked = top_k(&graph.degree_centrality(DegreeMode::Total, false), 2);
/// assert_eq!(ranked[0].0, "hub");
/// assert_eq!(ranked[1].0, "a");
/// ```
pub fn top_k<T>(centralities: &CentralityMap<T>, k: usize) -> Vec<(T, Centrality)>
where
    T: Clone + Ord,
{
    let mut ranked: Vec<(T, Centrality)> = centralities
        .iter()
        .map(|(vertex, centrality)| (vertex.clone(), *centrality))
        .collect();

    ranked.sort_by(|(a, ca), (b, cb)| cb.raw.total_cmp(&ca.raw).then_with(|| a.cmp(b)));
    ranked.truncate(k);

    ranked
}
