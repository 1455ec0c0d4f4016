//! A module for reporting progress through the per-vertex passes of the centrality measures.
//!
//! Betweenness and closeness run one traversal per vertex, which can take a while on large
//! collaboration graphs. A [`Progress`] implementation receives an update after each vertex; any
//! `FnMut(usize, usize)` closure qualifies.
//!
//! ```
//! use costar::graph::Graph;
//!
//! let mut graph = Graph::undirected();
//! graph.add_edge("a", "b", 1);
//! graph.add_edge("b", "c", 1);
//!
//! let mut updates = 0;
//! let mut count = |_current: usize, _total: usize| updates += 1;
//! graph.centrality().progress(&mut count).closeness();
//!
//! assert_eq!(updates, 3);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::config::AnalysisConfig;

/// Receives `(current, total)` updates while a computation runs. Reporting has no influence on
/// the computed values.
pub trait Progress {
    /// Called once `current` of `total` vertices have been processed.
    fn update(&mut self, current: usize, total: usize);
}

impl<F> Progress for F
where
    F: FnMut(usize, usize),
{
    fn update(&mut self, current: usize, total: usize) {
        self(current, total)
    }
}

/// Emits a `tracing` debug event every `interval` vertices and on completion.
#[derive(Debug)]
pub struct Logged {
    task: &'static str,
    interval: usize,
    start: Instant,
}

impl Logged {
    /// Creates a reporter for the named task, an `interval` of zero is treated as one.
    pub fn new(task: &'static str, interval: usize) -> Self {
        Self {
            task,
            interval: interval.max(1),
            start: Instant::now(),
        }
    }

    /// Creates a reporter using the configured interval.
    pub fn from_config(task: &'static str, config: &AnalysisConfig) -> Self {
        Self::new(task, config.progress_interval)
    }

    fn is_due(&self, current: usize, total: usize) -> bool {
        current % self.interval == 0 || current == total
    }
}

impl Progress for Logged {
    fn update(&mut self, current: usize, total: usize) {
        if self.is_due(current, total) {
            debug!(
                task = self.task,
                current,
                total,
                elapsed = ?self.start.elapsed(),
                "progress"
            );
        }
    }
}
