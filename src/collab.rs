//! A module for building collaboration graphs out of credit records.
//!
//! Reading and cleaning up the dataset the records come from is left to the caller, a credit is
//! expected to hold normalized names already.

use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::graph::Graph;

/// The people credited on a single title.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit<T> {
    pub cast: Vec<T>,
    #[serde(default)]
    pub directors: Vec<T>,
}

impl<T> Credit<T> {
    pub fn new(cast: Vec<T>, directors: Vec<T>) -> Self {
        Self { cast, directors }
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Builds the undirected co-star graph: each pair of cast members sharing a credit is
    /// connected, the weight counting the credits they share.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::{collab::Credit, graph::Graph};
    ///
    /// let credits = vec![
    ///     Credit::new(vec!["a", "b", "c"], vec!["x"]),
    ///     Credit::new(vec!["a", "b"], vec![]),
    /// ];
    /// let graph = Graph::co_star(&credits);
    ///
    /// assert_eq!(graph.info(), (3, 3));
    /// assert_eq!(graph.weight(&"a", &"b"), Some(2));
    /// ```
    #[instrument(skip_all, fields(credits = credits.len()))]
    pub fn co_star(credits: &[Credit<T>]) -> Self {
        let mut graph = Self::undirected();

        for credit in credits {
            for (a, b) in credit.cast.iter().tuple_combinations() {
                graph.add_edge(a.clone(), b.clone(), 1);
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "co-star graph built"
        );

        graph
    }

    /// Builds the directed actor to director graph: every cast member of a credit points at each
    /// of its directors, the weight counting the credits they share.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::{collab::Credit, graph::Graph};
    ///
    /// let credits = vec![Credit::new(vec!["a", "b"], vec!["x", "y"])];
    /// let graph = Graph::actor_director(&credits);
    ///
    /// assert!(graph.is_directed());
    /// assert_eq!(graph.info(), (4, 4));
    /// ```
    #[instrument(skip_all, fields(credits = credits.len()))]
    pub fn actor_director(credits: &[Credit<T>]) -> Self {
        let mut graph = Self::directed();

        for credit in credits {
            for director in &credit.directors {
                for actor in &credit.cast {
                    graph.add_edge(actor.clone(), director.clone(), 1);
                }
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "actor-director graph built"
        );

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credits() -> Vec<Credit<&'static str>> {
        vec![
            Credit::new(vec!["ann", "bob", "cat"], vec!["dee"]),
            Credit::new(vec!["ann", "bob"], vec!["dee", "eve"]),
            Credit::new(vec!["solo"], vec!["eve"]),
        ]
    }

    #[test]
    fn co_star() {
        let graph = Graph::co_star(&credits());

        assert!(!graph.is_directed());
        // A lone cast member has nobody to pair with.
        assert!(!graph.contains(&"solo"));
        assert_eq!(graph.info(), (3, 3));
        assert_eq!(graph.weight(&"ann", &"bob"), Some(2));
        assert_eq!(graph.weight(&"bob", &"cat"), Some(1));
        assert_eq!(graph.weight(&"cat", &"ann"), Some(1));
    }

    #[test]
    fn actor_director() {
        let graph = Graph::actor_director(&credits());

        assert!(graph.is_directed());
        assert_eq!(graph.weight(&"ann", &"dee"), Some(2));
        assert_eq!(graph.weight(&"ann", &"eve"), Some(1));
        assert_eq!(graph.weight(&"solo", &"eve"), Some(1));
        assert_eq!(graph.weight(&"dee", &"ann"), None);
        // ann, bob, cat to dee; ann, bob, solo to eve.
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn credits_without_directors() {
        let credits = vec![Credit::new(vec!["a", "b"], vec![])];

        assert_eq!(Graph::actor_director(&credits).info(), (0, 0));
        assert_eq!(Graph::co_star(&credits).info(), (2, 1));
    }
}
