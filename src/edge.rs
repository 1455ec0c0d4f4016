//! A module for working with weighted edges.

use serde::{Deserialize, Serialize};

/// A weighted pair of vertices. Whether the edge is directed depends on the graph it's inserted
/// into; in undirected graphs the `source`-`target` order carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    source: T,
    target: T,
    weight: u64,
}

impl<T> Edge<T> {
    /// Creates a new edge of weight 1 from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.weight(), 1);
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self::weighted(source, target, 1)
    }

    /// Creates a new edge with the given weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::weighted("a", "b", 3);
    /// assert_eq!(edge.weight(), 3);
    /// ```
    pub fn weighted(source: T, target: T, weight: u64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first vertex forming the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.source(), &"a");
    /// ```
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the second vertex forming the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.target(), &"b");
    /// ```
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns the accumulated weight of the edge.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Returns whether the edge contains the given vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    ///
    /// assert_eq!(edge.contains(&"a"), true);
    /// assert_eq!(edge.contains(&"b"), true);
    /// assert_eq!(edge.contains(&"c"), false);
    /// ```
    pub fn contains(&self, vertex: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == vertex || self.target() == vertex
    }

    /// Swaps the source and the target, keeping the weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::weighted("a", "b", 2).reversed();
    /// assert_eq!(edge, Edge::weighted("b", "a", 2));
    /// ```
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }

    /// Splits the edge into its `(source, target, weight)` parts.
    pub fn into_parts(self) -> (T, T, u64) {
        (self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let (source, target) = ("a", "b");

        assert_eq!(
            Edge::new(source, target),
            Edge {
                source,
                target,
                weight: 1
            }
        )
    }

    #[test]
    fn weighted() {
        let edge = Edge::weighted("a", "b", 7);

        assert_eq!(edge.weight(), 7);
        assert_ne!(edge, Edge::new("a", "b"));
    }

    #[test]
    fn source() {
        let (a, b) = ("a", "b");
        let edge = Edge::new(a, b);

        assert_eq!(edge.source(), &a);
    }

    #[test]
    fn target() {
        let (a, b) = ("a", "b");
        let edge = Edge::new(a, b);

        assert_eq!(edge.target(), &b);
    }

    #[test]
    fn contains() {
        let (a, b) = ("a", "b");
        let edge = Edge::new(a, b);

        assert!(edge.contains(&a));
        assert!(edge.contains(&b));
        assert!(!edge.contains(&"c"));
    }

    #[test]
    fn direction_matters_for_equality() {
        assert_ne!(Edge::new("a", "b"), Edge::new("b", "a"));
        assert_eq!(Edge::new("a", "b").reversed(), Edge::new("b", "a"));
    }

    #[test]
    fn into_parts() {
        assert_eq!(Edge::weighted("a", "b", 4).into_parts(), ("a", "b", 4));
    }
}
