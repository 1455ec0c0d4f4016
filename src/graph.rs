//! A module for working with graphs.

use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
    hash::Hash,
    ops::Sub,
};

use itertools::Itertools;
use nalgebra::DMatrix;
use tracing::{debug, instrument};

use crate::{
    components,
    edge::Edge,
    error::{Error, Result},
    spanning::{self, SpanningTree},
    traversal,
};

/// Position of a vertex in insertion order, used by the algorithms internally.
pub(crate) type GraphIndex = usize;

/// A weighted graph whose directedness is fixed at construction.
///
/// Repeated edges between the same vertices (the same ordered pair for directed graphs, the same
/// unordered pair otherwise) collapse into a single edge whose weight accumulates.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    directed: bool,
    /// The vertices in insertion order, a vertex's position is its index.
    vertices: Vec<T>,
    /// A mapping of vertices to their indices.
    index: HashMap<T, GraphIndex>,
    /// `(neighbour, weight)` entries per vertex. Undirected edges are recorded on both ends with
    /// the same weight.
    adjacency: Vec<Vec<(GraphIndex, u64)>>,
    /// Position of the `(source, target)` entry within `adjacency[source]`.
    slots: HashMap<(GraphIndex, GraphIndex), usize>,
    /// Distinct edges, mirrored entries are counted once.
    edge_count: usize,
}

impl<T> Default for Graph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::undirected()
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::graph::Graph;
    ///
    /// let graph: Graph<&str> = Graph::new(true);
    /// assert!(graph.is_directed());
    /// ```
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            slots: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds a vertex, returns whether it wasn't already present.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        let count = self.vertices.len();
        self.intern(vertex);

        self.vertices.len() != count
    }

    /// Adds an edge of the given weight, adding its endpoints if necessary.
    ///
    /// If the edge already exists its weight (and the weight of its mirror, in undirected graphs)
    /// is incremented instead. Returns whether a new edge was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    ///
    /// assert!(graph.add_edge("a", "b", 1));
    /// assert!(!graph.add_edge("b", "a", 2));
    ///
    /// assert_eq!(graph.weight(&"a", &"b"), Some(3));
    /// assert_eq!(graph.info(), (2, 1));
    /// ```
    pub fn add_edge(&mut self, source: T, target: T, weight: u64) -> bool {
        let s = self.intern(source);
        let t = self.intern(target);
        let mirrored = !self.directed && s != t;

        if let Some(&slot) = self.slots.get(&(s, t)) {
            self.adjacency[s][slot].1 += weight;

            if mirrored {
                if let Some(&slot) = self.slots.get(&(t, s)) {
                    self.adjacency[t][slot].1 += weight;
                }
            }

            return false;
        }

        self.slots.insert((s, t), self.adjacency[s].len());
        self.adjacency[s].push((t, weight));

        if mirrored {
            self.slots.insert((t, s), self.adjacency[t].len());
            self.adjacency[t].push((s, weight));
        }

        self.edge_count += 1;

        true
    }

    /// Inserts an edge into the graph, see [`Graph::add_edge`].
    pub fn insert(&mut self, edge: Edge<T>) -> bool {
        let (source, target, weight) = edge.into_parts();

        self.add_edge(source, target, weight)
    }

    /// Inserts a subset of `(hub, leaf)` edges of weight 1 into the graph.
    pub fn insert_subset(&mut self, hub: T, leaves: &[T]) {
        for leaf in leaves {
            self.add_edge(hub.clone(), leaf.clone(), 1);
        }
    }

    /// Returns the vertex and edge counts.
    pub fn info(&self) -> (usize, usize) {
        (self.vertex_count(), self.edge_count())
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Checks if the graph contains a vertex.
    pub fn contains(&self, vertex: &T) -> bool {
        self.index.contains_key(vertex)
    }

    /// The vertices in insertion order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Returns the accumulated weight of the edge between two vertices, if there is one.
    pub fn weight(&self, source: &T, target: &T) -> Option<u64> {
        let s = self.index_of(source)?;
        let t = self.index_of(target)?;
        let slot = self.slots.get(&(s, t))?;

        Some(self.adjacency[s][*slot].1)
    }

    /// Returns the `(neighbour, weight)` entries of a vertex, in insertion order. For directed
    /// graphs only outgoing edges are listed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if the vertex isn't in the graph.
    pub fn neighbours(&self, vertex: &T) -> Result<Vec<(&T, u64)>> {
        let index = self.try_index(vertex)?;

        Ok(self.adjacency[index]
            .iter()
            .map(|&(neighbour, weight)| (&self.vertices[neighbour], weight))
            .collect())
    }

    /// Returns every distinct edge once. Undirected edges are oriented from the vertex inserted
    /// first.
    pub fn edges(&self) -> Vec<Edge<T>> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(s, entries)| entries.iter().map(move |&(t, w)| (s, t, w)))
            .filter(|(s, t, _)| self.directed || s <= t)
            .map(|(s, t, w)| Edge::weighted(self.vertices[s].clone(), self.vertices[t].clone(), w))
            .collect()
    }

    /// Builds a new graph with every directed edge reversed, weights and vertex order preserved.
    /// Undirected graphs are returned as a copy.
    pub fn transpose(&self) -> Self {
        if !self.directed {
            return self.clone();
        }

        let mut transposed = Self::directed();
        for vertex in &self.vertices {
            transposed.add_vertex(vertex.clone());
        }

        for edge in self.edges() {
            transposed.insert(edge.reversed());
        }

        transposed
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    ///
    /// graph.add_edge("a", "b", 1);
    /// assert_eq!(graph.density(), 1.0);
    ///
    /// graph.add_edge("a", "c", 1);
    /// assert_eq!(graph.density(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.vertex_count() as f64;
        let ec = self.edge_count() as f64;

        // Total number of possible edges given a vertex count.
        let pec = if self.directed {
            vc * (vc - 1.0)
        } else {
            vc * (vc - 1.0) / 2.0
        };

        ec / pec
    }

    /// Constructs the weighted adjacency matrix, rows and columns follow insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use costar::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b", 2);
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     dmatrix![0.0, 2.0;
    ///              2.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        let n = self.vertex_count();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        // Undirected edges have an entry on both ends, so the matrix comes out symmetric.
        for (i, entries) in self.adjacency.iter().enumerate() {
            for &(j, weight) in entries {
                matrix[(i, j)] = weight as f64;
            }
        }

        matrix
    }

    /// Constructs the degree matrix, the diagonal holds the weighted (out-)degree of each vertex.
    pub fn degree_matrix(&self) -> DMatrix<f64> {
        let adjacency_matrix = self.adjacency_matrix();

        let n = adjacency_matrix.nrows();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for (i, row) in adjacency_matrix.row_iter().enumerate() {
            matrix[(i, i)] = row.sum()
        }

        matrix
    }

    /// Constructs the laplacian matrix for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use costar::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b", 1);
    /// assert_eq!(
    ///     graph.laplacian_matrix(),
    ///     dmatrix![1.0, -1.0;
    ///              -1.0, 1.0]
    /// );
    /// ```
    pub fn laplacian_matrix(&self) -> DMatrix<f64> {
        let degree_matrix = self.degree_matrix();
        let adjacency_matrix = self.adjacency_matrix();

        degree_matrix.sub(&adjacency_matrix)
    }

    /// Returns the vertices in breadth-first order from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` isn't in the graph.
    pub fn bfs(&self, start: &T) -> Result<Vec<T>> {
        let source = self.try_index(start)?;
        let (order, _) = traversal::breadth_first(&self.neighbour_indices(), source);

        Ok(self.resolve(order))
    }

    /// Returns the vertices in depth-first (preorder) order from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` isn't in the graph.
    pub fn dfs(&self, start: &T) -> Result<Vec<T>> {
        let source = self.try_index(start)?;
        let mut visited = vec![false; self.vertex_count()];

        Ok(self.resolve(traversal::depth_first(
            &self.neighbour_indices(),
            source,
            &mut visited,
        )))
    }

    /// Returns the hop distance from `start` to every vertex reachable from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` isn't in the graph.
    pub fn distances(&self, start: &T) -> Result<HashMap<T, usize>> {
        let source = self.try_index(start)?;
        let (_, distance) = traversal::breadth_first(&self.neighbour_indices(), source);

        Ok(distance
            .into_iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (self.vertices[i].clone(), d)))
            .collect())
    }

    /// Partitions the vertices into connected components, in the order their first vertex was
    /// inserted. Edge direction is ignored, directed graphs yield their weakly connected
    /// components.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b", 1);
    /// graph.add_edge("c", "d", 1);
    ///
    /// assert_eq!(
    ///     graph.connected_components(),
    ///     vec![vec!["a", "b"], vec!["c", "d"]]
    /// );
    /// ```
    #[instrument(skip(self))]
    pub fn connected_components(&self) -> Vec<Vec<T>> {
        let indices = if self.directed {
            self.symmetric_indices()
        } else {
            self.neighbour_indices()
        };

        let components: Vec<Vec<T>> = components::connected(&indices)
            .into_iter()
            .map(|component| self.resolve(component))
            .collect();

        debug!(components = components.len(), "connected components computed");

        components
    }

    /// Partitions the vertices into strongly connected components (Kosaraju). On undirected
    /// graphs these are the connected components.
    #[instrument(skip(self))]
    pub fn strongly_connected_components(&self) -> Vec<Vec<T>> {
        let components: Vec<Vec<T>> = components::strongly_connected(&self.neighbour_indices())
            .into_iter()
            .map(|component| self.resolve(component))
            .collect();

        debug!(
            components = components.len(),
            "strongly connected components computed"
        );

        components
    }

    /// Returns the first of the largest connected components, empty for an empty graph.
    pub fn largest_component(&self) -> Vec<T> {
        self.connected_components()
            .into_iter()
            .fold(Vec::new(), |largest, component| {
                if component.len() > largest.len() {
                    component
                } else {
                    largest
                }
            })
    }

    /// Builds a minimum spanning tree from `root` with Prim's algorithm.
    ///
    /// The tree only covers the vertices reachable from `root`, use [`SpanningTree::spans`] to
    /// check whether it reaches the whole graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `root` isn't in the graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("a", "b", 1);
    /// graph.add_edge("b", "c", 1);
    /// graph.add_edge("a", "c", 5);
    ///
    /// let tree = graph.minimum_spanning_tree(&"a").unwrap();
    /// assert_eq!(tree.total_weight(), 2);
    /// assert!(tree.spans(graph.vertex_count()));
    /// ```
    #[instrument(skip(self))]
    pub fn minimum_spanning_tree(&self, root: &T) -> Result<SpanningTree<T>> {
        let root = self.try_index(root)?;
        let (tree, total_weight) = spanning::prim(&self.adjacency, root);

        let edges: Vec<Edge<T>> = tree
            .into_iter()
            .map(|(from, to, weight)| {
                Edge::weighted(self.vertices[from].clone(), self.vertices[to].clone(), weight)
            })
            .collect();

        debug!(edges = edges.len(), total_weight, "minimum spanning tree built");

        Ok(SpanningTree::new(edges, total_weight))
    }

    /// Builds a minimum spanning tree rooted at the first inserted vertex. An empty graph yields
    /// an empty tree.
    pub fn minimum_spanning_tree_from_first(&self) -> SpanningTree<T> {
        match self.vertices.first() {
            Some(root) => self
                .minimum_spanning_tree(root)
                .unwrap_or_else(|_| SpanningTree::new(Vec::new(), 0)),
            None => SpanningTree::new(Vec::new(), 0),
        }
    }

    //
    // Crate
    //

    pub(crate) fn index_of(&self, vertex: &T) -> Option<GraphIndex> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn vertex(&self, index: GraphIndex) -> &T {
        &self.vertices[index]
    }

    /// Selects the vertices marked in `subset` (all of them when `None`) and returns their
    /// indices along with the neighbour lists of the subgraph they induce, re-indexed so the
    /// selection occupies `0..len` in insertion order.
    pub(crate) fn scope(&self, subset: Option<&[bool]>) -> (Vec<GraphIndex>, Vec<Vec<GraphIndex>>) {
        let Some(subset) = subset else {
            return ((0..self.vertex_count()).collect(), self.neighbour_indices());
        };

        let mut local: Vec<Option<GraphIndex>> = vec![None; self.vertex_count()];
        let mut members = Vec::new();

        for (index, &included) in subset.iter().enumerate() {
            if included {
                local[index] = Some(members.len());
                members.push(index);
            }
        }

        let indices = members
            .iter()
            .map(|&index| {
                self.adjacency[index]
                    .iter()
                    .filter_map(|&(neighbour, _)| local[neighbour])
                    .collect()
            })
            .collect();

        (members, indices)
    }

    //
    // Private
    //

    /// Returns the index of the vertex, adding it first if necessary.
    fn intern(&mut self, vertex: T) -> GraphIndex {
        if let Some(index) = self.index_of(&vertex) {
            return index;
        }

        let index = self.vertices.len();
        self.index.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());

        index
    }

    fn try_index(&self, vertex: &T) -> Result<GraphIndex> {
        self.index_of(vertex)
            .ok_or_else(|| Error::unknown_vertex(vertex))
    }

    fn resolve(&self, indices: impl IntoIterator<Item = GraphIndex>) -> Vec<T> {
        indices
            .into_iter()
            .map(|index| self.vertices[index].clone())
            .collect()
    }

    /// Neighbour indices without weights.
    fn neighbour_indices(&self) -> Vec<Vec<GraphIndex>> {
        self.adjacency
            .iter()
            .map(|entries| entries.iter().map(|&(neighbour, _)| neighbour).collect())
            .collect()
    }

    /// Neighbour indices with every edge followed in both directions.
    fn symmetric_indices(&self) -> Vec<Vec<GraphIndex>> {
        let mut indices = self.neighbour_indices();

        for (source, entries) in self.adjacency.iter().enumerate() {
            for &(target, _) in entries {
                indices[target].push(source);
            }
        }

        indices
    }
}

impl<T> Display for Graph<T>
where
    T: Clone + Eq + Hash + Debug + Display + Ord,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed {
            "directed"
        } else {
            "undirected"
        };
        let (vertices, edges) = self.info();
        writeln!(f, "{kind} graph: {vertices} vertices, {edges} edges")?;

        let order =
            (0..self.vertex_count()).sorted_by(|a, b| self.vertices[*a].cmp(&self.vertices[*b]));
        for index in order {
            let neighbours = self.adjacency[index]
                .iter()
                .map(|&(neighbour, weight)| format!("{}({weight})", self.vertices[neighbour]))
                .join(", ");

            writeln!(f, "{}: {neighbours}", self.vertices[index])?;
        }

        Ok(())
    }
}
