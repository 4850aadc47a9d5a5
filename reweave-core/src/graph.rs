//! Undirected simple graph used by the strategy engine and metric suite.
//!
//! Nodes are `usize` labels; the labels need not be contiguous. Adjacency is
//! kept in ordered maps so every enumeration (nodes, edges, components,
//! breadth-first traversal frontiers) visits labels in ascending order,
//! which makes the tie-breaks of the selection strategies deterministic.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use nalgebra::DMatrix;

use crate::error::{GraphError, Result};

/// An undirected, simple, unweighted graph over `usize` node labels.
///
/// Self-loops and parallel edges are rejected; edge insertion is otherwise
/// idempotent. Edges are reported in canonical `(u, v)` form with `u < v`.
///
/// # Examples
/// ```
/// use reweave_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(0, 1).expect("distinct endpoints");
/// graph.add_edge(1, 2).expect("distinct endpoints");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.is_connected());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<usize, BTreeSet<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph containing nodes `0..n` and no edges.
    #[must_use]
    pub fn with_nodes(n: usize) -> Self {
        let adjacency = (0..n).map(|node| (node, BTreeSet::new())).collect();
        Self {
            adjacency,
            edge_count: 0,
        }
    }

    /// Inserts an isolated node; a no-op when the node already exists.
    pub fn add_node(&mut self, node: usize) {
        self.adjacency.entry(node).or_default();
    }

    /// Returns `true` when `node` is present.
    #[must_use]
    pub fn contains_node(&self, node: usize) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Inserts the undirected edge `(u, v)`, creating missing endpoints.
    ///
    /// Returns `true` when the edge was newly inserted and `false` when it
    /// was already present.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        let inserted = self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Removes the undirected edge `(u, v)` if present.
    ///
    /// Returns `true` when the edge existed.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let removed = self
            .adjacency
            .get_mut(&u)
            .is_some_and(|neighbours| neighbours.remove(&v));
        if removed {
            if let Some(neighbours) = self.adjacency.get_mut(&v) {
                neighbours.remove(&u);
            }
            self.edge_count -= 1;
        }
        removed
    }

    /// Returns `true` when the undirected edge `(u, v)` is present.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(&u)
            .is_some_and(|neighbours| neighbours.contains(&v))
    }

    /// Removes a node and all incident edges.
    ///
    /// Returns `true` when the node existed.
    pub fn remove_node(&mut self, node: usize) -> bool {
        let Some(neighbours) = self.adjacency.remove(&node) else {
            return false;
        };
        self.edge_count -= neighbours.len();
        for neighbour in neighbours {
            if let Some(adjacent) = self.adjacency.get_mut(&neighbour) {
                adjacent.remove(&node);
            }
        }
        true
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` when every node pair is adjacent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let n = self.node_count();
        self.edge_count == n * n.saturating_sub(1) / 2
    }

    /// Iterates node labels in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns the neighbour set of `node`, or `None` for an absent node.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> Option<&BTreeSet<usize>> {
        self.adjacency.get(&node)
    }

    /// Returns the degree of `node`, or `None` for an absent node.
    #[must_use]
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.adjacency.get(&node).map(BTreeSet::len)
    }

    /// Enumerates edges in canonical ascending `(u, v)` order with `u < v`.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (&node, neighbours) in &self.adjacency {
            for &neighbour in neighbours.range((node + 1)..) {
                edges.push((node, neighbour));
            }
        }
        edges
    }

    /// Decomposes the graph into connected components, each a set of labels.
    ///
    /// Components are returned in ascending order of their smallest label.
    #[must_use]
    pub fn connected_components(&self) -> Vec<BTreeSet<usize>> {
        let mut seen = BTreeSet::new();
        let mut components = Vec::new();
        for root in self.adjacency.keys().copied() {
            if seen.contains(&root) {
                continue;
            }
            let component = self.bfs_reach(root);
            seen.extend(component.iter().copied());
            components.push(component);
        }
        components
    }

    /// Returns `true` when the graph is non-empty and has one component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        match self.adjacency.keys().next() {
            None => false,
            Some(&root) => self.bfs_reach(root).len() == self.node_count(),
        }
    }

    /// Returns the node set of the largest connected component.
    ///
    /// Ties are broken towards the component containing the smallest label.
    #[must_use]
    pub fn largest_component(&self) -> Option<BTreeSet<usize>> {
        self.connected_components()
            .into_iter()
            .max_by_key(BTreeSet::len)
    }

    /// Extracts the label-preserving subgraph induced by `nodes`.
    ///
    /// Labels absent from the graph are ignored.
    #[must_use]
    pub fn subgraph(&self, nodes: &BTreeSet<usize>) -> Self {
        let mut sub = Self::new();
        for &node in nodes {
            if self.adjacency.contains_key(&node) {
                sub.add_node(node);
            }
        }
        let mut edge_count = 0;
        for (&node, neighbours) in &self.adjacency {
            if !nodes.contains(&node) {
                continue;
            }
            let kept: BTreeSet<usize> = neighbours
                .iter()
                .copied()
                .filter(|neighbour| nodes.contains(neighbour))
                .collect();
            edge_count += kept.range((node + 1)..).count();
            if let Some(slot) = sub.adjacency.get_mut(&node) {
                *slot = kept;
            }
        }
        sub.edge_count = edge_count;
        sub
    }

    /// Computes breadth-first shortest-path lengths from `source`.
    ///
    /// Only reachable nodes appear in the returned map; the source itself
    /// maps to 0.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `source` is absent.
    pub fn shortest_path_lengths(&self, source: usize) -> Result<BTreeMap<usize, usize>> {
        if !self.adjacency.contains_key(&source) {
            return Err(GraphError::UnknownNode { node: source });
        }
        let mut lengths = BTreeMap::new();
        lengths.insert(source, 0usize);
        let mut frontier = VecDeque::from([source]);
        while let Some(node) = frontier.pop_front() {
            let depth = lengths.get(&node).copied().unwrap_or(0);
            let Some(neighbours) = self.adjacency.get(&node) else {
                continue;
            };
            for &neighbour in neighbours {
                if !lengths.contains_key(&neighbour) {
                    lengths.insert(neighbour, depth + 1);
                    frontier.push_back(neighbour);
                }
            }
        }
        Ok(lengths)
    }

    /// Rebuilds the graph over the dense label range `0..n`, preserving
    /// structure.
    ///
    /// Returns the relabelled graph together with the mapping from new
    /// label to original label (`mapping[new] == old`). Original labels are
    /// assigned in ascending order, so relabelling is deterministic.
    #[must_use]
    pub fn relabel_to_dense(&self) -> (Self, Vec<usize>) {
        let mapping: Vec<usize> = self.adjacency.keys().copied().collect();
        let reverse: BTreeMap<usize, usize> = mapping
            .iter()
            .enumerate()
            .map(|(dense, &label)| (label, dense))
            .collect();
        let adjacency = self
            .adjacency
            .iter()
            .map(|(label, neighbours)| {
                let dense = reverse[label];
                let dense_neighbours = neighbours.iter().map(|n| reverse[n]).collect();
                (dense, dense_neighbours)
            })
            .collect();
        (
            Self {
                adjacency,
                edge_count: self.edge_count,
            },
            mapping,
        )
    }

    /// Materialises the graph Laplacian `L = D - A` as a dense matrix.
    ///
    /// Matrix row/column `i` corresponds to `labels[i]`, where `labels` is
    /// the ascending list of node labels returned alongside the matrix.
    #[must_use]
    pub fn laplacian(&self) -> (DMatrix<f64>, Vec<usize>) {
        let labels: Vec<usize> = self.adjacency.keys().copied().collect();
        let index: BTreeMap<usize, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| (label, i))
            .collect();
        let n = labels.len();
        let mut laplacian = DMatrix::<f64>::zeros(n, n);
        for (&node, neighbours) in &self.adjacency {
            let i = index[&node];
            laplacian[(i, i)] = neighbours.len() as f64;
            for neighbour in neighbours {
                let j = index[neighbour];
                laplacian[(i, j)] = -1.0;
            }
        }
        (laplacian, labels)
    }

    fn bfs_reach(&self, root: usize) -> BTreeSet<usize> {
        let mut reached = BTreeSet::from([root]);
        let mut frontier = VecDeque::from([root]);
        while let Some(node) = frontier.pop_front() {
            let Some(neighbours) = self.adjacency.get(&node) else {
                continue;
            };
            for &neighbour in neighbours {
                if reached.insert(neighbour) {
                    frontier.push_back(neighbour);
                }
            }
        }
        reached
    }
}
