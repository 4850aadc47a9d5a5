//! Benchmark graph generators for the reweave robustness engine.
//!
//! Provides the random models (Erdős–Rényi, Barabási–Albert,
//! Watts–Strogatz), regular
//! topologies (grid, path, cycle, star, complete), and the Zachary karate
//! club network used to exercise strategies and metrics. Random generators
//! take an explicit seeded RNG so every benchmark graph is reproducible.

use rand::Rng;
use rand::rngs::SmallRng;
use thiserror::Error;
use tracing::instrument;

use reweave_core::{Graph, GraphError};

/// An error produced while generating a benchmark graph.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GeneratorError {
    /// An edge probability fell outside `[0, 1]`.
    #[error("edge probability {probability} must lie in [0, 1]")]
    ProbabilityOutOfRange {
        /// The rejected probability.
        probability: f64,
    },
    /// A preferential-attachment count was zero or at least the node count.
    #[error("attachment count {attachment} must satisfy 1 <= m < n (n = {nodes})")]
    InvalidAttachment {
        /// The rejected attachment count.
        attachment: usize,
        /// The requested node count.
        nodes: usize,
    },
    /// A ring-lattice neighbour count was at least the node count.
    #[error("ring neighbour count {neighbours} must satisfy k < n (n = {nodes})")]
    InvalidRing {
        /// The rejected neighbour count.
        neighbours: usize,
        /// The requested node count.
        nodes: usize,
    },
    /// A grid dimension was zero.
    #[error("grid dimensions {rows}x{cols} must both be positive")]
    EmptyDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A topology needs more nodes than were requested.
    #[error("a {topology} graph needs at least {needed} nodes (got {got})")]
    TooFewNodes {
        /// The topology being generated.
        topology: &'static str,
        /// Minimum node count for the topology.
        needed: usize,
        /// Requested node count.
        got: usize,
    },
    /// The underlying graph rejected an edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl GeneratorError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GeneratorErrorCode {
        match self {
            Self::ProbabilityOutOfRange { .. } => GeneratorErrorCode::ProbabilityOutOfRange,
            Self::InvalidAttachment { .. } => GeneratorErrorCode::InvalidAttachment,
            Self::InvalidRing { .. } => GeneratorErrorCode::InvalidRing,
            Self::EmptyDimensions { .. } => GeneratorErrorCode::EmptyDimensions,
            Self::TooFewNodes { .. } => GeneratorErrorCode::TooFewNodes,
            Self::Graph(..) => GeneratorErrorCode::Graph,
        }
    }
}

/// Machine-readable error codes for [`GeneratorError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GeneratorErrorCode {
    /// An edge probability fell outside `[0, 1]`.
    ProbabilityOutOfRange,
    /// A preferential-attachment count was invalid.
    InvalidAttachment,
    /// A ring-lattice neighbour count was invalid.
    InvalidRing,
    /// A grid dimension was zero.
    EmptyDimensions,
    /// A topology needs more nodes than were requested.
    TooFewNodes,
    /// The underlying graph rejected an edge.
    Graph,
}

impl GeneratorErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProbabilityOutOfRange => "PROBABILITY_OUT_OF_RANGE",
            Self::InvalidAttachment => "INVALID_ATTACHMENT",
            Self::InvalidRing => "INVALID_RING",
            Self::EmptyDimensions => "EMPTY_DIMENSIONS",
            Self::TooFewNodes => "TOO_FEW_NODES",
            Self::Graph => "GRAPH",
        }
    }
}

/// Generates an Erdős–Rényi `G(n, p)` random graph.
///
/// Every unordered node pair becomes an edge independently with
/// probability `p`, drawn from `rng`.
///
/// # Errors
/// Returns [`GeneratorError::ProbabilityOutOfRange`] when `p` is not a
/// probability.
#[instrument(name = "gen.erdos_renyi", skip(rng), err)]
pub fn erdos_renyi(n: usize, p: f64, rng: &mut SmallRng) -> Result<Graph, GeneratorError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GeneratorError::ProbabilityOutOfRange { probability: p });
    }
    let mut graph = Graph::with_nodes(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.r#gen::<f64>() < p {
                graph.add_edge(u, v)?;
            }
        }
    }
    Ok(graph)
}

/// Generates a Barabási–Albert preferential-attachment graph.
///
/// Starts from `m` isolated seed nodes; each subsequent node attaches to
/// `m` distinct existing nodes chosen proportionally to their degree.
///
/// # Errors
/// Returns [`GeneratorError::InvalidAttachment`] unless `1 <= m < n`.
#[instrument(name = "gen.barabasi_albert", skip(rng), err)]
pub fn barabasi_albert(n: usize, m: usize, rng: &mut SmallRng) -> Result<Graph, GeneratorError> {
    if m == 0 || m >= n {
        return Err(GeneratorError::InvalidAttachment {
            attachment: m,
            nodes: n,
        });
    }
    let mut graph = Graph::with_nodes(n);
    // Attachment pool: one entry per edge endpoint, so sampling an entry
    // uniformly is sampling a node proportionally to its degree.
    let mut pool: Vec<usize> = Vec::with_capacity(2 * m * (n - m));
    let mut targets: Vec<usize> = (0..m).collect();
    for source in m..n {
        for &target in &targets {
            graph.add_edge(source, target)?;
        }
        pool.extend(targets.iter().copied());
        pool.extend(std::iter::repeat(source).take(targets.len()));
        targets = sample_distinct(&pool, m, rng);
    }
    Ok(graph)
}

/// Draws `count` distinct values from a non-empty weighted pool.
fn sample_distinct(pool: &[usize], count: usize, rng: &mut SmallRng) -> Vec<usize> {
    let mut chosen = Vec::with_capacity(count);
    while chosen.len() < count {
        let candidate = pool[rng.gen_range(0..pool.len())];
        if !chosen.contains(&candidate) {
            chosen.push(candidate);
        }
    }
    chosen
}

/// Generates a Watts–Strogatz small-world graph.
///
/// Builds a ring lattice where each node is joined to its `k / 2` nearest
/// neighbours on each side, then rewires each lattice edge `(u, v)` with
/// probability `p`: `u` keeps its end and `v` is replaced by a uniformly
/// drawn node that is neither `u` nor already adjacent to it. Rewiring
/// preserves the edge count `n * (k / 2)`.
///
/// # Errors
/// Returns [`GeneratorError::InvalidRing`] when `k >= n` and
/// [`GeneratorError::ProbabilityOutOfRange`] when `p` is not a
/// probability.
#[instrument(name = "gen.watts_strogatz", skip(rng), err)]
pub fn watts_strogatz(
    n: usize,
    k: usize,
    p: f64,
    rng: &mut SmallRng,
) -> Result<Graph, GeneratorError> {
    if k >= n {
        return Err(GeneratorError::InvalidRing {
            neighbours: k,
            nodes: n,
        });
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(GeneratorError::ProbabilityOutOfRange { probability: p });
    }
    let mut graph = Graph::with_nodes(n);
    for offset in 1..=(k / 2) {
        for u in 0..n {
            graph.add_edge(u, (u + offset) % n)?;
        }
    }
    for offset in 1..=(k / 2) {
        for u in 0..n {
            if rng.r#gen::<f64>() >= p {
                continue;
            }
            // A saturated node has no non-neighbour left to rewire to.
            if graph.degree(u) == Some(n - 1) {
                continue;
            }
            let mut replacement = rng.gen_range(0..n);
            while replacement == u || graph.has_edge(u, replacement) {
                replacement = rng.gen_range(0..n);
            }
            graph.remove_edge(u, (u + offset) % n);
            graph.add_edge(u, replacement)?;
        }
    }
    Ok(graph)
}

/// Generates the `rows x cols` two-dimensional lattice.
///
/// Node `(r, c)` is labelled `r * cols + c` and joined to its right and
/// down neighbours.
///
/// # Errors
/// Returns [`GeneratorError::EmptyDimensions`] when either dimension is 0.
pub fn grid(rows: usize, cols: usize) -> Result<Graph, GeneratorError> {
    if rows == 0 || cols == 0 {
        return Err(GeneratorError::EmptyDimensions { rows, cols });
    }
    let mut graph = Graph::with_nodes(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let node = r * cols + c;
            if c + 1 < cols {
                graph.add_edge(node, node + 1)?;
            }
            if r + 1 < rows {
                graph.add_edge(node, node + cols)?;
            }
        }
    }
    Ok(graph)
}

/// Generates the path `0 - 1 - ... - (n - 1)`.
///
/// # Errors
/// Infallible for any `n`; the `Result` keeps the generator surface
/// uniform.
pub fn path(n: usize) -> Result<Graph, GeneratorError> {
    let mut graph = Graph::with_nodes(n);
    for node in 1..n {
        graph.add_edge(node - 1, node)?;
    }
    Ok(graph)
}

/// Generates the cycle on `n` nodes.
///
/// # Errors
/// Returns [`GeneratorError::TooFewNodes`] when `n < 3`.
pub fn cycle(n: usize) -> Result<Graph, GeneratorError> {
    if n < 3 {
        return Err(GeneratorError::TooFewNodes {
            topology: "cycle",
            needed: 3,
            got: n,
        });
    }
    let mut graph = path(n)?;
    graph.add_edge(n - 1, 0)?;
    Ok(graph)
}

/// Generates the star with centre `0` and `n - 1` leaves.
///
/// # Errors
/// Returns [`GeneratorError::TooFewNodes`] when `n < 2`.
pub fn star(n: usize) -> Result<Graph, GeneratorError> {
    if n < 2 {
        return Err(GeneratorError::TooFewNodes {
            topology: "star",
            needed: 2,
            got: n,
        });
    }
    let mut graph = Graph::with_nodes(n);
    for leaf in 1..n {
        graph.add_edge(0, leaf)?;
    }
    Ok(graph)
}

/// Generates the complete graph on `n` nodes.
///
/// # Errors
/// Infallible for any `n`; the `Result` keeps the generator surface
/// uniform.
pub fn complete(n: usize) -> Result<Graph, GeneratorError> {
    let mut graph = Graph::with_nodes(n);
    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(u, v)?;
        }
    }
    Ok(graph)
}

/// Zachary's karate club network: 34 nodes, 78 edges.
#[must_use]
pub fn karate_club() -> Graph {
    let mut graph = Graph::with_nodes(34);
    for &(u, v) in KARATE_EDGES {
        graph
            .add_edge(u, v)
            .expect("karate edge list holds no self-loops");
    }
    graph
}

/// Edge list of Zachary's karate club (0-indexed).
const KARATE_EDGES: &[(usize, usize)] = &[
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (0, 5),
    (0, 6),
    (0, 7),
    (0, 8),
    (0, 10),
    (0, 11),
    (0, 12),
    (0, 13),
    (0, 17),
    (0, 19),
    (0, 21),
    (0, 31),
    (1, 2),
    (1, 3),
    (1, 7),
    (1, 13),
    (1, 17),
    (1, 19),
    (1, 21),
    (1, 30),
    (2, 3),
    (2, 7),
    (2, 8),
    (2, 9),
    (2, 13),
    (2, 27),
    (2, 28),
    (2, 32),
    (3, 7),
    (3, 12),
    (3, 13),
    (4, 6),
    (4, 10),
    (5, 6),
    (5, 10),
    (5, 16),
    (6, 16),
    (8, 30),
    (8, 32),
    (8, 33),
    (9, 33),
    (13, 33),
    (14, 32),
    (14, 33),
    (15, 32),
    (15, 33),
    (18, 32),
    (18, 33),
    (19, 33),
    (20, 32),
    (20, 33),
    (22, 32),
    (22, 33),
    (23, 25),
    (23, 27),
    (23, 29),
    (23, 32),
    (23, 33),
    (24, 25),
    (24, 27),
    (24, 31),
    (25, 31),
    (26, 29),
    (26, 33),
    (27, 33),
    (28, 31),
    (28, 33),
    (29, 32),
    (29, 33),
    (30, 32),
    (30, 33),
    (31, 32),
    (31, 33),
    (32, 33),
];

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rstest::rstest;

    use super::{
        GeneratorError, barabasi_albert, complete, cycle, erdos_renyi, grid, karate_club, path,
        star, watts_strogatz,
    };

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    fn erdos_renyi_rejects_bad_probabilities(#[case] p: f64) {
        let err = erdos_renyi(10, p, &mut rng()).expect_err("probability must be rejected");
        assert_eq!(err.code().as_str(), "PROBABILITY_OUT_OF_RANGE");
    }

    #[test]
    fn erdos_renyi_extremes_are_empty_and_complete() {
        let empty = erdos_renyi(6, 0.0, &mut rng()).expect("p = 0 is valid");
        assert_eq!(empty.edge_count(), 0);
        let full = erdos_renyi(6, 1.0, &mut rng()).expect("p = 1 is valid");
        assert!(full.is_complete());
    }

    #[test]
    fn erdos_renyi_is_reproducible_per_seed() {
        let first = erdos_renyi(30, 0.2, &mut rng()).expect("valid parameters");
        let second = erdos_renyi(30, 0.2, &mut rng()).expect("valid parameters");
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(10, 10)]
    #[case(11, 10)]
    fn barabasi_albert_rejects_bad_attachment(#[case] m: usize, #[case] n: usize) {
        let err = barabasi_albert(n, m, &mut rng()).expect_err("attachment must be rejected");
        assert!(matches!(err, GeneratorError::InvalidAttachment { .. }));
    }

    #[test]
    fn barabasi_albert_adds_m_edges_per_arrival() {
        let n = 50;
        let m = 3;
        let graph = barabasi_albert(n, m, &mut rng()).expect("valid parameters");
        assert_eq!(graph.node_count(), n);
        assert_eq!(graph.edge_count(), m * (n - m));
    }

    #[rstest]
    #[case(10, 10, 0.1)]
    #[case(10, 11, 0.1)]
    #[case(10, 4, -0.5)]
    #[case(10, 4, 1.5)]
    fn watts_strogatz_rejects_bad_parameters(#[case] n: usize, #[case] k: usize, #[case] p: f64) {
        let err = watts_strogatz(n, k, p, &mut rng()).expect_err("parameters must be rejected");
        assert!(matches!(
            err,
            GeneratorError::InvalidRing { .. } | GeneratorError::ProbabilityOutOfRange { .. }
        ));
    }

    #[test]
    fn watts_strogatz_without_rewiring_is_the_ring_lattice() {
        let graph = watts_strogatz(20, 4, 0.0, &mut rng()).expect("valid parameters");
        assert_eq!(graph.node_count(), 20);
        assert_eq!(graph.edge_count(), 40);
        for node in 0..20 {
            assert_eq!(graph.degree(node), Some(4));
        }
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(0, 19));
        assert!(graph.has_edge(0, 18));
        assert!(!graph.has_edge(0, 3));
    }

    #[test]
    fn watts_strogatz_rewiring_preserves_edge_count() {
        for p in [0.1, 0.5, 1.0] {
            let graph = watts_strogatz(100, 4, p, &mut rng()).expect("valid parameters");
            assert_eq!(graph.node_count(), 100);
            assert_eq!(graph.edge_count(), 200);
        }
    }

    #[test]
    fn watts_strogatz_is_reproducible_per_seed() {
        let first = watts_strogatz(50, 6, 0.2, &mut rng()).expect("valid parameters");
        let second = watts_strogatz(50, 6, 0.2, &mut rng()).expect("valid parameters");
        assert_eq!(first, second);
    }

    #[test]
    fn grid_has_lattice_edge_count() {
        let graph = grid(4, 5).expect("valid dimensions");
        assert_eq!(graph.node_count(), 20);
        // rows * (cols - 1) horizontal + (rows - 1) * cols vertical.
        assert_eq!(graph.edge_count(), 4 * 4 + 3 * 5);
        assert!(graph.is_connected());
        assert!(grid(0, 5).is_err());
    }

    #[test]
    fn small_topologies_have_expected_shapes() {
        assert_eq!(path(5).expect("any n").edge_count(), 4);
        assert_eq!(cycle(5).expect("n >= 3").edge_count(), 5);
        assert_eq!(star(5).expect("n >= 2").degree(0), Some(4));
        assert!(complete(5).expect("any n").is_complete());
        assert!(cycle(2).is_err());
        assert!(star(1).is_err());
    }

    #[test]
    fn karate_club_matches_the_published_network() {
        let graph = karate_club();
        assert_eq!(graph.node_count(), 34);
        assert_eq!(graph.edge_count(), 78);
        assert!(graph.is_connected());
        // The two faction leaders have the highest degrees.
        assert_eq!(graph.degree(33), Some(17));
        assert_eq!(graph.degree(0), Some(16));
    }
}
