//! Algebraic connectivity: the spectral robustness indicator tracked by the
//! simulation loop.

use nalgebra::SymmetricEigen;
use tracing::warn;

use crate::graph::Graph;

/// Convergence threshold handed to the symmetric eigen-solver.
const EIGEN_EPS: f64 = 1.0e-12;

/// Computes the algebraic connectivity (λ₂) of `graph`.
///
/// λ₂ is the second-smallest eigenvalue of the graph Laplacian. For a graph
/// with fewer than two nodes, or a disconnected graph, connectivity is zero
/// by definition and 0.0 is returned without touching the solver. A failed
/// eigen-decomposition also degrades to 0.0 with a diagnostic, so callers
/// iterating edge additions never abort on numerical noise.
///
/// # Examples
/// ```
/// use reweave_core::{Graph, algebraic_connectivity};
///
/// let mut graph = Graph::new();
/// graph.add_edge(0, 1).expect("distinct endpoints");
/// // K2 has Laplacian eigenvalues {0, 2}.
/// assert!((algebraic_connectivity(&graph) - 2.0).abs() < 1.0e-9);
/// ```
#[must_use]
pub fn algebraic_connectivity(graph: &Graph) -> f64 {
    if graph.node_count() < 2 || !graph.is_connected() {
        return 0.0;
    }
    let (laplacian, _) = graph.laplacian();
    let Some(eigen) = SymmetricEigen::try_new(laplacian, EIGEN_EPS, 0) else {
        warn!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "eigen-decomposition did not converge, reporting zero connectivity"
        );
        return 0.0;
    };
    let mut eigenvalues: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(f64::total_cmp);
    // The smallest eigenvalue of a connected Laplacian is 0 up to rounding;
    // the clamp absorbs the same rounding on the second one.
    eigenvalues.get(1).copied().unwrap_or(0.0).max(0.0)
}
