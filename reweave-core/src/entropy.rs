//! Flow-entropy (omega) robustness metrics.
//!
//! Both metrics score how evenly "flow" spreads across a graph's edges,
//! as the normalized Shannon entropy of a flow distribution: near 1.0 the
//! flow is maximally even (robust), near 0 it concentrates on few edges
//! (fragile). They differ only in the flow model — shortest-path edge
//! betweenness versus electrical current derived from effective
//! resistance.

use tracing::warn;

use crate::centrality::edge_betweenness;
use crate::graph::Graph;

/// Threshold handed to the Laplacian pseudo-inverse.
const PINV_EPS: f64 = 1.0e-12;

/// Shannon entropy of `flows`, normalized by the maximum entropy for
/// `flows.len()` outcomes.
///
/// All-zero flow is a defined degenerate case and maps to the uniform
/// distribution (entropy 1.0). With one or zero outcomes the maximum
/// entropy is taken as 1.0 to keep the ratio defined.
fn normalized_flow_entropy(flows: &[f64]) -> f64 {
    let total: f64 = flows.iter().sum();
    let uniform = 1.0 / flows.len() as f64;
    let mut actual = 0.0;
    for &flow in flows {
        let probability = if total == 0.0 { uniform } else { flow / total };
        if probability > 0.0 {
            actual -= probability * probability.ln();
        }
    }
    let max = if flows.len() > 1 {
        (flows.len() as f64).ln()
    } else {
        1.0
    };
    actual / max
}

/// Omega metric over shortest-path flow: normalized entropy of the edge
/// betweenness distribution.
///
/// Returns 0.0 for a graph with no nodes or no edges. All-zero betweenness
/// (no path crosses any edge) falls back to a uniform distribution. A
/// non-finite flow value degrades to NaN — "undefined", not an error.
///
/// # Examples
/// ```
/// use reweave_core::{Graph, omega_betweenness};
///
/// let mut cycle = Graph::new();
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
///     cycle.add_edge(u, v).expect("distinct endpoints");
/// }
/// // Every cycle edge is structurally equivalent: maximal evenness.
/// assert!((omega_betweenness(&cycle) - 1.0).abs() < 1.0e-9);
/// ```
#[must_use]
pub fn omega_betweenness(graph: &Graph) -> f64 {
    if graph.node_count() == 0 || graph.edge_count() == 0 {
        return 0.0;
    }
    let scores = edge_betweenness(graph);
    let flows: Vec<f64> = scores.values().copied().collect();
    if flows.iter().any(|flow| !flow.is_finite()) {
        warn!("edge betweenness produced non-finite flow, omega is undefined");
        return f64::NAN;
    }
    normalized_flow_entropy(&flows)
}

/// Omega metric over electrical flow: normalized entropy of the
/// inverse-effective-resistance distribution.
///
/// A disconnected graph is restricted to its largest component first;
/// below two nodes or one edge the metric is 0.0. Effective resistance
/// per edge `(i, j)` follows Kirchhoff's formula
/// `R = L⁺[i,i] + L⁺[j,j] - 2 L⁺[i,j]` on the Laplacian pseudo-inverse,
/// and the per-edge flow proxy is `1 / R`. Pseudo-inverse failure degrades
/// to NaN with a diagnostic.
#[must_use]
pub fn omega_electrical(graph: &Graph) -> f64 {
    let restricted;
    let graph = if graph.is_connected() {
        graph
    } else {
        let Some(component) = graph.largest_component() else {
            return 0.0;
        };
        restricted = graph.subgraph(&component);
        &restricted
    };
    if graph.node_count() < 2 || graph.edge_count() == 0 {
        return 0.0;
    }

    let (laplacian, labels) = graph.laplacian();
    let pseudo_inverse = match laplacian.pseudo_inverse(PINV_EPS) {
        Ok(matrix) => matrix,
        Err(reason) => {
            warn!(
                nodes = graph.node_count(),
                reason, "Laplacian pseudo-inverse failed, omega is undefined"
            );
            return f64::NAN;
        }
    };
    let index = |label: usize| {
        labels
            .binary_search(&label)
            .unwrap_or_else(|insert_at| insert_at)
    };

    let mut currents = Vec::with_capacity(graph.edge_count());
    for (u, v) in graph.edges() {
        let (i, j) = (index(u), index(v));
        let resistance =
            pseudo_inverse[(i, i)] + pseudo_inverse[(j, j)] - 2.0 * pseudo_inverse[(i, j)];
        currents.push(1.0 / resistance);
    }
    if currents.iter().any(|current| !current.is_finite()) {
        warn!("effective resistance produced non-finite current, omega is undefined");
        return f64::NAN;
    }
    normalized_flow_entropy(&currents)
}
