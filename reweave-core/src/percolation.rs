//! Percolation under targeted attack: giant-component decay AUC.

use tracing::instrument;

use crate::graph::Graph;

/// Simulates a targeted high-degree attack and integrates the decay of the
/// giant connected component into one scalar.
///
/// The removal order is fixed up front: nodes sorted by descending initial
/// degree, ties broken by ascending label. Degrees are not recomputed
/// after removals — the attack follows the static order. After each
/// removal the giant-component size is recorded, the sequence is
/// normalized by the initial size, and the area under the curve is taken
/// with the trapezoidal rule at unit step `1 / len`.
///
/// Lower values mean the network fragments quickly under attack. An empty
/// graph scores 0.0. A graph that decays linearly (every removal shrinks
/// the giant component by exactly one node, as in a complete graph) scores
/// `n / (2 (n + 1))`, the maximum attainable.
#[instrument(name = "percolation.targeted_attack", skip(graph), fields(nodes = graph.node_count()))]
#[must_use]
pub fn targeted_attack_auc(graph: &Graph) -> f64 {
    let initial = match graph.largest_component() {
        Some(component) => component.len(),
        None => return 0.0,
    };
    if initial == 0 {
        return 0.0;
    }

    let mut order: Vec<usize> = graph.nodes().collect();
    order.sort_by_key(|&node| std::cmp::Reverse(graph.degree(node).unwrap_or(0)));

    let mut working = graph.clone();
    let mut sizes = Vec::with_capacity(order.len() + 1);
    sizes.push(initial);
    for node in order {
        working.remove_node(node);
        let gcc = working
            .largest_component()
            .map_or(0, |component| component.len());
        sizes.push(gcc);
    }

    let normalized: Vec<f64> = sizes
        .iter()
        .map(|&size| size as f64 / initial as f64)
        .collect();
    trapezoid_area(&normalized, 1.0 / normalized.len() as f64)
}

/// Trapezoidal rule over uniformly spaced samples.
fn trapezoid_area(samples: &[f64], dx: f64) -> f64 {
    samples
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / 2.0 * dx)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{targeted_attack_auc, trapezoid_area};
    use crate::graph::Graph;
    use crate::test_utils::{complete_graph, path_graph, star_graph};

    #[test]
    fn empty_graph_scores_zero() {
        assert_eq!(targeted_attack_auc(&Graph::new()), 0.0);
    }

    #[test]
    fn complete_graph_decays_linearly() {
        // K_n survives any removal with a GCC of n - k, giving the maximal
        // AUC n / (2 (n + 1)).
        let n = 8.0;
        let auc = targeted_attack_auc(&complete_graph(8));
        assert!((auc - n / (2.0 * (n + 1.0))).abs() < 1.0e-9);
    }

    #[test]
    fn star_collapses_after_the_centre_is_removed() {
        // The highest-degree node is the centre; its removal isolates
        // every leaf, so the curve drops to 1/n after the first step.
        let auc = targeted_attack_auc(&star_graph(10));
        assert!(auc < 0.15);
    }

    #[test]
    fn complete_graph_outscores_the_star() {
        let robust = targeted_attack_auc(&complete_graph(10));
        let fragile = targeted_attack_auc(&star_graph(10));
        assert!(robust > 3.0 * fragile);
    }

    #[test]
    fn auc_stays_in_unit_range() {
        for graph in [complete_graph(6), star_graph(6), path_graph(6)] {
            let auc = targeted_attack_auc(&graph);
            assert!((0.0..=1.0).contains(&auc));
        }
    }

    #[test]
    fn isolated_nodes_still_produce_a_defined_score() {
        let graph = Graph::with_nodes(4);
        let auc = targeted_attack_auc(&graph);
        // Initial GCC is a single node; each removal keeps size 1 until
        // the graph empties.
        assert!(auc > 0.0);
        assert!(auc < 1.0);
    }

    #[test]
    fn trapezoid_matches_hand_computation() {
        let area = trapezoid_area(&[1.0, 0.5, 0.0], 0.5);
        assert!((area - 0.5).abs() < 1.0e-12);
    }
}
