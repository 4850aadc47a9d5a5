//! Degree-ranked (hub) edge selection.

use rand::rngs::SmallRng;
use tracing::debug;

use super::{RandomEdge, Selection, Strategy, first_unranked_pair};
use crate::graph::Graph;

/// Joins the two highest-degree nodes that are not yet adjacent.
///
/// Nodes are ranked by descending degree; equal degrees keep ascending
/// label order (the sort is stable over the graph's ascending node
/// enumeration). When every ranked pair is already adjacent the strategy
/// delegates to [`RandomEdge`] and tags the result as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct HubDegree;

impl Strategy for HubDegree {
    fn name(&self) -> &'static str {
        "hub-degree"
    }

    fn select_edge(&self, graph: &Graph, rng: &mut SmallRng) -> Option<Selection> {
        if graph.node_count() < 2 {
            return None;
        }
        let mut ranked: Vec<usize> = graph.nodes().collect();
        ranked.sort_by_key(|&node| std::cmp::Reverse(graph.degree(node).unwrap_or(0)));

        if let Some((u, v)) = first_unranked_pair(graph, &ranked) {
            return Some(Selection::primary(u, v));
        }
        debug!("no absent pair in degree ranking, delegating to random");
        RandomEdge
            .select_edge(graph, rng)
            .map(Selection::into_fallback)
    }
}
