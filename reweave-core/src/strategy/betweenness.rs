//! Betweenness-ranked edge selection.

use rand::rngs::SmallRng;
use tracing::debug;

use super::{RandomEdge, Selection, Strategy, first_unranked_pair};
use crate::centrality::node_betweenness;
use crate::graph::Graph;

/// Joins the two most central nodes that are not yet adjacent.
///
/// Ranks nodes by descending normalized betweenness centrality; on graphs
/// beyond 200 nodes the centrality is a sampled estimate drawn from the
/// caller's RNG (see [`node_betweenness`]). Equal scores keep ascending
/// label order. Falls back to [`RandomEdge`] when every ranked pair is
/// already adjacent.
#[derive(Clone, Copy, Debug, Default)]
pub struct BetweennessRank;

impl Strategy for BetweennessRank {
    fn name(&self) -> &'static str {
        "betweenness-rank"
    }

    fn select_edge(&self, graph: &Graph, rng: &mut SmallRng) -> Option<Selection> {
        if graph.node_count() < 2 {
            return None;
        }
        let scores = node_betweenness(graph, rng);
        let mut ranked: Vec<usize> = graph.nodes().collect();
        ranked.sort_by(|a, b| {
            let score_a = scores.get(a).copied().unwrap_or(0.0);
            let score_b = scores.get(b).copied().unwrap_or(0.0);
            score_b.total_cmp(&score_a)
        });

        if let Some((u, v)) = first_unranked_pair(graph, &ranked) {
            return Some(Selection::primary(u, v));
        }
        debug!("no absent pair in centrality ranking, delegating to random");
        RandomEdge
            .select_edge(graph, rng)
            .map(Selection::into_fallback)
    }
}
