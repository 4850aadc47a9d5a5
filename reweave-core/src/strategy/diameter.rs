//! Diameter-closing edge selection (the PCM strategy).

use rand::rngs::SmallRng;
use tracing::debug;

use super::{RandomEdge, Selection, Strategy};
use crate::graph::Graph;

/// Joins the two most distant reachable nodes.
///
/// Works inside the largest connected component: computes all-pairs
/// breadth-first distances there and proposes the non-adjacent pair at the
/// strictly maximum distance. Closing the widest topological gap attacks
/// the bottleneck that keeps algebraic connectivity low.
///
/// Tie-break: distances are scanned in ascending `(source, target)` label
/// order, so among equally distant candidates the lexicographically
/// smallest pair wins. If the component has no non-adjacent pair at
/// distance two or more (it is complete), the strategy delegates to
/// [`RandomEdge`] over the whole graph and tags the result as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiameterClosing;

impl Strategy for DiameterClosing {
    fn name(&self) -> &'static str {
        "diameter-closing"
    }

    fn select_edge(&self, graph: &Graph, rng: &mut SmallRng) -> Option<Selection> {
        if graph.node_count() < 2 {
            return None;
        }
        let component = match graph.largest_component() {
            Some(component) if component.len() >= 2 => component,
            _ => return None,
        };
        let subgraph = graph.subgraph(&component);

        let mut best: Option<(usize, usize, usize)> = None;
        for source in subgraph.nodes() {
            let Ok(lengths) = subgraph.shortest_path_lengths(source) else {
                continue;
            };
            for (target, length) in lengths {
                let further = best.is_none_or(|(max_len, _, _)| length > max_len);
                if further && !graph.has_edge(source, target) && source != target {
                    best = Some((length, source, target));
                }
            }
        }

        if let Some((_, u, v)) = best {
            return Some(Selection::primary(u, v));
        }
        debug!("largest component is complete, delegating to random");
        RandomEdge
            .select_edge(graph, rng)
            .map(Selection::into_fallback)
    }
}
