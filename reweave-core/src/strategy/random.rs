//! Uniform random selection of an absent edge.

use rand::Rng;
use rand::rngs::SmallRng;

use super::{Selection, Strategy};
use crate::graph::Graph;

/// Samples node pairs uniformly and proposes the first absent edge found.
///
/// The attempt budget is `min(100 * |V|, |V|^2)`; dense graphs close to
/// complete can therefore exhaust the budget and report `None` even though
/// an absent edge still exists. That bound keeps selection cheap on graphs
/// where almost every pair is already present.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomEdge;

impl Strategy for RandomEdge {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_edge(&self, graph: &Graph, rng: &mut SmallRng) -> Option<Selection> {
        let nodes: Vec<usize> = graph.nodes().collect();
        let n = nodes.len();
        if n < 2 {
            return None;
        }
        let max_attempts = (100 * n).min(n * n);
        for _ in 0..max_attempts {
            let i = rng.gen_range(0..n);
            let j = rng.gen_range(0..n);
            if i == j {
                continue;
            }
            let (u, v) = (nodes[i], nodes[j]);
            if !graph.has_edge(u, v) {
                return Some(Selection::primary(u, v));
            }
        }
        None
    }
}
