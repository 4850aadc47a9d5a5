//! Betweenness centrality via Brandes' algorithm.
//!
//! Provides the node variant (normalized, with source sampling on large
//! graphs) used to rank endpoints in the betweenness selection strategy,
//! and the edge variant (unnormalized) that defines the flow distribution
//! of the betweenness omega metric.

use std::collections::{BTreeMap, VecDeque};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::graph::Graph;

/// Node count above which node betweenness samples its pivot sources.
const SAMPLE_THRESHOLD: usize = 200;

/// Dense adjacency snapshot: ascending labels plus index-based neighbour
/// lists mirroring the label order.
fn dense_adjacency(graph: &Graph) -> (Vec<usize>, Vec<Vec<usize>>) {
    let labels: Vec<usize> = graph.nodes().collect();
    let index: BTreeMap<usize, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, &label)| (label, i))
        .collect();
    let adjacency = labels
        .iter()
        .map(|&label| {
            graph
                .neighbours(label)
                .map(|neighbours| neighbours.iter().map(|n| index[n]).collect())
                .unwrap_or_default()
        })
        .collect();
    (labels, adjacency)
}

/// One Brandes breadth-first pass from `source`.
///
/// Returns the visit order, the shortest-path predecessor lists, and the
/// shortest-path counts (`sigma`).
fn shortest_path_pass(
    adjacency: &[Vec<usize>],
    source: usize,
) -> (Vec<usize>, Vec<Vec<usize>>, Vec<f64>) {
    let n = adjacency.len();
    let mut order = Vec::with_capacity(n);
    let mut predecessors = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut distance = vec![usize::MAX; n];

    sigma[source] = 1.0;
    distance[source] = 0;
    let mut frontier = VecDeque::from([source]);
    while let Some(v) = frontier.pop_front() {
        order.push(v);
        for &w in &adjacency[v] {
            if distance[w] == usize::MAX {
                distance[w] = distance[v] + 1;
                frontier.push_back(w);
            }
            if distance[w] == distance[v] + 1 {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }
    (order, predecessors, sigma)
}

/// Computes normalized node betweenness centrality.
///
/// Uses Brandes' algorithm on unweighted shortest paths. For graphs with
/// more than 200 nodes, 200 pivot sources are sampled from `rng` and the
/// accumulated values are rescaled by `n / k`; smaller graphs are computed
/// exactly and the result is deterministic. Values are normalized by
/// `(n - 1)(n - 2) / 2` pair counts for `n > 2`.
#[must_use]
pub fn node_betweenness(graph: &Graph, rng: &mut SmallRng) -> BTreeMap<usize, f64> {
    let (labels, adjacency) = dense_adjacency(graph);
    let n = labels.len();
    let mut betweenness = vec![0.0f64; n];

    let all_sources: Vec<usize> = (0..n).collect();
    let sources: Vec<usize> = if n > SAMPLE_THRESHOLD {
        let mut sampled: Vec<usize> = all_sources
            .choose_multiple(rng, SAMPLE_THRESHOLD)
            .copied()
            .collect();
        sampled.sort_unstable();
        sampled
    } else {
        all_sources
    };

    for &source in &sources {
        let (order, predecessors, sigma) = shortest_path_pass(&adjacency, source);
        let mut delta = vec![0.0f64; n];
        for &w in order.iter().rev() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != source {
                betweenness[w] += delta[w];
            }
        }
    }

    // Undirected rescale: pairs are visited from both endpoints, and the
    // sampled estimator is scaled back up to the full source population.
    let mut scale = if n > 2 {
        1.0 / ((n - 1) as f64 * (n - 2) as f64)
    } else {
        1.0
    };
    if sources.len() < n {
        scale *= n as f64 / sources.len() as f64;
    }

    labels
        .into_iter()
        .zip(betweenness)
        .map(|(label, value)| (label, value * scale))
        .collect()
}

/// Computes unnormalized edge betweenness centrality.
///
/// Exact Brandes edge accumulation over every source; keys are canonical
/// `(u, v)` edges with `u < v`. The halved totals count each unordered
/// endpoint pair once.
#[must_use]
pub fn edge_betweenness(graph: &Graph) -> BTreeMap<(usize, usize), f64> {
    let (labels, adjacency) = dense_adjacency(graph);
    let n = labels.len();
    let mut totals: BTreeMap<(usize, usize), f64> = graph
        .edges()
        .into_iter()
        .map(|edge| (edge, 0.0))
        .collect();

    for source in 0..n {
        let (order, predecessors, sigma) = shortest_path_pass(&adjacency, source);
        let mut delta = vec![0.0f64; n];
        for &w in order.iter().rev() {
            for &v in &predecessors[w] {
                let contribution = sigma[v] / sigma[w] * (1.0 + delta[w]);
                let (a, b) = (labels[v.min(w)], labels[v.max(w)]);
                if let Some(slot) = totals.get_mut(&(a, b)) {
                    *slot += contribution;
                }
                delta[v] += contribution;
            }
        }
    }

    for value in totals.values_mut() {
        *value *= 0.5;
    }
    totals
}
