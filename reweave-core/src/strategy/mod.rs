//! Edge-selection strategies for robustness reinforcement.
//!
//! Each strategy inspects a graph and proposes one currently absent edge
//! whose addition should improve resilience. Strategies never mutate the
//! graph they are given; the simulation loop owns the working copy.
//!
//! The hub, betweenness, and diameter-closing strategies silently fell back
//! to random selection in earlier designs; here the fallback is explicit:
//! every [`Selection`] carries a [`SelectionOrigin`] tag so callers and
//! tests can tell a primary pick from a random rescue.

mod betweenness;
mod diameter;
mod hub;
mod random;

#[cfg(test)]
mod tests;

use rand::rngs::SmallRng;

pub use self::betweenness::BetweennessRank;
pub use self::diameter::DiameterClosing;
pub use self::hub::HubDegree;
pub use self::random::RandomEdge;

use crate::graph::Graph;

/// A candidate edge chosen by a strategy, with its provenance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Selection {
    /// Endpoints of the proposed edge, canonicalised as `u < v`.
    pub edge: (usize, usize),
    /// Whether the strategy's primary policy produced the edge or the
    /// random fallback had to rescue it.
    pub origin: SelectionOrigin,
}

impl Selection {
    pub(crate) fn primary(u: usize, v: usize) -> Self {
        Self {
            edge: (u.min(v), u.max(v)),
            origin: SelectionOrigin::Primary,
        }
    }

    pub(crate) const fn into_fallback(self) -> Self {
        Self {
            edge: self.edge,
            origin: SelectionOrigin::RandomFallback,
        }
    }
}

/// Provenance of a [`Selection`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionOrigin {
    /// The strategy's own policy produced the edge.
    Primary,
    /// The strategy exhausted its policy and delegated to [`RandomEdge`].
    RandomFallback,
}

/// An edge-selection policy.
///
/// `select_edge` returns `None` when no valid non-edge exists (the graph is
/// complete or has fewer than two nodes) or, for [`RandomEdge`], when the
/// sampling budget is exhausted. Implementations must not mutate the graph.
pub trait Strategy {
    /// Short stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Proposes one absent edge to add, or signals exhaustion with `None`.
    fn select_edge(&self, graph: &Graph, rng: &mut SmallRng) -> Option<Selection>;
}

/// The four built-in strategies, for drivers that enumerate them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StrategyKind {
    /// Close the largest shortest-path distance in the giant component.
    DiameterClosing,
    /// Uniformly sample absent edges.
    Random,
    /// Join the highest-degree non-adjacent pair.
    Hub,
    /// Join the highest-betweenness non-adjacent pair.
    Betweenness,
}

impl StrategyKind {
    /// All built-in strategies in reporting order.
    pub const ALL: [Self; 4] = [
        Self::DiameterClosing,
        Self::Random,
        Self::Hub,
        Self::Betweenness,
    ];

    /// Instantiates the strategy behind this kind.
    #[must_use]
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Self::DiameterClosing => Box::new(DiameterClosing),
            Self::Random => Box::new(RandomEdge),
            Self::Hub => Box::new(HubDegree),
            Self::Betweenness => Box::new(BetweennessRank),
        }
    }

    /// Stable name matching [`Strategy::name`] of the instantiated strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DiameterClosing => "diameter-closing",
            Self::Random => "random",
            Self::Hub => "hub-degree",
            Self::Betweenness => "betweenness-rank",
        }
    }
}

/// Scans ranked nodes pairwise and returns the first absent edge.
///
/// Shared by the hub and betweenness strategies: nodes arrive sorted by
/// descending score (ties already broken by ascending label), and the scan
/// visits `(ranked[i], ranked[j])` with `i < j`.
fn first_unranked_pair(graph: &Graph, ranked: &[usize]) -> Option<(usize, usize)> {
    for (i, &u) in ranked.iter().enumerate() {
        for &v in ranked.iter().skip(i + 1) {
            if !graph.has_edge(u, v) {
                return Some((u, v));
            }
        }
    }
    None
}
