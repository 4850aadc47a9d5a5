//! Simulation loop tracking algebraic connectivity across edge additions.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{info, instrument, warn};

use crate::graph::Graph;
use crate::spectral::algebraic_connectivity;
use crate::strategy::{Strategy, StrategyKind};

/// Connectivity values recorded across one simulation run.
///
/// Holds `budget + 1` non-negative floats: the initial algebraic
/// connectivity at index 0 and one value per edge-addition step. When the
/// strategy exhausts its candidates early the remaining entries repeat the
/// last achieved value, so the length is always `budget + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    values: Vec<f64>,
    exhausted_at: Option<usize>,
}

impl Trajectory {
    /// The recorded connectivity values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of recorded values (`budget + 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no values were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The final connectivity value.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// The step (1-based) at which the strategy ran out of candidates, if
    /// it did; entries from that step onwards are padding.
    #[must_use]
    pub const fn exhausted_at(&self) -> Option<usize> {
        self.exhausted_at
    }
}

/// Configures [`Simulation`] instances.
///
/// # Examples
/// ```
/// use reweave_core::SimulationBuilder;
///
/// let simulation = SimulationBuilder::new().with_budget(10).with_seed(42).build();
/// assert_eq!(simulation.budget(), 10);
/// assert_eq!(simulation.seed(), 42);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SimulationBuilder {
    budget: usize,
    seed: u64,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            budget: 20,
            seed: 0x5EED_CAFE,
        }
    }
}

impl SimulationBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of edges to add.
    #[must_use]
    pub const fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Seeds the RNG driving random selection and centrality sampling.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Constructs the configured [`Simulation`].
    #[must_use]
    pub const fn build(self) -> Simulation {
        Simulation {
            budget: self.budget,
            seed: self.seed,
        }
    }
}

/// Drives a selection strategy for a fixed budget of edge additions.
///
/// Each run operates on a private, densely relabelled copy of the input
/// graph; the caller's graph is never mutated. Runs with the same seed,
/// graph, and strategy produce identical trajectories.
///
/// # Examples
/// ```
/// use reweave_core::{Graph, SimulationBuilder, StrategyKind};
///
/// let mut graph = Graph::new();
/// for (u, v) in [(0, 1), (1, 2), (2, 3)] {
///     graph.add_edge(u, v).expect("distinct endpoints");
/// }
/// let simulation = SimulationBuilder::new().with_budget(2).with_seed(7).build();
/// let trajectory = simulation.run(&graph, &*StrategyKind::DiameterClosing.strategy());
/// assert_eq!(trajectory.len(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Simulation {
    budget: usize,
    seed: u64,
}

impl Simulation {
    /// The configured number of edges to add.
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// The configured RNG seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs `strategy` against a private copy of `graph` and records the
    /// connectivity trajectory.
    ///
    /// The trajectory always has length `budget + 1`; early strategy
    /// exhaustion pads the tail with the last achieved value. A failed
    /// connectivity computation inside a step degrades that step to 0.0
    /// rather than aborting the run.
    #[instrument(
        name = "simulate.run",
        skip(self, graph, strategy),
        fields(
            strategy = strategy.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            budget = self.budget,
        ),
    )]
    pub fn run(&self, graph: &Graph, strategy: &dyn Strategy) -> Trajectory {
        let (mut working, _) = graph.relabel_to_dense();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut values = Vec::with_capacity(self.budget + 1);
        let mut exhausted_at = None;
        values.push(algebraic_connectivity(&working));

        for step in 1..=self.budget {
            let Some(selection) = strategy.select_edge(&working, &mut rng) else {
                info!(step, "strategy exhausted its candidates, padding trajectory");
                exhausted_at = Some(step);
                break;
            };
            let (u, v) = selection.edge;
            if let Err(error) = working.add_edge(u, v) {
                // A strategy proposing an invalid edge is a logic error;
                // treat it like exhaustion so the run still completes.
                warn!(step, %error, "strategy proposed an invalid edge, stopping");
                exhausted_at = Some(step);
                break;
            }
            let lambda2 = algebraic_connectivity(&working);
            info!(step, edge = ?selection.edge, origin = ?selection.origin, lambda2);
            values.push(lambda2);
        }

        let pad = values.last().copied().unwrap_or(0.0);
        values.resize(self.budget + 1, pad);
        Trajectory {
            values,
            exhausted_at,
        }
    }

    /// Runs every requested strategy kind and pairs each stable strategy
    /// name with its trajectory, in the order given.
    #[must_use]
    pub fn run_suite(
        &self,
        graph: &Graph,
        kinds: &[StrategyKind],
    ) -> Vec<(&'static str, Trajectory)> {
        kinds
            .iter()
            .map(|kind| (kind.name(), self.run(graph, &*kind.strategy())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::SimulationBuilder;
    use crate::graph::Graph;
    use crate::strategy::StrategyKind;
    use crate::test_utils::{complete_graph, path_graph, two_triangles};

    #[rstest]
    #[case(StrategyKind::DiameterClosing)]
    #[case(StrategyKind::Random)]
    #[case(StrategyKind::Hub)]
    #[case(StrategyKind::Betweenness)]
    fn trajectory_length_is_budget_plus_one(#[case] kind: StrategyKind) {
        let simulation = SimulationBuilder::new().with_budget(4).with_seed(3).build();
        for graph in [path_graph(8), two_triangles(), Graph::with_nodes(1)] {
            let trajectory = simulation.run(&graph, &*kind.strategy());
            assert_eq!(trajectory.len(), 5);
        }
    }

    #[test]
    fn complete_graph_pads_with_the_initial_value() {
        let graph = complete_graph(5);
        let simulation = SimulationBuilder::new().with_budget(3).with_seed(3).build();
        let trajectory = simulation.run(&graph, &*StrategyKind::Hub.strategy());
        assert_eq!(trajectory.len(), 4);
        assert_eq!(trajectory.exhausted_at(), Some(1));
        let initial = trajectory.values()[0];
        assert!((initial - 5.0).abs() < 1.0e-9);
        assert!(trajectory.values().iter().all(|v| (v - initial).abs() < 1.0e-12));
    }

    #[test]
    fn connectivity_never_decreases_under_edge_addition() {
        let graph = path_graph(7);
        let simulation = SimulationBuilder::new().with_budget(5).with_seed(9).build();
        let trajectory = simulation.run(&graph, &*StrategyKind::DiameterClosing.strategy());
        for window in trajectory.values().windows(2) {
            assert!(window[1] >= window[0] - 1.0e-9);
        }
        assert!(trajectory.last().expect("non-empty") > trajectory.values()[0]);
    }

    #[test]
    fn identical_seeds_give_identical_trajectories() {
        let graph = path_graph(15);
        let simulation = SimulationBuilder::new().with_budget(6).with_seed(1234).build();
        let first = simulation.run(&graph, &*StrategyKind::Random.strategy());
        let second = simulation.run(&graph, &*StrategyKind::Random.strategy());
        assert_eq!(first, second);
    }

    #[test]
    fn caller_graph_is_not_mutated() {
        let graph = path_graph(6);
        let before = graph.clone();
        let simulation = SimulationBuilder::new().with_budget(3).with_seed(5).build();
        simulation.run(&graph, &*StrategyKind::Hub.strategy());
        assert_eq!(graph, before);
    }

    #[test]
    fn disconnected_graphs_start_from_zero() {
        let graph = two_triangles();
        let simulation = SimulationBuilder::new().with_budget(2).with_seed(8).build();
        let trajectory = simulation.run(&graph, &*StrategyKind::DiameterClosing.strategy());
        assert_eq!(trajectory.values()[0], 0.0);
    }

    #[test]
    fn run_suite_reports_every_requested_strategy() {
        let graph = path_graph(6);
        let simulation = SimulationBuilder::new().with_budget(2).with_seed(2).build();
        let suite = simulation.run_suite(&graph, &StrategyKind::ALL);
        let names: Vec<&str> = suite.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["diameter-closing", "random", "hub-degree", "betweenness-rank"]
        );
        assert!(suite.iter().all(|(_, trajectory)| trajectory.len() == 3));
    }
}
