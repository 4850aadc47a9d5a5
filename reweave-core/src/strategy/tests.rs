//! Unit tests for the edge-selection strategies.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;

use super::{
    BetweennessRank, DiameterClosing, HubDegree, RandomEdge, SelectionOrigin, Strategy,
    StrategyKind,
};
use crate::graph::Graph;
use crate::test_utils::{complete_graph, path_graph, star_graph, two_triangles};

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EED)
}

fn strategies() -> Vec<Box<dyn Strategy>> {
    StrategyKind::ALL.iter().map(|kind| kind.strategy()).collect()
}

#[test]
fn every_strategy_declines_graphs_below_two_nodes() {
    for graph in [Graph::new(), Graph::with_nodes(1)] {
        for strategy in strategies() {
            assert!(
                strategy.select_edge(&graph, &mut rng()).is_none(),
                "{} must decline a {}-node graph",
                strategy.name(),
                graph.node_count()
            );
        }
    }
}

#[test]
fn every_strategy_declines_a_single_edge_pair() {
    // Two nodes, one edge: no valid non-edge exists anywhere.
    let mut graph = Graph::new();
    graph.add_edge(0, 1).expect("distinct endpoints");
    for strategy in strategies() {
        assert!(
            strategy.select_edge(&graph, &mut rng()).is_none(),
            "{} must decline K2",
            strategy.name()
        );
    }
}

#[rstest]
#[case(StrategyKind::DiameterClosing)]
#[case(StrategyKind::Random)]
#[case(StrategyKind::Hub)]
#[case(StrategyKind::Betweenness)]
fn complete_graphs_yield_no_selection(#[case] kind: StrategyKind) {
    let graph = complete_graph(6);
    assert!(kind.strategy().select_edge(&graph, &mut rng()).is_none());
}

#[rstest]
#[case(StrategyKind::DiameterClosing)]
#[case(StrategyKind::Random)]
#[case(StrategyKind::Hub)]
#[case(StrategyKind::Betweenness)]
fn selections_are_valid_non_edges(#[case] kind: StrategyKind) {
    let graph = path_graph(10);
    let selection = kind
        .strategy()
        .select_edge(&graph, &mut rng())
        .expect("a sparse path has absent edges");
    let (u, v) = selection.edge;
    assert!(u < v);
    assert!(graph.contains_node(u) && graph.contains_node(v));
    assert!(!graph.has_edge(u, v));
}

#[test]
fn diameter_closing_joins_path_endpoints() {
    let selection = DiameterClosing
        .select_edge(&path_graph(6), &mut rng())
        .expect("path has distant pairs");
    assert_eq!(selection.edge, (0, 5));
    assert_eq!(selection.origin, SelectionOrigin::Primary);
}

#[test]
fn diameter_closing_ties_break_to_smallest_pair() {
    // The star has every leaf pair at distance 2; the smallest labels win.
    let selection = DiameterClosing
        .select_edge(&star_graph(5), &mut rng())
        .expect("star has absent leaf pairs");
    assert_eq!(selection.edge, (1, 2));
}

#[test]
fn diameter_closing_works_inside_the_largest_component() {
    // Two disjoint triangles plus a pendant on the first: the pendant pair
    // is the only distance-2 gap inside the largest component.
    let mut graph = two_triangles();
    graph.add_edge(2, 3).expect("distinct endpoints");
    let selection = DiameterClosing
        .select_edge(&graph, &mut rng())
        .expect("component has a gap");
    let (u, v) = selection.edge;
    assert!(!graph.has_edge(u, v));
    // Both endpoints stay inside the 0..3 component.
    assert!(u <= 3 && v <= 3);
    assert_eq!(selection.origin, SelectionOrigin::Primary);
}

#[test]
fn hub_prefers_the_highest_degree_pair() {
    // Degrees: 0 -> 3, 1 -> 2, then 2, 3, 4 with degree 1. The scan finds
    // (0, 4) first: the centre is adjacent to 1..3 but not to 4.
    let mut graph = star_graph(4);
    graph.add_edge(1, 4).expect("distinct endpoints");
    let selection = HubDegree
        .select_edge(&graph, &mut rng())
        .expect("absent hub pair exists");
    assert_eq!(selection.edge, (0, 4));
    assert_eq!(selection.origin, SelectionOrigin::Primary);
}

#[test]
fn hub_ties_break_to_ascending_labels() {
    // All cycle nodes share degree 2; ranking keeps label order, so the
    // first absent pair is (0, 2).
    let selection = HubDegree
        .select_edge(&crate::test_utils::cycle_graph(6), &mut rng())
        .expect("cycle has absent pairs");
    assert_eq!(selection.edge, (0, 2));
    assert_eq!(selection.origin, SelectionOrigin::Primary);
}

#[test]
fn betweenness_prefers_central_non_adjacent_pairs() {
    // Path 0-1-2-3-4 ranks 2 first, then 1 and 3. The midpoint is adjacent
    // to both of them, so the scan settles on joining 2 with an endpoint.
    let selection = BetweennessRank
        .select_edge(&path_graph(5), &mut rng())
        .expect("path has absent central pairs");
    assert_eq!(selection.edge, (0, 2));
    assert_eq!(selection.origin, SelectionOrigin::Primary);
}

#[test]
fn random_selection_is_reproducible_for_a_fixed_seed() {
    let graph = path_graph(20);
    let first = RandomEdge.select_edge(&graph, &mut SmallRng::seed_from_u64(11));
    let second = RandomEdge.select_edge(&graph, &mut SmallRng::seed_from_u64(11));
    assert_eq!(first, second);
}

#[test]
fn strategy_kinds_report_stable_names() {
    for kind in StrategyKind::ALL {
        assert_eq!(kind.name(), kind.strategy().name());
    }
}
