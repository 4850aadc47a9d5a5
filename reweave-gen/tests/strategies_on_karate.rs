//! Scenario tests running the core engine against generated benchmarks.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;

use reweave_core::{
    SelectionOrigin, SimulationBuilder, Strategy, StrategyKind, algebraic_connectivity,
    omega_betweenness, omega_electrical, targeted_attack_auc,
};
use reweave_gen::{complete, cycle, erdos_renyi, karate_club, star};

#[test]
fn diameter_closing_finds_a_gap_in_the_karate_club() {
    let graph = karate_club();
    let mut rng = SmallRng::seed_from_u64(1);
    let selection = StrategyKind::DiameterClosing
        .strategy()
        .select_edge(&graph, &mut rng)
        .expect("the club is far from complete");
    let (u, v) = selection.edge;
    assert!(!graph.has_edge(u, v));
    assert_eq!(selection.origin, SelectionOrigin::Primary);
    // The club is connected, so both endpoints share its one component.
    let reachable = graph
        .shortest_path_lengths(u)
        .expect("endpoint is a club member");
    assert!(reachable.contains_key(&v));
}

#[rstest]
#[case(StrategyKind::DiameterClosing)]
#[case(StrategyKind::Random)]
#[case(StrategyKind::Hub)]
#[case(StrategyKind::Betweenness)]
fn every_strategy_improves_the_karate_club(#[case] kind: StrategyKind) {
    let graph = karate_club();
    let simulation = SimulationBuilder::new().with_budget(5).with_seed(42).build();
    let trajectory = simulation.run(&graph, &*kind.strategy());
    assert_eq!(trajectory.len(), 6);
    let initial = trajectory.values()[0];
    assert!(initial > 0.0);
    assert!(trajectory.last().expect("non-empty trajectory") > initial);
}

#[test]
fn karate_simulations_are_reproducible() {
    let graph = karate_club();
    let simulation = SimulationBuilder::new().with_budget(4).with_seed(7).build();
    let first = simulation.run_suite(&graph, &StrategyKind::ALL);
    let second = simulation.run_suite(&graph, &StrategyKind::ALL);
    assert_eq!(first, second);
}

#[test]
fn metric_suite_orders_benchmark_topologies() {
    let karate = karate_club();
    let ring = cycle(34).expect("n >= 3");

    // The club holds a positive spectral gap but concentrates flow around
    // its leaders more than the perfectly even ring does.
    assert!(algebraic_connectivity(&karate) > 0.0);
    assert!(omega_betweenness(&karate) < omega_betweenness(&ring));
    assert!(omega_electrical(&karate) < omega_electrical(&ring));
}

#[test]
fn targeted_attack_separates_robust_from_fragile() {
    let robust = targeted_attack_auc(&complete(20).expect("any n"));
    let fragile = targeted_attack_auc(&star(20).expect("n >= 2"));
    assert!(robust > 0.4);
    assert!(fragile < 0.15);
}

#[test]
fn sparse_random_graphs_run_the_full_suite() {
    let mut rng = SmallRng::seed_from_u64(99);
    let graph = erdos_renyi(40, 0.08, &mut rng).expect("valid parameters");
    let simulation = SimulationBuilder::new().with_budget(3).with_seed(3).build();
    for (name, trajectory) in simulation.run_suite(&graph, &StrategyKind::ALL) {
        assert_eq!(trajectory.len(), 4, "strategy {name}");
        assert!(trajectory.values().iter().all(|v| v.is_finite() && *v >= 0.0));
    }
}
