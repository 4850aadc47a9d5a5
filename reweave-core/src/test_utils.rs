//! Small fixture topologies shared by the unit tests.

use crate::graph::Graph;

/// Builds the path `0 - 1 - ... - (n - 1)`.
pub(crate) fn path_graph(n: usize) -> Graph {
    let mut graph = Graph::with_nodes(n);
    for node in 1..n {
        graph
            .add_edge(node - 1, node)
            .expect("path endpoints are distinct");
    }
    graph
}

/// Builds the cycle on `n` nodes (`n >= 3`).
pub(crate) fn cycle_graph(n: usize) -> Graph {
    let mut graph = path_graph(n);
    if n >= 3 {
        graph
            .add_edge(n - 1, 0)
            .expect("cycle endpoints are distinct");
    }
    graph
}

/// Builds the star with centre `0` and `n - 1` leaves.
pub(crate) fn star_graph(n: usize) -> Graph {
    let mut graph = Graph::with_nodes(n);
    for leaf in 1..n {
        graph.add_edge(0, leaf).expect("star endpoints are distinct");
    }
    graph
}

/// Builds the complete graph on `n` nodes.
pub(crate) fn complete_graph(n: usize) -> Graph {
    let mut graph = Graph::with_nodes(n);
    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(u, v).expect("complete endpoints are distinct");
        }
    }
    graph
}

/// Builds two disjoint triangles on labels `0..3` and `10..13`.
pub(crate) fn two_triangles() -> Graph {
    let mut graph = Graph::new();
    for (u, v) in [(0, 1), (1, 2), (0, 2), (10, 11), (11, 12), (10, 12)] {
        graph.add_edge(u, v).expect("triangle endpoints are distinct");
    }
    graph
}
