//! Reweave core library: network-robustness strategies and metrics.
//!
//! Evaluates strategies for improving a network's structural robustness by
//! selectively adding edges, and quantifies robustness with spectral
//! (algebraic connectivity), information-theoretic (flow-entropy omega),
//! and percolation (targeted-attack AUC) metrics.

mod centrality;
mod entropy;
mod error;
mod graph;
mod percolation;
mod simulate;
mod spectral;
mod strategy;

#[cfg(test)]
mod test_utils;

pub use crate::{
    centrality::{edge_betweenness, node_betweenness},
    entropy::{omega_betweenness, omega_electrical},
    error::{GraphError, GraphErrorCode, Result},
    graph::Graph,
    percolation::targeted_attack_auc,
    simulate::{Simulation, SimulationBuilder, Trajectory},
    spectral::algebraic_connectivity,
    strategy::{
        BetweennessRank, DiameterClosing, HubDegree, RandomEdge, Selection, SelectionOrigin,
        Strategy, StrategyKind,
    },
};
