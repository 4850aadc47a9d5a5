//! Command implementations and argument parsing for the reweave CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use reweave_core::{
    Graph, SimulationBuilder, StrategyKind, Trajectory, algebraic_connectivity, omega_betweenness,
    omega_electrical, targeted_attack_auc,
};
use reweave_gen::{
    GeneratorError, barabasi_albert, complete, cycle, erdos_renyi, grid, karate_club, path, star,
    watts_strogatz,
};

const DEFAULT_BUDGET: usize = 20;
const DEFAULT_SEED: u64 = 42;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "reweave", about = "Evaluate network-robustness reinforcement strategies.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the edge-addition simulation suite and print trajectories.
    Reinforce(ReinforceCommand),
    /// Compute the robustness metric suite for one network.
    Assess(AssessCommand),
}

/// Options accepted by the `reinforce` command.
#[derive(Debug, Args, Clone)]
pub struct ReinforceCommand {
    /// Benchmark network configuration.
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Number of edges each strategy may add.
    #[arg(long, default_value_t = DEFAULT_BUDGET)]
    pub budget: usize,

    /// Seed for network generation and strategy randomness.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Strategies to run; defaults to all four.
    #[arg(long = "strategy", value_enum)]
    pub strategies: Vec<StrategyArg>,
}

/// Options accepted by the `assess` command.
#[derive(Debug, Args, Clone)]
pub struct AssessCommand {
    /// Benchmark network configuration.
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Seed for network generation.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Benchmark network selection shared by both commands.
#[derive(Debug, Args, Clone)]
pub struct NetworkArgs {
    /// Network family to generate.
    #[arg(long, value_enum)]
    pub network: NetworkKind,

    /// Node count for the random and regular families.
    #[arg(long, default_value_t = 100)]
    pub nodes: usize,

    /// Edge probability for the Erdős–Rényi family.
    #[arg(long, default_value_t = 0.05)]
    pub probability: f64,

    /// Attachment count for the Barabási–Albert family.
    #[arg(long, default_value_t = 3)]
    pub attachment: usize,

    /// Ring neighbour count for the Watts–Strogatz family.
    #[arg(long, default_value_t = 4)]
    pub neighbours: usize,

    /// Rewiring probability for the Watts–Strogatz family.
    #[arg(long, default_value_t = 0.1)]
    pub rewiring: f64,

    /// Row count for the grid family.
    #[arg(long, default_value_t = 8)]
    pub rows: usize,

    /// Column count for the grid family.
    #[arg(long, default_value_t = 8)]
    pub cols: usize,
}

/// Benchmark network families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NetworkKind {
    /// Zachary's karate club (34 nodes, 78 edges).
    Karate,
    /// Erdős–Rényi random graph.
    Er,
    /// Barabási–Albert preferential attachment.
    Ba,
    /// Watts–Strogatz small-world rewired ring.
    Ws,
    /// Two-dimensional lattice.
    Grid,
    /// Cycle.
    Cycle,
    /// Star.
    Star,
    /// Complete graph.
    Complete,
    /// Path.
    Path,
}

/// Strategy choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Close the largest shortest-path distance in the giant component.
    Diameter,
    /// Uniformly sample absent edges.
    Random,
    /// Join the highest-degree non-adjacent pair.
    Hub,
    /// Join the highest-betweenness non-adjacent pair.
    Betweenness,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Diameter => Self::DiameterClosing,
            StrategyArg::Random => Self::Random,
            StrategyArg::Hub => Self::Hub,
            StrategyArg::Betweenness => Self::Betweenness,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Benchmark network generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of the `reinforce` command.
    Reinforce(ReinforceSummary),
    /// Result of the `assess` command.
    Assess(AssessSummary),
}

/// Trajectories produced by the simulation suite.
#[derive(Debug, Clone)]
pub struct ReinforceSummary {
    /// Human-readable network label.
    pub network: String,
    /// Node count of the generated network.
    pub nodes: usize,
    /// Edge count of the generated network.
    pub edges: usize,
    /// Edge-addition budget per strategy.
    pub budget: usize,
    /// Strategy name paired with its connectivity trajectory.
    pub trajectories: Vec<(&'static str, Trajectory)>,
}

/// Scalar metrics produced by the `assess` command.
#[derive(Debug, Clone)]
pub struct AssessSummary {
    /// Human-readable network label.
    pub network: String,
    /// Node count of the generated network.
    pub nodes: usize,
    /// Edge count of the generated network.
    pub edges: usize,
    /// Algebraic connectivity (λ₂).
    pub lambda2: f64,
    /// Omega over shortest-path flow.
    pub omega_betweenness: f64,
    /// Omega over electrical flow.
    pub omega_electrical: f64,
    /// Targeted-attack percolation AUC.
    pub attack_auc: f64,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when benchmark network generation fails.
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Reinforce(command) => {
            Span::current().record("command", field::display("reinforce"));
            run_reinforce(command).map(ExecutionSummary::Reinforce)
        }
        Command::Assess(command) => {
            Span::current().record("command", field::display("assess"));
            run_assess(command).map(ExecutionSummary::Assess)
        }
    }
}

#[instrument(
    name = "cli.reinforce",
    err,
    skip(command),
    fields(network = ?command.network.network, budget = command.budget, seed = command.seed),
)]
fn run_reinforce(command: ReinforceCommand) -> Result<ReinforceSummary, CliError> {
    let graph = build_network(&command.network, command.seed)?;
    let kinds: Vec<StrategyKind> = if command.strategies.is_empty() {
        StrategyKind::ALL.to_vec()
    } else {
        command.strategies.iter().map(|&arg| arg.into()).collect()
    };
    let simulation = SimulationBuilder::new()
        .with_budget(command.budget)
        .with_seed(command.seed)
        .build();
    let trajectories = simulation.run_suite(&graph, &kinds);

    info!(
        strategies = trajectories.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "simulation suite completed"
    );
    Ok(ReinforceSummary {
        network: network_label(&command.network),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        budget: command.budget,
        trajectories,
    })
}

#[instrument(
    name = "cli.assess",
    err,
    skip(command),
    fields(network = ?command.network.network, seed = command.seed),
)]
fn run_assess(command: AssessCommand) -> Result<AssessSummary, CliError> {
    let graph = build_network(&command.network, command.seed)?;
    let summary = AssessSummary {
        network: network_label(&command.network),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        lambda2: algebraic_connectivity(&graph),
        omega_betweenness: omega_betweenness(&graph),
        omega_electrical: omega_electrical(&graph),
        attack_auc: targeted_attack_auc(&graph),
    };
    info!(
        nodes = summary.nodes,
        edges = summary.edges,
        lambda2 = summary.lambda2,
        "metric assessment completed"
    );
    Ok(summary)
}

fn build_network(args: &NetworkArgs, seed: u64) -> Result<Graph, CliError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let graph = match args.network {
        NetworkKind::Karate => karate_club(),
        NetworkKind::Er => erdos_renyi(args.nodes, args.probability, &mut rng)?,
        NetworkKind::Ba => barabasi_albert(args.nodes, args.attachment, &mut rng)?,
        NetworkKind::Ws => watts_strogatz(args.nodes, args.neighbours, args.rewiring, &mut rng)?,
        NetworkKind::Grid => grid(args.rows, args.cols)?,
        NetworkKind::Cycle => cycle(args.nodes)?,
        NetworkKind::Star => star(args.nodes)?,
        NetworkKind::Complete => complete(args.nodes)?,
        NetworkKind::Path => path(args.nodes)?,
    };
    Ok(graph)
}

fn network_label(args: &NetworkArgs) -> String {
    match args.network {
        NetworkKind::Karate => "karate".to_owned(),
        NetworkKind::Er => format!("er(n={}, p={})", args.nodes, args.probability),
        NetworkKind::Ba => format!("ba(n={}, m={})", args.nodes, args.attachment),
        NetworkKind::Ws => format!(
            "ws(n={}, k={}, p={})",
            args.nodes, args.neighbours, args.rewiring
        ),
        NetworkKind::Grid => format!("grid({}x{})", args.rows, args.cols),
        NetworkKind::Cycle => format!("cycle(n={})", args.nodes),
        NetworkKind::Star => format!("star(n={})", args.nodes),
        NetworkKind::Complete => format!("complete(n={})", args.nodes),
        NetworkKind::Path => format!("path(n={})", args.nodes),
    }
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Reinforce(reinforce) => {
            writeln!(
                writer,
                "network: {} ({} nodes, {} edges), budget: {}",
                reinforce.network, reinforce.nodes, reinforce.edges, reinforce.budget
            )?;
            for (name, trajectory) in &reinforce.trajectories {
                let rendered: Vec<String> = trajectory
                    .values()
                    .iter()
                    .map(|value| format!("{value:.5}"))
                    .collect();
                writeln!(writer, "{name}\t{}", rendered.join(" "))?;
            }
        }
        ExecutionSummary::Assess(assess) => {
            writeln!(
                writer,
                "network: {} ({} nodes, {} edges)",
                assess.network, assess.nodes, assess.edges
            )?;
            writeln!(writer, "lambda2\t{:.5}", assess.lambda2)?;
            writeln!(writer, "omega_betweenness\t{:.5}", assess.omega_betweenness)?;
            writeln!(writer, "omega_electrical\t{:.5}", assess.omega_electrical)?;
            writeln!(writer, "attack_auc\t{:.5}", assess.attack_auc)?;
        }
    }
    Ok(())
}
