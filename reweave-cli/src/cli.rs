//! Command-line interface orchestration for the reweave driver.
//!
//! Offers a `reinforce` command that runs the edge-addition simulation
//! suite over a generated benchmark network, and an `assess` command that
//! reports the robustness metric suite for one network.

mod commands;

pub use commands::{
    AssessCommand, AssessSummary, Cli, CliError, Command, ExecutionSummary, NetworkArgs,
    NetworkKind, ReinforceCommand, ReinforceSummary, StrategyArg, render_summary, run_cli,
};
