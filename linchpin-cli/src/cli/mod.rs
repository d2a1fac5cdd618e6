//! Command-line interface orchestration for linchpin.
//!
//! `classify` and `mst` read a plain-text graph file; `demo` runs one of the
//! built-in reference graphs. Results render as text or JSON.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, ClassifyCommand, Command, DemoCommand, ExecutionSummary, MstCommand, Outcome,
    OutputFormat, Scenario, StrategyArg, render_summary, run_cli,
};
pub use input::{GraphFileError, parse_graph};
