//! Command implementations and argument parsing for the linchpin CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use linchpin_core::{
    Classification, ClassifierBuilder, ExecutionStrategy, Graph, LinchpinError,
    LinchpinErrorCode, SpanningTree, minimum_spanning_tree,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use super::input::{GraphFileError, parse_graph};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "linchpin",
    about = "Find critical and pseudo-critical edges of a minimum spanning tree."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Classify every edge of a graph file.
    Classify(ClassifyCommand),
    /// Print one minimum spanning tree of a graph file.
    Mst(MstCommand),
    /// Classify a built-in reference graph.
    Demo(DemoCommand),
}

/// Options accepted by the `classify` command.
#[derive(Debug, Args, Clone)]
pub struct ClassifyCommand {
    /// Path to a graph file: a vertex count line, then `source target weight` lines.
    pub path: PathBuf,

    /// How the per-edge evaluations are scheduled.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// Rendering of the result on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to a graph file.
    pub path: PathBuf,

    /// Rendering of the result on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Options accepted by the `demo` command.
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// Reference graph to classify.
    #[arg(long, value_enum, default_value_t = Scenario::Pentagon)]
    pub scenario: Scenario,

    /// Rendering of the result on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Let the library pick the fastest available strategy.
    Auto,
    /// Evaluate edges on the calling thread.
    Sequential,
    /// Evaluate edges on the Rayon thread pool.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Output renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Space-separated index lists.
    Text,
    /// A single JSON object.
    Json,
}

/// Built-in reference graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Five vertices, seven edges, two interchangeable equal-weight pairs.
    Pentagon,
    /// Four vertices in a cycle of equal-weight edges.
    Square,
}

impl Scenario {
    /// Returns the scenario graph.
    ///
    /// # Errors
    /// Never fails for the built-in scenarios; the result mirrors
    /// [`Graph::from_triples`].
    pub fn graph(self) -> Result<Graph, LinchpinError> {
        match self {
            Self::Pentagon => Graph::from_triples(
                5,
                &[
                    (0, 1, 1),
                    (1, 2, 1),
                    (2, 3, 2),
                    (0, 3, 2),
                    (0, 4, 3),
                    (3, 4, 3),
                    (1, 4, 6),
                ],
            ),
            Self::Square => Graph::from_triples(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 1)]),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the graph file.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file could not be parsed.
    #[error("failed to parse `{path}`: {source}")]
    Input {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: GraphFileError,
    },
    /// Classification or MST extraction failed.
    #[error(transparent)]
    Core(#[from] LinchpinError),
}

impl CliError {
    /// Returns the stable core error code when one applies.
    #[must_use]
    pub fn core_code(&self) -> Option<LinchpinErrorCode> {
        match self {
            Self::Core(error)
            | Self::Input {
                source: GraphFileError::Graph(error),
                ..
            } => Some(error.code()),
            _ => None,
        }
    }
}

/// Outcome of a CLI command, ready for rendering.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Requested rendering.
    pub output: OutputFormat,
    /// Command result.
    pub outcome: Outcome,
}

/// Result payload of a CLI command.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Edge classification from `classify` or `demo`.
    Classification(Classification),
    /// Spanning tree from `mst`.
    Tree(SpanningTree),
}

#[derive(Serialize)]
struct ClassificationReport {
    mst_weight: u64,
    critical: Vec<usize>,
    pseudo_critical: Vec<usize>,
}

#[derive(Serialize)]
struct TreeReport<'a> {
    weight: u64,
    edges: &'a [usize],
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or executing the command fails.
///
/// # Examples
/// ```
/// use linchpin_cli::cli::{Cli, Command, DemoCommand, OutputFormat, Outcome, Scenario, run_cli};
///
/// let cli = Cli {
///     command: Command::Demo(DemoCommand {
///         scenario: Scenario::Square,
///         output: OutputFormat::Text,
///     }),
/// };
/// let summary = run_cli(cli).expect("demo must succeed");
/// let Outcome::Classification(classification) = summary.outcome else {
///     panic!("demo classifies edges");
/// };
/// assert_eq!(classification.pseudo_critical(), vec![0, 1, 2, 3]);
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Classify(command) => run_classify(command),
        Command::Mst(command) => run_mst(command),
        Command::Demo(command) => run_demo(command),
    }
}

#[instrument(
    name = "cli.classify",
    skip(command),
    fields(path = %command.path.display(), strategy = ?command.strategy)
)]
fn run_classify(command: ClassifyCommand) -> Result<ExecutionSummary, CliError> {
    let graph = load_graph(&command.path)?;
    let classification = classify_with(&graph, command.strategy.into())?;
    Ok(ExecutionSummary {
        output: command.output,
        outcome: Outcome::Classification(classification),
    })
}

#[instrument(name = "cli.mst", skip(command), fields(path = %command.path.display()))]
fn run_mst(command: MstCommand) -> Result<ExecutionSummary, CliError> {
    let graph = load_graph(&command.path)?;
    let tree = minimum_spanning_tree(&graph)?;
    info!(weight = tree.weight(), edges = tree.edges().len(), "extracted spanning tree");
    Ok(ExecutionSummary {
        output: command.output,
        outcome: Outcome::Tree(tree),
    })
}

#[instrument(name = "cli.demo", skip(command), fields(scenario = ?command.scenario))]
fn run_demo(command: DemoCommand) -> Result<ExecutionSummary, CliError> {
    let graph = command.scenario.graph()?;
    let classification = classify_with(&graph, ExecutionStrategy::Auto)?;
    Ok(ExecutionSummary {
        output: command.output,
        outcome: Outcome::Classification(classification),
    })
}

fn classify_with(graph: &Graph, strategy: ExecutionStrategy) -> Result<Classification, CliError> {
    let classifier = ClassifierBuilder::new()
        .with_execution_strategy(strategy)
        .build()?;
    Ok(classifier.classify(graph)?)
}

fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(BufReader::new(file)).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Renders `summary` to `writer` in the requested format.
///
/// Text output mirrors the classic console listing:
///
/// ```text
/// Critical Edges: 0 1
/// Pseudo-critical Edges: 2 3 4 5
/// ```
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use linchpin_cli::cli::{ExecutionSummary, OutputFormat, Outcome, render_summary};
/// # use linchpin_core::{Classification, EdgeClass};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     output: OutputFormat::Text,
///     outcome: Outcome::Classification(Classification::new(
///         vec![EdgeClass::Critical, EdgeClass::PseudoCritical],
///         3,
///     )),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "Critical Edges: 0\nPseudo-critical Edges: 1\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match (&summary.outcome, summary.output) {
        (Outcome::Classification(classification), OutputFormat::Text) => {
            write_index_line(&mut writer, "Critical Edges:", &classification.critical())?;
            write_index_line(
                &mut writer,
                "Pseudo-critical Edges:",
                &classification.pseudo_critical(),
            )
        }
        (Outcome::Classification(classification), OutputFormat::Json) => {
            let report = ClassificationReport {
                mst_weight: classification.mst_weight(),
                critical: classification.critical(),
                pseudo_critical: classification.pseudo_critical(),
            };
            write_json(&mut writer, &report)
        }
        (Outcome::Tree(tree), OutputFormat::Text) => {
            writeln!(writer, "MST Weight: {}", tree.weight())?;
            write_index_line(&mut writer, "MST Edges:", tree.edges())
        }
        (Outcome::Tree(tree), OutputFormat::Json) => {
            let report = TreeReport {
                weight: tree.weight(),
                edges: tree.edges(),
            };
            write_json(&mut writer, &report)
        }
    }
}

fn write_index_line(writer: &mut impl Write, label: &str, indices: &[usize]) -> io::Result<()> {
    write!(writer, "{label}")?;
    for index in indices {
        write!(writer, " {index}")?;
    }
    writeln!(writer)
}

fn write_json(writer: &mut impl Write, report: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, report)?;
    writeln!(writer)
}
