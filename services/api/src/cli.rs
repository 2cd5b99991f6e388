use crate::review::{run_analyze, run_batch, run_levels, AnalyzeArgs, BatchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use quote_guard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Quote Guard",
    about = "Screen custom quotation conditions for risky contract language",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Review condition text from the terminal
    Review {
        #[command(subcommand)]
        command: ReviewCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ReviewCommand {
    /// Analyze a single condition and show the gate verdict
    Analyze(AnalyzeArgs),
    /// Analyze every row of a condition sheet (CSV with `id,text` columns)
    Batch(BatchArgs),
    /// List the risk levels with their display metadata and suggestions
    Levels,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Review { command } => match command {
            ReviewCommand::Analyze(args) => run_analyze(args),
            ReviewCommand::Batch(args) => run_batch(args),
            ReviewCommand::Levels => run_levels(),
        },
    }
}
