use crate::report::{run_listings, run_score, ListingsArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rent_right::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "RentRightNL",
    about = "Serve rental listings with WWS point scores and maximum legal rents",
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
    /// Score a single unit and print its WWS breakdown
    Score(ScoreArgs),
    /// Print the seeded listing catalogue with rent assessments
    Listings(ListingsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the listing seed file
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
    /// Override the directory holding the built frontend
    #[arg(long)]
    pub(crate) static_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Listings(args) => run_listings(args),
    }
}
