use crate::report::{
    run_candidates, run_classify, run_export, run_import, run_summary, CandidatesArgs,
    ClassifyArgs, ExportArgs, ImportArgs, SummaryArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use talenta::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talenta",
    about = "Classify civil-service talent on the 9-box grid and plan succession for critical jobs",
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
    /// Place a single score pair on the 9-box grid
    Classify(ClassifyArgs),
    /// Merge "Data Pegawai" and history CSV sheets into the stored roster
    Import(ImportArgs),
    /// Write the talent recap (or the empty import template) as CSV
    Export(ExportArgs),
    /// Print the dashboard summary and talent-pool brief
    Summary(SummaryArgs),
    /// List ranked successor candidates for a critical job
    Candidates(CandidatesArgs),
}

/// Location of the JSON roster store, shared by every command that touches it.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct StorageArgs {
    /// Override the configured data directory (APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) storage: StorageArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
        Command::Import(args) => run_import(args),
        Command::Export(args) => run_export(args),
        Command::Summary(args) => run_summary(args),
        Command::Candidates(args) => run_candidates(args),
    }
}
