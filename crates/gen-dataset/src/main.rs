use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zipf_dataset::{load_dataset, DatasetError, DatasetGenerator, GeneratorConfig};

/// Synthetic Zipf-skewed (flow, element) dataset generator.
#[derive(Parser)]
#[command(name = "gen-dataset", version)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the dataset to ./skewed_dataset_zipf01.txt (default)
    Generate {
        /// Seed both column streams for a reproducible file
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Load an existing dataset file and report its ground-truth counts
    Summarize { path: PathBuf },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn generate(seed: Option<u64>) -> Result<(), DatasetError> {
    let generator = DatasetGenerator::new(GeneratorConfig::default())?;
    let summary = generator.run(seed)?;
    tracing::info!(
        file = %generator.config().output_path.display(),
        records = summary.records_written,
        "file saved"
    );
    Ok(())
}

fn summarize(path: PathBuf) -> Result<(), DatasetError> {
    let loaded = load_dataset(&path)?;
    tracing::info!(
        path = %path.display(),
        records = loaded.len(),
        unique_flows = loaded.unique_flows(),
        unique_pairs = loaded.unique_pairs(),
        skipped_lines = loaded.skipped_lines,
        "summary"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let result = match cli.command.unwrap_or(Command::Generate { seed: None }) {
        Command::Generate { seed } => generate(seed),
        Command::Summarize { path } => summarize(path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ DatasetError::CreateDir { .. }) => {
            tracing::error!(error = %e, "check the path/permissions; skipping generation");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
