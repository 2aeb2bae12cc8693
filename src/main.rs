mod aggregate;
mod config;
mod export;
mod extract;
mod filetype;
mod locate;
mod pipeline;
mod report;
mod summary;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Parse ADB diagnostic dump sessions (battery, thermal, power, CPU,
/// network) into a one-row-per-session summary table, export it to CSV and
/// JSON, and print battery/thermal statistics.
#[derive(Parser, Debug)]
#[command(name = "diagsift", version, about)]
pub struct Cli {
    /// Root log directory (overrides config)
    #[arg(value_name = "LOGS_DIR")]
    logs_dir: Option<PathBuf>,

    /// Config file path
    #[arg(short, long, default_value = "diagsift.toml")]
    config: PathBuf,

    /// Write the summary table as CSV to this path (overrides config)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the per-session JSON export to this path (overrides config)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the battery/thermal report
    #[arg(long)]
    no_report: bool,

    /// Extra logging (skipped directories, per-field misses)
    #[arg(short, long)]
    verbose: bool,

    /// Only warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("diagsift: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load(&cli.config)?;

    let logs_dir = cli.logs_dir.unwrap_or(config.input.logs_dir);
    let csv_path = cli.csv.or(config.export.csv);
    let json_path = cli.json.or(config.export.json);
    let with_report = !cli.no_report && config.report.enabled;

    let outcome = pipeline::run(&logs_dir)?;

    if !cli.quiet {
        println!(
            "{} sessions, {} columns",
            outcome.table.len(),
            outcome.table.columns.len()
        );
    }

    for (path, error) in &outcome.log.unreadable {
        tracing::warn!(path = %path.display(), error, "file skipped during parse");
    }

    if let Some(path) = csv_path {
        export::write_csv(&outcome.table, &path)?;
        if !cli.quiet {
            println!("CSV written to {}", path.display());
        }
    }
    if let Some(path) = json_path {
        export::write_json(&outcome.table, &path)?;
        if !cli.quiet {
            println!("JSON written to {}", path.display());
        }
    }

    if with_report && !outcome.table.is_empty() {
        print!("{}", report::render(&outcome.table));
    }

    Ok(())
}
