mod config;
mod diagnostics;
mod error;
mod grammar;
mod overlap;
mod record;
mod report;
mod scanner;
mod tokenizer;
mod version;

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::report::{Report, Selection};

/// Environment variable holding the log filter, e.g. `POMPROPS_LOG=debug`.
const LOG_ENV: &str = "POMPROPS_LOG";

/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "pomprops",
    about = "Collect Maven dependency versions from loose text into version properties"
)]
struct Cli {
    /// Explicit config file (default: `.pomprops.toml` if present).
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print normalized `<dependency>` blocks, one per artifact.
    #[arg(short = 'd', long)]
    dependencies: bool,

    /// Drop records whose group id contains PATTERN (repeatable).
    #[arg(short = 'x', long = "exclude-pattern", value_name = "PATTERN")]
    exclude_patterns: Vec<String>,

    /// Files to scan. `-` reads standard input; directories are walked.
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Print each record with the files it was found in.
    #[arg(short = 'f', long)]
    print_with_files: bool,

    /// Print `<name>version</name>` property definitions.
    #[arg(short = 'v', long)]
    property_versions: bool,

    /// Print each record with its derived property name.
    #[arg(short = 's', long)]
    summary: bool,
}

impl Cli {
    /// The reports requested by flags. None selected means no output.
    const fn selection(&self) -> Selection {
        return Selection {
            dependencies: self.dependencies,
            files: self.print_with_files,
            properties: self.property_versions,
            summary: self.summary,
        };
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    return match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}

/// Log to stderr so stdout carries only report text.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| return EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load config, scan every input, print the selected reports.
///
/// # Errors
///
/// Returns config errors, the first unreadable input, or stdout write failures.
fn run(cli: Cli) -> Result<(), error::Error> {
    let selection = cli.selection();
    let config = Config::load(Path::new("."), cli.config.as_deref())?.with_excludes(cli.exclude_patterns);

    let files = scanner::expand_inputs(&cli.files, &config)?;
    tracing::debug!(inputs = files.len(), excludes = ?config.exclude, "scanning");
    let extraction = scanner::extract(&files, &config.exclude)?;

    let report = Report::new(&extraction, &config.separators);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.render(selection).as_bytes())?;
    stdout.flush()?;

    return Ok(());
}
