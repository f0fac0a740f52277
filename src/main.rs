use clap::Parser;
use lfs_guard::error::Result;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LFS_GUARD_LOG=debug`.
const LOG_ENV: &str = "LFS_GUARD_LOG";

/// Exit status for failures other than a found violation.
const EXIT_INTERNAL: i32 = 2;

#[derive(Parser)]
#[command(name = "lfs-guard")]
#[command(version)]
#[command(
    about = "Ensure every tracked file is plain text or tracked by Git LFS",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_INTERNAL);
        }
    }
}

fn run() -> Result<i32> {
    let report = lfs_guard::check_repository(".")?;
    Ok(report.emit()?)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();
}
