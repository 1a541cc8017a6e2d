//! Command-line entry point: load the bundled channel plan, then write it to
//! the requested file as CHIRP CSV.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chirp_channel_export::logging::init_logging;
use chirp_channel_export::{open_bundled_database, run_export, ExportProfile};
use clap::{Parser, ValueEnum};
use tracing::info;

#[derive(Parser)]
#[command(name = "chirp-channel-export", version, about)]
struct Cli {
    /// CSV file to write. Created if missing, truncated otherwise.
    #[arg(short = 'o', long = "output-file")]
    output_file: PathBuf,

    /// Export variant to produce.
    #[arg(long, value_enum, default_value_t = Profile::Filtered)]
    profile: Profile,

    /// Log each mapped channel.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Profile {
    /// 88-480 MHz only, `+`/`-` duplex with offset, `"` quoting.
    Filtered,
    /// All channels, `split` duplex with the repeater frequency, `|` quoting.
    Full,
}

impl From<Profile> for ExportProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Filtered => ExportProfile::FILTERED,
            Profile::Full => ExportProfile::FULL,
        }
    }
}

/// Returning a `Result` surfaces load, consistency, and I/O failures as a
/// non-zero exit with the error chain printed.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let conn = open_bundled_database()?;
    info!("channel plan loaded");

    let output = File::create(&cli.output_file)
        .with_context(|| format!("failed to create {}", cli.output_file.display()))?;

    let profile = ExportProfile::from(cli.profile);
    let summary = run_export(&conn, &profile, output)
        .with_context(|| format!("failed to export to {}", cli.output_file.display()))?;

    info!(
        rows = summary.rows_written,
        path = %cli.output_file.display(),
        "export finished"
    );
    Ok(())
}
