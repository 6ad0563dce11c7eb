//! Midnight Magnolia workbook generator CLI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use magnolia_brandbook::{C_FILE_NAME_DEFAULT, write_brandbook};

#[derive(Parser)]
#[command(name = "magnolia-brandbook")]
#[command(
    author,
    version,
    about = "Generate the Midnight Magnolia brand and automation workbook"
)]
struct Cli {
    /// Output workbook path
    #[arg(short, long, default_value = C_FILE_NAME_DEFAULT)]
    output: PathBuf,

    /// Print per-sheet diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    log::set_logger(&LOGGER).context("Failed to install logger")?;
    log::set_max_level(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    write_brandbook(&cli.output)
        .with_context(|| format!("Failed to write workbook {}", cli.output.display()))?;

    println!("✨ Enhanced workbook created successfully!");
    println!("🌸 File saved as: {}", cli.output.display());
    Ok(())
}
