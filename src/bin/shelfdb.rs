//! Command-line front end: run a library script file.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfdb::ops::ScriptRunner;

/// Run a library command script and write its transcript next to it.
#[derive(Parser)]
#[command(name = "shelfdb", about = "Library catalog script runner")]
struct Cli {
    /// Path to the command script.
    script: PathBuf,
}

fn main() -> shelfdb::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelfdb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut runner = ScriptRunner::new();
    runner.process_script_file(&cli.script)?;
    Ok(())
}
