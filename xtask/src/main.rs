mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/build).
    Preflight,
    /// Create a throwaway project tree that satisfies the checker.
    Scaffold {
        /// Directory to fill (defaults to the current directory)
        #[arg(value_name = "DIR")]
        dir: Option<std::path::PathBuf>,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::Scaffold { dir } => {
            cmd::scaffold::run(dir)?;
        }
    }
    Ok(())
}
