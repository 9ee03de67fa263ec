//! CLI argument definitions.

use clap::Parser;

/// Command line surface of the checker.
///
/// The scan itself takes no options; parsing still gives `--help` and
/// `--version` and rejects stray arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Pre-deployment readiness check for the SISC-SESAU project",
    long_about = None
)]
pub struct CheckArgs {}
