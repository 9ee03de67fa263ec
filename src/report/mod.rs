//! Verification pipeline: folder check, report assembly, persistence, console echo.

pub mod document;
pub mod folders;
pub mod render;
pub mod sample;
pub mod scan;
pub mod summary;

pub use document::ReportDocument;
pub use folders::{folder_statuses, print_folder_check, FolderStatus};
pub use render::build_report;
pub use scan::{check_file, FileCheck, FileOutcome, SampleOutcome};
pub use summary::RunSummary;

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{checklist::Checklist, errors::ReportWriteError, telemetry::ScanSpan};

/// Number of trailing report lines echoed to the terminal after a save.
pub const TERMINAL_TAIL_LINES: usize = 15;
/// Width of the `=` banners framing console sections.
pub(crate) const CONSOLE_RULE_WIDTH: usize = 60;

/// Outcome of one full verification run.
#[derive(Debug)]
pub struct ReportRun {
    /// Where the report landed; `None` when writing it failed.
    pub saved_to: Option<PathBuf>,
    pub summary: RunSummary,
}

/// Persist the report document to `path`, overwriting prior content.
pub fn write_report(document: &ReportDocument, path: &Path) -> Result<(), ReportWriteError> {
    fs::write(path, document.to_text()).map_err(|source| ReportWriteError {
        path: path.to_path_buf(),
        source,
    })
}

/// Print a blank line and a `=`-framed section banner.
pub(crate) fn print_console_banner(title: &str) {
    println!("\n{}", "=".repeat(CONSOLE_RULE_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(CONSOLE_RULE_WIDTH));
}

/// Build and save the report, echoing its closing lines to the terminal.
///
/// A failed save is reported on the console and in the returned `saved_to`;
/// the scan counters survive either way.
pub fn run_report(checklist: &Checklist, root: &Path) -> ReportRun {
    let (document, summary) = build_report(checklist, root, Local::now());
    let destination = root.join(checklist.report_file_name);
    match write_report(&document, &destination) {
        Ok(()) => {
            info!(
                target: "sisc_preflight::report",
                path = %destination.display(),
                lines = document.len(),
                "Saved verification report"
            );
            for line in document.tail(TERMINAL_TAIL_LINES) {
                println!("{line}");
            }
            println!("\nFull report saved to: {}", destination.display());
            ReportRun {
                saved_to: Some(destination),
                summary,
            }
        }
        Err(err) => {
            warn!(
                target: "sisc_preflight::report",
                error = %err,
                "Failed to save verification report"
            );
            println!("[ERROR] Could not save the report: {err}");
            ReportRun {
                saved_to: None,
                summary,
            }
        }
    }
}

/// Run the whole verification for `checklist` against the project at `root`.
pub fn run_verification(checklist: &Checklist, root: &Path) -> ReportRun {
    let span = ScanSpan::start(Uuid::new_v4());
    println!("Starting {} project verification...", checklist.project);
    println!();

    print_folder_check(checklist, root);
    print_console_banner("ANALYZING FILE CONTENTS...");

    let run = run_report(checklist, root);
    if run.saved_to.is_some() {
        if run.summary.missing == 0 {
            print_console_banner("VERIFICATION COMPLETE - READY TO DEPLOY!");
        } else {
            print_console_banner("VERIFICATION COMPLETE - FIX THE MISSING FILES!");
        }
    } else {
        println!("[ERROR] Could not generate the full report.");
    }

    span.finish(&run.summary, run.saved_to.is_some());
    run
}
