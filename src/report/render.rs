//! Report assembly: header, per-file blocks, and the summary verdict.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::checklist::Checklist;

use super::{
    document::ReportDocument,
    sample::{render_sample_line, SAMPLE_MAX_LINES},
    scan::{check_file, FileCheck, FileOutcome, SampleOutcome},
    summary::RunSummary,
};

/// Width of the `=` and `-` rules in the report body.
const REPORT_RULE_WIDTH: usize = 80;
/// Width of the indented rule under each sample heading.
const SAMPLE_RULE_WIDTH: usize = 40;
/// Indent applied to the detail lines within a file block.
const BLOCK_INDENT: &str = "   ";

/// Build the full report document and the run summary it describes.
///
/// Walks the expected files in table order; every per-file problem ends up
/// as report text rather than an error.
pub fn build_report(
    checklist: &Checklist,
    root: &Path,
    checked_at: DateTime<Local>,
) -> (ReportDocument, RunSummary) {
    let mut doc = ReportDocument::new();
    append_header(&mut doc, checklist, checked_at);

    let checks: Vec<FileCheck> = checklist
        .files
        .iter()
        .map(|rel| check_file(checklist, root, rel))
        .collect();
    for check in &checks {
        append_file_block(&mut doc, checklist, check);
    }

    let summary = RunSummary::tally(&checks);
    append_summary(&mut doc, &summary);
    (doc, summary)
}

fn append_header(doc: &mut ReportDocument, checklist: &Checklist, checked_at: DateTime<Local>) {
    doc.push(wide_rule());
    doc.push(format!("VERIFICATION REPORT - {}", checklist.project));
    doc.push(wide_rule());
    doc.push(format!("Checked at: {}", checked_at.format("%Y-%m-%d %H:%M:%S")));
    doc.push_blank();
}

fn append_file_block(doc: &mut ReportDocument, checklist: &Checklist, check: &FileCheck) {
    doc.push(file_rule());
    match &check.outcome {
        FileOutcome::Missing { expected_at } => {
            doc.push(format!("[MISSING] FILE NOT FOUND: {}", check.path));
            doc.push(format!("{BLOCK_INDENT}Expected location: {}", expected_at.display()));
            if let Some(note) = checklist.essential_note(check.path) {
                doc.push(format!("{BLOCK_INDENT}{note}"));
            }
        }
        FileOutcome::Found { size, sample } => {
            doc.push(format!("[OK] FILE FOUND: {}", check.path));
            doc.push(format!("{BLOCK_INDENT}Size: {size} bytes"));
            match sample {
                SampleOutcome::Text(lines) => append_sample(doc, lines),
                SampleOutcome::Binary => {
                    doc.push(format!("{BLOCK_INDENT}[INFO] Binary file or non-UTF-8 encoding"));
                }
                SampleOutcome::ReadFailed(message) => {
                    doc.push(format!("{BLOCK_INDENT}[ERROR] Failed to read file: {message}"));
                }
            }
            if let Some(note) = check.heuristic_note {
                doc.push(format!("{BLOCK_INDENT}{note}"));
            }
        }
    }
    doc.push_blank();
}

fn append_sample(doc: &mut ReportDocument, lines: &[String]) {
    let shown = lines.len().min(SAMPLE_MAX_LINES);
    doc.push(format!("{BLOCK_INDENT}Sample ({shown} leading lines):"));
    doc.push(format!("{BLOCK_INDENT}{}", "-".repeat(SAMPLE_RULE_WIDTH)));
    for (index, line) in lines.iter().take(SAMPLE_MAX_LINES).enumerate() {
        doc.push(render_sample_line(index, line));
    }
    if lines.len() > SAMPLE_MAX_LINES {
        doc.push(format!(
            "{BLOCK_INDENT}... ({} lines omitted)",
            lines.len() - SAMPLE_MAX_LINES
        ));
    }
}

fn append_summary(doc: &mut ReportDocument, summary: &RunSummary) {
    doc.push(wide_rule());
    doc.push("SUMMARY:");
    doc.push(format!("Total files checked: {}", summary.total));
    doc.push(format!("[OK] Found: {}", summary.found));
    doc.push(format!("[MISSING] Missing: {}", summary.missing));
    doc.push(format!("Completeness: {:.1}%", summary.completeness()));
    doc.push_blank();
    if summary.missing == 0 {
        doc.push("[SUCCESS] ALL expected files are present!");
        doc.push(format!("{BLOCK_INDENT}You are clear to proceed with the Vercel deploy."));
    } else {
        doc.push("[WARNING] SOME EXPECTED FILES ARE MISSING!");
        doc.push(format!("{BLOCK_INDENT}Review the list above before proceeding."));
    }
    doc.push(wide_rule());
}

fn wide_rule() -> String {
    "=".repeat(REPORT_RULE_WIDTH)
}

fn file_rule() -> String {
    "-".repeat(REPORT_RULE_WIDTH)
}
