//! Per-file existence check and content sampling.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::checklist::Checklist;

/// Character budget for recorded read-error descriptions.
const ERROR_DISPLAY_LIMIT: usize = 100;

/// Outcome of sampling one present file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    /// UTF-8 content split on `\n`; empty files sample zero lines.
    Text(Vec<String>),
    /// Content exists but is not valid UTF-8.
    Binary,
    /// Reading failed for a reason other than decoding.
    ReadFailed(String),
}

/// Existence outcome for one expected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Missing {
        /// Absolute location where the file was expected.
        expected_at: PathBuf,
    },
    Found { size: u64, sample: SampleOutcome },
}

/// Result of checking one expected file, rebuilt fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    pub path: &'static str,
    pub outcome: FileOutcome,
    /// Winning content-rule note, when one applies to readable text.
    pub heuristic_note: Option<&'static str>,
}

/// Check a single expected file under `root`.
///
/// Never fails: missing paths, undecodable content, and read errors are all
/// recorded in the returned outcome so one bad file cannot stop the run.
pub fn check_file(checklist: &Checklist, root: &Path, rel: &'static str) -> FileCheck {
    let location = root.join(rel);
    if !location.exists() {
        return FileCheck {
            path: rel,
            outcome: FileOutcome::Missing {
                expected_at: location,
            },
            heuristic_note: None,
        };
    }

    let size = match fs::metadata(&location) {
        Ok(meta) => meta.len(),
        Err(err) => {
            return FileCheck {
                path: rel,
                outcome: FileOutcome::Found {
                    size: 0,
                    sample: SampleOutcome::ReadFailed(truncate_chars(
                        &err.to_string(),
                        ERROR_DISPLAY_LIMIT,
                    )),
                },
                heuristic_note: None,
            };
        }
    };

    let (sample, heuristic_note) = match fs::read(&location) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => {
                let note = checklist.content_note(rel, &text);
                (SampleOutcome::Text(split_sample_lines(&text)), note)
            }
            Err(_) => (SampleOutcome::Binary, None),
        },
        Err(err) => (
            SampleOutcome::ReadFailed(truncate_chars(&err.to_string(), ERROR_DISPLAY_LIMIT)),
            None,
        ),
    };

    FileCheck {
        path: rel,
        outcome: FileOutcome::Found { size, sample },
        heuristic_note,
    }
}

/// Split on `\n` keeping trailing empty segments; empty content has no lines.
fn split_sample_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::to_string).collect()
}

fn truncate_chars(message: &str, limit: usize) -> String {
    message.chars().take(limit).collect()
}
