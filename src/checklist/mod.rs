//! Embedded verification checklist: expected paths, essential-file warnings,
//! and literal content rules for the target project.

mod builtin;

pub use builtin::SISC_SESAU;

/// Extra warning attached to a file whose absence breaks the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EssentialFile {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Warning line appended to the missing-file block.
    pub note: &'static str,
}

/// Literal-substring rule applied to one file's raw content.
///
/// Rules are evaluated in table order and the first rule whose needles all
/// occur in the content wins, so a specific rule must be listed before its
/// fallback. Matching is case-sensitive and never parses the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRule {
    /// Path relative to the project root this rule applies to.
    pub path: &'static str,
    /// Substrings that must all be present for the rule to match.
    pub needles: &'static [&'static str],
    /// Note appended to the file's report block when the rule matches.
    pub note: &'static str,
}

/// Expected-path tables and report identity for one target project.
///
/// The tables are fixed at compile time; passing the checklist into the
/// checking functions (instead of reading module globals) keeps them
/// testable with substitute tables.
#[derive(Debug, Clone, Copy)]
pub struct Checklist {
    /// Project label used in report and console headings.
    pub project: &'static str,
    /// Fixed report file name written into the scan directory.
    pub report_file_name: &'static str,
    /// Files that must exist, relative to the project root.
    pub files: &'static [&'static str],
    /// Directories that must exist, relative to the project root.
    pub folders: &'static [&'static str],
    /// Files whose absence earns an extra warning line.
    pub essential: &'static [EssentialFile],
    /// Content heuristics; the first match per path wins.
    pub content_rules: &'static [ContentRule],
}

impl Checklist {
    /// Warning note for a missing file, when the path is flagged essential.
    pub fn essential_note(&self, path: &str) -> Option<&'static str> {
        self.essential
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.note)
    }

    /// Note of the first content rule for `path` whose needles all occur in
    /// `content`, if any.
    pub fn content_note(&self, path: &str, content: &str) -> Option<&'static str> {
        self.content_rules
            .iter()
            .find(|rule| {
                rule.path == path && rule.needles.iter().all(|needle| content.contains(needle))
            })
            .map(|rule| rule.note)
    }
}
