//! Append-only line buffer for the verification report.

/// Ordered sequence of report lines, joined once when the report is saved.
///
/// Building the report as discrete lines keeps the terminal tail echo a
/// simple slice of the same data that lands in the file.
#[derive(Debug, Default)]
pub struct ReportDocument {
    lines: Vec<String>,
}

impl ReportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append an empty separator line.
    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Last `n` lines, or every line when fewer exist.
    pub fn tail(&self, n: usize) -> &[String] {
        let start = self.lines.len().saturating_sub(n);
        &self.lines[start..]
    }

    /// Join all lines with `\n` for writing; no trailing newline is added.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}
