//! Rendering of sampled file lines for the report.

/// Leading lines included in each file's sample block.
pub const SAMPLE_MAX_LINES: usize = 15;
/// Display budget per sampled line, in characters.
pub const LINE_DISPLAY_LIMIT: usize = 100;
/// Marker appended when a sampled line exceeds the display budget.
pub const TRUNCATION_MARKER: &str = "...";

const TAB_REPLACEMENT: &str = "    ";

/// Render one sampled line with its 1-based number.
///
/// Carriage returns are dropped and tabs expanded before the display budget
/// is applied, so the budget counts the characters the reader actually sees.
pub fn render_sample_line(index: usize, raw: &str) -> String {
    format!("   {:>3}: {}", index + 1, clip(&normalize(raw)))
}

/// Strip carriage returns and expand tabs to four spaces.
fn normalize(raw: &str) -> String {
    raw.replace('\r', "").replace('\t', TAB_REPLACEMENT)
}

/// Truncate to the display budget, counting characters rather than bytes.
fn clip(line: &str) -> String {
    if line.chars().count() <= LINE_DISPLAY_LIMIT {
        return line.to_string();
    }
    let kept: String = line.chars().take(LINE_DISPLAY_LIMIT).collect();
    format!("{kept}{TRUNCATION_MARKER}")
}
