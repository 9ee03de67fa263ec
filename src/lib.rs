//! Library crate root re-exporting the checklist and report modules.

pub mod checklist;
pub mod cli;
pub mod errors;
pub mod report;
pub mod telemetry;
