//! Telemetry initialization and the verification run span helper.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use crate::report::RunSummary;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a verification run.
pub struct ScanSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl ScanSpan {
    /// Start a run span.
    pub fn start(run_id: Uuid) -> Self {
        let span = info_span!(
            target: "sisc_preflight::scan",
            "verification_run",
            %run_id
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    /// Close the span while recording counters and completion info.
    pub fn finish(self, summary: &RunSummary, report_saved: bool) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "sisc_preflight::scan",
            run_id = %self.run_id,
            found = summary.found,
            missing = summary.missing,
            report_saved = report_saved,
            elapsed_ms = elapsed_ms,
            "Completed verification run"
        );
    }
}
