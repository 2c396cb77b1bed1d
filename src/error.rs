use thiserror::Error;

/// The two failure modes the monitor can hit.
///
/// Metrics failures are recoverable mid-run (the loop keeps the previous
/// frame and retries next tick); display failures are always fatal.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("metrics unavailable: {0}")]
    MetricsUnavailable(String),

    #[error("display unavailable: {source}")]
    DisplayUnavailable { source: std::io::Error },
}
