use thiserror::Error;

/// Errors surfaced at the host boundary. Inside the tick loop nothing
/// propagates; the agent degrades to a neutral command instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("trajectory sample {index} does not strictly increase in time")]
    NonMonotonicTrajectory { index: usize },

    #[error("telemetry contains a non-finite value in {field}")]
    BadTelemetry { field: &'static str },
}

pub type Result<T> = std::result::Result<T, CoreError>;
