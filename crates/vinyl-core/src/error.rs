use thiserror::Error;

/// Errors surfaced by the pure core. Most paths degrade to defaults instead;
/// these only cover inputs the caller handed over in an unusable shape.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("pixel buffer length {0} is not a multiple of 4")]
    RaggedPixels(usize),
    #[error("unknown waveform '{0}'")]
    UnknownWaveform(String),
    #[error("unknown time range '{0}'")]
    UnknownTimeRange(String),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
