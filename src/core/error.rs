use thiserror::Error;

/// Failures the viewer can recover from.
///
/// Setup failures (no canvas, no GPU) are not represented here: the page
/// treats them as fatal and reports them through `anyhow` instead.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("point buffer of {len} floats is not a whole number of {stride}-component points")]
    RaggedPointSet { len: usize, stride: usize },

    #[error("surface error: {0}")]
    Surface(String),
}
