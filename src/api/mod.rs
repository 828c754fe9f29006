pub mod client;

pub use client::{ConfigClient, MemoryReport};

/// Failures talking to the device.
///
/// Transport errors are opaque to the caller: a failed save or load is one
/// user-visible outcome, there is no retry, and the in-memory model is left
/// untouched.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
