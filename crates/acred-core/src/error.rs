//! # Error Types — Foundational Failures
//!
//! Errors for the foundational layer. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations. Domain-level
//! failures (authorization, validation, state) live in `acred-registry`;
//! this crate only reports failures of its own primitives.

use thiserror::Error;

/// Errors raised by the foundational types.
#[derive(Error, Debug)]
pub enum AcredError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A ledger address string could not be parsed.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A digest string could not be parsed.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    /// A timestamp string or epoch value could not be parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Digest preimages must use strings or integers.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
