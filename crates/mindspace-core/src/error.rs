//! Error types for mindspace-core.
//!
//! One top-level [`MindspaceError`] with per-concern sub-errors folded in via
//! `From` implementations. Library code never panics; every fallible path
//! returns [`Result`] and propagates with `?`.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MindspaceError>;

/// Top-level unified error type for the mindspace library.
#[derive(Debug, Error)]
pub enum MindspaceError {
    /// Invalid construction-time configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The external reflection backend failed.
    ///
    /// The meta-cognition engine recovers from this locally (it substitutes
    /// a placeholder and continues); the variant exists for callers that
    /// drive a [`crate::traits::ReflectionGenerator`] directly.
    #[error("reflection error: {0}")]
    Reflection(#[from] ReflectionError),

    /// Input data out of its allowed range (for example a salience outside
    /// `[0, 1]`).
    #[error("validation error: {0}")]
    Validation(String),
}

/// Construction-time configuration errors.
///
/// The arbitration and recursion engines reject invalid parameters up front
/// rather than misbehaving later.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("workspace capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("decay rate must be in [0, 1), got {0}")]
    InvalidDecayRate(f32),

    #[error("competition threshold must be in [0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("activation floor must be in [0, 1), got {0}")]
    InvalidActivationFloor(f32),

    #[error("working memory capacity must be at least 1, got {0}")]
    InvalidMemoryCapacity(usize),

    #[error("consciousness stream capacity must be at least 1, got {0}")]
    InvalidStreamCapacity(usize),
}

/// Failures reported by an external reflection backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReflectionError {
    /// The backend could not be reached or refused the request.
    #[error("reflection backend unavailable: {0}")]
    Backend(String),

    /// The backend answered with empty text.
    #[error("reflection backend returned empty output")]
    EmptyOutput,
}
