//! Error types for the furniture viewer
//!
//! This module defines the error types used throughout the viewer,
//! including geometry validation, camera and framing configuration, and model loading.

use std::fmt;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Viewer errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed vertex data (empty buffer, truncated triple, non-finite value)
    InvalidGeometry(String),

    /// Vertical field of view outside the open range (0°, 180°)
    InvalidFieldOfView(f32),

    /// Framing settings that would break `0 < near < far` or the camera pose
    InvalidFramingConfig(String),

    /// Unknown scene node (stale key, missing name, wrong node kind)
    InvalidObject(String),

    /// The asynchronous model load reported a failure
    LoadFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            Error::InvalidFieldOfView(fov) => {
                write!(f, "Invalid field of view: {} degrees (expected 0 < fov < 180)", fov)
            }
            Error::InvalidFramingConfig(msg) => write!(f, "Invalid framing config: {}", msg),
            Error::InvalidObject(msg) => write!(f, "Invalid object: {}", msg),
            Error::LoadFailed(msg) => write!(f, "Model load failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
