//! Error types for simd4d operations.
//!
//! The numeric API never fails: NaN and infinity are values, not errors. This
//! module covers the fallible boundary around it, namely checked loads and
//! stores on caller buffers, backend names and component indices.

use thiserror::Error;

/// Errors that can occur at the checked boundary of the vector API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Simd4dError {
    /// A load or store was given a buffer shorter than the lanes it touches.
    #[error("Buffer too small for {operation}: requires {required} elements, got {actual}")]
    BufferTooSmall {
        /// The operation that rejected the buffer.
        operation: &'static str,
        /// The number of elements the operation reads or writes.
        required: usize,
        /// The number of elements the caller provided.
        actual: usize,
    },
    /// A backend name did not match any known backend.
    #[error("Unknown backend: {name} (expected one of avx, sse4, sse2, neon, scalar)")]
    UnknownBackend {
        /// The rejected name.
        name: String,
    },
    /// A component index fell outside of the 8 symbol mix space.
    #[error("Invalid mix component index {index}, expected a value in 0..8")]
    InvalidComponent {
        /// The rejected index.
        index: u8,
    },
    /// Input validation error.
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

/// Result type alias for simd4d operations.
pub type Result<T> = std::result::Result<T, Simd4dError>;

/// Creates a buffer size error.
pub fn buffer_too_small(operation: &'static str, required: usize, actual: usize) -> Simd4dError {
    Simd4dError::BufferTooSmall {
        operation,
        required,
        actual,
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> Simd4dError {
    Simd4dError::ValidationError {
        message: message.into(),
    }
}

/// Fails with [`Simd4dError::BufferTooSmall`] when `actual < required`.
#[inline]
pub(crate) fn ensure_len(operation: &'static str, required: usize, actual: usize) -> Result<()> {
    if actual < required {
        tracing::debug!(operation, required, actual, "rejected undersized buffer");
        return Err(buffer_too_small(operation, required, actual));
    }

    Ok(())
}
