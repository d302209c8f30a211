//! Error types for decoding and suppression.

use thiserror::Error;

/// Errors raised by the decode/suppress core.
///
/// Malformed input is a caller bug, not a transient condition: nothing here
/// is retried internally, and a failed call produces no partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    /// The flat tensor length does not match the declared
    /// `channels x grid_size x grid_size` shape.
    #[error(
        "tensor length mismatch: got {actual} floats, expected {expected} \
         ({channels}x{grid_size}x{grid_size})"
    )]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        channels: usize,
        grid_size: usize,
    },
    /// A parameter is outside its documented domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Error type for the end-to-end detection pipeline.
///
/// Wraps either a failure from the external inference backend or a failure
/// from the decode/suppress core.
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    /// The `TensorSource` backend failed to produce an output tensor.
    #[error("inference backend error: {0}")]
    Source(#[source] E),
    /// The backend output could not be decoded.
    #[error(transparent)]
    Detection(#[from] DetectionError),
}
