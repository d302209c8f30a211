//! Integration module for connecting inference backends with the decode and
//! suppression core.
//!
//! This module provides the trait and utilities for feeding output tensors
//! from any inference engine (ONNX Runtime, WinML, test stubs) through the
//! grid decoder and suppressor.

mod builder;
mod pipeline;
mod source;

pub use builder::DecoderConfigBuilder;
pub use pipeline::DetectionPipeline;
pub use source::TensorSource;
