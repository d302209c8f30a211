//! Grid decoding and non-max suppression for tiny-YOLO-v2-class detectors.
//!
//! This crate turns the raw output tensor of a fixed-grid, fixed-anchor
//! convolutional detector into a final list of labeled bounding boxes. It is
//! a pure library-level transform: an external inference engine produces a
//! flat `f32` tensor, [`GridDecoder`] expands it into one scored candidate
//! per (grid cell, anchor) pair, and [`Suppressor`] reduces the candidates
//! to non-overlapping detections via greedy NMS.
//!
//! Model loading, camera capture, and rendering stay outside; the
//! [`TensorSource`] trait and [`DetectionPipeline`] provide the seam for
//! wiring an inference backend to the core.
//!
//! # Example
//!
//! ```
//! use yologrid_rs::{DecoderConfig, GridDecoder, Suppressor};
//!
//! let decoder = GridDecoder::new(DecoderConfig::default()).unwrap();
//! let suppressor = Suppressor::new(5, 0.5).unwrap();
//!
//! // One inference frame: 125 channels x 13 x 13 grid.
//! let tensor = vec![0.0f32; 125 * 13 * 13];
//! let candidates = decoder.decode(&tensor).unwrap();
//! let detections = suppressor.suppress(&candidates);
//! assert!(detections.len() <= 5);
//! ```

mod detector;
mod error;
mod integration;

pub use detector::{
    Anchor, BoundingBox, DecoderConfig, GridDecoder, Rect, Suppressor, TINY_YOLO_V2_ANCHORS,
    VOC_LABELS, iou_matrix,
};
pub use error::{DetectionError, PipelineError};
pub use integration::{DecoderConfigBuilder, DetectionPipeline, TensorSource};
