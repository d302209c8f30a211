//! Decoded detection value type.

use crate::detector::rect::Rect;

/// One decoded detection: a labeled, scored bounding box.
///
/// Instances are created by the decoder for a single frame and are never
/// mutated afterwards; suppression only filters the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    /// Box position and extent in pixel units of the inference input image
    pub rect: Rect,
    /// Objectness multiplied by the top class probability, in [0, 1]
    pub confidence: f32,
    /// Index of the most probable class in the configured label table
    pub class_id: usize,
    /// Name of the most probable class
    pub label: String,
    /// Full per-class softmax probability vector at decode time,
    /// retained for inspection
    pub class_probs: Vec<f32>,
}

impl BoundingBox {
    pub fn new(rect: Rect, confidence: f32, class_id: usize, label: impl Into<String>) -> Self {
        Self {
            rect,
            confidence,
            class_id,
            label: label.into(),
            class_probs: Vec::new(),
        }
    }

    pub fn with_class_probs(mut self, class_probs: Vec<f32>) -> Self {
        self.class_probs = class_probs;
        self
    }

    /// Intersection over Union with another detection's box.
    #[inline]
    pub fn iou(&self, other: &BoundingBox) -> f32 {
        self.rect.iou(&other.rect)
    }
}
