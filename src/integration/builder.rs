//! Builder for assembling decoder configurations.

use crate::detector::{Anchor, DecoderConfig};

/// Fluent builder over [`DecoderConfig`].
///
/// Starts from the tiny-YOLO-v2 VOC defaults; set only the fields that
/// differ for your model.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfigBuilder {
    config: DecoderConfig,
}

impl DecoderConfigBuilder {
    /// Start from the default tiny-YOLO-v2 VOC configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the square output grid.
    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.config.grid_size = grid_size;
        self
    }

    /// Side length of the square inference input image in pixels.
    pub fn image_size(mut self, image_size: usize) -> Self {
        self.config.image_size = image_size;
        self
    }

    /// Anchor priors as `(width, height)` pairs in grid-cell units.
    pub fn anchors<I>(mut self, anchors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Anchor>,
    {
        self.config.anchors = anchors.into_iter().map(Into::into).collect();
        self
    }

    /// Class names in the model's channel order.
    pub fn labels<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Optional decode-time confidence pre-filter (0.0 keeps everything).
    pub fn score_threshold(mut self, score_threshold: f32) -> Self {
        self.config.score_threshold = score_threshold;
        self
    }

    /// Build the final [`DecoderConfig`].
    pub fn build(self) -> DecoderConfig {
        self.config
    }
}
