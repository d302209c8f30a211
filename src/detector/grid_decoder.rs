//! Decoding of the raw grid-detector output tensor into candidate boxes.

use ndarray::ArrayView3;

use crate::detector::activation::{argmax, sigmoid, softmax};
use crate::detector::anchor::{Anchor, TINY_YOLO_V2_ANCHORS, VOC_LABELS};
use crate::detector::bbox::BoundingBox;
use crate::detector::rect::Rect;
use crate::error::DetectionError;

/// Model constants the decoder needs to interpret the output tensor.
///
/// All values are fixed properties of the trained model, supplied once at
/// construction and never changed at runtime.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Side length of the square output grid (e.g. 13)
    pub grid_size: usize,
    /// Side length of the square inference input image in pixels (e.g. 416)
    pub image_size: usize,
    /// Anchor priors, one predicted box per anchor per grid cell
    pub anchors: Vec<Anchor>,
    /// Class names in the model's channel order
    pub labels: Vec<String>,
    /// Minimum confidence for a candidate to be emitted at decode time.
    ///
    /// Defaults to 0.0: every (cell, anchor) candidate is emitted and
    /// filtering is left entirely to suppression, matching the reference
    /// behavior. Raise it to pre-filter low-confidence noise before NMS.
    pub score_threshold: f32,
}

impl Default for DecoderConfig {
    /// The tiny-yolov2-1.2 VOC model: 13x13 grid, 416x416 input,
    /// 5 anchors, 20 classes.
    fn default() -> Self {
        Self {
            grid_size: 13,
            image_size: 416,
            anchors: TINY_YOLO_V2_ANCHORS.to_vec(),
            labels: VOC_LABELS.iter().map(|s| s.to_string()).collect(),
            score_threshold: 0.0,
        }
    }
}

impl DecoderConfig {
    /// Channels per (cell, anchor) prediction: `tx ty tw th to` plus one
    /// logit per class.
    #[inline]
    pub fn box_channels(&self) -> usize {
        5 + self.labels.len()
    }

    /// Total tensor channels: `anchors * (5 + classes)`.
    #[inline]
    pub fn channels(&self) -> usize {
        self.anchors.len() * self.box_channels()
    }

    /// Expected flat tensor length: `channels * grid_size^2`.
    #[inline]
    pub fn tensor_len(&self) -> usize {
        self.channels() * self.grid_size * self.grid_size
    }
}

/// Decodes a flat channel-major float tensor into candidate bounding boxes.
///
/// One candidate is produced per (grid cell, anchor) pair. The decoder is a
/// pure transform: it holds no per-frame state and may be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct GridDecoder {
    config: DecoderConfig,
}

impl GridDecoder {
    pub fn new(config: DecoderConfig) -> Result<Self, DetectionError> {
        if config.grid_size == 0 {
            return Err(DetectionError::InvalidArgument("grid_size must be positive"));
        }
        if config.image_size == 0 {
            return Err(DetectionError::InvalidArgument("image_size must be positive"));
        }
        if config.anchors.is_empty() {
            return Err(DetectionError::InvalidArgument("anchors must not be empty"));
        }
        if config.labels.is_empty() {
            return Err(DetectionError::InvalidArgument("labels must not be empty"));
        }
        if !(0.0..=1.0).contains(&config.score_threshold) {
            return Err(DetectionError::InvalidArgument(
                "score_threshold must be in [0, 1]",
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one output tensor into candidate boxes.
    ///
    /// `tensor` is the detector's raw output, a flat channel-major view of
    /// shape `channels x grid_size x grid_size` where the channel index
    /// varies slowest: element `(ch, row, col)` sits at flat offset
    /// `ch * S^2 + row * S + col`. Fails with
    /// [`DetectionError::ShapeMismatch`] if the length does not match.
    ///
    /// Box geometry follows the standard anchor parameterization: sigmoid
    /// center offsets within the cell, exponential width/height scales
    /// against the anchor prior, both mapped to pixel units. Confidence is
    /// the sigmoid objectness times the top softmax class probability.
    ///
    /// Candidates come out in row-major cell order with anchors innermost,
    /// so identical input always yields an identical list.
    pub fn decode(&self, tensor: &[f32]) -> Result<Vec<BoundingBox>, DetectionError> {
        let s = self.config.grid_size;
        let channels = self.config.channels();

        let view = ArrayView3::from_shape((channels, s, s), tensor).map_err(|_| {
            DetectionError::ShapeMismatch {
                expected: self.config.tensor_len(),
                actual: tensor.len(),
                channels,
                grid_size: s,
            }
        })?;

        let cell = self.config.image_size as f32 / s as f32;
        let num_classes = self.config.labels.len();
        let box_channels = self.config.box_channels();

        let mut boxes = Vec::with_capacity(s * s * self.config.anchors.len());
        for row in 0..s {
            for col in 0..s {
                for (a, anchor) in self.config.anchors.iter().enumerate() {
                    let base = a * box_channels;
                    let tx = view[[base, row, col]];
                    let ty = view[[base + 1, row, col]];
                    let tw = view[[base + 2, row, col]];
                    let th = view[[base + 3, row, col]];
                    let to = view[[base + 4, row, col]];

                    let mut probs: Vec<f32> = (0..num_classes)
                        .map(|c| view[[base + 5 + c, row, col]])
                        .collect();
                    softmax(&mut probs);
                    let class_id = argmax(&probs);

                    let confidence = sigmoid(to) * probs[class_id];
                    if confidence < self.config.score_threshold {
                        continue;
                    }

                    let cx = (col as f32 + sigmoid(tx)) * cell;
                    let cy = (row as f32 + sigmoid(ty)) * cell;
                    let width = tw.exp() * anchor.width * cell;
                    let height = th.exp() * anchor.height * cell;

                    boxes.push(
                        BoundingBox::new(
                            Rect::from_cxcywh(cx, cy, width, height),
                            confidence,
                            class_id,
                            self.config.labels[class_id].as_str(),
                        )
                        .with_class_probs(probs),
                    );
                }
            }
        }
        Ok(boxes)
    }
}
