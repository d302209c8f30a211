//! DetectionPipeline for combining inference with decode and suppression.

use crate::detector::{BoundingBox, GridDecoder, Suppressor};
use crate::error::PipelineError;

use super::TensorSource;

/// End-to-end per-frame pipeline: inference, grid decode, NMS.
///
/// Bundles any [`TensorSource`] with a [`GridDecoder`] and a [`Suppressor`]
/// so a caller can go from a raw frame to a final box list in one call. A
/// call either fully succeeds or fails with no partial output; the expected
/// caller response to a failure is to skip rendering that frame.
pub struct DetectionPipeline<S: TensorSource> {
    source: S,
    decoder: GridDecoder,
    suppressor: Suppressor,
}

impl<S: TensorSource> DetectionPipeline<S> {
    /// Create a pipeline from an inference source and configured stages.
    pub fn new(source: S, decoder: GridDecoder, suppressor: Suppressor) -> Self {
        Self {
            source,
            decoder,
            suppressor,
        }
    }

    /// Process a single frame and return the final detections, ordered by
    /// descending confidence.
    pub fn process_frame(
        &mut self,
        frame: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<BoundingBox>, PipelineError<S::Error>> {
        let tensor = self
            .source
            .infer(frame, width, height)
            .map_err(PipelineError::Source)?;
        let candidates = self.decoder.decode(&tensor)?;
        Ok(self.suppressor.suppress(&candidates))
    }

    /// Get a reference to the underlying inference source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying inference source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the decoder stage.
    pub fn decoder(&self) -> &GridDecoder {
        &self.decoder
    }

    /// Get a reference to the suppression stage.
    pub fn suppressor(&self) -> &Suppressor {
        &self.suppressor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{Anchor, DecoderConfig};
    use crate::error::DetectionError;

    struct MockEngine {
        tensor: Vec<f32>,
    }

    impl TensorSource for MockEngine {
        type Error = std::convert::Infallible;

        fn infer(
            &mut self,
            _frame: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<f32>, Self::Error> {
            Ok(self.tensor.clone())
        }
    }

    fn stage_config() -> DecoderConfig {
        DecoderConfig {
            grid_size: 2,
            image_size: 32,
            anchors: vec![Anchor::new(1.0, 1.0)],
            labels: vec!["cat".into(), "dog".into()],
            score_threshold: 0.0,
        }
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let config = stage_config();
        let source = MockEngine {
            tensor: vec![0.0; config.tensor_len()],
        };
        let decoder = GridDecoder::new(config).unwrap();
        let suppressor = Suppressor::new(2, 0.5).unwrap();

        let mut pipeline = DetectionPipeline::new(source, decoder, suppressor);
        let boxes = pipeline.process_frame(&[], 416, 416).unwrap();

        // Four uniform candidates, capped at two by the suppressor.
        assert_eq!(boxes.len(), 2);
    }

    #[test]
    fn test_pipeline_surfaces_decode_failure() {
        let source = MockEngine {
            tensor: vec![0.0; 3],
        };
        let decoder = GridDecoder::new(stage_config()).unwrap();
        let suppressor = Suppressor::new(5, 0.5).unwrap();

        let mut pipeline = DetectionPipeline::new(source, decoder, suppressor);
        let err = pipeline.process_frame(&[], 416, 416).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Detection(DetectionError::ShapeMismatch { .. })
        ));
    }
}
