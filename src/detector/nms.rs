//! Greedy non-max suppression over decoded candidates.

use crate::detector::bbox::BoundingBox;
use crate::error::DetectionError;

/// Reduces an unordered candidate list to the highest-confidence
/// non-overlapping detections.
///
/// Suppression is label-agnostic: a kept box eliminates every remaining
/// candidate it overlaps past the threshold, even across class labels. This
/// global single-pass policy matches the reference detector and is covered
/// by tests; switch to a per-class grouping upstream if that is ever wanted.
#[derive(Debug, Clone)]
pub struct Suppressor {
    max_results: usize,
    iou_threshold: f32,
}

impl Suppressor {
    /// Create a suppressor keeping at most `max_results` boxes, suppressing
    /// candidates whose IoU with a kept box reaches `iou_threshold`.
    ///
    /// Fails with [`DetectionError::InvalidArgument`] when `iou_threshold`
    /// is outside [0, 1].
    pub fn new(max_results: usize, iou_threshold: f32) -> Result<Self, DetectionError> {
        if !(0.0..=1.0).contains(&iou_threshold) {
            return Err(DetectionError::InvalidArgument(
                "iou_threshold must be in [0, 1]",
            ));
        }
        Ok(Self {
            max_results,
            iou_threshold,
        })
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn iou_threshold(&self) -> f32 {
        self.iou_threshold
    }

    /// Run greedy NMS over `candidates` and return the survivors in
    /// descending-confidence order.
    ///
    /// Candidates are ranked by confidence with a stable sort, so equal
    /// scores keep their insertion order. The working set is an index array
    /// with a suppressed mask, compacted once at the end; the input slice is
    /// never mutated and the returned boxes are fresh clones.
    pub fn suppress(&self, candidates: &[BoundingBox]) -> Vec<BoundingBox> {
        if candidates.is_empty() || self.max_results == 0 {
            return Vec::new();
        }

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| {
            candidates[b]
                .confidence
                .partial_cmp(&candidates[a].confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut suppressed = vec![false; candidates.len()];
        let mut kept: Vec<usize> = Vec::new();

        for pos in 0..order.len() {
            let idx = order[pos];
            if suppressed[idx] {
                continue;
            }
            kept.push(idx);
            if kept.len() == self.max_results {
                break;
            }
            for &other in &order[pos + 1..] {
                if !suppressed[other]
                    && candidates[idx].iou(&candidates[other]) >= self.iou_threshold
                {
                    suppressed[other] = true;
                }
            }
        }

        kept.into_iter().map(|i| candidates[i].clone()).collect()
    }
}
