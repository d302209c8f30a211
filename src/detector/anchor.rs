//! Anchor box priors.

/// A fixed reference box shape the model predicts offsets and scales against.
///
/// Width and height are in grid-cell units, as trained into the model. The
/// anchor table is a constant of the model, never derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Width prior in grid-cell units
    pub width: f32,
    /// Height prior in grid-cell units
    pub height: f32,
}

impl Anchor {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Anchor {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// The five anchor priors of the tiny-yolov2-1.2 ONNX model.
pub const TINY_YOLO_V2_ANCHORS: [Anchor; 5] = [
    Anchor { width: 1.08, height: 1.19 },
    Anchor { width: 3.42, height: 4.41 },
    Anchor { width: 6.63, height: 11.38 },
    Anchor { width: 9.42, height: 5.11 },
    Anchor { width: 16.62, height: 10.52 },
];

/// The 20 Pascal VOC class names tiny YOLO v2 was trained on, in channel order.
pub const VOC_LABELS: [&str; 20] = [
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "pottedplant",
    "sheep",
    "sofa",
    "train",
    "tvmonitor",
];
