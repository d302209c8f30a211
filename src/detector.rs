mod activation;
mod anchor;
mod bbox;
mod grid_decoder;
mod nms;
mod rect;

pub use anchor::{Anchor, TINY_YOLO_V2_ANCHORS, VOC_LABELS};
pub use bbox::BoundingBox;
pub use grid_decoder::{DecoderConfig, GridDecoder};
pub use nms::Suppressor;
pub use rect::{Rect, iou_matrix};
