//! Axis-aligned rectangle geometry for bounding boxes.

use ndarray::Array2;

/// Bounding box rectangle in pixel units.
///
/// Stored as TLWH (top-left x, top-left y, width, height); constructors are
/// provided for the other formats the pipeline touches:
/// - TLBR: Top-Left X, Top-Left Y, Bottom-Right X, Bottom-Right Y
/// - CXCYWH: Center X, Center Y, Width, Height (the decoder's native output)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    /// Create a Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from corner coordinates (TLBR format).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Create a Rect from a center point and dimensions (CXCYWH format).
    #[inline]
    pub fn from_cxcywh(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Corner coordinates: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Area of the rectangle.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Intersection over Union with another rectangle.
    ///
    /// A non-positive intersection yields 0.0, as does any pairing with a
    /// degenerate zero-area rectangle. Always in [0, 1].
    pub fn iou(&self, other: &Rect) -> f32 {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        let inter_width = (x2 - x1).max(0.0);
        let inter_height = (y2 - y1).max(0.0);
        let inter_area = inter_width * inter_height;

        let union_area = self.area() + other.area() - inter_area;

        if union_area > 0.0 {
            inter_area / union_area
        } else {
            0.0
        }
    }
}

/// Pairwise IoU matrix between two sets of rectangles.
///
/// Returns a matrix of shape (M, N) where M is the length of `rects_a`
/// and N is the length of `rects_b`.
pub fn iou_matrix(rects_a: &[Rect], rects_b: &[Rect]) -> Array2<f32> {
    let mut ious = Array2::zeros((rects_a.len(), rects_b.len()));
    for (i, a) in rects_a.iter().enumerate() {
        for (j, b) in rects_b.iter().enumerate() {
            ious[[i, j]] = a.iou(b);
        }
    }
    ious
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_round_trips() {
        let r = Rect::from_tlbr(10.0, 20.0, 50.0, 80.0);
        assert_eq!(r.width, 40.0);
        assert_eq!(r.height, 60.0);
        assert_eq!(r.to_tlbr(), [10.0, 20.0, 50.0, 80.0]);

        let c = Rect::from_cxcywh(30.0, 50.0, 40.0, 60.0);
        assert_eq!(c, r);
        assert_eq!(c.center(), (30.0, 50.0));
    }

    #[test]
    fn test_iou_identical() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!((r.iou(&r) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_partial_overlap() {
        // Unit-offset 10x10 squares: intersection 81, union 119.
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(1.0, 1.0, 10.0, 10.0);
        assert!((a.iou(&b) - 81.0 / 119.0).abs() < 1e-6);
        assert!((b.iou(&a) - 81.0 / 119.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_zero_area_defined() {
        let degenerate = Rect::new(5.0, 5.0, 0.0, 0.0);
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(degenerate.iou(&a), 0.0);
        assert_eq!(degenerate.iou(&degenerate), 0.0);
    }

    #[test]
    fn test_iou_matrix_shape_and_values() {
        let a = vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(100.0, 100.0, 10.0, 10.0),
        ];
        let b = vec![Rect::new(0.0, 0.0, 10.0, 10.0)];
        let m = iou_matrix(&a, &b);
        assert_eq!(m.dim(), (2, 1));
        assert!((m[[0, 0]] - 1.0).abs() < 1e-6);
        assert_eq!(m[[1, 0]], 0.0);
    }
}
