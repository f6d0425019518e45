use serde::Serialize;

use super::polygon::{BoundingBox, Point};
use crate::dimension::Extent;

/// A cubic Bézier stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cubic {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// A short S-shaped stroke centered on `(x, y)`.
fn stroke(x: i32, y: i32, size: Extent) -> Cubic {
    let half_w = size.width / 2;
    let half_h = size.height / 2;
    Cubic {
        start: Point::new(x - half_w, y),
        control1: Point::new(x, y - half_h),
        control2: Point::new(x, y + half_h),
        end: Point::new(x + half_w, y),
    }
}

/// The four strokes marking a variable-length field: a pair across the left
/// edge of `bbox` and a pair across its right edge.
pub fn break_marks(bbox: &BoundingBox, size: Extent) -> [Cubic; 4] {
    let mid = (bbox.top + bbox.bottom) / 2;
    let offset = size.height / 2;
    [
        stroke(bbox.left, mid - offset, size),
        stroke(bbox.left, mid + offset, size),
        stroke(bbox.right, mid - offset, size),
        stroke(bbox.right, mid + offset, size),
    ]
}
