//! Calibration and measurement arithmetic: pixel geometry to real-world
//! units, plus shape-preserving polygon edits.
//!
//! Everything here is pure and operates on any polygon, auto-detected or
//! hand-drawn; there is no dependency on the segmentation pipeline. The
//! meters-per-pixel convention is load-bearing: conversions always multiply
//! a pixel measurement by the scale (or its square for area), never divide.

use kurbo::Point;

/// Euclidean distance between two points, in pixel space.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Midpoint of a segment.
pub fn midpoint(p1: Point, p2: Point) -> Point {
    p1.midpoint(p2)
}

/// Polygon area in square meters via the shoelace formula.
///
/// The vertex order is the drawing order; the pairing wraps around, so a
/// coincident first/last point is harmless. `scale` is meters per pixel.
/// Fewer than 3 points is a degenerate selection with zero area, not an
/// error.
pub fn polygon_area(points: &[Point], scale: f64) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let signed: f64 = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            points[i].x * points[j].y - points[j].x * points[i].y
        })
        .sum();
    (signed / 2.0).abs() * scale * scale
}

/// Meters per pixel from a reference segment of known real length.
///
/// Returns the 0.0 "undetermined" sentinel when the pixel distance is zero;
/// callers must check before storing (or go through
/// [`CalibrationScale::from_reference`], which cannot store the sentinel).
pub fn derive_scale(pixel_distance: f64, real_meters: f64) -> f64 {
    if pixel_distance == 0.0 {
        return 0.0;
    }
    real_meters / pixel_distance
}

/// Stretch or shrink the segment `index -> index + 1` to
/// `new_length_pixels`, editing a polygon by typed length instead of by
/// dragging.
///
/// The segment's second endpoint moves along the segment direction, and
/// every subsequent point is rigidly translated by the same delta: the tail
/// of the chain keeps all of its angles and lengths and only shifts as a
/// body. Points up to and including the segment's first endpoint are
/// unchanged. An out-of-range index or a zero-length segment is a no-op
/// returning the input unchanged. Always returns a fresh polygon (undo stays
/// trivial for the caller).
pub fn resize_segment(points: &[Point], index: usize, new_length_pixels: f64) -> Vec<Point> {
    if index + 1 >= points.len() {
        return points.to_vec();
    }

    let p1 = points[index];
    let p2 = points[index + 1];
    let current = p1.distance(p2);
    if current == 0.0 {
        return points.to_vec();
    }

    let ratio = new_length_pixels / current;
    let v = p2 - p1;
    let delta = v * ratio - v;

    points
        .iter()
        .enumerate()
        .map(|(i, &p)| if i > index { p + delta } else { p })
        .collect()
}

/// A validated meters-per-pixel conversion factor.
///
/// Session-scoped in the calling application and mutated only by an explicit
/// calibration or length-edit action. Construction rejects non-positive and
/// non-finite values, so the undetermined sentinel can never be stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationScale(f64);

impl CalibrationScale {
    /// `None` unless `meters_per_pixel` is finite and positive.
    pub fn new(meters_per_pixel: f64) -> Option<Self> {
        (meters_per_pixel.is_finite() && meters_per_pixel > 0.0)
            .then_some(Self(meters_per_pixel))
    }

    /// Derive from a two-point reference gesture with a known real length.
    pub fn from_reference(pixel_distance: f64, real_meters: f64) -> Option<Self> {
        Self::new(derive_scale(pixel_distance, real_meters))
    }

    pub fn meters_per_pixel(self) -> f64 {
        self.0
    }

    /// Convert a pixel length to meters.
    pub fn length_m(self, pixels: f64) -> f64 {
        pixels * self.0
    }

    /// Polygon area in square meters.
    pub fn area_m2(self, points: &[Point]) -> f64 {
        polygon_area(points, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn square_area_at_centimeter_scale() {
        // 100px square at 0.01 m/px is exactly one square meter.
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        assert!((polygon_area(&square, 0.01) - 1.0).abs() < EPS);
    }

    #[test]
    fn right_triangle_area() {
        let triangle = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(0.0, 100.0),
        ];
        assert!((polygon_area(&triangle, 0.01) - 0.5).abs() < EPS);
    }

    #[test]
    fn area_is_invariant_to_winding() {
        let poly = vec![
            Point::new(1.0, 2.0),
            Point::new(8.0, 1.0),
            Point::new(9.0, 7.0),
            Point::new(3.0, 9.0),
        ];
        let reversed: Vec<Point> = poly.iter().rev().copied().collect();
        assert!((polygon_area(&poly, 1.0) - polygon_area(&reversed, 1.0)).abs() < EPS);
    }

    #[test]
    fn degenerate_selections_have_zero_area() {
        assert_eq!(polygon_area(&[], 1.0), 0.0);
        let two = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        assert_eq!(polygon_area(&two, 1.0), 0.0);
    }

    #[test]
    fn scale_derivation_inverts() {
        for (px, m) in [(200.0, 3.5), (1.0, 0.01), (733.0, 12.0)] {
            let scale = derive_scale(px, m);
            assert!((scale * px - m).abs() < EPS);
        }
    }

    #[test]
    fn zero_reference_length_is_the_sentinel() {
        let scale = derive_scale(0.0, 4.2);
        assert_eq!(scale, 0.0);
        assert!(scale.is_finite());
    }

    #[test]
    fn calibration_scale_rejects_invalid_values() {
        assert!(CalibrationScale::new(0.0).is_none());
        assert!(CalibrationScale::new(-0.5).is_none());
        assert!(CalibrationScale::new(f64::NAN).is_none());
        assert!(CalibrationScale::new(f64::INFINITY).is_none());
        assert!(CalibrationScale::from_reference(0.0, 3.0).is_none());
        let scale = CalibrationScale::from_reference(300.0, 3.0).unwrap();
        assert!((scale.meters_per_pixel() - 0.01).abs() < EPS);
        assert!((scale.length_m(250.0) - 2.5).abs() < EPS);
    }

    #[test]
    fn midpoint_is_the_coordinate_mean() {
        let m = midpoint(Point::new(2.0, 4.0), Point::new(6.0, 10.0));
        assert_eq!(m, Point::new(4.0, 7.0));
    }

    #[test]
    fn resize_preserves_the_tail_shape() {
        let chain = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 8.0),
            Point::new(4.0, 12.0),
        ];
        let resized = resize_segment(&chain, 0, 25.0);

        // Requested length on the edited segment.
        assert!((distance(resized[0], resized[1]) - 25.0).abs() < EPS);
        // Tail lengths unchanged.
        assert!((distance(resized[1], resized[2]) - distance(chain[1], chain[2])).abs() < EPS);
        assert!((distance(resized[2], resized[3]) - distance(chain[2], chain[3])).abs() < EPS);
        // Tail angle at point 2 unchanged: compare direction vectors.
        let before = (chain[3] - chain[2]).normalize();
        let after = (resized[3] - resized[2]).normalize();
        assert!((before.x - after.x).abs() < EPS && (before.y - after.y).abs() < EPS);
        // Everything after the edit point moved by one rigid delta.
        let delta = resized[1] - chain[1];
        assert!(((resized[3] - chain[3]) - delta).hypot() < EPS);
        // The segment start did not move.
        assert_eq!(resized[0], chain[0]);
    }

    #[test]
    fn resize_no_op_conditions() {
        let chain = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        // Out-of-range index.
        assert_eq!(resize_segment(&chain, 2, 10.0), chain);
        assert_eq!(resize_segment(&chain, 99, 10.0), chain);
        // Zero-length current segment.
        assert_eq!(resize_segment(&chain, 0, 10.0), chain);
    }
}
