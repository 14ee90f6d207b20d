//! roomtrace: seeded room-boundary detection on raster floorplans.
//!
//! Point at a pixel inside a room and get back a closed polygon
//! approximating the room boundary, plus the calibration arithmetic to turn
//! pixel geometry into real-world measurements once a meters-per-pixel
//! scale is known.
//!
//! # Example
//!
//! ```no_run
//! use roomtrace::{detect_region, DetectConfig, PixelBuffer};
//!
//! let img = image::open("floorplan.png")?.into_rgba8();
//! let buffer = PixelBuffer::from_image(&img);
//! let polygon = detect_region(&buffer, (120, 80), &DetectConfig::default());
//! # Ok::<(), image::ImageError>(())
//! ```

#![forbid(unsafe_code)]

mod buffer;
mod config;
mod contour;
mod segment;
mod simplify;

pub mod calibrate;
pub mod error;
pub mod render;

// Re-export kurbo so downstream users get the same Point type used in
// returned polygons.
pub use kurbo;
pub use kurbo::Point;

pub use buffer::PixelBuffer;
pub use config::DetectConfig;
pub use contour::trace_contour;
pub use error::DetectError;
pub use segment::{segment_region, Mask, MaskState};
pub use simplify::simplify_polygon;

/// Detect the room boundary around `seed` as a simplified closed polygon in
/// pixel coordinates.
///
/// Composition of the three pipeline stages: flood-fill segmentation,
/// Moore-neighbor contour tracing, RDP simplification. The stages are
/// synchronous and side-effect-free; the mask lives only inside this call.
/// An empty or degenerate result means "nothing detected" (seed out of
/// bounds, isolated seed pixel) and is not an error.
pub fn detect_region(buffer: &PixelBuffer, seed: (i32, i32), config: &DetectConfig) -> Vec<Point> {
    let mask = segment_region(buffer, seed, config);
    let chain = trace_contour(&mask);
    simplify_polygon(&chain, config.tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibrate::polygon_area;

    /// 200x200 light background with a uniform dark 50x50 square.
    fn synthetic_floorplan() -> PixelBuffer {
        let mut data = Vec::with_capacity(200 * 200 * 4);
        for y in 0..200i32 {
            for x in 0..200i32 {
                let v = if (75..125).contains(&x) && (75..125).contains(&y) {
                    10
                } else {
                    200
                };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::from_rgba(200, 200, data).unwrap()
    }

    #[test]
    fn detects_a_square_room_end_to_end() {
        let buffer = synthetic_floorplan();
        let config = DetectConfig::default();
        let polygon = detect_region(&buffer, (100, 100), &config);

        // A square room simplifies to its corners (the traced chain is
        // closed, so the start vertex may appear twice).
        assert!(polygon.len() >= 4 && polygon.len() <= 6, "got {} vertices", polygon.len());

        // Area within 5% of the 50x50 pixel region at scale 1.
        let area = polygon_area(&polygon, 1.0);
        assert!(
            (area - 2500.0).abs() / 2500.0 < 0.05,
            "area {area} not within 5% of 2500"
        );

        // All vertices lie on the dark square's rim.
        for p in &polygon {
            assert!((74.0..126.0).contains(&p.x) && (74.0..126.0).contains(&p.y));
        }
    }

    #[test]
    fn out_of_bounds_seed_detects_nothing() {
        let buffer = synthetic_floorplan();
        let polygon = detect_region(&buffer, (500, 500), &DetectConfig::default());
        assert!(polygon.is_empty());
    }

    #[test]
    fn isolated_seed_yields_a_degenerate_polygon() {
        // Seed on a lone dark pixel: single-point chain, zero area.
        let mut data = vec![200u8; 20 * 20 * 4];
        for i in 0..data.len() {
            if i % 4 == 3 {
                data[i] = 255;
            }
        }
        let offset = (10 * 20 + 10) * 4;
        data[offset] = 0;
        data[offset + 1] = 0;
        data[offset + 2] = 0;
        let buffer = PixelBuffer::from_rgba(20, 20, data).unwrap();

        let polygon = detect_region(&buffer, (10, 10), &DetectConfig::default());
        assert_eq!(polygon.len(), 1);
        assert_eq!(polygon_area(&polygon, 1.0), 0.0);
    }
}
