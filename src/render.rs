//! Overlay rendering: detected polygon drawn over the source floorplan.
//!
//! Rasterizes via tiny-skia and writes a PNG, so a detection result can be
//! inspected without the interactive canvas.

use std::io;
use std::path::Path;

use image::RgbaImage;
use kurbo::Point;

/// Stroke the polygon (with vertex markers) over the source image and write
/// the result as a PNG at `output_path`.
///
/// A polygon with fewer than 2 points draws nothing but still writes the
/// plain image.
pub fn render_overlay(image: &RgbaImage, polygon: &[Point], output_path: &Path) -> io::Result<()> {
    let (w, h) = image.dimensions();
    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| io::Error::other("image has zero dimensions"))?;

    // Copy the source image into the pixmap.
    let pixels = pixmap.pixels_mut();
    for (i, px) in image.pixels().enumerate() {
        let [r, g, b, a] = px.0;
        pixels[i] = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    let mut paint = tiny_skia::Paint::default();
    paint.set_color(tiny_skia::Color::from_rgba8(230, 30, 30, 230));
    paint.anti_alias = true;

    if polygon.len() >= 2 {
        if let Some(path) = polygon_to_path(polygon) {
            let stroke = tiny_skia::Stroke {
                width: 2.0,
                ..tiny_skia::Stroke::default()
            };
            pixmap.stroke_path(
                &path,
                &paint,
                &stroke,
                tiny_skia::Transform::identity(),
                None,
            );
        }
        if let Some(dots) = vertex_markers(polygon) {
            pixmap.fill_path(
                &dots,
                &paint,
                tiny_skia::FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }

    let png_data = encode_png(&pixmap)?;
    std::fs::write(output_path, png_data)
}

/// Convert the polygon to a closed tiny-skia path.
fn polygon_to_path(points: &[Point]) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    let first = points.first()?;
    pb.move_to(first.x as f32, first.y as f32);
    for p in &points[1..] {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    pb.finish()
}

/// Small filled circle at each vertex.
fn vertex_markers(points: &[Point]) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for p in points {
        pb.push_circle(p.x as f32, p.y as f32, 3.0);
    }
    pb.finish()
}

/// Encode a pixmap to PNG bytes.
fn encode_png(pixmap: &tiny_skia::Pixmap) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().map_err(io::Error::other)?;
    writer.write_image_data(pixmap.data()).map_err(io::Error::other)?;
    drop(writer);
    Ok(buf)
}
