//! Boundary extraction: Moore-neighbor tracing over a segmentation mask.

use kurbo::Point;

use crate::segment::Mask;

/// Clockwise 8-neighborhood: E, SE, S, SW, W, NW, N, NE.
const DX: [i32; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [i32; 8] = [0, 1, 1, 1, 0, -1, -1, -1];

/// Direction index for "west", the entry direction of a pixel found by a
/// left-to-right scan.
const FROM_LEFT: usize = 4;

/// Trace the outer edge of the interior region as an ordered, closed chain
/// of pixel coordinates. Returns an empty chain when the mask holds no
/// interior pixels.
///
/// The start pixel is the first interior pixel in row-major order (over the
/// bounds tracked during segmentation) whose left neighbor is not interior.
/// That fixes a reproducible start point and, with the clockwise neighbor
/// scan, a clockwise winding. Tracing stops on return to the start pixel or
/// after width*height steps, whichever comes first; the step bound keeps the
/// walk finite on malformed masks. A single-pixel region comes back as a
/// one-point chain.
pub fn trace_contour(mask: &Mask) -> Vec<Point> {
    let Some((min_x, min_y, max_x, max_y)) = mask.bounds() else {
        return Vec::new();
    };

    let mut start = None;
    'scan: for y in min_y..=max_y {
        for x in min_x..=max_x {
            if mask.is_interior(x, y) && !mask.is_interior(x - 1, y) {
                start = Some((x, y));
                break 'scan;
            }
        }
    }
    let Some((sx, sy)) = start else {
        return Vec::new();
    };

    let mut contour = vec![Point::new(sx as f64, sy as f64)];
    let (mut x, mut y) = (sx, sy);
    let mut from = FROM_LEFT;

    let max_steps = mask.width() as usize * mask.height() as usize;
    let mut steps = 0;

    loop {
        // Examine the 8 neighbors clockwise, starting just past the entry
        // direction; the first interior neighbor becomes the new current
        // pixel.
        let mut advanced = false;
        for i in 0..8 {
            let dir = (from + 1 + i) % 8;
            let nx = x + DX[dir];
            let ny = y + DY[dir];
            if mask.is_interior(nx, ny) {
                contour.push(Point::new(nx as f64, ny as f64));
                x = nx;
                y = ny;
                // The new entry direction is the opposite of the move.
                from = (dir + 4) % 8;
                advanced = true;
                break;
            }
        }

        if !advanced {
            // Isolated pixel: nothing to walk to.
            break;
        }
        steps += 1;
        if (x == sx && y == sy) || steps >= max_steps {
            break;
        }
    }

    contour
}
