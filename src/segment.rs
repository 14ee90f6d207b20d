//! Seeded region segmentation: 4-connected flood fill into a tri-state mask.

use std::collections::VecDeque;

use crate::buffer::PixelBuffer;
use crate::config::DetectConfig;

/// Per-pixel state in a segmentation mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskState {
    /// Never reached by the fill.
    Unvisited,
    /// Matches the seed brightness and is 4-connected to the seed.
    Interior,
    /// Immediately adjacent to the interior but does not match.
    Boundary,
}

/// Tri-state grid produced by one segmentation run.
///
/// Each pixel is written at most once per run; the mask write gates further
/// processing, which is what makes the fill linear in image area. Discarded
/// after contour extraction.
pub struct Mask {
    width: i32,
    height: i32,
    data: Vec<u8>,
    /// Bounding box of the interior region (min_x, min_y, max_x, max_y),
    /// tracked during the fill. `None` when nothing was marked.
    bounds: Option<(i32, i32, i32, i32)>,
    interior_count: usize,
}

const UNVISITED: u8 = 0;
const INTERIOR: u8 = 1;
const BOUNDARY: u8 = 2;

impl Mask {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            data: vec![UNVISITED; (width.max(0) as usize) * (height.max(0) as usize)],
            bounds: None,
            interior_count: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// State at (x, y). Out-of-bounds is Unvisited.
    pub fn get(&self, x: i32, y: i32) -> MaskState {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return MaskState::Unvisited;
        }
        match self.data[(y * self.width + x) as usize] {
            INTERIOR => MaskState::Interior,
            BOUNDARY => MaskState::Boundary,
            _ => MaskState::Unvisited,
        }
    }

    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == MaskState::Interior
    }

    /// Bounding box of the interior region, if any pixel was marked.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        self.bounds
    }

    /// Number of pixels marked Interior.
    pub fn interior_count(&self) -> usize {
        self.interior_count
    }

    fn set(&mut self, x: i32, y: i32, state: u8) {
        self.data[(y * self.width + x) as usize] = state;
    }

    fn mark_interior(&mut self, x: i32, y: i32) {
        self.set(x, y, INTERIOR);
        self.interior_count += 1;
        self.bounds = Some(match self.bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }
}

/// Flood-fill from `seed`, marking brightness-matching 4-connected pixels
/// Interior and adjacent non-matching pixels Boundary.
///
/// The predicate is |brightness - seed brightness| < threshold. An explicit
/// worklist keeps this iterative; each pixel is visited at most once. A seed
/// outside the image marks nothing (the caller sees "nothing detected"
/// downstream, not an error). When `max_region_pixels` is set, the fill
/// stops marking Interior once the count reaches the cap.
pub fn segment_region(buffer: &PixelBuffer, seed: (i32, i32), config: &DetectConfig) -> Mask {
    let mut mask = Mask::new(buffer.width(), buffer.height());
    let (sx, sy) = seed;
    if !buffer.contains(sx, sy) {
        return mask;
    }

    let seed_brightness = buffer.brightness(sx, sy);
    let matches = |x: i32, y: i32| (buffer.brightness(x, y) - seed_brightness).abs() < config.threshold;
    let cap = config.max_region_pixels.unwrap_or(usize::MAX);

    mask.mark_interior(sx, sy);
    let mut worklist = VecDeque::new();
    worklist.push_back((sx, sy));

    while let Some((cx, cy)) = worklist.pop_front() {
        let neighbors = [(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)];
        for (nx, ny) in neighbors {
            if !buffer.contains(nx, ny) {
                continue;
            }
            if mask.get(nx, ny) != MaskState::Unvisited {
                continue;
            }
            if matches(nx, ny) {
                if mask.interior_count() >= cap {
                    continue;
                }
                mask.mark_interior(nx, ny);
                worklist.push_back((nx, ny));
            } else {
                mask.set(nx, ny, BOUNDARY);
            }
        }
    }

    mask
}
