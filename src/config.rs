/// All detection parameters in one struct.
/// Designed to be adjustable at runtime (for editor sliders) while the
/// defaults reproduce the fixed constants the interactive tool ships with.
#[derive(Debug, Clone)]
pub struct DetectConfig {
    /// Brightness difference threshold for the flood fill.
    /// A pixel joins the region when |brightness - seed brightness| is
    /// below this value. Brightness is the mean of R, G, B (0-255 range).
    pub threshold: f64,

    /// Simplification tolerance in pixels (perpendicular distance).
    /// Aggressive by default to flatten pixel-scale noise on wall edges
    /// into straight segments.
    pub tolerance: f64,

    /// Cap on the flood-filled region size, in pixels.
    /// `None` = uncapped: a seed on a large uniform background selects the
    /// whole connected component, which may be most of the image. When set,
    /// the fill stops marking Interior once the count reaches the cap; the
    /// capped region is still traced and returned.
    pub max_region_pixels: Option<usize>,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            threshold: 40.0,
            tolerance: 15.0,
            max_region_pixels: None,
        }
    }
}
