use clap::Parser;
use roomtrace::calibrate::{self, CalibrationScale};
use roomtrace::{detect_region, DetectConfig, DetectError, PixelBuffer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roomtrace", about = "Seeded room-boundary detection on raster floorplans")]
struct Cli {
    /// Input floorplan image (PNG, JPEG, BMP)
    #[arg(short, long)]
    input: PathBuf,

    /// Seed pixel X coordinate (a point inside the room)
    #[arg(short = 'x', long)]
    seed_x: i32,

    /// Seed pixel Y coordinate
    #[arg(short = 'y', long)]
    seed_y: i32,

    /// Brightness difference threshold for the flood fill
    #[arg(long, default_value = "40")]
    threshold: f64,

    /// Polygon simplification tolerance in pixels
    #[arg(long, default_value = "15")]
    tolerance: f64,

    /// Cap on the flood-filled region size in pixels (default: uncapped)
    #[arg(long)]
    max_region: Option<usize>,

    /// Meters per pixel, if already calibrated
    #[arg(short, long)]
    scale: Option<f64>,

    /// Reference segment length in pixels (use with --ref-meters)
    #[arg(long)]
    ref_pixels: Option<f64>,

    /// Known real length of the reference segment in meters
    #[arg(long)]
    ref_meters: Option<f64>,

    /// Write an overlay PNG with the detected polygon drawn on the input
    #[arg(short, long)]
    overlay: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = DetectConfig {
        threshold: cli.threshold,
        tolerance: cli.tolerance,
        max_region_pixels: cli.max_region,
    };

    let img = image::open(&cli.input)
        .map_err(|e| DetectError::ImageLoad(e.to_string()))?
        .into_rgba8();
    let buffer = PixelBuffer::from_image(&img);

    eprintln!();
    eprintln!("  roomtrace \u{00b7} {}", cli.input.display());
    eprintln!();
    eprintln!("  Load        {}x{} px", img.width(), img.height());

    let polygon = detect_region(&buffer, (cli.seed_x, cli.seed_y), &config);
    if polygon.len() < 3 {
        eprintln!(
            "  Detect      nothing found at ({}, {})",
            cli.seed_x, cli.seed_y
        );
        return Ok(());
    }
    eprintln!(
        "  Detect      {} vertices  (threshold {}, tolerance {})",
        polygon.len(),
        config.threshold,
        config.tolerance
    );

    let scale = match (cli.scale, cli.ref_pixels, cli.ref_meters) {
        (Some(s), _, _) => {
            let scale = CalibrationScale::new(s);
            if scale.is_none() {
                eprintln!("  Scale       invalid meters-per-pixel {s}, staying in pixels");
            }
            scale
        }
        (None, Some(px), Some(m)) => {
            let scale = CalibrationScale::from_reference(px, m);
            match scale {
                Some(s) => eprintln!("  Scale       {:.6} m/px from reference", s.meters_per_pixel()),
                None => eprintln!("  Scale       undetermined reference, staying in pixels"),
            }
            scale
        }
        _ => None,
    };

    println!("vertices:");
    for (i, p) in polygon.iter().enumerate() {
        println!("  {:>3}  {:8.1} {:8.1}", i, p.x, p.y);
    }

    println!("segments:");
    for (i, pair) in polygon.windows(2).enumerate() {
        let len_px = calibrate::distance(pair[0], pair[1]);
        match scale {
            Some(s) => println!("  {:>3}  {:8.1} px  {:8.3} m", i, len_px, s.length_m(len_px)),
            None => println!("  {:>3}  {:8.1} px", i, len_px),
        }
    }

    let area_px = calibrate::polygon_area(&polygon, 1.0);
    match scale {
        Some(s) => println!("area: {:.1} px\u{00b2}  ({:.3} m\u{00b2})", area_px, s.area_m2(&polygon)),
        None => println!("area: {:.1} px\u{00b2}", area_px),
    }

    if let Some(path) = &cli.overlay {
        roomtrace::render::render_overlay(&img, &polygon, path)?;
        eprintln!("  Overlay     {}", path.display());
    }

    eprintln!();
    Ok(())
}
