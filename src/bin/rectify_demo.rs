use punch_detector::config::load_config;
use punch_detector::image::io::{load_source_image, save_gray_png, save_mask_png};
use punch_detector::rectify::rectify;
use punch_detector::surface::SurfacePatch;
use punch_detector::threshold::adaptive_threshold;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let photo = load_source_image(&config.input_path)?;
    let boundary = config.boundary.to_boundary()?;
    let params = config.params.clamped();

    let patch = SurfacePatch::new(&boundary, config.grid.cols, config.grid.rows);
    let rectified = rectify(
        &photo.as_source(),
        &patch,
        config.grid.cols,
        config.grid.rows,
        params.samples_per_cell,
    );
    println!(
        "Rectified {}x{} photo into {}x{} raster",
        photo.width(),
        photo.height(),
        rectified.w,
        rectified.h
    );

    if let Some(path) = &config.output.rectified_out {
        save_gray_png(&rectified, path)?;
        println!("Rectified raster written to {}", path.display());
    }

    if let Some(path) = &config.output.mask_out {
        let mask = adaptive_threshold(&rectified, params.window_radius_px(), params.sensitivity);
        println!(
            "Threshold marked {} of {} pixels",
            mask.foreground_count(),
            mask.w * mask.h
        );
        save_mask_png(&mask, path)?;
        println!("Binary mask written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: rectify_demo <config.json>\n\n\
Resamples the configured card photo into the rectified frame and writes\n\
the raster (output.rectified_out) and optional binary mask (output.mask_out)."
        .to_string()
}
