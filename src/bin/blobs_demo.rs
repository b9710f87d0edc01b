use punch_detector::blobs::{expected_punch_area, filter_blobs, label_blobs, Blob};
use punch_detector::config::load_config;
use punch_detector::image::io::{load_source_image, write_json_file};
use punch_detector::rectify::rectify;
use punch_detector::surface::SurfacePatch;
use punch_detector::threshold::adaptive_threshold;
use serde::Serialize;
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
    let mask = adaptive_threshold(&rectified, params.window_radius_px(), params.sensitivity);
    let raw = label_blobs(&mask);
    let expected_area = expected_punch_area(params.samples_per_cell, params.blob_size_percent);
    let kept = filter_blobs(raw.clone(), expected_area);

    let summary = BlobSummary {
        width: rectified.w,
        height: rectified.h,
        expected_area,
        blobs_total: raw.len(),
        blobs_kept: kept.len(),
        blobs: kept,
    };
    println!(
        "Found {} blobs, kept {} (expected area {:.1} px)",
        summary.blobs_total, summary.blobs_kept, summary.expected_area
    );

    match &config.output.blobs_out {
        Some(path) => {
            write_json_file(path, &summary)?;
            println!("Blob summary written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("Failed to serialize blob summary: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn usage() -> String {
    "Usage: blobs_demo <config.json>\n\n\
Runs rectification, thresholding and blob extraction on the configured\n\
photo and dumps the surviving blobs as JSON (output.blobs_out or stdout)."
        .to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlobSummary {
    width: usize,
    height: usize,
    expected_area: f64,
    blobs_total: usize,
    blobs_kept: usize,
    blobs: Vec<Blob>,
}
