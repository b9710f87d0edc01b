use punch_detector::config::{load_config, RuntimeConfig};
use punch_detector::diagnostics::DetectionReport;
use punch_detector::export::{save_grid_bmp, save_grid_png, save_grid_text};
use punch_detector::image::io::{load_source_image, write_json_file};
use punch_detector::PunchDetector;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args().next().unwrap_or_else(|| "punch_demo".to_string());
    let cli = parse_args(&program)?;
    let config = load_config(&cli.config_path)?;

    let photo = load_source_image(&config.input_path)?;
    let boundary = config.boundary.to_boundary()?;
    let detector = PunchDetector::new(config.params);
    let report = detector.detect_with_report(
        &photo.as_source(),
        &boundary,
        config.grid.cols,
        config.grid.rows,
    );

    if cli.format.includes_text() {
        print_text_summary(&report);
    }

    if cli.format.includes_json() {
        let json_out = cli.json_out.clone().or_else(|| config.output.json_out.clone());
        match json_out {
            Some(path) => {
                write_json_file(&path, &report)?;
                println!("JSON report written to {}", path.display());
            }
            None => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
                println!("{json}");
            }
        }
    }

    write_exports(&report, &config)?;
    Ok(())
}

fn write_exports(report: &DetectionReport, config: &RuntimeConfig) -> Result<(), String> {
    let grid = &report.detection.grid;
    if let Some(path) = &config.output.text_out {
        save_grid_text(grid, path)?;
        println!("Text grid written to {}", path.display());
    }
    if let Some(path) = &config.output.png_out {
        save_grid_png(grid, path)?;
        println!("PNG grid written to {}", path.display());
    }
    if let Some(path) = &config.output.bmp_out {
        save_grid_bmp(grid, path)?;
        println!("BMP grid written to {}", path.display());
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Both,
}

impl OutputFormat {
    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "both" => Ok(Self::Both),
            other => Err(format!("Unknown format '{other}'. Use text|json|both.")),
        }
    }

    fn includes_text(&self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }

    fn includes_json(&self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

struct CliArgs {
    config_path: PathBuf,
    format: OutputFormat,
    json_out: Option<PathBuf>,
}

fn parse_args(program: &str) -> Result<CliArgs, String> {
    let mut args = env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut format = OutputFormat::Text;
    let mut json_out: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{}", usage(program));
                std::process::exit(0);
            }
            "--format" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("--format expects a value\n{}", usage(program)))?;
                format = OutputFormat::from_str(&value)?;
            }
            "--json-out" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("--json-out expects a path\n{}", usage(program)))?;
                json_out = Some(PathBuf::from(value));
            }
            _ if arg.starts_with('-') => {
                return Err(format!("Unknown option '{arg}'\n{}", usage(program)));
            }
            _ => {
                if config_path.is_some() {
                    return Err(format!(
                        "Unexpected positional argument '{arg}'\n{}",
                        usage(program)
                    ));
                }
                config_path = Some(PathBuf::from(arg));
            }
        }
    }

    let config_path = config_path.ok_or_else(|| usage(program))?;
    Ok(CliArgs {
        config_path,
        format,
        json_out,
    })
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <config.json> [--format text|json|both] [--json-out report.json]\n\n\
Runs the punch detector on a card photograph and emits the cell grid.\n\
The config supplies the input image, boundary, grid dimensions, parameters,\n\
and optional export paths (text/PNG/BMP/JSON).\n\
Example:\n  {program} data/card.json --format both --json-out card_report.json\n"
    )
}

fn print_text_summary(report: &DetectionReport) {
    let detection = &report.detection;
    let grid = &detection.grid;
    println!("Detection summary");
    println!("  grid: {} cols x {} rows", grid.cols(), grid.rows());
    println!("  punched: {}", grid.punched_count());
    println!("  latency_ms: {:.3}", detection.latency_ms);

    let trace = &report.trace;
    println!(
        "  input: {}x{} px, {} samples/cell",
        trace.input.width, trace.input.height, trace.input.samples_per_cell
    );
    println!(
        "  foreground px: {}  blobs: {} found, {} kept",
        trace.foreground_px, trace.blobs_total, trace.blobs_kept
    );
    for stage in &trace.timings.stages {
        println!("    {}: {:.3} ms", stage.label, stage.elapsed_ms);
    }

    print_grid_rows(grid);
}

fn print_grid_rows(grid: &punch_detector::CellGrid) {
    println!("  cells:");
    for row in grid.row_iter() {
        let line: String = row.iter().map(|&c| if c { '#' } else { '.' }).collect();
        println!("    {line}");
    }
}
