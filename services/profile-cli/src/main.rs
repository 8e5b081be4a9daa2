//! Profile rendering command.
//!
//! Reads ingested point or mesh records, renders one value column and
//! writes the profile image plus its colorbar. A JSON summary with the
//! color domain and tick labels goes to stdout; logs go to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use profile_common::{
    available_fields, samples_from_records, triangles_from_records, BoundingBox, Palette,
    PointRecord, RenderParameters, TriangleRecord, ValueColumns, ValueField,
};
use profile_renderer::{render, render_mesh, Domain, RenderOutput, RenderStats, TickLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Scattered samples, gridded with IDW
    Points,
    /// Inversion mesh triangles, flat-filled
    Mesh,
}

#[derive(Parser, Debug)]
#[command(name = "profile-render")]
#[command(about = "Render a resistivity or IP profile to PNG")]
struct Args {
    /// JSON array of point or triangle records
    #[arg(short, long)]
    input: PathBuf,

    /// How to read the records
    #[arg(short, long, value_enum, default_value = "points")]
    mode: Mode,

    /// Value column to render (rho, log10rho, ip_gate_<n>, ...)
    #[arg(short, long, default_value = "rho")]
    field: ValueField,

    /// List the value columns present in the input and exit
    #[arg(long)]
    list_fields: bool,

    /// YAML or JSON parameter file
    #[arg(short, long, env = "PROFILE_CONFIG")]
    config: Option<PathBuf>,

    /// Profile extent as minx,miny,maxx,maxy (defaults to the data extent)
    #[arg(long)]
    bbox: Option<BoundingBox>,

    /// Pixel block edge for the scattered path
    #[arg(long, env = "PROFILE_BLOCK_SIZE")]
    block_size: Option<u32>,

    /// Neighbors per IDW estimate
    #[arg(long, env = "PROFILE_NEIGHBORS")]
    neighbors: Option<usize>,

    /// Percent of the width dropped at each side
    #[arg(long, env = "PROFILE_CLIP_PERCENT")]
    clip_percent: Option<f64>,

    /// Quantile trimmed from each tail of a linear domain
    #[arg(long, env = "PROFILE_DOMAIN_CLIP")]
    domain_clip: Option<f64>,

    /// Color on a log10 scale
    #[arg(long)]
    log_scale: bool,

    #[arg(long, env = "PROFILE_PALETTE")]
    palette: Option<Palette>,

    #[arg(long, env = "PROFILE_WIDTH")]
    width: Option<u32>,

    #[arg(long, env = "PROFILE_HEIGHT")]
    height: Option<u32>,

    /// Stroke mesh edges
    #[arg(long)]
    wireframe: bool,

    /// Profile image path
    #[arg(short, long, default_value = "profile.png")]
    output: PathBuf,

    /// Colorbar image path
    #[arg(long, default_value = "colorbar.png")]
    colorbar: PathBuf,

    /// Log level
    #[arg(long, default_value = "info", env = "PROFILE_LOG_LEVEL")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

/// What a render produced, printed to stdout.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    field: String,
    domain: Domain,
    log_fallback: bool,
    ticks: &'a [TickLabel; 3],
    stats: RenderStats,
    output: &'a Path,
    colorbar: &'a Path,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level, args.json)?;

    if args.list_fields {
        let fields = match args.mode {
            Mode::Points => fields_of::<PointRecord>(&args.input)?,
            Mode::Mesh => fields_of::<TriangleRecord>(&args.input)?,
        };
        println!("{}", serde_json::to_string(&fields)?);
        return Ok(());
    }

    let params = build_parameters(&args)?;
    let output = match args.mode {
        Mode::Points => render_points(&args, &params)?,
        Mode::Mesh => render_triangles(&args, &params)?,
    };

    write_file(&args.output, &output.image.to_png()?)?;
    write_file(&args.colorbar, &output.colorbar.image.to_png()?)?;

    info!(
        output = %args.output.display(),
        colorbar = %args.colorbar.display(),
        elapsed_ms = output.stats.elapsed_ms,
        "Profile written"
    );

    let summary = Summary {
        field: args.field.to_string(),
        domain: output.selection.domain,
        log_fallback: output.selection.log_fallback,
        ticks: &output.colorbar.ticks,
        stats: output.stats,
        output: &args.output,
        colorbar: &args.colorbar,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// File parameters (or defaults) with command-line overrides applied.
fn build_parameters(args: &Args) -> Result<RenderParameters> {
    let mut params = match &args.config {
        Some(path) => RenderParameters::from_file(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => RenderParameters::default(),
    };

    if let Some(block_size) = args.block_size {
        params.block_size_px = block_size;
    }
    if let Some(neighbors) = args.neighbors {
        params.neighbor_count = neighbors;
    }
    if let Some(clip) = args.clip_percent {
        params.clip_left_right_percent = clip;
    }
    if let Some(domain_clip) = args.domain_clip {
        params.domain_clip = domain_clip;
    }
    if args.log_scale {
        params.use_log_scale = true;
    }
    if let Some(palette) = args.palette {
        params.palette = palette;
    }
    if let Some(width) = args.width {
        params.output_width_px = width;
    }
    if let Some(height) = args.height {
        params.output_height_px = height;
    }
    if args.wireframe {
        params.wireframe = true;
    }

    params.validate()?;
    Ok(params)
}

fn render_points(args: &Args, params: &RenderParameters) -> Result<RenderOutput> {
    let records: Vec<PointRecord> = read_records(&args.input)?;
    let samples = samples_from_records(&records, &args.field);
    report_usable(&records, samples.len(), &args.field);

    let bbox = args
        .bbox
        .or_else(|| BoundingBox::from_samples(&samples))
        .unwrap_or_else(empty_extent);
    info!(samples = samples.len(), field = %args.field, "Rendering scattered profile");

    Ok(render(&samples, &bbox, params)?)
}

fn render_triangles(args: &Args, params: &RenderParameters) -> Result<RenderOutput> {
    let records: Vec<TriangleRecord> = read_records(&args.input)?;
    let triangles = triangles_from_records(&records, &args.field);
    report_usable(&records, triangles.len(), &args.field);

    let bbox = args
        .bbox
        .or_else(|| BoundingBox::from_triangles(&triangles))
        .unwrap_or_else(empty_extent);
    info!(triangles = triangles.len(), field = %args.field, "Rendering mesh profile");

    Ok(render_mesh(&triangles, &bbox, params)?)
}

fn empty_extent() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 1.0, 1.0)
}

fn report_usable<R: ValueColumns>(records: &[R], usable: usize, field: &ValueField) {
    if usable < records.len() {
        warn!(
            records = records.len(),
            usable,
            field = %field,
            "Dropped records with missing coordinates or values"
        );
    }
    if usable == 0 && !records.is_empty() {
        let present: Vec<String> = available_fields(records)
            .iter()
            .map(ToString::to_string)
            .collect();
        warn!(field = %field, available = ?present, "No usable values for field");
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records in {}", path.display()))
}

fn fields_of<R: ValueColumns + DeserializeOwned>(path: &Path) -> Result<Vec<String>> {
    let records: Vec<R> = read_records(path)?;
    Ok(available_fields(&records)
        .iter()
        .map(ToString::to_string)
        .collect())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
