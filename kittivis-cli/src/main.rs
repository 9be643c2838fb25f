use anyhow::Context;
use clap::Parser;
use kittivis_algorithms::{points_per_box, prepare_display};
use kittivis_core::{ColormapRange, DisplaySettings, Drawable, FrameLoadOptions, PointCloud};
use kittivis_io::{load_frame_with_labels, write_colored_ply};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Load a KITTI LIDAR frame with its labels, color it and print a scene summary.
#[derive(Parser, Debug)]
#[command(name = "kittivis", version)]
struct Args {
    /// Velodyne frame (little-endian f32 x, y, z, intensity records)
    frame: PathBuf,

    /// Label file to use instead of the one discovered next to the frame
    #[arg(long, value_name = "TXT")]
    labels: Option<PathBuf>,

    /// Drop points with any |coordinate| above this bound after loading
    #[arg(long, value_name = "M")]
    max_range: Option<f32>,

    /// Keep only points within this distance of the sensor
    #[arg(long, value_name = "R")]
    radius: Option<f32>,

    /// Normalize the colormap by the largest |x| in the frame
    #[arg(long, conflicts_with = "fixed_range")]
    auto_range: bool,

    /// Normalize the colormap by a fixed forward distance
    #[arg(long, value_name = "D")]
    fixed_range: Option<f32>,

    /// Flat gray instead of the distance colormap
    #[arg(long)]
    no_colormap: bool,

    /// Do not paint box members with their category color
    #[arg(long)]
    no_labels: bool,

    /// JSON file holding display settings; flags override its values
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Write the displayed points and colors to a PLY file
    #[arg(short, long, value_name = "PLY")]
    output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn display_settings(&self) -> anyhow::Result<DisplaySettings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings from {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse settings in {}", path.display()))?
            }
            None => DisplaySettings::default(),
        };
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    fn apply_overrides(&self, settings: &mut DisplaySettings) {
        if self.auto_range {
            settings.colormap_range = ColormapRange::Auto;
        }
        if let Some(distance) = self.fixed_range {
            settings.colormap_range = ColormapRange::Fixed(distance);
        }
        if self.no_colormap {
            settings.use_colormap = false;
        }
        if self.no_labels {
            settings.use_label_overlay = false;
        }
        if self.radius.is_some() {
            settings.filter_radius = self.radius;
        }
    }

    fn load_options(&self) -> FrameLoadOptions {
        FrameLoadOptions {
            max_abs_coordinate: self.max_range,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = args.display_settings()?;
    tracing::debug!(?settings, "display settings");

    let frame = load_frame_with_labels(&args.frame, args.labels.as_deref(), &args.load_options())
        .with_context(|| format!("failed to load frame {}", args.frame.display()))?;
    tracing::info!(points = frame.points.len(), boxes = frame.boxes.len(), "loaded frame");

    let display = prepare_display(frame.points.as_slice(), None, &frame.boxes, &settings)
        .context("failed to prepare frame for display")?;
    let shown = PointCloud::from_points(display.points);

    let (min, max) = shown.bounding_box();
    tracing::info!(points = shown.len(), center = ?shown.center(), ?min, ?max, "scene");

    let counts = points_per_box(&frame.boxes, shown.as_slice());
    for (bbox, count) in frame.boxes.iter().zip(counts) {
        tracing::info!(
            category = %bbox.category,
            center = ?bbox.center,
            extent = ?bbox.extent,
            rotation_y = bbox.rotation_y,
            points = count,
            "box"
        );
    }

    if let Some(output) = &args.output {
        write_colored_ply(shown.as_slice(), &display.colors, output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        tracing::info!(path = %output.display(), "wrote PLY");
    }

    Ok(())
}
