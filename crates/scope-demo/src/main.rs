// File: crates/scope-demo/src/main.rs
// Summary: Renders the three-trace scope to a PNG and optionally writes the sampled trace as CSV.

use anyhow::{Context, Result};
use clap::Parser;
use scope_core::{theme, RenderOptions, Scope, ScaleLevel, TraceParams, TracePath};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Render an oscilloscope graticule with sine traces to PNG")]
struct Args {
    #[arg(long, default_value_t = scope_core::types::WIDTH)]
    width: i32,
    #[arg(long, default_value_t = scope_core::types::HEIGHT)]
    height: i32,
    /// Pixels between major gridlines.
    #[arg(long, default_value_t = scope_core::types::MAJOR_PIXELS)]
    spacing: f64,
    /// Theme preset name (scope, light).
    #[arg(long, default_value = "scope")]
    theme: String,
    #[arg(long)]
    no_labels: bool,
    /// Scale level applied to every trace's x axis.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    scale_x: i32,
    /// Scale level applied to every trace's y axis.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    scale_y: i32,
    #[arg(long, default_value_t = 0.1)]
    frequency: f64,
    #[arg(long, default_value_t = 20.0)]
    amplitude: f64,
    #[arg(short, long, default_value = "target/out/scope.png")]
    out: PathBuf,
    /// Also write the (unscaled) trace samples as `subpath,x,y` rows.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.width <= 0 || args.height <= 0 {
        anyhow::bail!("surface size must be positive, got {}x{}", args.width, args.height);
    }

    let params = TraceParams {
        frequency: args.frequency,
        amplitude: args.amplitude,
        ..TraceParams::default()
    };

    let mut scope = Scope::oscilloscope();
    scope.major_spacing = args.spacing;
    for t in &mut scope.traces {
        t.params = params;
        t.scale_x = ScaleLevel(args.scale_x);
        t.scale_y = ScaleLevel(args.scale_y);
    }

    let mut opts = RenderOptions::default();
    opts.width = args.width;
    opts.height = args.height;
    opts.theme = theme::find(&args.theme);
    opts.draw_labels = !args.no_labels;
    if !opts.theme.name.eq_ignore_ascii_case(&args.theme) {
        log::warn!("unknown theme '{}', using '{}'", args.theme, opts.theme.name);
    }

    scope
        .render_to_png(&opts, &args.out)
        .with_context(|| format!("rendering {}", args.out.display()))?;
    println!("Wrote {}", args.out.display());

    if let Some(csv_path) = &args.csv {
        let path = params.sample();
        write_trace_csv(csv_path, &path)
            .with_context(|| format!("failed to write CSV '{}'", csv_path.display()))?;
        println!("Wrote {} ({} points in {} sub-paths)", csv_path.display(), path.point_count(), path.len());
    }

    Ok(())
}

/// Write one row per sample: sub-path index, x, y.
fn write_trace_csv(out: &Path, path: &TracePath) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(out)
        .with_context(|| format!("opening {}", out.display()))?;
    wtr.write_record(["subpath", "x", "y"])?;
    for (i, sub) in path.subpaths().iter().enumerate() {
        for p in sub {
            wtr.write_record(&[i.to_string(), p.x.to_string(), p.y.to_string()])?;
        }
    }
    wtr.flush()?;
    log::debug!("trace CSV written to {}", out.display());
    Ok(())
}
