/// SWR PNG - render a mesh file to a PNG image
///
/// Loads a Wavefront-style mesh, fits it to the requested width, fills each
/// face and writes the result.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use swr_core::{load_obj, Color, RenderMode, RenderParams, Shading, V3f};
use swr_png::render_image;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShadingArg {
    /// Solid white faces
    Flat,
    /// A random color per face
    Random,
    /// White faces lit from the viewer; back faces are skipped
    Lambert,
}

#[derive(Parser)]
#[command(name = "swr-png")]
#[command(about = "Render a triangulated mesh to a PNG image", long_about = None)]
#[command(version)]
struct Cli {
    /// Mesh file to render
    mesh: PathBuf,

    /// Output image
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 750)]
    width: u32,

    /// Extra pixels around the scaled mesh
    #[arg(long, default_value_t = 5)]
    margin: u32,

    #[arg(long, value_enum, default_value_t = ShadingArg::Random)]
    shading: ShadingArg,

    /// Seed for random face colors
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Draw face edges instead of filling
    #[arg(long)]
    wireframe: bool,
}

impl Cli {
    fn params(&self) -> RenderParams {
        let shading = match self.shading {
            ShadingArg::Flat => Shading::Flat(Color::WHITE),
            ShadingArg::Random => Shading::Random { seed: self.seed },
            ShadingArg::Lambert => Shading::Lambert {
                base: Color::WHITE,
                light: V3f::new(0.0, 0.0, -1.0),
            },
        };
        let mode = if self.wireframe {
            RenderMode::Wireframe
        } else {
            RenderMode::Filled
        };
        RenderParams::default()
            .with_target_width(self.width)
            .with_margin(self.margin)
            .with_shading(shading)
            .with_mode(mode)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mesh = load_obj(&cli.mesh)
        .with_context(|| format!("failed to load {}", cli.mesh.display()))?;
    info!("{}: {} faces", cli.mesh.display(), mesh.faces().len());

    let (canvas, stats) = render_image(&mesh, &cli.params());
    info!(
        drawn = stats.drawn,
        culled = stats.culled,
        degenerate = stats.degenerate,
        "Render complete"
    );

    canvas.save_png(&cli.output)?;
    Ok(())
}
