use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pixmanip::config::{DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use pixmanip::timing::FrameLimiter;
use pixmanip::window::Window;
use pixmanip::{batch, colors, Engine, EngineConfig, LineAlgorithm, Point2D, Stroke};

#[derive(Parser)]
#[command(name = "pixmanip", version, about = "Interactive line and circle rasterization")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive window
    Live(LiveArgs),
    /// Draw one line into an image file
    Batch(BatchArgs),
}

#[derive(Args)]
struct LiveArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
    /// Initial line algorithm (switch live with F/D/B)
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::BruteForce)]
    algorithm: AlgorithmArg,
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
    /// OBJ file drawn as a wireframe in place of the spine
    #[arg(short, long)]
    model: Option<PathBuf>,
    /// Scale applied to OBJ positions
    #[arg(long, default_value_t = 50.0)]
    model_scale: f32,
    /// Draw the spine as a tapered tube
    #[arg(long)]
    taper: bool,
}

#[derive(Args)]
struct BatchArgs {
    input: PathBuf,
    output: PathBuf,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    /// Line color as RRGGBB
    #[arg(short, long, default_value = "FF0000", value_parser = parse_color)]
    color: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    BruteForce,
    Dda,
    Bresenham,
}

impl From<AlgorithmArg> for LineAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::BruteForce => LineAlgorithm::BruteForce,
            AlgorithmArg::Dda => LineAlgorithm::Dda,
            AlgorithmArg::Bresenham => LineAlgorithm::Bresenham,
        }
    }
}

fn parse_color(s: &str) -> Result<u32, String> {
    colors::parse_hex(s).ok_or_else(|| format!("expected RRGGBB, got {s:?}"))
}

fn run_live(args: LiveArgs) -> anyhow::Result<()> {
    let config = EngineConfig {
        width: args.width,
        height: args.height,
        fps: args.fps,
        algorithm: args.algorithm.into(),
        spine_stroke: if args.taper {
            Stroke::Tapered { base: 1, swell: 4 }
        } else {
            Stroke::Hairline
        },
        model_path: args.model,
        model_scale: args.model_scale,
        ..EngineConfig::default()
    };

    let mut engine = Engine::new(&config).context("failed to build the scene")?;
    let mut window = Window::new("pixmanip", config.width, config.height)
        .context("failed to open the window")?;
    let mut limiter = FrameLimiter::new(config.fps);

    let frames = engine.run_interactive(&mut window, &mut limiter)?;
    info!(frames, "window closed");
    Ok(())
}

fn run_batch(args: BatchArgs) -> anyhow::Result<()> {
    batch::draw_line_on_image(
        &args.input,
        &args.output,
        Point2D::new(args.x1, args.y1),
        Point2D::new(args.x2, args.y2),
        args.color,
    )?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let result = match cli.command {
        Command::Live(args) => run_live(args),
        Command::Batch(args) => run_batch(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
