//! Vantage CLI
//!
//! Replay scroll traces through the scene animator and inspect configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::cell::Cell;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vantage_scene::SceneAnimator;

mod config;
mod output;
mod trace;

use config::VantageConfig;
use output::{Finish, Format, Transitions};
use trace::ScrollTrace;

/// Length of the synthetic top-to-bottom sweep
const SWEEP_SECONDS: f32 = 6.0;

/// Extra time replayed after a recorded trace ends so the spring can settle
const SETTLE_SECONDS: f32 = 2.0;

#[derive(Parser)]
#[command(name = "vantage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scroll-driven scene animator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scroll trace and print one frame per tick
    Simulate {
        /// Scroll trace file (TOML); a linear sweep of the page when omitted
        #[arg(short, long)]
        trace: Option<PathBuf>,

        /// Configuration file (defaults to ./vantage.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Seconds to replay
        #[arg(short, long)]
        duration: Option<f32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Load and validate a configuration
    Check {
        /// Configuration file (defaults to ./vantage.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            trace,
            config,
            fps,
            duration,
            format,
        } => cmd_simulate(trace.as_deref(), config.as_deref(), fps, duration, format),

        Commands::Check { config } => cmd_check(config.as_deref()),

        Commands::Config => cmd_config(),
    }
}

fn load_config(path: Option<&Path>) -> Result<VantageConfig> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = VantageConfig::load_or_default(path, &cwd)?;
    config.validate()?;
    Ok(config)
}

fn mount(config: &VantageConfig, scroll_y: f32) -> Result<SceneAnimator> {
    SceneAnimator::mount_at(
        config.scene.clone(),
        config.page.layout(),
        config.page.viewport(),
        config.clip()?,
        scroll_y,
    )
    .context("Failed to mount scene")
}

fn cmd_simulate(
    trace_path: Option<&Path>,
    config_path: Option<&Path>,
    fps: u32,
    duration: Option<f32>,
    format: Format,
) -> Result<()> {
    if fps == 0 {
        anyhow::bail!("--fps must be at least 1");
    }
    let config = load_config(config_path)?;

    let trace = match trace_path {
        Some(path) => ScrollTrace::load(path)?,
        None => ScrollTrace::sweep(config.page.max_scroll(), SWEEP_SECONDS),
    };
    let duration = match duration {
        Some(d) if d.is_finite() && d >= 0.0 => d,
        Some(d) => anyhow::bail!("Invalid duration {}", d),
        None if trace_path.is_some() => trace.duration() + SETTLE_SECONDS,
        None => trace.duration(),
    };

    let dt = 1.0 / fps as f32;
    let frames = (duration * fps as f32).ceil() as u64 + 1;
    info!(
        frames,
        fps,
        duration,
        samples = trace.samples().len(),
        "Simulating scroll trace"
    );

    let mut scene = mount(&config, trace.scroll_at(0.0))?;

    let peak = Rc::new(Cell::new(0.0_f32));
    let sink = peak.clone();
    scene.subscribe(move |smoothed| sink.set(sink.get().max(smoothed)));

    let mut writer = output::writer(format, BufWriter::new(io::stdout()));
    {
        let mut adapter = Transitions::new(writer.as_mut());
        for frame in 0..frames {
            let time = frame as f32 * dt;
            scene.on_scroll(trace.scroll_at(time));
            scene.frame_into(dt, &mut adapter);
        }
    }
    writer.finish().context("Failed to write frames")?;

    info!(
        frames = scene.frames_rendered(),
        peak_progress = peak.get(),
        "Simulation finished"
    );
    scene.unmount();
    Ok(())
}

fn cmd_check(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    // Waypoint ordering is only checked when the camera path is built
    let scene = mount(&config, 0.0)?;
    debug!(?scene, "Scene mounted for check");
    scene.unmount();

    match config_path {
        Some(path) => info!("{} is valid", path.display()),
        None => info!("Configuration is valid"),
    }
    Ok(())
}

fn cmd_config() -> Result<()> {
    print!("{}", VantageConfig::default().to_toml()?);
    Ok(())
}
