//! Reel CLI
//!
//! Build animation scenes from TOML files and drive them from the terminal.

mod config;
mod init;
mod scene;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use reel_animation::{AnimationScheduler, Animator, ManualAnimator};
use reel_core::NormalizedTime;

use crate::config::SceneConfig;
use crate::scene::{values, Scene, Track};

#[derive(Parser)]
#[command(name = "reel", version, about = "Build, scrub, and play animation scenes")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrub a scene at evenly spaced times with the manual animator
    Sample {
        /// Scene file
        scene: PathBuf,
        /// Number of samples, including both ends (overrides the scene file)
        #[arg(long)]
        samples: Option<usize>,
    },
    /// Play a scene frame by frame with the scheduler
    Play {
        /// Scene file
        scene: PathBuf,
        /// Frames per second (overrides the scene file)
        #[arg(long)]
        fps: Option<u32>,
    },
    /// Write a sample scene
    Init {
        /// Where to write the scene
        #[arg(default_value = "scene.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Sample { scene, samples } => {
            let config = SceneConfig::load(&scene)?;
            let samples = samples.unwrap_or(config.playback.samples);
            sample(Scene::build(&config)?, samples);
        }
        Commands::Play { scene, fps } => {
            let config = SceneConfig::load(&scene)?;
            let fps = fps.unwrap_or(config.playback.fps);
            play(Scene::build(&config)?, fps);
        }
        Commands::Init { path, force } => init::create_scene(&path, force)?,
    }

    Ok(())
}

/// Tick the scene at `samples` evenly spaced normalized times
fn sample(scene: Scene, samples: usize) {
    let Scene { tracks, root } = scene;
    let steps = samples.max(2) - 1;

    let animator = ManualAnimator::new();
    animator.run(root);

    print_header("t", &tracks);
    for step in 0..=steps {
        let time = NormalizedTime::from_interval(step as f64, steps as f64);
        animator.set_time(time);
        print_row(time.value(), &tracks);
    }
}

/// Advance the scene at a fixed frame rate until it finishes
fn play(scene: Scene, fps: u32) {
    let Scene { tracks, root } = scene;
    let duration = root.duration();

    let scheduler = AnimationScheduler::new();
    scheduler.set_target_fps(fps);
    scheduler.run(root);
    tracing::info!(
        "Playing {}s at {} fps",
        duration,
        scheduler.target_fps()
    );

    print_header("seconds", &tracks);
    let mut frame = 0u64;
    while scheduler.has_active_animations() {
        // The first frame ticks at time 0
        let elapsed = frame as f64 * scheduler.frame_interval();
        scheduler.advance(scheduler.frame_interval());
        print_row(elapsed.min(duration), &tracks);
        frame += 1;
    }
    tracing::info!("Finished after {} frames", frame);
}

fn print_header(label: &str, tracks: &[Track]) {
    let names: Vec<String> = tracks.iter().map(|t| format!("{:>12}", t.name)).collect();
    println!("{:>8}{}", label, names.concat());
}

fn print_row(at: f64, tracks: &[Track]) {
    let cells: Vec<String> = values(tracks).iter().map(|v| format!("{:>12.4}", v)).collect();
    println!("{:>8.4}{}", at, cells.concat());
}
