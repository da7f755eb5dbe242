//! Rice Rocks native entry point
//!
//! Runs the game headless with a scripted attract-mode input, logging audio
//! and HUD output. `RUST_LOG=debug` shows every sound and collision.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rice_rocks::Settings;
use rice_rocks::assets::Assets;
use rice_rocks::audio::{AudioManager, LogSink};
use rice_rocks::driver::{GameLoop, Pacing};
use rice_rocks::input::ScriptedInput;
use rice_rocks::renderer::LogRenderer;
use rice_rocks::sim::Session;

const DEFAULT_FRAMES: u64 = 60 * 60;

#[derive(Debug, Parser)]
#[command(name = "rice-rocks")]
#[command(about = "Play a scripted game of Rice Rocks and report the score")]
struct Args {
    /// Settings file (JSON); defaults are used when it does not exist
    #[arg(long, default_value = Settings::FILE_NAME)]
    settings: PathBuf,

    /// Number of frames to simulate
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u64,

    /// Spawner seed, overriding the settings file
    #[arg(long)]
    seed: Option<u64>,

    /// Asset directory holding manifest.json, overriding the settings file
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Skip loading and validating assets
    #[arg(long)]
    no_assets: bool,

    /// Pace frames at 60 Hz instead of running as fast as possible
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Rice Rocks (native) starting...");

    let args = Args::parse();
    let mut settings = Settings::load(&args.settings);
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(dir) = args.assets {
        settings.asset_dir = dir;
    }

    if args.no_assets {
        log::info!("Skipping asset loading");
    } else {
        let assets = Assets::from_dir(&settings.asset_dir).with_context(|| {
            format!(
                "could not load game assets from {}",
                settings.asset_dir.display()
            )
        })?;
        log::debug!("{} assets ready", assets.len());
    }

    let seed = settings.resolve_seed();
    let pacing = if args.realtime {
        Pacing::RealTime
    } else {
        Pacing::Headless
    };
    let mut game = GameLoop::new(
        Session::new(seed),
        ScriptedInput::demo(args.frames),
        AudioManager::new(LogSink, &settings),
        LogRenderer::default(),
    )
    .with_pacing(pacing);

    let exit = game.run(Some(args.frames));
    log::info!(
        "Finished ({:?}) after {} frames: score {}, lives {}, {} rocks on screen",
        exit,
        game.frame(),
        game.session.score,
        game.session.lives,
        game.session.rocks.len()
    );
    println!(
        "seed {} score {} lives {}",
        seed, game.session.score, game.session.lives
    );
    Ok(())
}
