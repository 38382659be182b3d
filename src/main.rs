//! Coin Chase entry point.
//!
//! A small chase game running on the sprite core:
//! - **configparser** for `config.ini`
//! - **clap** for the command line
//! - **raylib** (optional `raylib` feature) for a window, textures and keyboard
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing)
//! 2. Register sprite sheets and build the scene
//! 3. Feed host frame time into a fixed-step accumulator; run whole ticks
//! 4. Draw the scene into a sink after the ticks of that frame
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 600
//! cargo run --release --features raylib -- --windowed
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use coinchase::game::{self, CoinChase};
use coinchase::resources::gameconfig::GameConfig;
use coinchase::resources::input::InputState;
use coinchase::resources::worldtime::FixedStep;
use coinchase::systems::render::RecordingSink;

/// Coin Chase
#[derive(Parser)]
#[command(version, about = "Coin Chase: sprite-sheet actors on a fixed-timestep loop")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Fixed ticks to simulate when running headless.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seed for coin placement.
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Write the draw commands of the last frame as JSON.
    #[arg(long, value_name = "PATH")]
    dump_draws: Option<PathBuf>,

    /// Open a window instead of running headless.
    #[cfg(feature = "raylib")]
    #[arg(long)]
    windowed: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }

    #[cfg(feature = "raylib")]
    if cli.windowed {
        if let Err(e) = windowed::run(config, cli.seed) {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_headless(&cli, config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Simulate `cli.ticks` fixed ticks with a scripted player that fires twice a
/// second, logging the status once per simulated second.
fn run_headless(cli: &Cli, config: GameConfig) -> Result<(), Box<dyn Error>> {
    let textures = game::default_textures(&config);
    let fps = config.target_fps.max(1);
    let mut scene = CoinChase::new(config, &textures, cli.seed)?;
    let step = FixedStep::from_fps(fps).step();
    let mut input = InputState::default();
    let mut sink = RecordingSink::new();

    info!("Running {} ticks headless at {} fps", cli.ticks, fps);
    for tick in 0..cli.ticks {
        input.fire.set(tick % (fps / 2).max(1) == 0);
        scene.tick(step, &input);
        sink.clear();
        scene.draw(&mut sink);
        if (tick + 1) % fps == 0 {
            info!("t={:.1}s {}", scene.time().elapsed, scene.status());
        }
    }

    info!(
        "Finished: {} ({} draws, {} restarts)",
        scene.status(),
        sink.len(),
        scene.restarts()
    );

    if let Some(path) = &cli.dump_draws {
        std::fs::write(path, sink.to_json()?)?;
        info!("Draw commands written to {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "raylib")]
mod windowed {
    use std::error::Error;

    use log::info;
    use raylib::prelude::*;
    use rustc_hash::FxHashMap;

    use coinchase::game::{BULLET_SHEET, COIN_SHEET, CoinChase, ENEMY_SHEETS, PLAYER_SHEET};
    use coinchase::resources::gameconfig::GameConfig;
    use coinchase::resources::input::InputState;
    use coinchase::resources::texturestore::TextureStore;
    use coinchase::resources::worldtime::FixedStep;
    use coinchase::systems::render::RaylibSink;

    pub fn run(config: GameConfig, seed: u64) -> Result<(), Box<dyn Error>> {
        let (width, height) = config.window_size();
        let (mut rl, thread) = raylib::init()
            .size(width as i32, height as i32)
            .title("Coin Chase")
            .build();
        rl.set_target_fps(config.target_fps);

        let mut textures = FxHashMap::default();
        let mut store = TextureStore::new();
        let keys = [PLAYER_SHEET, COIN_SHEET, BULLET_SHEET]
            .into_iter()
            .chain(ENEMY_SHEETS);
        for key in keys {
            let path = format!("assets/{}.png", key);
            let texture = rl
                .load_texture(&thread, &path)
                .map_err(|e| format!("{}: {}", path, e))?;
            store.insert(key, texture.width() as u32, texture.height() as u32);
            textures.insert(key.to_string(), texture);
        }
        info!("Loaded {} textures", textures.len());

        let mut fixed = FixedStep::from_fps(config.target_fps);
        let mut scene = CoinChase::new(config, &store, seed)?;
        let mut input = InputState::default();

        rl.set_exit_key(None);
        while !rl.window_should_close() {
            input.update_from_raylib(&rl);
            if input.quit_requested() {
                info!("Quit requested");
                break;
            }
            scene.run_frame(&mut fixed, rl.get_frame_time(), &mut input);

            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::DARKGREEN);
            {
                let mut sink = RaylibSink::new(&mut d, &textures);
                scene.draw(&mut sink);
            }
            d.draw_text(&scene.status(), 4, 4, 20, Color::WHITE);
        }
        Ok(())
    }
}
