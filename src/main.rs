mod config;
mod game;
mod hitbox;
mod input;
mod player;
mod render;

use ::rand::{rngs::StdRng, SeedableRng};
use anyhow::Context;
use log::{error, info};
use macroquad::prelude::*;

use config::GameConfig;
use game::{GameState, SCREEN_HEIGHT, SCREEN_WIDTH};
use input::FrameInput;
use render::Assets;

const CONFIG_PATH: &str = "spaceship.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: "Spaceship".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mut game, assets) = match setup().await {
        Ok(ready) => ready,
        Err(err) => {
            error!("startup failed: {err:#}");
            std::process::exit(1);
        }
    };

    loop {
        let input = FrameInput::poll();

        // Update game state
        game.update(&input);

        // Draw everything
        assets.present(&game.render());

        next_frame().await
    }
}

async fn setup() -> anyhow::Result<(GameState, Assets)> {
    let config =
        GameConfig::load(CONFIG_PATH).with_context(|| format!("loading {CONFIG_PATH}"))?;
    let assets = Assets::load(&config.assets)
        .await
        .context("loading assets")?;

    let rng = match config.seed {
        Some(seed) => {
            info!("meteor spawns seeded with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    info!("starting {}x{} game", SCREEN_WIDTH, SCREEN_HEIGHT);
    let game = GameState::new(config.gameplay, assets.sprite_sizes(), rng);
    Ok((game, assets))
}
