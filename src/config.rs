use std::{fs, io, path::Path};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::game::SCREEN_WIDTH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything read from `spaceship.ron`. Every field is optional in the file.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for meteor placement; `None` seeds from entropy
    pub seed: Option<u64>,
    pub assets: AssetPaths,
    pub gameplay: GameplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub player: String,
    pub bullet: String,
    pub meteor: String,
    pub font: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: "assets/playerShip3_red.png".into(),
            bullet: "assets/laserGreen09.png".into(),
            meteor: "assets/meteorBrown_small1.png".into(),
            font: "assets/PressStart2P.ttf".into(),
        }
    }
}

/// Per-frame speeds are in pixels per tick.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameplayConfig {
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub meteor_speed: f32,
    pub meteor_target: usize,
    pub meteor_margin: i32,
    pub meteor_spawn_y: f32,
    pub muzzle_offset: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            bullet_speed: 15.0,
            meteor_speed: 3.0,
            meteor_target: 3,
            meteor_margin: 28,
            meteor_spawn_y: -50.0,
            muzzle_offset: 43.0,
        }
    }
}

impl GameConfig {
    /// Reads the config at `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let config = Self::parse(&contents, &path.display().to_string())?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_owned(),
            source,
        })?;
        config.gameplay.validate()?;
        Ok(config)
    }
}

impl GameplayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let margin = self.meteor_margin;
        if margin < 0 || margin * 2 >= SCREEN_WIDTH as i32 {
            return Err(ConfigError::Invalid(format!(
                "meteor_margin {margin} leaves no room to spawn meteors"
            )));
        }
        Ok(())
    }
}
