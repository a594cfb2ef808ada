use log::info;
use macroquad::prelude::*;
use thiserror::Error;

use crate::config::AssetPaths;
use crate::game::{DrawCommand, Sprite, SpriteSizes};

const FONT_SIZE: u16 = 20;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture {path}")]
    Texture {
        path: String,
        #[source]
        source: macroquad::Error,
    },

    #[error("failed to load font {path}")]
    Font {
        path: String,
        #[source]
        source: macroquad::Error,
    },
}

/// Textures and font, loaded once before the first frame.
pub struct Assets {
    player: Texture2D,
    bullet: Texture2D,
    meteor: Texture2D,
    font: Font,
}

impl Assets {
    pub async fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let player = texture(&paths.player).await?;
        let bullet = texture(&paths.bullet).await?;
        let meteor = texture(&paths.meteor).await?;
        let font = load_ttf_font(&paths.font)
            .await
            .map_err(|source| AssetError::Font {
                path: paths.font.clone(),
                source,
            })?;

        info!(
            "assets loaded: player {:?}, bullet {:?}, meteor {:?}",
            player.size(),
            bullet.size(),
            meteor.size()
        );

        Ok(Self {
            player,
            bullet,
            meteor,
            font,
        })
    }

    pub fn sprite_sizes(&self) -> SpriteSizes {
        SpriteSizes {
            player: self.player.size(),
            bullet: self.bullet.size(),
            meteor: self.meteor.size(),
        }
    }

    /// 🎨 Draw one frame's worth of commands, in order
    pub fn present(&self, commands: &[DrawCommand]) {
        clear_background(BLACK);

        for command in commands {
            match command {
                DrawCommand::Sprite { sprite, position } => {
                    draw_texture(self.texture(*sprite), position.x, position.y, WHITE);
                }
                DrawCommand::Text { text, position } => {
                    draw_text_ex(
                        text,
                        position.x,
                        position.y,
                        TextParams {
                            font: Some(&self.font),
                            font_size: FONT_SIZE,
                            color: WHITE,
                            ..Default::default()
                        },
                    );
                }
            }
        }
    }

    fn texture(&self, sprite: Sprite) -> &Texture2D {
        match sprite {
            Sprite::Player => &self.player,
            Sprite::Bullet => &self.bullet,
            Sprite::Meteor => &self.meteor,
        }
    }
}

async fn texture(path: &str) -> Result<Texture2D, AssetError> {
    let texture = load_texture(path)
        .await
        .map_err(|source| AssetError::Texture {
            path: path.to_owned(),
            source,
        })?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}
