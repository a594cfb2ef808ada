use log::{debug, trace};
use macroquad::math::{vec2, Vec2};
use rand::{rngs::StdRng, Rng};

use crate::config::GameplayConfig;
use crate::hitbox::Hitbox;
use crate::input::FrameInput;
use crate::player::Player;

pub const SCREEN_WIDTH: f32 = 480.0;
pub const SCREEN_HEIGHT: f32 = 640.0;

const PLAYER_SPAWN: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 100.0);

const SCORE_ANCHOR: Vec2 = Vec2::new(10.0, 20.0);
const GAME_OVER_TEXT: &str = "Game Over";
const GAME_OVER_ANCHOR: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0 - 77.0, SCREEN_HEIGHT / 4.0);
const RESTART_TEXT: &str = "Press \"R\" to restart";
const RESTART_ANCHOR: Vec2 = Vec2::new(0.0, SCREEN_HEIGHT / 2.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Bullet,
    Meteor,
}

/// One thing to put on screen. Text positions are baseline-left anchors.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite { sprite: Sprite, position: Vec2 },
    Text { text: String, position: Vec2 },
}

impl DrawCommand {
    fn sprite(sprite: Sprite, position: Vec2) -> Self {
        Self::Sprite { sprite, position }
    }

    fn text(text: impl Into<String>, position: Vec2) -> Self {
        Self::Text {
            text: text.into(),
            position,
        }
    }
}

/// Natural pixel size of each sprite, used for collision boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub player: Vec2,
    pub bullet: Vec2,
    pub meteor: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            player: vec2(98.0, 75.0),
            bullet: vec2(13.0, 37.0),
            meteor: vec2(28.0, 28.0),
        }
    }
}

// The one bullet, parked at the muzzle while inactive
#[derive(Debug)]
struct Bullet {
    pos: Vec2,
    active: bool,
}

// Falling meteor
#[derive(Debug)]
struct Meteor {
    pos: Vec2,
}

pub struct GameState {
    player: Player,
    bullet: Bullet,
    meteors: Vec<Meteor>,
    score: u32,
    scene: Scene,

    sprites: SpriteSizes,
    gameplay: GameplayConfig,
    rng: StdRng,
}

impl GameState {
    pub fn new(gameplay: GameplayConfig, sprites: SpriteSizes, rng: StdRng) -> Self {
        let player = Player::new(PLAYER_SPAWN, sprites.player);
        let bullet = Bullet {
            pos: player.muzzle(gameplay.muzzle_offset),
            active: false,
        };

        Self {
            player,
            bullet,
            meteors: Vec::with_capacity(gameplay.meteor_target),
            score: 0,
            scene: Scene::Playing,
            sprites,
            gameplay,
            rng,
        }
    }

    /// Advance the game by one frame.
    ///
    /// While the game is over only the restart key is looked at. Otherwise the
    /// ship moves, the bullet flies or follows the muzzle, meteors are topped
    /// up and fall, and finally the bullet and then the ship are tested
    /// against the meteors.
    pub fn update(&mut self, input: &FrameInput) {
        if self.scene == Scene::GameOver {
            if input.restart {
                self.restart();
            }
            return;
        }

        self.player.steer(input, self.gameplay.player_speed);
        if input.fire {
            self.bullet.active = true;
        }

        // Update bullet
        if self.bullet.active {
            self.bullet.pos.y -= self.gameplay.bullet_speed;
            if self.bullet.pos.y < 0.0 {
                self.bullet.active = false;
            }
        }
        if !self.bullet.active {
            self.bullet.pos = self.player.muzzle(self.gameplay.muzzle_offset);
        }

        self.spawn_meteors();

        // Update meteors, dropping those past the bottom edge
        let speed = self.gameplay.meteor_speed;
        self.meteors.retain_mut(|meteor| {
            meteor.pos.y += speed;
            meteor.pos.y <= SCREEN_HEIGHT
        });

        self.check_bullet_hits();
        self.check_player_hits();
    }

    /// Describe the current frame. Never touches state.
    pub fn render(&self) -> Vec<DrawCommand> {
        match self.scene {
            Scene::Playing => {
                let mut commands = Vec::with_capacity(self.meteors.len() + 3);
                commands.push(DrawCommand::sprite(Sprite::Bullet, self.bullet.pos));
                commands.extend(
                    self.meteors
                        .iter()
                        .map(|meteor| DrawCommand::sprite(Sprite::Meteor, meteor.pos)),
                );
                commands.push(DrawCommand::sprite(Sprite::Player, self.player.position));
                commands.push(DrawCommand::text(
                    format!("Score: {}", self.score),
                    SCORE_ANCHOR,
                ));
                commands
            }
            Scene::GameOver => vec![
                DrawCommand::text(GAME_OVER_TEXT, GAME_OVER_ANCHOR),
                DrawCommand::text(RESTART_TEXT, RESTART_ANCHOR),
            ],
        }
    }

    fn restart(&mut self) {
        debug!("restarting run");
        self.scene = Scene::Playing;
        self.player.respawn(PLAYER_SPAWN);
    }

    fn spawn_meteors(&mut self) {
        let margin = self.gameplay.meteor_margin;
        while self.meteors.len() < self.gameplay.meteor_target {
            let x = self.rng.gen_range(margin..SCREEN_WIDTH as i32 - margin) as f32;
            trace!("spawning meteor at x={x}");
            self.meteors.push(Meteor {
                pos: vec2(x, self.gameplay.meteor_spawn_y),
            });
        }
    }

    fn meteor_box(&self, meteor: &Meteor) -> Hitbox {
        Hitbox::new(meteor.pos, self.sprites.meteor)
    }

    // At most one meteor per frame falls to the bullet
    fn check_bullet_hits(&mut self) {
        if !self.bullet.active {
            return;
        }

        let bullet_box = Hitbox::new(self.bullet.pos, self.sprites.bullet);
        let hit = self
            .meteors
            .iter()
            .position(|meteor| bullet_box.overlaps(&self.meteor_box(meteor)));

        if let Some(idx) = hit {
            self.meteors.remove(idx);
            self.bullet.active = false;
            self.score += 1;
            debug!("meteor destroyed, score {}", self.score);
        }
    }

    fn check_player_hits(&mut self) {
        let player_box = self.player.hitbox();
        let hit = self
            .meteors
            .iter()
            .position(|meteor| player_box.overlaps(&self.meteor_box(meteor)));

        if let Some(idx) = hit {
            self.meteors.remove(idx);
            debug!("ship hit with score {}, game over", self.score);
            self.score = 0;
            self.scene = Scene::GameOver;
        }
    }
}
