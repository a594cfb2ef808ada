use macroquad::math::{vec2, Vec2};

use crate::hitbox::Hitbox;
use crate::input::FrameInput;

#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn new(start_pos: Vec2, size: Vec2) -> Self {
        Self {
            position: start_pos,
            size,
        }
    }

    /// 🚀 Slide the ship sideways. Right wins when both keys are held.
    pub fn steer(&mut self, input: &FrameInput, speed: f32) {
        if input.right {
            self.position.x += speed;
        } else if input.left {
            self.position.x -= speed;
        }
    }

    /// Where an idle bullet waits before it is fired
    pub fn muzzle(&self, offset: f32) -> Vec2 {
        vec2(self.position.x + offset, self.position.y)
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.position, self.size)
    }

    pub fn respawn(&mut self, pos: Vec2) {
        self.position = pos;
    }
}
