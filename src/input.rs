use macroquad::input::{is_key_down, KeyCode};

/// 🎮 Keys held during a single frame.
///
/// Level-triggered: holding a key repeats its effect every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub restart: bool,
}

impl FrameInput {
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            fire: is_key_down(KeyCode::Space),
            restart: is_key_down(KeyCode::R),
        }
    }
}
