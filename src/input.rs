//! Keyboard polling and the pointer device snapshot
//!
//! Input is polled, not event-driven: components ask "is this key down right
//! now" during their update, and the engine refreshes one pointer snapshot
//! per frame before handing it to the active scene.

pub use macroquad::input::KeyCode;
use macroquad::input::{is_key_down, is_key_pressed};

/// Polled keyboard queries, forwarded to the backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keyboard;

impl Keyboard {
    /// Is the key currently held down?
    pub fn is_down(&self, key: KeyCode) -> bool {
        is_key_down(key)
    }

    /// Was the key pressed during this frame?
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        is_key_pressed(key)
    }
}

/// One frame's view of the pointer device, in canvas device pixels.
///
/// `just_down`/`just_up` are one-frame edge flags. Timestamps are in
/// milliseconds on the engine clock; `now` is the instant this snapshot was
/// taken, so gesture code never reads the clock itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSnapshot {
    pub x: f32,
    pub y: f32,
    pub is_down: bool,
    pub just_down: bool,
    pub just_up: bool,
    /// Position at the most recent press
    pub down_x: f32,
    pub down_y: f32,
    /// Timestamp of the most recent press
    pub down_time: f64,
    /// Timestamp of the most recent release
    pub up_time: f64,
    /// Timestamp of this frame
    pub now: f64,
}

/// Combined keyboard and pointer state owned by the engine,
/// passed read-only into component updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub keyboard: Keyboard,
    pub pointer: PointerSnapshot,
}
