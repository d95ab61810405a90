//! Engine loop driver
//!
//! The engine owns the virtual resolution, the scene registry, and the raw
//! input capture. Each tick it computes the elapsed time, refreshes the
//! pointer snapshot (translated from window pixels into canvas device
//! pixels), updates the active scene, dispatches pointer gestures, and draws
//! the scene into an integer-scaled, letterboxed canvas so pixel art stays
//! crisp at any window size.

use std::collections::HashMap;

use macroquad::color::Color;
use macroquad::input::{
    is_mouse_button_down, is_mouse_button_pressed, is_mouse_button_released, mouse_position,
    MouseButton,
};
use macroquad::shapes::draw_rectangle;
use macroquad::time::{get_frame_time, get_time};
use macroquad::window::{clear_background, next_frame, screen_height, screen_width};

use crate::canvas::ScreenCanvas;
use crate::config::EngineConfig;
use crate::input::InputState;
use crate::scene::Scene;

/// Color of the letterbox bars around the virtual canvas
const BACKDROP: Color = Color::new(0.04, 0.04, 0.05, 1.0);

/// The fixed-resolution loop driver.
pub struct Engine {
    /// Virtual resolution in world/UI pixels
    width: f32,
    height: f32,
    background: Color,

    /// Integer device-pixels-per-virtual-pixel factor, recomputed per frame
    scale: f32,
    /// Top-left of the virtual canvas within the window
    offset_x: f32,
    offset_y: f32,

    scenes: HashMap<String, Scene>,
    current: Option<String>,

    input: InputState,
    running: bool,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            background: config.background_color(),
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            scenes: HashMap::new(),
            current: None,
            input: InputState::default(),
            running: false,
        }
    }

    /// Virtual resolution `(width, height)`.
    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Current integer upscale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Register a scene under a name, replacing any scene with that name.
    pub fn add_scene(&mut self, name: impl Into<String>, scene: Scene) {
        self.scenes.insert(name.into(), scene);
    }

    /// Switch the active scene, running `on_exit` on the old scene and
    /// `on_enter` on the new one. An unknown name deactivates the current
    /// scene and leaves none active.
    pub fn set_scene(&mut self, name: &str) {
        if let Some(previous) = self.current.take() {
            if let Some(scene) = self.scenes.get_mut(&previous) {
                scene.on_exit();
            }
        }

        match self.scenes.get_mut(name) {
            Some(scene) => {
                scene.on_enter((self.width, self.height));
                self.current = Some(name.to_string());
                log::info!("entered scene '{}'", name);
            }
            None => {
                log::warn!("set_scene: no scene named '{}'", name);
            }
        }
    }

    pub fn scene_mut(&mut self, name: &str) -> Option<&mut Scene> {
        self.scenes.get_mut(name)
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        self.current.as_ref().and_then(|n| self.scenes.get(n))
    }

    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.current.as_deref().and_then(|n| self.scenes.get_mut(n))
    }

    /// Fit the virtual canvas into the window at the largest integer scale
    /// and center it.
    fn compute_scale(&mut self) {
        let sw = screen_width();
        let sh = screen_height();

        self.scale = ((sw / self.width).min(sh / self.height)).floor().max(1.0);

        let canvas_w = self.width * self.scale;
        let canvas_h = self.height * self.scale;
        self.offset_x = ((sw - canvas_w) * 0.5).floor();
        self.offset_y = ((sh - canvas_h) * 0.5).floor();
    }

    /// Refresh the pointer snapshot from the backend.
    ///
    /// Positions are translated into canvas device pixels (letterbox origin
    /// subtracted). Edge flags come from the backend's per-frame press and
    /// release events, so nothing needs clearing at end of frame.
    fn poll_pointer(&mut self) {
        let (mx, my) = mouse_position();
        let x = mx - self.offset_x;
        let y = my - self.offset_y;
        let now = get_time() * 1000.0;

        let pointer = &mut self.input.pointer;
        pointer.x = x;
        pointer.y = y;
        pointer.now = now;
        pointer.is_down = is_mouse_button_down(MouseButton::Left);
        pointer.just_down = is_mouse_button_pressed(MouseButton::Left);
        pointer.just_up = is_mouse_button_released(MouseButton::Left);

        if pointer.just_down {
            pointer.down_x = x;
            pointer.down_y = y;
            pointer.down_time = now;
        }
        if pointer.just_up {
            pointer.up_time = now;
        }
    }

    /// Advance the active scene by `dt` milliseconds and dispatch pointer
    /// gestures.
    pub fn update(&mut self, dt: f32) {
        let Some(name) = self.current.clone() else {
            return;
        };
        if let Some(scene) = self.scenes.get_mut(&name) {
            scene.update(dt, &self.input);
            scene.handle_pointer(&self.input.pointer, self.scale);
        }
    }

    /// Draw the letterbox, the background-filled virtual canvas, and the
    /// active scene.
    pub fn draw(&self) {
        clear_background(BACKDROP);

        let mut canvas = ScreenCanvas::new(self.offset_x, self.offset_y);
        draw_rectangle(
            self.offset_x,
            self.offset_y,
            self.width * self.scale,
            self.height * self.scale,
            self.background,
        );

        if let Some(scene) = self.current_scene() {
            scene.draw(&mut canvas, self.scale);
        }
    }

    /// One full frame: scale fit, input poll, update, draw.
    /// Exposed for callers embedding the engine in their own loop.
    pub fn tick(&mut self, dt: f32) {
        self.compute_scale();
        self.poll_pointer();
        self.update(dt);
        self.draw();
    }

    /// Run the frame loop until [`stop`](Self::stop) is called from a scene
    /// hook or component.
    pub async fn run(&mut self) {
        self.running = true;
        while self.running {
            let dt = get_frame_time() * 1000.0;
            self.tick(dt);
            next_frame().await;
        }
    }

    /// End the loop after the current frame.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn engine() -> Engine {
        Engine::new(&EngineConfig::default())
    }

    #[test]
    fn test_set_scene_runs_lifecycle_hooks() {
        let entered = Rc::new(Cell::new(0));
        let exited = Rc::new(Cell::new(0));

        let mut first = Scene::new();
        let e = entered.clone();
        first.set_enter_hook(move |_| e.set(e.get() + 1));
        let x = exited.clone();
        first.set_exit_hook(move |_| x.set(x.get() + 1));

        let mut engine = engine();
        engine.add_scene("first", first);
        engine.add_scene("second", Scene::new());

        engine.set_scene("first");
        assert_eq!(entered.get(), 1);
        assert_eq!(exited.get(), 0);
        // the scene learned the virtual viewport on entry
        assert_eq!(
            engine.current_scene().unwrap().viewport(),
            Some((160.0, 144.0))
        );

        engine.set_scene("second");
        assert_eq!(exited.get(), 1);
    }

    #[test]
    fn test_set_scene_unknown_name_deactivates() {
        let mut engine = engine();
        engine.add_scene("only", Scene::new());
        engine.set_scene("only");
        assert!(engine.current_scene().is_some());

        engine.set_scene("nope");
        assert!(engine.current_scene().is_none());
    }

    #[test]
    fn test_update_without_scene_is_noop() {
        let mut engine = engine();
        engine.update(16.0);
    }
}
