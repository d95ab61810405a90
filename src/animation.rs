//! Sprite animation playback
//!
//! `SpriteAnimation` advances a frame cursor over time; `AnimationController`
//! holds a set of named animations and switches between them. Playback state
//! is all in milliseconds, matching the per-frame delta the engine hands out.

use std::collections::HashMap;

use crate::canvas::Canvas;
use crate::rect::Rect;
use crate::sprite::SpriteSheet;

/// Plays an ordered sequence of sheet frames at a fixed duration per frame.
///
/// The frame list may repeat indices and use any order. A looping animation
/// cycles forever; a non-looping one freezes on its final frame once the
/// total duration has elapsed and stays there until `reset`.
#[derive(Clone)]
pub struct SpriteAnimation {
    sheet: SpriteSheet,
    frames: Vec<usize>,
    frame_duration: f32,
    looped: bool,

    time: f32,
    current: usize,
}

impl SpriteAnimation {
    /// A looping animation. Panics on an empty frame list or non-positive
    /// frame duration; both are configuration bugs with no sensible playback.
    pub fn new(sheet: SpriteSheet, frames: Vec<usize>, frame_duration: f32) -> Self {
        assert!(!frames.is_empty(), "animation requires at least one frame");
        assert!(
            frame_duration > 0.0,
            "animation frame duration must be positive (got {})",
            frame_duration
        );
        Self {
            sheet,
            frames,
            frame_duration,
            looped: true,
            time: 0.0,
            current: 0,
        }
    }

    /// Play once and freeze on the final frame.
    pub fn once(sheet: SpriteSheet, frames: Vec<usize>, frame_duration: f32) -> Self {
        let mut anim = Self::new(sheet, frames, frame_duration);
        anim.looped = false;
        anim
    }

    pub fn is_looping(&self) -> bool {
        self.looped
    }

    /// Index into the frame sequence (not the sheet) currently shown.
    pub fn current_frame_index(&self) -> usize {
        self.current
    }

    /// Total play time of one pass over the frame list, in ms.
    pub fn total_duration(&self) -> f32 {
        self.frame_duration * self.frames.len() as f32
    }

    /// A non-looping animation that has reached its final frame.
    pub fn is_finished(&self) -> bool {
        !self.looped && self.current == self.frames.len() - 1 && self.time >= self.total_duration() - 1.0
    }

    /// Rewind to the first frame.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.current = 0;
    }

    /// Advance playback by `dt` milliseconds.
    pub fn update(&mut self, dt: f32) {
        self.time += dt;

        let total = self.total_duration();
        if !self.looped && self.time >= total {
            // Pin just short of the end so the cursor math below would also
            // land on the last frame; this state is absorbing until reset()
            self.time = total - 1.0;
            self.current = self.frames.len() - 1;
            return;
        }

        let pos = self.time % total;
        self.current = ((pos / self.frame_duration) as usize).min(self.frames.len() - 1);
    }

    /// Draw the current frame with its top-left at virtual `(x, y)`.
    ///
    /// `flip_x` mirrors the frame in place: the destination rectangle is
    /// unchanged, so callers never special-case flipped positioning.
    pub fn draw(&self, canvas: &mut dyn Canvas, scale: f32, x: f32, y: f32, flip_x: bool) {
        let src = self.sheet.frame_rect(self.frames[self.current]);
        let dest = Rect::new(x * scale, y * scale, src.w * scale, src.h * scale);
        canvas.draw_region(self.sheet.image(), src, dest, flip_x);
    }
}

/// A named-state registry of animations with exactly one active state.
///
/// Switching to the already-active state or to an unknown name is a no-op;
/// a genuine transition rewinds the newly active animation.
#[derive(Default)]
pub struct AnimationController {
    animations: HashMap<String, SpriteAnimation>,
    current: Option<String>,
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current: None,
        }
    }

    /// Register a named animation. The first registered state becomes the
    /// initial active state.
    pub fn with(mut self, name: impl Into<String>, animation: SpriteAnimation) -> Self {
        self.add(name, animation);
        self
    }

    /// Register a named animation, replacing any previous one with that name.
    pub fn add(&mut self, name: impl Into<String>, animation: SpriteAnimation) {
        let name = name.into();
        if self.current.is_none() {
            self.current = Some(name.clone());
        }
        self.animations.insert(name, animation);
    }

    /// Name of the active state, if any.
    pub fn state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The active animation, if any.
    pub fn current(&self) -> Option<&SpriteAnimation> {
        self.current
            .as_ref()
            .and_then(|name| self.animations.get(name))
    }

    /// Switch the active state.
    ///
    /// Idempotent when `name` is already active. Unknown names are ignored
    /// so speculative UI code can request states that may not exist.
    pub fn set_state(&mut self, name: &str) {
        if self.current.as_deref() == Some(name) {
            return;
        }
        match self.animations.get_mut(name) {
            Some(animation) => {
                animation.reset();
                self.current = Some(name.to_string());
            }
            None => {
                log::debug!("set_state: unknown animation state '{}'", name);
            }
        }
    }

    /// Advance the active animation only.
    pub fn update(&mut self, dt: f32) {
        if let Some(name) = &self.current {
            if let Some(animation) = self.animations.get_mut(name) {
                animation.update(dt);
            }
        }
    }

    /// Draw the active animation; a controller with no active state draws
    /// nothing.
    pub fn draw(&self, canvas: &mut dyn Canvas, scale: f32, x: f32, y: f32, flip_x: bool) {
        if let Some(animation) = self.current() {
            animation.draw(canvas, scale, x, y, flip_x);
        }
    }
}
