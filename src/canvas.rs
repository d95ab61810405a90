//! Immediate-mode drawing surface
//!
//! Everything the engine draws goes through the `Canvas` trait: sub-rectangle
//! image blits, filled rectangles, and text. The production implementation
//! (`ScreenCanvas`) forwards to macroquad with an accumulated translation so
//! the scene can apply the camera transform to world objects only. Tests use
//! a recording canvas to assert on the calls without a window.
//!
//! All coordinates handed to a canvas are device pixels; callers multiply
//! virtual coordinates by the combined draw scale before calling in.

use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::text::{draw_text, measure_text};
use macroquad::texture::{draw_texture_ex, DrawTextureParams};

use crate::assets::Image;
use crate::rect::Rect;

/// Horizontal anchoring for text draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A 2D immediate-mode drawing surface.
pub trait Canvas {
    /// Push a translation; all subsequent draws are offset by the sum of the
    /// active stack. Used for the camera transform and the letterbox origin.
    fn push_translation(&mut self, dx: f32, dy: f32);

    /// Pop the most recent translation.
    fn pop_translation(&mut self);

    /// Draw the `src` sub-rectangle of an image scaled into `dest`.
    /// With `flip_x` the source is mirrored horizontally within the same
    /// destination rectangle, preserving the logical top-left anchor.
    fn draw_region(&mut self, image: &Image, src: Rect, dest: Rect, flip_x: bool);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a line of text with its top-left (or top-center/top-right,
    /// per `align`) at the given position.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, align: TextAlign);
}

/// The macroquad-backed canvas drawing straight to the window.
pub struct ScreenCanvas {
    stack: Vec<(f32, f32)>,
    offset: (f32, f32),
}

impl ScreenCanvas {
    /// A canvas whose origin sits at the given window position
    /// (the top-left corner of the letterboxed virtual canvas).
    pub fn new(origin_x: f32, origin_y: f32) -> Self {
        Self {
            stack: Vec::new(),
            offset: (origin_x, origin_y),
        }
    }

    fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (self.offset.0 + x, self.offset.1 + y)
    }
}

impl Canvas for ScreenCanvas {
    fn push_translation(&mut self, dx: f32, dy: f32) {
        self.stack.push((dx, dy));
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    fn pop_translation(&mut self) {
        if let Some((dx, dy)) = self.stack.pop() {
            self.offset.0 -= dx;
            self.offset.1 -= dy;
        }
    }

    fn draw_region(&mut self, image: &Image, src: Rect, dest: Rect, flip_x: bool) {
        let Some(texture) = image.texture() else {
            return;
        };
        let (x, y) = self.apply(dest.x, dest.y);
        draw_texture_ex(
            texture,
            x,
            y,
            macroquad::color::WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                source: Some(macroquad::math::Rect::new(src.x, src.y, src.w, src.h)),
                flip_x,
                ..Default::default()
            },
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x, y) = self.apply(rect.x, rect.y);
        macroquad::shapes::draw_rectangle(x, y, rect.w, rect.h, color);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, align: TextAlign) {
        let dims = measure_text(text, None, size as u16, 1.0);
        let (mut x, y) = self.apply(x, y);
        match align {
            TextAlign::Left => {}
            TextAlign::Center => x -= dims.width * 0.5,
            TextAlign::Right => x -= dims.width,
        }
        // measure_text's offset_y converts our top anchor to macroquad's
        // baseline anchor
        draw_text(text, x, y + dims.offset_y, size, color);
    }
}

/// Test canvas recording every draw call with translations applied,
/// so scene/draw-order logic can be asserted headlessly.
#[cfg(test)]
pub struct RecordingCanvas {
    stack: Vec<(f32, f32)>,
    offset: (f32, f32),
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Region {
        src: Rect,
        dest: Rect,
        flip_x: bool,
    },
    FillRect {
        rect: Rect,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
    },
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            offset: (0.0, 0.0),
            calls: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn push_translation(&mut self, dx: f32, dy: f32) {
        self.stack.push((dx, dy));
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    fn pop_translation(&mut self) {
        if let Some((dx, dy)) = self.stack.pop() {
            self.offset.0 -= dx;
            self.offset.1 -= dy;
        }
    }

    fn draw_region(&mut self, _image: &Image, src: Rect, dest: Rect, flip_x: bool) {
        let dest = Rect::new(self.offset.0 + dest.x, self.offset.1 + dest.y, dest.w, dest.h);
        self.calls.push(DrawCall::Region { src, dest, flip_x });
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        let rect = Rect::new(self.offset.0 + rect.x, self.offset.1 + rect.y, rect.w, rect.h);
        self.calls.push(DrawCall::FillRect { rect });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _size: f32, _color: Color, _align: TextAlign) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x: self.offset.0 + x,
            y: self.offset.1 + y,
        });
    }
}
