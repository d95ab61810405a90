//! Text label component

use macroquad::color::Color;

use crate::canvas::{Canvas, TextAlign};
use crate::component::Component;
use crate::gameobject::GameObject;

/// Renders a line of text relative to the owner's position.
///
/// Works on world objects (camera-transformed) and UI objects alike; the
/// offset moves the text relative to the owner anchor. Font size is in
/// virtual pixels.
pub struct TextLabel {
    pub text: String,
    pub offset_x: f32,
    pub offset_y: f32,
    pub font_size: f32,
    pub color: Color,
    pub align: TextAlign,
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset_x: 0.0,
            offset_y: 0.0,
            font_size: 8.0,
            color: macroquad::color::WHITE,
            align: TextAlign::Left,
        }
    }

    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Component for TextLabel {
    fn draw(&self, canvas: &mut dyn Canvas, scale: f32, owner: &GameObject) {
        if self.text.is_empty() {
            return;
        }
        let x = (owner.x + self.offset_x) * scale;
        let y = (owner.y + self.offset_y) * scale;
        canvas.draw_text(&self.text, x, y, self.font_size * scale, self.color, self.align);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCall, RecordingCanvas};

    #[test]
    fn test_empty_text_draws_nothing() {
        let obj = GameObject::new("label").with_component(TextLabel::new(""));
        let mut canvas = RecordingCanvas::new();
        obj.draw(&mut canvas, 2.0);
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_draw_scales_position() {
        let obj = GameObject::new("label")
            .with_position(10.0, 5.0)
            .with_component(TextLabel::new("Hi!").with_offset(2.0, 0.0));
        let mut canvas = RecordingCanvas::new();
        obj.draw(&mut canvas, 3.0);

        assert_eq!(
            canvas.calls,
            vec![DrawCall::Text {
                text: "Hi!".to_string(),
                x: 36.0,
                y: 15.0,
            }]
        );
    }
}
