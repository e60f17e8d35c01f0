//! Command-recording surface
//!
//! Captures every draw call with the translation and alpha in effect at the
//! time, so draw order and camera application can be inspected.

use glam::Vec2;
use serde::Serialize;

use super::{GradientStop, RenderSurface, Rgba};
use crate::sim::Rect;

/// A recorded primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Rect { rect: Rect, color: Rgba },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    RoundedRect {
        rect: Rect,
        radius: f32,
        stops: usize,
    },
    Line { from: Vec2, to: Vec2, color: Rgba },
    Sprite { rect: Rect },
    Text {
        text: String,
        pos: Vec2,
        color: Rgba,
    },
}

/// A primitive plus the surface state it was drawn under
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    pub primitive: Primitive,
    /// Accumulated translation
    pub offset: Vec2,
    /// Global alpha
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy)]
struct DrawState {
    offset: Vec2,
    alpha: f32,
}

#[derive(Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            state: DrawState {
                offset: Vec2::ZERO,
                alpha: 1.0,
            },
            stack: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.stack.clear();
        self.state = DrawState {
            offset: Vec2::ZERO,
            alpha: 1.0,
        };
    }

    /// Unmatched `save` calls still open
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Sum of effective alpha over every recorded command
    pub fn alpha_sum(&self) -> f32 {
        self.commands.iter().map(|c| c.alpha).sum()
    }

    pub fn count(&self, pred: impl Fn(&Primitive) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(&c.primitive)).count()
    }

    fn push(&mut self, primitive: Primitive) {
        self.commands.push(DrawCommand {
            primitive,
            offset: self.state.offset,
            alpha: self.state.alpha,
        });
    }
}

impl RenderSurface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.offset += Vec2::new(dx, dy);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha;
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.push(Primitive::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.push(Primitive::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, gradient: &[GradientStop]) {
        self.push(Primitive::RoundedRect {
            rect,
            radius,
            stops: gradient.len(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.push(Primitive::Line { from, to, color });
    }

    fn draw_sprite(&mut self, rect: Rect) {
        self.push(Primitive::Sprite { rect });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgba) {
        self.push(Primitive::Text {
            text: text.to_owned(),
            pos,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_state_per_command() {
        let mut s = RecordingSurface::new();
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba::WHITE);
        s.save();
        s.translate(0.0, 300.0);
        s.set_alpha(0.5);
        s.fill_circle(Vec2::ZERO, 2.0, Rgba::WHITE);
        s.restore();
        s.fill_text("hi", Vec2::ZERO, Rgba::WHITE);

        assert_eq!(s.commands.len(), 3);
        assert_eq!(s.commands[1].offset, Vec2::new(0.0, 300.0));
        assert_eq!(s.commands[1].alpha, 0.5);
        assert_eq!(s.commands[2].offset, Vec2::ZERO);
        assert_eq!(s.commands[2].alpha, 1.0);
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut s = RecordingSurface::new();
        s.draw_sprite(Rect::new(1.0, 2.0, 3.0, 4.0));
        let json = serde_json::to_string(&s.commands).unwrap();
        assert!(json.contains(r#""kind":"sprite""#));
    }
}
