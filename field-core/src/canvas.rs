//! The drawing surface the field renderer paints onto.
//!
//! Hosts implement [`Canvas`] over whatever they draw with; the core
//! never touches a window or GPU itself.

use crate::color::Rgb;
use glam::Vec2;

/// Minimal immediate-mode drawing surface.
///
/// Coordinates are viewport pixels with the origin at the top-left.
pub trait Canvas {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Sets the color used by subsequent [`Canvas::fill_circle`] calls.
    fn set_fill(&mut self, color: Rgb);

    /// Draws a filled circle with the current fill color.
    fn fill_circle(&mut self, center: Vec2, diameter: f32);
}

/// One recorded drawing call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Rgb),
    Circle {
        center: Vec2,
        diameter: f32,
        fill: Rgb,
    },
}

/// A headless [`Canvas`] that records what would have been drawn.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
    fill: Option<Rgb>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded circles as `(center, diameter, fill)`.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgb)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Circle {
                center,
                diameter,
                fill,
            } => Some((center, diameter, fill)),
            DrawOp::Clear(_) => None,
        })
    }

    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgb) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn set_fill(&mut self, color: Rgb) {
        self.fill = Some(color);
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32) {
        // An unset fill draws black, like most immediate-mode APIs.
        let fill = self.fill.unwrap_or(Rgb::new(0.0, 0.0, 0.0));
        self.ops.push(DrawOp::Circle {
            center,
            diameter,
            fill,
        });
    }
}
