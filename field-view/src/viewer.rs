//! Full-window attractor dot field built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Simulation`] and
//! implements [`eframe::App`] to advance and paint it once per repaint.

use eframe::App;
use field_core::{
    canvas::Canvas, color::Rgb, config::Config, error::FieldResult, simulation::Simulation,
    types::Viewport,
};
use glam::Vec2;
use rand::rngs::ThreadRng;

/// Viewport used until the first frame reports the real window size.
const INITIAL_VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

/// Main application state for the animation window.
///
/// Each frame:
/// 1. Read the central panel's size and the pointer position.
/// 2. Reseed attractors if the panel size changed.
/// 3. Step the simulation and paint the field through a [`PainterCanvas`].
/// 4. Request the next repaint.
pub struct Viewer {
    sim: Simulation<ThreadRng>,
    frames: u64,
}

impl Viewer {
    /// ### Errors
    /// Propagates [`Simulation::new`] failures: an invalid config or a
    /// malformed color literal.
    pub fn new(cfg: Config) -> FieldResult<Self> {
        let sim = Simulation::new(cfg, INITIAL_VIEWPORT, rand::rng())?;
        Ok(Self { sim, frames: 0 })
    }

    /// Runs one frame over `rect` and returns the number of dots drawn.
    ///
    /// Empty rects (e.g. a minimized window) are skipped entirely.
    fn advance(
        &mut self,
        rect: egui::Rect,
        pointer: Option<egui::Pos2>,
        canvas: &mut impl Canvas,
    ) -> usize {
        let viewport = viewport_of(rect);
        if !viewport.has_area() {
            return 0;
        }
        if self.sim.resize(viewport) {
            tracing::info!(
                frame = self.frames,
                width = viewport.width,
                height = viewport.height,
                "viewport resized"
            );
        }
        self.frames += 1;
        self.sim.frame(pointer_in_rect(pointer, rect), canvas)
    }
}

fn viewport_of(rect: egui::Rect) -> Viewport {
    Viewport::new(rect.width(), rect.height())
}

/// Converts an egui screen position into viewport pixels relative to `rect`.
///
/// Positions outside `rect` are passed through; the simulation ignores them.
fn pointer_in_rect(pointer: Option<egui::Pos2>, rect: egui::Rect) -> Option<Vec2> {
    pointer.map(|p| {
        let local = p - rect.min;
        Vec2::new(local.x, local.y)
    })
}

fn to_color32(c: Rgb) -> egui::Color32 {
    let [r, g, b] = c.to_rgb8();
    egui::Color32::from_rgb(r, g, b)
}

/// [`Canvas`] over an [`egui::Painter`], offset so viewport `(0, 0)` is
/// the top-left of `rect`.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    fill: egui::Color32,
}

impl<'a> PainterCanvas<'a> {
    fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            rect,
            fill: egui::Color32::BLACK,
        }
    }
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, color: Rgb) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn set_fill(&mut self, color: Rgb) {
        self.fill = to_color32(color);
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32) {
        let p = self.rect.min + egui::vec2(center.x, center.y);
        self.painter.circle_filled(p, diameter * 0.5, self.fill);
    }
}

impl App for Viewer {
    /// eframe callback that paints one frame into the central panel.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let pointer = ctx.input(|i| i.pointer.latest_pos());

                let mut canvas = PainterCanvas::new(&painter, rect);
                self.advance(rect, pointer, &mut canvas);
            });

        ctx.request_repaint();
    }
}
