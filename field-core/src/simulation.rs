//! The attractor field as a single owned component.
//!
//! [`Simulation`] owns the attractor collection, the per-frame intensity
//! buffer, and the random source used to reseed attractors. Hosts drive
//! it with [`Simulation::resize`], [`Simulation::step`] and
//! [`Simulation::render`] and never touch the attractors directly.

use crate::{
    attractor::{Attractor, AttractorSet},
    canvas::Canvas,
    color::Palette,
    config::Config,
    error::FieldResult,
    field_buffer::{FieldBuffer, GridDims},
    phases,
    types::Viewport,
};
use glam::Vec2;
use rand::Rng;

/// Attractors, field buffer and palette for one viewport.
///
/// The random source is generic so tests can pass a seeded
/// [`rand::rngs::StdRng`] while the viewer uses the thread RNG.
#[derive(Debug)]
pub struct Simulation<R: Rng> {
    cfg: Config,
    palette: Palette,
    viewport: Viewport,
    attractors: AttractorSet,
    field: FieldBuffer,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// Validates `cfg`, parses its colors and seeds attractors for `viewport`.
    ///
    /// ### Parameters
    /// - `cfg` - Every constant of the animation; kept for the lifetime
    ///   of the simulation.
    /// - `viewport` - Initial surface size.
    /// - `rng` - Source for attractor positions and velocities.
    ///
    /// ### Errors
    /// - [`crate::error::FieldError::InvalidConfig`] if `cfg` fails
    ///   [`Config::validate`].
    /// - [`crate::error::FieldError::InvalidColor`] if any of
    ///   `cfg.colors` is not a `#RRGGBB` literal.
    pub fn new(cfg: Config, viewport: Viewport, rng: R) -> FieldResult<Self> {
        cfg.validate()?;
        let palette = Palette::from_hex(&cfg.colors)?;
        let field = FieldBuffer::with_dims(GridDims::for_viewport(viewport, cfg.gap), cfg.gap);
        let mut sim = Self {
            cfg,
            palette,
            viewport,
            attractors: AttractorSet::default(),
            field,
            rng,
        };
        sim.reinit(viewport);
        Ok(sim)
    }

    /// Replaces every attractor with a freshly seeded one for `viewport`.
    #[tracing::instrument(skip(self))]
    pub fn reinit(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.attractors = AttractorSet::spawn_in_zones(&self.cfg, viewport, &mut self.rng);
        tracing::debug!(
            attractors = self.attractors.len(),
            width = viewport.width,
            height = viewport.height,
            "attractors reseeded"
        );
    }

    /// Reseeds if `viewport` differs from the current one.
    ///
    /// ### Returns
    /// `true` if the attractors were replaced.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.reinit(viewport);
        true
    }

    /// Advances all attractors by one frame.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        phases::update_phase(&mut self.attractors, self.viewport, pointer, &self.cfg);
    }

    /// Samples the field for the current attractors and draws it.
    ///
    /// ### Returns
    /// The number of dots drawn.
    pub fn render(&mut self, canvas: &mut impl Canvas) -> usize {
        phases::sample_phase(&self.attractors, self.viewport, &self.cfg, &mut self.field);
        let drawn = phases::draw_phase(&self.field, &self.cfg, &self.palette, canvas);
        tracing::trace!(
            drawn,
            peak = self.field.max_intensity(),
            "frame rendered"
        );
        drawn
    }

    /// One full frame: [`Simulation::step`] then [`Simulation::render`].
    pub fn frame(&mut self, pointer: Option<Vec2>, canvas: &mut impl Canvas) -> usize {
        self.step(pointer);
        self.render(canvas)
    }

    /// Current attractors, in update order.
    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors.points
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Colors parsed from `cfg.colors` at construction.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Intensities from the most recent [`Simulation::render`].
    pub fn field(&self) -> &FieldBuffer {
        &self.field
    }
}
