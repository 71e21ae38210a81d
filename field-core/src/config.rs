use crate::{
    color::PaletteHex,
    error::{FieldError, FieldResult},
    types::Viewport,
};
use glam::Vec2;
use rand::Rng;

/// A spawn rectangle in viewport-fraction coordinates (`0.0..=1.0` on both axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Zone {
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Draws a uniformly distributed pixel position inside this zone.
    pub fn sample(&self, viewport: Viewport, rng: &mut impl Rng) -> Vec2 {
        let tx: f32 = rng.random();
        let ty: f32 = rng.random();
        Vec2::new(
            viewport.width * (self.x_min + tx * (self.x_max - self.x_min)),
            viewport.height * (self.y_min + ty * (self.y_max - self.y_min)),
        )
    }

    fn validate(&self, idx: usize) -> FieldResult<()> {
        let unit = 0.0f32..=1.0;
        let fractions = [self.x_min, self.x_max, self.y_min, self.y_max];
        if !fractions.iter().all(|f| unit.contains(f)) {
            return Err(FieldError::invalid_config(format!(
                "zone {idx} has fractions outside 0..=1: {self:?}"
            )));
        }
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(FieldError::invalid_config(format!(
                "zone {idx} has min > max: {self:?}"
            )));
        }
        Ok(())
    }
}

/// Corners first, then a strip along the top and one along the bottom.
pub const DEFAULT_ZONES: [Zone; 6] = [
    Zone::new(0.02, 0.30, 0.02, 0.35),
    Zone::new(0.70, 0.98, 0.02, 0.35),
    Zone::new(0.02, 0.30, 0.65, 0.98),
    Zone::new(0.70, 0.98, 0.65, 0.98),
    Zone::new(0.25, 0.55, 0.02, 0.15),
    Zone::new(0.45, 0.75, 0.85, 0.98),
];

/// Every constant of the animation, physics and rendering alike.
///
/// Radii ending in `_factor` are fractions of the viewport's shorter side
/// and are resolved each frame; the rest are absolute.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Grid pitch in pixels.
    pub gap: f32,
    /// Base time step; the per-frame step is `speed * speed_scale`.
    pub speed: f32,
    pub speed_scale: f32,
    pub attractor_count: usize,
    /// Hex literals parsed into a [`crate::color::Palette`] by [`crate::simulation::Simulation::new`].
    pub colors: PaletteHex,
    /// Spawn zones, used round-robin by attractor index.
    pub zones: Vec<Zone>,

    pub peer_radius_factor: f32,
    pub peer_strength: f32,
    /// Squared distance below which two attractors are treated as coincident.
    pub peer_min_dist_sq: f32,

    pub pointer_radius: f32,
    pub pointer_strength: f32,

    pub max_speed: f32,
    pub damping: f32,
    /// Damping applies strictly above this speed (and up to `max_speed`).
    pub damping_above: f32,
    pub boost: f32,
    /// Boost applies to nonzero speeds strictly below this.
    pub boost_below: f32,

    pub influence_radius_factor: f32,
    /// Scale applied to the summed falloff before the center reflector.
    pub intensity_scale: f32,
    /// Cells at or below this intensity are not drawn.
    pub draw_threshold: f32,
    /// Dot radius at full intensity, as a fraction of `gap`.
    pub dot_radius_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap: 6.0,
            speed: 0.001,
            speed_scale: 273.0,
            attractor_count: 6,
            colors: PaletteHex::default(),
            zones: DEFAULT_ZONES.to_vec(),

            peer_radius_factor: 0.468,
            peer_strength: 0.04704,
            peer_min_dist_sq: 0.1,

            pointer_radius: 400.0,
            pointer_strength: 5.0,

            max_speed: 10.0,
            damping: 0.96,
            damping_above: 1.0,
            boost: 1.05,
            boost_below: 0.5,

            influence_radius_factor: 0.6,
            intensity_scale: 0.5,
            draw_threshold: 0.01,
            dot_radius_factor: 0.48,
        }
    }
}

impl Config {
    /// Position advance per unit of velocity, per frame.
    ///
    /// ### Returns
    /// `speed * speed_scale`; with the defaults, `0.273`.
    pub fn move_step(&self) -> f32 {
        self.speed * self.speed_scale
    }

    /// Range of peer repulsion in pixels.
    ///
    /// ### Parameters
    /// - `viewport` - Current surface; the radius scales with its shorter side.
    pub fn peer_radius(&self, viewport: Viewport) -> f32 {
        viewport.min_side() * self.peer_radius_factor
    }

    /// Range of one attractor's field contribution, also used as the
    /// center reflector's radius.
    ///
    /// ### Parameters
    /// - `viewport` - Current surface; the radius scales with its shorter side.
    pub fn influence_radius(&self, viewport: Viewport) -> f32 {
        viewport.min_side() * self.influence_radius_factor
    }

    /// Zone used to seed the attractor at `idx`.
    ///
    /// ### Returns
    /// `zones[idx % zones.len()]`, or `None` if there are no zones.
    pub fn zone_for(&self, idx: usize) -> Option<&Zone> {
        if self.zones.is_empty() {
            None
        } else {
            self.zones.get(idx % self.zones.len())
        }
    }

    /// Checks the invariants the simulation relies on.
    ///
    /// ### Errors
    /// Returns [`FieldError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> FieldResult<()> {
        let positive = [
            ("gap", self.gap),
            ("speed", self.speed),
            ("speed_scale", self.speed_scale),
            ("peer_radius_factor", self.peer_radius_factor),
            ("pointer_radius", self.pointer_radius),
            ("max_speed", self.max_speed),
            ("influence_radius_factor", self.influence_radius_factor),
            ("dot_radius_factor", self.dot_radius_factor),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(FieldError::invalid_config(format!(
                    "{name} must be positive and finite, got {v}"
                )));
            }
        }

        let finite = [
            ("peer_strength", self.peer_strength),
            ("peer_min_dist_sq", self.peer_min_dist_sq),
            ("pointer_strength", self.pointer_strength),
            ("damping", self.damping),
            ("damping_above", self.damping_above),
            ("boost", self.boost),
            ("boost_below", self.boost_below),
            ("intensity_scale", self.intensity_scale),
            ("draw_threshold", self.draw_threshold),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(FieldError::invalid_config(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }

        if self.boost_below > self.damping_above || self.damping_above > self.max_speed {
            return Err(FieldError::invalid_config(format!(
                "speed bands must satisfy boost_below <= damping_above <= max_speed, got {} / {} / {}",
                self.boost_below, self.damping_above, self.max_speed
            )));
        }

        if self.attractor_count == 0 {
            return Err(FieldError::invalid_config("attractor_count must be nonzero"));
        }
        if self.zones.is_empty() {
            return Err(FieldError::invalid_config("zones must not be empty"));
        }
        for (idx, zone) in self.zones.iter().enumerate() {
            zone.validate(idx)?;
        }
        Ok(())
    }
}

/// Whether a pixel position lies inside `zone` scaled to `viewport`,
/// allowing for float rounding at the far edges.
#[cfg(test)]
pub(crate) fn zone_contains(zone: &Zone, viewport: Viewport, p: Vec2) -> bool {
    const SLACK: f32 = 1e-3;
    let (x0, x1) = (viewport.width * zone.x_min, viewport.width * zone.x_max);
    let (y0, y1) = (viewport.height * zone.y_min, viewport.height * zone.y_max);
    p.x >= x0 - SLACK && p.x <= x1 + SLACK && p.y >= y0 - SLACK && p.y <= y1 + SLACK
}
