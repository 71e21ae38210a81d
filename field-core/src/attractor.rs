use crate::{config::Config, types::Viewport};
use glam::Vec2;
use rand::Rng;

/// A moving point that lights up nearby cells and repels its peers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attractor {
    /// Position in viewport pixels.
    pub pos: Vec2,
    /// Velocity in pixels per unit step; scaled by
    /// [`Config::move_step`] when integrated.
    pub vel: Vec2,
}

impl Attractor {
    /// Magnitude of the velocity.
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The ordered attractor collection; order is the update order.
#[derive(Clone, Debug, Default)]
pub struct AttractorSet {
    pub points: Vec<Attractor>,
}

impl AttractorSet {
    /// Attractors at rest at the given positions.
    pub fn from_positions(positions: Vec<Vec2>) -> Self {
        let points = positions
            .into_iter()
            .map(|pos| Attractor {
                pos,
                vel: Vec2::ZERO,
            })
            .collect();

        Self { points }
    }

    /// Seeds a fresh collection for `viewport`.
    ///
    /// ### Parameters
    /// - `cfg` - Provides `attractor_count` and the spawn zones.
    /// - `viewport` - Surface the zone fractions are scaled to.
    /// - `rng` - Random source; a seeded RNG gives a reproducible set.
    ///
    /// ### Returns
    /// `cfg.attractor_count` attractors, the `i`-th one inside
    /// `cfg.zone_for(i)`, each with a velocity drawn from `[-1, 1)` per
    /// axis. Empty if `cfg.zones` is empty.
    pub fn spawn_in_zones(cfg: &Config, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let points = (0..cfg.attractor_count)
            .map_while(|i| {
                let zone = cfg.zone_for(i)?;
                let pos = zone.sample(viewport, rng);
                let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
                Some(Attractor { pos, vel })
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
