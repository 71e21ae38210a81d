//! Per-frame simulation phases for the attractor dot field.
//!
//! The typical frame looks like:
//! 1. [`update_phase`]: attractors repel each other and the pointer,
//!    their speed is regulated, they move, and they bounce off the edges.
//! 2. [`sample_phase`]: every grid cell sums a raised-cosine falloff
//!    from each attractor into a [`FieldBuffer`], then the center
//!    reflector carves a hole in the middle of the viewport.
//! 3. [`draw_phase`]: cells above the draw threshold become filled
//!    circles on a [`Canvas`].

use crate::{
    attractor::AttractorSet,
    canvas::Canvas,
    color::{Palette, Rgb},
    config::Config,
    field_buffer::{FieldBuffer, GridDims},
    types::Viewport,
};
use glam::Vec2;
use std::f32::consts::PI;

/// `0.5 * (1 + cos(pi * t))`: 1 at `t = 0`, 0 at `t = 1`.
#[inline]
pub fn raised_cosine(t: f32) -> f32 {
    0.5 * (1.0 + (PI * t).cos())
}

/// Velocity change pushing `pos` away from a peer at `other`.
///
/// Zero outside `radius` and for (near-)coincident peers, whose
/// separation is below `cfg.peer_min_dist_sq`.
pub fn peer_repulsion(pos: Vec2, other: Vec2, radius: f32, cfg: &Config) -> Vec2 {
    let delta = pos - other;
    let d2 = delta.length_squared();
    if d2 < radius * radius && d2 > cfg.peer_min_dist_sq {
        let d = d2.sqrt();
        let falloff = (radius - d) / radius;
        delta / d * falloff * cfg.peer_strength
    } else {
        Vec2::ZERO
    }
}

/// Velocity change pushing `pos` away from the pointer.
///
/// The pointer only acts while strictly inside `viewport`. A pointer
/// exactly on top of the attractor has no direction and applies nothing.
///
/// ### Parameters
/// - `pos` - Attractor position in viewport pixels.
/// - `pointer` - Last known pointer position, `None` if never seen.
/// - `viewport` - Current surface, used for the inside check.
/// - `cfg` - Provides `pointer_radius` and `pointer_strength`.
pub fn pointer_repulsion(
    pos: Vec2,
    pointer: Option<Vec2>,
    viewport: Viewport,
    cfg: &Config,
) -> Vec2 {
    let Some(p) = pointer.filter(|&p| viewport.contains_strict(p)) else {
        return Vec2::ZERO;
    };
    let r = cfg.pointer_radius;
    let delta = pos - p;
    let d2 = delta.length_squared();
    if d2 < r * r && d2 > 0.0 {
        let d = d2.sqrt();
        let falloff = (r - d) / r;
        delta / d * falloff * cfg.pointer_strength
    } else {
        Vec2::ZERO
    }
}

/// Caps fast attractors, damps moderate ones and nudges near-still ones.
///
/// Speeds in `[boost_below, damping_above]`, and exactly zero, pass
/// through unchanged.
pub fn regulate_speed(vel: Vec2, cfg: &Config) -> Vec2 {
    let s = vel.length();
    if s > cfg.max_speed {
        vel / s * cfg.max_speed
    } else if s > cfg.damping_above {
        vel * cfg.damping
    } else if s < cfg.boost_below && s > 0.0 {
        vel * cfg.boost
    } else {
        vel
    }
}

/// Turns back each velocity component that is carrying `pos` further
/// past an edge.
///
/// A component is negated only when the position is at or beyond an
/// edge *and* the component points outward. A component that already
/// points back inside is kept, so an attractor that overshoots never
/// has its return velocity flipped outward again on the next frame.
/// Positions are not clamped; an attractor may sit outside for a frame
/// or two, by at most one step's travel.
///
/// ### Parameters
/// - `pos` - Position after integration.
/// - `vel` - Velocity that produced `pos`.
/// - `viewport` - Bounds to reflect against, `[0, width] x [0, height]`.
///
/// ### Returns
/// The velocity to carry into the next frame.
pub fn reflect(pos: Vec2, mut vel: Vec2, viewport: Viewport) -> Vec2 {
    if (pos.x <= 0.0 && vel.x < 0.0) || (pos.x >= viewport.width && vel.x > 0.0) {
        vel.x = -vel.x;
    }
    if (pos.y <= 0.0 && vel.y < 0.0) || (pos.y >= viewport.height && vel.y > 0.0) {
        vel.y = -vel.y;
    }
    vel
}

/// Advances every attractor by one frame, in collection order.
///
/// For each attractor `i`:
///
/// 1. Sums [`peer_repulsion`] from every other attractor.
/// 2. Adds [`pointer_repulsion`].
/// 3. Applies [`regulate_speed`].
/// 4. Moves by `vel * cfg.move_step()` and [`reflect`]s the velocity.
///
/// Attractors are updated in place, so attractor `i` sees the positions
/// that peers `0..i` already moved to this frame and the positions that
/// peers `i+1..` had at the end of the previous frame.
///
/// ### Parameters
/// - `attractors` - Set to advance; positions and velocities are rewritten.
/// - `viewport` - Current surface; sets the peer radius and the edges.
/// - `pointer` - Pointer in viewport pixels, if any.
/// - `cfg` - Physics constants.
pub fn update_phase(
    attractors: &mut AttractorSet,
    viewport: Viewport,
    pointer: Option<Vec2>,
    cfg: &Config,
) {
    let peer_radius = cfg.peer_radius(viewport);
    let step = cfg.move_step();

    for i in 0..attractors.points.len() {
        let pos = attractors.points[i].pos;
        let mut vel = attractors.points[i].vel;

        // Peers are read from the live set, including ones already moved.
        for (j, peer) in attractors.points.iter().enumerate() {
            if j == i {
                continue;
            }
            vel += peer_repulsion(pos, peer.pos, peer_radius, cfg);
        }

        vel += pointer_repulsion(pos, pointer, viewport, cfg);
        vel = regulate_speed(vel, cfg);

        let a = &mut attractors.points[i];
        a.pos += vel * step;
        a.vel = reflect(a.pos, vel, viewport);
    }
}

/// Attenuation from the viewport's center: 0 at the center, 1 at or
/// beyond `radius`.
#[inline]
pub fn center_reflector(p: Vec2, center: Vec2, radius: f32) -> f32 {
    let d2 = p.distance_squared(center);
    if d2 < radius * radius {
        1.0 - raised_cosine(d2.sqrt() / radius)
    } else {
        1.0
    }
}

/// Clamped intensity at `p` for the given attractors.
///
/// ### Parameters
/// - `p` - Sample point, usually a cell center.
/// - `attractors` - Every attractor contributes while within `radius`.
/// - `center` - Viewport center for the [`center_reflector`].
/// - `radius` - Influence radius, shared by the falloff and the reflector.
/// - `cfg` - Provides `intensity_scale`.
///
/// ### Returns
/// A value in `[0, 1]`.
pub fn intensity_at(
    p: Vec2,
    attractors: &AttractorSet,
    center: Vec2,
    radius: f32,
    cfg: &Config,
) -> f32 {
    let r2 = radius * radius;
    let influence: f32 = attractors
        .points
        .iter()
        .filter_map(|a| {
            let d2 = p.distance_squared(a.pos);
            (d2 < r2).then(|| raised_cosine(d2.sqrt() / radius))
        })
        .sum();

    let intensity = influence * cfg.intensity_scale * center_reflector(p, center, radius);
    intensity.clamp(0.0, 1.0)
}

/// Fills `field` with the intensity of every grid cell over `viewport`.
///
/// The buffer is resized to the grid and cleared first via
/// [`FieldBuffer::ensure_dims`], then each cell is written with
/// [`intensity_at`] of its center.
///
/// ### Parameters
/// - `attractors` - Positions after this frame's [`update_phase`].
/// - `viewport` - Current surface; sets grid size, radius and center.
/// - `cfg` - Provides `gap` and the field constants.
/// - `field` - Scratch buffer reused across frames.
pub fn sample_phase(
    attractors: &AttractorSet,
    viewport: Viewport,
    cfg: &Config,
    field: &mut FieldBuffer,
) {
    field.ensure_dims(GridDims::for_viewport(viewport, cfg.gap), cfg.gap);
    let dims = field.dims();
    let radius = cfg.influence_radius(viewport);
    let center = viewport.center();

    for row in 0..dims.rows {
        for col in 0..dims.cols {
            let p = field.cell_center(col, row);
            field.set(col, row, intensity_at(p, attractors, center, radius, cfg));
        }
    }
}

/// Color and diameter of the dot for `intensity`, or `None` if the cell
/// is at or below the draw threshold.
pub fn dot_style(intensity: f32, cfg: &Config, palette: &Palette) -> Option<(Rgb, f32)> {
    if intensity <= cfg.draw_threshold {
        return None;
    }
    let color = palette.base.lerp(palette.highlight, intensity);
    let radius = intensity * cfg.gap * cfg.dot_radius_factor;
    Some((color, radius * 2.0))
}

/// Clears `canvas` to the background and draws one dot per lit cell.
///
/// ### Parameters
/// - `field` - Intensities from [`sample_phase`].
/// - `cfg` - Provides the draw threshold and dot sizing.
/// - `palette` - Background, base and highlight colors.
/// - `canvas` - Drawing surface.
///
/// ### Returns
/// The number of dots drawn.
pub fn draw_phase(
    field: &FieldBuffer,
    cfg: &Config,
    palette: &Palette,
    canvas: &mut impl Canvas,
) -> usize {
    canvas.clear(palette.background);

    let mut drawn = 0;
    for (center, intensity) in field.cells() {
        if let Some((color, diameter)) = dot_style(intensity, cfg, palette) {
            canvas.set_fill(color);
            canvas.fill_circle(center, diameter);
            drawn += 1;
        }
    }
    drawn
}
