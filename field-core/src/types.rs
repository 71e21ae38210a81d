use glam::Vec2;

/// Size of the drawable surface, in pixels.
///
/// Coordinates handed to the simulation use the same space: origin at
/// the top-left corner, x to the right, y downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `(width, height)` as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Shorter of the two sides; every radius that scales with the
    /// surface is a fraction of this.
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Middle of the surface, where the center reflector is anchored.
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Whether the pointer at `p` should act on attractors.
    ///
    /// ### Parameters
    /// - `p` - Point in viewport pixels.
    ///
    /// ### Returns
    /// `true` only for points strictly inside the surface; edges count
    /// as outside.
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }

    /// `false` for a collapsed surface, e.g. a minimized window.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_min_side() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.center(), Vec2::new(400.0, 300.0));
        assert_eq!(vp.min_side(), 600.0);
        assert!(vp.has_area());
        assert!(!Viewport::new(0.0, 600.0).has_area());
    }

    #[test]
    fn contains_strict_excludes_edges_and_outside() {
        let vp = Viewport::new(100.0, 50.0);
        assert!(vp.contains_strict(Vec2::new(1.0, 1.0)));
        // Each edge on its own is outside.
        assert!(!vp.contains_strict(Vec2::new(0.0, 10.0)));
        assert!(!vp.contains_strict(Vec2::new(100.0, 10.0)));
        assert!(!vp.contains_strict(Vec2::new(10.0, 50.0)));
        assert!(!vp.contains_strict(Vec2::new(-1.0, -1.0)));
    }
}
