use crate::types::Viewport;
use glam::Vec2;

/// Size and pitch of the dot grid laid over a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    pub cols: usize,
    pub rows: usize,
}

impl GridDims {
    /// Grid covering `viewport` at pitch `gap`.
    ///
    /// ### Parameters
    /// - `viewport` - Surface to cover.
    /// - `gap` - Cell pitch in pixels.
    ///
    /// ### Returns
    /// `ceil(width / gap)` columns by `ceil(height / gap)` rows, so the
    /// last column/row may hang past the right/bottom edge. Empty if
    /// either extent or `gap` is not positive.
    pub fn for_viewport(viewport: Viewport, gap: f32) -> Self {
        let count = |extent: f32| {
            if extent > 0.0 && gap > 0.0 {
                (extent / gap).ceil() as usize
            } else {
                0
            }
        };
        Self {
            cols: count(viewport.width),
            rows: count(viewport.height),
        }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A per-frame scratch buffer of cell intensities.
///
/// Cells are stored row-major. The buffer only exists to avoid
/// reallocating every frame; nothing in it survives from one frame to
/// the next because [`FieldBuffer::ensure_dims`] always clears it.
#[derive(Debug)]
pub struct FieldBuffer {
    dims: GridDims,
    gap: f32,
    /// Intensity for each cell.
    values: Vec<f32>,
}

impl FieldBuffer {
    /// Creates a zeroed buffer for the given grid.
    pub fn with_dims(dims: GridDims, gap: f32) -> Self {
        Self {
            dims,
            gap,
            values: vec![0.0; dims.len()],
        }
    }

    /// Resizes to `dims` if needed and clears every cell, even if the
    /// size was already correct.
    ///
    /// ### Parameters
    /// - `dims` - Grid for the current viewport.
    /// - `gap` - Cell pitch; stored for [`FieldBuffer::cell_center`].
    pub fn ensure_dims(&mut self, dims: GridDims, gap: f32) {
        if self.dims != dims {
            self.values.resize(dims.len(), 0.0);
            self.dims = dims;
        }
        self.gap = gap;
        self.clear();
    }

    /// Zeroes every cell without changing the grid.
    pub fn clear(&mut self) {
        for v in &mut self.values {
            *v = 0.0;
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Row-major offset of `(col, row)`.
    #[inline]
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.dims.cols + col
    }

    /// Center of cell `(col, row)` in viewport pixels.
    #[inline]
    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        let half = self.gap * 0.5;
        Vec2::new(
            col as f32 * self.gap + half,
            row as f32 * self.gap + half,
        )
    }

    /// ### Panics
    /// Panics if `(col, row)` is outside the grid.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.values[self.index(col, row)]
    }

    /// ### Panics
    /// Panics if `(col, row)` is outside the grid.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: f32) {
        let idx = self.index(col, row);
        self.values[idx] = value;
    }

    /// Iterates `(center, intensity)` over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let cols = self.dims.cols.max(1);
        self.values.iter().enumerate().map(move |(i, &v)| {
            let (row, col) = (i / cols, i % cols);
            (self.cell_center(col, row), v)
        })
    }

    /// Brightest cell, or 0 for an empty grid. Only used for frame logging.
    pub fn max_intensity(&self) -> f32 {
        self.values.iter().copied().fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dims_round_up() {
        let dims = GridDims::for_viewport(Viewport::new(800.0, 600.0), 6.0);
        assert_eq!(dims, GridDims { cols: 134, rows: 100 });
        assert_eq!(dims.len(), 13_400);

        let exact = GridDims::for_viewport(Viewport::new(60.0, 12.0), 6.0);
        assert_eq!(exact, GridDims { cols: 10, rows: 2 });
    }

    #[test]
    fn grid_dims_of_empty_viewport_are_empty() {
        assert!(GridDims::for_viewport(Viewport::new(0.0, 600.0), 6.0).is_empty());
    }

    #[test]
    fn with_dims_initializes_zeroed_state() {
        let buf = FieldBuffer::with_dims(GridDims { cols: 3, rows: 2 }, 6.0);
        assert_eq!(buf.values.len(), 6);
        assert!(buf.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn ensure_dims_keeps_length_and_clears_when_same() {
        let dims = GridDims { cols: 2, rows: 2 };
        let mut buf = FieldBuffer::with_dims(dims, 6.0);
        buf.set(1, 1, 0.7);

        // Same dims: no reallocation, but last frame's value is gone.
        buf.ensure_dims(dims, 6.0);

        assert_eq!(buf.values.len(), 4);
        assert_eq!(buf.get(1, 1), 0.0);
    }

    #[test]
    fn ensure_dims_resizes_and_clears_when_different() {
        let mut buf = FieldBuffer::with_dims(GridDims { cols: 2, rows: 1 }, 6.0);
        buf.set(0, 0, 1.0);

        // Growing also picks up the new pitch.
        buf.ensure_dims(GridDims { cols: 4, rows: 3 }, 4.0);
        assert_eq!(buf.values.len(), 12);
        assert!(buf.values.iter().all(|&v| v == 0.0));
        assert_eq!(buf.cell_center(0, 0), Vec2::new(2.0, 2.0));

        // Shrinking truncates.
        buf.ensure_dims(GridDims { cols: 1, rows: 1 }, 4.0);
        assert_eq!(buf.values.len(), 1);
    }

    #[test]
    fn cell_centers_sit_half_a_gap_in() {
        let buf = FieldBuffer::with_dims(GridDims { cols: 3, rows: 3 }, 6.0);
        assert_eq!(buf.cell_center(0, 0), Vec2::new(3.0, 3.0));
        assert_eq!(buf.cell_center(2, 1), Vec2::new(15.0, 9.0));
    }

    #[test]
    fn cells_iterate_row_major_with_centers() {
        let mut buf = FieldBuffer::with_dims(GridDims { cols: 2, rows: 2 }, 10.0);
        buf.set(1, 0, 0.25);
        buf.set(0, 1, 0.5);

        // Row 0 first, left to right, then row 1.
        let cells: Vec<(Vec2, f32)> = buf.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Vec2::new(5.0, 5.0), 0.0),
                (Vec2::new(15.0, 5.0), 0.25),
                (Vec2::new(5.0, 15.0), 0.5),
                (Vec2::new(15.0, 15.0), 0.0),
            ]
        );
        assert_eq!(buf.max_intensity(), 0.5);
    }
}
