//! Merge per-series dot grids into one grid of display cells.
//!
//! Dots from every series are OR-ed together, so two lines crossing inside one
//! cell still show both strokes. A cell can only carry one colour though: it
//! goes to the lowest-indexed series that put a dot there.

use crate::render::raster::DotGrid;

/// One display cell after merging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombinedCell {
    pub mask: u8,
    pub owner: Option<usize>,
}

/// `height x width` merged cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composite {
    width: usize,
    height: usize,
    cells: Vec<CombinedCell>,
}

impl Composite {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CombinedCell::default(); width * height],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Fold `grid`, drawn for series `index`, into the composite. Order of
    /// calls does not matter for ownership.
    pub fn absorb(&mut self, index: usize, grid: &DotGrid) {
        for y in 0..self.height {
            for x in 0..self.width {
                let mask = grid.mask(x, y);
                if mask == 0 {
                    continue;
                }
                let cell = &mut self.cells[y * self.width + x];
                cell.mask |= mask;
                cell.owner = Some(cell.owner.map_or(index, |o| o.min(index)));
            }
        }
    }

    /// Cell at `(x, y)`; an empty cell outside the grid.
    #[inline]
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> CombinedCell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            CombinedCell::default()
        }
    }

    /// Cells of row `y`, left to right.
    #[must_use]
    pub fn row(&self, y: usize) -> &[CombinedCell] {
        if y < self.height {
            &self.cells[y * self.width..(y + 1) * self.width]
        } else {
            &[]
        }
    }
}

/// Merge `grids`, series index = position in the slice. Dimensions come from
/// the first grid.
#[must_use]
pub fn compose(grids: &[DotGrid]) -> Composite {
    let (width, height) = grids.first().map_or((0, 0), |g| (g.width(), g.height()));
    let mut out = Composite::new(width, height);
    for (index, grid) in grids.iter().enumerate() {
        out.absorb(index, grid);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize, dots: &[(usize, usize)]) -> DotGrid {
        let mut g = DotGrid::new(width, height);
        for &(x, y) in dots {
            g.set_dot(x, y);
        }
        g
    }

    #[test]
    fn masks_are_ored() {
        let a = grid(2, 1, &[(0, 0)]);
        let b = grid(2, 1, &[(1, 3)]);
        let c = compose(&[a, b]);
        assert_eq!(c.cell(0, 0).mask, 0x01 | 0x80);
        assert_eq!(c.cell(1, 0), CombinedCell::default());
    }

    #[test]
    fn lowest_index_owns_shared_cells() {
        let a = grid(3, 1, &[(4, 0)]);
        let b = grid(3, 1, &[(0, 0), (5, 1)]);
        let c = compose(&[a, b]);
        assert_eq!(c.cell(0, 0).owner, Some(1));
        assert_eq!(c.cell(1, 0).owner, None);
        assert_eq!(c.cell(2, 0).owner, Some(0));
        assert_eq!(c.cell(2, 0).mask, 0x01 | 0x10);
    }

    #[test]
    fn absorb_order_does_not_change_owner() {
        let a = grid(1, 1, &[(0, 0)]);
        let b = grid(1, 1, &[(1, 1)]);
        let mut c = Composite::new(1, 1);
        c.absorb(1, &b);
        c.absorb(0, &a);
        assert_eq!(c.cell(0, 0).owner, Some(0));
    }

    #[test]
    fn rows_and_out_of_range() {
        let c = compose(&[grid(2, 2, &[(2, 4)])]);
        assert_eq!(c.row(1)[1].owner, Some(0));
        assert!(c.row(2).is_empty());
        assert_eq!(c.cell(5, 5), CombinedCell::default());
        assert_eq!(compose(&[]).width(), 0);
    }
}
