//! Exposed-cell filter.

use crate::area::Area;
use crate::grid::{Cell, PixelGrid};

/// The cells of an area that touch a different color or the grid edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSet {
    pub color: u32,
    pub cells: Vec<Cell>,
}

impl BorderSet {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Select the border cells of `area`.
///
/// A cell is on the border when it has fewer than 8 in-grid neighbors or
/// any neighbor differs in color.
pub fn border(area: &Area, grid: &PixelGrid) -> BorderSet {
    let cells = area
        .cells()
        .iter()
        .copied()
        .filter(|&cell| {
            let neighbors = grid.neighbors8(cell);
            neighbors.len() < 8 || neighbors.iter().any(|n| n.color != area.color())
        })
        .collect();

    BorderSet {
        color: area.color(),
        cells,
    }
}
