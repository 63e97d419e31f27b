//! Color-keyed segmentation.
//!
//! An area is every cell of one exact color, wherever it sits in the
//! grid. Disjoint regions of the same color share an area; there is no
//! connectivity analysis.

use std::collections::HashMap;

use crate::border::{self, BorderSet};
use crate::grid::{Cell, PixelGrid};

/// All cells of one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    color: u32,
    /// Member cells in row-major order.
    cells: Vec<Cell>,
}

impl Area {
    pub(crate) fn new(color: u32) -> Self {
        Self {
            color,
            cells: Vec::new(),
        }
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// Color as `#rrggbbaa`.
    pub fn hex(&self) -> String {
        format!("#{:08x}", self.color)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell at (x, y) belongs to this area.
    pub fn contains(&self, grid: &PixelGrid, x: u32, y: u32) -> bool {
        grid.get(x, y).is_some_and(|c| c.color == self.color)
    }

    /// Cells of this area exposed to another color or the grid edge.
    pub fn border(&self, grid: &PixelGrid) -> BorderSet {
        border::border(self, grid)
    }

    /// ASCII mask of the area: `##` per member cell, one line per row.
    pub fn mask(&self, grid: &PixelGrid) -> String {
        let width = grid.width() as usize;
        let mut member = vec![false; grid.len()];
        for cell in &self.cells {
            member[cell.y as usize * width + cell.x as usize] = true;
        }
        member
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|&m| if m { "##" } else { "  " })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&mut self, cell: Cell) {
        debug_assert_eq!(cell.color, self.color);
        self.cells.push(cell);
    }
}

/// Group every cell of `grid` by exact color.
///
/// Areas come out in first-seen order of a row-major scan.
pub fn segment(grid: &PixelGrid) -> Vec<Area> {
    let mut index: HashMap<u32, usize> = HashMap::new();
    let mut areas: Vec<Area> = Vec::new();

    for cell in grid.cells() {
        let slot = *index.entry(cell.color).or_insert_with(|| {
            areas.push(Area::new(cell.color));
            areas.len() - 1
        });
        areas[slot].push(cell);
    }

    areas
}

/// A grid together with its cached areas.
#[derive(Debug, Clone)]
pub struct Segmentation {
    grid: PixelGrid,
    areas: Vec<Area>,
}

impl Segmentation {
    pub fn new(grid: PixelGrid) -> Self {
        let areas = segment(&grid);
        Self { grid, areas }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// The area holding `color`, if any cell has it.
    pub fn area(&self, color: u32) -> Option<&Area> {
        self.areas.iter().find(|a| a.color == color)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn areas_partition_the_grid() {
        let grid = PixelGrid::from_rows(vec![
            vec![1, 1, 2, 3],
            vec![2, 1, 3, 3],
            vec![3, 2, 2, 1],
        ])
        .unwrap();
        let areas = segment(&grid);

        let mut seen = HashSet::new();
        for area in &areas {
            for cell in area.cells() {
                assert_eq!(cell.color, area.color());
                assert!(seen.insert((cell.x, cell.y)), "cell in two areas");
            }
        }
        assert_eq!(seen.len(), grid.len());
    }

    #[test]
    fn enumeration_is_first_seen_order() {
        let grid = PixelGrid::from_rows(vec![vec![7, 3], vec![9, 7]]).unwrap();
        let colors: Vec<u32> = segment(&grid).iter().map(Area::color).collect();
        assert_eq!(colors, vec![7, 3, 9]);
    }

    #[test]
    fn disjoint_regions_share_an_area() {
        let grid = PixelGrid::from_rows(vec![vec![5, 0, 0, 5]]).unwrap();
        let areas = segment(&grid);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].len(), 2);
        assert!(areas[0].contains(&grid, 0, 0) && areas[0].contains(&grid, 3, 0));
    }

    #[test]
    fn contains_checks_the_grid_color() {
        let grid = PixelGrid::from_rows(vec![vec![5, 0], vec![0, 5]]).unwrap();
        let areas = segment(&grid);
        assert!(areas[0].contains(&grid, 1, 1));
        assert!(!areas[0].contains(&grid, 1, 0));
        assert!(!areas[0].contains(&grid, 2, 0));
        assert!(areas[1].contains(&grid, 0, 1));
    }

    #[test]
    fn mask_marks_members() {
        let grid = PixelGrid::from_rows(vec![vec![1, 2], vec![2, 1]]).unwrap();
        let seg = Segmentation::new(grid);
        let area = seg.area(1).unwrap();
        assert_eq!(area.mask(seg.grid()), "##  \n  ##");
        assert!(seg.area(42).is_none());
    }
}
