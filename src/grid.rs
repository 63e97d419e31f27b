//! Immutable pixel grid with bounded neighbor queries.
//!
//! Samples are stored flat in row-major order. Coordinates are
//! image-style: (0, 0) is the top-left cell, y grows downward.

use crate::error::VectorizeError;

/// Offsets (dx, dy) for the 8-neighborhood: N, NE, E, SE, S, SW, W, NW.
const NEIGHBORS_8: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Offsets (dx, dy) for the 4-neighborhood: up, right, down, left.
const NEIGHBORS_4: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Pack 8-bit channels into a 32-bit color key (`0xRRGGBBAA`).
pub fn pack_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> u32 {
    u32::from_be_bytes([red, green, blue, alpha])
}

/// One sampled pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    /// Packed `0xRRGGBBAA`.
    pub color: u32,
}

impl Cell {
    /// Color as `#rrggbbaa`.
    pub fn hex(&self) -> String {
        format!("#{:08x}", self.color)
    }
}

/// A rectangular, gap-free array of color samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PixelGrid {
    /// Build a grid from a flat row-major buffer.
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self, VectorizeError> {
        if width == 0 || height == 0 {
            return Err(VectorizeError::InvalidGrid(format!(
                "{}x{} grid has no cells",
                width, height
            )));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(VectorizeError::InvalidGrid(format!(
                "expected {} samples for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from rows of packed colors. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, VectorizeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(VectorizeError::InvalidGrid(format!(
                "row {} has {} samples, expected {}",
                row,
                bad.len(),
                width
            )));
        }
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(VectorizeError::InvalidGrid(format!(
                    "{}x{} exceeds the addressable grid size",
                    width, height
                )))
            }
        };
        Self::from_vec(w, h, rows.into_iter().flatten().collect())
    }

    /// Build a grid from interleaved RGBA8 bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, VectorizeError> {
        if bytes.len() % 4 != 0 {
            return Err(VectorizeError::InvalidGrid(format!(
                "{} bytes is not a whole number of RGBA samples",
                bytes.len()
            )));
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| pack_rgba(px[0], px[1], px[2], px[3]))
            .collect();
        Self::from_vec(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
        self.get_signed(x as i64, y as i64)
    }

    fn get_signed(&self, x: i64, y: i64) -> Option<Cell> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        Some(Cell {
            x: x as u32,
            y: y as u32,
            color: self.data[idx],
        })
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width as usize;
        self.data.iter().enumerate().map(move |(i, &color)| Cell {
            x: (i % width) as u32,
            y: (i / width) as u32,
            color,
        })
    }

    /// In-bounds 8-neighbors, clockwise from north.
    pub fn neighbors8(&self, cell: Cell) -> Vec<Cell> {
        self.offsets(cell, &NEIGHBORS_8)
    }

    /// In-bounds orthogonal neighbors: up, right, down, left.
    pub fn neighbors4(&self, cell: Cell) -> Vec<Cell> {
        self.offsets(cell, &NEIGHBORS_4)
    }

    fn offsets(&self, cell: Cell, offsets: &[(i64, i64)]) -> Vec<Cell> {
        offsets
            .iter()
            .filter_map(|&(dx, dy)| self.get_signed(cell.x as i64 + dx, cell.y as i64 + dy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> PixelGrid {
        PixelGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn rejects_zero_sized_grid() {
        assert!(matches!(
            PixelGrid::from_vec(0, 4, vec![]),
            Err(VectorizeError::InvalidGrid(_))
        ));
        assert!(matches!(
            PixelGrid::from_rows(vec![]),
            Err(VectorizeError::InvalidGrid(_))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = PixelGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{}", err);
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(PixelGrid::from_vec(2, 2, vec![0; 3]).is_err());
        assert!(PixelGrid::from_rgba_bytes(1, 1, &[1, 2, 3]).is_err());
    }

    #[test]
    fn packs_rgba_big_endian() {
        assert_eq!(pack_rgba(0x12, 0x34, 0x56, 0x78), 0x12345678);
        let grid = PixelGrid::from_rgba_bytes(1, 1, &[255, 0, 0, 255]).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().hex(), "#ff0000ff");
    }

    #[test]
    fn get_is_bounded() {
        let grid = grid_3x3();
        assert_eq!(grid.get(2, 1).map(|c| c.color), Some(6));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.contains(-1, 0));
    }

    #[test]
    fn neighbor_counts_and_order() {
        let grid = grid_3x3();
        let center = grid.get(1, 1).unwrap();
        let colors: Vec<u32> = grid.neighbors8(center).iter().map(|c| c.color).collect();
        assert_eq!(colors, vec![2, 3, 6, 9, 8, 7, 4, 1]);
        let orth: Vec<u32> = grid.neighbors4(center).iter().map(|c| c.color).collect();
        assert_eq!(orth, vec![2, 6, 8, 4]);

        let corner = grid.get(0, 0).unwrap();
        assert_eq!(grid.neighbors8(corner).len(), 3);
        assert_eq!(grid.neighbors4(corner).len(), 2);
    }

    #[test]
    fn cells_are_row_major() {
        let grid = grid_3x3();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!((cells[4].x, cells[4].y, cells[4].color), (1, 1, 5));
        assert_eq!((cells[5].x, cells[5].y), (2, 1));
    }
}
