//! Run-length reduction of cell paths.

use crate::grid::Cell;

/// A horizontal span of cells `start_x..end_x` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start_x: u32,
    /// Exclusive.
    pub end_x: u32,
    pub y: u32,
}

impl Run {
    pub fn width(&self) -> u32 {
        self.end_x - self.start_x
    }

    /// The cells this run covers.
    pub fn cells(&self, color: u32) -> impl Iterator<Item = Cell> + '_ {
        (self.start_x..self.end_x).map(move |x| Cell { x, y: self.y, color })
    }
}

/// Compress `cells` into maximal horizontal runs.
///
/// Input order does not matter: cells are sorted by (y, x) first.
pub fn compress(cells: &[Cell]) -> Vec<Run> {
    let mut sorted: Vec<(u32, u32)> = cells.iter().map(|c| (c.y, c.x)).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut runs: Vec<Run> = Vec::new();
    let mut current: Option<Run> = None;

    for (y, x) in sorted {
        current = match current {
            Some(mut run) if run.y == y && run.end_x == x => {
                run.end_x += 1;
                Some(run)
            }
            Some(run) => {
                runs.push(run);
                Some(Run {
                    start_x: x,
                    end_x: x + 1,
                    y,
                })
            }
            None => Some(Run {
                start_x: x,
                end_x: x + 1,
                y,
            }),
        };
    }
    runs.extend(current);

    runs
}
