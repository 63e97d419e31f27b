//! Greedy contour walk over border cells.
//!
//! Border cells are chained into 4-connected paths. The walk always
//! starts a new path at the lowest remaining (y, x) and tries neighbors
//! in the order up, right, down, left, so the output is reproducible.
//! At junctions the first path to reach a cell keeps it.

use std::collections::BTreeSet;

use tracing::warn;

use crate::border::BorderSet;
use crate::grid::{Cell, PixelGrid};

/// An ordered, 4-connected run of border cells.
pub type Path = Vec<Cell>;

/// A path that hit its step budget and was cut short.
///
/// The cells walked before the cut are still returned as a path; the
/// remaining cells are walked as further paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOverrun {
    pub color: u32,
    /// Cells in the truncated path.
    pub walked: usize,
    /// Step limit that was hit.
    pub budget: usize,
}

/// Result of walking one border set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
    pub paths: Vec<Path>,
    pub overruns: Vec<WalkOverrun>,
}

/// Walks border cells into paths with a per-path step limit.
pub struct ContourWalker<'a> {
    grid: &'a PixelGrid,
    budget_factor: usize,
    max_steps: Option<usize>,
}

impl<'a> ContourWalker<'a> {
    pub fn new(grid: &'a PixelGrid) -> Self {
        Self {
            grid,
            budget_factor: 1,
            max_steps: None,
        }
    }

    /// Per-path step limit as a multiple of the border size.
    ///
    /// The limit is at least 1, so a factor of 0 cuts every path after
    /// one cell.
    pub fn with_budget_factor(mut self, factor: usize) -> Self {
        self.budget_factor = factor;
        self
    }

    /// Fixed per-path step limit, ignoring the border size.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn walk(&self, border: &BorderSet) -> Walk {
        let budget = self
            .max_steps
            .unwrap_or_else(|| border.len().saturating_mul(self.budget_factor))
            .max(1);

        // Keyed (y, x) so `pop_first` yields the lowest remaining cell.
        let mut working: BTreeSet<(u32, u32)> =
            border.cells.iter().map(|c| (c.y, c.x)).collect();
        let mut walk = Walk::default();
        let mut path: Path = Vec::new();
        let mut head: Option<Cell> = None;
        let mut steps = 0usize;

        loop {
            let current = match head.take() {
                Some(cell) => cell,
                None => match working.pop_first() {
                    Some((y, x)) => Cell {
                        x,
                        y,
                        color: border.color,
                    },
                    None => break,
                },
            };
            debug_assert!(!working.contains(&(current.y, current.x)));
            path.push(current);
            steps += 1;

            // Cells already in a path were removed from `working`.
            let next = self
                .grid
                .neighbors4(current)
                .into_iter()
                .find(|n| working.contains(&(n.y, n.x)));

            match next {
                // `next` stays in `working` and seeds a later path.
                Some(_) if steps >= budget => {
                    let overrun = WalkOverrun {
                        color: border.color,
                        walked: path.len(),
                        budget,
                    };
                    warn!(
                        "walk overrun on #{:08x}: path cut at {} cells (budget {})",
                        overrun.color, overrun.walked, overrun.budget
                    );
                    walk.overruns.push(overrun);
                    walk.paths.push(std::mem::take(&mut path));
                    steps = 0;
                }
                Some(next) => {
                    working.remove(&(next.y, next.x));
                    head = Some(next);
                }
                None => {
                    walk.paths.push(std::mem::take(&mut path));
                    steps = 0;
                }
            }
        }

        if !path.is_empty() {
            walk.paths.push(path);
        }

        walk
    }
}
