//! px2vec: pixel art → color-keyed vector paths.
//!
//! Groups pixels by exact color, keeps the cells on each group's exposed
//! border, walks them into connected paths, and compresses those into
//! horizontal runs emitted as move/line/close instructions.
//!
//! # Example
//!
//! ```
//! use px2vec::{vectorize, PixelGrid, VectorizeConfig};
//!
//! let grid = PixelGrid::from_rows(vec![
//!     vec![0xff0000ff, 0xff0000ff, 0xff0000ff],
//!     vec![0xff0000ff, 0xff0000ff, 0xff0000ff],
//! ])?;
//! let result = vectorize(&grid, &VectorizeConfig::default())?;
//! assert_eq!(result.areas.len(), 1);
//! assert_eq!(result.areas[0].run_count(), 2);
//! # Ok::<(), px2vec::VectorizeError>(())
//! ```

#![forbid(unsafe_code)]

mod area;
mod border;
mod compress;
mod config;
mod emit;
mod grid;
mod walk;

pub mod bitmap;
pub mod error;
pub mod output;

// Re-export kurbo so downstream users get the same version
// returned by AreaPath::to_bezpath.
pub use kurbo;

pub use area::{segment, Area, Segmentation};
pub use border::{border, BorderSet};
pub use compress::{compress, Run};
pub use config::{Coverage, Paint, SvgOptions, VectorizeConfig};
pub use emit::{emit, AreaPath, Instruction, InstructionKind};
pub use error::VectorizeError;
pub use grid::{pack_rgba, Cell, PixelGrid};
pub use walk::{ContourWalker, Path, Walk, WalkOverrun};

use rayon::prelude::*;
use tracing::{debug, info};

/// The result of vectorizing one grid.
#[derive(Debug, Clone)]
pub struct Vectorized {
    pub width: u32,
    pub height: u32,
    /// One entry per emitted area, in first-seen color order.
    pub areas: Vec<AreaPath>,
    /// Paths cut short by the walk budget. Their geometry is still in `areas`.
    pub overruns: Vec<WalkOverrun>,
}

impl Vectorized {
    /// Render as an SVG document.
    pub fn to_svg(&self, options: &SvgOptions) -> String {
        output::to_svg(self.width, self.height, &self.areas, options)
    }
}

/// Full pipeline: grid → areas → border → walk → runs → instructions.
pub fn vectorize(grid: &PixelGrid, config: &VectorizeConfig) -> Result<Vectorized, VectorizeError> {
    let areas = segment(grid);
    debug!(
        "segmented {}x{} grid into {} areas",
        grid.width(),
        grid.height(),
        areas.len()
    );
    vectorize_areas(grid, &areas, config)
}

/// Vectorize a cached segmentation.
pub fn vectorize_segmentation(
    segmentation: &Segmentation,
    config: &VectorizeConfig,
) -> Result<Vectorized, VectorizeError> {
    vectorize_areas(segmentation.grid(), segmentation.areas(), config)
}

fn vectorize_areas(
    grid: &PixelGrid,
    areas: &[Area],
    config: &VectorizeConfig,
) -> Result<Vectorized, VectorizeError> {
    let visible: Vec<&Area> = areas
        .iter()
        .filter(|area| Some(area.color()) != config.background)
        .collect();

    // Areas are independent; collect() keeps input order either way.
    let traced: Vec<(AreaPath, Vec<WalkOverrun>)> = if config.parallel {
        visible
            .par_iter()
            .map(|area| trace_area(area, grid, config))
            .collect::<Result<_, _>>()?
    } else {
        visible
            .iter()
            .map(|area| trace_area(area, grid, config))
            .collect::<Result<_, _>>()?
    };

    let mut paths = Vec::with_capacity(traced.len());
    let mut overruns = Vec::new();
    for (path, cut) in traced {
        paths.push(path);
        overruns.extend(cut);
    }

    let instructions: usize = paths.iter().map(|p| p.instructions.len()).sum();
    info!(
        "vectorized {} areas ({} skipped) into {} instructions, {} overruns",
        paths.len(),
        areas.len() - paths.len(),
        instructions,
        overruns.len()
    );

    Ok(Vectorized {
        width: grid.width(),
        height: grid.height(),
        areas: paths,
        overruns,
    })
}

/// Trace a single area into drawing instructions.
pub fn trace_area(
    area: &Area,
    grid: &PixelGrid,
    config: &VectorizeConfig,
) -> Result<(AreaPath, Vec<WalkOverrun>), VectorizeError> {
    let rim = area.border(grid);
    if rim.is_empty() {
        return Err(VectorizeError::EmptyAreaBorder {
            color: area.color(),
        });
    }

    let (runs, overruns) = match config.coverage {
        Coverage::Border => {
            let walk = ContourWalker::new(grid)
                .with_budget_factor(config.walk_budget_factor)
                .walk(&rim);
            let runs: Vec<Run> = walk.paths.iter().flat_map(|p| compress(p)).collect();
            debug!(
                "area {}: {} cells, {} border, {} paths, {} runs",
                area.hex(),
                area.len(),
                rim.len(),
                walk.paths.len(),
                runs.len()
            );
            (runs, walk.overruns)
        }
        Coverage::Solid => {
            let runs = compress(area.cells());
            debug!("area {}: {} cells, {} runs", area.hex(), area.len(), runs.len());
            (runs, Vec::new())
        }
    };

    Ok((emit(area.color(), &runs), overruns))
}
