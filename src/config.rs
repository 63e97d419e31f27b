/// All vectorization parameters in one struct.
#[derive(Debug, Clone)]
pub struct VectorizeConfig {
    /// Areas of this color are skipped. `None` emits every area.
    pub background: Option<u32>,
    /// Which cells of an area become geometry.
    pub coverage: Coverage,
    /// Per-path walk step limit, as a multiple of the area's border size.
    /// A path can never legitimately exceed 1x, so larger values only
    /// loosen the guard. The limit never drops below one step: 0 cuts
    /// every path after its first cell and reports each cut as an overrun.
    pub walk_budget_factor: usize,
    /// Process areas on the rayon thread pool. Output order is unaffected.
    pub parallel: bool,
}

/// Which cells of an area are compressed into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Border cells only, ordered by the contour walk.
    Border,
    /// Every cell of the area (filled scanlines).
    Solid,
}

impl Default for VectorizeConfig {
    fn default() -> Self {
        Self {
            background: Some(0),
            coverage: Coverage::Border,
            walk_budget_factor: 1,
            parallel: true,
        }
    }
}

/// Output options for the SVG serializer.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Output size multiplier; the viewBox stays in grid units.
    pub scale: u32,
    pub paint: Paint,
}

/// How the area color is applied to its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// 1-unit strokes through the cell centers of each run.
    Stroke,
    Fill,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            paint: Paint::Stroke,
        }
    }
}
