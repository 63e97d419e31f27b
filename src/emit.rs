//! Runs to abstract drawing instructions.

use kurbo::{BezPath, Point};

use crate::compress::Run;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    Move,
    LineTo,
    Close,
}

/// One drawing command in grid coordinates.
///
/// `Close` carries the position of the last `Move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub x: u32,
    pub y: u32,
}

/// Geometry for one area, ready for a serializer.
///
/// Whether the color is used as fill or stroke is up to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaPath {
    /// Packed `0xRRGGBBAA`.
    pub color: u32,
    pub instructions: Vec<Instruction>,
}

impl AreaPath {
    /// Color as `#rrggbbaa`.
    pub fn hex(&self) -> String {
        format!("#{:08x}", self.color)
    }

    /// Number of runs (one `Move` each).
    pub fn run_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| i.kind == InstructionKind::Move)
            .count()
    }

    /// The same geometry as a kurbo path.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        for ins in &self.instructions {
            let p = Point::new(ins.x as f64, ins.y as f64);
            match ins.kind {
                InstructionKind::Move => path.move_to(p),
                InstructionKind::LineTo => path.line_to(p),
                InstructionKind::Close => path.close_path(),
            }
        }
        path
    }
}

/// Emit a move and a horizontal line per run, then one close.
pub fn emit(color: u32, runs: &[Run]) -> AreaPath {
    let mut instructions = Vec::with_capacity(runs.len() * 2 + 1);
    for run in runs {
        instructions.push(Instruction {
            kind: InstructionKind::Move,
            x: run.start_x,
            y: run.y,
        });
        instructions.push(Instruction {
            kind: InstructionKind::LineTo,
            x: run.end_x,
            y: run.y,
        });
    }
    let (x, y) = runs.last().map_or((0, 0), |r| (r.start_x, r.y));
    instructions.push(Instruction {
        kind: InstructionKind::Close,
        x,
        y,
    });

    AreaPath {
        color,
        instructions,
    }
}
