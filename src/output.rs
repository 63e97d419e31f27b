//! SVG output for vectorized areas, built with the `svg` crate.
//!
//! Each area becomes one `<path>`. With stroke paint a run is a
//! horizontal 1-unit stroke through its cell centers; with fill paint a
//! run is a 1-unit-high rectangle.

use std::fmt::Write as _;
use std::path::Path;

use svg::node::element::{Group, Path as SvgPath};
use svg::Document;

use crate::config::{Paint, SvgOptions};
use crate::emit::{AreaPath, InstructionKind};
use crate::error::VectorizeError;

/// Build an SVG document for a `width` x `height` grid.
pub fn render(width: u32, height: u32, areas: &[AreaPath], options: &SvgOptions) -> Document {
    let scale = options.scale.max(1) as u64;
    let doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", format!("0 0 {} {}", width, height))
        .set("width", format!("{}px", width as u64 * scale))
        .set("height", format!("{}px", height as u64 * scale))
        .set("shape-rendering", "crispEdges");

    match options.paint {
        Paint::Stroke => {
            let group = areas.iter().fold(
                Group::new()
                    .set("transform", "translate(0 0.5)")
                    .set("stroke-width", 1)
                    .set("fill", "none"),
                |group, area| {
                    group.add(
                        SvgPath::new()
                            .set("d", path_data(area, Paint::Stroke))
                            .set("stroke", area.hex()),
                    )
                },
            );
            doc.add(group)
        }
        Paint::Fill => areas.iter().fold(doc, |doc, area| {
            doc.add(
                SvgPath::new()
                    .set("d", path_data(area, Paint::Fill))
                    .set("fill", area.hex())
                    .set("stroke", "none"),
            )
        }),
    }
}

/// Render an SVG document to a string.
pub fn to_svg(width: u32, height: u32, areas: &[AreaPath], options: &SvgOptions) -> String {
    render(width, height, areas, options).to_string()
}

/// Write an SVG document to `path`.
pub fn write_svg(
    path: &Path,
    width: u32,
    height: u32,
    areas: &[AreaPath],
    options: &SvgOptions,
) -> Result<(), VectorizeError> {
    svg::save(path, &render(width, height, areas, options))?;
    Ok(())
}

/// The `d` attribute for one area.
pub fn path_data(area: &AreaPath, paint: Paint) -> String {
    let mut d = String::with_capacity(area.instructions.len() * 8);
    let mut start_x = 0;
    for ins in &area.instructions {
        match ins.kind {
            InstructionKind::Move => {
                start_x = ins.x;
                if !d.is_empty() {
                    d.push(' ');
                }
                let _ = write!(d, "M{} {}", ins.x, ins.y);
            }
            InstructionKind::LineTo => match paint {
                Paint::Stroke => {
                    let _ = write!(d, " H{}", ins.x);
                }
                Paint::Fill => {
                    let _ = write!(d, " H{}V{}H{}Z", ins.x, ins.y + 1, start_x);
                }
            },
            // Fill closes each rectangle itself; strokes are open.
            InstructionKind::Close => {}
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::compress::Run;
    use crate::emit::emit;

    fn area() -> AreaPath {
        emit(
            0x00ff00ff,
            &[
                Run { start_x: 0, end_x: 2, y: 0 },
                Run { start_x: 1, end_x: 3, y: 1 },
            ],
        )
    }

    #[test]
    fn stroke_path_data() {
        assert_eq!(path_data(&area(), Paint::Stroke), "M0 0 H2 M1 1 H3");
    }

    #[test]
    fn fill_path_data_is_rectangles() {
        assert_eq!(
            path_data(&area(), Paint::Fill),
            "M0 0 H2V1H0Z M1 1 H3V2H1Z"
        );
    }

    #[test]
    fn document_uses_scale_and_grid_viewbox() {
        let options = SvgOptions {
            scale: 4,
            paint: Paint::Fill,
        };
        let doc = to_svg(3, 2, &[area()], &options);
        assert!(doc.contains("width=\"12px\""), "{doc}");
        assert!(doc.contains("height=\"8px\""), "{doc}");
        assert!(doc.contains("viewBox=\"0 0 3 2\""), "{doc}");
        assert!(doc.contains("fill=\"#00ff00ff\""), "{doc}");
    }

    #[test]
    fn stroke_paths_share_a_shifted_group() {
        let doc = to_svg(3, 2, &[area()], &SvgOptions::default());
        assert!(doc.contains("translate(0 0.5)"), "{doc}");
        assert!(doc.contains("stroke=\"#00ff00ff\""), "{doc}");
    }

    #[test]
    fn writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.svg");
        write_svg(&file, 3, 2, &[area()], &SvgOptions::default()).unwrap();
        let text = std::fs::read_to_string(&file).unwrap();
        assert!(text.contains("<path"), "{text}");
    }
}
