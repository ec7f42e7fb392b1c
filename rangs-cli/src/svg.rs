//! Minimal SVG output for decoded shapes.

use std::io::{self, Write};

use rangs::geometry::{FeatureClass, OwnedShape, Palette, ShapeKind};

/// Write `shapes` in emission order, so nested features paint over their
/// parents.
pub fn write_svg<W: Write>(
    out: &mut W,
    shapes: &[OwnedShape],
    width: u32,
    height: u32,
    palette: &Palette,
) -> io::Result<()> {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    )?;
    writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        palette.color(FeatureClass::Ocean).to_hex()
    )?;

    for shape in shapes {
        let color = palette.color(shape.class).to_hex();
        let points = shape
            .points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        match shape.kind {
            ShapeKind::Ring => writeln!(
                out,
                r#"  <polygon points="{}" fill="{}" stroke="none"/>"#,
                points, color
            )?,
            ShapeKind::Line => writeln!(
                out,
                r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
                points, color
            )?,
        }
    }

    writeln!(out, "</svg>")?;
    out.flush()
}
