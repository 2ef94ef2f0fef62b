//! Wall backdrop geometry with the opening cut out.

use kurbo::{BezPath, Rect, Shape};

use crate::{
    foundation::core::Rgba8,
    parts::{FillRule, VectorGeometry, VectorShape, line_path, shade},
};

/// Diagonal hairline spacing for [`WallPattern::Subtle`].
const HAIRLINE_SPACING: f64 = 24.0;
/// Course height for [`WallPattern::Brick`].
const BRICK_ROW_H: f64 = 18.0;
/// Brick length for [`WallPattern::Brick`].
const BRICK_W: f64 = 40.0;

/// Optional repeating overlay pattern on the wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallPattern {
    /// Flat fill only.
    #[default]
    Plain,
    /// Sparse diagonal hairlines.
    Subtle,
    /// Offset-row brick courses.
    Brick,
}

/// Draw a canvas-sized wall with a rectangular cutout at `opening`.
///
/// The cutout uses an even-odd fill over a single path containing both the
/// outer rectangle and the opening rectangle, so the opening renders as a
/// hole rather than a second fill.
pub fn render_wall(
    canvas_width: f64,
    canvas_height: f64,
    opening: Rect,
    pattern: WallPattern,
    color: Rgba8,
) -> VectorGeometry {
    if canvas_width <= 0.0 || canvas_height <= 0.0 {
        return VectorGeometry::empty();
    }

    let mut path = Rect::new(0.0, 0.0, canvas_width, canvas_height).to_path(0.0);
    path.extend(opening.to_path(0.0));

    let mut geometry = VectorGeometry::empty();
    geometry.push(VectorShape {
        path,
        fill: Some(color),
        stroke: None,
        fill_rule: FillRule::EvenOdd,
    });

    let overlay = shade(color, 0.85);
    match pattern {
        WallPattern::Plain => {}
        WallPattern::Subtle => {
            // Diagonal hairlines across the whole canvas. The opening is
            // painted over by later layers, so no clipping is needed here.
            let mut x = -canvas_height;
            while x < canvas_width {
                geometry.push(VectorShape::stroked(
                    line_path(x, 0.0, x + canvas_height, canvas_height),
                    overlay,
                    0.5,
                ));
                x += HAIRLINE_SPACING;
            }
        }
        WallPattern::Brick => {
            geometry.push(VectorShape::stroked(
                brick_courses(canvas_width, canvas_height),
                overlay,
                0.75,
            ));
        }
    }

    geometry
}

/// Horizontal courses plus vertical joints, joints offset by half a brick on
/// alternating rows.
fn brick_courses(width: f64, height: f64) -> BezPath {
    let mut path = BezPath::new();
    let rows = (height / BRICK_ROW_H).ceil() as usize;
    for row in 0..rows {
        let y = BRICK_ROW_H * (row + 1) as f64;
        path.move_to((0.0, y));
        path.line_to((width, y));

        let offset = if row % 2 == 0 { 0.0 } else { BRICK_W / 2.0 };
        let mut x = offset;
        while x < width {
            path.move_to((x, y - BRICK_ROW_H));
            path.line_to((x, y.min(height)));
            x += BRICK_W;
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/parts/wall.rs"]
mod tests;
