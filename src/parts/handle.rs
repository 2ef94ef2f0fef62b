//! Door handle fallback geometry.

use kurbo::{Affine, BezPath, Circle, Shape};

use crate::{
    foundation::core::Rgba8,
    parts::{VectorGeometry, VectorShape, rect_path, shade},
};

/// Handle hardware variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleVariant {
    /// Lever on a rose.
    #[default]
    Lever,
    /// Round knob.
    Knob,
    /// Horizontal push bar.
    PushBar,
}

/// Which edge of the leaf the hardware sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePosition {
    /// Hardware on the left edge; geometry is mirrored.
    Left,
    /// Hardware on the right edge; geometry as authored.
    #[default]
    Right,
}

/// Draw handle hardware in local coordinates `0..width` x `0..height`.
///
/// Geometry is authored for [`HandlePosition::Right`] and mirrored by
/// negating the x scale for the left position — the only reflection
/// transform in the system, because hinge side changes which edge the
/// hardware sits on.
pub fn render_handle(
    width: f64,
    height: f64,
    variant: HandleVariant,
    color: Rgba8,
    position: HandlePosition,
) -> VectorGeometry {
    if width <= 0.0 || height <= 0.0 {
        return VectorGeometry::empty();
    }

    let mut geometry = match variant {
        HandleVariant::Lever => lever(width, height, color),
        HandleVariant::Knob => knob(width, height, color),
        HandleVariant::PushBar => push_bar(width, height, color),
    };

    if position == HandlePosition::Left {
        let mirror = Affine::translate((width, 0.0)) * Affine::scale_non_uniform(-1.0, 1.0);
        for shape in &mut geometry.shapes {
            shape.path.apply_affine(mirror);
        }
    }

    geometry
}

fn lever(width: f64, height: f64, color: Rgba8) -> VectorGeometry {
    let mut g = VectorGeometry::empty();
    let rose_r = width * 0.18;
    let cx = width * 0.75;
    let cy = height * 0.5;
    g.push(VectorShape::filled(
        circle_path(cx, cy, rose_r),
        shade(color, 0.8),
    ));
    // Lever bar reaching toward the hinge side.
    g.push(VectorShape::filled(
        rect_path(width * 0.1, cy - height * 0.04, width * 0.65, height * 0.08),
        color,
    ));
    g
}

fn knob(width: f64, height: f64, color: Rgba8) -> VectorGeometry {
    let mut g = VectorGeometry::empty();
    let cx = width * 0.7;
    let cy = height * 0.5;
    g.push(VectorShape::filled(
        circle_path(cx, cy, width * 0.22),
        shade(color, 0.8),
    ));
    g.push(VectorShape::filled(circle_path(cx, cy, width * 0.14), color));
    g
}

fn push_bar(width: f64, height: f64, color: Rgba8) -> VectorGeometry {
    let mut g = VectorGeometry::empty();
    let bar_h = height * 0.12;
    let cy = height * 0.5;
    // Mounting posts, then the bar across them.
    for x in [width * 0.1, width * 0.8] {
        g.push(VectorShape::filled(
            rect_path(x, cy - bar_h, width * 0.1, bar_h * 2.0),
            shade(color, 0.7),
        ));
    }
    g.push(VectorShape::filled(
        rect_path(0.0, cy - bar_h / 2.0, width, bar_h),
        color,
    ));
    g
}

fn circle_path(cx: f64, cy: f64, r: f64) -> BezPath {
    Circle::new((cx, cy), r).to_path(1e-3)
}

#[cfg(test)]
#[path = "../../tests/unit/parts/handle.rs"]
mod tests;
