//! Procedural part renderers.
//!
//! Deterministic vector fallbacks drawn when a slot has no usable external
//! asset. Every generator here is a pure function of its inputs: identical
//! arguments always produce structurally identical geometry, which is what
//! visual regression tests key on.

pub mod crown;
pub mod handle;
pub mod leaf;
pub mod wall;

use kurbo::{BezPath, Rect, Shape};

use crate::foundation::core::Rgba8;

/// Fill rule for a shape's path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    /// Non-zero winding fill.
    #[default]
    NonZero,
    /// Even-odd fill; used for cutouts such as the wall opening.
    EvenOdd,
}

/// Stroke applied to a shape outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in scene units.
    pub width: f64,
}

/// One filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorShape {
    /// Path geometry in the part's local coordinate space.
    pub path: BezPath,
    /// Fill color, if filled.
    pub fill: Option<Rgba8>,
    /// Stroke, if outlined.
    pub stroke: Option<Stroke>,
    /// Fill rule for `fill`.
    pub fill_rule: FillRule,
}

impl VectorShape {
    /// Filled shape with non-zero winding.
    pub fn filled(path: BezPath, color: Rgba8) -> Self {
        Self {
            path,
            fill: Some(color),
            stroke: None,
            fill_rule: FillRule::NonZero,
        }
    }

    /// Stroke-only shape.
    pub fn stroked(path: BezPath, color: Rgba8, width: f64) -> Self {
        Self {
            path,
            fill: None,
            stroke: Some(Stroke { color, width }),
            fill_rule: FillRule::NonZero,
        }
    }
}

/// Ordered list of shapes produced by one part renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorGeometry {
    /// Shapes in paint order, back to front.
    pub shapes: Vec<VectorShape>,
}

impl VectorGeometry {
    /// Geometry with no shapes; renders nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this geometry renders nothing.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a shape in paint order.
    pub fn push(&mut self, shape: VectorShape) {
        self.shapes.push(shape);
    }
}

/// Axis-aligned rectangle as a closed path.
pub(crate) fn rect_path(x: f64, y: f64, w: f64, h: f64) -> BezPath {
    Rect::new(x, y, x + w, y + h).to_path(0.0)
}

/// Straight line segment path.
pub(crate) fn line_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y1));
    p
}

/// Darken (`factor < 1`) or lighten (`factor > 1`) a color channel-wise.
pub(crate) fn shade(color: Rgba8, factor: f64) -> Rgba8 {
    let scale = |c: u8| -> u8 { ((f64::from(c) * factor).round().clamp(0.0, 255.0)) as u8 };
    Rgba8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
        a: color.a,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parts/geometry.rs"]
mod tests;
