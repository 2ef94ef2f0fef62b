//! Crown moulding fallback geometry.

use kurbo::BezPath;

use crate::{
    foundation::core::Rgba8,
    parts::{VectorGeometry, VectorShape, rect_path, shade},
};

/// Horizontal overhang beyond the frame width, each side.
const OVERHANG: f64 = 10.0;

/// Crown style variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrownVariant {
    /// Flat stacked tiers.
    #[default]
    Classic,
    /// Single slab with a reveal line.
    Modern,
    /// Scalloped ornamental tier row over a base.
    Ornate,
}

/// Draw a crown for a frame of `width`, `height` units tall.
///
/// Local coordinates: x spans `-OVERHANG .. width + OVERHANG`, y spans
/// `0 .. height` with the frame directly below y = `height`. Returns empty
/// geometry when `height <= 0` or the crown is not visible.
pub fn render_crown(
    width: f64,
    height: f64,
    variant: CrownVariant,
    color: Rgba8,
    visible: bool,
) -> VectorGeometry {
    if !visible || height <= 0.0 || !width.is_finite() || width <= 0.0 {
        return VectorGeometry::empty();
    }

    let mut geometry = VectorGeometry::empty();
    let full_w = width + 2.0 * OVERHANG;

    match variant {
        CrownVariant::Classic => {
            // Three flat tiers, widening toward the top.
            let tiers = [
                (0.0, 0.40, full_w),
                (0.40, 0.35, full_w - OVERHANG),
                (0.75, 0.25, width),
            ];
            for (idx, &(top_frac, h_frac, tier_w)) in tiers.iter().enumerate() {
                let inset = (full_w - tier_w) / 2.0 - OVERHANG;
                geometry.push(VectorShape::filled(
                    rect_path(inset, height * top_frac, tier_w, height * h_frac),
                    shade(color, 1.0 - 0.08 * idx as f64),
                ));
            }
        }
        CrownVariant::Modern => {
            geometry.push(VectorShape::filled(
                rect_path(-OVERHANG, 0.0, full_w, height),
                color,
            ));
            // Reveal line a third of the way down.
            geometry.push(VectorShape::stroked(
                super::line_path(-OVERHANG, height / 3.0, width + OVERHANG, height / 3.0),
                shade(color, 0.7),
                1.5,
            ));
        }
        CrownVariant::Ornate => {
            let base_h = height * 0.55;
            geometry.push(VectorShape::filled(
                rect_path(-OVERHANG, 0.0, full_w, base_h),
                color,
            ));
            geometry.push(VectorShape::filled(
                rect_path(-OVERHANG / 2.0, base_h, width + OVERHANG, height * 0.2),
                shade(color, 0.9),
            ));
            geometry.push(VectorShape::filled(
                scallop_row(-OVERHANG, height * 0.75, full_w, height * 0.25),
                shade(color, 0.8),
            ));
        }
    }

    geometry
}

/// Row of downward semicircular scallops filling the given band.
fn scallop_row(x: f64, y: f64, width: f64, height: f64) -> BezPath {
    let count = ((width / (height * 2.0)).floor().max(1.0)) as usize;
    let step = width / count as f64;

    let mut path = BezPath::new();
    path.move_to((x, y));
    for i in 0..count {
        let x0 = x + step * i as f64;
        // Quadratic bump approximating a semicircle.
        path.quad_to((x0 + step / 2.0, y + height * 2.0), (x0 + step, y));
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/parts/crown.rs"]
mod tests;
