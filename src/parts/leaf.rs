//! Door leaf fallback geometry.

use crate::{
    foundation::core::Rgba8,
    parts::{VectorGeometry, VectorShape, line_path, rect_path, shade},
};

/// Vertical space reserved above the panel grid.
const PANEL_TOP_MARGIN: f64 = 60.0;
/// Vertical space reserved below the panel grid.
const PANEL_BOTTOM_MARGIN: f64 = 40.0;
/// Gap between panels and from the leaf edges.
const PANEL_GAP: f64 = 18.0;
/// Panels are laid out in a fixed two-column arrangement.
const PANEL_COLUMNS: u32 = 2;

/// Door leaf style variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafVariant {
    /// Plain slab.
    #[default]
    Solid,
    /// Large centered glass lite.
    Glass,
    /// Raised panel grid.
    Panel,
}

/// Options orthogonal to the leaf variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeafOptions {
    /// Number of raised panels for [`LeafVariant::Panel`].
    pub panel_count: u32,
    /// Add a centered glass insert with a cross-grid overlay, regardless of
    /// variant.
    pub has_glass: bool,
}

impl Default for LeafOptions {
    fn default() -> Self {
        Self {
            panel_count: 4,
            has_glass: false,
        }
    }
}

/// Draw a door leaf in local coordinates `0..width` x `0..height`.
pub fn render_leaf(
    width: f64,
    height: f64,
    variant: LeafVariant,
    color: Rgba8,
    options: LeafOptions,
) -> VectorGeometry {
    if width <= 0.0 || height <= 0.0 {
        return VectorGeometry::empty();
    }

    let mut geometry = VectorGeometry::empty();
    geometry.push(VectorShape::filled(
        rect_path(0.0, 0.0, width, height),
        color,
    ));

    match variant {
        LeafVariant::Solid => {}
        LeafVariant::Glass => {
            let inset = width * 0.15;
            geometry.push(glass_pane(
                inset,
                height * 0.12,
                width - 2.0 * inset,
                height * 0.55,
            ));
        }
        LeafVariant::Panel => {
            panel_grid(&mut geometry, width, height, color, options.panel_count);
        }
    }

    if options.has_glass {
        // Independent insert: centered rectangle with a cross-grid overlay.
        let insert_w = width * 0.5;
        let insert_h = height * 0.3;
        let x = (width - insert_w) / 2.0;
        let y = (height - insert_h) / 2.0;
        geometry.push(glass_pane(x, y, insert_w, insert_h));
        let grid_color = shade(color, 0.6);
        geometry.push(VectorShape::stroked(
            line_path(x + insert_w / 2.0, y, x + insert_w / 2.0, y + insert_h),
            grid_color,
            2.0,
        ));
        geometry.push(VectorShape::stroked(
            line_path(x, y + insert_h / 2.0, x + insert_w, y + insert_h / 2.0),
            grid_color,
            2.0,
        ));
    }

    geometry
}

fn glass_pane(x: f64, y: f64, w: f64, h: f64) -> VectorShape {
    VectorShape::filled(
        rect_path(x, y, w, h),
        Rgba8::opaque(173, 216, 230).with_alpha(200),
    )
}

/// Two-column panel grid; row height comes from the vertical space left after
/// the fixed top and bottom margins.
fn panel_grid(
    geometry: &mut VectorGeometry,
    width: f64,
    height: f64,
    color: Rgba8,
    panel_count: u32,
) {
    if panel_count == 0 {
        return;
    }
    let rows = panel_count.div_ceil(PANEL_COLUMNS);
    let avail_h = height - PANEL_TOP_MARGIN - PANEL_BOTTOM_MARGIN - PANEL_GAP * (rows - 1) as f64;
    if avail_h <= 0.0 {
        return;
    }
    let row_h = avail_h / f64::from(rows);
    let panel_w = (width - PANEL_GAP * f64::from(PANEL_COLUMNS + 1)) / f64::from(PANEL_COLUMNS);
    if panel_w <= 0.0 {
        return;
    }

    let panel_color = shade(color, 0.85);
    for idx in 0..panel_count {
        let row = idx / PANEL_COLUMNS;
        let col = idx % PANEL_COLUMNS;
        let x = PANEL_GAP + f64::from(col) * (panel_w + PANEL_GAP);
        let y = PANEL_TOP_MARGIN + f64::from(row) * (row_h + PANEL_GAP);
        geometry.push(VectorShape {
            path: rect_path(x, y, panel_w, row_h),
            fill: Some(panel_color),
            stroke: Some(super::Stroke {
                color: shade(color, 0.6),
                width: 1.0,
            }),
            fill_rule: super::FillRule::NonZero,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parts/leaf.rs"]
mod tests;
