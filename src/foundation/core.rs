use crate::foundation::error::{Door2dError, Door2dResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8 color used by procedural geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Axis-aligned coordinate rectangle used to scale nested vector assets.
///
/// Invariants: `min_x <= max_x` and `min_y <= max_y`; after [`Self::pad`] both
/// mins are additionally `>= 0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Right edge.
    pub max_x: f64,
    /// Bottom edge.
    pub max_y: f64,
}

impl BoundingBox {
    /// Construct a box, validating edge ordering.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Door2dResult<Self> {
        if !(min_x <= max_x && min_y <= max_y) {
            return Err(Door2dError::validation(
                "BoundingBox mins must not exceed maxes",
            ));
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Degenerate box covering a single point.
    pub fn at_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Smallest box containing `self` and `p`.
    pub fn union_point(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Expand by `amount` on every side, clamping the mins at zero.
    ///
    /// The clamp keeps padded boxes render-safe for viewers that dislike
    /// negative viewBox origins.
    pub fn pad(self, amount: f64) -> Self {
        Self {
            min_x: (self.min_x - amount).max(0.0),
            min_y: (self.min_y - amount).max(0.0),
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// Box width, never negative.
    pub fn width(self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    /// Box height, never negative.
    pub fn height(self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    /// Parse an SVG `viewBox` attribute value (`"min-x min-y width height"`).
    ///
    /// Returns `None` for anything that does not scan as four finite numbers
    /// with non-negative width/height; callers fall back to a default box.
    pub fn parse_view_box(attr: &str) -> Option<Self> {
        let mut nums = attr
            .split([' ', ',', '\t', '\n'])
            .filter(|s| !s.is_empty())
            .map(str::parse::<f64>);

        let min_x = nums.next()?.ok()?;
        let min_y = nums.next()?.ok()?;
        let w = nums.next()?.ok()?;
        let h = nums.next()?.ok()?;
        if nums.next().is_some() {
            return None;
        }
        if ![min_x, min_y, w, h].iter().all(|v| v.is_finite()) || w < 0.0 || h < 0.0 {
            return None;
        }
        Some(Self {
            min_x,
            min_y,
            max_x: min_x + w,
            max_y: min_y + h,
        })
    }

    /// Format as an SVG `viewBox` attribute value.
    pub fn to_view_box_attr(self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x,
            self.min_y,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
