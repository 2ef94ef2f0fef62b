use std::collections::BTreeMap;

use crate::foundation::error::{Door2dError, Door2dResult};

/// One of the fixed positions in a door scene.
///
/// This is a closed set: exactly one logical image (or none) resolves per slot
/// per render pass. `Ord` is derived so slot maps iterate deterministically.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum PartSlot {
    /// The door leaf itself.
    Door,
    /// Surrounding frame.
    Frame,
    /// Decorative crown above the frame.
    Crown,
    /// Glazed transom above the door.
    Transom,
    /// Upper frame extension.
    UpFrame,
    /// Lower frame extension.
    UnderFrame,
    /// Trim boards.
    Trim,
}

impl PartSlot {
    /// Every slot, in z-stable order.
    pub const ALL: [PartSlot; 7] = [
        PartSlot::Door,
        PartSlot::Frame,
        PartSlot::Crown,
        PartSlot::Transom,
        PartSlot::UpFrame,
        PartSlot::UnderFrame,
        PartSlot::Trim,
    ];
}

/// Count/style of door panels, extracted from an assignment string.
///
/// Acts as a compatibility key: two images may only be combined into one scene
/// when their prefixes match the primary (door) image's prefix.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SashPrefix {
    /// Single sash.
    One,
    /// One-and-a-half sash.
    OneHalf,
    /// Double sash.
    Two,
    /// Triple sash.
    Three,
    /// Quadruple sash.
    Four,
}

/// Which side the door is hinged on, as seen from outside.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HingeSide {
    /// Hinges on the left edge; handle hardware sits on the right.
    Left,
    /// Hinges on the right edge; handle hardware sits on the left.
    #[default]
    Right,
}

/// A complete door configuration as supplied by the surrounding form layer.
///
/// The engine treats a configuration as immutable input per render pass; only
/// the caller mutates it between passes.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorConfiguration {
    /// Opening width in scene units.
    pub opening_width: f64,
    /// Opening height in scene units.
    pub opening_height: f64,
    /// Opening (wall) thickness in scene units.
    pub opening_thickness: f64,
    /// Hinge side; flips the handle to the opposite (leading) edge.
    #[serde(default)]
    pub hinge_side: HingeSide,
    /// Selected catalog product per slot, `None` when nothing is chosen.
    #[serde(default)]
    pub per_part_product: BTreeMap<PartSlot, Option<u64>>,
}

impl DoorConfiguration {
    /// Check that opening dimensions are finite and positive.
    pub fn validate(&self) -> Door2dResult<()> {
        for (name, v) in [
            ("opening_width", self.opening_width),
            ("opening_height", self.opening_height),
            ("opening_thickness", self.opening_thickness),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(Door2dError::validation(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
