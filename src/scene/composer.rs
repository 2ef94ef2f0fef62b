//! Scene composition.
//!
//! Lays out wall, frame, crown, transom, door leaf and handle into one
//! coordinate space given opening dimensions and hinge side. The composer
//! performs no I/O and never branches on load status: whether a slot is an
//! external embed or a procedural fallback was decided upstream, and the
//! decision arrives here as a [`ResolvedSceneAsset`].

use std::collections::BTreeMap;

use kurbo::{Affine, Rect};

use crate::{
    assets::loader::{ExternalAsset, LoadOutcome},
    assets::resolver::SlotAssets,
    config::{DoorConfiguration, HingeSide, PartSlot},
    foundation::{core::Rgba8, error::Door2dResult},
    parts::{
        VectorGeometry,
        crown::{CrownVariant, render_crown},
        handle::{HandlePosition, HandleVariant, render_handle},
        leaf::{LeafOptions, LeafVariant, render_leaf},
        wall::{WallPattern, render_wall},
    },
};

/// Wall margin around the opening, each side and above the header.
const WALL_MARGIN: f64 = 80.0;
/// Vertical band reserved above the frame for crown and transom.
const HEADER_HEIGHT: f64 = 120.0;
/// Share of the header taken by the crown when both crown and transom render.
const CROWN_HEADER_SHARE: f64 = 0.5;
/// Frame allowance subtracted from the opening around the leaf.
const FRAME_ALLOWANCE: f64 = 10.0;
/// Handle inset from the leading (opening) edge of the leaf.
const HANDLE_INSET: f64 = 40.0;
/// Handle hardware box size.
const HANDLE_W: f64 = 30.0;
const HANDLE_H: f64 = 80.0;
/// Trim board width around the opening.
const TRIM_WIDTH: f64 = 14.0;

/// Style variant hint attached to a procedural slot decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PartVariant {
    /// Crown (or transom header) variant.
    Crown(CrownVariant),
    /// Door leaf variant plus its orthogonal options.
    Leaf(LeafVariant, LeafOptions),
    /// No dedicated generator; frame-band slots render a plain border.
    Plain,
}

/// Per-slot asset decision made upstream of the composer.
///
/// Created per render pass and discarded when the configuration or the
/// fetched assets change; nothing here is cached across passes.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedSceneAsset {
    /// Sanitized external SVG geometry to embed.
    External(ExternalAsset),
    /// Render this slot with the matching procedural generator.
    Procedural {
        /// Style variant for the slot's generator.
        variant: PartVariant,
        /// Base color for the generated geometry.
        color: Rgba8,
    },
}

/// Wall/handle styling plus fallback styling for slots resolved procedurally
/// without explicit hints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    /// Wall overlay pattern.
    pub wall_pattern: WallPattern,
    /// Wall fill color.
    pub wall_color: Rgba8,
    /// Fallback door leaf color.
    pub leaf_color: Rgba8,
    /// Fallback color for crown, transom and frame-band parts.
    pub trim_color: Rgba8,
    /// Handle hardware variant.
    pub handle_variant: HandleVariant,
    /// Handle hardware color.
    pub handle_color: Rgba8,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            wall_pattern: WallPattern::Plain,
            wall_color: Rgba8::opaque(0xd8, 0xd2, 0xc4),
            leaf_color: Rgba8::opaque(0x6b, 0x4a, 0x2f),
            trim_color: Rgba8::opaque(0x8a, 0x6f, 0x4d),
            handle_variant: HandleVariant::Lever,
            handle_color: Rgba8::opaque(0x30, 0x30, 0x30),
        }
    }
}

/// What a scene node represents; also encodes the fixed z-order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    /// Backdrop wall with the opening cut out.
    Wall,
    /// One of the part slots.
    Part(PartSlot),
    /// Handle hardware on the leaf.
    Handle,
}

/// Node content: either an external embed or generated geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeContent {
    /// Sanitized external asset, drawn through the node transform.
    External(ExternalAsset),
    /// Procedurally generated geometry in the node's local space.
    Geometry(VectorGeometry),
}

/// One positioned element of the composed scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// What this node draws.
    pub role: NodeRole,
    /// Allotted box in scene coordinates.
    pub bounds: Rect,
    /// Local-space to scene-space transform. For external embeds this maps
    /// the asset view box into `bounds` with `xMidYMid meet` semantics; for
    /// geometry it is a plain translation to the box origin.
    pub transform: Affine,
    /// Drawable content.
    pub content: NodeContent,
}

/// A composed scene: positioned nodes in paint order, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Scene width in scene units.
    pub width: f64,
    /// Scene height in scene units.
    pub height: f64,
    /// Nodes in fixed z-order: wall, frame/trim, crown/transom, leaf, handle.
    pub nodes: Vec<SceneNode>,
}

/// Compose a scene with default styling.
pub fn compose(
    config: &DoorConfiguration,
    assets: &BTreeMap<PartSlot, ResolvedSceneAsset>,
) -> Door2dResult<Scene> {
    compose_with_style(config, assets, &SceneStyle::default())
}

/// Compose a scene from a configuration and per-slot asset decisions.
#[tracing::instrument(skip_all)]
pub fn compose_with_style(
    config: &DoorConfiguration,
    assets: &BTreeMap<PartSlot, ResolvedSceneAsset>,
    style: &SceneStyle,
) -> Door2dResult<Scene> {
    config.validate()?;

    let opening = Rect::new(
        WALL_MARGIN,
        WALL_MARGIN + HEADER_HEIGHT,
        WALL_MARGIN + config.opening_width,
        WALL_MARGIN + HEADER_HEIGHT + config.opening_height,
    );
    let width = config.opening_width + 2.0 * WALL_MARGIN;
    let height = config.opening_height + HEADER_HEIGHT + 2.0 * WALL_MARGIN;

    let mut nodes = Vec::new();

    // Wall, always present, always procedural.
    nodes.push(SceneNode {
        role: NodeRole::Wall,
        bounds: Rect::new(0.0, 0.0, width, height),
        transform: Affine::IDENTITY,
        content: NodeContent::Geometry(render_wall(
            width,
            height,
            opening,
            style.wall_pattern,
            style.wall_color,
        )),
    });

    // Frame band: frame, up/under extensions, trim.
    for slot in [
        PartSlot::Frame,
        PartSlot::UpFrame,
        PartSlot::UnderFrame,
        PartSlot::Trim,
    ] {
        if let Some(node) = frame_band_node(slot, assets.get(&slot), opening) {
            nodes.push(node);
        }
    }

    // Header band: transom sits on the frame, crown stacks above it. With
    // both present each takes its share of the header; alone, either takes
    // the whole band.
    let transom = assets.get(&PartSlot::Transom);
    let crown = assets.get(&PartSlot::Crown);
    let both = crown.is_some() && transom.is_some();
    let transom_h = HEADER_HEIGHT * if both { 1.0 - CROWN_HEADER_SHARE } else { 1.0 };
    let crown_h = HEADER_HEIGHT * if both { CROWN_HEADER_SHARE } else { 1.0 };
    if let Some(asset) = transom {
        let bounds = Rect::new(opening.x0, opening.y0 - transom_h, opening.x1, opening.y0);
        nodes.push(header_node(PartSlot::Transom, asset, bounds));
    }
    if let Some(asset) = crown {
        let bottom = if transom.is_some() {
            opening.y0 - transom_h
        } else {
            opening.y0
        };
        let bounds = Rect::new(opening.x0, bottom - crown_h, opening.x1, bottom);
        nodes.push(header_node(PartSlot::Crown, asset, bounds));
    }

    // Door leaf: centered in the opening, full height minus the frame
    // allowance. Renders a procedural fallback even when no asset resolved.
    let leaf_w = (config.opening_width - 2.0 * FRAME_ALLOWANCE).max(0.0);
    let leaf_h = (config.opening_height - FRAME_ALLOWANCE).max(0.0);
    let leaf_bounds = Rect::new(
        opening.x0 + (config.opening_width - leaf_w) / 2.0,
        opening.y1 - leaf_h,
        opening.x0 + (config.opening_width + leaf_w) / 2.0,
        opening.y1,
    );
    nodes.push(leaf_node(assets.get(&PartSlot::Door), leaf_bounds, style));

    // Handle on the leading edge, mirrored for a left hinge.
    nodes.push(handle_node(config.hinge_side, leaf_bounds, style));

    Ok(Scene {
        width,
        height,
        nodes,
    })
}

/// Build composer decisions from per-slot load outcomes.
///
/// External assets embed as-is; fallbacks become the slot's default
/// procedural styling. Slots with no applied outcome are omitted, which makes
/// the composer skip them (except the door leaf, which always renders).
pub fn scene_assets(slots: &SlotAssets, style: &SceneStyle) -> BTreeMap<PartSlot, ResolvedSceneAsset> {
    let mut out = BTreeMap::new();
    for slot in PartSlot::ALL {
        let Some(outcome) = slots.outcome(slot) else {
            continue;
        };
        let decision = match outcome {
            LoadOutcome::Asset(ext) => ResolvedSceneAsset::External(ext.clone()),
            LoadOutcome::Fallback => ResolvedSceneAsset::Procedural {
                variant: default_variant(slot),
                color: match slot {
                    PartSlot::Door => style.leaf_color,
                    _ => style.trim_color,
                },
            },
        };
        out.insert(slot, decision);
    }
    out
}

fn default_variant(slot: PartSlot) -> PartVariant {
    match slot {
        PartSlot::Door => PartVariant::Leaf(LeafVariant::default(), LeafOptions::default()),
        PartSlot::Crown | PartSlot::Transom => PartVariant::Crown(CrownVariant::default()),
        _ => PartVariant::Plain,
    }
}

/// Uniform scale-to-fit transform with `xMidYMid meet` semantics.
fn fit_view_box(asset: &ExternalAsset, target: Rect) -> Affine {
    let vb = asset.view_box;
    let (vw, vh) = (vb.width(), vb.height());
    if vw <= 0.0 || vh <= 0.0 {
        return Affine::translate((target.x0, target.y0));
    }
    let scale = (target.width() / vw).min(target.height() / vh);
    let dx = target.x0 + (target.width() - vw * scale) / 2.0;
    let dy = target.y0 + (target.height() - vh * scale) / 2.0;
    Affine::translate((dx, dy))
        * Affine::scale(scale)
        * Affine::translate((-vb.min_x, -vb.min_y))
}

fn external_node(role: NodeRole, asset: &ExternalAsset, bounds: Rect) -> SceneNode {
    SceneNode {
        role,
        bounds,
        transform: fit_view_box(asset, bounds),
        content: NodeContent::External(asset.clone()),
    }
}

/// Frame-band slots render only from external assets; a procedural decision
/// here degrades to a plain border so the opening still reads as framed.
fn frame_band_node(
    slot: PartSlot,
    asset: Option<&ResolvedSceneAsset>,
    opening: Rect,
) -> Option<SceneNode> {
    let asset = asset?;
    let bounds = match slot {
        PartSlot::Frame | PartSlot::Trim => opening.inflate(TRIM_WIDTH, TRIM_WIDTH),
        PartSlot::UpFrame => Rect::new(
            opening.x0,
            opening.y0 - TRIM_WIDTH,
            opening.x1,
            opening.y0,
        ),
        PartSlot::UnderFrame => Rect::new(
            opening.x0,
            opening.y1,
            opening.x1,
            opening.y1 + TRIM_WIDTH,
        ),
        _ => return None,
    };

    match asset {
        ResolvedSceneAsset::External(ext) => Some(external_node(NodeRole::Part(slot), ext, bounds)),
        ResolvedSceneAsset::Procedural { color, .. } => {
            let mut geometry = VectorGeometry::empty();
            geometry.push(crate::parts::VectorShape::stroked(
                crate::parts::rect_path(0.0, 0.0, bounds.width(), bounds.height()),
                *color,
                TRIM_WIDTH / 2.0,
            ));
            Some(SceneNode {
                role: NodeRole::Part(slot),
                bounds,
                transform: Affine::translate((bounds.x0, bounds.y0)),
                content: NodeContent::Geometry(geometry),
            })
        }
    }
}

fn header_node(slot: PartSlot, asset: &ResolvedSceneAsset, bounds: Rect) -> SceneNode {
    match asset {
        ResolvedSceneAsset::External(ext) => external_node(NodeRole::Part(slot), ext, bounds),
        ResolvedSceneAsset::Procedural { variant, color } => {
            let crown_variant = match variant {
                PartVariant::Crown(v) => *v,
                _ => CrownVariant::default(),
            };
            SceneNode {
                role: NodeRole::Part(slot),
                bounds,
                transform: Affine::translate((bounds.x0, bounds.y0)),
                content: NodeContent::Geometry(render_crown(
                    bounds.width(),
                    bounds.height(),
                    crown_variant,
                    *color,
                    true,
                )),
            }
        }
    }
}

fn leaf_node(asset: Option<&ResolvedSceneAsset>, bounds: Rect, style: &SceneStyle) -> SceneNode {
    if let Some(ResolvedSceneAsset::External(ext)) = asset {
        return external_node(NodeRole::Part(PartSlot::Door), ext, bounds);
    }

    let (variant, options, color) = match asset {
        Some(ResolvedSceneAsset::Procedural {
            variant: PartVariant::Leaf(v, opts),
            color,
        }) => (*v, *opts, *color),
        Some(ResolvedSceneAsset::Procedural { color, .. }) => {
            (LeafVariant::default(), LeafOptions::default(), *color)
        }
        _ => (
            LeafVariant::default(),
            LeafOptions::default(),
            style.leaf_color,
        ),
    };

    SceneNode {
        role: NodeRole::Part(PartSlot::Door),
        bounds,
        transform: Affine::translate((bounds.x0, bounds.y0)),
        content: NodeContent::Geometry(render_leaf(
            bounds.width(),
            bounds.height(),
            variant,
            color,
            options,
        )),
    }
}

fn handle_node(hinge: HingeSide, leaf: Rect, style: &SceneStyle) -> SceneNode {
    // The handle sits a fixed inset from the leading (opening) edge, which is
    // the edge opposite the hinge.
    let (x, position) = match hinge {
        HingeSide::Right => (leaf.x0 + HANDLE_INSET, HandlePosition::Left),
        HingeSide::Left => (leaf.x1 - HANDLE_INSET - HANDLE_W, HandlePosition::Right),
    };
    let y = leaf.y0 + (leaf.height() - HANDLE_H) / 2.0;
    let bounds = Rect::new(x, y, x + HANDLE_W, y + HANDLE_H);

    SceneNode {
        role: NodeRole::Handle,
        bounds,
        transform: Affine::translate((bounds.x0, bounds.y0)),
        content: NodeContent::Geometry(render_handle(
            HANDLE_W,
            HANDLE_H,
            style.handle_variant,
            style.handle_color,
            position,
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
