//! Door2D is a deterministic 2D door preview engine.
//!
//! Given a door configuration (opening dimensions, hinge side, per-part
//! product selections) and the catalog images fetched for those products, the
//! engine composes a layered vector scene that previews the configured door.
//!
//! # Pipeline overview
//!
//! 1. **Tag**: catalog images carry `"<sash>-<part>"` assignment strings,
//!    parsed by [`parse_sash_prefix`] / [`parse_part_slot`]
//! 2. **Match**: [`resolve_slot_images`] picks at most one image per part
//!    slot, rejecting sash sizes incompatible with the primary door image
//! 3. **Load**: [`load_asset`] fetches each selected SVG and derives a
//!    sanitized path list plus a tight view box; failures degrade to
//!    procedural fallbacks, never errors
//! 4. **Compose**: [`compose`] lays wall, frame, crown, transom, door leaf
//!    and handle out into one coordinate space in a fixed z-order
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: matching and composition are pure and
//!   stable for a given input; procedural renderers are referentially
//!   transparent.
//! - **No I/O in the composer**: fetching happens upstream and resolves into
//!   per-slot decisions before composition.
//! - **Degrade, don't fail**: a missing or malformed asset yields a
//!   visible-but-approximate render, never a crash.
//! - **Latest request wins**: [`SlotAssets`] discards stale fetch results by
//!   generation so a preview never flickers back to an older asset.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod catalog;
mod config;
mod foundation;
mod parts;
mod scene;
mod taxonomy;

pub use assets::cache::ProductImageCache;
pub use assets::loader::{
    AssetFetcher, ExternalAsset, FetchedDocument, HttpFetcher, LoadOutcome, extract_bounding_box,
    load_asset, parse_document,
};
pub use assets::matcher::resolve_slot_images;
pub use assets::resolver::{RequestToken, SlotAssets};
pub use catalog::{CatalogClient, ImageAsset, ProductResponse, parse_product_response};
pub use config::{DoorConfiguration, HingeSide, PartSlot, SashPrefix};
pub use foundation::core::{Affine, BezPath, BoundingBox, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{Door2dError, Door2dResult};
pub use parts::crown::{CrownVariant, render_crown};
pub use parts::handle::{HandlePosition, HandleVariant, render_handle};
pub use parts::leaf::{LeafOptions, LeafVariant, render_leaf};
pub use parts::wall::{WallPattern, render_wall};
pub use parts::{FillRule, Stroke, VectorGeometry, VectorShape};
pub use scene::composer::{
    NodeContent, NodeRole, PartVariant, ResolvedSceneAsset, Scene, SceneNode, SceneStyle, compose,
    compose_with_style, scene_assets,
};
pub use taxonomy::{parse_part_slot, parse_sash_prefix};
