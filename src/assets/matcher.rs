//! Slot resolution: which catalog image, if any, feeds each door part.

use std::collections::BTreeMap;

use crate::{
    catalog::ImageAsset,
    config::PartSlot,
    taxonomy::{parse_part_slot, parse_sash_prefix},
};

/// Select one image per part slot from the catalog list.
///
/// Images are visited in input order and the first image to claim a slot wins;
/// later duplicates for the same slot are ignored. Images whose assignment
/// does not parse to a slot are skipped. When `primary_assignment` carries a
/// parseable sash prefix, images with a different prefix are rejected —
/// cross-size parts must never be mixed into one scene (a two-sash frame on a
/// one-sash door would be geometrically wrong).
///
/// When no primary assignment is given, no sash filtering is applied. This
/// relaxed mode intentionally permits mixed sash sizes for configurations
/// without a designated primary image; it is carried over as observed
/// behavior, not tightened.
///
/// Output depends only on input order and content, so the function is
/// deterministic and idempotent.
pub fn resolve_slot_images(
    images: &[ImageAsset],
    primary_assignment: Option<&str>,
) -> BTreeMap<PartSlot, ImageAsset> {
    let target_prefix = primary_assignment.and_then(parse_sash_prefix);

    let mut resolved = BTreeMap::new();
    for image in images {
        let Some(slot) = parse_part_slot(&image.assignment) else {
            continue;
        };
        if let Some(target) = target_prefix
            && parse_sash_prefix(&image.assignment) != Some(target)
        {
            continue;
        }
        resolved.entry(slot).or_insert_with(|| image.clone());
    }
    resolved
}

#[cfg(test)]
#[path = "../../tests/unit/assets/matcher.rs"]
mod tests;
