use super::*;
use crate::assets::loader::ExternalAsset;
use crate::foundation::core::BoundingBox;

fn asset(tag: f64) -> LoadOutcome {
    // Distinct assets distinguished by their view box.
    LoadOutcome::Asset(ExternalAsset {
        paths: vec![],
        view_box: BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: tag,
            max_y: tag,
        },
    })
}

#[test]
fn stale_result_is_discarded() {
    let mut slots = SlotAssets::new();

    // URL1 requested, then superseded by URL2 before it resolves.
    let t1 = slots.begin_request(PartSlot::Door, "https://x/1.svg");
    let t2 = slots.begin_request(PartSlot::Door, "https://x/2.svg");

    // URL2 resolves first, then URL1's late result arrives.
    assert!(slots.complete(t2, asset(2.0)));
    assert!(!slots.complete(t1, asset(1.0)));

    assert_eq!(slots.outcome(PartSlot::Door), Some(&asset(2.0)));
    assert_eq!(slots.requested_url(PartSlot::Door), Some("https://x/2.svg"));
}

#[test]
fn new_request_clears_previous_outcome() {
    let mut slots = SlotAssets::new();
    let t1 = slots.begin_request(PartSlot::Door, "https://x/1.svg");
    assert!(slots.complete(t1, asset(1.0)));
    assert!(slots.outcome(PartSlot::Door).is_some());

    // A render pass between begin and complete must not show the old asset.
    let _t2 = slots.begin_request(PartSlot::Door, "https://x/2.svg");
    assert_eq!(slots.outcome(PartSlot::Door), None);
}

#[test]
fn slots_are_independent() {
    let mut slots = SlotAssets::new();
    let door = slots.begin_request(PartSlot::Door, "https://x/door.svg");
    let crown = slots.begin_request(PartSlot::Crown, "https://x/crown.svg");

    assert!(slots.complete(crown, LoadOutcome::Fallback));
    assert!(slots.complete(door, asset(1.0)));

    assert_eq!(slots.outcome(PartSlot::Crown), Some(&LoadOutcome::Fallback));
    assert_eq!(slots.outcome(PartSlot::Door), Some(&asset(1.0)));
}

#[test]
fn clear_drops_slot_state() {
    let mut slots = SlotAssets::new();
    let t = slots.begin_request(PartSlot::Trim, "https://x/t.svg");
    assert!(slots.complete(t, asset(1.0)));

    slots.clear(PartSlot::Trim);
    assert_eq!(slots.outcome(PartSlot::Trim), None);

    // A completion for a cleared slot is ignored.
    assert!(!slots.complete(t, asset(1.0)));
}

#[test]
fn token_reports_its_slot() {
    let mut slots = SlotAssets::new();
    let t = slots.begin_request(PartSlot::Frame, "https://x/f.svg");
    assert_eq!(t.slot(), PartSlot::Frame);
}
