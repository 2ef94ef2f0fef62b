use super::*;

fn config() -> DoorConfiguration {
    DoorConfiguration {
        opening_width: 900.0,
        opening_height: 2100.0,
        opening_thickness: 100.0,
        hinge_side: HingeSide::Right,
        per_part_product: BTreeMap::new(),
    }
}

#[test]
fn validate_accepts_positive_dimensions() {
    assert!(config().validate().is_ok());
}

#[test]
fn validate_rejects_bad_dimensions() {
    for patch in [
        |c: &mut DoorConfiguration| c.opening_width = 0.0,
        |c: &mut DoorConfiguration| c.opening_height = -1.0,
        |c: &mut DoorConfiguration| c.opening_thickness = f64::NAN,
        |c: &mut DoorConfiguration| c.opening_width = f64::INFINITY,
    ] {
        let mut c = config();
        patch(&mut c);
        assert!(c.validate().is_err());
    }
}

#[test]
fn configuration_serde_round_trip() {
    let mut c = config();
    c.per_part_product.insert(PartSlot::Door, Some(42));
    c.per_part_product.insert(PartSlot::Crown, None);

    let json = serde_json::to_string(&c).unwrap();
    let back: DoorConfiguration = serde_json::from_str(&json).unwrap();
    assert_eq!(back.per_part_product, c.per_part_product);
    assert_eq!(back.hinge_side, c.hinge_side);
}

#[test]
fn hinge_side_defaults_when_absent() {
    let json = r#"{"openingWidth":900.0,"openingHeight":2100.0,"openingThickness":100.0}"#;
    let c: DoorConfiguration = serde_json::from_str(json).unwrap();
    assert_eq!(c.hinge_side, HingeSide::Right);
    assert!(c.per_part_product.is_empty());
}

#[test]
fn part_slot_all_is_the_closed_set() {
    assert_eq!(PartSlot::ALL.len(), 7);
    let mut sorted = PartSlot::ALL.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 7);
}
