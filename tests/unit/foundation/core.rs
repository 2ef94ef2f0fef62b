use super::*;

#[test]
fn bounding_box_rejects_inverted_edges() {
    assert!(BoundingBox::new(0.0, 0.0, 10.0, 10.0).is_ok());
    assert!(BoundingBox::new(11.0, 0.0, 10.0, 10.0).is_err());
    assert!(BoundingBox::new(0.0, 11.0, 10.0, 10.0).is_err());
}

#[test]
fn union_point_grows_in_every_direction() {
    let b = BoundingBox::at_point(Point::new(5.0, 5.0))
        .union_point(Point::new(2.0, 8.0))
        .union_point(Point::new(9.0, 1.0));
    assert_eq!(b.min_x, 2.0);
    assert_eq!(b.min_y, 1.0);
    assert_eq!(b.max_x, 9.0);
    assert_eq!(b.max_y, 8.0);
}

#[test]
fn pad_clamps_mins_at_zero() {
    let b = BoundingBox::at_point(Point::new(3.0, 3.0)).pad(10.0);
    assert_eq!(b.min_x, 0.0);
    assert_eq!(b.min_y, 0.0);
    assert_eq!(b.max_x, 13.0);
    assert_eq!(b.max_y, 13.0);

    let far = BoundingBox::at_point(Point::new(50.0, 50.0)).pad(10.0);
    assert_eq!(far.min_x, 40.0);
    assert_eq!(far.min_y, 40.0);
}

#[test]
fn parse_view_box_accepts_spaces_and_commas() {
    let b = BoundingBox::parse_view_box("0 0 200 150").unwrap();
    assert_eq!((b.width(), b.height()), (200.0, 150.0));

    let b = BoundingBox::parse_view_box("10, 20, 30, 40").unwrap();
    assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (10.0, 20.0, 40.0, 60.0));
}

#[test]
fn parse_view_box_rejects_garbage() {
    assert!(BoundingBox::parse_view_box("").is_none());
    assert!(BoundingBox::parse_view_box("0 0 200").is_none());
    assert!(BoundingBox::parse_view_box("0 0 200 150 7").is_none());
    assert!(BoundingBox::parse_view_box("0 0 -5 10").is_none());
    assert!(BoundingBox::parse_view_box("a b c d").is_none());
    assert!(BoundingBox::parse_view_box("0 0 inf 10").is_none());
}

#[test]
fn view_box_attr_round_trips() {
    let b = BoundingBox::new(5.0, 10.0, 55.0, 40.0).unwrap();
    assert_eq!(b.to_view_box_attr(), "5 10 50 30");
    assert_eq!(BoundingBox::parse_view_box(&b.to_view_box_attr()), Some(b));
}
