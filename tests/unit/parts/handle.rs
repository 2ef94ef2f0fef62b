use super::*;
use kurbo::Shape;

const COLOR: Rgba8 = Rgba8::opaque(0x30, 0x30, 0x30);

fn geometry_bbox(g: &VectorGeometry) -> kurbo::Rect {
    g.shapes
        .iter()
        .map(|s| s.path.bounding_box())
        .reduce(|a, b| a.union(b))
        .unwrap()
}

#[test]
fn all_variants_are_referentially_transparent() {
    for variant in [HandleVariant::Lever, HandleVariant::Knob, HandleVariant::PushBar] {
        for position in [HandlePosition::Left, HandlePosition::Right] {
            let a = render_handle(30.0, 80.0, variant, COLOR, position);
            let b = render_handle(30.0, 80.0, variant, COLOR, position);
            assert_eq!(a, b, "variant {variant:?} position {position:?}");
        }
    }
}

#[test]
fn left_position_mirrors_geometry() {
    let right = render_handle(30.0, 80.0, HandleVariant::Lever, COLOR, HandlePosition::Right);
    let left = render_handle(30.0, 80.0, HandleVariant::Lever, COLOR, HandlePosition::Left);
    assert_ne!(right, left);

    // Mirroring maps x to width - x, so the combined bounding boxes reflect.
    let rb = geometry_bbox(&right);
    let lb = geometry_bbox(&left);
    assert!((rb.x0 - (30.0 - lb.x1)).abs() < 1e-9);
    assert!((rb.x1 - (30.0 - lb.x0)).abs() < 1e-9);
    assert!((rb.y0 - lb.y0).abs() < 1e-9);
    assert!((rb.y1 - lb.y1).abs() < 1e-9);
}

#[test]
fn mirroring_preserves_shape_count_and_paint_order() {
    for variant in [HandleVariant::Lever, HandleVariant::Knob, HandleVariant::PushBar] {
        let right = render_handle(30.0, 80.0, variant, COLOR, HandlePosition::Right);
        let left = render_handle(30.0, 80.0, variant, COLOR, HandlePosition::Left);
        assert_eq!(right.shapes.len(), left.shapes.len());
        for (r, l) in right.shapes.iter().zip(&left.shapes) {
            assert_eq!(r.fill, l.fill);
            assert_eq!(r.stroke, l.stroke);
        }
    }
}

#[test]
fn variants_produce_distinct_geometry() {
    let lever = render_handle(30.0, 80.0, HandleVariant::Lever, COLOR, HandlePosition::Right);
    let knob = render_handle(30.0, 80.0, HandleVariant::Knob, COLOR, HandlePosition::Right);
    let bar = render_handle(30.0, 80.0, HandleVariant::PushBar, COLOR, HandlePosition::Right);
    assert_ne!(lever, knob);
    assert_ne!(knob, bar);
    assert_eq!(bar.shapes.len(), 3); // two posts + bar
}

#[test]
fn degenerate_dimensions_render_nothing() {
    assert!(render_handle(0.0, 80.0, HandleVariant::Knob, COLOR, HandlePosition::Right).is_empty());
    assert!(render_handle(30.0, 0.0, HandleVariant::Knob, COLOR, HandlePosition::Left).is_empty());
}
