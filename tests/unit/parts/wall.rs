use super::*;
use kurbo::Rect;

const COLOR: Rgba8 = Rgba8::opaque(0xd8, 0xd2, 0xc4);

fn opening() -> Rect {
    Rect::new(80.0, 200.0, 980.0, 2300.0)
}

#[test]
fn all_patterns_are_referentially_transparent() {
    for pattern in [WallPattern::Plain, WallPattern::Subtle, WallPattern::Brick] {
        let a = render_wall(1060.0, 2380.0, opening(), pattern, COLOR);
        let b = render_wall(1060.0, 2380.0, opening(), pattern, COLOR);
        assert_eq!(a, b, "pattern {pattern:?}");
    }
}

#[test]
fn base_shape_uses_even_odd_cutout() {
    let g = render_wall(1060.0, 2380.0, opening(), WallPattern::Plain, COLOR);
    assert_eq!(g.shapes.len(), 1);

    let base = &g.shapes[0];
    assert_eq!(base.fill_rule, FillRule::EvenOdd);
    assert_eq!(base.fill, Some(COLOR));

    // One path carrying both the outer rect and the opening subpath: two
    // MoveTo elements.
    let moves = base
        .path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
}

#[test]
fn subtle_pattern_adds_hairlines() {
    let g = render_wall(1060.0, 2380.0, opening(), WallPattern::Subtle, COLOR);
    assert!(g.shapes.len() > 1);
    assert!(g.shapes[1..].iter().all(|s| s.stroke.is_some()));
}

#[test]
fn brick_pattern_adds_one_stroked_overlay() {
    let g = render_wall(1060.0, 2380.0, opening(), WallPattern::Brick, COLOR);
    assert_eq!(g.shapes.len(), 2);
    assert!(g.shapes[1].stroke.is_some());
    assert!(!g.shapes[1].path.elements().is_empty());
}

#[test]
fn degenerate_canvas_renders_nothing() {
    assert!(render_wall(0.0, 2380.0, opening(), WallPattern::Plain, COLOR).is_empty());
    assert!(render_wall(1060.0, -1.0, opening(), WallPattern::Brick, COLOR).is_empty());
}
