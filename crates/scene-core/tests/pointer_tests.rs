use scene_core::*;

const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

#[test]
fn corners_map_to_unit_square() {
    assert_eq!(normalize_pointer(0.0, 0.0, VIEWPORT), Some([-1.0, 1.0]));
    assert_eq!(normalize_pointer(800.0, 600.0, VIEWPORT), Some([1.0, -1.0]));
    assert_eq!(normalize_pointer(400.0, 300.0, VIEWPORT), Some([0.0, 0.0]));
}

#[test]
fn y_axis_is_inverted() {
    let [_, top] = normalize_pointer(10.0, 0.0, VIEWPORT).unwrap();
    let [_, bottom] = normalize_pointer(10.0, 600.0, VIEWPORT).unwrap();
    assert_eq!(top, 1.0);
    assert_eq!(bottom, -1.0);
}

#[test]
fn on_screen_positions_stay_in_range() {
    for i in 0..=16 {
        for j in 0..=12 {
            let cx = 800.0 * i as f32 / 16.0;
            let cy = 600.0 * j as f32 / 12.0;
            let [x, y] = normalize_pointer(cx, cy, VIEWPORT).unwrap();
            assert!((-1.0..=1.0).contains(&x), "x={x} for cx={cx}");
            assert!((-1.0..=1.0).contains(&y), "y={y} for cy={cy}");
        }
    }
}

#[test]
fn off_screen_positions_are_not_clamped() {
    let [x, y] = normalize_pointer(1200.0, -300.0, VIEWPORT).unwrap();
    assert_eq!(x, 2.0);
    assert_eq!(y, 2.0);
}

#[test]
fn state_sticks_at_last_value() {
    let mut p = PointerState::default();
    assert_eq!(p, PointerState { x: 0.0, y: 0.0 });
    p.on_move(800.0, 0.0, VIEWPORT);
    assert_eq!(p, PointerState { x: 1.0, y: 1.0 });
    // No further events: nothing resets it.
    assert_eq!(p, PointerState { x: 1.0, y: 1.0 });
}

#[test]
fn degenerate_viewport_is_ignored() {
    let mut p = PointerState { x: 0.25, y: -0.5 };
    p.on_move(10.0, 10.0, Viewport::new(0.0, 600.0));
    assert_eq!(p, PointerState { x: 0.25, y: -0.5 });
    assert!(normalize_pointer(1.0, 1.0, Viewport::new(800.0, 0.0)).is_none());
}
