// Host-side tests for ring placement and depth falloff.

use portfolio_carousel::core::constants::{FOCUS_SCALE, MIN_OPACITY, MIN_SCALE, SELECTED_Z_INDEX};
use portfolio_carousel::core::geometry::{
    depth, position, relative_angle_deg, ring_angle_deg, step_deg, visual, Position,
};
use portfolio_carousel::core::Axis;

const EPS: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn neighbors_are_evenly_spaced() {
    for n in 1..=12 {
        let step = step_deg(n);
        assert!(approx(step * n as f32, 360.0), "n={n}");
        for i in 0..n {
            let a = relative_angle_deg(i, 0, n);
            let b = relative_angle_deg((i + 1) % n, 0, n);
            let gap = (b - a).rem_euclid(360.0);
            assert!(approx(gap, step) || approx(gap, step - 360.0), "n={n} i={i}");
        }
    }
}

#[test]
fn selected_item_sits_at_the_front() {
    for n in 1..=8 {
        for selected in 0..n {
            let p = position(selected, selected, n, Axis::Horizontal, 250.0);
            assert_eq!(p.rotation_deg, 0.0);
            assert!(approx(p.translation.x, 0.0));
            assert!(approx(p.translation.z, 250.0));
        }
    }
}

#[test]
fn four_items_after_one_step_forward() {
    // A B C D with B selected.
    let angles: Vec<f32> = (0..4).map(|i| relative_angle_deg(i, 1, 4)).collect();
    assert!(approx(angles[0], 270.0));
    assert!(approx(angles[1], 0.0));
    assert!(approx(angles[2], 90.0));
    assert!(approx(angles[3], 180.0));
}

#[test]
fn horizontal_ring_spreads_along_x() {
    let right = position(1, 0, 4, Axis::Horizontal, 250.0);
    assert!(approx(right.translation.x, 250.0));
    assert!(approx(right.translation.y, 0.0));
    assert!(approx(right.translation.z, 0.0));

    let back = position(2, 0, 4, Axis::Horizontal, 250.0);
    assert!(approx(back.translation.z, -250.0));
}

#[test]
fn vertical_ring_spreads_along_y() {
    let p = position(1, 0, 4, Axis::Vertical, 200.0);
    assert!(approx(p.translation.x, 0.0));
    assert!(approx(p.translation.y, -200.0));
    assert!(approx(p.translation.z, 0.0));

    let front = position(0, 0, 4, Axis::Vertical, 200.0);
    assert_eq!(front.translation.y, 0.0);
    assert!(front.translation.y.is_sign_positive());
}

#[test]
fn empty_ring_yields_identity() {
    let p = position(0, 0, 0, Axis::Horizontal, 250.0);
    assert_eq!(p, Position::default());
    assert_eq!(step_deg(0), 0.0);
}

#[test]
fn ring_angle_matches_relative_angle_modulo_turn() {
    let n = 5;
    let step = step_deg(n);
    for selected in 0..n {
        // Any accumulated rotation that brings `selected` to the front.
        for turns in [-2.0_f32, 0.0, 3.0] {
            let rotation = -(selected as f32) * step + turns * 360.0;
            for i in 0..n {
                let ring = ring_angle_deg(i, n, rotation).rem_euclid(360.0);
                let rel = relative_angle_deg(i, selected, n);
                let diff = (ring - rel).rem_euclid(360.0);
                assert!(diff < 0.01 || diff > 359.99, "i={i} sel={selected}");
            }
        }
    }
    assert_eq!(ring_angle_deg(0, 0, 90.0), 0.0);
}

#[test]
fn offsets_never_carry_negative_zero() {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        for i in 0..4 {
            let t = position(i, 0, 4, axis, 250.0).translation;
            for v in [t.x, t.y, t.z] {
                assert!(v != 0.0 || v.is_sign_positive(), "{axis} i={i}");
                assert!(v == 0.0 || v.abs() > 0.005);
            }
        }
    }
    let back = position(2, 0, 4, Axis::Horizontal, 250.0).translation;
    assert_eq!(back.x, 0.0);
    assert!(back.x.is_sign_positive());
}

#[test]
fn falloff_is_monotonic_in_depth() {
    let n = 8;
    let r = 250.0;
    let mut last: Option<(f32, f32, i32)> = None;
    // Walk from the front (0deg) to the back (180deg).
    for i in 1..=4 {
        let p = position(i, 0, n, Axis::Horizontal, r);
        let v = visual(&p, r, false);
        if let Some((o, s, z)) = last {
            assert!(v.opacity <= o);
            assert!(v.scale <= s);
            assert!(v.z_index <= z);
        }
        last = Some((v.opacity, v.scale, v.z_index));
    }
    let back = visual(&position(4, 0, n, Axis::Horizontal, r), r, false);
    assert!(approx(back.opacity, MIN_OPACITY));
    assert!(approx(back.scale, MIN_SCALE));
}

#[test]
fn selected_item_is_fully_opaque_and_enlarged() {
    let p = position(0, 0, 5, Axis::Horizontal, 250.0);
    let v = visual(&p, 250.0, true);
    assert_eq!(v.opacity, 1.0);
    assert_eq!(v.scale, FOCUS_SCALE);
    assert_eq!(v.z_index, SELECTED_Z_INDEX);
}

#[test]
fn depth_is_normalized_over_diameter() {
    let front = position(0, 0, 4, Axis::Horizontal, 100.0);
    let side = position(1, 0, 4, Axis::Horizontal, 100.0);
    assert!(approx(depth(&front, 100.0), 1.0));
    assert!(approx(depth(&side, 100.0), 0.5));
    assert_eq!(depth(&front, 0.0), 1.0);
}
