// Host-side tests for the responsive radius adapter.

use portfolio_carousel::core::constants::FLOOR_RADIUS;
use portfolio_carousel::core::radius::clamp_radius;
use portfolio_carousel::core::{Axis, RadiusAdapter};

#[test]
fn starts_at_configured_radius() {
    let r = RadiusAdapter::new(250.0);
    assert_eq!(r.effective(), 250.0);
    assert_eq!(r.configured(), 250.0);
    assert_eq!(r.floor(), FLOOR_RADIUS);
}

#[test]
fn shrinks_with_container_width() {
    let mut r = RadiusAdapter::new(250.0);
    assert_eq!(r.observe(600.0, 400.0, Axis::Horizontal), Some(200.0));
    assert_eq!(r.effective(), 200.0);
}

#[test]
fn never_exceeds_configured_maximum() {
    let mut r = RadiusAdapter::new(250.0);
    r.observe(600.0, 400.0, Axis::Horizontal);
    r.observe(1800.0, 400.0, Axis::Horizontal);
    assert_eq!(r.effective(), 250.0);
}

#[test]
fn never_drops_below_floor() {
    let mut r = RadiusAdapter::new(250.0);
    r.observe(150.0, 150.0, Axis::Horizontal);
    assert_eq!(r.effective(), FLOOR_RADIUS);
}

#[test]
fn small_configured_radius_wins_over_floor() {
    let mut r = RadiusAdapter::new(80.0);
    assert_eq!(r.floor(), 80.0);
    r.observe(30.0, 30.0, Axis::Horizontal);
    assert_eq!(r.effective(), 80.0);
}

#[test]
fn vertical_ring_follows_container_height() {
    let mut r = RadiusAdapter::new(250.0);
    assert_eq!(r.observe(1200.0, 450.0, Axis::Vertical), Some(150.0));
    // Switching axis is an observable change on its own.
    assert_eq!(r.observe(1200.0, 450.0, Axis::Horizontal), Some(250.0));
}

#[test]
fn identical_observation_does_not_recompute() {
    let mut r = RadiusAdapter::new(250.0);
    assert!(r.observe(600.0, 400.0, Axis::Horizontal).is_some());
    assert!(r.observe(600.0, 400.0, Axis::Horizontal).is_none());
    // A different height leaves a horizontal ring where it was.
    assert!(r.observe(600.0, 900.0, Axis::Horizontal).is_none());
    assert_eq!(r.effective(), 200.0);
}

#[test]
fn changing_configured_radius_reclamps() {
    let mut r = RadiusAdapter::new(250.0);
    r.observe(900.0, 400.0, Axis::Horizontal);
    assert_eq!(r.effective(), 250.0);
    assert_eq!(r.set_configured(140.0), Some(140.0));
    assert_eq!(r.set_configured(140.0), None);
    assert_eq!(r.floor(), FLOOR_RADIUS);
}

#[test]
fn clamp_handles_non_finite_candidates() {
    assert_eq!(clamp_radius(f32::NAN, 110.0, 250.0), 110.0);
    assert_eq!(clamp_radius(f32::INFINITY, 110.0, 250.0), 110.0);
    assert_eq!(clamp_radius(50.0, 110.0, 90.0), 90.0);
}

#[test]
fn axis_change_rereads_observed_size() {
    let mut r = RadiusAdapter::new(250.0);
    assert_eq!(r.set_axis(Axis::Vertical), None);
    assert_eq!(r.effective(), 250.0);

    r.observe(1200.0, 450.0, Axis::Horizontal);
    assert_eq!(r.effective(), 250.0);
    assert_eq!(r.set_axis(Axis::Vertical), Some(150.0));
    assert_eq!(r.set_axis(Axis::Vertical), None);
}
