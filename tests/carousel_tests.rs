// Host-side tests for the mounted carousel: selection observer, drag,
// item replacement and layout output.

use glam::Vec2;
use portfolio_carousel::core::data::tech_items;
use portfolio_carousel::core::{
    Axis, Carousel, CarouselConfig, CarouselEvent, CarouselItem, ItemLayout, NavIntent,
    ViewportPreset,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const SETTLE: Duration = Duration::from_millis(500);

fn items(n: usize) -> Vec<CarouselItem> {
    (0..n)
        .map(|i| CarouselItem::new(format!("item-{i}").as_str(), &format!("Item {i}")))
        .collect()
}

fn carousel(n: usize) -> Carousel {
    let mut cfg = CarouselConfig::with_items(items(n));
    cfg.auto_rotate = false;
    let mut c = Carousel::new(cfg);
    c.mount();
    c
}

fn recorder(c: &mut Carousel) -> Rc<RefCell<Vec<(String, usize)>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    c.set_on_select(move |item, index| {
        sink.borrow_mut().push((item.title_or_empty().to_string(), index));
    });
    seen
}

#[test]
fn callback_fires_once_per_accepted_navigation() {
    let mut c = carousel(4);
    let seen = recorder(&mut c);

    assert!(c.go_to_next());
    assert!(!c.go_to_next()); // still animating
    c.tick(SETTLE);
    assert!(c.go_to_index(3));
    c.tick(SETTLE);
    assert!(!c.go_to_index(3)); // already selected

    assert_eq!(
        *seen.borrow(),
        vec![("Item 1".to_string(), 1), ("Item 3".to_string(), 3)]
    );
}

#[test]
fn auto_rotate_notifies_observer() {
    let mut cfg = CarouselConfig::with_items(items(3));
    cfg.auto_rotate_speed_ms = 1000;
    let mut c = Carousel::new(cfg);
    let seen = recorder(&mut c);
    c.mount();
    assert!(c.is_auto_rotating());

    c.tick(Duration::from_millis(1000));
    assert_eq!(c.selected_index(), 1);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn unmount_stops_everything() {
    let mut cfg = CarouselConfig::with_items(items(3));
    cfg.auto_rotate_speed_ms = 1000;
    let mut c = Carousel::new(cfg);
    c.mount();
    c.unmount();
    assert!(!c.is_mounted());
    assert!(!c.is_auto_rotating());
    c.tick(Duration::from_secs(10));
    assert_eq!(c.selected_index(), 0);
    assert!(c.drain_events().is_empty());
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = carousel(0);
    assert!(c.is_empty());
    assert!(!c.go_to_next());
    assert!(!c.go_to_prev());
    assert!(!c.apply(NavIntent::Goto(0)));
    assert!(c.selected_item().is_none());
    assert!(c.layout().is_empty());
    c.pointer_down(Vec2::ZERO, Duration::ZERO);
    assert!(!c.is_dragging());
}

#[test]
fn drag_release_navigates_once() {
    let mut c = carousel(5);
    let seen = recorder(&mut c);
    c.pointer_down(Vec2::new(200.0, 100.0), Duration::ZERO);
    assert!(c.is_dragging());
    assert_eq!(c.pointer_move(Vec2::new(198.0, 100.0)), None);
    assert!(c.pointer_move(Vec2::new(150.0, 100.0)).is_some());
    let release = c.pointer_up(Vec2::new(120.0, 100.0), Duration::from_millis(160));
    assert!(release.is_some());
    assert_eq!(c.selected_index(), 1);
    assert!(c
        .pointer_up(Vec2::new(0.0, 100.0), Duration::from_millis(200))
        .is_none());
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn tap_does_not_navigate() {
    let mut c = carousel(5);
    c.pointer_down(Vec2::new(200.0, 100.0), Duration::ZERO);
    assert!(c
        .pointer_up(Vec2::new(202.0, 101.0), Duration::from_millis(90))
        .is_none());
    assert_eq!(c.selected_index(), 0);
}

#[test]
fn replacing_items_reclamps_without_notifying() {
    let mut c = carousel(4);
    c.go_to_index(3);
    c.tick(SETTLE);
    let seen = recorder(&mut c);
    c.drain_events();

    c.set_items(items(2));
    assert_eq!(c.selected_index(), 1);
    assert!(seen.borrow().is_empty());
    assert_eq!(c.drain_events(), vec![CarouselEvent::LayoutChanged]);

    // Same count, new content: still a layout change.
    c.set_items(items(2));
    assert_eq!(c.drain_events(), vec![CarouselEvent::LayoutChanged]);
}

#[test]
fn layout_marks_selected_item() {
    let mut c = carousel(4);
    c.go_to_next();
    let layout = c.layout();
    assert_eq!(layout.len(), 4);
    let selected: Vec<usize> = layout
        .iter()
        .filter(|l| l.style.selected)
        .map(|l| l.index)
        .collect();
    assert_eq!(selected, vec![1]);
    assert!(layout.iter().all(|l| l.style.transition.is_some()));

    c.tick(SETTLE);
    assert!(c.layout().iter().all(|l| l.style.transition.is_none()));
}

#[test]
fn resize_and_preset_emit_layout_changes() {
    let mut c = carousel(4);
    c.drain_events();
    c.resize(450.0, 300.0);
    assert_eq!(c.effective_radius(), 150.0);
    assert_eq!(c.drain_events(), vec![CarouselEvent::LayoutChanged]);
    c.resize(450.0, 300.0);
    assert!(c.drain_events().is_empty());

    c.apply_preset(ViewportPreset::for_width(1280.0));
    assert_eq!(c.axis(), Axis::Vertical);
    assert_eq!(c.container_class(), "carousel-container vertical");
    assert!(!c.drain_events().is_empty());
}

#[test]
fn initial_index_out_of_range_is_clamped() {
    let mut cfg = CarouselConfig::with_items(tech_items());
    cfg.initial_index = 99;
    let c = Carousel::new(cfg);
    assert_eq!(c.selected_index(), 7);
    assert_eq!(c.selected_item().map(|i| i.title_or_empty()), Some("Git"));
}

fn drawn_rotation(layout: &[ItemLayout]) -> Vec<f32> {
    layout
        .iter()
        .map(|l| {
            let (_, rest) = l.style.transform.split_once("rotateY(").unwrap();
            let (deg, _) = rest.split_once("deg)").unwrap();
            deg.parse::<f32>().unwrap()
        })
        .collect()
}

#[test]
fn items_turn_one_slot_per_step_across_the_seam() {
    for n in [4usize, 5] {
        let mut c = carousel(n);
        let slot = 360.0 / n as f32;
        let mut last_ring: Vec<f32> = c.layout().iter().map(|l| l.ring_deg).collect();
        let mut last_css = drawn_rotation(&c.layout());
        // Wrap forward past the end, then back past the start.
        let steps = std::iter::repeat(true).take(6).chain(std::iter::repeat(false).take(7));
        for forward in steps {
            let accepted = if forward { c.go_to_next() } else { c.go_to_prev() };
            assert!(accepted);
            c.tick(SETTLE);
            let layout = c.layout();
            let ring: Vec<f32> = layout.iter().map(|l| l.ring_deg).collect();
            let css = drawn_rotation(&layout);
            for i in 0..n {
                assert!(((ring[i] - last_ring[i]).abs() - slot).abs() < 1e-3, "n={n} i={i}");
                assert!(((css[i] - last_css[i]).abs() - slot).abs() < 0.02, "n={n} i={i}");
            }
            last_ring = ring;
            last_css = css;
        }
    }
}

#[test]
fn jumps_never_turn_more_than_half_a_ring() {
    let mut c = carousel(6);
    let mut last: Vec<f32> = c.layout().iter().map(|l| l.ring_deg).collect();
    for target in [3usize, 5, 1, 4, 0, 2] {
        assert!(c.go_to_index(target));
        c.tick(SETTLE);
        let ring: Vec<f32> = c.layout().iter().map(|l| l.ring_deg).collect();
        for (a, b) in ring.iter().zip(&last) {
            assert!((a - b).abs() <= 180.0 + 1e-3);
        }
        let front = &c.layout()[target];
        assert!(front.ring_deg.rem_euclid(360.0) < 1e-3 || front.ring_deg.rem_euclid(360.0) > 359.999);
        last = ring;
    }
}

#[test]
fn preset_leaves_pinned_radius_alone() {
    let (cfg, errors) = CarouselConfig::from_attributes(items(4), |key| {
        (key == "radius").then(|| "400".to_string())
    });
    assert!(errors.is_empty());
    let mut c = Carousel::new(cfg);
    c.apply_preset(ViewportPreset::for_width(1280.0));
    assert_eq!(c.axis(), Axis::Vertical);
    assert_eq!(c.effective_radius(), 400.0);
}

#[test]
fn preset_leaves_pinned_axis_alone() {
    let (cfg, _) = CarouselConfig::from_attributes(items(4), |key| {
        (key == "axis").then(|| "horizontal".to_string())
    });
    let mut c = Carousel::new(cfg);
    c.apply_preset(ViewportPreset::for_width(1280.0));
    assert_eq!(c.axis(), Axis::Horizontal);
    assert_eq!(c.effective_radius(), 250.0);

    c.apply_preset(ViewportPreset::for_width(800.0));
    assert_eq!(c.axis(), Axis::Horizontal);
    assert_eq!(c.effective_radius(), 140.0);
}

#[test]
fn axis_switch_rereads_last_container_size() {
    let mut c = carousel(4);
    c.resize(1200.0, 450.0);
    assert_eq!(c.effective_radius(), 250.0);
    c.drain_events();

    c.set_axis(Axis::Vertical);
    assert_eq!(c.effective_radius(), 150.0);
    assert_eq!(c.drain_events(), vec![CarouselEvent::LayoutChanged]);

    c.set_axis(Axis::Horizontal);
    assert_eq!(c.effective_radius(), 250.0);
}
