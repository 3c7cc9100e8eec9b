//! The mounted carousel: rotation state, responsive radius and drag tracking
//! behind one owner, plus the selection observer.
//!
//! State flows one way. Navigation and time push [`CarouselEvent`]s into an
//! outbox; the selection callback runs once per accepted navigation, and the
//! renderer drains the outbox to decide when to recompute [`Carousel::layout`].

use super::axis::Axis;
use super::config::{CarouselConfig, Pinned, ViewportPreset};
use super::geometry::{self, Position, Visual};
use super::input::{DragRelease, DragTracker, NavIntent};
use super::item::CarouselItem;
use super::radius::RadiusAdapter;
use super::render::{self, ItemStyle};
use super::rotation::{CarouselEvent, NavOrigin, RotationMachine};
use glam::Vec2;
use std::time::Duration;

pub type SelectCallback = Box<dyn FnMut(&CarouselItem, usize)>;

/// Everything needed to draw one item in the current pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemLayout {
    pub index: usize,
    pub position: Position,
    /// Unfolded drawing angle; see [`geometry::ring_angle_deg`].
    pub ring_deg: f32,
    pub visual: Visual,
    pub style: ItemStyle,
}

pub struct Carousel {
    items: Vec<CarouselItem>,
    axis: Axis,
    class_name: String,
    pinned: Pinned,
    auto_rotate: bool,
    auto_rotate_speed_ms: u32,
    machine: RotationMachine,
    radius: RadiusAdapter,
    drag: DragTracker,
    events: Vec<CarouselEvent>,
    on_select: Option<SelectCallback>,
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.items.len())
            .field("axis", &self.axis)
            .field("machine", &self.machine)
            .field("radius", &self.radius)
            .finish()
    }
}

impl Carousel {
    pub fn new(config: CarouselConfig) -> Self {
        let machine = RotationMachine::new(config.items.len(), config.initial_index);
        Self {
            axis: config.axis,
            class_name: config.class_name,
            pinned: config.pinned,
            auto_rotate: config.auto_rotate,
            auto_rotate_speed_ms: config.auto_rotate_speed_ms,
            machine,
            radius: RadiusAdapter::new(config.radius),
            drag: DragTracker::default(),
            events: Vec::new(),
            on_select: None,
            items: config.items,
        }
    }

    /// Register the selection observer, replacing any previous one.
    pub fn set_on_select(&mut self, callback: impl FnMut(&CarouselItem, usize) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    // ---------------- Lifecycle ----------------

    pub fn mount(&mut self) {
        self.machine.activate(self.auto_rotate_interval());
        log::info!(
            "[mount] carousel items={} axis={} selected={}",
            self.items.len(),
            self.axis,
            self.machine.selected_index()
        );
    }

    pub fn unmount(&mut self) {
        self.machine.deactivate();
        self.drag.cancel();
        self.events.clear();
        log::info!("[mount] carousel unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.machine.is_active()
    }

    // ---------------- Queries ----------------

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.machine.selected_index()
    }

    pub fn selected_item(&self) -> Option<&CarouselItem> {
        self.items.get(self.machine.selected_index())
    }

    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.machine.is_auto_rotating()
    }

    pub fn rotation_deg(&self) -> f32 {
        self.machine.rotation_deg()
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn effective_radius(&self) -> f32 {
        self.radius.effective()
    }

    pub fn container_class(&self) -> String {
        render::container_class(self.axis, &self.class_name)
    }

    fn auto_rotate_interval(&self) -> Option<Duration> {
        (self.auto_rotate && self.auto_rotate_speed_ms > 0)
            .then(|| Duration::from_millis(self.auto_rotate_speed_ms as u64))
    }

    // ---------------- Navigation ----------------

    pub fn go_to_index(&mut self, index: usize) -> bool {
        let mark = self.events.len();
        let accepted = self
            .machine
            .go_to_index(index, NavOrigin::User, &mut self.events);
        self.dispatch_from(mark);
        accepted
    }

    pub fn go_to_next(&mut self) -> bool {
        let mark = self.events.len();
        let accepted = self.machine.go_to_next(NavOrigin::User, &mut self.events);
        self.dispatch_from(mark);
        accepted
    }

    pub fn go_to_prev(&mut self) -> bool {
        let mark = self.events.len();
        let accepted = self.machine.go_to_prev(NavOrigin::User, &mut self.events);
        self.dispatch_from(mark);
        accepted
    }

    pub fn apply(&mut self, intent: NavIntent) -> bool {
        match intent {
            NavIntent::Prev => self.go_to_prev(),
            NavIntent::Next => self.go_to_next(),
            NavIntent::Goto(i) => self.go_to_index(i),
        }
    }

    /// Advance the animation lock and auto-rotate timers.
    pub fn tick(&mut self, dt: Duration) {
        let mark = self.events.len();
        self.machine.tick(dt, &mut self.events);
        self.dispatch_from(mark);
    }

    fn dispatch_from(&mut self, mark: usize) {
        let Some(callback) = self.on_select.as_mut() else {
            return;
        };
        for event in &self.events[mark..] {
            if let CarouselEvent::SelectionChanged { index } = *event {
                if let Some(item) = self.items.get(index) {
                    callback(item, index);
                }
            }
        }
    }

    /// Take every event pushed since the last drain.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }

    // ---------------- Configuration changes ----------------

    /// Swap the item list. Selection is re-clamped; no selection event fires.
    pub fn set_items(&mut self, items: Vec<CarouselItem>) {
        let count = items.len();
        self.items = items;
        let before = self.events.len();
        self.machine.set_count(count, &mut self.events);
        if self.events.len() == before {
            self.events.push(CarouselEvent::LayoutChanged);
        }
    }

    pub fn set_axis(&mut self, axis: Axis) {
        if axis == self.axis {
            return;
        }
        self.axis = axis;
        self.drag.cancel();
        // The radius now follows the other container dimension.
        self.radius.set_axis(axis);
        self.events.push(CarouselEvent::LayoutChanged);
    }

    /// Change the configured (maximum) radius.
    pub fn set_radius(&mut self, radius: f32) {
        if self.radius.set_configured(radius).is_some() {
            self.events.push(CarouselEvent::LayoutChanged);
        }
    }

    /// Apply the viewport preset to whatever the page did not pin.
    pub fn apply_preset(&mut self, preset: ViewportPreset) {
        if !self.pinned.axis {
            self.set_axis(preset.axis);
        }
        if !self.pinned.radius {
            self.set_radius(preset.radius);
        }
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
        self.machine.set_auto_rotate(self.auto_rotate_interval());
    }

    /// Feed the observed container size; only real changes recompute the radius.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.radius.observe(width, height, self.axis).is_some() {
            self.events.push(CarouselEvent::LayoutChanged);
        }
    }

    // ---------------- Drag ----------------

    pub fn pointer_down(&mut self, pos: Vec2, at: Duration) {
        if self.items.is_empty() {
            return;
        }
        self.drag.begin(pos, at);
    }

    /// Incremental drag offset, once past the threshold.
    pub fn pointer_move(&mut self, pos: Vec2) -> Option<f32> {
        self.drag.update(pos, self.axis)
    }

    /// Finish a drag. A real drag navigates once and is reported; a tap
    /// returns `None` and is left to the click path.
    pub fn pointer_up(&mut self, pos: Vec2, at: Duration) -> Option<DragRelease> {
        let release = self.drag.end(pos, at, self.axis)?;
        self.apply(release.intent());
        Some(release)
    }

    pub fn pointer_cancel(&mut self) {
        self.drag.cancel();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ---------------- Layout ----------------

    /// Positions and styles for every item; empty when there are no items.
    pub fn layout(&self) -> Vec<ItemLayout> {
        let count = self.items.len();
        let selected = self.machine.selected_index();
        let radius = self.radius.effective();
        let animating = self.machine.is_animating();
        let rotation = self.machine.rotation_deg();
        (0..count)
            .map(|index| {
                let position = geometry::position(index, selected, count, self.axis, radius);
                let ring_deg = geometry::ring_angle_deg(index, count, rotation);
                let is_selected = index == selected;
                let visual = geometry::visual(&position, radius, is_selected);
                let style = render::item_style(
                    &position,
                    &visual,
                    self.axis,
                    ring_deg,
                    is_selected,
                    animating,
                );
                ItemLayout {
                    index,
                    position,
                    ring_deg,
                    visual,
                    style,
                }
            })
            .collect()
    }
}
