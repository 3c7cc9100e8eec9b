use crate::core::input::{resolve_click, NavIntent};
use crate::core::Carousel;
use crate::dom::{self, Listener};
use crate::render::{self, DomRenderer};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::Element,
    pub spinner: web::Element,
    pub prev_button: web::Element,
    pub next_button: web::Element,
    pub carousel: Rc<RefCell<Carousel>>,
    pub renderer: Rc<RefCell<DomRenderer>>,
    /// Set when a drag ends so the click the browser fires afterwards is eaten.
    pub suppress_click: Rc<Cell<bool>>,
}

pub fn wire_input_handlers(w: &InputWiring) -> Vec<Listener> {
    [
        wire_pointerdown(w),
        wire_pointermove(w),
        wire_pointerup(w),
        wire_pointercancel(w),
        wire_item_click(w),
        wire_control_click(w, &w.prev_button, NavIntent::Prev),
        wire_control_click(w, &w.next_button, NavIntent::Next),
        wire_region_click(w),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn event_time(ev: &web::Event) -> Duration {
    Duration::from_secs_f64(ev.time_stamp().max(0.0) / 1000.0)
}

fn wire_pointerdown(w: &InputWiring) -> Option<Listener> {
    let w2 = w.clone();
    Listener::new(w.container.as_ref(), "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        w2.suppress_click.set(false);
        w2.carousel
            .borrow_mut()
            .pointer_down(client_pos(&ev), event_time(&ev));
    })
}

fn wire_pointermove(w: &InputWiring) -> Option<Listener> {
    let w2 = w.clone();
    let window = web::window()?;
    Listener::new(window.as_ref(), "pointermove", move |ev: web::PointerEvent| {
        let (offset, axis) = {
            let mut c = w2.carousel.borrow_mut();
            if !c.is_dragging() {
                return;
            }
            (c.pointer_move(client_pos(&ev)), c.axis())
        };
        if let Some(offset) = offset {
            w2.renderer.borrow().nudge(axis, offset);
        }
    })
}

fn wire_pointerup(w: &InputWiring) -> Option<Listener> {
    let w2 = w.clone();
    let window = web::window()?;
    Listener::new(window.as_ref(), "pointerup", move |ev: web::PointerEvent| {
        let (release, axis) = {
            let mut c = w2.carousel.borrow_mut();
            if !c.is_dragging() {
                return;
            }
            (c.pointer_up(client_pos(&ev), event_time(&ev)), c.axis())
        };
        w2.renderer.borrow().nudge(axis, 0.0);
        if let Some(release) = release {
            log::info!(
                "[drag] released d={:.1} v={:.2} -> {:?}",
                release.displacement,
                release.velocity,
                release.intent()
            );
            w2.suppress_click.set(true);
        }
    })
}

fn wire_pointercancel(w: &InputWiring) -> Option<Listener> {
    let w2 = w.clone();
    let window = web::window()?;
    Listener::new(window.as_ref(), "pointercancel", move |_ev: web::PointerEvent| {
        let axis = {
            let mut c = w2.carousel.borrow_mut();
            c.pointer_cancel();
            c.axis()
        };
        w2.renderer.borrow().nudge(axis, 0.0);
    })
}

/// Clicks on an item select it and never reach the region handler.
fn wire_item_click(w: &InputWiring) -> Option<Listener> {
    let w2 = w.clone();
    Listener::new(w.spinner.as_ref(), "click", move |ev: web::MouseEvent| {
        let Some(index) = render::item_index_of(ev.target()) else {
            return;
        };
        ev.stop_propagation();
        if w2.suppress_click.replace(false) {
            return;
        }
        log::debug!("[click] item {}", index);
        w2.carousel.borrow_mut().apply(NavIntent::Goto(index));
    })
}

fn wire_control_click(w: &InputWiring, button: &web::Element, intent: NavIntent) -> Option<Listener> {
    let w2 = w.clone();
    Listener::new(button.as_ref(), "click", move |ev: web::MouseEvent| {
        ev.stop_propagation();
        w2.suppress_click.set(false);
        w2.carousel.borrow_mut().apply(intent);
    })
}

/// Clicks elsewhere on the surface step toward the clicked half.
fn wire_region_click(w: &InputWiring) -> Option<Listener> {
    let w2 = w.clone();
    Listener::new(w.container.as_ref(), "click", move |ev: web::MouseEvent| {
        if w2.suppress_click.replace(false) {
            return;
        }
        let rect = dom::client_rect(&w2.container);
        let mut c = w2.carousel.borrow_mut();
        let intent = resolve_click(c.axis(), rect, client_pos(&ev), None);
        log::debug!("[click] region -> {:?}", intent);
        c.apply(intent);
    })
}
