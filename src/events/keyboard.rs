use super::pointer::InputWiring;
use crate::core::input::{is_activation_key, key_intent, NavIntent};
use crate::dom::Listener;
use crate::render;
use web_sys as web;

/// Arrow keys while the carousel (or anything inside it) has focus. Only the
/// pair matching the current axis is consumed; everything else scrolls as usual.
pub fn handle_container_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    let mut c = w.carousel.borrow_mut();
    let Some(intent) = key_intent(c.axis(), &ev.key()) else {
        return;
    };
    ev.prevent_default();
    log::debug!("[keys] {} -> {:?}", ev.key(), intent);
    c.apply(intent);
}

/// Enter/Space on a focused item selects it.
pub fn handle_item_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    if !is_activation_key(&ev.key()) {
        return;
    }
    let Some(index) = render::item_index_of(ev.target()) else {
        return;
    };
    ev.prevent_default();
    ev.stop_propagation();
    w.carousel.borrow_mut().apply(NavIntent::Goto(index));
}

pub fn wire_keyboard(w: &InputWiring) -> Vec<Listener> {
    let for_items = w.clone();
    let for_container = w.clone();
    [
        Listener::new(w.spinner.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
            handle_item_keydown(&ev, &for_items);
        }),
        Listener::new(w.container.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
            handle_container_keydown(&ev, &for_container);
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}
