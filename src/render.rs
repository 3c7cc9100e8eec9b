//! DOM rendering for the carousel.
//!
//! The element tree is built once per item list; every later pass only
//! copies the precomputed [`ItemLayout`](crate::core::ItemLayout) styles onto
//! the existing elements.

use crate::constants::{CONTROLS_CLASS, DRAG_FOLLOW, EMPTY_CLASS, SPINNER_CLASS, VIEWPORT_CLASS};
use crate::core::render::{aria_label, image_alt, EMPTY_STATE_TEXT};
use crate::core::{Axis, Carousel, CarouselItem, ItemId};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const ITEM_SELECTOR: &str = ".carousel-item";

pub struct DomRenderer {
    document: web::Document,
    pub container: web::Element,
    pub spinner: web::Element,
    pub prev_button: web::Element,
    pub next_button: web::Element,
    empty: web::Element,
    items: Vec<web::Element>,
    ids: Vec<ItemId>,
}

impl DomRenderer {
    pub fn build(
        document: &web::Document,
        container: web::Element,
        carousel: &Carousel,
    ) -> anyhow::Result<Self> {
        container.set_inner_html("");
        _ = container.set_attribute("tabindex", "0");
        _ = container.set_attribute("role", "region");
        _ = container.set_attribute("aria-roledescription", "carousel");

        let viewport = dom::create_element(document, "div", VIEWPORT_CLASS)?;
        let spinner = dom::create_element(document, "div", SPINNER_CLASS)?;
        let empty = dom::create_element(document, "div", EMPTY_CLASS)?;
        empty.set_text_content(Some(EMPTY_STATE_TEXT));
        dom::append(&viewport, &spinner)?;
        dom::append(&viewport, &empty)?;
        dom::append(&container, &viewport)?;

        let controls = dom::create_element(document, "div", CONTROLS_CLASS)?;
        let prev_button = control_button(document, "carousel-control carousel-control-prev", "Prev", "Previous item")?;
        let next_button = control_button(document, "carousel-control carousel-control-next", "Next", "Next item")?;
        dom::append(&controls, &prev_button)?;
        dom::append(&controls, &next_button)?;
        dom::append(&container, &controls)?;

        let mut renderer = Self {
            document: document.clone(),
            container,
            spinner,
            prev_button,
            next_button,
            empty,
            items: Vec::new(),
            ids: Vec::new(),
        };
        renderer.update(carousel);
        Ok(renderer)
    }

    fn rebuild_items(&mut self, items: &[CarouselItem]) {
        self.spinner.set_inner_html("");
        self.items.clear();
        for (index, item) in items.iter().enumerate() {
            match build_item(&self.document, index, item) {
                Ok(el) => {
                    if let Err(e) = dom::append(&self.spinner, &el) {
                        log::error!("[render] item {}: {:?}", index, e);
                    }
                    self.items.push(el);
                }
                Err(e) => log::error!("[render] item {}: {:?}", index, e),
            }
        }
        self.ids = items.iter().map(|i| i.id.clone()).collect();
        log::debug!("[render] built {} items", self.items.len());
    }

    /// Copy the current layout onto the DOM.
    pub fn update(&mut self, carousel: &Carousel) {
        let ids_match = self.ids.len() == carousel.items().len()
            && self.ids.iter().zip(carousel.items()).all(|(a, b)| *a == b.id);
        if !ids_match {
            self.rebuild_items(carousel.items());
        }

        self.container.set_class_name(&carousel.container_class());
        let empty = carousel.is_empty();
        set_hidden(&self.empty, !empty);
        set_hidden(&self.spinner, empty);
        _ = self.prev_button.toggle_attribute_with_force("disabled", empty);
        _ = self.next_button.toggle_attribute_with_force("disabled", empty);
        if empty {
            return;
        }

        _ = self
            .spinner
            .set_attribute("data-rotation", &format!("{:.2}", carousel.rotation_deg()));
        for (layout, el) in carousel.layout().iter().zip(&self.items) {
            el.set_class_name(layout.style.class());
            _ = el.set_attribute("style", &layout.style.css());
            _ = el.set_attribute(
                "aria-selected",
                if layout.style.selected { "true" } else { "false" },
            );
        }
    }

    /// Let the ring follow an in-progress drag; `0.0` resets it.
    pub fn nudge(&self, axis: Axis, offset: f32) {
        let Some(spinner) = self.spinner.dyn_ref::<web::HtmlElement>() else {
            return;
        };
        let shift = offset * DRAG_FOLLOW;
        let transform = match axis {
            _ if shift == 0.0 => String::new(),
            Axis::Horizontal => format!("translateX({:.1}px)", shift),
            Axis::Vertical => format!("translateY({:.1}px)", shift),
        };
        _ = spinner.style().set_property("transform", &transform);
    }
}

fn set_hidden(el: &web::Element, hidden: bool) {
    _ = el.toggle_attribute_with_force("hidden", hidden);
}

fn control_button(
    document: &web::Document,
    class: &str,
    text: &str,
    label: &str,
) -> anyhow::Result<web::Element> {
    let button = dom::create_element(document, "button", class)?;
    _ = button.set_attribute("type", "button");
    _ = button.set_attribute("aria-label", label);
    button.set_text_content(Some(text));
    Ok(button)
}

/// Focusable, clickable card; image and title are skipped when missing.
fn build_item(
    document: &web::Document,
    index: usize,
    item: &CarouselItem,
) -> anyhow::Result<web::Element> {
    let el = dom::create_element(document, "div", "carousel-item")?;
    _ = el.set_attribute("role", "button");
    _ = el.set_attribute("tabindex", "0");
    _ = el.set_attribute("data-index", &index.to_string());
    _ = el.set_attribute("aria-label", &aria_label(index, item));

    let content = dom::create_element(document, "div", "carousel-item-content")?;
    if let Some(src) = item.image.as_deref().filter(|s| !s.is_empty()) {
        let img = dom::create_element(document, "img", "carousel-image")?;
        _ = img.set_attribute("src", src);
        _ = img.set_attribute("alt", &image_alt(index, item));
        _ = img.set_attribute("draggable", "false");
        dom::append(&content, &img)?;
    }
    if let Some(title) = item.title.as_deref().filter(|s| !s.is_empty()) {
        let h3 = dom::create_element(document, "h3", "carousel-title")?;
        h3.set_text_content(Some(title));
        dom::append(&content, &h3)?;
    }
    dom::append(&el, &content)?;
    Ok(el)
}

/// Index of the item element an event came from, if any.
pub fn item_index_of(target: Option<web::EventTarget>) -> Option<usize> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    let item = el.closest(ITEM_SELECTOR).ok()??;
    item.get_attribute("data-index")?.parse().ok()
}
