use crate::constants::{DETAILS_ID, GRID_ID, GRID_ITEM_SELECTOR};
use crate::core::panel::{details_html, grid_tile_html};
use crate::core::{Carousel, NavIntent};
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Details card and tech grid next to the carousel. Both are optional; a page
/// without them simply gets the bare carousel.
pub struct DetailsPanel {
    details: Option<web::Element>,
    grid: Option<web::Element>,
}

impl DetailsPanel {
    pub fn find(document: &web::Document) -> Self {
        Self {
            details: document.get_element_by_id(DETAILS_ID),
            grid: document.get_element_by_id(GRID_ID),
        }
    }

    /// Show the selected item and mark its grid tile.
    pub fn sync(&self, carousel: &Carousel) {
        if let Some(el) = &self.details {
            match carousel.selected_item() {
                Some(item) => el.set_inner_html(&details_html(item)),
                None => el.set_inner_html(""),
            }
        }
        if let Some(grid) = &self.grid {
            let selected = carousel.selected_index();
            let tiles: String = carousel
                .items()
                .iter()
                .enumerate()
                .map(|(i, item)| grid_tile_html(i, item, i == selected))
                .collect();
            grid.set_inner_html(&tiles);
        }
    }

    /// Clicking a grid tile drives the carousel, which then updates this panel
    /// through the normal selection path.
    pub fn wire_grid(&self, carousel: Rc<RefCell<Carousel>>) -> Option<Listener> {
        let grid = self.grid.as_ref()?;
        Listener::new(grid.as_ref(), "click", move |ev: web::MouseEvent| {
            let index = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(GRID_ITEM_SELECTOR).ok().flatten())
                .and_then(|tile| tile.get_attribute("data-index"))
                .and_then(|s| s.parse::<usize>().ok());
            if let Some(index) = index {
                log::debug!("[click] grid tile {}", index);
                carousel.borrow_mut().apply(NavIntent::Goto(index));
            }
        })
    }
}
