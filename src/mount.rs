//! Mount lifecycle and the handle exported to JavaScript.
//!
//! Everything a mounted carousel owns (listeners, the frame loop, the
//! carousel state) lives in [`Mounted`]; dropping it tears the instance down.

use crate::constants::{CONFIG_ATTR_PREFIX, ITEMS_SCRIPT_ID};
use crate::core::{data, Carousel, CarouselConfig, ViewportPreset};
use crate::details::DetailsPanel;
use crate::dom::{self, Listener, SizeObserver};
use crate::events::{self, InputWiring};
use crate::frame::{FrameContext, FrameLoop};
use crate::render::DomRenderer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct Mounted {
    carousel: Rc<RefCell<Carousel>>,
    js_on_select: Rc<RefCell<Option<js_sys::Function>>>,
    frame_loop: FrameLoop,
    _listeners: Vec<Listener>,
    _size_observer: Option<SizeObserver>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.stop();
        match self.carousel.try_borrow_mut() {
            Ok(mut c) => c.unmount(),
            Err(_) => log::warn!("[mount] carousel busy during unmount"),
        }
    }
}

/// A mounted carousel. Dropping or calling `unmount()` removes every listener
/// and stops the frame loop.
#[wasm_bindgen]
pub struct CarouselHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl CarouselHandle {
    pub fn next(&self) -> bool {
        self.with(|c| c.go_to_next()).unwrap_or(false)
    }

    pub fn prev(&self) -> bool {
        self.with(|c| c.go_to_prev()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: u32) -> bool {
        self.with(|c| c.go_to_index(index as usize)).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = selectedIndex)]
    pub fn selected_index(&self) -> Option<u32> {
        self.with(|c| (!c.is_empty()).then(|| c.selected_index() as u32))
            .flatten()
    }

    #[wasm_bindgen(js_name = setAutoRotate)]
    pub fn set_auto_rotate(&self, enabled: bool) {
        self.with(|c| c.set_auto_rotate(enabled));
    }

    /// Register `callback(item, index)`, called once per accepted navigation.
    #[wasm_bindgen(js_name = onSelect)]
    pub fn on_select(&self, callback: Option<js_sys::Function>) {
        if let Some(m) = &self.inner {
            *m.js_on_select.borrow_mut() = callback;
        }
    }

    pub fn unmount(&mut self) {
        self.inner.take();
    }
}

impl CarouselHandle {
    fn with<R>(&self, f: impl FnOnce(&mut Carousel) -> R) -> Option<R> {
        let m = self.inner.as_ref()?;
        let mut c = m.carousel.try_borrow_mut().ok()?;
        Some(f(&mut c))
    }
}

/// Mount onto the element with `element_id`.
#[wasm_bindgen(js_name = mountCarousel)]
pub fn mount_carousel(element_id: &str) -> Result<CarouselHandle, JsValue> {
    mount_by_id(element_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

pub fn mount_by_id(element_id: &str) -> anyhow::Result<CarouselHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::element_by_id(&document, element_id)?;

    let items = data::items_or_default(dom::text_of(&document, ITEMS_SCRIPT_ID).as_deref());
    let (config, errors) = CarouselConfig::from_attributes(items, |key| {
        container.get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key))
    });
    for e in errors {
        log::warn!("[mount] {}; keeping default", e);
    }

    // Pinned attributes are left alone by the preset.
    let mut carousel = Carousel::new(config);
    carousel.apply_preset(ViewportPreset::for_width(dom::viewport_width()));
    let selections: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let queue = selections.clone();
    carousel.set_on_select(move |item, index| {
        log::info!("[carousel] selected {} ({})", item.title_or_empty(), index);
        queue.borrow_mut().push(index);
    });
    carousel.mount();

    // Measure only once the container holds the built carousel and its axis class.
    let renderer = DomRenderer::build(&document, container.clone(), &carousel)?;
    let rect = dom::client_rect(&container);
    carousel.resize(rect.width, rect.height);
    let details = DetailsPanel::find(&document);
    details.sync(&carousel);

    let carousel = Rc::new(RefCell::new(carousel));
    let wiring = InputWiring {
        container: container.clone(),
        spinner: renderer.spinner.clone(),
        prev_button: renderer.prev_button.clone(),
        next_button: renderer.next_button.clone(),
        carousel: carousel.clone(),
        renderer: Rc::new(RefCell::new(renderer)),
        suppress_click: Rc::new(Cell::new(false)),
    };

    let mut listeners = events::wire_input_handlers(&wiring);
    listeners.extend(events::wire_keyboard(&wiring));
    listeners.extend(details.wire_grid(carousel.clone()));
    listeners.extend(wire_viewport(container.clone(), carousel.clone()));
    let size_observer = observe_container(container, carousel.clone());

    let js_on_select = Rc::new(RefCell::new(None));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        carousel: carousel.clone(),
        renderer: wiring.renderer.clone(),
        details,
        selections,
        js_on_select: js_on_select.clone(),
        last_instant: Instant::now(),
    }));
    let frame_loop = FrameLoop::start(frame_ctx);

    Ok(CarouselHandle {
        inner: Some(Mounted {
            carousel,
            js_on_select,
            frame_loop,
            _listeners: listeners,
            _size_observer: size_observer,
        }),
    })
}

/// Window resizes re-evaluate the viewport preset. The axis class is applied
/// right away so the container's next observed size already reflects it.
fn wire_viewport(container: web::Element, carousel: Rc<RefCell<Carousel>>) -> Option<Listener> {
    let window = web::window()?;
    Listener::new(window.as_ref(), "resize", move |_ev: web::Event| {
        let mut c = carousel.borrow_mut();
        c.apply_preset(ViewportPreset::for_width(dom::viewport_width()));
        container.set_class_name(&c.container_class());
    })
}

/// Container size changes, with or without a window resize, feed the radius.
fn observe_container(
    container: web::Element,
    carousel: Rc<RefCell<Carousel>>,
) -> Option<SizeObserver> {
    let target = container.clone();
    SizeObserver::new(&target, move || {
        let rect = dom::client_rect(&container);
        match carousel.try_borrow_mut() {
            Ok(mut c) => c.resize(rect.width, rect.height),
            Err(_) => log::debug!("[resize] carousel busy; size dropped"),
        }
    })
}
