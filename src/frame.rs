use crate::constants::MAX_FRAME_DT_MS;
use crate::core::{Carousel, CarouselEvent};
use crate::details::DetailsPanel;
use crate::render::DomRenderer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct FrameContext {
    pub carousel: Rc<RefCell<Carousel>>,
    pub renderer: Rc<RefCell<DomRenderer>>,
    pub details: DetailsPanel,
    /// Indices queued by the selection callback, forwarded to JS after the
    /// carousel borrow is released.
    pub selections: Rc<RefCell<Vec<usize>>>,
    pub js_on_select: Rc<RefCell<Option<js_sys::Function>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let events = {
            let mut c = self.carousel.borrow_mut();
            c.tick(dt);
            c.drain_events()
        };
        if events.is_empty() {
            return;
        }

        {
            let c = self.carousel.borrow();
            self.renderer.borrow_mut().update(&c);
            let selection_moved = events.iter().any(|e| {
                matches!(
                    e,
                    CarouselEvent::SelectionChanged { .. } | CarouselEvent::LayoutChanged
                )
            });
            if selection_moved {
                self.details.sync(&c);
            }
        }
        self.notify_js();
    }

    fn notify_js(&self) {
        let pending: Vec<usize> = self.selections.borrow_mut().drain(..).collect();
        if pending.is_empty() {
            return;
        }
        let Some(callback) = self.js_on_select.borrow().clone() else {
            return;
        };
        for index in pending {
            let item = self
                .carousel
                .borrow()
                .items()
                .get(index)
                .and_then(|item| serde_json::to_string(item).ok())
                .and_then(|json| js_sys::JSON::parse(&json).ok())
                .unwrap_or(JsValue::NULL);
            if let Err(e) = callback.call2(&JsValue::NULL, &item, &JsValue::from(index as u32)) {
                log::error!("[carousel] onSelect callback threw: {:?}", e);
            }
        }
    }
}

/// requestAnimationFrame loop driving the carousel clock. `stop` cancels the
/// pending frame before releasing the closure, so nothing runs after unmount.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

fn request_frame(slot: &Weak<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<Option<i32>>) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = slot.borrow().as_ref() {
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame: {:?}", e),
        }
    }
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let slot = Rc::downgrade(&tick);
        let raf_id_tick = raf_id.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            request_frame(&slot, &raf_id_tick);
        }) as Box<dyn FnMut()>));

        request_frame(&Rc::downgrade(&tick), &raf_id);
        Self {
            tick,
            raf_id,
            running,
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // The loop may be stopped from inside its own frame (a JS callback
        // unmounting), so the closure is released on a later microtask.
        if let Some(closure) = self.tick.borrow_mut().take() {
            wasm_bindgen_futures::spawn_local(async move {
                drop(closure);
            });
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
