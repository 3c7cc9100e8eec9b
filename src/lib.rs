pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod details;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use mount::{mount_carousel, CarouselHandle};

#[cfg(target_arch = "wasm32")]
mod web_start {
    use crate::constants::CAROUSEL_ID;
    use crate::dom;
    use crate::mount::{self, CarouselHandle};
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    thread_local! {
        // The page-level carousel mounted at startup lives for the page.
        static PAGE_CAROUSEL: RefCell<Option<CarouselHandle>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("portfolio-carousel starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        if document.get_element_by_id(CAROUSEL_ID).is_none() {
            log::info!("[mount] no #{} on this page; waiting for mountCarousel()", CAROUSEL_ID);
            return Ok(());
        }
        let handle = mount::mount_by_id(CAROUSEL_ID)?;
        PAGE_CAROUSEL.with(|slot| *slot.borrow_mut() = Some(handle));
        log::info!("[mount] #{} ready", CAROUSEL_ID);
        Ok(())
    }
}
