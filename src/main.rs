use std::cell::RefCell;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use magnifier::app_router::{self, BootConfig};
use magnifier::{Magnifier, MagnifierConfig, MagnifierError};

thread_local! {
    static MOUNTED: RefCell<Option<Magnifier>> = RefCell::new(None);
    static PENDING_LOAD: RefCell<Option<EventListener>> = RefCell::new(None);
}

fn find_target(config: &BootConfig) -> Result<Element, MagnifierError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MagnifierError::NoDocument)?;
    document
        .query_selector(&config.target_selector)?
        .ok_or_else(|| MagnifierError::TargetNotFound {
            selector: config.target_selector.clone(),
        })
}

fn mount(target: Element, config: &BootConfig) {
    let options = app_router::options_from_attribute(&target).merge(config.options.clone());
    match Magnifier::new(MagnifierConfig::new(target).with_options(options)) {
        Ok(magnifier) => {
            MOUNTED.with(|slot| {
                *slot.borrow_mut() = Some(magnifier);
            });
        }
        Err(err) => {
            gloo::console::error!("magnifier failed to start", err.to_string());
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = app_router::load_boot_config();
    let target = match find_target(&config) {
        Ok(target) => target,
        Err(err) => {
            gloo::console::error!("magnifier failed to start", err.to_string());
            return;
        }
    };
    // Background sizing reads the rendered width, which is zero until the image decodes.
    let pending = target
        .dyn_ref::<HtmlImageElement>()
        .map(|img| !img.complete())
        .unwrap_or(false);
    if !pending {
        mount(target, &config);
        return;
    }
    let listener_target = target.clone();
    let listener = EventListener::once(&listener_target, "load", move |_event| {
        mount(target, &config);
    });
    PENDING_LOAD.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
}
