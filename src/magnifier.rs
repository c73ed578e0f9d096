use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlImageElement, Window};

use magnifier_core::{
    render_update, ConfigError, MagnifierAction, MagnifierOptions, MagnifierSettings, MagnifierState,
    Update,
};

use crate::error::MagnifierError;
use crate::input::{event_hits, pointer_position, sample_frame};
use crate::lens::{apply_style, build_lens, remove_lens, set_style, LensElements};

#[derive(Clone, Debug)]
pub struct MagnifierConfig {
    pub target: Element,
    /// Existing container to use as the lens instead of a freshly created `div`.
    pub lens: Option<Element>,
    pub options: MagnifierOptions,
}

impl MagnifierConfig {
    pub fn new(target: Element) -> Self {
        Self {
            target,
            lens: None,
            options: MagnifierOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MagnifierOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_lens(mut self, lens: Element) -> Self {
        self.lens = Some(lens);
        self
    }
}

struct Shared {
    state: MagnifierState,
    target: HtmlImageElement,
    elements: LensElements,
    root: Option<HtmlElement>,
    window: Window,
}

impl Shared {
    fn dispatch(&mut self, action: MagnifierAction) -> Update {
        let frame = sample_frame(&self.window, &self.target);
        let update = self.state.apply(action, &frame);
        if update.offset_skipped {
            gloo::console::warn!("magnifier target has no size, zoom offset unchanged");
        }
        if update.visibility_changed {
            gloo::console::log!("magnifier visible", self.state.visible);
        }
        if !update.is_empty() {
            apply_style(
                &self.elements,
                self.root.as_ref(),
                &render_update(&self.state, &update),
            );
        }
        update
    }
}

pub struct Magnifier {
    shared: Rc<RefCell<Shared>>,
    listeners: Vec<EventListener>,
}

impl Magnifier {
    pub fn new(config: MagnifierConfig) -> Result<Self, MagnifierError> {
        let target = config
            .target
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| ConfigError::TargetNotImage)?;
        let supplied = match config.lens {
            Some(lens) => Some(
                lens.dyn_into::<HtmlElement>()
                    .map_err(|_| ConfigError::LensNotElement)?,
            ),
            None => None,
        };
        let settings = config.options.resolve();

        let window = web_sys::window().ok_or(MagnifierError::NoDocument)?;
        let document = window.document().ok_or(MagnifierError::NoDocument)?;
        let root = document
            .document_element()
            .and_then(|root| root.dyn_into::<HtmlElement>().ok());

        let state = MagnifierState::new(settings, target.client_width() as f64);
        let elements = build_lens(&document, &target, supplied, &state)?;
        gloo::console::log!(
            "magnifier mounted",
            settings.mode.as_str(),
            settings.scale,
            settings.lens_size
        );

        let shared = Rc::new(RefCell::new(Shared {
            state,
            target,
            elements,
            root,
            window: window.clone(),
        }));

        let toggle = {
            let shared = shared.clone();
            EventListener::new(&document, settings.trigger.event_type(), move |event: &Event| {
                let Some((x, y)) = pointer_position(event) else {
                    return;
                };
                let mut shared = shared.borrow_mut();
                let on_target = event_hits(event, shared.target.as_ref());
                shared.dispatch(MagnifierAction::Toggle { x, y, on_target });
            })
        };
        let pointer_move = {
            let shared = shared.clone();
            EventListener::new(&document, "mousemove", move |event: &Event| {
                let Some((x, y)) = pointer_position(event) else {
                    return;
                };
                shared
                    .borrow_mut()
                    .dispatch(MagnifierAction::PointerMove { x, y });
            })
        };
        let resize = {
            let shared = shared.clone();
            EventListener::new(&window, "resize", move |_event: &Event| {
                shared.borrow_mut().dispatch(MagnifierAction::Resize);
            })
        };

        Ok(Self {
            shared,
            listeners: vec![toggle, pointer_move, resize],
        })
    }

    pub fn is_visible(&self) -> bool {
        self.shared.borrow().state.visible
    }

    pub fn settings(&self) -> MagnifierSettings {
        self.shared.borrow().state.settings
    }

    pub fn lens_element(&self) -> HtmlElement {
        self.shared.borrow().elements.lens.clone()
    }

    /// Feeds an action through the same path the DOM listeners use.
    pub fn dispatch(&self, action: MagnifierAction) -> Update {
        self.shared.borrow_mut().dispatch(action)
    }

    /// Unregisters listeners and removes the lens (a supplied container is only hidden).
    pub fn detach(mut self) {
        self.listeners.clear();
        let shared = self.shared.borrow();
        remove_lens(&shared.elements);
        if let Some(root) = shared.root.as_ref() {
            if shared.state.settings.crosshair_cursor && shared.state.visible {
                set_style(root, "cursor", magnifier_core::CURSOR_IDLE);
            }
        }
    }
}
