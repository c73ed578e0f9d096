use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, Event, HtmlImageElement, MouseEvent, Node, Window};

use magnifier_core::{HostFrame, Rect, Viewport};

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for HtmlImageElement {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

pub(crate) fn rect_of(element: &impl HasClientRect) -> Rect {
    let rect = element.client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub(crate) fn viewport_of(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

/// Geometry is sampled on every event so scrolling and layout changes are picked up.
pub(crate) fn sample_frame(window: &Window, target: &HtmlImageElement) -> HostFrame {
    HostFrame {
        target: rect_of(target),
        target_client_width: target.client_width() as f64,
        viewport: viewport_of(window),
    }
}

pub(crate) fn pointer_position(event: &Event) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some((event.client_x() as f64, event.client_y() as f64))
}

pub(crate) fn event_hits(event: &Event, element: &Element) -> bool {
    let Some(origin) = event.target() else {
        return false;
    };
    let Some(node) = origin.dyn_ref::<Node>() else {
        return false;
    };
    element.is_same_node(Some(node))
}
