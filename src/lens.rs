use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use magnifier_core::style::{inner_base_style, lens_base_style};
use magnifier_core::{LensStyle, MagnifierState, RenderMode, StyleProps};

use crate::error::MagnifierError;

pub const LENS_CLASS: &str = "magnifier-lens";

pub(crate) struct LensElements {
    pub(crate) lens: HtmlElement,
    /// Enlarged copy of the target, present in transform mode.
    pub(crate) inner: Option<HtmlElement>,
    pub(crate) created: bool,
}

pub(crate) fn build_lens(
    document: &Document,
    target: &HtmlImageElement,
    supplied: Option<HtmlElement>,
    state: &MagnifierState,
) -> Result<LensElements, MagnifierError> {
    let settings = &state.settings;
    let src = target.src();
    let created = supplied.is_none();
    let lens = match supplied {
        Some(lens) => lens,
        None => {
            let lens = document
                .create_element("div")?
                .dyn_into::<HtmlElement>()
                .map_err(|_| MagnifierError::Dom("created lens is not an HTMLElement".to_string()))?;
            lens.set_class_name(LENS_CLASS);
            lens
        }
    };
    apply_props(&lens, &lens_base_style(settings, &src, state.background_width));

    let inner = if settings.mode == RenderMode::Transform {
        let img = document
            .create_element("img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| MagnifierError::Dom("created zoom image is not an img".to_string()))?;
        img.set_src(&src);
        img.set_alt("");
        let img: HtmlElement = img.into();
        apply_props(&img, &inner_base_style(state.background_width));
        lens.append_child(&img)?;
        Some(img)
    } else {
        None
    };

    if lens.parent_node().is_none() {
        let body = document.body().ok_or(MagnifierError::NoDocument)?;
        body.append_child(&lens)?;
    }
    Ok(LensElements {
        lens,
        inner,
        created,
    })
}

pub(crate) fn set_style(element: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = element.style().set_property(name, value) {
        gloo::console::warn!("magnifier style write failed", name.to_string(), err);
    }
}

pub(crate) fn apply_props(element: &HtmlElement, props: &StyleProps) {
    for (name, value) in props {
        set_style(element, name, value);
    }
}

pub(crate) fn apply_style(elements: &LensElements, root: Option<&HtmlElement>, style: &LensStyle) {
    apply_props(&elements.lens, &style.lens);
    if let Some(inner) = elements.inner.as_ref() {
        apply_props(inner, &style.inner);
    }
    if let (Some(root), Some(cursor)) = (root, style.root_cursor) {
        set_style(root, "cursor", cursor);
    }
}

pub(crate) fn remove_lens(elements: &LensElements) {
    if let Some(inner) = elements.inner.as_ref() {
        inner.remove();
    }
    if elements.created {
        elements.lens.remove();
    } else {
        set_style(&elements.lens, "display", "none");
    }
}
