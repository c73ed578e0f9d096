use crate::config::{MagnifierSettings, RenderMode};
use crate::geometry::ZoomOffset;
use crate::state::{MagnifierState, Update};

pub const CURSOR_ACTIVE: &str = "crosshair";
pub const CURSOR_IDLE: &str = "unset";

pub type StyleProps = Vec<(&'static str, String)>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LensStyle {
    pub lens: StyleProps,
    /// Only populated for [`RenderMode::Transform`].
    pub inner: StyleProps,
    pub root_cursor: Option<&'static str>,
}

impl LensStyle {
    pub fn lens_value(&self, name: &str) -> Option<&str> {
        lookup(&self.lens, name)
    }

    pub fn inner_value(&self, name: &str) -> Option<&str> {
        lookup(&self.inner, name)
    }
}

fn lookup<'a>(props: &'a StyleProps, name: &str) -> Option<&'a str> {
    props
        .iter()
        .rev()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
}

pub fn px(value: f64) -> String {
    // -0.0 would print as "-0px".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

pub fn background_size_value(width: f64) -> String {
    format!("{} auto", px(width))
}

pub fn css_url(src: &str) -> String {
    let escaped = src.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{escaped}\")")
}

pub fn transform_value(x_pct: f64, y_pct: f64, half_lens: f64) -> String {
    format!(
        "translate(calc({}% + {}), calc({}% + {}))",
        signed(-x_pct),
        px(half_lens),
        signed(-y_pct),
        px(half_lens)
    )
}

fn signed(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Styles written once when the lens is created.
pub fn lens_base_style(settings: &MagnifierSettings, src: &str, background_width: f64) -> StyleProps {
    let mut props: StyleProps = vec![
        ("position", "fixed".to_string()),
        ("display", "none".to_string()),
        ("width", px(settings.lens_size)),
        ("height", px(settings.lens_size)),
        ("border-radius", "50%".to_string()),
        ("overflow", "hidden".to_string()),
        ("pointer-events", "none".to_string()),
        ("z-index", "1000".to_string()),
    ];
    if settings.mode == RenderMode::Background {
        props.push(("background-image", css_url(src)));
        props.push(("background-repeat", "no-repeat".to_string()));
        props.push(("background-size", background_size_value(background_width)));
    }
    props
}

pub fn inner_base_style(background_width: f64) -> StyleProps {
    vec![
        ("display", "block".to_string()),
        ("width", px(background_width)),
        ("height", "auto".to_string()),
        ("max-width", "none".to_string()),
    ]
}

pub fn render(state: &MagnifierState) -> LensStyle {
    let settings = &state.settings;
    let mut style = LensStyle::default();
    match settings.mode {
        RenderMode::Background => {
            style
                .lens
                .push(("background-size", background_size_value(state.background_width)));
        }
        RenderMode::Transform => {
            style.inner.push(("width", px(state.background_width)));
        }
    }
    if settings.crosshair_cursor {
        style.root_cursor = Some(if state.visible {
            CURSOR_ACTIVE
        } else {
            CURSOR_IDLE
        });
    }
    if !state.visible {
        style.lens.push(("display", "none".to_string()));
        return style;
    }
    style.lens.push(("display", "block".to_string()));
    style.lens.push(("left", px(state.placement.left)));
    style.lens.push(("top", px(state.placement.top)));
    match state.offset {
        Some(ZoomOffset::Pixels { x, y }) => {
            style.lens.push(("background-position-x", px(x)));
            style.lens.push(("background-position-y", px(y)));
        }
        Some(ZoomOffset::Percent {
            x_pct,
            y_pct,
            half_lens,
        }) => {
            style
                .inner
                .push(("transform", transform_value(x_pct, y_pct, half_lens)));
        }
        None => {}
    }
    style
}

/// Like [`render`], but leaves the page cursor alone unless visibility flipped.
pub fn render_update(state: &MagnifierState, update: &Update) -> LensStyle {
    let mut style = render(state);
    if !update.visibility_changed {
        style.root_cursor = None;
    }
    style
}
