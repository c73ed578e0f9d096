use web_sys::{Element, UrlSearchParams};

use magnifier_core::{parse_flag, parse_number, MagnifierOptions, RenderMode, ToggleTrigger};

pub const DEFAULT_TARGET_SELECTOR: &str = "#target";
pub const OPTIONS_ATTRIBUTE: &str = "data-magnifier";

#[derive(Clone, Debug, PartialEq)]
pub struct BootConfig {
    pub target_selector: String,
    pub options: MagnifierOptions,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            target_selector: DEFAULT_TARGET_SELECTOR.to_string(),
            options: MagnifierOptions::default(),
        }
    }
}

pub fn load_boot_config() -> BootConfig {
    let Some(window) = web_sys::window() else {
        return BootConfig::default();
    };
    let search = window.location().search().unwrap_or_default();
    parse_boot_config_from_query(&search)
}

pub fn parse_boot_config_from_query(search: &str) -> BootConfig {
    let search = search.trim();
    if search.is_empty() {
        return BootConfig::default();
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return BootConfig::default();
    };
    let target_selector = params
        .get("target")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_TARGET_SELECTOR.to_string());
    let options = MagnifierOptions {
        scale: params.get("scale").as_deref().and_then(parse_number),
        lens_size: params
            .get("size")
            .or_else(|| params.get("magnifierSize"))
            .as_deref()
            .and_then(parse_number),
        mode: params.get("mode").as_deref().and_then(RenderMode::parse),
        trigger: params.get("trigger").as_deref().and_then(ToggleTrigger::parse),
        crosshair_cursor: params.get("cursor").as_deref().and_then(parse_flag),
    };
    BootConfig {
        target_selector,
        options,
    }
}

pub fn options_from_attribute(element: &Element) -> MagnifierOptions {
    let Some(raw) = element.get_attribute(OPTIONS_ATTRIBUTE) else {
        return MagnifierOptions::default();
    };
    match MagnifierOptions::from_json(&raw) {
        Ok(options) => options,
        Err(err) => {
            gloo::console::warn!("ignoring magnifier attribute", err.to_string());
            MagnifierOptions::default()
        }
    }
}
