use std::fmt;

use serde::{Deserialize, Deserializer};

pub const DEFAULT_SCALE: f64 = 2.0;
pub const DEFAULT_LENS_SIZE: f64 = 300.0;
pub const MIN_SCALE_EXCLUSIVE: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Zoom by moving an enlarged `background-image` under the lens.
    #[default]
    Background,
    /// Zoom by translating an enlarged inner `img` with CSS `calc()` percentages.
    Transform,
}

impl RenderMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "background" | "bg" => Some(RenderMode::Background),
            "transform" => Some(RenderMode::Transform),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Background => "background",
            RenderMode::Transform => "transform",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleTrigger {
    #[default]
    Click,
    #[serde(alias = "doubleclick")]
    DblClick,
}

impl ToggleTrigger {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "click" => Some(ToggleTrigger::Click),
            "dblclick" | "doubleclick" => Some(ToggleTrigger::DblClick),
            _ => None,
        }
    }

    /// DOM event type the toggle listener subscribes to.
    pub fn event_type(self) -> &'static str {
        match self {
            ToggleTrigger::Click => "click",
            ToggleTrigger::DblClick => "dblclick",
        }
    }
}

/// Raw, unvalidated options as they arrive from callers, data attributes or the URL.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MagnifierOptions {
    #[serde(deserialize_with = "lenient_number")]
    pub scale: Option<f64>,
    #[serde(alias = "magnifierSize", alias = "size", deserialize_with = "lenient_number")]
    pub lens_size: Option<f64>,
    #[serde(deserialize_with = "lenient_mode")]
    pub mode: Option<RenderMode>,
    #[serde(deserialize_with = "lenient_trigger")]
    pub trigger: Option<ToggleTrigger>,
    #[serde(alias = "crosshairCursor", deserialize_with = "lenient_flag")]
    pub crosshair_cursor: Option<bool>,
}

impl MagnifierOptions {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::InvalidOptions(err.to_string()))
    }

    /// Fields set on `other` win.
    pub fn merge(self, other: MagnifierOptions) -> MagnifierOptions {
        MagnifierOptions {
            scale: other.scale.or(self.scale),
            lens_size: other.lens_size.or(self.lens_size),
            mode: other.mode.or(self.mode),
            trigger: other.trigger.or(self.trigger),
            crosshair_cursor: other.crosshair_cursor.or(self.crosshair_cursor),
        }
    }

    pub fn resolve(&self) -> MagnifierSettings {
        MagnifierSettings {
            scale: resolve_scale(self.scale),
            lens_size: resolve_lens_size(self.lens_size),
            mode: self.mode.unwrap_or_default(),
            trigger: self.trigger.unwrap_or_default(),
            crosshair_cursor: self.crosshair_cursor.unwrap_or(true),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnifierSettings {
    pub scale: f64,
    pub lens_size: f64,
    pub mode: RenderMode,
    pub trigger: ToggleTrigger,
    pub crosshair_cursor: bool,
}

impl Default for MagnifierSettings {
    fn default() -> Self {
        MagnifierOptions::default().resolve()
    }
}

// Wrongly typed numbers fall back to defaults instead of failing the whole record.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(raw) => parse_number(&raw),
        other => other.as_f64(),
    })
}

fn lenient_mode<'de, D>(deserializer: D) -> Result<Option<RenderMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(RenderMode::parse))
}

fn lenient_trigger<'de, D>(deserializer: D) -> Result<Option<ToggleTrigger>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(ToggleTrigger::parse))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(flag) => Some(flag),
        serde_json::Value::String(raw) => parse_flag(&raw),
        serde_json::Value::Number(number) => number.as_f64().map(|n| n != 0.0),
        _ => None,
    })
}

pub fn resolve_scale(value: Option<f64>) -> f64 {
    match value {
        Some(scale) if scale.is_finite() && scale > MIN_SCALE_EXCLUSIVE => scale,
        _ => DEFAULT_SCALE,
    }
}

pub fn resolve_lens_size(value: Option<f64>) -> f64 {
    match value {
        Some(size) if size.is_finite() && size > 0.0 => size,
        _ => DEFAULT_LENS_SIZE,
    }
}

pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim().trim_end_matches("px").trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    TargetNotImage,
    LensNotElement,
    InvalidOptions(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TargetNotImage => write!(f, "target element is not an HTMLImageElement"),
            ConfigError::LensNotElement => write!(f, "magnifier element is not an HTMLElement"),
            ConfigError::InvalidOptions(reason) => write!(f, "invalid magnifier options: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}
