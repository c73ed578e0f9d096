pub mod action;
pub mod config;
pub mod geometry;
pub mod state;
pub mod style;

pub use action::MagnifierAction;
pub use config::{
    parse_flag, parse_number, resolve_lens_size, resolve_scale, ConfigError, MagnifierOptions,
    MagnifierSettings, RenderMode, ToggleTrigger, DEFAULT_LENS_SIZE, DEFAULT_SCALE,
};
pub use geometry::{
    background_offset, background_width, is_in_target, lens_placement, transform_offset,
    LensPlacement, Rect, Viewport, ZoomOffset,
};
pub use state::{HostFrame, MagnifierState, Update};
pub use style::{render, render_update, LensStyle, StyleProps, CURSOR_ACTIVE, CURSOR_IDLE};
