pub mod app_router;
mod error;
mod input;
mod lens;
mod magnifier;

pub use error::MagnifierError;
pub use lens::LENS_CLASS;
pub use magnifier::{Magnifier, MagnifierConfig};
pub use magnifier_core::{
    ConfigError, MagnifierAction, MagnifierOptions, MagnifierSettings, RenderMode, ToggleTrigger,
    Update,
};
