use crate::action::MagnifierAction;
use crate::config::{MagnifierSettings, RenderMode};
use crate::geometry::{
    background_offset, background_width, is_in_target, lens_placement, transform_offset,
    LensPlacement, Rect, Viewport, ZoomOffset,
};

/// Live geometry sampled from the host when an event arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostFrame {
    pub target: Rect,
    pub target_client_width: f64,
    pub viewport: Viewport,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Update {
    pub visibility_changed: bool,
    pub repositioned: bool,
    pub resized: bool,
    /// Target had no area, so the percentage offset was left as is.
    pub offset_skipped: bool,
}

impl Update {
    pub fn is_empty(&self) -> bool {
        !(self.visibility_changed || self.repositioned || self.resized)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MagnifierState {
    pub settings: MagnifierSettings,
    pub visible: bool,
    pub placement: LensPlacement,
    pub offset: Option<ZoomOffset>,
    pub background_width: f64,
}

impl MagnifierState {
    pub fn new(settings: MagnifierSettings, target_client_width: f64) -> Self {
        Self {
            settings,
            visible: false,
            placement: LensPlacement::default(),
            offset: None,
            background_width: background_width(target_client_width, settings.scale),
        }
    }

    pub fn apply(&mut self, action: MagnifierAction, frame: &HostFrame) -> Update {
        let mut update = Update::default();
        match action {
            MagnifierAction::Toggle { x, y, on_target } => {
                let next = on_target && !self.visible;
                update.visibility_changed = self.set_visible(next);
                if self.visible {
                    self.reposition(x, y, frame, &mut update);
                }
            }
            MagnifierAction::PointerMove { x, y } => {
                if !self.visible {
                    return update;
                }
                if is_in_target(x, y, &frame.target) {
                    self.reposition(x, y, frame, &mut update);
                } else {
                    update.visibility_changed = self.set_visible(false);
                }
            }
            MagnifierAction::Resize => {
                let width = background_width(frame.target_client_width, self.settings.scale);
                update.resized = width != self.background_width;
                self.background_width = width;
            }
        }
        update
    }

    fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    fn reposition(&mut self, x: f64, y: f64, frame: &HostFrame, update: &mut Update) {
        let size = self.settings.lens_size;
        self.placement = lens_placement(x, y, size, frame.viewport);
        let offset = match self.settings.mode {
            RenderMode::Background => {
                Some(background_offset(x, y, &frame.target, self.settings.scale, size))
            }
            RenderMode::Transform => transform_offset(x, y, &frame.target, size),
        };
        match offset {
            Some(offset) => self.offset = Some(offset),
            None => update.offset_skipped = true,
        }
        update.repositioned = true;
    }
}
