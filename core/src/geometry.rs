#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LensPlacement {
    pub left: f64,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomOffset {
    /// `background-position` in pixels.
    Pixels { x: f64, y: f64 },
    /// Percentage of the target plus half the lens, fed into `translate(calc(..))`.
    Percent {
        x_pct: f64,
        y_pct: f64,
        half_lens: f64,
    },
}

/// Edges count as inside.
pub fn is_in_target(x: f64, y: f64, rect: &Rect) -> bool {
    if x < rect.left || y < rect.top || x > rect.right() || y > rect.bottom() {
        return false;
    }
    true
}

/// Keeps the lens from spilling past the right and bottom edges of the viewport.
/// Left and top are not clamped at zero.
pub fn lens_placement(x: f64, y: f64, lens_size: f64, viewport: Viewport) -> LensPlacement {
    LensPlacement {
        left: x.min(viewport.width - lens_size),
        top: y.min(viewport.height - lens_size),
    }
}

pub fn background_offset(x: f64, y: f64, target: &Rect, scale: f64, lens_size: f64) -> ZoomOffset {
    let half = lens_size / 2.0;
    ZoomOffset::Pixels {
        x: -(x - target.left) * scale + half,
        y: -(y - target.top) * scale + half,
    }
}

pub fn transform_offset(x: f64, y: f64, target: &Rect, lens_size: f64) -> Option<ZoomOffset> {
    if target.is_empty() {
        return None;
    }
    Some(ZoomOffset::Percent {
        x_pct: (x - target.left) / target.width * 100.0,
        y_pct: (y - target.top) / target.height * 100.0,
        half_lens: lens_size / 2.0,
    })
}

pub fn background_width(client_width: f64, scale: f64) -> f64 {
    client_width.max(0.0) * scale
}
