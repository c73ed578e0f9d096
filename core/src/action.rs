#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MagnifierAction {
    /// Primary toggle event. `on_target` is true when the event originated on the magnified image.
    Toggle { x: f64, y: f64, on_target: bool },
    PointerMove { x: f64, y: f64 },
    Resize,
}
