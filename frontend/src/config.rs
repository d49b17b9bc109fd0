// Backing size of the wheel and confetti canvases, in pixels
pub const CANVAS_SIZE: u32 = 400;

pub const APP_TITLE: &str = "Wheel Wizard";
