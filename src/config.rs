//! Presentation constants for the counter window.

use iced::{Color, Size};

pub const TITLE: &str = "Counter";

pub const WINDOW_SIZE: Size = Size {
    width: 420.0,
    height: 260.0,
};

pub const SPACING: f32 = 20.0;
pub const PADDING: f32 = 5.0;
pub const HEADING_SIZE: f32 = 32.0;

/// Style hint for the error line.
pub const ALERT_COLOR: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
