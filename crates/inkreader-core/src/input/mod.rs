//! Touch input abstraction.

pub mod mock;

use embedded_graphics_core::geometry::Point;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Raw touch report in panel coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

impl TouchPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn as_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Logical button a touch resolved to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TouchRegion {
    Select,
    Prev,
    Next,
    Home,
    Goto,
    /// Keypad digit, always `0..=9`.
    Digit(u8),
    Clear,
    Confirm,
    Back,
}

impl TouchRegion {
    pub fn label(self) -> &'static str {
        match self {
            Self::Select => "Open",
            Self::Prev => "<",
            Self::Next => ">",
            Self::Home => "Home",
            Self::Goto => "Go to",
            Self::Digit(d) => DIGIT_LABELS.get(d as usize).copied().unwrap_or("?"),
            Self::Clear => "CLR",
            Self::Confirm => "OK",
            Self::Back => "Back",
        }
    }
}

/// Polled touch controller.
pub trait TouchProvider {
    type Error;

    /// Returns the pending touch, if any. Called once per loop iteration.
    fn poll_touch(&mut self) -> Result<Option<TouchPoint>, Self::Error>;
}
