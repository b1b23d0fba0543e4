//! Drawing primitives and the pull protocol
//!
//! The driver never decides what to draw. Each time it is idle it asks a
//! [`PrimitiveSource`] for the next rectangle and, only if there is none,
//! for the next text run. A source hands over a fresh primitive per poll
//! and is not polled again until that primitive has been fully drawn.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

/// Longest text run a single primitive can carry, in bytes. A full
/// landscape line of the built-in font is 40 cells.
pub const TEXT_CAPACITY: usize = 64;

/// Filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rectangle {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub color: Rgb565,
}

impl Rectangle {
    pub const fn new(x: u16, y: u16, width: u16, height: u16, color: Rgb565) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// True if the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Text run drawn on a single line
///
/// `y` is the top of the line cell, not the baseline. The characters are
/// copied into the primitive so the source is free to reuse its own
/// buffers while the run is being drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub x: u16,
    pub y: u16,
    pub chars: String<TEXT_CAPACITY>,
    pub foreground: Rgb565,
    pub background: Rgb565,
    /// Characters were dropped because the run exceeded [`TEXT_CAPACITY`].
    /// The driver reports this as a fault when it takes the run.
    pub truncated: bool,
}

impl Text {
    /// Create a text run, keeping as many whole characters of `text` as
    /// fit in [`TEXT_CAPACITY`] bytes
    pub fn new(x: u16, y: u16, text: &str, foreground: Rgb565, background: Rgb565) -> Self {
        let mut chars = String::new();
        let mut truncated = false;
        for c in text.chars() {
            if chars.push(c).is_err() {
                truncated = true;
                break;
            }
        }
        Self {
            x,
            y,
            chars,
            foreground,
            background,
            truncated,
        }
    }

    /// Number of characters in the run
    pub fn len(&self) -> usize {
        self.chars.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Supplier of primitives for the display driver
///
/// Both methods default to "nothing to draw".
pub trait PrimitiveSource {
    /// Next rectangle to draw, if any
    fn next_rectangle(&mut self) -> Option<Rectangle> {
        None
    }

    /// Next text run to draw, if any. Only polled when
    /// [`PrimitiveSource::next_rectangle`] yielded nothing.
    fn next_text(&mut self) -> Option<Text> {
        None
    }
}

/// A source that never has anything to draw
impl PrimitiveSource for () {}
