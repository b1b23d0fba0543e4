//! Bitmap font store
//!
//! Fonts use the common "GFX" layout: one shared bitmap blob and one
//! metadata record per character. Each glyph's bitmap is packed one bit
//! per pixel, most significant bit first, rows running on without
//! padding, and starts on a byte boundary.

mod pixel12x16;

pub use pixel12x16::PIXEL_12X16;

/// Errors from glyph lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// The character is outside the font's range
    UnsupportedCharacter(char),
}

/// Placement and bitmap location of one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Index of the first bitmap byte
    pub bitmap_offset: u16,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Horizontal pen advance
    pub x_advance: u8,
    /// Left edge of the bitmap relative to the pen
    pub x_offset: i8,
    /// Top edge of the bitmap relative to the baseline
    pub y_offset: i8,
}

impl Glyph {
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }
}

/// Read-only bitmap font
#[derive(Debug)]
pub struct Font {
    /// Packed glyph bitmaps
    pub bitmap: &'static [u8],
    /// One record per character from `first` to `last`
    pub glyphs: &'static [Glyph],
    /// First character code covered
    pub first: u8,
    /// Last character code covered
    pub last: u8,
    /// Highest point of any glyph, relative to the baseline (negative)
    pub y_top: i8,
    /// Lowest point of any glyph, relative to the baseline
    pub y_bottom: i8,
    /// Character drawn in place of unsupported ones
    pub fallback: char,
}

impl Font {
    /// Line height: ascent plus descent
    pub const fn height(&self) -> u16 {
        (self.y_bottom as i16 - self.y_top as i16) as u16
    }

    /// Metadata for `c`
    pub fn glyph(&self, c: char) -> Result<&Glyph, FontError> {
        let code = c as u32;
        if code < self.first as u32 || code > self.last as u32 {
            return Err(FontError::UnsupportedCharacter(c));
        }
        self.glyphs
            .get((code - self.first as u32) as usize)
            .ok_or(FontError::UnsupportedCharacter(c))
    }

    /// Pixel of `glyph`'s bitmap at column `x`, row `y`
    ///
    /// Coordinates outside the bitmap read as unset.
    pub fn pixel(&self, glyph: &Glyph, x: i16, y: i16) -> bool {
        if x < 0 || y < 0 || x >= glyph.width as i16 || y >= glyph.height as i16 {
            return false;
        }
        let bit = y as usize * glyph.width as usize + x as usize;
        self.bitmap
            .get(glyph.bitmap_offset as usize + bit / 8)
            .map(|byte| byte & (0x80 >> (bit % 8)) != 0)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_height() {
        assert_eq!(PIXEL_12X16.height(), 16);
    }

    #[test]
    fn test_glyph_range() {
        let font = &PIXEL_12X16;
        assert!(font.glyph(' ').is_ok());
        assert!(font.glyph('~').is_ok());
        assert_eq!(font.glyph('\n'), Err(FontError::UnsupportedCharacter('\n')));
        assert_eq!(font.glyph('é'), Err(FontError::UnsupportedCharacter('é')));
        assert_eq!(font.glyphs.len(), (font.last - font.first + 1) as usize);
    }

    #[test]
    fn test_fallback_is_supported() {
        assert!(PIXEL_12X16.glyph(PIXEL_12X16.fallback).is_ok());
    }

    #[test]
    fn test_glyphs_fit_in_line_cell() {
        let font = &PIXEL_12X16;
        for glyph in font.glyphs {
            assert!(glyph.x_offset >= 0);
            assert!(glyph.x_offset as u16 + glyph.width as u16 <= glyph.x_advance as u16);
            if glyph.height > 0 {
                assert!(glyph.y_offset >= font.y_top);
                assert!(glyph.y_offset as i16 + glyph.height as i16 <= font.y_bottom as i16);
            }
            let bits = glyph.width as usize * glyph.height as usize;
            assert!(glyph.bitmap_offset as usize + (bits + 7) / 8 <= font.bitmap.len());
        }
    }

    #[test]
    fn test_pixel_lookup() {
        let font = &PIXEL_12X16;
        // '-' is a solid two-row bar
        let dash = font.glyph('-').unwrap();
        assert_eq!(dash.height, 2);
        for y in 0..dash.height as i16 {
            for x in 0..dash.width as i16 {
                assert!(font.pixel(dash, x, y));
            }
        }
        assert!(!font.pixel(dash, -1, 0));
        assert!(!font.pixel(dash, 0, dash.height as i16));
    }
}
