//! 12x16 pixel font
//!
//! A 5x7 ASCII cell font scaled by two and stored as tight glyph boxes.

use super::{Font, Glyph};

#[rustfmt::skip]
static BITMAP: [u8; 1318] = [
    0xFF, 0xFF, 0xF0, 0xF0, 0xCF, 0x3C, 0xF3, 0xCF, 0x30, 0x33, 0x0C, 0xC3,
    0x30, 0xCC, 0xFF, 0xFF, 0xF3, 0x30, 0xCC, 0xFF, 0xFF, 0xF3, 0x30, 0xCC,
    0x33, 0x0C, 0xC0, 0x0C, 0x03, 0x03, 0xFC, 0xFF, 0xCC, 0x33, 0x03, 0xF0,
    0xFC, 0x0C, 0xC3, 0x3F, 0xF3, 0xFC, 0x0C, 0x03, 0x00, 0xF0, 0x3C, 0x0F,
    0x0F, 0xC3, 0x03, 0x00, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x3F, 0x0F,
    0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x0C, 0x33, 0x0C, 0xCC, 0x33, 0x03, 0x00,
    0xC0, 0xCC, 0xF3, 0x3C, 0x33, 0x0C, 0x3C, 0xCF, 0x30, 0xFF, 0x33, 0xCC,
    0x0C, 0x33, 0x0C, 0xC3, 0x0C, 0x30, 0xC3, 0x03, 0x0C, 0x0C, 0x30, 0xC3,
    0x03, 0x0C, 0x0C, 0x30, 0xC3, 0x0C, 0x33, 0x0C, 0xC3, 0x00, 0x0C, 0x03,
    0x0C, 0xCF, 0x33, 0x3F, 0x0F, 0xCC, 0xCF, 0x33, 0x0C, 0x03, 0x00, 0x0C,
    0x03, 0x00, 0xC0, 0x30, 0xFF, 0xFF, 0xF0, 0xC0, 0x30, 0x0C, 0x03, 0x00,
    0xFF, 0x33, 0xCC, 0xFF, 0xFF, 0xF0, 0xFF, 0xFF, 0x00, 0xC0, 0x30, 0x30,
    0x0C, 0x0C, 0x03, 0x03, 0x00, 0xC0, 0xC0, 0x30, 0x00, 0x3F, 0x0F, 0xCC,
    0x0F, 0x03, 0xC3, 0xF0, 0xFC, 0xCF, 0x33, 0xF0, 0xFC, 0x3C, 0x0F, 0x03,
    0x3F, 0x0F, 0xC0, 0x30, 0xCF, 0x3C, 0x30, 0xC3, 0x0C, 0x30, 0xC3, 0x0C,
    0xFF, 0xF0, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0x00, 0xC0, 0x30, 0x30, 0x0C,
    0x0C, 0x03, 0x03, 0x00, 0xC0, 0xFF, 0xFF, 0xF0, 0xFF, 0xFF, 0xF0, 0x30,
    0x0C, 0x0C, 0x03, 0x00, 0x30, 0x0C, 0x00, 0xC0, 0x3C, 0x0F, 0x03, 0x3F,
    0x0F, 0xC0, 0x03, 0x00, 0xC0, 0xF0, 0x3C, 0x33, 0x0C, 0xCC, 0x33, 0x0C,
    0xFF, 0xFF, 0xF0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0xFF, 0xFF, 0xFC, 0x03,
    0x00, 0xFF, 0x3F, 0xC0, 0x0C, 0x03, 0x00, 0xC0, 0x3C, 0x0F, 0x03, 0x3F,
    0x0F, 0xC0, 0x0F, 0x03, 0xC3, 0x00, 0xC0, 0xC0, 0x30, 0x0F, 0xF3, 0xFC,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0xFF, 0xFF, 0xF0, 0x0C,
    0x03, 0x03, 0x00, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30,
    0x0C, 0x00, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x33, 0xF0, 0xFC,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0x3F, 0x0F, 0xCC, 0x0F,
    0x03, 0xC0, 0xF0, 0x33, 0xFC, 0xFF, 0x00, 0xC0, 0x30, 0x30, 0x0C, 0x3C,
    0x0F, 0x00, 0xFF, 0xFF, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0x33,
    0xCC, 0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0xC0, 0xC0, 0x30, 0x30, 0x0C,
    0x0C, 0x03, 0x03, 0xFF, 0xFF, 0xF0, 0x00, 0x00, 0xFF, 0xFF, 0xF0, 0xC0,
    0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0xC0,
    0xC0, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0x00, 0xC0, 0x30, 0x30, 0x0C, 0x0C,
    0x03, 0x00, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x3F, 0x0F, 0xCC, 0x0F, 0x03,
    0x00, 0xC0, 0x33, 0xCC, 0xF3, 0xCC, 0xF3, 0x3C, 0xCF, 0x33, 0x3F, 0x0F,
    0xC0, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xFF,
    0xFF, 0xFC, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0xFF, 0x3F, 0xCC, 0x0F, 0x03,
    0xC0, 0xF0, 0x3F, 0xF3, 0xFC, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xFF, 0x3F,
    0xC0, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0,
    0x30, 0x0C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0xFC, 0x3F, 0x0C, 0x33, 0x0C,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x33, 0x0C, 0xFC, 0x3F,
    0x00, 0xFF, 0xFF, 0xFC, 0x03, 0x00, 0xC0, 0x30, 0x0F, 0xF3, 0xFC, 0xC0,
    0x30, 0x0C, 0x03, 0x00, 0xFF, 0xFF, 0xF0, 0xFF, 0xFF, 0xFC, 0x03, 0x00,
    0xC0, 0x30, 0x0F, 0xF3, 0xFC, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30,
    0x00, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0, 0x30, 0x0C, 0xFF, 0x3F, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0xCF, 0xF0, 0xC0, 0xF0, 0x3C, 0x0F, 0x03,
    0xC0, 0xF0, 0x3F, 0xFF, 0xFF, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0,
    0x30, 0xFF, 0xF3, 0x0C, 0x30, 0xC3, 0x0C, 0x30, 0xC3, 0x0C, 0xFF, 0xF0,
    0x0F, 0xC3, 0xF0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00,
    0xCC, 0x33, 0x0C, 0x3C, 0x0F, 0x00, 0xC0, 0xF0, 0x3C, 0x33, 0x0C, 0xCC,
    0x33, 0x0F, 0x03, 0xC0, 0xCC, 0x33, 0x0C, 0x33, 0x0C, 0xC0, 0xF0, 0x30,
    0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30,
    0x0C, 0x03, 0x00, 0xFF, 0xFF, 0xF0, 0xC0, 0xF0, 0x3F, 0x3F, 0xCF, 0xCC,
    0xF3, 0x3C, 0xCF, 0x33, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x30,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xF0, 0xFC, 0x3C, 0xCF, 0x33, 0xC3, 0xF0,
    0xFC, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0,
    0xFF, 0x3F, 0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x3F, 0xF3, 0xFC, 0xC0, 0x30,
    0x0C, 0x03, 0x00, 0xC0, 0x30, 0x00, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0xCC, 0xF3, 0x3C, 0x33, 0x0C, 0x3C, 0xCF, 0x30,
    0xFF, 0x3F, 0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x3F, 0xF3, 0xFC, 0xCC, 0x33,
    0x0C, 0x33, 0x0C, 0xC0, 0xF0, 0x30, 0x3F, 0xCF, 0xFC, 0x03, 0x00, 0xC0,
    0x30, 0x03, 0xF0, 0xFC, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0xFF, 0x3F, 0xC0,
    0xFF, 0xFF, 0xF0, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x0C, 0x03,
    0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0,
    0x33, 0x30, 0xCC, 0x0C, 0x03, 0x00, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0xCF, 0x33, 0xCC, 0xF3, 0x3C, 0xCF, 0x33, 0x33, 0x0C, 0xC0,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x33, 0x0C, 0xC0, 0xC0, 0x30, 0x33, 0x0C,
    0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0,
    0xF0, 0x33, 0x30, 0xCC, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00,
    0xFF, 0xFF, 0xF0, 0x0C, 0x03, 0x03, 0x00, 0xC0, 0xC0, 0x30, 0x30, 0x0C,
    0x0C, 0x03, 0x00, 0xFF, 0xFF, 0xF0, 0xFF, 0xFC, 0x30, 0xC3, 0x0C, 0x30,
    0xC3, 0x0C, 0x30, 0xFF, 0xF0, 0xC0, 0x30, 0x03, 0x00, 0xC0, 0x0C, 0x03,
    0x00, 0x30, 0x0C, 0x00, 0xC0, 0x30, 0xFF, 0xF0, 0xC3, 0x0C, 0x30, 0xC3,
    0x0C, 0x30, 0xC3, 0xFF, 0xF0, 0x0C, 0x03, 0x03, 0x30, 0xCC, 0xC0, 0xF0,
    0x30, 0xFF, 0xFF, 0xF0, 0xC3, 0x03, 0x0C, 0x0C, 0x30, 0x3F, 0x0F, 0xC0,
    0x0C, 0x03, 0x3F, 0xCF, 0xFC, 0x0F, 0x03, 0x3F, 0xCF, 0xF0, 0xC0, 0x30,
    0x0C, 0x03, 0x00, 0xCF, 0x33, 0xCF, 0x0F, 0xC3, 0xC0, 0xF0, 0x3C, 0x0F,
    0x03, 0xFF, 0x3F, 0xC0, 0x3F, 0x0F, 0xCC, 0x03, 0x00, 0xC0, 0x30, 0x0C,
    0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0x3C, 0xCF,
    0x3C, 0x3F, 0x0F, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0xCF, 0xF0, 0x3F,
    0x0F, 0xCC, 0x0F, 0x03, 0xFF, 0xFF, 0xFC, 0x03, 0x00, 0x3F, 0x0F, 0xC0,
    0x0F, 0x03, 0xC3, 0x0C, 0xC3, 0x30, 0x0C, 0x0F, 0xC3, 0xF0, 0x30, 0x0C,
    0x03, 0x00, 0xC0, 0x30, 0x0C, 0x00, 0x3F, 0xCF, 0xFC, 0x0F, 0x03, 0xC0,
    0xF0, 0x33, 0xFC, 0xFF, 0x00, 0xC0, 0x33, 0xF0, 0xFC, 0xC0, 0x30, 0x0C,
    0x03, 0x00, 0xCF, 0x33, 0xCF, 0x0F, 0xC3, 0xC0, 0xF0, 0x3C, 0x0F, 0x03,
    0xC0, 0xF0, 0x30, 0x30, 0xC0, 0x00, 0xF3, 0xC3, 0x0C, 0x30, 0xC3, 0x0C,
    0xFF, 0xF0, 0x03, 0x03, 0x00, 0x00, 0x0F, 0x0F, 0x03, 0x03, 0x03, 0x03,
    0xC3, 0xC3, 0x3C, 0x3C, 0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xC3, 0xCC, 0xCC,
    0xF0, 0xF0, 0xCC, 0xCC, 0xC3, 0xC3, 0xF3, 0xC3, 0x0C, 0x30, 0xC3, 0x0C,
    0x30, 0xC3, 0x0C, 0xFF, 0xF0, 0xF3, 0x3C, 0xCC, 0xCF, 0x33, 0xCC, 0xF3,
    0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0xCF, 0x33, 0xCF, 0x0F, 0xC3, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0x3F, 0x0F, 0xCC, 0x0F, 0x03,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0xFF, 0x3F, 0xCC, 0x0F,
    0x03, 0xFF, 0x3F, 0xCC, 0x03, 0x00, 0xC0, 0x30, 0x00, 0x3C, 0xCF, 0x3C,
    0x3F, 0x0F, 0x3F, 0xCF, 0xF0, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0xCF, 0x33,
    0xCF, 0x0F, 0xC3, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x00, 0x3F,
    0x0F, 0xCC, 0x03, 0x00, 0x3F, 0x0F, 0xC0, 0x0C, 0x03, 0xFF, 0x3F, 0xC0,
    0x30, 0x0C, 0x03, 0x00, 0xC0, 0xFC, 0x3F, 0x03, 0x00, 0xC0, 0x30, 0x0C,
    0x03, 0x0C, 0xC3, 0x0F, 0x03, 0xC0, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0x3F, 0x0F, 0x3C, 0xCF, 0x30, 0xC0, 0xF0, 0x3C, 0x0F, 0x03,
    0xC0, 0xF0, 0x33, 0x30, 0xCC, 0x0C, 0x03, 0x00, 0xC0, 0xF0, 0x3C, 0x0F,
    0x03, 0xCC, 0xF3, 0x3C, 0xCF, 0x33, 0x33, 0x0C, 0xC0, 0xC0, 0xF0, 0x33,
    0x30, 0xCC, 0x0C, 0x03, 0x03, 0x30, 0xCC, 0xC0, 0xF0, 0x30, 0xC0, 0xF0,
    0x3C, 0x0F, 0x03, 0x3F, 0xCF, 0xF0, 0x0C, 0x03, 0x3F, 0x0F, 0xC0, 0xFF,
    0xFF, 0xF0, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0xC0, 0xFF, 0xFF, 0xF0,
    0x0C, 0x33, 0x0C, 0x30, 0xCC, 0x30, 0x30, 0xC3, 0x0C, 0x0C, 0x30, 0xFF,
    0xFF, 0xFF, 0xF0, 0xC3, 0x03, 0x0C, 0x30, 0xC0, 0xC3, 0x30, 0xC3, 0x0C,
    0xC3, 0x00, 0x30, 0x0C, 0x0C, 0xCF, 0x33, 0x03, 0x00, 0xC0,
];

#[rustfmt::skip]
static GLYPHS: [Glyph; 95] = [
    Glyph::new(   0,  0,  0, 12,  0,   0), // 0x20
    Glyph::new(   0,  2, 14, 12,  4, -14), // 0x21
    Glyph::new(   4,  6,  6, 12,  2, -14), // 0x22
    Glyph::new(   9, 10, 14, 12,  0, -14), // 0x23
    Glyph::new(  27, 10, 14, 12,  0, -14), // 0x24
    Glyph::new(  45, 10, 14, 12,  0, -14), // 0x25
    Glyph::new(  63, 10, 14, 12,  0, -14), // 0x26
    Glyph::new(  81,  4,  6, 12,  2, -14), // 0x27
    Glyph::new(  84,  6, 14, 12,  2, -14), // 0x28
    Glyph::new(  95,  6, 14, 12,  2, -14), // 0x29
    Glyph::new( 106, 10, 10, 12,  0, -12), // 0x2A
    Glyph::new( 119, 10, 10, 12,  0, -12), // 0x2B
    Glyph::new( 132,  4,  6, 12,  2,  -6), // 0x2C
    Glyph::new( 135, 10,  2, 12,  0,  -8), // 0x2D
    Glyph::new( 138,  4,  4, 12,  2,  -4), // 0x2E
    Glyph::new( 140, 10, 10, 12,  0, -12), // 0x2F
    Glyph::new( 153, 10, 14, 12,  0, -14), // 0x30
    Glyph::new( 171,  6, 14, 12,  2, -14), // 0x31
    Glyph::new( 182, 10, 14, 12,  0, -14), // 0x32
    Glyph::new( 200, 10, 14, 12,  0, -14), // 0x33
    Glyph::new( 218, 10, 14, 12,  0, -14), // 0x34
    Glyph::new( 236, 10, 14, 12,  0, -14), // 0x35
    Glyph::new( 254, 10, 14, 12,  0, -14), // 0x36
    Glyph::new( 272, 10, 14, 12,  0, -14), // 0x37
    Glyph::new( 290, 10, 14, 12,  0, -14), // 0x38
    Glyph::new( 308, 10, 14, 12,  0, -14), // 0x39
    Glyph::new( 326,  4, 10, 12,  2, -12), // 0x3A
    Glyph::new( 331,  4, 12, 12,  2, -12), // 0x3B
    Glyph::new( 337,  8, 14, 12,  0, -14), // 0x3C
    Glyph::new( 351, 10,  6, 12,  0, -10), // 0x3D
    Glyph::new( 359,  8, 14, 12,  2, -14), // 0x3E
    Glyph::new( 373, 10, 14, 12,  0, -14), // 0x3F
    Glyph::new( 391, 10, 14, 12,  0, -14), // 0x40
    Glyph::new( 409, 10, 14, 12,  0, -14), // 0x41
    Glyph::new( 427, 10, 14, 12,  0, -14), // 0x42
    Glyph::new( 445, 10, 14, 12,  0, -14), // 0x43
    Glyph::new( 463, 10, 14, 12,  0, -14), // 0x44
    Glyph::new( 481, 10, 14, 12,  0, -14), // 0x45
    Glyph::new( 499, 10, 14, 12,  0, -14), // 0x46
    Glyph::new( 517, 10, 14, 12,  0, -14), // 0x47
    Glyph::new( 535, 10, 14, 12,  0, -14), // 0x48
    Glyph::new( 553,  6, 14, 12,  2, -14), // 0x49
    Glyph::new( 564, 10, 14, 12,  0, -14), // 0x4A
    Glyph::new( 582, 10, 14, 12,  0, -14), // 0x4B
    Glyph::new( 600, 10, 14, 12,  0, -14), // 0x4C
    Glyph::new( 618, 10, 14, 12,  0, -14), // 0x4D
    Glyph::new( 636, 10, 14, 12,  0, -14), // 0x4E
    Glyph::new( 654, 10, 14, 12,  0, -14), // 0x4F
    Glyph::new( 672, 10, 14, 12,  0, -14), // 0x50
    Glyph::new( 690, 10, 14, 12,  0, -14), // 0x51
    Glyph::new( 708, 10, 14, 12,  0, -14), // 0x52
    Glyph::new( 726, 10, 14, 12,  0, -14), // 0x53
    Glyph::new( 744, 10, 14, 12,  0, -14), // 0x54
    Glyph::new( 762, 10, 14, 12,  0, -14), // 0x55
    Glyph::new( 780, 10, 14, 12,  0, -14), // 0x56
    Glyph::new( 798, 10, 14, 12,  0, -14), // 0x57
    Glyph::new( 816, 10, 14, 12,  0, -14), // 0x58
    Glyph::new( 834, 10, 14, 12,  0, -14), // 0x59
    Glyph::new( 852, 10, 14, 12,  0, -14), // 0x5A
    Glyph::new( 870,  6, 14, 12,  2, -14), // 0x5B
    Glyph::new( 881, 10, 10, 12,  0, -12), // 0x5C
    Glyph::new( 894,  6, 14, 12,  2, -14), // 0x5D
    Glyph::new( 905, 10,  6, 12,  0, -14), // 0x5E
    Glyph::new( 913, 10,  2, 12,  0,  -2), // 0x5F
    Glyph::new( 916,  6,  6, 12,  2, -14), // 0x60
    Glyph::new( 921, 10, 10, 12,  0, -10), // 0x61
    Glyph::new( 934, 10, 14, 12,  0, -14), // 0x62
    Glyph::new( 952, 10, 10, 12,  0, -10), // 0x63
    Glyph::new( 965, 10, 14, 12,  0, -14), // 0x64
    Glyph::new( 983, 10, 10, 12,  0, -10), // 0x65
    Glyph::new( 996, 10, 14, 12,  0, -14), // 0x66
    Glyph::new(1014, 10, 12, 12,  0, -12), // 0x67
    Glyph::new(1029, 10, 14, 12,  0, -14), // 0x68
    Glyph::new(1047,  6, 14, 12,  2, -14), // 0x69
    Glyph::new(1058,  8, 14, 12,  0, -14), // 0x6A
    Glyph::new(1072,  8, 14, 12,  0, -14), // 0x6B
    Glyph::new(1086,  6, 14, 12,  2, -14), // 0x6C
    Glyph::new(1097, 10, 10, 12,  0, -10), // 0x6D
    Glyph::new(1110, 10, 10, 12,  0, -10), // 0x6E
    Glyph::new(1123, 10, 10, 12,  0, -10), // 0x6F
    Glyph::new(1136, 10, 10, 12,  0, -10), // 0x70
    Glyph::new(1149, 10, 10, 12,  0, -10), // 0x71
    Glyph::new(1162, 10, 10, 12,  0, -10), // 0x72
    Glyph::new(1175, 10, 10, 12,  0, -10), // 0x73
    Glyph::new(1188, 10, 14, 12,  0, -14), // 0x74
    Glyph::new(1206, 10, 10, 12,  0, -10), // 0x75
    Glyph::new(1219, 10, 10, 12,  0, -10), // 0x76
    Glyph::new(1232, 10, 10, 12,  0, -10), // 0x77
    Glyph::new(1245, 10, 10, 12,  0, -10), // 0x78
    Glyph::new(1258, 10, 10, 12,  0, -10), // 0x79
    Glyph::new(1271, 10, 10, 12,  0, -10), // 0x7A
    Glyph::new(1284,  6, 14, 12,  2, -14), // 0x7B
    Glyph::new(1295,  2, 14, 12,  4, -14), // 0x7C
    Glyph::new(1299,  6, 14, 12,  2, -14), // 0x7D
    Glyph::new(1310, 10,  6, 12,  0, -10), // 0x7E
];

/// Fixed-advance font used for every status field
pub static PIXEL_12X16: Font = Font {
    bitmap: &BITMAP,
    glyphs: &GLYPHS,
    first: 0x20,
    last: 0x7E,
    y_top: -14,
    y_bottom: 2,
    fallback: '?',
};
