//! HXD8357D TFT controller driver
//!
//! Cooperative driver for the HXD8357D controller on a 320x480 panel.
//! [`Hxd8357d::task`] is called once per main-loop pass and does a bounded
//! amount of work each time:
//!
//! - During bring-up it issues the next batch of commands once the
//!   previous stage's settling deadline has passed. The controller has no
//!   ready signal, so every stage is timed.
//! - When idle it pulls the next primitive from a [`PrimitiveSource`],
//!   opens the address window and returns.
//! - While drawing it streams one burst of a rectangle, or one character
//!   of a text run, and returns.
//!
//! Select stays asserted for the whole of a primitive, so nothing else
//! may use the bus while the driver is drawing.
//!
//! ```text
//! Initial ─► WaitingForPower ─► WaitingForReset ─► WaitingForSetc
//!     ─► WaitingForSleepExit ─► WaitingForDisplayOn ─► Idle
//!                                                       ▲ │
//!                                 DrawingRectangle ◄────┘ │
//!                                 DrawingText ◄───────────┘
//! ```

pub mod commands;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;
use embedded_hal::delay::DelayNs;
use tankwatch_core::time::{Clock, TickService};
use tankwatch_hal::spi::{BitOrder, ClockDivider, Mode, Role, SpiOptions};
use tankwatch_hal::{OutputPin, SpiTransport};

use crate::font::{Font, Glyph, PIXEL_12X16};
use crate::primitives::{PrimitiveSource, Rectangle, Text};

use commands::{madctl, Command};

/// Hundredths to hold reset while the supply settles
pub const POWER_SETTLE_HUNDREDTHS: u32 = 20;
/// Hundredths after software reset
pub const RESET_SETTLE_HUNDREDTHS: u32 = 2;
/// Hundredths after unlocking the extended commands
pub const SETC_SETTLE_HUNDREDTHS: u32 = 30;
/// Hundredths after leaving sleep
pub const SLEEP_EXIT_HUNDREDTHS: u32 = 15;
/// Hundredths after switching the display on
pub const DISPLAY_ON_HUNDREDTHS: u32 = 5;

/// Panel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// 320 wide, 480 tall
    Portrait,
    /// 480 wide, 320 tall
    Landscape,
}

impl Orientation {
    /// MADCTL value selecting this orientation
    pub const fn madctl(self) -> u8 {
        match self {
            Orientation::Portrait => madctl::MY | madctl::MX | madctl::RGB,
            Orientation::Landscape => madctl::MV | madctl::MY | madctl::RGB,
        }
    }

    /// Width and height in pixels
    pub const fn size(self) -> (u16, u16) {
        match self {
            Orientation::Portrait => (320, 480),
            Orientation::Landscape => (480, 320),
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Panel orientation, which also fixes the drawable size
    pub orientation: Orientation,
    /// Most rectangle pixels streamed per call
    pub burst_pixels: u16,
    /// Settling time after asserting select, in microseconds
    pub select_setup_us: u32,
    /// Completion polls allowed per byte before the transport is declared
    /// stalled. `None` polls forever.
    pub completion_poll_limit: Option<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            burst_pixels: 300,
            select_setup_us: 10,
            completion_poll_limit: None,
        }
    }
}

/// Problems the driver detected. None of them stop the polling contract;
/// they are recorded for [`Hxd8357d::last_fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverFault {
    /// The character is not in the font; the fallback glyph was drawn
    UnsupportedCharacter(char),
    /// A primitive fell outside the panel and was skipped or cut short
    PrimitiveOutOfBounds,
    /// A text run arrived with characters already cut off at its capacity
    TextTruncated,
    /// A byte transfer did not complete within the poll limit
    TransportStalled,
    /// The request needs the driver to be idle
    Busy,
}

/// Observable driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    Initial,
    WaitingForPower,
    WaitingForReset,
    WaitingForSetc,
    WaitingForSleepExit,
    WaitingForDisplayOn,
    Idle,
    DrawingRectangle,
    DrawingText,
    /// The transport stalled; only [`Hxd8357d::reset`] leaves this state
    Faulted,
}

/// Remaining work of a rectangle
struct RectangleProgress {
    color: Rgb565,
    remaining: u32,
}

/// Remaining work of a text run
struct TextProgress {
    text: Text,
    /// Byte index of the next character
    next: usize,
    pen_x: u16,
}

enum Progress {
    Initial,
    WaitingForPower(Clock),
    WaitingForReset(Clock),
    WaitingForSetc(Clock),
    WaitingForSleepExit(Clock),
    WaitingForDisplayOn(Clock),
    Idle,
    DrawingRectangle(RectangleProgress),
    DrawingText(TextProgress),
    Faulted,
}

/// HXD8357D driver
pub struct Hxd8357d<'c, SPI, RST, DC, D> {
    spi: SPI,
    reset: RST,
    dc: DC,
    delay: D,
    clock: &'c TickService,
    font: &'static Font,
    config: DriverConfig,
    progress: Progress,
    fault: Option<DriverFault>,
}

impl<'c, SPI, RST, DC, D> Hxd8357d<'c, SPI, RST, DC, D>
where
    SPI: SpiTransport,
    RST: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    /// Create a driver and configure its transport
    ///
    /// Reset and data/command idle high. Nothing is sent until the first
    /// call to [`Hxd8357d::task`].
    pub fn new(
        mut spi: SPI,
        mut reset: RST,
        mut dc: DC,
        delay: D,
        clock: &'c TickService,
        config: DriverConfig,
    ) -> Self {
        reset.set_high();
        dc.set_high();
        spi.configure(SpiOptions::with_mode(
            Role::Master,
            ClockDivider::Div4,
            Mode::Mode0,
            BitOrder::MsbFirst,
        ));

        Self {
            spi,
            reset,
            dc,
            delay,
            clock,
            font: &PIXEL_12X16,
            config,
            progress: Progress::Initial,
            fault: None,
        }
    }

    /// Draw text with `font` instead of the built-in one
    pub fn with_font(mut self, font: &'static Font) -> Self {
        self.font = font;
        self
    }

    /// Current state
    pub fn state(&self) -> DriverState {
        match self.progress {
            Progress::Initial => DriverState::Initial,
            Progress::WaitingForPower(_) => DriverState::WaitingForPower,
            Progress::WaitingForReset(_) => DriverState::WaitingForReset,
            Progress::WaitingForSetc(_) => DriverState::WaitingForSetc,
            Progress::WaitingForSleepExit(_) => DriverState::WaitingForSleepExit,
            Progress::WaitingForDisplayOn(_) => DriverState::WaitingForDisplayOn,
            Progress::Idle => DriverState::Idle,
            Progress::DrawingRectangle(_) => DriverState::DrawingRectangle,
            Progress::DrawingText(_) => DriverState::DrawingText,
            Progress::Faulted => DriverState::Faulted,
        }
    }

    /// Drawable width and height
    pub fn size(&self) -> (u16, u16) {
        self.config.orientation.size()
    }

    /// Most recent fault, if any
    pub fn last_fault(&self) -> Option<DriverFault> {
        self.fault
    }

    /// Take and clear the most recent fault
    pub fn take_fault(&mut self) -> Option<DriverFault> {
        self.fault.take()
    }

    /// Restart bring-up from the beginning
    pub fn reset(&mut self) {
        self.spi.deassert_select();
        self.progress = Progress::Initial;
    }

    /// Advance the driver by one step
    pub fn task<S: PrimitiveSource + ?Sized>(&mut self, source: &mut S) {
        let result = match core::mem::replace(&mut self.progress, Progress::Faulted) {
            Progress::Initial => {
                // Hold reset while the module's supply settles
                self.reset.set_low();
                self.progress =
                    Progress::WaitingForPower(self.clock.future(POWER_SETTLE_HUNDREDTHS));
                Ok(())
            }
            Progress::WaitingForPower(deadline) => self.wait_for_power(deadline),
            Progress::WaitingForReset(deadline) => self.wait_for_reset(deadline),
            Progress::WaitingForSetc(deadline) => self.wait_for_setc(deadline),
            Progress::WaitingForSleepExit(deadline) => self.wait_for_sleep_exit(deadline),
            Progress::WaitingForDisplayOn(deadline) => self.wait_for_display_on(deadline),
            Progress::Idle => self.poll_source(source),
            Progress::DrawingRectangle(rect) => self.continue_rectangle(rect),
            Progress::DrawingText(text) => self.continue_text(text),
            Progress::Faulted => Ok(()),
        };

        if let Err(fault) = result {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display transport fault: {:?}", fault);
            self.spi.deassert_select();
            self.fault = Some(fault);
            self.progress = Progress::Faulted;
        }
    }

    /// Read the controller's self-diagnostic register
    ///
    /// Only allowed while idle, since it needs the bus.
    pub fn read_self_diagnostic(&mut self) -> Result<u8, DriverFault> {
        if !matches!(self.progress, Progress::Idle) {
            return Err(DriverFault::Busy);
        }

        self.select();
        let result = self.write_command(commands::RDDSDR).and_then(|_| self.read_byte());
        self.spi.deassert_select();

        if let Err(fault) = result {
            self.fault = Some(fault);
            self.progress = Progress::Faulted;
        }
        result
    }

    fn wait_for_power(&mut self, deadline: Clock) -> Result<(), DriverFault> {
        if !self.clock.has_arrived(deadline) {
            self.progress = Progress::WaitingForPower(deadline);
            return Ok(());
        }

        self.reset.set_high();
        self.delay.delay_us(self.config.select_setup_us);
        self.select();
        self.write_command(commands::SWRESET)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Display reset released");

        self.progress = Progress::WaitingForReset(self.clock.future(RESET_SETTLE_HUNDREDTHS));
        Ok(())
    }

    fn wait_for_reset(&mut self, deadline: Clock) -> Result<(), DriverFault> {
        if !self.clock.has_arrived(deadline) {
            self.progress = Progress::WaitingForReset(deadline);
            return Ok(());
        }

        self.send(&commands::UNLOCK)?;
        self.progress = Progress::WaitingForSetc(self.clock.future(SETC_SETTLE_HUNDREDTHS));
        Ok(())
    }

    fn wait_for_setc(&mut self, deadline: Clock) -> Result<(), DriverFault> {
        if !self.clock.has_arrived(deadline) {
            self.progress = Progress::WaitingForSetc(deadline);
            return Ok(());
        }

        for command in commands::CONFIGURE.iter() {
            self.send(command)?;
        }
        self.write_command(commands::MADCTL)?;
        self.write_byte(self.config.orientation.madctl())?;
        self.write_command(commands::SLPOUT)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Display configured, leaving sleep");

        self.progress = Progress::WaitingForSleepExit(self.clock.future(SLEEP_EXIT_HUNDREDTHS));
        Ok(())
    }

    fn wait_for_sleep_exit(&mut self, deadline: Clock) -> Result<(), DriverFault> {
        if !self.clock.has_arrived(deadline) {
            self.progress = Progress::WaitingForSleepExit(deadline);
            return Ok(());
        }

        self.write_command(commands::DISPON)?;
        self.progress = Progress::WaitingForDisplayOn(self.clock.future(DISPLAY_ON_HUNDREDTHS));
        Ok(())
    }

    fn wait_for_display_on(&mut self, deadline: Clock) -> Result<(), DriverFault> {
        if !self.clock.has_arrived(deadline) {
            self.progress = Progress::WaitingForDisplayOn(deadline);
            return Ok(());
        }

        self.spi.deassert_select();
        self.delay.delay_us(self.config.select_setup_us);

        #[cfg(feature = "defmt")]
        defmt::info!("Display ready");

        self.progress = Progress::Idle;
        Ok(())
    }

    fn poll_source<S: PrimitiveSource + ?Sized>(&mut self, source: &mut S) -> Result<(), DriverFault> {
        self.progress = Progress::Idle;

        if let Some(rect) = source.next_rectangle() {
            return self.begin_rectangle(rect);
        }
        if let Some(text) = source.next_text() {
            self.begin_text(text);
        }
        Ok(())
    }

    fn begin_rectangle(&mut self, rect: Rectangle) -> Result<(), DriverFault> {
        let Some(rect) = self.clip(rect) else {
            return Ok(());
        };

        self.select();
        self.set_window(rect.x, rect.y, rect.width, rect.height)?;
        self.progress = Progress::DrawingRectangle(RectangleProgress {
            color: rect.color,
            remaining: rect.pixel_count(),
        });
        Ok(())
    }

    /// Clip `rect` to the panel. Empty results are dropped; rectangles
    /// that start off the panel also record a fault.
    fn clip(&mut self, rect: Rectangle) -> Option<Rectangle> {
        if rect.is_empty() {
            return None;
        }

        let (width, height) = self.size();
        if rect.x >= width || rect.y >= height {
            self.fault = Some(DriverFault::PrimitiveOutOfBounds);
            return None;
        }

        Some(Rectangle {
            width: rect.width.min(width - rect.x),
            height: rect.height.min(height - rect.y),
            ..rect
        })
    }

    fn continue_rectangle(&mut self, mut rect: RectangleProgress) -> Result<(), DriverFault> {
        let burst = rect.remaining.min(self.config.burst_pixels.max(1) as u32);
        for _ in 0..burst {
            self.write_pixel(rect.color)?;
        }
        rect.remaining -= burst;

        if rect.remaining == 0 {
            self.spi.deassert_select();
            self.progress = Progress::Idle;
        } else {
            self.progress = Progress::DrawingRectangle(rect);
        }
        Ok(())
    }

    fn begin_text(&mut self, text: Text) {
        if text.truncated {
            self.fault = Some(DriverFault::TextTruncated);
        }
        if text.is_empty() {
            return;
        }

        self.select();
        let pen_x = text.x;
        self.progress = Progress::DrawingText(TextProgress {
            text,
            next: 0,
            pen_x,
        });
    }

    /// Draw one character of a text run
    fn continue_text(&mut self, mut run: TextProgress) -> Result<(), DriverFault> {
        let Some(c) = run.text.chars[run.next..].chars().next() else {
            self.spi.deassert_select();
            self.progress = Progress::Idle;
            return Ok(());
        };
        run.next += c.len_utf8();

        let font = self.font;
        let glyph = match font.glyph(c) {
            Ok(glyph) => Some(glyph),
            Err(_) => {
                self.fault = Some(DriverFault::UnsupportedCharacter(c));
                font.glyph(font.fallback).ok()
            }
        };

        if let Some(glyph) = glyph {
            let (width, height) = self.size();
            let cell_width = glyph.x_advance as u16;
            let cell_height = font.height();
            if run.pen_x as u32 + cell_width as u32 > width as u32
                || run.text.y as u32 + cell_height as u32 > height as u32
            {
                // Nothing more of this run fits on the panel
                self.fault = Some(DriverFault::PrimitiveOutOfBounds);
                self.spi.deassert_select();
                self.progress = Progress::Idle;
                return Ok(());
            }

            self.draw_glyph(font, glyph, run.pen_x, run.text.y, &run.text)?;
            run.pen_x += cell_width;
        }

        if run.next >= run.text.chars.len() {
            self.spi.deassert_select();
            self.progress = Progress::Idle;
        } else {
            self.progress = Progress::DrawingText(run);
        }
        Ok(())
    }

    /// Stream one character cell: `x_advance` wide and a full line tall,
    /// background wherever the glyph bitmap does not reach
    fn draw_glyph(
        &mut self,
        font: &Font,
        glyph: &Glyph,
        x: u16,
        y: u16,
        text: &Text,
    ) -> Result<(), DriverFault> {
        let cell_width = glyph.x_advance as u16;
        let cell_height = font.height();
        if cell_width == 0 {
            return Ok(());
        }

        self.set_window(x, y, cell_width, cell_height)?;

        for row in 0..cell_height as i16 {
            // Row within the glyph bitmap
            let gy = row + font.y_top as i16 - glyph.y_offset as i16;
            for col in 0..cell_width as i16 {
                let gx = col - glyph.x_offset as i16;
                let color = if font.pixel(glyph, gx, gy) {
                    text.foreground
                } else {
                    text.background
                };
                self.write_pixel(color)?;
            }
        }
        Ok(())
    }

    fn select(&mut self) {
        self.spi.assert_select();
        self.delay.delay_us(self.config.select_setup_us);
    }

    fn set_window(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DriverFault> {
        self.write_command(commands::CASET)?;
        self.write_word(x)?;
        self.write_word(x + width - 1)?;

        self.write_command(commands::PASET)?;
        self.write_word(y)?;
        self.write_word(y + height - 1)?;

        self.write_command(commands::RAMWR)
    }

    fn send(&mut self, command: &Command) -> Result<(), DriverFault> {
        self.write_command(command.code)?;
        for &byte in command.params {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn write_command(&mut self, code: u8) -> Result<(), DriverFault> {
        self.dc.set_low();
        let result = self.write_byte(code);
        self.dc.set_high();
        result
    }

    fn write_pixel(&mut self, color: Rgb565) -> Result<(), DriverFault> {
        self.write_word(color.into_storage())
    }

    fn write_word(&mut self, word: u16) -> Result<(), DriverFault> {
        let [hi, lo] = word.to_be_bytes();
        self.write_byte(hi)?;
        self.write_byte(lo)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DriverFault> {
        self.spi.send_byte(byte);
        self.wait_for_completion()
    }

    fn read_byte(&mut self) -> Result<u8, DriverFault> {
        self.spi.request_byte();
        self.wait_for_completion()?;
        Ok(self.spi.get_byte())
    }

    fn wait_for_completion(&mut self) -> Result<(), DriverFault> {
        match self.config.completion_poll_limit {
            None => {
                while !self.spi.operation_completed() {}
                Ok(())
            }
            Some(limit) => {
                for _ in 0..limit {
                    if self.spi.operation_completed() {
                        return Ok(());
                    }
                }
                Err(DriverFault::TransportStalled)
            }
        }
    }
}
