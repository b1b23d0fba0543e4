//! SPI transport for RP2040
//!
//! embassy-rp builds and clocks the PL022, but byte traffic goes straight
//! through its registers: `send_byte`/`request_byte` push one frame into
//! the TX FIFO and return, and `operation_completed` reports the status
//! register. A peripheral that never drains its FIFO therefore shows up
//! as a transfer that never completes.
//!
//! Device select is a plain GPIO driven by the transport, not the
//! peripheral's hardware CS, so it can stay asserted across a whole
//! primitive.

use embassy_rp::clocks::clk_peri_freq;
use embassy_rp::gpio::Output;
use embassy_rp::pac;
use embassy_rp::peripherals::{SPI0, SPI1};
use embassy_rp::spi::{self, Blocking, Instance, Spi};
use tankwatch_hal::spi::{BitOrder, Phase, Polarity, Role, SpiOptions};
use tankwatch_hal::SpiTransport;

/// Frame clocked out by `request_byte`
const FILL_BYTE: u8 = 0x00;

/// Build the embassy-rp configuration matching `options`
///
/// Polarity and phase can only be set when the bus is created, so the
/// firmware builds its `Spi` from this.
pub fn spi_config(options: &SpiOptions) -> spi::Config {
    let mut config = spi::Config::default();
    config.frequency = options.clock_divider.frequency(clk_peri_freq());
    config.polarity = match options.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    config.phase = match options.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    config
}

/// Register block of an SPI instance
pub trait SpiRegisters: Instance {
    fn registers() -> pac::spi::Spi;
}

impl SpiRegisters for SPI0 {
    fn registers() -> pac::spi::Spi {
        pac::SPI0
    }
}

impl SpiRegisters for SPI1 {
    fn registers() -> pac::spi::Spi {
        pac::SPI1
    }
}

/// Byte transport over an RP2040 SPI peripheral
pub struct Rp2040SpiTransport<'d, T: SpiRegisters> {
    spi: Spi<'d, T, Blocking>,
    select: Output<'d>,
}

impl<'d, T: SpiRegisters> Rp2040SpiTransport<'d, T> {
    /// Wrap a configured SPI bus and its select pin. Select is released.
    pub fn new(spi: Spi<'d, T, Blocking>, mut select: Output<'d>) -> Self {
        select.set_high();
        Self { spi, select }
    }

    /// Queue one frame, dropping whatever the previous transfer clocked in
    fn start(&mut self, byte: u8) {
        let regs = T::registers();
        while regs.sspsr().read().rne() {
            let _ = regs.sspdr().read();
        }
        regs.sspdr().write(|w| w.set_data(byte as u16));
    }
}

impl<T: SpiRegisters> SpiTransport for Rp2040SpiTransport<'_, T> {
    fn configure(&mut self, options: SpiOptions) {
        if options.role != Role::Master || options.bit_order != BitOrder::MsbFirst {
            #[cfg(feature = "defmt")]
            defmt::warn!("RP2040 SPI only runs as an MSB-first master: {:?}", options);
        }
        self.spi
            .set_frequency(options.clock_divider.frequency(clk_peri_freq()));
        self.select.set_high();
    }

    fn assert_select(&mut self) {
        self.select.set_low();
    }

    fn deassert_select(&mut self) {
        self.select.set_high();
    }

    fn send_byte(&mut self, byte: u8) {
        self.start(byte);
    }

    fn request_byte(&mut self) {
        self.start(FILL_BYTE);
    }

    fn operation_completed(&mut self) -> bool {
        // Each frame sent also clocks one in; wait for it as well as the shifter
        let status = T::registers().sspsr().read();
        status.tfe() && !status.bsy() && status.rne()
    }

    fn get_byte(&mut self) -> u8 {
        T::registers().sspdr().read().data() as u8
    }
}
