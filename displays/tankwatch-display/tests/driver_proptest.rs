//! Property-based tests for how the panel driver splits primitives
//! across calls

use std::cell::RefCell;
use std::rc::Rc;

use embedded_graphics::prelude::RgbColor;
use embedded_hal::delay::DelayNs;
use proptest::prelude::*;
use tankwatch_core::time::{TickService, TICKS_PER_SECOND};
use tankwatch_display::hxd8357d::Orientation;
use tankwatch_display::{
    DriverConfig, DriverState, Hxd8357d, PrimitiveSource, Rectangle, Rgb565, Text,
};
use tankwatch_hal::{OutputPin, SpiOptions, SpiTransport};

/// Select line activity seen by the transport
#[derive(Default)]
struct Lines {
    selects: u32,
    deselects: u32,
}

struct CountingSpi(Rc<RefCell<Lines>>);

impl SpiTransport for CountingSpi {
    fn configure(&mut self, _options: SpiOptions) {}

    fn assert_select(&mut self) {
        self.0.borrow_mut().selects += 1;
    }

    fn deassert_select(&mut self) {
        self.0.borrow_mut().deselects += 1;
    }

    fn send_byte(&mut self, _byte: u8) {}

    fn request_byte(&mut self) {}

    fn operation_completed(&mut self) -> bool {
        true
    }

    fn get_byte(&mut self) -> u8 {
        0
    }
}

struct Pin;

impl OutputPin for Pin {
    fn set_high(&mut self) {}

    fn set_low(&mut self) {}

    fn is_set_high(&self) -> bool {
        false
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Hands out a single primitive on the first poll
struct Once {
    rectangle: Option<Rectangle>,
    text: Option<Text>,
}

impl PrimitiveSource for Once {
    fn next_rectangle(&mut self) -> Option<Rectangle> {
        self.rectangle.take()
    }

    fn next_text(&mut self) -> Option<Text> {
        self.text.take()
    }
}

type Driver<'c> = Hxd8357d<'c, CountingSpi, Pin, Pin, NoDelay>;

fn ready_driver<'c>(
    clock: &'c TickService,
    lines: &Rc<RefCell<Lines>>,
    config: DriverConfig,
) -> Driver<'c> {
    let mut driver = Hxd8357d::new(CountingSpi(lines.clone()), Pin, Pin, NoDelay, clock, config);
    for _ in 0..1000 {
        driver.task(&mut ());
        if driver.state() == DriverState::Idle {
            *lines.borrow_mut() = Lines::default();
            return driver;
        }
        for _ in 0..TICKS_PER_SECOND / 100 {
            clock.on_tick();
        }
    }
    panic!("bring-up did not finish");
}

/// Take the primitive, then count the calls needed to return to idle
fn drain(driver: &mut Driver<'_>, source: &mut Once, busy: DriverState) -> u32 {
    driver.task(source);
    let mut calls = 0;
    while driver.state() == busy {
        driver.task(source);
        calls += 1;
        assert!(calls < 100_000, "primitive never finished");
    }
    calls
}

proptest! {
    #[test]
    fn rectangle_takes_one_call_per_burst(
        width in 1u16..=120,
        height in 1u16..=120,
        burst in 1u16..=1000,
    ) {
        let pixels = width as u32 * height as u32;
        prop_assume!(pixels > burst as u32);

        let clock = TickService::new(TICKS_PER_SECOND);
        let lines = Rc::new(RefCell::new(Lines::default()));
        let config = DriverConfig { burst_pixels: burst, ..DriverConfig::default() };
        let mut driver = ready_driver(&clock, &lines, config);
        let mut source = Once {
            rectangle: Some(Rectangle::new(0, 0, width, height, Rgb565::BLUE)),
            text: None,
        };

        let calls = drain(&mut driver, &mut source, DriverState::DrawingRectangle);
        prop_assert_eq!(calls, pixels.div_ceil(burst as u32));
        prop_assert_eq!(lines.borrow().selects, 1);
        prop_assert_eq!(lines.borrow().deselects, 1);
        prop_assert_eq!(driver.last_fault(), None);
    }

    #[test]
    fn text_takes_one_call_per_character(line in "[ -~]{1,40}") {
        let clock = TickService::new(TICKS_PER_SECOND);
        let lines = Rc::new(RefCell::new(Lines::default()));
        let config = DriverConfig {
            orientation: Orientation::Landscape,
            ..DriverConfig::default()
        };
        let mut driver = ready_driver(&clock, &lines, config);
        let mut source = Once {
            rectangle: None,
            text: Some(Text::new(0, 0, &line, Rgb565::BLACK, Rgb565::WHITE)),
        };

        let calls = drain(&mut driver, &mut source, DriverState::DrawingText);
        prop_assert_eq!(calls as usize, line.len());
        prop_assert_eq!(lines.borrow().selects, 1);
        prop_assert_eq!(lines.borrow().deselects, 1);
        prop_assert_eq!(driver.last_fault(), None);
    }
}
