//! Water level status screen
//!
//! [`WaterLevelScreen`] is the [`PrimitiveSource`] the driver draws from.
//! It has two independent parts:
//!
//! - A rectangle walk (header, body, the three tank walls, air, water)
//!   that runs once from the top and afterwards only from the air step,
//!   whenever the water level changes.
//! - A set of text fields, each remembering what it last put on the
//!   panel. A field is handed to the driver only when its rendered text
//!   differs; when several changed at once they go out one per poll in a
//!   fixed priority order.
//!
//! Every field is padded to a fixed width so a shorter value erases a
//! longer one.

pub mod layout;

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use heapless::String;
use tankwatch_core::config::DeviceSettings;
use tankwatch_core::status::{StatusReport, WaterLevel, FULL_PERCENT};
use tankwatch_core::time::Clock;

use crate::backlight::{BacklightControl, BacklightLevel};
use crate::primitives::{PrimitiveSource, Rectangle, Text};

use layout::Anchor;

/// Longest rendered field, in bytes
const FIELD_CAPACITY: usize = 16;

type FieldText = String<FIELD_CAPACITY>;

const FIELD_COUNT: usize = 9;

/// Rectangle walk position, in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Step {
    Header,
    Body,
    LeftWall,
    Floor,
    RightWall,
    Air,
    Water,
    Done,
}

/// Text fields in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Time,
    Level,
    Marker,
    Timestamp,
    Temperature,
    Battery,
    Signal,
    Mains,
    Pump,
}

impl Field {
    const ALL: [Field; FIELD_COUNT] = [
        Field::Time,
        Field::Level,
        Field::Marker,
        Field::Timestamp,
        Field::Temperature,
        Field::Battery,
        Field::Signal,
        Field::Mains,
        Field::Pump,
    ];

    const fn anchor(self) -> Anchor {
        match self {
            Field::Time => layout::TIME,
            Field::Level => layout::LEVEL,
            Field::Marker => layout::MARKER,
            Field::Timestamp => layout::TIMESTAMP,
            Field::Temperature => layout::TEMPERATURE,
            Field::Battery => layout::BATTERY,
            Field::Signal => layout::SIGNAL,
            Field::Mains => layout::MAINS,
            Field::Pump => layout::PUMP,
        }
    }

    const fn background(self) -> Rgb565 {
        match self {
            Field::Time => HEADER_COLOR,
            _ => BODY_COLOR,
        }
    }
}

const HEADER_COLOR: Rgb565 = Rgb565::GREEN;
const BODY_COLOR: Rgb565 = Rgb565::WHITE;
const TANK_COLOR: Rgb565 = Rgb565::BLACK;
const AIR_COLOR: Rgb565 = Rgb565::WHITE;
const WATER_COLOR: Rgb565 = Rgb565::BLUE;
const TEXT_COLOR: Rgb565 = Rgb565::BLACK;

/// The monitor's single status screen
pub struct WaterLevelScreen<'a> {
    backlight: &'a dyn BacklightControl,
    brightness_mains_on: BacklightLevel,
    brightness_mains_off: BacklightLevel,
    /// Mains state the backlight was last set for
    applied_mains: Option<bool>,
    now: Clock,
    status: StatusReport,
    step: Step,
    /// What each field last put on the panel, `None` if nothing is there
    drawn: [Option<FieldText>; FIELD_COUNT],
}

impl<'a> WaterLevelScreen<'a> {
    /// Create a screen that draws everything on its first polls
    pub fn new(backlight: &'a dyn BacklightControl, settings: &DeviceSettings) -> Self {
        Self {
            backlight,
            brightness_mains_on: BacklightLevel::new(settings.brightness_mains_on),
            brightness_mains_off: BacklightLevel::new(settings.brightness_mains_off),
            applied_mains: None,
            now: Clock::ZERO,
            status: StatusReport::default(),
            step: Step::Header,
            drawn: core::array::from_fn(|_| None),
        }
    }

    /// Take new brightness values; they are applied on the next update
    pub fn apply_settings(&mut self, settings: &DeviceSettings) {
        self.brightness_mains_on = BacklightLevel::new(settings.brightness_mains_on);
        self.brightness_mains_off = BacklightLevel::new(settings.brightness_mains_off);
        self.applied_mains = None;
    }

    /// Fold in the current time and status
    ///
    /// Called once per main-loop pass. The backlight follows mains
    /// presence here, once per change.
    pub fn update(&mut self, now: Clock, status: &StatusReport) {
        self.now = now;
        if status.water_level != self.status.water_level {
            self.set_water_level(status.water_level);
        }
        self.status = *status;

        if self.applied_mains != Some(status.mains_on) {
            let level = if status.mains_on {
                self.brightness_mains_on
            } else {
                self.brightness_mains_off
            };
            #[cfg(feature = "defmt")]
            defmt::debug!("Mains {}, backlight {}", status.mains_on, level.value());
            self.backlight.set_brightness(level);
            self.applied_mains = Some(status.mains_on);
        }
    }

    /// Change the displayed level and re-arm the tank drawing
    pub fn set_water_level(&mut self, level: WaterLevel) {
        self.status.water_level = level;
        let rearm = if level == WaterLevel::Known(FULL_PERCENT) {
            Step::Water
        } else {
            Step::Air
        };
        // A walk still drawing the frame will reach the tank anyway
        self.step = self.step.min(rearm);
    }

    /// Redraw the whole screen from the header down
    pub fn redraw_all(&mut self) {
        self.step = Step::Header;
    }

    /// True once the rectangle walk has nothing left to draw
    pub fn is_settled(&self) -> bool {
        self.step == Step::Done
    }

    fn invalidate_fields(&mut self) {
        for field in self.drawn.iter_mut() {
            *field = None;
        }
    }

    /// Rectangle for `step`, or `None` when the step draws nothing
    fn rectangle(&mut self, step: Step) -> Option<Rectangle> {
        use layout::*;

        let water_y = water_y(self.status.water_level);
        let rect = match step {
            Step::Header => {
                self.invalidate_fields();
                Rectangle::new(0, 0, SCREEN_WIDTH, HEADER_HEIGHT, HEADER_COLOR)
            }
            Step::Body => {
                self.invalidate_fields();
                Rectangle::new(
                    0,
                    HEADER_HEIGHT,
                    SCREEN_WIDTH,
                    SCREEN_HEIGHT - HEADER_HEIGHT,
                    BODY_COLOR,
                )
            }
            Step::LeftWall => Rectangle::new(TANK_X, TANK_Y, TANK_WALL, TANK_HEIGHT, TANK_COLOR),
            Step::Floor => Rectangle::new(
                TANK_X,
                TANK_Y + TANK_HEIGHT - TANK_WALL,
                TANK_WIDTH,
                TANK_WALL,
                TANK_COLOR,
            ),
            Step::RightWall => Rectangle::new(
                TANK_X + TANK_WIDTH - TANK_WALL,
                TANK_Y,
                TANK_WALL,
                TANK_HEIGHT,
                TANK_COLOR,
            ),
            Step::Air => {
                // Air covers the interior, marker included
                self.drawn[Field::Marker as usize] = None;
                Rectangle::new(
                    INTERIOR_X,
                    TANK_Y + TANK_TOP_GAP,
                    INTERIOR_WIDTH,
                    water_y - TANK_TOP_GAP,
                    AIR_COLOR,
                )
            }
            Step::Water => {
                if self.status.water_level == WaterLevel::Unknown {
                    return None;
                }
                Rectangle::new(
                    INTERIOR_X,
                    TANK_Y + water_y,
                    INTERIOR_WIDTH,
                    TANK_HEIGHT - (water_y + TANK_WALL),
                    WATER_COLOR,
                )
            }
            Step::Done => return None,
        };

        (!rect.is_empty()).then_some(rect)
    }

    /// Current text of `field`, `None` when the field shows nothing
    fn render(&self, field: Field) -> Option<FieldText> {
        let mut text = FieldText::new();
        let status = &self.status;
        let _ = match field {
            Field::Time => write!(text, "{}", self.now.time_of_day()),
            Field::Level => match status.water_level {
                WaterLevel::Known(percent) => write!(text, "Level {:>3}%", percent),
                WaterLevel::Unknown => text.write_str("Level  ---"),
            },
            Field::Marker => match status.water_level {
                WaterLevel::Known(_) => return None,
                WaterLevel::Unknown => text.write_str("?"),
            },
            Field::Timestamp => match status.level_timestamp {
                Some(at) => write!(text, "@ {}", at.time_of_day()),
                None => text.write_str("@ --- --:--:--"),
            },
            Field::Temperature => match status.temperature_c {
                Some(celsius) => write!(text, "Temp {:>3}C", celsius.clamp(-99, 999)),
                None => text.write_str("Temp  --C"),
            },
            Field::Battery => match status.battery_percent {
                Some(percent) => write!(text, "Batt {:>3}%", percent.min(FULL_PERCENT)),
                None => text.write_str("Batt  --%"),
            },
            Field::Signal => match status.signal_quality {
                Some(quality) => write!(text, "Sig {:>2}", quality.min(99)),
                None => text.write_str("Sig --"),
            },
            Field::Mains => text.write_str(if status.mains_on { "Mains on " } else { "Mains off" }),
            Field::Pump => text.write_str(if status.pump_on { "Pump on " } else { "Pump off" }),
        };
        Some(text)
    }
}

impl PrimitiveSource for WaterLevelScreen<'_> {
    fn next_rectangle(&mut self) -> Option<Rectangle> {
        while self.step != Step::Done {
            let step = self.step;
            self.step = match step {
                Step::Header => Step::Body,
                Step::Body => Step::LeftWall,
                Step::LeftWall => Step::Floor,
                Step::Floor => Step::RightWall,
                Step::RightWall => Step::Air,
                Step::Air => Step::Water,
                Step::Water | Step::Done => Step::Done,
            };
            if let Some(rect) = self.rectangle(step) {
                return Some(rect);
            }
        }
        None
    }

    fn next_text(&mut self) -> Option<Text> {
        for field in Field::ALL {
            let rendered = self.render(field);
            let slot = field as usize;
            if rendered == self.drawn[slot] {
                continue;
            }
            self.drawn[slot] = rendered;

            if let Some(text) = &self.drawn[slot] {
                let Anchor { x, y } = field.anchor();
                return Some(Text::new(x, y, text, TEXT_COLOR, field.background()));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use heapless::Vec;

    struct MockBacklight {
        level: Cell<BacklightLevel>,
        writes: Cell<u32>,
    }

    impl MockBacklight {
        fn new() -> Self {
            Self {
                level: Cell::new(BacklightLevel::OFF),
                writes: Cell::new(0),
            }
        }
    }

    impl BacklightControl for MockBacklight {
        fn set_brightness(&self, level: BacklightLevel) {
            self.level.set(level);
            self.writes.set(self.writes.get() + 1);
        }

        fn brightness(&self) -> BacklightLevel {
            self.level.get()
        }
    }

    fn rectangles(screen: &mut WaterLevelScreen<'_>) -> Vec<Rectangle, 16> {
        let mut rects = Vec::new();
        while let Some(rect) = screen.next_rectangle() {
            rects.push(rect).unwrap();
        }
        rects
    }

    fn texts(screen: &mut WaterLevelScreen<'_>) -> Vec<Text, 16> {
        let mut texts = Vec::new();
        while let Some(text) = screen.next_text() {
            texts.push(text).unwrap();
        }
        texts
    }

    fn screen_with_level<'a>(backlight: &'a MockBacklight, level: WaterLevel) -> WaterLevelScreen<'a> {
        let mut screen = WaterLevelScreen::new(backlight, &DeviceSettings::default());
        let status = StatusReport {
            water_level: level,
            ..Default::default()
        };
        screen.update(Clock::ZERO, &status);
        screen
    }

    #[test]
    fn test_first_walk_draws_frame_and_empty_tank() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Unknown);

        let rects = rectangles(&mut screen);
        assert_eq!(
            rects.as_slice(),
            [
                Rectangle::new(0, 0, 320, 30, Rgb565::GREEN),
                Rectangle::new(0, 30, 320, 450, Rgb565::WHITE),
                Rectangle::new(50, 100, 8, 300, Rgb565::BLACK),
                Rectangle::new(50, 392, 220, 8, Rgb565::BLACK),
                Rectangle::new(262, 100, 8, 300, Rgb565::BLACK),
                Rectangle::new(58, 120, 204, 272, Rgb565::WHITE),
            ]
        );
        assert!(screen.is_settled());
        assert_eq!(screen.next_rectangle(), None);
    }

    #[test]
    fn test_empty_tank_has_no_water() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(0));

        let rects = rectangles(&mut screen);
        let air = rects[5];
        assert_eq!(air.height, layout::WATER_PIXEL_HEIGHT);
        assert_eq!(rects.len(), 6);
    }

    #[test]
    fn test_full_tank_has_no_air() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(100));

        let rects = rectangles(&mut screen);
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[5], Rectangle::new(58, 120, 204, 272, Rgb565::BLUE));
    }

    #[test]
    fn test_half_tank_splits_interior() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(50));

        let rects = rectangles(&mut screen);
        assert_eq!(rects[5], Rectangle::new(58, 120, 204, 136, Rgb565::WHITE));
        assert_eq!(rects[6], Rectangle::new(58, 256, 204, 136, Rgb565::BLUE));
        assert_eq!(rects[5].height + rects[6].height, layout::WATER_PIXEL_HEIGHT);
    }

    #[test]
    fn test_level_change_rearms_at_air() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(50));
        rectangles(&mut screen);

        // Same level does not re-arm
        let status = StatusReport {
            water_level: WaterLevel::Known(50),
            ..Default::default()
        };
        screen.update(Clock::ZERO, &status);
        assert_eq!(screen.next_rectangle(), None);

        let status = StatusReport {
            water_level: WaterLevel::Known(75),
            ..status
        };
        screen.update(Clock::ZERO, &status);
        let rects = rectangles(&mut screen);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].color, Rgb565::WHITE);
        assert_eq!(rects[1].color, Rgb565::BLUE);
    }

    #[test]
    fn test_full_level_rearms_at_water() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(20));
        rectangles(&mut screen);

        screen.set_water_level(WaterLevel::Known(100));
        let rects = rectangles(&mut screen);
        assert_eq!(rects.as_slice(), [Rectangle::new(58, 120, 204, 272, Rgb565::BLUE)]);
    }

    #[test]
    fn test_level_change_mid_walk_keeps_frame() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(20));

        assert_eq!(screen.next_rectangle().map(|r| r.color), Some(Rgb565::GREEN));
        screen.set_water_level(WaterLevel::Known(40));
        assert_eq!(screen.next_rectangle().map(|r| r.y), Some(30));
        assert_eq!(rectangles(&mut screen).len(), 5);
    }

    #[test]
    fn test_fields_in_priority_order() {
        let backlight = MockBacklight::new();
        let mut screen = WaterLevelScreen::new(&backlight, &DeviceSettings::default());
        let status = StatusReport {
            water_level: WaterLevel::Unknown,
            level_timestamp: Some(Clock::from_seconds(2 * 86_400 + 6 * 3600 + 55 * 60)),
            temperature_c: Some(21),
            battery_percent: Some(87),
            signal_quality: Some(23),
            mains_on: true,
            pump_on: false,
        };
        screen.update(Clock::from_seconds(3 * 86_400 + 7 * 3600 + 5 * 60 + 9), &status);
        rectangles(&mut screen);

        let texts = texts(&mut screen);
        let rendered: Vec<(&str, u16, u16), 16> = texts
            .iter()
            .map(|t| (t.chars.as_str(), t.x, t.y))
            .collect();
        assert_eq!(
            rendered.as_slice(),
            [
                ("Wed 07:05:09", 8, 7),
                ("Level  ---", 50, 76),
                ("?", 154, 248),
                ("@ Tue 06:55:00", 50, 408),
                ("Temp  21C", 8, 432),
                ("Batt  87%", 164, 432),
                ("Sig 23", 4, 456),
                ("Mains on ", 84, 456),
                ("Pump off", 200, 456),
            ]
        );
        assert_eq!(texts[0].background, Rgb565::GREEN);
        assert_eq!(texts[1].background, Rgb565::WHITE);
    }

    #[test]
    fn test_unchanged_fields_not_redrawn() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(40));
        rectangles(&mut screen);
        texts(&mut screen);

        assert_eq!(screen.next_text(), None);

        let status = StatusReport {
            water_level: WaterLevel::Known(40),
            temperature_c: Some(-5),
            battery_percent: Some(60),
            ..Default::default()
        };
        screen.update(Clock::ZERO, &status);
        assert_eq!(screen.next_text().map(|t| t.chars), Some("Temp  -5C".try_into().unwrap()));
        assert_eq!(screen.next_text().map(|t| t.chars), Some("Batt  60%".try_into().unwrap()));
        assert_eq!(screen.next_text(), None);
    }

    #[test]
    fn test_fixed_width_fields() {
        let backlight = MockBacklight::new();
        let mut screen = WaterLevelScreen::new(&backlight, &DeviceSettings::default());
        rectangles(&mut screen);

        let mut status = StatusReport {
            water_level: WaterLevel::Known(100),
            mains_on: true,
            pump_on: true,
            ..Default::default()
        };
        screen.update(Clock::ZERO, &status);
        let before = texts(&mut screen);

        status.water_level = WaterLevel::Known(5);
        status.mains_on = false;
        status.pump_on = false;
        screen.update(Clock::ZERO, &status);
        rectangles(&mut screen);
        let after = texts(&mut screen);

        for field in [Field::Level, Field::Mains, Field::Pump] {
            let find = |texts: &Vec<Text, 16>| {
                texts
                    .iter()
                    .find(|t| t.x == field.anchor().x && t.y == field.anchor().y)
                    .map(|t| t.chars.len())
            };
            assert_eq!(find(&before), find(&after));
        }
    }

    #[test]
    fn test_marker_follows_unknown_level() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(30));
        rectangles(&mut screen);
        assert!(texts(&mut screen).iter().all(|t| t.chars != "?"));

        screen.set_water_level(WaterLevel::Unknown);
        rectangles(&mut screen);
        let texts = texts(&mut screen);
        assert!(texts.iter().any(|t| t.chars == "?" && t.x == 154 && t.y == 248));
    }

    #[test]
    fn test_redraw_all_repeats_every_field() {
        let backlight = MockBacklight::new();
        let mut screen = screen_with_level(&backlight, WaterLevel::Known(30));
        rectangles(&mut screen);
        let first = texts(&mut screen).len();

        screen.redraw_all();
        assert_eq!(rectangles(&mut screen).len(), 7);
        assert_eq!(texts(&mut screen).len(), first);
    }

    #[test]
    fn test_backlight_follows_mains_on_update() {
        let backlight = MockBacklight::new();
        let mut settings = DeviceSettings::default();
        settings.brightness_mains_on = 5;
        settings.brightness_mains_off = 2;
        let mut screen = WaterLevelScreen::new(&backlight, &settings);

        let mut status = StatusReport {
            mains_on: true,
            ..Default::default()
        };
        screen.update(Clock::ZERO, &status);
        assert_eq!(backlight.brightness(), BacklightLevel::new(5));

        // Mains drops; nothing happens until the next update
        status.mains_on = false;
        assert_eq!(backlight.brightness(), BacklightLevel::new(5));
        screen.update(Clock::ZERO, &status);
        assert_eq!(backlight.brightness(), BacklightLevel::new(2));

        // Once per change
        screen.update(Clock::ZERO, &status);
        screen.update(Clock::ZERO, &status);
        assert_eq!(backlight.writes.get(), 2);
    }

    #[test]
    fn test_apply_settings_reapplies_brightness() {
        let backlight = MockBacklight::new();
        let mut screen = WaterLevelScreen::new(&backlight, &DeviceSettings::default());
        let status = StatusReport {
            mains_on: true,
            ..Default::default()
        };
        screen.update(Clock::ZERO, &status);
        assert_eq!(backlight.brightness(), BacklightLevel::FULL);

        let mut settings = DeviceSettings::default();
        settings.brightness_mains_on = 7;
        screen.apply_settings(&settings);
        screen.update(Clock::ZERO, &status);
        assert_eq!(backlight.brightness(), BacklightLevel::new(7));
    }
}
