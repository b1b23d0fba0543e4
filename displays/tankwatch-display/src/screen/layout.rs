//! Portrait screen geometry
//!
//! ```text
//!  0 ┌──────────────────────────────┐
//!    │ Wed 07:05:09        (header) │
//! 30 ├──────────────────────────────┤
//!    │   Level  55%                 │
//!100 │   ┌─┐                  ┌─┐   │
//!    │   │ │      air         │ │   │
//!    │   │ ├──────────────────┤ │   │
//!    │   │ │      water       │ │   │
//!392 │   │ └──────────────────┘ │   │
//!400 │   └──────────────────────┘   │
//!    │   @ Wed 06:55:00             │
//!    │ Temp  21C     Batt  87%      │
//!    │ Sig 23  Mains on  Pump off   │
//!480 └──────────────────────────────┘
//! ```

use tankwatch_core::status::{WaterLevel, FULL_PERCENT};

pub const SCREEN_WIDTH: u16 = 320;
pub const SCREEN_HEIGHT: u16 = 480;

pub const HEADER_HEIGHT: u16 = 30;

pub const TANK_X: u16 = 50;
pub const TANK_Y: u16 = 100;
pub const TANK_WIDTH: u16 = 220;
pub const TANK_HEIGHT: u16 = 300;
/// Thickness of the tank walls and floor
pub const TANK_WALL: u16 = 8;
/// Space between the tank's open top and a full water surface
pub const TANK_TOP_GAP: u16 = 20;

/// Interior span the water surface moves over, 0% to 100%
pub const WATER_PIXEL_HEIGHT: u16 = TANK_HEIGHT - TANK_TOP_GAP - TANK_WALL;

pub const INTERIOR_X: u16 = TANK_X + TANK_WALL;
pub const INTERIOR_WIDTH: u16 = TANK_WIDTH - 2 * TANK_WALL;

/// Offset of the water surface below the tank's top edge
///
/// An unknown level draws as an empty tank.
pub fn water_y(level: WaterLevel) -> u16 {
    let percent = match level {
        WaterLevel::Known(percent) => percent.min(FULL_PERCENT),
        WaterLevel::Unknown => 0,
    };
    (FULL_PERCENT - percent) as u16 * WATER_PIXEL_HEIGHT / FULL_PERCENT as u16 + TANK_TOP_GAP
}

/// Top-left corner of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
}

pub const TIME: Anchor = Anchor { x: 8, y: 7 };
pub const LEVEL: Anchor = Anchor { x: 50, y: 76 };
/// Centre of the tank interior for a single 12x16 cell
pub const MARKER: Anchor = Anchor { x: 154, y: 248 };
pub const TIMESTAMP: Anchor = Anchor { x: 50, y: 408 };
pub const TEMPERATURE: Anchor = Anchor { x: 8, y: 432 };
pub const BATTERY: Anchor = Anchor { x: 164, y: 432 };
pub const SIGNAL: Anchor = Anchor { x: 4, y: 456 };
pub const MAINS: Anchor = Anchor { x: 84, y: 456 };
pub const PUMP: Anchor = Anchor { x: 200, y: 456 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_y_bounds() {
        assert_eq!(water_y(WaterLevel::Known(0)), WATER_PIXEL_HEIGHT + TANK_TOP_GAP);
        assert_eq!(water_y(WaterLevel::Known(100)), TANK_TOP_GAP);
        assert_eq!(water_y(WaterLevel::Known(50)), 156);
        assert_eq!(water_y(WaterLevel::Unknown), water_y(WaterLevel::Known(0)));
    }

    #[test]
    fn test_water_y_clamps_overfull() {
        assert_eq!(water_y(WaterLevel::Known(180)), TANK_TOP_GAP);
    }
}
