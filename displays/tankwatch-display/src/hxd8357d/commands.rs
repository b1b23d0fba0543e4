//! HXD8357D command set and bring-up tables

pub const SWRESET: u8 = 0x01;
pub const RDDSDR: u8 = 0x0F;
pub const SLPOUT: u8 = 0x11;
pub const DISPON: u8 = 0x29;
pub const CASET: u8 = 0x2A;
pub const PASET: u8 = 0x2B;
pub const RAMWR: u8 = 0x2C;
pub const TEON: u8 = 0x35;
pub const MADCTL: u8 = 0x36;
pub const COLMOD: u8 = 0x3A;
pub const TEARLINE: u8 = 0x44;
pub const SETOSC: u8 = 0xB0;
pub const SETPWR1: u8 = 0xB1;
pub const SETRGB: u8 = 0xB3;
pub const SETCYC: u8 = 0xB4;
pub const SETCOM: u8 = 0xB6;
pub const SETC: u8 = 0xB9;
pub const SETSTBA: u8 = 0xC0;
pub const SETPANEL: u8 = 0xCC;
pub const SETGAMMA: u8 = 0xE0;

/// Memory access control bits
pub mod madctl {
    /// Bottom to top
    pub const MY: u8 = 0x80;
    /// Right to left
    pub const MX: u8 = 0x40;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    /// Red-green-blue pixel order
    pub const RGB: u8 = 0x00;
}

/// Command byte followed by its parameters
pub struct Command {
    pub code: u8,
    pub params: &'static [u8],
}

/// Extended command unlock, sent after software reset
pub const UNLOCK: Command = Command {
    code: SETC,
    params: &[0xFF, 0x83, 0x57],
};

/// Panel configuration, sent once the extended commands are unlocked and
/// followed by the orientation. Values are specific to the Adafruit 3.5"
/// 320x480 breakout.
pub const CONFIGURE: [Command; 12] = [
    // RGB interface, SDO enabled
    Command { code: SETRGB, params: &[0x80, 0x00, 0x06, 0x06] },
    // VCOM -1.52V
    Command { code: SETCOM, params: &[0x25] },
    // Normal mode 70Hz, idle mode 55Hz
    Command { code: SETOSC, params: &[0x68] },
    // BGR, gate direction swapped
    Command { code: SETPANEL, params: &[0x05] },
    Command { code: SETPWR1, params: &[0x00, 0x15, 0x1C, 0x1C, 0x83, 0xAA] },
    Command { code: SETSTBA, params: &[0x50, 0x50, 0x01, 0x3C, 0x1E, 0x08] },
    Command { code: SETCYC, params: &[0x02, 0x40, 0x00, 0x2A, 0x2A, 0x0D, 0x78] },
    Command {
        code: SETGAMMA,
        params: &[
            0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08,
            0x09, 0x03, 0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27,
            0x1B, 0x08, 0x09, 0x03, 0x00, 0x01,
        ],
    },
    // 16 bits per pixel
    Command { code: COLMOD, params: &[0x55] },
    Command { code: MADCTL, params: &[madctl::MY | madctl::MX] },
    // Tearing effect off
    Command { code: TEON, params: &[0x00] },
    Command { code: TEARLINE, params: &[0x00, 0x02] },
];
