//! Persisted configuration
//!
//! Settings live in a single flash slot, serialized with postcard and
//! guarded by a magic number, a version byte and a CRC32.

mod settings;

pub use settings::{
    ConfigError, DeviceSettings, MAX_BRIGHTNESS, MAX_SETTINGS_SIZE, SETTINGS_MAGIC,
    SETTINGS_VERSION,
};
