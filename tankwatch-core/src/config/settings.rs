//! Device settings
//!
//! Scalars read by the display layer and the clock at start-up:
//! backlight brightness for mains and battery operation, the periodic
//! restart interval and the time persisted by the last orderly shutdown.

use serde::{Deserialize, Serialize};
use tankwatch_hal::{FlashError, FlashStorage, StorageKey};

/// Magic number to identify valid settings
pub const SETTINGS_MAGIC: u32 = 0x544E4B57; // "TNKW"

/// Current settings version
pub const SETTINGS_VERSION: u8 = 1;

/// Largest brightness value (backlight fully on)
pub const MAX_BRIGHTNESS: u8 = 10;

/// Maximum serialized settings size
pub const MAX_SETTINGS_SIZE: usize = 64;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Flash operation failed
    Storage(FlashError),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Bad magic, version or CRC
    Invalid,
}

impl From<FlashError> for ConfigError {
    fn from(e: FlashError) -> Self {
        ConfigError::Storage(e)
    }
}

/// Settings stored in flash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceSettings {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Backlight level while mains power is present (0-10)
    pub brightness_mains_on: u8,
    /// Backlight level while running from battery (0-10)
    pub brightness_mains_off: u8,
    /// Minutes between orderly restarts, 0 to disable
    pub reboot_interval_minutes: u16,
    /// Clock seconds persisted by the last orderly shutdown, 0 if none
    pub last_shutdown_seconds: u32,
    /// CRC32 checksum (calculated over every other field)
    pub crc: u32,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceSettings {
    /// Factory defaults
    pub const fn new() -> Self {
        Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            brightness_mains_on: MAX_BRIGHTNESS,
            brightness_mains_off: 3,
            reboot_interval_minutes: 0,
            last_shutdown_seconds: 0,
            crc: 0,
        }
    }

    /// Check if the data is valid (magic and version match)
    pub fn is_valid(&self) -> bool {
        self.magic == SETTINGS_MAGIC && self.version == SETTINGS_VERSION
    }

    /// Persisted shutdown time, if the last restart was orderly
    pub fn last_shutdown(&self) -> Option<u32> {
        match self.last_shutdown_seconds {
            0 => None,
            seconds => Some(seconds),
        }
    }

    /// Calculate CRC32 for the data (excluding the crc field itself)
    pub fn calculate_crc(&self) -> u32 {
        let mut crc: u32 = 0xFFFFFFFF;
        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version]);
        crc = crc32_update(crc, &[self.brightness_mains_on, self.brightness_mains_off]);
        crc = crc32_update(crc, &self.reboot_interval_minutes.to_le_bytes());
        crc = crc32_update(crc, &self.last_shutdown_seconds.to_le_bytes());
        !crc
    }

    /// Update the CRC field
    pub fn update_crc(&mut self) {
        self.crc = self.calculate_crc();
    }

    /// Verify the CRC is correct
    pub fn verify_crc(&self) -> bool {
        self.crc == self.calculate_crc()
    }

    /// Serialize into `buffer`, refreshing the CRC first
    pub fn to_bytes<'a>(&mut self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        self.update_crc();
        postcard::to_slice(self, buffer).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize and validate
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let settings: DeviceSettings =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        if !settings.is_valid() || !settings.verify_crc() {
            return Err(ConfigError::Invalid);
        }
        Ok(settings)
    }

    /// Load settings from flash
    ///
    /// Returns factory defaults if nothing is stored or the stored data
    /// does not validate.
    pub async fn load<S: FlashStorage>(storage: &mut S) -> Self {
        match Self::load_inner(storage).await {
            Ok(settings) => {
                #[cfg(feature = "defmt")]
                defmt::info!("Loaded settings from flash");
                settings
            }
            Err(ConfigError::Storage(FlashError::NotFound)) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("No settings in flash, using defaults");
                Self::new()
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Failed to load settings: {:?}, using defaults", _e);
                Self::new()
            }
        }
    }

    async fn load_inner<S: FlashStorage>(storage: &mut S) -> Result<Self, ConfigError> {
        let mut buffer = [0u8; MAX_SETTINGS_SIZE];
        let len = storage.read(StorageKey::DeviceSettings, &mut buffer).await?;
        Self::from_bytes(&buffer[..len])
    }

    /// Save settings to flash
    pub async fn save<S: FlashStorage>(&mut self, storage: &mut S) -> Result<(), ConfigError> {
        let mut buffer = [0u8; MAX_SETTINGS_SIZE];
        let bytes = self.to_bytes(&mut buffer)?;
        storage.write(StorageKey::DeviceSettings, bytes).await?;

        #[cfg(feature = "defmt")]
        defmt::info!("Saved settings to flash ({} bytes)", bytes.len());

        Ok(())
    }
}

/// Simple CRC32 update function (IEEE 802.3 polynomial)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB88320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}
