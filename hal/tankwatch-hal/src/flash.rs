//! Persistent settings storage
//!
//! The only record kept across restarts is the device settings blob. A
//! chip HAL maps it onto a reserved flash range; wear levelling and record
//! integrity belong to that implementation.

use core::future::Future;

/// Identifies a record in settings storage
///
/// Stored as a single byte, so adding a record never moves an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Postcard-encoded `DeviceSettings`
    DeviceSettings = 0,
}

impl StorageKey {
    /// On-flash tag
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode an on-flash tag. Unknown tags come from a newer layout.
    pub fn from_u8(tag: u8) -> Option<Self> {
        (tag == StorageKey::DeviceSettings as u8).then_some(StorageKey::DeviceSettings)
    }
}

/// Why a settings read or write did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// The flash peripheral rejected an erase, program or read
    Flash,
    /// The record layer found the range unusable
    Storage,
    /// No record exists for the key
    NotFound,
    /// The record does not fit the caller's buffer
    BufferTooSmall,
}

/// Keyed record store backed by flash
pub trait FlashStorage {
    /// Copy the record for `key` into `buffer`, returning its length
    fn read(
        &mut self,
        key: StorageKey,
        buffer: &mut [u8],
    ) -> impl Future<Output = Result<usize, FlashError>>;

    /// Replace the record for `key`
    fn write(&mut self, key: StorageKey, data: &[u8])
        -> impl Future<Output = Result<(), FlashError>>;
}

#[cfg(feature = "sequential-storage")]
mod map_key {
    use super::StorageKey;
    use sequential_storage::map::{Key, SerializationError};

    impl Key for StorageKey {
        fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
            let slot = buffer
                .first_mut()
                .ok_or(SerializationError::BufferTooSmall)?;
            *slot = self.as_u8();
            Ok(1)
        }

        fn deserialize_from(buffer: &[u8]) -> Result<(Self, usize), SerializationError> {
            let tag = *buffer.first().ok_or(SerializationError::BufferTooSmall)?;
            let key = StorageKey::from_u8(tag).ok_or(SerializationError::InvalidFormat)?;
            Ok((key, 1))
        }
    }
}
