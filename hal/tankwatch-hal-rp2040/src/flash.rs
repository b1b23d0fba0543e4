//! Settings partition on the Pico's QSPI flash
//!
//! The last 64K of the 2MB part hold a sequential-storage map. Each
//! orderly restart rewrites the settings record, so the map's wear
//! levelling spreads those writes over the whole partition.

use core::ops::Range;

use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

use tankwatch_hal::flash::{FlashError, FlashStorage, StorageKey};

const FLASH_BYTES: usize = 2 * 1024 * 1024;
const PARTITION_BYTES: u32 = 64 * 1024;

/// Address range handed to the map
pub const SETTINGS_RANGE: Range<u32> = (FLASH_BYTES as u32 - PARTITION_BYTES)..FLASH_BYTES as u32;

/// Largest record the map is asked to move, framing included
const RECORD_SCRATCH: usize = 128;

/// Settings storage on the RP2040's boot flash
pub struct Rp2040FlashStorage<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_BYTES>,
}

impl<'d> Rp2040FlashStorage<'d> {
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }
}

impl FlashStorage for Rp2040FlashStorage<'_> {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        let mut scratch = [0u8; RECORD_SCRATCH];
        let record = map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut scratch,
            &key,
        )
        .await
        .map_err(|_| FlashError::Storage)?
        .ok_or(FlashError::NotFound)?;

        let target = buffer
            .get_mut(..record.len())
            .ok_or(FlashError::BufferTooSmall)?;
        target.copy_from_slice(record);
        Ok(record.len())
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        let mut scratch = [0u8; RECORD_SCRATCH];
        let result = map::store_item(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut scratch,
            &key,
            &data,
        )
        .await;

        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Settings record {:?} not stored", key);
            return Err(FlashError::Storage);
        }
        Ok(())
    }
}
