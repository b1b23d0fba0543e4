//! SysTick tick timer
//!
//! The embassy time driver runs on the RP2040 TIMER block, which leaves
//! the core's SysTick free for the firmware tick. The firmware's
//! `SysTick` exception handler calls the tick service.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use embassy_rp::clocks::clk_sys_freq;
use tankwatch_hal::TickTimer;

/// Largest SysTick reload value (24-bit counter)
const MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Periodic interrupt from the Cortex-M0+ SysTick
pub struct SysTickTimer {
    syst: SYST,
}

impl SysTickTimer {
    pub fn new(syst: SYST) -> Self {
        Self { syst }
    }
}

impl TickTimer for SysTickTimer {
    fn start(&mut self, ticks_per_second: u32) {
        let reload = (clk_sys_freq() / ticks_per_second.max(1))
            .saturating_sub(1)
            .min(MAX_RELOAD);

        #[cfg(feature = "defmt")]
        defmt::info!("SysTick at {} Hz (reload {})", ticks_per_second, reload);

        self.syst.set_clock_source(SystClkSource::Core);
        self.syst.set_reload(reload);
        self.syst.clear_current();
        self.syst.enable_interrupt();
        self.syst.enable_counter();
    }
}
