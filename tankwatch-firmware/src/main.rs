//! Tankwatch - Remote Water Tank Monitor Firmware
//!
//! Drives the TFT status panel on an RP2040 board. Everything runs from a
//! single cooperative loop; the only interrupt work is the SysTick tick,
//! which advances the clock and the backlight PWM.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tankwatch_core::config::DeviceSettings;
use tankwatch_core::power::PowerMonitor;
use tankwatch_core::status::{StatusReport, WaterLevel};
use tankwatch_core::time::{TickService, TICKS_PER_SECOND};
use tankwatch_display::backlight::{Backlight, BacklightLevel};
use tankwatch_display::hxd8357d::{DriverConfig, DriverState, Hxd8357d};
use tankwatch_display::WaterLevelScreen;
use tankwatch_hal::spi::{BitOrder, ClockDivider, Mode, Role, SpiOptions};
use tankwatch_hal_rp2040::spi::spi_config;
use tankwatch_hal_rp2040::{Rp2040FlashStorage, Rp2040SpiTransport, RpInput, RpOutput, SysTickTimer};

mod channels;

use channels::{LEVEL_READING, NETWORK_TIME, STATUS_UPDATE};

/// Seconds between loop cadence reports
const CADENCE_REPORT_SECONDS: u32 = 60;

/// Byte completion polls before the panel transport is declared stalled
const COMPLETION_POLL_LIMIT: u32 = 10_000;

/// The firmware clock, advanced from the SysTick exception
static CLOCK: TickService = TickService::new(TICKS_PER_SECOND);

static BACKLIGHT: StaticCell<Backlight<RpOutput<'static>>> = StaticCell::new();

#[cortex_m_rt::exception]
fn SysTick() {
    CLOCK.on_tick();
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tankwatch firmware starting...");

    let p = embassy_rp::init(Default::default());
    let core = unwrap!(cortex_m::Peripherals::take());

    // Settings, and the time persisted by an orderly restart
    let mut flash = Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0);
    let mut settings = DeviceSettings::load(&mut flash).await;
    let last_shutdown = settings.last_shutdown();
    if last_shutdown.is_some() {
        // A later power cut must read as a hardware restart
        settings.last_shutdown_seconds = 0;
        if let Err(e) = settings.save(&mut flash).await {
            warn!("Failed to clear shutdown time: {:?}", e);
        }
    }

    // Backlight PWM runs from the tick
    let backlight: &'static Backlight<RpOutput<'static>> = BACKLIGHT.init(Backlight::new(
        RpOutput(Output::new(p.PIN_22, Level::Low)),
        BacklightLevel::OFF,
    ));
    if let Err(e) = CLOCK.register(backlight) {
        warn!("Backlight not registered: {:?}", e);
    }

    let mut timer = SysTickTimer::new(core.SYST);
    let reboot = CLOCK.initialize(&mut timer, last_shutdown);
    info!("Restarted by {:?}", reboot);

    // Panel on SPI0: SCK 18, MOSI 19, MISO 16, select 17
    let options = SpiOptions::with_mode(Role::Master, ClockDivider::Div4, Mode::Mode0, BitOrder::MsbFirst);
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config(&options));
    let transport = Rp2040SpiTransport::new(spi, Output::new(p.PIN_17, Level::High));

    let config = DriverConfig {
        completion_poll_limit: Some(COMPLETION_POLL_LIMIT),
        ..DriverConfig::default()
    };
    let mut display = Hxd8357d::new(
        transport,
        RpOutput(Output::new(p.PIN_21, Level::High)),
        RpOutput(Output::new(p.PIN_20, Level::High)),
        Delay,
        &CLOCK,
        config,
    );

    let mut power = PowerMonitor::new(
        RpInput(Input::new(p.PIN_26, Pull::None)),
        RpInput(Input::new(p.PIN_27, Pull::Up)),
        &CLOCK,
    );

    let mut screen = WaterLevelScreen::new(backlight, &settings);
    let mut status = StatusReport::default();
    let mut last_cadence_report = 0;
    let mut diagnosed = false;
    let reboot_after = settings.reboot_interval_minutes as u32 * 60;

    info!("Entering main loop");

    loop {
        CLOCK.task();

        if let Some(update) = STATUS_UPDATE.try_take() {
            status = StatusReport {
                water_level: status.water_level,
                level_timestamp: status.level_timestamp,
                mains_on: status.mains_on,
                pump_on: status.pump_on,
                ..update
            };
        }

        if let Some(raw) = LEVEL_READING.try_take() {
            status.water_level = WaterLevel::from_raw(raw);
            status.level_timestamp = Some(CLOCK.now());
        }

        // Step the clock only while no drawing deadline is running
        if display.state() == DriverState::Idle {
            if let Some(epoch) = NETWORK_TIME.try_take() {
                CLOCK.set_adjustment(epoch);
                CLOCK.apply_pending_adjustment();
                power.resync(&CLOCK);
            }
        }

        power.task(&CLOCK);
        status.mains_on = power.mains_on();
        status.pump_on = power.pump_on();

        screen.update(CLOCK.now(), &status);
        display.task(&mut screen);

        // Diagnose once the first full paint is on the panel
        if !diagnosed && display.state() == DriverState::Idle && screen.is_settled() {
            match display.read_self_diagnostic() {
                Ok(result) => info!("Panel self-diagnostic: {=u8:#x}", result),
                Err(e) => warn!("Panel self-diagnostic failed: {:?}", e),
            }
            diagnosed = true;
        }

        if let Some(fault) = display.take_fault() {
            warn!("Display fault: {:?}", fault);
        }
        if display.state() == DriverState::Faulted {
            warn!("Restarting display");
            display.reset();
            screen.redraw_all();
            diagnosed = false;
        }

        let uptime = CLOCK.uptime();
        if uptime >= last_cadence_report + CADENCE_REPORT_SECONDS {
            let range = CLOCK.task_tick_range();
            info!(
                "Up {}s since {:?} restart, loop ticks min {} max {}",
                uptime,
                CLOCK.last_reboot(),
                range.min,
                range.max
            );
            CLOCK.reset_task_tick_range();
            last_cadence_report = uptime;
        }

        if reboot_after > 0 && uptime >= reboot_after {
            restart(&mut flash, &mut settings).await;
        }

        yield_now().await;
    }
}

/// Persist the shutdown time and reset the chip
async fn restart(flash: &mut Rp2040FlashStorage<'_>, settings: &mut DeviceSettings) {
    settings.last_shutdown_seconds = CLOCK.shutdown_timestamp();
    info!("Scheduled restart at {}s", settings.last_shutdown_seconds);
    if let Err(e) = settings.save(flash).await {
        warn!("Failed to persist shutdown time: {:?}", e);
    }
    cortex_m::peripheral::SCB::sys_reset();
}
