//! filter-monitor firmware entry point.
//!
//! Boot sequence:
//!   1. Initialise the nRF52840 peripherals
//!   2. Spawn one debounce task per button
//!   3. Bring up the SSD1306 over TWIM0
//!   4. Run the UI poll loop: snapshot buttons, step the controller,
//!      render the current view

#![no_std]
#![no_main]

mod config;
mod error;
mod filters;
mod ui;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use crate::filters::FilterBank;
use crate::ui::button_logic::ButtonEvent;
use crate::ui::buttons::BUTTONS;
use crate::ui::controller::UiController;
use crate::ui::edge_flags::ButtonLine;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::task(pool_size = 2)]
async fn button(pin: AnyPin, name: &'static str, line: &'static ButtonLine) {
    ui::buttons::button_task(pin, name, line).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("filter-monitor starting");

    spawner.must_spawn(button(p.P0_11.degrade(), "LEFT", &BUTTONS.left));
    spawner.must_spawn(button(p.P0_12.degrade(), "RIGHT", &BUTTONS.right));

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);

    // Keep running without a panel; the buttons and counters still work.
    let mut display = match ui::display::init(i2c) {
        Ok(display) => Some(display),
        Err(e) => {
            error!("Display init failed: {}", e);
            None
        }
    };

    let mut bank = FilterBank::new();
    info!(
        "Usage {} L, worst filter status {}",
        bank.total_water_liters,
        bank.worst_status()
    );

    let mut controller = UiController::new(
        config::LONG_PRESS_MS,
        config::SCREEN_ROTATE_INTERVAL_MS,
        Instant::now().as_millis(),
    );
    let mut ticker = Ticker::every(Duration::from_millis(config::POLL_INTERVAL_MS));

    loop {
        let snapshot = BUTTONS.take_snapshot();
        let event = controller.tick(snapshot, Instant::now().as_millis(), &mut bank);

        match event {
            ButtonEvent::None | ButtonEvent::ResetProgressUpdated => {}
            ButtonEvent::ResetConfirmed => warn!("Usage counters reset"),
            other => info!("UI: {} -> {}", other, controller.view()),
        }

        if let Some(display) = display.as_mut() {
            if let Err(e) = ui::display::render(display, controller.view(), &bank) {
                error!("Display: {}", e);
            }
        }

        ticker.next().await;
    }
}
