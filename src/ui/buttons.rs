//! GPIO button input with async debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - LEFT  - previous screen, or Cancel on the reset dialog
//!   - RIGHT - next screen, or OK on the reset dialog
//!
//! Each button is watched by its own task. The task only records debounced
//! levels and release edges in a [`ButtonLine`]; turning them into events
//! is left to the UI loop, which needs to see both buttons at once to tell
//! a combo from two single presses.

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::ui::edge_flags::{ButtonLine, EdgeFlags};
use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};

/// Shared by the two button tasks and the UI loop.
pub static BUTTONS: EdgeFlags = EdgeFlags::new();

/// Watch one button forever.
///
/// Waits for the pin to go low (pressed), debounces, marks the line as
/// pressed, then waits for release and latches the release edge.
pub async fn button_task(pin: AnyPin, name: &'static str, line: &'static ButtonLine) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }

        debug!("Button {}: down", name);
        line.press();

        btn.wait_for_rising_edge().await;
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        debug!("Button {}: up", name);
        line.release();
    }
}
