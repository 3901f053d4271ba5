//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and UI thresholds
//! live here so they can be tuned in one place.

// Buttons

/// Both buttons must be held this long to arm the counter reset (ms).
pub const LONG_PRESS_MS: u64 = 3000;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// UI loop

/// Period of the UI poll loop (ms).
pub const POLL_INTERVAL_MS: u64 = 100;

/// Idle time before the next screen is shown automatically (ms).
pub const SCREEN_ROTATE_INTERVAL_MS: u64 = 8000;

// Display

/// SSD1306 7-bit I²C address.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

// Filters

/// Below this remaining percentage a filter must be replaced.
pub const FILTER_REPLACE_BELOW_PERCENT: u8 = 10;

/// Below this remaining percentage a filter is reported as low.
pub const FILTER_WARNING_BELOW_PERCENT: u8 = 20;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*` pins
// are picked in `main.rs`.  Adjust for your custom PCB.
//
//   Button LEFT   → P0.11   (previous screen / cancel)
//   Button RIGHT  → P0.12   (next screen / confirm)
//   I²C SDA       → P0.26
//   I²C SCL       → P0.27
