//! Unified error type for the firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! The button state machine itself has no failure path; only the
//! hardware collaborators can fail.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// The SSD1306 did not accept its initialisation sequence.
    DisplayInit,

    /// I²C transfer of the frame buffer to the display failed.
    Display,
}
