//! User interface subsystem - OLED display + physical buttons.
//!
//! The UI loop polls the two buttons every tick, runs the snapshot through
//! the button state machine, and renders the resulting view on the SSD1306
//! OLED.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 2 tactile switches with debouncing (LEFT, RIGHT)
//! - **Controller**: screen selection, idle rotation, counter reset flow

pub mod button_logic;
pub mod buttons;
pub mod controller;
pub mod display;
pub mod edge_flags;
pub mod navigation;
