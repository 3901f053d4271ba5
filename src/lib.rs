//! Test-only library interface for filter-monitor.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib` or `cargo test --test integration`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod filters;

// Internal module paths for the actual implementations
#[path = "ui/button_logic.rs"]
mod ui_button_logic_impl;
#[path = "ui/controller.rs"]
mod ui_controller_impl;
#[path = "ui/edge_flags.rs"]
mod ui_edge_flags_impl;
#[path = "ui/navigation.rs"]
mod ui_navigation_impl;

pub mod ui {
    pub mod button_logic {
        pub use crate::ui_button_logic_impl::*;
    }
    pub mod controller {
        pub use crate::ui_controller_impl::*;
    }
    pub mod edge_flags {
        pub use crate::ui_edge_flags_impl::*;
    }
    pub mod navigation {
        pub use crate::ui_navigation_impl::*;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
