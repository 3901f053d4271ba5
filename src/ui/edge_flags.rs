//! Button level and release-edge flags shared between the GPIO tasks and
//! the UI poll loop.
//!
//! Writers call `press()` / `release()` from whatever context sees the pin
//! change; the UI loop reads everything once per tick into a
//! [`ButtonSnapshot`].

use core::sync::atomic::{AtomicBool, Ordering};

use crate::ui::button_logic::ButtonSnapshot;

/// State of one physical button.
pub struct ButtonLine {
    pressed: AtomicBool,
    released: AtomicBool,
}

impl ButtonLine {
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
            released: AtomicBool::new(false),
        }
    }

    /// Debounced press detected.
    pub fn press(&self) {
        self.pressed.store(true, Ordering::Release);
    }

    /// Debounced release detected. Latches the edge until consumed.
    pub fn release(&self) {
        self.pressed.store(false, Ordering::Release);
        self.released.store(true, Ordering::Release);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    pub fn release_pending(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Consume the release edge.
    pub fn take_release(&self) -> bool {
        self.released.swap(false, Ordering::AcqRel)
    }
}

impl Default for ButtonLine {
    fn default() -> Self {
        Self::new()
    }
}

/// Both buttons of the device.
pub struct EdgeFlags {
    pub left: ButtonLine,
    pub right: ButtonLine,
}

impl EdgeFlags {
    pub const fn new() -> Self {
        Self {
            left: ButtonLine::new(),
            right: ButtonLine::new(),
        }
    }

    /// Read levels and pending edges without consuming the edges.
    pub fn snapshot(&self) -> ButtonSnapshot {
        ButtonSnapshot {
            left_pressed: self.left.is_pressed(),
            right_pressed: self.right.is_pressed(),
            left_just_released: self.left.release_pending(),
            right_just_released: self.right.release_pending(),
        }
    }

    /// Read levels and consume pending edges.
    ///
    /// Edges are swapped out before the levels are read, so a release that
    /// lands in between shows up as a released level now and as an edge on
    /// the next tick.
    pub fn take_snapshot(&self) -> ButtonSnapshot {
        let left_just_released = self.left.take_release();
        let right_just_released = self.right.take_release();
        ButtonSnapshot {
            left_pressed: self.left.is_pressed(),
            right_pressed: self.right.is_pressed(),
            left_just_released,
            right_just_released,
        }
    }
}

impl Default for EdgeFlags {
    fn default() -> Self {
        Self::new()
    }
}
