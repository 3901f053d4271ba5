//! What the screen should show, driven by button events and idle rotation.
//!
//! Hardware-free so the whole UI flow can be exercised on the host.

use crate::filters::FilterBank;
use crate::ui::button_logic::{ButtonEvent, ButtonInputStateMachine, ButtonSnapshot, ResetProgress};
use crate::ui::navigation::{should_auto_rotate, Screen};

/// Frame to render this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    Screen(Screen),
    /// Combo held; bar fills towards the threshold.
    ResetProgress { percent: u8 },
    /// Cancel (left) / OK (right) dialog.
    ResetConfirm,
}

pub struct UiController {
    buttons: ButtonInputStateMachine,
    screen: Screen,
    last_screen_change_ms: u64,
    rotate_interval_ms: u64,
}

impl UiController {
    pub fn new(long_press_ms: u64, rotate_interval_ms: u64, now_ms: u64) -> Self {
        Self {
            buttons: ButtonInputStateMachine::with_long_press_ms(long_press_ms),
            screen: Screen::Dashboard,
            last_screen_change_ms: now_ms,
            rotate_interval_ms,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn reset_progress(&self) -> ResetProgress {
        self.buttons.progress()
    }

    /// Feed one button snapshot and apply the resulting event.
    ///
    /// A confirmed reset clears `bank`; the returned event lets the caller
    /// log or persist around it.
    pub fn tick(
        &mut self,
        snapshot: ButtonSnapshot,
        now_ms: u64,
        bank: &mut FilterBank,
    ) -> ButtonEvent {
        let was_confirming = self.buttons.progress().reset_confirmation_ready;
        let event = self.buttons.process_event(snapshot, now_ms);

        match event {
            ButtonEvent::LeftReleased => self.screen = self.screen.prev(),
            ButtonEvent::RightReleased => self.screen = self.screen.next(),
            ButtonEvent::ResetConfirmed => {
                bank.reset_counters();
                self.screen = Screen::Dashboard;
            }
            // An early release leaves the user where they were.
            ButtonEvent::ResetCancelled if was_confirming => self.screen = Screen::Dashboard,
            ButtonEvent::None => {
                if should_auto_rotate(
                    now_ms,
                    self.last_screen_change_ms,
                    self.rotate_interval_ms,
                    self.buttons.is_showing_reset_flow(),
                ) {
                    self.screen = self.screen.next();
                    self.last_screen_change_ms = now_ms;
                }
                return event;
            }
            _ => {}
        }

        self.last_screen_change_ms = now_ms;
        event
    }

    pub fn view(&self) -> View {
        let progress = self.buttons.progress();
        if progress.reset_confirmation_ready {
            View::ResetConfirm
        } else if progress.showing_reset_progress {
            View::ResetProgress {
                percent: progress.progress_percent,
            }
        } else {
            View::Screen(self.screen)
        }
    }
}
