//! Dual-button input state machine.
//!
//! Turns a per-tick snapshot of the two buttons into at most one semantic
//! event. Single releases navigate; holding both buttons arms the counter
//! reset, which is then confirmed (right) or cancelled (left) by a release
//! that is distinct from the forced release of the combo.
//!
//! ```text
//!  Idle ──both down──▶ ComboHolding ──held ≥ threshold──▶ ConfirmationPending
//!   ▲                      │ released early                    │ both up
//!   │◀─────── cancel ──────┘                                   ▼
//!   └──────────── left = cancel / right = confirm ─── ConfirmationScreen
//! ```
//!
//! Release-edge flags come from an asynchronous producer and may be seen
//! more than once. The confirmation screen only accepts an edge after one
//! tick with no release flags pending.

/// Default combo hold time before the reset is armed.
pub const DEFAULT_LONG_PRESS_MS: u64 = 3000;

/// Button levels and release edges observed since the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSnapshot {
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub left_just_released: bool,
    pub right_just_released: bool,
}

impl ButtonSnapshot {
    pub fn both_pressed(&self) -> bool {
        self.left_pressed && self.right_pressed
    }

    pub fn none_pressed(&self) -> bool {
        !self.left_pressed && !self.right_pressed
    }

    pub fn any_release_edge(&self) -> bool {
        self.left_just_released || self.right_just_released
    }
}

/// Semantic result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    None,
    LeftReleased,
    RightReleased,
    ResetProgressStarted,
    ResetProgressUpdated,
    ResetConfirmationReady,
    ResetCancelled,
    ResetConfirmed,
}

/// Observable reset-flow state for the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetProgress {
    pub showing_reset_progress: bool,
    pub showing_counter_reset: bool,
    pub reset_confirmation_ready: bool,
    pub progress_percent: u8,
}

/// Where the machine is in the combo/confirm protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not in the reset flow; releases navigate.
    Idle,
    /// Both buttons held since `started_ms`.
    ComboHolding { started_ms: u64, percent: u8 },
    /// Threshold reached, waiting for both buttons to come up.
    ConfirmationPending,
    /// Cancel/OK showing. While `draining`, release edges are residue of
    /// the forced release and are ignored.
    ConfirmationScreen { draining: bool },
}

pub struct ButtonInputStateMachine {
    phase: Phase,
    long_press_ms: u64,
}

impl ButtonInputStateMachine {
    pub fn new() -> Self {
        Self::with_long_press_ms(DEFAULT_LONG_PRESS_MS)
    }

    /// A zero threshold is raised to 1 ms.
    pub fn with_long_press_ms(long_press_ms: u64) -> Self {
        Self {
            phase: Phase::Idle,
            long_press_ms: long_press_ms.max(1),
        }
    }

    pub fn long_press_ms(&self) -> u64 {
        self.long_press_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return to Idle. The threshold is kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn progress(&self) -> ResetProgress {
        match self.phase {
            Phase::Idle => ResetProgress::default(),
            Phase::ComboHolding { percent, .. } => ResetProgress {
                showing_reset_progress: true,
                showing_counter_reset: true,
                reset_confirmation_ready: false,
                progress_percent: percent,
            },
            Phase::ConfirmationPending | Phase::ConfirmationScreen { .. } => ResetProgress {
                showing_reset_progress: false,
                showing_counter_reset: true,
                reset_confirmation_ready: true,
                progress_percent: 100,
            },
        }
    }

    pub fn is_showing_reset_flow(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// True when single releases mean previous/next screen.
    pub fn should_route_to_normal_navigation(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Advance one tick. `now_ms` must not go backwards.
    pub fn process_event(&mut self, buttons: ButtonSnapshot, now_ms: u64) -> ButtonEvent {
        let both = buttons.both_pressed();

        match self.phase {
            // Rising edge of the combo. A re-press on the confirmation
            // screen starts over.
            Phase::Idle | Phase::ConfirmationScreen { .. } if both => {
                self.phase = Phase::ComboHolding {
                    started_ms: now_ms,
                    percent: 0,
                };
                ButtonEvent::ResetProgressStarted
            }

            Phase::ComboHolding { started_ms, .. } if both => {
                let elapsed = now_ms.saturating_sub(started_ms);
                if elapsed >= self.long_press_ms {
                    self.phase = Phase::ConfirmationPending;
                    return ButtonEvent::ResetConfirmationReady;
                }
                self.phase = Phase::ComboHolding {
                    started_ms,
                    percent: percent_of(elapsed, self.long_press_ms),
                };
                ButtonEvent::ResetProgressUpdated
            }

            Phase::ComboHolding { .. } => {
                self.phase = Phase::Idle;
                ButtonEvent::ResetCancelled
            }

            Phase::ConfirmationPending if buttons.none_pressed() => {
                self.phase = Phase::ConfirmationScreen { draining: true };
                ButtonEvent::None
            }

            Phase::ConfirmationPending => ButtonEvent::None,

            Phase::ConfirmationScreen { draining } => {
                if draining && buttons.any_release_edge() {
                    return ButtonEvent::None;
                }
                if buttons.left_just_released {
                    self.phase = Phase::Idle;
                    ButtonEvent::ResetCancelled
                } else if buttons.right_just_released {
                    self.phase = Phase::Idle;
                    ButtonEvent::ResetConfirmed
                } else {
                    self.phase = Phase::ConfirmationScreen { draining: false };
                    ButtonEvent::None
                }
            }

            Phase::Idle => {
                if buttons.left_just_released {
                    ButtonEvent::LeftReleased
                } else if buttons.right_just_released {
                    ButtonEvent::RightReleased
                } else {
                    ButtonEvent::None
                }
            }
        }
    }
}

impl Default for ButtonInputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

fn percent_of(elapsed_ms: u64, total_ms: u64) -> u8 {
    let pct = elapsed_ms.saturating_mul(100) / total_ms;
    pct.min(100) as u8
}
