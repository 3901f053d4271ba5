//! Screen cycling for the normal (non-reset) views.

/// Normal screens, in rotation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Overview card for every filter.
    Dashboard,
    Pp1,
    Pp2,
    Carbon,
    Membrane,
    Mineralizer,
    /// Total water used.
    Usage,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Dashboard,
        Screen::Pp1,
        Screen::Pp2,
        Screen::Carbon,
        Screen::Membrane,
        Screen::Mineralizer,
        Screen::Usage,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Move one screen forward, wrapping from Usage to Dashboard.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Move one screen back, wrapping from Dashboard to Usage.
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Index into the filter bank for per-filter screens.
    pub fn filter_index(self) -> Option<usize> {
        match self {
            Screen::Pp1 => Some(0),
            Screen::Pp2 => Some(1),
            Screen::Carbon => Some(2),
            Screen::Membrane => Some(3),
            Screen::Mineralizer => Some(4),
            Screen::Dashboard | Screen::Usage => None,
        }
    }
}

/// Decide whether the idle rotation should advance to the next screen.
pub fn should_auto_rotate(
    now_ms: u64,
    last_change_ms: u64,
    interval_ms: u64,
    in_reset_flow: bool,
) -> bool {
    if in_reset_flow {
        return false;
    }

    now_ms.saturating_sub(last_change_ms) > interval_ms
}
