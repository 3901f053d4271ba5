//! Filter cartridge state and the water usage counter.
//!
//! The values live in RAM only. `reset_counters()` is what the confirmed
//! reset gesture ends up calling.

use crate::config::{FILTER_REPLACE_BELOW_PERCENT, FILTER_WARNING_BELOW_PERCENT};

/// Number of filter stages in the system.
pub const FILTER_COUNT: usize = 5;

/// Health bucket shown next to each filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterStatus {
    Ok,
    Warning,
    Replace,
}

impl FilterStatus {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage < FILTER_REPLACE_BELOW_PERCENT {
            FilterStatus::Replace
        } else if percentage < FILTER_WARNING_BELOW_PERCENT {
            FilterStatus::Warning
        } else {
            FilterStatus::Ok
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterStatus::Ok => "OK",
            FilterStatus::Warning => "LOW",
            FilterStatus::Replace => "REPLACE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterInfo {
    pub name: &'static str,
    /// Three-letter label for dashboard cards.
    pub short_name: &'static str,
    /// Remaining life, 0..=100.
    pub percentage: u8,
    pub time_left: &'static str,
}

impl FilterInfo {
    pub const fn new(
        name: &'static str,
        short_name: &'static str,
        percentage: u8,
        time_left: &'static str,
    ) -> Self {
        Self {
            name,
            short_name,
            percentage,
            time_left,
        }
    }

    pub fn status(&self) -> FilterStatus {
        FilterStatus::from_percentage(self.percentage)
    }
}

/// All filters plus the usage counter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterBank {
    pub filters: [FilterInfo; FILTER_COUNT],
    pub total_water_liters: u32,
}

impl FilterBank {
    pub const fn new() -> Self {
        Self {
            filters: [
                FilterInfo::new("PP1 FILTER", "PP1", 80, "2 months"),
                FilterInfo::new("PP2 FILTER", "PP2", 75, "2 months"),
                FilterInfo::new("CARBON", "CAR", 50, "1 month"),
                FilterInfo::new("MEMBRANE", "MEM", 60, "3 months"),
                FilterInfo::new("MINERALIZR", "MIN", 15, "2 weeks"),
            ],
            total_water_liters: 1234,
        }
    }

    pub fn get(&self, index: usize) -> Option<&FilterInfo> {
        self.filters.get(index)
    }

    /// Zero the usage counter and mark every cartridge as new.
    pub fn reset_counters(&mut self) {
        self.total_water_liters = 0;
        for filter in self.filters.iter_mut() {
            filter.percentage = 100;
            filter.time_left = "12 months";
        }
    }

    /// Worst status across all filters.
    pub fn worst_status(&self) -> FilterStatus {
        let mut worst = FilterStatus::Ok;
        for filter in &self.filters {
            match filter.status() {
                FilterStatus::Replace => return FilterStatus::Replace,
                FilterStatus::Warning => worst = FilterStatus::Warning,
                FilterStatus::Ok => {}
            }
        }
        worst
    }
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::new()
    }
}
