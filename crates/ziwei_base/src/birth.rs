//! Birth input value types.
//!
//! The engine assumes date and gender were validated by the caller; only the
//! time slot has a rejection path, and that happens at parse time in
//! [`crate::hour::TimeSlot::from_key`]. A constructed [`BirthInput`] is
//! therefore always valid.

use crate::hour::TimeSlot;

/// A calendar birth date. Not range-checked here; callers validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    /// CE year (may be negative for pre-CE dates).
    pub year: i32,
    /// Month 1-12.
    pub month: u8,
    /// Day of month 1-31.
    pub day: u8,
}

impl BirthDate {
    /// Create a birth date.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Display label in the chart's format, e.g. "2024年5月1日".
    pub fn label(&self) -> String {
        format!("{}年{}月{}日", self.year, self.month, self.day)
    }
}

/// Binary gender as captured by the birth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Chinese label used in the narrative ("男"/"女").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// Parse the form value ("male"/"female"). Callers own gender
    /// validation, so this is an `Option`, not a `ChartError`.
    pub fn from_key(key: &str) -> Option<Gender> {
        match key {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Validated birth inputs for one chart generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthInput {
    /// Calendar birth date.
    pub date: BirthDate,
    /// Two-hour birth slot; valid by construction.
    pub time_slot: TimeSlot,
    /// Gender.
    pub gender: Gender,
}

impl BirthInput {
    /// Bundle validated inputs.
    pub const fn new(date: BirthDate, time_slot: TimeSlot, gender: Gender) -> Self {
        Self {
            date,
            time_slot,
            gender,
        }
    }
}
