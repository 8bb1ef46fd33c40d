//! The 12 two-hour birth time slots and their life-palace offsets.
//!
//! Each slot is named after its earthly branch (子时 covers 23:00-01:00 and
//! so on around the clock) and carries the fixed offset deciding which
//! canonical palace becomes the Life palace for a birth in that slot. The
//! offset table is a pure lookup; no date arithmetic is involved.

use crate::error::ChartError;
use crate::ganzhi::EarthlyBranch;

/// The 12 two-hour time slots, named after their earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 slots in clock order (index 0 = Zi, 23:00-01:00).
pub const ALL_TIME_SLOTS: [TimeSlot; 12] = [
    TimeSlot::Zi,
    TimeSlot::Chou,
    TimeSlot::Yin,
    TimeSlot::Mao,
    TimeSlot::Chen,
    TimeSlot::Si,
    TimeSlot::Wu,
    TimeSlot::Wei,
    TimeSlot::Shen,
    TimeSlot::You,
    TimeSlot::Xu,
    TimeSlot::Hai,
];

impl TimeSlot {
    /// Form key of the slot, e.g. `"23-1"` for 子时.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Zi => "23-1",
            Self::Chou => "1-3",
            Self::Yin => "3-5",
            Self::Mao => "5-7",
            Self::Chen => "7-9",
            Self::Si => "9-11",
            Self::Wu => "11-13",
            Self::Wei => "13-15",
            Self::Shen => "15-17",
            Self::You => "17-19",
            Self::Xu => "19-21",
            Self::Hai => "21-23",
        }
    }

    /// Chinese name of the slot (branch + 时).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子时",
            Self::Chou => "丑时",
            Self::Yin => "寅时",
            Self::Mao => "卯时",
            Self::Chen => "辰时",
            Self::Si => "巳时",
            Self::Wu => "午时",
            Self::Wei => "未时",
            Self::Shen => "申时",
            Self::You => "酉时",
            Self::Xu => "戌时",
            Self::Hai => "亥时",
        }
    }

    /// Start and end clock hours of the slot (the Zi slot wraps midnight).
    pub const fn hour_range(self) -> (u8, u8) {
        match self {
            Self::Zi => (23, 1),
            Self::Chou => (1, 3),
            Self::Yin => (3, 5),
            Self::Mao => (5, 7),
            Self::Chen => (7, 9),
            Self::Si => (9, 11),
            Self::Wu => (11, 13),
            Self::Wei => (13, 15),
            Self::Shen => (15, 17),
            Self::You => (17, 19),
            Self::Xu => (19, 21),
            Self::Hai => (21, 23),
        }
    }

    /// The earthly branch this slot is named after.
    pub const fn branch(self) -> EarthlyBranch {
        match self {
            Self::Zi => EarthlyBranch::Zi,
            Self::Chou => EarthlyBranch::Chou,
            Self::Yin => EarthlyBranch::Yin,
            Self::Mao => EarthlyBranch::Mao,
            Self::Chen => EarthlyBranch::Chen,
            Self::Si => EarthlyBranch::Si,
            Self::Wu => EarthlyBranch::Wu,
            Self::Wei => EarthlyBranch::Wei,
            Self::Shen => EarthlyBranch::Shen,
            Self::You => EarthlyBranch::You,
            Self::Xu => EarthlyBranch::Xu,
            Self::Hai => EarthlyBranch::Hai,
        }
    }

    /// Fixed slot-to-offset table: which canonical palace index becomes the
    /// Life palace for a birth in this slot (子 -> 0 .. 亥 -> 11).
    pub const fn life_palace_index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// 0-based index in clock order (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self.life_palace_index()
    }

    /// All 12 slots in clock order.
    pub const fn all() -> &'static [TimeSlot; 12] {
        &ALL_TIME_SLOTS
    }

    /// Parse a form key ("23-1" .. "21-23") into a slot.
    ///
    /// Anything outside the 12 recognized keys is rejected; the engine never
    /// substitutes a default slot.
    pub fn from_key(key: &str) -> Result<TimeSlot, ChartError> {
        match key {
            "23-1" => Ok(Self::Zi),
            "1-3" => Ok(Self::Chou),
            "3-5" => Ok(Self::Yin),
            "5-7" => Ok(Self::Mao),
            "7-9" => Ok(Self::Chen),
            "9-11" => Ok(Self::Si),
            "11-13" => Ok(Self::Wu),
            "13-15" => Ok(Self::Wei),
            "15-17" => Ok(Self::Shen),
            "17-19" => Ok(Self::You),
            "19-21" => Ok(Self::Xu),
            "21-23" => Ok(Self::Hai),
            other => Err(ChartError::InvalidTimeSlot(other.to_string())),
        }
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}
