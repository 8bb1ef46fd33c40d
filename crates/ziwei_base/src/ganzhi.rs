//! Sexagenary cycle: the 10 heavenly stems and 12 earthly branches.
//!
//! The simplified pillar formulas used here are the ones from the original
//! calculator: year stem/branch anchor at CE 4 (so 1984 is 甲子), the month
//! stem folds the year into a 5-cycle, and the month branch starts the year
//! at 寅. The year branch doubles as the zodiac year-sign via
//! [`EarthlyBranch::animal`].
//!
//! All cycle arithmetic is `rem_euclid`, so negative (pre-CE) years and
//! negative intermediates resolve to the correct table entry.

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_HEAVENLY_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Chinese name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index in the cycle (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }
}

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
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

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_EARTHLY_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Chinese name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal sharing this branch's cycle position.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "鼠",
            Self::Chou => "牛",
            Self::Yin => "虎",
            Self::Mao => "兔",
            Self::Chen => "龙",
            Self::Si => "蛇",
            Self::Wu => "马",
            Self::Wei => "羊",
            Self::Shen => "猴",
            Self::You => "鸡",
            Self::Xu => "狗",
            Self::Hai => "猪",
        }
    }

    /// 0-based index in the cycle (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
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
}

/// Heavenly stem of a CE year: `stems[(year - 4) mod 10]`.
pub fn year_stem(year: i32) -> HeavenlyStem {
    ALL_HEAVENLY_STEMS[(year - 4).rem_euclid(10) as usize]
}

/// Earthly branch of a CE year: `branches[(year - 4) mod 12]`.
///
/// The branch's [`EarthlyBranch::animal`] is the year-sign used in the
/// fortune narrative.
pub fn year_branch(year: i32) -> EarthlyBranch {
    ALL_EARTHLY_BRANCHES[(year - 4).rem_euclid(12) as usize]
}

/// Heavenly stem of a month: `stems[((year mod 5) * 2 + month) mod 10]`.
pub fn month_stem(year: i32, month: u8) -> HeavenlyStem {
    let idx = (year.rem_euclid(5) * 2 + i32::from(month)).rem_euclid(10);
    ALL_HEAVENLY_STEMS[idx as usize]
}

/// Earthly branch of a month: `branches[(month + 1) mod 12]`.
///
/// Month 1 maps to 寅, the traditional start of the cycle year.
pub fn month_branch(month: u8) -> EarthlyBranch {
    ALL_EARTHLY_BRANCHES[(usize::from(month) + 1) % 12]
}
