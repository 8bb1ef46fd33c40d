//! The major and minor stars placed into palaces.
//!
//! The two sets are disjoint by construction: 14 major stars and 13 minor
//! stars, each its own enum, unified by [`Star`] where a sector holds a
//! mixed sequence. Neither set carries an ordering invariant beyond
//! membership; placement order is decided by the engine.

/// The 14 major stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorStar {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
}

/// All 14 major stars in table order (index 0 = ZiWei).
pub const ALL_MAJOR_STARS: [MajorStar; 14] = [
    MajorStar::ZiWei,
    MajorStar::TianJi,
    MajorStar::TaiYang,
    MajorStar::WuQu,
    MajorStar::TianTong,
    MajorStar::LianZhen,
    MajorStar::TianFu,
    MajorStar::TaiYin,
    MajorStar::TanLang,
    MajorStar::JuMen,
    MajorStar::TianXiang,
    MajorStar::TianLiang,
    MajorStar::QiSha,
    MajorStar::PoJun,
];

impl MajorStar {
    /// Chinese name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
        }
    }

    /// 0-based index in table order (ZiWei=0 .. PoJun=13).
    pub const fn index(self) -> u8 {
        match self {
            Self::ZiWei => 0,
            Self::TianJi => 1,
            Self::TaiYang => 2,
            Self::WuQu => 3,
            Self::TianTong => 4,
            Self::LianZhen => 5,
            Self::TianFu => 6,
            Self::TaiYin => 7,
            Self::TanLang => 8,
            Self::JuMen => 9,
            Self::TianXiang => 10,
            Self::TianLiang => 11,
            Self::QiSha => 12,
            Self::PoJun => 13,
        }
    }
}

/// The 13 minor stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinorStar {
    WenChang,
    WenQu,
    ZuoFu,
    YouBi,
    TianKui,
    TianYue,
    LuCun,
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
}

/// All 13 minor stars in table order (index 0 = WenChang).
pub const ALL_MINOR_STARS: [MinorStar; 13] = [
    MinorStar::WenChang,
    MinorStar::WenQu,
    MinorStar::ZuoFu,
    MinorStar::YouBi,
    MinorStar::TianKui,
    MinorStar::TianYue,
    MinorStar::LuCun,
    MinorStar::QingYang,
    MinorStar::TuoLuo,
    MinorStar::HuoXing,
    MinorStar::LingXing,
    MinorStar::DiKong,
    MinorStar::DiJie,
];

impl MinorStar {
    /// Chinese name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
            Self::LuCun => "禄存",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
        }
    }

    /// 0-based index in table order (WenChang=0 .. DiJie=12).
    pub const fn index(self) -> u8 {
        match self {
            Self::WenChang => 0,
            Self::WenQu => 1,
            Self::ZuoFu => 2,
            Self::YouBi => 3,
            Self::TianKui => 4,
            Self::TianYue => 5,
            Self::LuCun => 6,
            Self::QingYang => 7,
            Self::TuoLuo => 8,
            Self::HuoXing => 9,
            Self::LingXing => 10,
            Self::DiKong => 11,
            Self::DiJie => 12,
        }
    }
}

/// A star as held by a sector: either major or minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    /// One of the 14 major stars.
    Major(MajorStar),
    /// One of the 13 minor stars.
    Minor(MinorStar),
}

impl Star {
    /// Chinese name of the underlying star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Major(s) => s.name(),
            Self::Minor(s) => s.name(),
        }
    }

    /// Whether this is one of the 14 major stars.
    pub const fn is_major(self) -> bool {
        matches!(self, Self::Major(_))
    }
}
