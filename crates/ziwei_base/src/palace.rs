//! The 12 palaces (life domains) of the destiny chart.
//!
//! The palaces form a fixed cycle starting from the Life palace. The cycle
//! order is semantically meaningful: a chart is always a rotation of this
//! list, so adjacency between palaces is preserved no matter which palace
//! the birth hour promotes to first position.

/// The 12 palaces in canonical cyclic order (Life first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palace {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All 12 palaces in cycle order (index 0 = Life, 11 = Parents).
pub const ALL_PALACES: [Palace; 12] = [
    Palace::Life,
    Palace::Siblings,
    Palace::Spouse,
    Palace::Children,
    Palace::Wealth,
    Palace::Health,
    Palace::Travel,
    Palace::Friends,
    Palace::Career,
    Palace::Property,
    Palace::Fortune,
    Palace::Parents,
];

impl Palace {
    /// Chinese name of the palace, as rendered on charts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "事业",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// English name of the palace.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Fortune => "Fortune",
            Self::Parents => "Parents",
        }
    }

    /// 0-based index in the canonical cycle (Life=0 .. Parents=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Life => 0,
            Self::Siblings => 1,
            Self::Spouse => 2,
            Self::Children => 3,
            Self::Wealth => 4,
            Self::Health => 5,
            Self::Travel => 6,
            Self::Friends => 7,
            Self::Career => 8,
            Self::Property => 9,
            Self::Fortune => 10,
            Self::Parents => 11,
        }
    }

    /// All 12 palaces in cycle order.
    pub const fn all() -> &'static [Palace; 12] {
        &ALL_PALACES
    }
}
