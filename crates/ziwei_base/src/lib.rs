//! Reference data and value types for the Zi Wei destiny-chart engine.
//!
//! This crate holds the fixed tables the engine computes over:
//! - the 12 palaces in canonical cyclic order
//! - the 14 major and 13 minor stars
//! - the 12 two-hour time slots and their life-palace offsets
//! - the sexagenary (stem/branch) cycle used for year and month pillars
//!
//! All tables are the common published Zi Wei Dou Shu name lists; no
//! computation here goes beyond table lookup and cycle arithmetic.

pub mod birth;
pub mod error;
pub mod ganzhi;
pub mod hour;
pub mod palace;
pub mod star;

pub use birth::{BirthDate, BirthInput, Gender};
pub use error::ChartError;
pub use ganzhi::{
    ALL_EARTHLY_BRANCHES, ALL_HEAVENLY_STEMS, EarthlyBranch, HeavenlyStem, month_branch,
    month_stem, year_branch, year_stem,
};
pub use hour::{ALL_TIME_SLOTS, TimeSlot};
pub use palace::{ALL_PALACES, Palace};
pub use star::{ALL_MAJOR_STARS, ALL_MINOR_STARS, MajorStar, MinorStar, Star};
