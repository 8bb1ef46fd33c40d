//! Sector layout: life-palace resolution and the rotated palace ring.
//!
//! The birth slot fixes which canonical palace leads the chart; the other 11
//! follow in canonical cycle order. Rotation preserves adjacency, which
//! renderers drawing relationships between fixed palace pairs rely on.

use ziwei_base::hour::TimeSlot;
use ziwei_base::palace::{ALL_PALACES, Palace};

/// Canonical palace index promoted to Life position for a birth slot.
///
/// Pure table lookup, value in `[0, 12)`.
pub const fn life_palace_index(slot: TimeSlot) -> u8 {
    slot.life_palace_index()
}

/// The 12 palaces rotated so `ALL_PALACES[life_index]` comes first:
/// `ring[i] = ALL_PALACES[(life_index + i) mod 12]`.
pub fn palace_ring(life_index: u8) -> [Palace; 12] {
    std::array::from_fn(|i| ALL_PALACES[(life_index as usize + i) % 12])
}
