//! Star distribution over the rotated sectors.
//!
//! Placement is randomized on purpose: the calculator never implemented the
//! canonical deterministic rules, and inventing them here would change
//! product behavior. Determinism is available to callers through the
//! injected `Rng` (a fixed seed replays the exact same placement).

use rand::Rng;
use rand::seq::SliceRandom;

use ziwei_base::star::{ALL_MAJOR_STARS, ALL_MINOR_STARS, Star};

use crate::chart::Sector;

/// Fewest minor stars placed in the Life sector.
pub const MINOR_COUNT_MIN: usize = 2;
/// Most minor stars placed in the Life sector.
pub const MINOR_COUNT_MAX: usize = 3;

/// Populate the rotated sectors: one shuffled major star per sector, then
/// 2-3 distinct minor stars appended to the Life sector (`sectors[0]`).
pub fn assign_stars<R: Rng>(sectors: &mut [Sector; 12], rng: &mut R) {
    assign_major_stars(sectors, rng);
    assign_minor_stars(sectors, rng);
}

/// Major pass: shuffle the 14 major stars and deal one per sector in order.
///
/// 14 stars over 12 sectors: the last two shuffled stars are placed nowhere.
/// That is accepted behavior, not a bug to fix.
pub fn assign_major_stars<R: Rng>(sectors: &mut [Sector; 12], rng: &mut R) {
    let mut majors = ALL_MAJOR_STARS;
    majors.shuffle(rng);
    for (sector, major) in sectors.iter_mut().zip(majors) {
        sector.stars.push(Star::Major(major));
    }
}

/// Minor pass: draw `k` uniformly from {2, 3}, pick `k` distinct minor
/// stars, and append them all to the Life sector. Other sectors never
/// receive minor stars.
pub fn assign_minor_stars<R: Rng>(sectors: &mut [Sector; 12], rng: &mut R) {
    let count = rng.gen_range(MINOR_COUNT_MIN..=MINOR_COUNT_MAX);
    for minor in ALL_MINOR_STARS.choose_multiple(rng, count) {
        sectors[0].stars.push(Star::Minor(*minor));
    }
}
