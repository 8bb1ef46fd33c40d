//! Chart types and the public generation API.
//!
//! Every value here is built fresh per call and never mutated afterwards;
//! nothing persists between calls. The invariant carried by [`Chart`]: its
//! 12 sectors are always a rotation of the canonical palace cycle starting
//! at the index the birth slot resolves to.

use rand::Rng;

use ziwei_base::birth::{BirthDate, BirthInput, Gender};
use ziwei_base::error::ChartError;
use ziwei_base::hour::TimeSlot;
use ziwei_base::palace::Palace;
use ziwei_base::star::Star;

use crate::layout;
use crate::narrative;
use crate::placement;

/// One chart position: a palace and the stars assigned to it.
///
/// Star order is assignment order, not display ranking; the sequence may be
/// empty before placement runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    /// The palace occupying this position.
    pub palace: Palace,
    /// Stars assigned to this position, in assignment order.
    pub stars: Vec<Star>,
}

impl Sector {
    /// A sector with no stars assigned yet.
    pub const fn empty(palace: Palace) -> Self {
        Self {
            palace,
            stars: Vec::new(),
        }
    }

    /// Chinese names of the assigned stars, in assignment order.
    pub fn star_names(&self) -> Vec<&'static str> {
        self.stars.iter().map(|s| s.name()).collect()
    }
}

/// A fully populated destiny chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    /// The 12 sectors, Life sector first, canonical cycle order preserved.
    pub sectors: [Sector; 12],
}

impl Chart {
    /// The Life sector: first in the rotated ordering, recipient of all
    /// minor-star assignments.
    pub fn life_sector(&self) -> &Sector {
        &self.sectors[0]
    }

    /// Find the sector holding a given palace.
    pub fn sector(&self, palace: Palace) -> &Sector {
        // Every palace appears exactly once in the rotation.
        self.sectors
            .iter()
            .find(|s| s.palace == palace)
            .unwrap_or(&self.sectors[0])
    }
}

/// Full result of one casting, shaped like the calculator's output:
/// display labels, the chart, and the fortune narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartReport {
    /// Birth date label, e.g. "2024年5月1日".
    pub birth_date_label: String,
    /// The birth time slot.
    pub time_slot: TimeSlot,
    /// Gender label ("男"/"女").
    pub gender_label: &'static str,
    /// The populated chart.
    pub chart: Chart,
    /// The generated narrative.
    pub fortune_text: String,
}

/// Generate a populated chart for validated birth inputs.
///
/// Infallible: a typed [`BirthInput`] cannot carry an unrecognized slot.
/// Identical inputs and an identical random sequence yield an identical
/// chart.
pub fn generate_chart<R: Rng>(input: &BirthInput, rng: &mut R) -> Chart {
    let life_index = layout::life_palace_index(input.time_slot);
    let ring = layout::palace_ring(life_index);
    let mut sectors = ring.map(Sector::empty);
    placement::assign_stars(&mut sectors, rng);
    Chart { sectors }
}

/// String-keyed boundary: parse the slot key, then generate.
///
/// Fails with [`ChartError::InvalidTimeSlot`] before any computation; no
/// partial chart is ever produced.
pub fn generate_chart_for_key<R: Rng>(
    date: BirthDate,
    slot_key: &str,
    gender: Gender,
    rng: &mut R,
) -> Result<Chart, ChartError> {
    let time_slot = TimeSlot::from_key(slot_key)?;
    Ok(generate_chart(
        &BirthInput::new(date, time_slot, gender),
        rng,
    ))
}

/// Build the fortune narrative for a chart's Life sector.
///
/// Always succeeds for a well-formed chart.
pub fn describe_chart<R: Rng>(
    chart: &Chart,
    birth_year: i32,
    gender: Gender,
    rng: &mut R,
) -> String {
    narrative::fortune_text(chart.life_sector(), birth_year, gender, rng)
}

/// One-call casting: chart, narrative, and display labels together.
pub fn cast<R: Rng>(input: &BirthInput, rng: &mut R) -> ChartReport {
    let chart = generate_chart(input, rng);
    let fortune_text = describe_chart(&chart, input.date.year, input.gender, rng);
    ChartReport {
        birth_date_label: input.date.label(),
        time_slot: input.time_slot,
        gender_label: input.gender.label(),
        chart,
        fortune_text,
    }
}
