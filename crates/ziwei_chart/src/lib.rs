//! Destiny-chart generation engine.
//!
//! Maps validated birth inputs (date, two-hour time slot, gender) to a fully
//! populated 12-sector chart plus a short fortune narrative. The computation
//! is pure and stateless: the only capability it consumes is an explicit
//! `rand::Rng`, injected by the caller, so a fixed seed reproduces a chart
//! exactly. Star placement is randomized by design (this is a toy
//! calculator, not the canonical placement method).
//!
//! Rendering, input capture, and persistence live with callers; this crate
//! only produces the chart structure and text.

pub mod chart;
pub mod layout;
pub mod narrative;
pub mod placement;

pub use chart::{
    Chart, ChartReport, Sector, cast, describe_chart, generate_chart, generate_chart_for_key,
};
pub use layout::{life_palace_index, palace_ring};
pub use narrative::fortune_text;
pub use placement::{MINOR_COUNT_MAX, MINOR_COUNT_MIN, assign_stars};
