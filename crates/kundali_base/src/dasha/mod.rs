//! Vimshottari dasha: the 120-year planetary period tree.
//!
//! The Moon's nakshatra at birth picks the first ruling graha and how much
//! of its period is left. From there the nine grahas follow in a fixed cycle,
//! each period subdividing into nine children proportional to the same
//! year table, down to the requested depth.

pub mod balance;
pub mod data;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::birth_balance;
pub use data::{
    TOTAL_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, nakshatra_lord, sequence_position,
};
pub use query::{ActivePeriod, active_periods};
pub use subperiod::{proportional_children, snap_last_child_end, subdivide};
pub use types::{
    DEFAULT_DASHA_DEPTH, DashaBalance, DashaLevel, DashaPeriod, DashaTimeline, MAX_DASHA_DEPTH,
};
pub use vimshottari::vimshottari_timeline;
