//! Chart assembly and the single kundali operation.
//!
//! [`build_chart`] turns oracle output into a sidereal chart for one
//! instant. [`generate_kundali`] validates a request and produces the natal
//! chart, its navamsa and other vargas, the Vimshottari timeline, a transit
//! chart and bala, as plain serializable data.

pub mod birth;
pub mod chart;
pub mod divisional;
pub mod error;
pub mod kundali;

pub use birth::BirthMoment;
pub use chart::{ChartResult, GrahaPosition, HOUSE_SYSTEM, build_chart};
pub use divisional::{DivisionalPlacement, VargaChart, VargaGraha, to_navamsa, to_varga_chart};
pub use error::KundaliError;
pub use kundali::{KundaliReport, generate_kundali};
