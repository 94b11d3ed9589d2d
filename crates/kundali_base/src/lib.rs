//! Pure sidereal-astrology math for the kundali engine.
//!
//! Nothing in this crate talks to an ephemeris. Inputs are longitudes in
//! degrees and Julian Days in UT; outputs are plain data.
//!
//! - [`ayanamsa`]: ayanamsa standards, selection, formula values, tropical -> sidereal
//! - [`rashi`], [`nakshatra`], [`placement`]: sign / nakshatra / pada resolution
//! - [`varga`]: divisional chart sign mapping (D1, D2, D3, D7, D9, D12, D30)
//! - [`dasha`]: the Vimshottari period tree
//! - [`bala`]: Dig Bala and Sthana Bala
//! - [`relationship`]: dignity tables used by Sthana Bala

pub mod ayanamsa;
pub mod bala;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod placement;
pub mod rashi;
pub mod relationship;
pub mod util;
pub mod varga;

pub use ayanamsa::{
    ALL_STANDARDS, AyanamsaSelection, AyanamsaStandard, CustomAyanamsa, formula_ayanamsa_deg,
    general_precession_longitude_deg, nutation_longitude_arcsec, to_sidereal,
};
pub use bala::{BalaReport, DigBala, GrahaBala, SthanaBala, dig_bala, sthana_bala};
pub use dasha::{
    DEFAULT_DASHA_DEPTH, DashaBalance, DashaLevel, DashaPeriod, DashaTimeline, MAX_DASHA_DEPTH,
    active_periods, vimshottari_timeline,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Gender, Graha, SAPTA_GRAHAS, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use placement::{Placement, opposite, resolve, try_resolve, whole_sign_house};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude};
pub use relationship::{Dignity, dignity_in_sign};
pub use util::normalize_360;
pub use varga::{ALL_VARGAS, SAPTAVARGA, Varga, VargaPlacement, varga_placement, varga_sign_index};
