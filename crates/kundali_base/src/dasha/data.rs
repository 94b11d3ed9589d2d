//! Fixed Vimshottari tables.

use crate::graha::Graha;

/// Length of the full cycle in years.
pub const TOTAL_YEARS: f64 = 120.0;

/// Cycle order of the nine rulers.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Period of each ruler in years, parallel to [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Cycle position of the ruler of nakshatra `nakshatra_index` (0..26).
///
/// Ashwini, Magha and Mula open the three rounds of the cycle.
pub const fn nakshatra_lord_position(nakshatra_index: u8) -> usize {
    (nakshatra_index % 9) as usize
}

/// Ruler of a nakshatra.
pub const fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[nakshatra_lord_position(nakshatra_index)]
}

/// Position of `graha` in the cycle.
pub fn sequence_position(graha: Graha) -> Option<usize> {
    VIMSHOTTARI_SEQUENCE.iter().position(|g| *g == graha)
}
