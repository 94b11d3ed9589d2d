//! Vimshottari timeline generation.

use kundali_time::DAYS_PER_YEAR;

use super::balance::birth_balance;
use super::data::{TOTAL_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, sequence_position};
use super::subperiod::subdivide;
use super::types::{DashaLevel, DashaPeriod, DashaTimeline, MAX_DASHA_DEPTH};
use crate::error::VedicError;

/// Remainders shorter than this (in years) do not open another Mahadasha.
const YEAR_EPSILON: f64 = 1e-9;

/// Build the 120-year timeline counted from `birth_jd`.
///
/// The first Mahadasha keeps its nominal calendar span (back-dated by the
/// elapsed years, running for the ruler's full years) but contributes only
/// the balance to the 120-year total. Later rulers follow from its nominal
/// end with their full years, the last one truncated to the remainder. A
/// zero balance (Moon at the very end of a nakshatra) emits no first period.
/// `depth` is 1 (Mahadasha only) through 3 (down to Pratyantardasha).
pub fn vimshottari_timeline(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    depth: u8,
) -> Result<DashaTimeline, VedicError> {
    if !(1..=MAX_DASHA_DEPTH).contains(&depth) {
        return Err(VedicError::Validation {
            field: "dasha_depth",
            reason: format!("{depth} not in 1..={MAX_DASHA_DEPTH}"),
        });
    }
    let balance = birth_balance(moon_sidereal_lon, birth_jd)?;
    let first_pos = sequence_position(balance.graha).ok_or_else(|| {
        VedicError::InvalidInput(format!("{:?} is not a Vimshottari ruler", balance.graha))
    })?;

    let n = VIMSHOTTARI_SEQUENCE.len();
    let mut mahadashas = Vec::with_capacity(n + 1);

    if balance.balance_years > YEAR_EPSILON {
        let mut first = DashaPeriod::new(
            balance.graha,
            DashaLevel::Mahadasha,
            balance.nominal_start_jd,
            balance.nominal_end_jd,
            balance.balance_years,
        );
        subdivide(&mut first, first_pos, depth - 1);
        mahadashas.push(first);
    }

    let mut remaining = TOTAL_YEARS - balance.balance_years;
    let mut cursor = balance.nominal_end_jd;
    let mut pos = (first_pos + 1) % n;

    while remaining > YEAR_EPSILON {
        let years = VIMSHOTTARI_YEARS[pos].min(remaining);
        let end = cursor + years * DAYS_PER_YEAR;
        let mut period = DashaPeriod::new(
            VIMSHOTTARI_SEQUENCE[pos],
            DashaLevel::Mahadasha,
            cursor,
            end,
            years,
        );
        subdivide(&mut period, pos, depth - 1);
        mahadashas.push(period);

        cursor = end;
        remaining -= years;
        pos = (pos + 1) % n;
    }

    Ok(DashaTimeline {
        birth_jd,
        depth,
        balance,
        mahadashas,
    })
}
