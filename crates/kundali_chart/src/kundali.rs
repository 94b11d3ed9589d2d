//! The request-level operation: everything for one birth in one call.

use std::collections::BTreeMap;
use std::thread;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use kundali_base::{AyanamsaSelection, BalaReport, DashaTimeline, Varga, vimshottari_timeline};
use kundali_config::KundaliConfig;
use kundali_ephem::EphemerisOracle;
use kundali_time::datetime_to_jd;

use crate::birth::BirthMoment;
use crate::chart::{ChartResult, build_chart};
use crate::divisional::{DivisionalPlacement, VargaChart, to_navamsa, to_varga_chart};
use crate::error::KundaliError;

/// Plain-data result of [`generate_kundali`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KundaliReport {
    pub birth: BirthMoment,
    pub tz_offset_hours: f64,
    pub chart: ChartResult,
    /// Navamsa (D9) placements.
    pub divisional_chart: DivisionalPlacement,
    pub vargas: BTreeMap<Varga, VargaChart>,
    pub dasha_timeline: DashaTimeline,
    pub transit_chart: ChartResult,
    pub bala: BalaReport,
}

/// Natal chart, navamsa, vargas, dasha timeline, transit chart and bala.
///
/// `tz_offset_hours` is east-positive and must fall in the configured range.
/// `transit` defaults to the current time. The natal and transit charts are
/// built concurrently. The dasha timeline is counted from the birth date
/// (0h UT), with the Moon taken at the birth instant.
pub fn generate_kundali<O: EphemerisOracle + ?Sized>(
    oracle: &O,
    birth: &BirthMoment,
    tz_offset_hours: f64,
    transit: Option<DateTime<Utc>>,
    selection: &AyanamsaSelection,
    config: &KundaliConfig,
) -> Result<KundaliReport, KundaliError> {
    config.validate()?;
    if !config.tz_offset_in_range(tz_offset_hours) {
        return Err(KundaliError::validation(
            "tz_offset_hours",
            format!(
                "{tz_offset_hours} not in [{}, {}]",
                config.tz_offset_min_hours, config.tz_offset_max_hours
            ),
        ));
    }

    let natal_jd = birth.jd_ut(tz_offset_hours)?;
    let transit_jd = datetime_to_jd(&transit.unwrap_or_else(Utc::now));
    debug!(natal_jd, transit_jd, selection = selection.name(), "generating kundali");

    let (chart, transit_chart) = thread::scope(|s| {
        let transit_task = s.spawn(|| build_chart(oracle, birth, selection, transit_jd));
        let natal = build_chart(oracle, birth, selection, natal_jd);
        let transit = transit_task
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (natal, transit)
    });
    let chart = chart?;
    let transit_chart = transit_chart?;

    let dasha_timeline =
        vimshottari_timeline(chart.moon_longitude()?, birth.date_jd()?, config.dasha_depth)?;
    let divisional_chart = to_navamsa(&chart);
    let vargas = config
        .vargas
        .iter()
        .map(|v| (*v, to_varga_chart(&chart, *v)))
        .collect();
    let bala = BalaReport::from_positions(
        chart
            .grahas
            .iter()
            .map(|(g, p)| (*g, p.placement.longitude, p.house)),
    );

    info!(
        natal_jd,
        dasha_ruler = dasha_timeline.balance.graha.english_name(),
        lagna = chart.ascendant.sign.name(),
        "kundali generated"
    );
    Ok(KundaliReport {
        birth: *birth,
        tz_offset_hours,
        chart,
        divisional_chart,
        vargas,
        dasha_timeline,
        transit_chart,
        bala,
    })
}
