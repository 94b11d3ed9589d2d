//! Which periods are running at a given instant.

use serde::Serialize;

use super::types::{DashaLevel, DashaPeriod, DashaTimeline};
use crate::graha::Graha;

/// A running period without its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivePeriod {
    pub graha: Graha,
    pub level: DashaLevel,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl From<&DashaPeriod> for ActivePeriod {
    fn from(p: &DashaPeriod) -> Self {
        Self {
            graha: p.graha,
            level: p.level,
            start_jd: p.start_jd,
            end_jd: p.end_jd,
        }
    }
}

/// The chain of periods containing `jd`, Mahadasha first.
///
/// Empty when `jd` falls before the first period or after the cycle ends.
pub fn active_periods(timeline: &DashaTimeline, jd: f64) -> Vec<ActivePeriod> {
    let mut chain = Vec::with_capacity(timeline.depth as usize);
    let mut level: &[DashaPeriod] = &timeline.mahadashas;
    while let Some(p) = level.iter().find(|p| p.contains(jd)) {
        chain.push(ActivePeriod::from(p));
        level = &p.children;
    }
    chain
}
