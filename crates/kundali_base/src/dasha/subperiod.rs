//! Proportional subdivision of a period into nine children.
//!
//! Child `k` of a period ruled from cycle position `p` is ruled by the graha
//! at `(p + k) mod 9` and lasts `parent_years * years(p + k) / 120`. Its
//! calendar span is the same fraction of the parent's span, which for the
//! first Mahadasha is the nominal span rather than the balance. The same
//! operation is applied at every depth.

use super::data::{TOTAL_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS};
use super::types::{DashaLevel, DashaPeriod};

/// Snap the last child's end to the parent's end to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Nine children of `parent`, starting the cycle at `start_pos`.
pub fn proportional_children(
    parent: &DashaPeriod,
    start_pos: usize,
    child_level: DashaLevel,
) -> Vec<DashaPeriod> {
    let n = VIMSHOTTARI_SEQUENCE.len();
    let mut children = Vec::with_capacity(n);
    let span_days = parent.end_jd - parent.start_jd;
    let mut cursor = parent.start_jd;
    for k in 0..n {
        let pos = (start_pos + k) % n;
        let share = VIMSHOTTARI_YEARS[pos] / TOTAL_YEARS;
        let years = parent.duration_years * share;
        let end = cursor + span_days * share;
        children.push(DashaPeriod::new(
            VIMSHOTTARI_SEQUENCE[pos],
            child_level,
            cursor,
            end,
            years,
        ));
        cursor = end;
    }
    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// Fill `period.children` recursively, `levels_below` levels deep.
///
/// `start_pos` is the cycle position of `period`'s own ruler.
pub fn subdivide(period: &mut DashaPeriod, start_pos: usize, levels_below: u8) {
    if levels_below == 0 {
        return;
    }
    let Some(child_level) = period.level.child_level() else {
        return;
    };
    let mut children = proportional_children(period, start_pos, child_level);
    let n = VIMSHOTTARI_SEQUENCE.len();
    for (k, child) in children.iter_mut().enumerate() {
        subdivide(child, (start_pos + k) % n, levels_below - 1);
    }
    period.children = children;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;
    use kundali_time::DAYS_PER_YEAR;

    fn venus_maha() -> DashaPeriod {
        let start = 2_451_545.0;
        DashaPeriod::new(
            Graha::Shukra,
            DashaLevel::Mahadasha,
            start,
            start + 20.0 * DAYS_PER_YEAR,
            20.0,
        )
    }

    #[test]
    fn children_start_with_parent_ruler() {
        let p = venus_maha();
        let kids = proportional_children(&p, 1, DashaLevel::Antardasha);
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].graha, Graha::Shukra);
        assert_eq!(kids[1].graha, Graha::Surya);
        assert_eq!(kids[8].graha, Graha::Ketu);
        // Venus-Venus = 20 * 20 / 120 years
        assert!((kids[0].duration_years - 20.0 * 20.0 / 120.0).abs() < 1e-12);
    }

    #[test]
    fn children_are_contiguous_and_snapped() {
        let p = venus_maha();
        let kids = proportional_children(&p, 1, DashaLevel::Antardasha);
        assert_eq!(kids[0].start_jd, p.start_jd);
        for w in kids.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
        assert_eq!(kids[8].end_jd, p.end_jd);
    }

    #[test]
    fn children_fill_a_back_dated_span() {
        // 5 years of balance laid over a 10-year calendar span
        let start = 2_451_545.0;
        let p = DashaPeriod::new(
            Graha::Chandra,
            DashaLevel::Mahadasha,
            start,
            start + 10.0 * DAYS_PER_YEAR,
            5.0,
        );
        let kids = proportional_children(&p, 3, DashaLevel::Antardasha);
        assert!((p.duration_years - kids.iter().map(|k| k.duration_years).sum::<f64>()).abs() < 1e-12);
        let moon_moon = &kids[0];
        assert!((moon_moon.duration_years - 5.0 * 10.0 / 120.0).abs() < 1e-12);
        assert!((moon_moon.end_jd - (start + 10.0 * 10.0 / 120.0 * DAYS_PER_YEAR)).abs() < 1e-9);
        assert_eq!(kids[8].end_jd, p.end_jd);
    }

    #[test]
    fn subdivide_two_levels() {
        let mut p = venus_maha();
        subdivide(&mut p, 1, 2);
        assert_eq!(p.children.len(), 9);
        for child in &p.children {
            assert_eq!(child.children.len(), 9);
            assert_eq!(child.children[0].graha, child.graha);
            assert!(child.children.iter().all(|g| g.children.is_empty()));
            assert!((child.children_years() - child.duration_years).abs() < 1e-9);
        }
        assert!((p.children_years() - p.duration_years).abs() < 1e-9);
    }

    #[test]
    fn subdivide_stops_at_pratyantardasha() {
        let mut p = venus_maha();
        subdivide(&mut p, 1, 5);
        let grandchild = &p.children[0].children[0];
        assert_eq!(grandchild.level, DashaLevel::Pratyantardasha);
        assert!(grandchild.children.is_empty());
    }

    #[test]
    fn zero_levels_leaves_period_bare() {
        let mut p = venus_maha();
        subdivide(&mut p, 1, 0);
        assert!(p.children.is_empty());
    }
}
