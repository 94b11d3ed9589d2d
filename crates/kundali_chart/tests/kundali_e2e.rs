mod common;

use chrono::{TimeZone, Utc};

use common::{Broken, MeanMotionOracle};
use kundali_base::dasha::{VIMSHOTTARI_YEARS, nakshatra_lord, sequence_position};
use kundali_base::{
    AyanamsaSelection, AyanamsaStandard, DashaPeriod, Graha, NAKSHATRA_SPAN, Varga, opposite,
};
use kundali_chart::{
    BirthMoment, ChartResult, KundaliError, KundaliReport, build_chart, generate_kundali,
};
use kundali_config::KundaliConfig;

fn delhi_1990() -> BirthMoment {
    BirthMoment::new(1990, 5, 15, 10, 30, 28.6139, 77.2090).unwrap()
}

fn true_chitra() -> AyanamsaSelection {
    "true_chitra".parse().unwrap()
}

fn report() -> KundaliReport {
    let transit = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    generate_kundali(
        &MeanMotionOracle,
        &delhi_1990(),
        5.5,
        Some(transit),
        &true_chitra(),
        &KundaliConfig::default(),
    )
    .unwrap()
}

fn assert_children_sum(p: &DashaPeriod) {
    if p.children.is_empty() {
        return;
    }
    let sum: f64 = p.children.iter().map(|c| c.duration_years).sum();
    assert!(
        (sum - p.duration_years).abs() < 1e-6,
        "{:?} {:?}: children {sum} vs {}",
        p.level,
        p.graha,
        p.duration_years
    );
    for c in &p.children {
        assert_children_sum(c);
    }
}

#[test]
fn delhi_1990_first_dasha_matches_moon_nakshatra() {
    let r = report();
    let moon = r.chart.graha(Graha::Chandra).unwrap().placement;
    let idx = (moon.longitude / NAKSHATRA_SPAN).floor() as u8;
    assert_eq!(moon.nakshatra_index, idx.min(26));

    let balance = r.dasha_timeline.balance;
    let ruler = nakshatra_lord(moon.nakshatra_index);
    assert_eq!(balance.graha, ruler);
    assert_eq!(r.dasha_timeline.mahadashas[0].graha, ruler);

    let full = VIMSHOTTARI_YEARS[sequence_position(ruler).unwrap()];
    assert!(balance.balance_years > 0.0 && balance.balance_years < full);
}

#[test]
fn delhi_1990_timeline_shape() {
    let r = report();
    let t = &r.dasha_timeline;
    assert_eq!(t.depth, 3);
    assert!((t.total_years() - 120.0).abs() < 1e-9);
    // counted from 1990-05-15 0h UT
    assert!((t.birth_jd - 2_448_026.5).abs() < 1e-9);
    let b = t.balance;
    let first = &t.mahadashas[0];
    assert!((first.start_jd - (t.birth_jd - b.elapsed_years * 365.2422)).abs() < 1e-6);
    assert_eq!(first.end_jd, b.nominal_end_jd);
    assert!((first.duration_years - b.balance_years).abs() < 1e-12);
    for w in t.mahadashas.windows(2) {
        assert!((w[0].end_jd - w[1].start_jd).abs() < 1e-9);
    }
    for m in &t.mahadashas {
        assert_eq!(m.children.len(), 9);
        assert_children_sum(m);
    }
}

#[test]
fn natal_instant_applies_tz_offset() {
    let r = report();
    // 10:30 IST = 05:00 UT
    assert!((r.chart.jd_ut - 2_448_026.708_333).abs() < 1e-5);
    let transit_jd = 2_460_310.5;
    assert!((r.transit_chart.jd_ut - transit_jd).abs() < 1e-9);
}

#[test]
fn ketu_is_exactly_opposite_rahu() {
    let r = report();
    for chart in [&r.chart, &r.transit_chart] {
        let rahu = chart.graha(Graha::Rahu).unwrap().placement.longitude;
        let ketu = chart.graha(Graha::Ketu).unwrap().placement.longitude;
        assert_eq!(ketu, opposite(rahu));
    }
}

#[test]
fn vargas_follow_config() {
    let r = report();
    assert_eq!(r.vargas.len(), 6);
    for (varga, chart) in &r.vargas {
        assert_eq!(chart.varga, *varga);
        assert_eq!(chart.grahas.len(), 9);
    }
    let d9 = &r.vargas[&Varga::D9];
    for (g, vp) in &r.divisional_chart.grahas {
        assert_eq!(d9.grahas[g].sign_index, vp.sign_index);
    }

    let config = KundaliConfig::from_toml_str("vargas = [\"D30\"]\ndasha_depth = 1").unwrap();
    let r = generate_kundali(
        &MeanMotionOracle,
        &delhi_1990(),
        5.5,
        None,
        &true_chitra(),
        &config,
    )
    .unwrap();
    assert_eq!(r.vargas.keys().copied().collect::<Vec<_>>(), vec![Varga::D30]);
    assert!(r.dasha_timeline.mahadashas.iter().all(|m| m.children.is_empty()));
}

#[test]
fn bala_covers_the_seven_classical_grahas() {
    let r = report();
    assert_eq!(r.bala.grahas.len(), 7);
    assert!(!r.bala.grahas.contains_key(&Graha::Rahu));
    for b in r.bala.grahas.values() {
        assert!((0.0..=1.0).contains(&b.dig.rupas));
        assert!(b.sthana.total >= 0.0);
    }
}

#[test]
fn report_serializes_as_plain_data() {
    let v = serde_json::to_value(report()).unwrap();
    assert!(v["chart"]["grahas"]["Moon"]["nakshatra"].is_string());
    assert!(v["divisional_chart"]["grahas"]["Sun"]["sign_index"].is_number());
    assert!(v["vargas"]["D9"]["lagna"].is_object());
    assert!(v["dasha_timeline"]["mahadashas"].is_array());
    assert!(v["transit_chart"]["ascendant"]["longitude"].is_number());
    assert_eq!(v["birth"]["year"], 1990);
}

#[test]
fn invalid_dates_are_validation_errors() {
    assert!(matches!(
        BirthMoment::new(1990, 13, 15, 10, 30, 28.6, 77.2),
        Err(KundaliError::Validation { field: "month", .. })
    ));
    assert!(matches!(
        BirthMoment::new(2023, 2, 30, 10, 30, 28.6, 77.2),
        Err(KundaliError::Validation { field: "day", .. })
    ));
}

#[test]
fn unknown_ayanamsa_is_rejected() {
    let err: KundaliError = "vedic"
        .parse::<AyanamsaSelection>()
        .map_err(KundaliError::from)
        .unwrap_err();
    assert!(matches!(err, KundaliError::InvalidAyanamsa(_)));
}

#[test]
fn out_of_range_custom_ayanamsa_is_rejected() {
    for value in [400.0, -50.0, 360.0, f64::NAN] {
        let err = AyanamsaSelection::custom("mine", value)
            .map_err(KundaliError::from)
            .unwrap_err();
        assert!(matches!(err, KundaliError::InvalidAyanamsa(_)), "{value}");
    }
    assert!(serde_json::from_str::<AyanamsaSelection>(r#"{"name":"x","value":400.0}"#).is_err());

    let sel = AyanamsaSelection::custom("mine", 359.5).unwrap();
    let chart = build_chart(&MeanMotionOracle, &delhi_1990(), &sel, 2_448_026.7).unwrap();
    assert_eq!(chart.ayanamsa, 359.5);
}

#[test]
fn tz_offset_outside_range_is_rejected() {
    let err = generate_kundali(
        &MeanMotionOracle,
        &delhi_1990(),
        15.0,
        None,
        &true_chitra(),
        &KundaliConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        KundaliError::Validation {
            field: "tz_offset_hours",
            ..
        }
    ));
}

#[test]
fn ephemeris_failure_carries_instant() {
    let err = build_chart(&Broken, &delhi_1990(), &true_chitra(), 2_448_026.7).unwrap_err();
    match err {
        KundaliError::Ephemeris(e) => assert_eq!(e.jd_ut(), Some(2_448_026.7)),
        other => panic!("expected ephemeris error, got {other:?}"),
    }
}

#[test]
fn concurrent_charts_with_different_standards_do_not_interfere() {
    let birth = delhi_1990();
    let jd = 2_448_026.708_333;
    let standards = [
        AyanamsaStandard::TrueChitra,
        AyanamsaStandard::Lahiri,
        AyanamsaStandard::Raman,
        AyanamsaStandard::Krishnamurti,
    ];
    let sequential: Vec<ChartResult> = standards
        .iter()
        .map(|s| {
            let sel = AyanamsaSelection::Standard(*s);
            build_chart(&MeanMotionOracle, &birth, &sel, jd).unwrap()
        })
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = standards
            .iter()
            .map(|s| {
                scope.spawn(move || {
                    let sel = AyanamsaSelection::Standard(*s);
                    (0..20)
                        .map(|_| build_chart(&MeanMotionOracle, &birth, &sel, jd).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for (h, expected) in handles.into_iter().zip(&sequential) {
            for chart in h.join().unwrap() {
                assert_eq!(&chart, expected);
            }
        }
    });
}

#[test]
fn results_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChartResult>();
    assert_send_sync::<KundaliReport>();
    assert_send_sync::<BirthMoment>();
}
