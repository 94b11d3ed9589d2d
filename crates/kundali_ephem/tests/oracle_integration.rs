use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use kundali_base::{ALL_STANDARDS, AyanamsaSelection, AyanamsaStandard, formula_ayanamsa_deg};
use kundali_ephem::{
    Body, EphemerisAdapter, EphemerisError, EphemerisOracle, HouseAngles, HouseSystem,
    ModalEphemeris, NodeMode, SerializedOracle, SnapshotEntry, SnapshotOracle,
};

const JD: f64 = 2_448_026.708_333;

fn snapshot() -> SnapshotOracle {
    let mut bodies = BTreeMap::new();
    bodies.insert(Body::Sun, 54.3);
    bodies.insert(Body::Moon, 361.5);
    bodies.insert(Body::LunarNode, 308.9);
    SnapshotOracle::new(vec![SnapshotEntry {
        jd_ut: JD,
        houses: HouseAngles {
            cusps: [
                120.0, 145.0, 172.0, 203.0, 236.0, 270.0, 300.0, 325.0, 352.0, 23.0, 56.0, 90.0,
            ],
            ascendant: 120.0,
            midheaven: 23.0,
        },
        bodies,
        mean_node: None,
        ayanamsa: BTreeMap::new(),
    }])
}

#[test]
fn adapter_over_snapshot_normalizes() {
    let oracle = snapshot();
    let adapter = EphemerisAdapter::new(&oracle);
    let moon = adapter
        .tropical_longitude(JD, Body::Moon, NodeMode::True)
        .unwrap();
    assert!((moon - 1.5).abs() < 1e-9, "moon = {moon}");
    let houses = adapter.houses(JD, 28.6, 77.2, HouseSystem::Placidus).unwrap();
    assert_eq!(houses.cusps[0], houses.ascendant);
}

#[test]
fn missing_mean_node_is_reported_with_instant() {
    let oracle = snapshot();
    let err = EphemerisAdapter::new(&oracle)
        .tropical_longitude(JD, Body::LunarNode, NodeMode::Mean)
        .unwrap_err();
    assert_eq!(err.jd_ut(), Some(JD));
}

#[test]
fn unknown_instant_is_unavailable() {
    let oracle = snapshot();
    let err = EphemerisAdapter::new(&oracle)
        .houses(JD + 1.0, 0.0, 0.0, HouseSystem::Placidus)
        .unwrap_err();
    assert_eq!(err, EphemerisError::Unavailable { jd_ut: JD + 1.0 });
}

#[test]
fn snapshot_json_roundtrip_keeps_lookups() {
    let json = serde_json::to_string(&snapshot()).unwrap();
    let back = SnapshotOracle::from_json_str(&json).unwrap();
    assert_eq!(
        back.body_longitude(JD, Body::Sun, NodeMode::True).unwrap(),
        54.3
    );
}

#[test]
fn snapshot_ayanamsa_defaults_to_formula_for_every_standard() {
    let oracle = snapshot();
    let adapter = EphemerisAdapter::new(&oracle);
    for std in ALL_STANDARDS {
        let got = adapter
            .ayanamsa(JD, &AyanamsaSelection::Standard(std))
            .unwrap();
        assert!((got - formula_ayanamsa_deg(std, JD)).abs() < 1e-12, "{std}");
    }
}

/// Backend whose ayanamsa depends on a mode set in a separate call.
struct GlobalMode {
    mode: AyanamsaStandard,
    calls: usize,
}

impl ModalEphemeris for GlobalMode {
    fn set_sidereal_mode(&mut self, standard: AyanamsaStandard) {
        self.mode = standard;
    }

    fn current_ayanamsa(&mut self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.calls += 1;
        thread::yield_now();
        Ok(formula_ayanamsa_deg(self.mode, jd_ut))
    }

    fn houses_and_angles(
        &mut self,
        jd_ut: f64,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        Err(EphemerisError::Unavailable { jd_ut })
    }

    fn body_longitude(
        &mut self,
        jd_ut: f64,
        _body: Body,
        _node: NodeMode,
    ) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable { jd_ut })
    }
}

#[test]
fn serialized_oracle_isolates_concurrent_modes() {
    let oracle = Arc::new(SerializedOracle::new(GlobalMode {
        mode: AyanamsaStandard::TrueChitra,
        calls: 0,
    }));
    let per_thread = 200;
    thread::scope(|s| {
        for std in ALL_STANDARDS {
            let oracle = Arc::clone(&oracle);
            s.spawn(move || {
                let adapter = EphemerisAdapter::new(oracle.as_ref());
                let sel = AyanamsaSelection::Standard(std);
                let expected = formula_ayanamsa_deg(std, JD);
                for _ in 0..per_thread {
                    let got = adapter.ayanamsa(JD, &sel).unwrap();
                    assert!((got - expected).abs() < 1e-12, "{std} saw {got}");
                }
            });
        }
    });
    let backend = Arc::try_unwrap(oracle).ok().unwrap().into_inner();
    assert_eq!(backend.calls, per_thread * ALL_STANDARDS.len());
}
