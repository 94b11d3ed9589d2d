//! Adapter for backends that keep a global sidereal mode.
//!
//! Such backends expose "set mode" and "read ayanamsa" as separate calls.
//! [`SerializedOracle`] holds one lock across both so that concurrent
//! requests with different standards never observe each other's mode.

use parking_lot::Mutex;
use tracing::trace;

use kundali_base::AyanamsaStandard;

use crate::body::{Body, HouseSystem, NodeMode};
use crate::error::EphemerisError;
use crate::oracle::{EphemerisOracle, HouseAngles};

/// A backend with mutable, process-wide sidereal state.
pub trait ModalEphemeris: Send {
    fn set_sidereal_mode(&mut self, standard: AyanamsaStandard);

    /// Ayanamsa for whatever mode was last set.
    fn current_ayanamsa(&mut self, jd_ut: f64) -> Result<f64, EphemerisError>;

    fn houses_and_angles(
        &mut self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError>;

    fn body_longitude(
        &mut self,
        jd_ut: f64,
        body: Body,
        node: NodeMode,
    ) -> Result<f64, EphemerisError>;
}

/// [`EphemerisOracle`] over a backend with a global sidereal mode.
///
/// Every call holds one lock across setting the mode and reading the result,
/// so concurrent callers with different standards never see each other's
/// mode.
pub struct SerializedOracle<M> {
    inner: Mutex<M>,
}

impl<M: ModalEphemeris> SerializedOracle<M> {
    /// Wrap a modal backend.
    pub fn new(backend: M) -> Self {
        Self {
            inner: Mutex::new(backend),
        }
    }

    /// Give the backend back.
    pub fn into_inner(self) -> M {
        self.inner.into_inner()
    }
}

impl<M: ModalEphemeris> EphemerisOracle for SerializedOracle<M> {
    fn houses_and_angles(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        self.inner
            .lock()
            .houses_and_angles(jd_ut, latitude, longitude, system)
    }

    fn body_longitude(
        &self,
        jd_ut: f64,
        body: Body,
        node: NodeMode,
    ) -> Result<f64, EphemerisError> {
        self.inner.lock().body_longitude(jd_ut, body, node)
    }

    fn ayanamsa_deg(&self, jd_ut: f64, standard: AyanamsaStandard) -> Result<f64, EphemerisError> {
        let mut backend = self.inner.lock();
        trace!(jd_ut, standard = standard.name(), "set sidereal mode");
        backend.set_sidereal_mode(standard);
        backend.current_ayanamsa(jd_ut)
    }
}
