//! Boundary to the external ephemeris.
//!
//! The engine never computes orbital mechanics. It asks an
//! [`EphemerisOracle`] for tropical longitudes, house cusps and (optionally)
//! ayanamsa values, and goes through [`EphemerisAdapter`] so every answer is
//! validated and normalized before it reaches the math.
//!
//! Two oracles ship with the crate:
//! - [`SnapshotOracle`]: precomputed positions loaded from JSON
//! - [`SerializedOracle`]: wraps a backend that only has a global
//!   "set sidereal mode" API, holding a lock across set-query-read

pub mod adapter;
pub mod body;
pub mod error;
pub mod oracle;
pub mod serialized;
pub mod snapshot;

pub use adapter::EphemerisAdapter;
pub use body::{Body, HouseSystem, NodeMode};
pub use error::EphemerisError;
pub use oracle::{EphemerisOracle, HouseAngles};
pub use serialized::{ModalEphemeris, SerializedOracle};
pub use snapshot::{SnapshotEntry, SnapshotOracle};
