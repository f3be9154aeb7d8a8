//! Rotor performance models.
//!
//! A rotor is described by its calibration constants ([`RotorParams`]) and the
//! performance envelope derived from them ([`RotorEnvelope`]): the peak
//! angular speed, thrust and reaction torque at the rated maximum RPM.
//! The airframe scales these limits by a normalized control signal every
//! simulation step, so they are derived once up front rather than per step.
//!
//! The derivation follows static propeller theory:
//!
//! ```text
//! thrust = C_T · ρ · n² · D⁴
//! torque = C_P · ρ · n² · D⁵ / (2π)
//! ```
//!
//! where `n` is the rotation rate in revolutions per second and `D` is the
//! propeller diameter.
//!
//! [`RotorPerformanceModel`] pairs the calibration with the last computed
//! envelope. Recomputation is always explicit: editing the calibration leaves
//! the previous envelope in place until [`RotorPerformanceModel::recompute`]
//! is called again.

mod direction;
mod envelope;
mod error;
mod model;
mod params;

pub use direction::RotorTurningDirection;
pub use envelope::{PropellerTheory, RotorEnvelope};
pub use error::RotorError;
pub use model::RotorPerformanceModel;
pub use params::{
    REFERENCE_AIR_DENSITY, REFERENCE_CONTROL_FILTER_TIME_CONSTANT, REFERENCE_MAX_RPM,
    REFERENCE_POWER_COEFFICIENT, REFERENCE_PROPELLER_DIAMETER, REFERENCE_PROPELLER_SWEEP_HEIGHT,
    REFERENCE_THRUST_COEFFICIENT, REFERENCE_WEIGHT_FACTOR, RotorParams,
};
