use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, MassDensity, Time},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    time::second,
};

/// Scaling applied when the reference coefficients were back-derived from a
/// 1 kg class vehicle down to a 50 g class propeller.
pub const REFERENCE_WEIGHT_FACTOR: f64 = 0.05;

/// Thrust coefficient `C_T` of the reference drone.
///
/// Back-deriving from 4.17944 N at 50,000 RPM with a 0.04 m propeller gives
/// `C_T = 1.91913`, or `0.0959565` after [`REFERENCE_WEIGHT_FACTOR`].
/// The value used here carries an additional, undocumented `1.3` multiplier.
/// It is kept exactly for compatibility with existing calibrations and
/// should not be read as having a physical meaning.
pub const REFERENCE_THRUST_COEFFICIENT: f64 = 0.095_956_5 * 1.3;

/// Power (torque) coefficient `C_P` of the reference drone.
///
/// Back-derived from 0.05556 N·m at 50,000 RPM (`C_P = 4.00745`), then
/// scaled by [`REFERENCE_WEIGHT_FACTOR`].
pub const REFERENCE_POWER_COEFFICIENT: f64 = 0.200_372_5;

/// Sea-level air density, kg/m³.
pub const REFERENCE_AIR_DENSITY: f64 = 1.225;

/// Rated maximum rotation speed, rev/min.
pub const REFERENCE_MAX_RPM: f64 = 50_000.0;

/// Propeller diameter, m.
pub const REFERENCE_PROPELLER_DIAMETER: f64 = 0.04;

/// Height of the cylinder swept by the spinning propeller, m.
pub const REFERENCE_PROPELLER_SWEEP_HEIGHT: f64 = 0.01;

/// Time constant for low-pass filtering the commanded control signal, s.
pub const REFERENCE_CONTROL_FILTER_TIME_CONSTANT: f64 = 0.005;

/// Calibration constants describing one rotor.
///
/// These are the inputs to the performance envelope. Nothing here is
/// validated: the owner is expected to supply `max_rpm > 0`,
/// `propeller_diameter > 0` and a non-negative `air_density`.
///
/// When deserialized, missing fields fall back to
/// [`RotorParams::reference_drone`]. Quantities are read as plain SI values.
///
/// # Example
///
/// ```
/// use rotorsim_components::rotor::RotorParams;
/// use uom::si::{f64::Length, length::centimeter};
///
/// let params = RotorParams::reference_drone()
///     .with_max_rpm(30_000.0)
///     .with_propeller_diameter(Length::new::<centimeter>(12.7));
///
/// assert_eq!(params.max_rpm, 30_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotorParams {
    /// Dimensionless thrust coefficient `C_T`.
    pub thrust_coefficient: f64,

    /// Dimensionless power (torque) coefficient `C_P`.
    pub power_coefficient: f64,

    pub air_density: MassDensity,

    /// Rated maximum rotation speed in revolutions per minute.
    pub max_rpm: f64,

    pub propeller_diameter: Length,

    /// Vertical thickness of the disc swept by the rotating blade.
    pub propeller_sweep_height: Length,

    /// Time constant used downstream to smooth the commanded control signal.
    pub control_filter_time_constant: Time,
}

impl RotorParams {
    /// Calibration of the reference 50 g class quadrotor propeller.
    #[must_use]
    pub fn reference_drone() -> Self {
        Self {
            thrust_coefficient: REFERENCE_THRUST_COEFFICIENT,
            power_coefficient: REFERENCE_POWER_COEFFICIENT,
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(REFERENCE_AIR_DENSITY),
            max_rpm: REFERENCE_MAX_RPM,
            propeller_diameter: Length::new::<meter>(REFERENCE_PROPELLER_DIAMETER),
            propeller_sweep_height: Length::new::<meter>(REFERENCE_PROPELLER_SWEEP_HEIGHT),
            control_filter_time_constant: Time::new::<second>(
                REFERENCE_CONTROL_FILTER_TIME_CONSTANT,
            ),
        }
    }

    /// Returns `self` with the given thrust coefficient, keeping other fields unchanged.
    #[must_use]
    pub fn with_thrust_coefficient(self, thrust_coefficient: f64) -> Self {
        Self {
            thrust_coefficient,
            ..self
        }
    }

    /// Returns `self` with the given power coefficient, keeping other fields unchanged.
    #[must_use]
    pub fn with_power_coefficient(self, power_coefficient: f64) -> Self {
        Self {
            power_coefficient,
            ..self
        }
    }

    /// Returns `self` with the given air density, keeping other fields unchanged.
    #[must_use]
    pub fn with_air_density(self, air_density: MassDensity) -> Self {
        Self {
            air_density,
            ..self
        }
    }

    /// Returns `self` with the given maximum RPM, keeping other fields unchanged.
    #[must_use]
    pub fn with_max_rpm(self, max_rpm: f64) -> Self {
        Self { max_rpm, ..self }
    }

    /// Returns `self` with the given propeller diameter, keeping other fields unchanged.
    #[must_use]
    pub fn with_propeller_diameter(self, propeller_diameter: Length) -> Self {
        Self {
            propeller_diameter,
            ..self
        }
    }

    /// Returns `self` with the given sweep height, keeping other fields unchanged.
    #[must_use]
    pub fn with_propeller_sweep_height(self, propeller_sweep_height: Length) -> Self {
        Self {
            propeller_sweep_height,
            ..self
        }
    }

    /// Returns `self` with the given filter time constant, keeping other fields unchanged.
    #[must_use]
    pub fn with_control_filter_time_constant(self, control_filter_time_constant: Time) -> Self {
        Self {
            control_filter_time_constant,
            ..self
        }
    }
}

impl Default for RotorParams {
    fn default() -> Self {
        Self::reference_drone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::centimeter, time::millisecond};

    #[test]
    fn default_is_the_reference_drone() {
        assert_eq!(RotorParams::default(), RotorParams::reference_drone());
    }

    #[test]
    fn reference_drone_constants() {
        let params = RotorParams::reference_drone();

        assert_relative_eq!(params.thrust_coefficient, 0.124_743_45, epsilon = 1e-12);
        assert_relative_eq!(params.power_coefficient, 0.200_372_5);
        assert_relative_eq!(
            params.air_density.get::<kilogram_per_cubic_meter>(),
            1.225
        );
        assert_relative_eq!(params.max_rpm, 50_000.0);
        assert_relative_eq!(params.propeller_diameter.get::<centimeter>(), 4.0);
        assert_relative_eq!(params.propeller_sweep_height.get::<centimeter>(), 1.0);
        assert_relative_eq!(
            params.control_filter_time_constant.get::<millisecond>(),
            5.0
        );
    }

    #[test]
    fn thrust_coefficient_keeps_the_extra_multiplier() {
        let without_multiplier = 1.919_13 * REFERENCE_WEIGHT_FACTOR;
        assert_relative_eq!(
            REFERENCE_THRUST_COEFFICIENT / without_multiplier,
            1.3,
            epsilon = 1e-12
        );
    }

    #[test]
    fn with_methods_only_touch_their_field() {
        let base = RotorParams::reference_drone();
        let edited = base
            .with_thrust_coefficient(0.1)
            .with_power_coefficient(0.05)
            .with_max_rpm(12_000.0);

        assert_relative_eq!(edited.thrust_coefficient, 0.1);
        assert_relative_eq!(edited.power_coefficient, 0.05);
        assert_relative_eq!(edited.max_rpm, 12_000.0);
        assert_eq!(edited.air_density, base.air_density);
        assert_eq!(edited.propeller_diameter, base.propeller_diameter);
        assert_eq!(edited.propeller_sweep_height, base.propeller_sweep_height);
        assert_eq!(
            edited.control_filter_time_constant,
            base.control_filter_time_constant
        );
    }
}
