use std::{convert::Infallible, f64::consts::TAU};

use rotorsim_core::{
    Component,
    units::{AngularSpeedSquared, angular_speed_squared, torque_from_moment},
};
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Energy, Force, Frequency, Torque},
    frequency::hertz,
};

use super::RotorParams;

/// Peak performance of a rotor at its rated maximum RPM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorEnvelope {
    /// Maximum rotation rate `n`.
    pub revolutions_per_second: Frequency,

    /// Maximum angular speed, `2π·n`.
    pub max_angular_speed: AngularVelocity,

    /// Square of [`Self::max_angular_speed`], cached for per-step use.
    pub max_angular_speed_squared: AngularSpeedSquared,

    /// Thrust at maximum RPM, `C_T·ρ·n²·D⁴`.
    pub max_thrust: Force,

    /// Reaction torque at maximum RPM, `C_P·ρ·n²·D⁵ / 2π`.
    pub max_torque: Torque,
}

impl RotorEnvelope {
    /// Derives the envelope from a rotor's calibration.
    ///
    /// Inputs are not validated. A zero `max_rpm` yields a zero envelope and
    /// non-finite inputs propagate into the result.
    #[must_use]
    pub fn from_params(params: &RotorParams) -> Self {
        let n = Frequency::new::<hertz>(params.max_rpm / 60.0);

        let max_angular_speed = AngularVelocity::new::<radian_per_second>(TAU * n.get::<hertz>());
        let max_angular_speed_squared = angular_speed_squared(max_angular_speed);

        let n_squared = n * n;
        let d = params.propeller_diameter;
        let d_fourth = d * d * d * d;

        let max_thrust: Force =
            params.thrust_coefficient * params.air_density * n_squared * d_fourth;

        let moment: Energy =
            params.power_coefficient * params.air_density * n_squared * d_fourth * d / TAU;

        Self {
            revolutions_per_second: n,
            max_angular_speed,
            max_angular_speed_squared,
            max_thrust,
            max_torque: torque_from_moment(moment),
        }
    }
}

/// Static propeller theory as a component.
///
/// Maps a rotor's [`RotorParams`] to its [`RotorEnvelope`].
/// This is the same derivation [`super::RotorPerformanceModel::recompute`]
/// performs, without any retained state.
///
/// # Example
///
/// ```
/// use rotorsim_core::Component;
/// use rotorsim_components::rotor::{PropellerTheory, RotorParams};
/// use uom::si::angular_velocity::radian_per_second;
///
/// let envelope = PropellerTheory.call(RotorParams::reference_drone()).unwrap();
/// let omega = envelope.max_angular_speed.get::<radian_per_second>();
/// assert!((omega - 5235.987_755_982_988).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropellerTheory;

impl Component for PropellerTheory {
    type Input = RotorParams;
    type Output = RotorEnvelope;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(RotorEnvelope::from_params(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassDensity},
        force::newton,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        torque::newton_meter,
    };

    use crate::rotor::{REFERENCE_THRUST_COEFFICIENT, REFERENCE_WEIGHT_FACTOR};

    /// Evaluates the thrust and torque formulas directly in SI floats.
    fn expected_thrust_and_torque(params: &RotorParams) -> (f64, f64) {
        let n = params.max_rpm / 60.0;
        let rho = params.air_density.get::<kilogram_per_cubic_meter>();
        let d = params.propeller_diameter.get::<meter>();

        let thrust = params.thrust_coefficient * rho * n * n * d.powi(4);
        let torque = params.power_coefficient * rho * n * n * d.powi(5) / TAU;
        (thrust, torque)
    }

    #[test]
    fn reference_drone_envelope() {
        let params = RotorParams::reference_drone();
        let envelope = RotorEnvelope::from_params(&params);
        let (thrust, torque) = expected_thrust_and_torque(&params);

        assert_relative_eq!(
            envelope.revolutions_per_second.get::<hertz>(),
            50_000.0 / 60.0
        );
        assert_relative_eq!(
            envelope.max_angular_speed.get::<radian_per_second>(),
            5235.987_755_982_988,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            envelope.max_thrust.get::<newton>(),
            thrust,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            envelope.max_torque.get::<newton_meter>(),
            torque,
            max_relative = 1e-12
        );
    }

    #[test]
    fn reference_drone_recovers_measured_values() {
        let envelope = RotorEnvelope::from_params(&RotorParams::reference_drone());

        // Undo the weight factor and the extra thrust multiplier to get back
        // to the measured full-scale values.
        let thrust_multiplier = REFERENCE_THRUST_COEFFICIENT / 0.095_956_5;
        let full_scale_thrust =
            envelope.max_thrust.get::<newton>() / (REFERENCE_WEIGHT_FACTOR * thrust_multiplier);
        let full_scale_torque =
            envelope.max_torque.get::<newton_meter>() / REFERENCE_WEIGHT_FACTOR;

        assert_relative_eq!(full_scale_thrust, 4.179_44, epsilon = 1e-4);
        assert_relative_eq!(full_scale_torque, 0.055_56, epsilon = 1e-4);
    }

    #[test]
    fn squared_speed_matches_speed() {
        for rpm in [1.0, 900.0, 12_345.0, 50_000.0] {
            let params = RotorParams::reference_drone().with_max_rpm(rpm);
            let envelope = RotorEnvelope::from_params(&params);
            let omega = envelope.max_angular_speed.get::<radian_per_second>();

            assert_relative_eq!(
                envelope.max_angular_speed_squared.value,
                omega * omega,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn increasing_rpm_increases_everything() {
        let base = RotorParams::reference_drone();
        let slow = RotorEnvelope::from_params(&base.with_max_rpm(20_000.0));
        let fast = RotorEnvelope::from_params(&base.with_max_rpm(20_001.0));

        assert!(fast.max_angular_speed > slow.max_angular_speed);
        assert!(fast.max_thrust > slow.max_thrust);
        assert!(fast.max_torque > slow.max_torque);
    }

    #[test]
    fn doubling_diameter_scales_thrust_and_torque() {
        let base = RotorParams::reference_drone();
        let doubled = base.with_propeller_diameter(2.0 * base.propeller_diameter);

        let small = RotorEnvelope::from_params(&base);
        let large = RotorEnvelope::from_params(&doubled);

        assert_relative_eq!(
            large.max_thrust.get::<newton>(),
            16.0 * small.max_thrust.get::<newton>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            large.max_torque.get::<newton_meter>(),
            32.0 * small.max_torque.get::<newton_meter>(),
            max_relative = 1e-12
        );
        assert_eq!(large.max_angular_speed, small.max_angular_speed);
    }

    #[test]
    fn zero_air_density_means_no_thrust_or_torque() {
        let params = RotorParams::reference_drone()
            .with_air_density(MassDensity::new::<kilogram_per_cubic_meter>(0.0))
            .with_max_rpm(80_000.0)
            .with_propeller_diameter(Length::new::<meter>(0.25));
        let envelope = RotorEnvelope::from_params(&params);

        assert_eq!(envelope.max_thrust.get::<newton>(), 0.0);
        assert_eq!(envelope.max_torque.get::<newton_meter>(), 0.0);
        assert!(envelope.max_angular_speed.get::<radian_per_second>() > 0.0);
    }

    #[test]
    fn component_matches_direct_derivation() {
        let params = RotorParams::reference_drone().with_max_rpm(31_000.0);
        let from_component = PropellerTheory.call(params).unwrap();
        assert_eq!(from_component, RotorEnvelope::from_params(&params));
    }
}
