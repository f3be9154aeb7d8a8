//! A minimal airframe that consumes rotor envelopes the way a flight-dynamics
//! step would: scale each rotor's limits by its control signal and combine
//! reaction torques by turning direction.

use rotorsim_components::rotor::{
    RotorError, RotorParams, RotorPerformanceModel, RotorTurningDirection,
};
use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::f64::{Force, Torque},
};

/// Configuration for one rotor on the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotorConfig {
    pub direction: RotorTurningDirection,
    #[serde(default)]
    pub params: RotorParams,
}

/// Configuration for a whole airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirframeConfig {
    pub rotors: Vec<RotorConfig>,
}

impl AirframeConfig {
    /// A quad-X layout with alternating turning directions.
    #[must_use]
    pub fn quad_x(params: RotorParams) -> Self {
        let rotors = [
            RotorTurningDirection::CounterClockwise,
            RotorTurningDirection::CounterClockwise,
            RotorTurningDirection::Clockwise,
            RotorTurningDirection::Clockwise,
        ]
        .map(|direction| RotorConfig { direction, params })
        .to_vec();

        Self { rotors }
    }
}

/// Rotors with computed envelopes.
#[derive(Debug, Clone)]
pub struct Airframe {
    rotors: Vec<(RotorTurningDirection, RotorPerformanceModel)>,
}

impl Airframe {
    /// Builds the airframe and computes every rotor's envelope.
    #[must_use]
    pub fn from_config(config: &AirframeConfig) -> Self {
        let rotors = config
            .rotors
            .iter()
            .map(|rotor| (rotor.direction, RotorPerformanceModel::computed(rotor.params)))
            .collect();

        Self { rotors }
    }

    /// Builds the airframe without computing any envelope.
    #[must_use]
    pub fn uncomputed(config: &AirframeConfig) -> Self {
        let rotors = config
            .rotors
            .iter()
            .map(|rotor| (rotor.direction, RotorPerformanceModel::new(rotor.params)))
            .collect();

        Self { rotors }
    }

    /// Total thrust for the given per-rotor control signals in `0..=1`.
    ///
    /// # Errors
    ///
    /// Fails if any rotor's envelope has not been computed.
    pub fn total_thrust(&self, controls: &[f64]) -> Result<Force, RotorError> {
        self.rotors
            .iter()
            .zip(controls)
            .try_fold(Force::ZERO, |total, ((_, model), &control)| {
                Ok(total + control * model.envelope()?.max_thrust)
            })
    }

    /// Net yaw torque for the given per-rotor control signals in `0..=1`.
    ///
    /// # Errors
    ///
    /// Fails if any rotor's envelope has not been computed.
    pub fn yaw_torque(&self, controls: &[f64]) -> Result<Torque, RotorError> {
        self.rotors
            .iter()
            .zip(controls)
            .try_fold(Torque::ZERO, |total, ((direction, model), &control)| {
                Ok(total + direction.sign() * control * model.envelope()?.max_torque)
            })
    }
}
