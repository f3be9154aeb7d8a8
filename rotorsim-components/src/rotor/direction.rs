use serde::{Deserialize, Serialize};

use super::RotorError;

/// Direction a rotor spins, viewed in the NED frame.
///
/// In NED, a positive torque about the down axis produces clockwise rotation,
/// so a clockwise rotor is labeled `+1` and a counter-clockwise rotor `-1`.
/// The airframe uses [`sign()`](Self::sign) to combine the reaction torques
/// of all rotors into a net yaw torque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotorTurningDirection {
    Clockwise,
    CounterClockwise,
}

impl RotorTurningDirection {
    /// Returns `1.0` for clockwise and `-1.0` for counter-clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        f64::from(i8::from(self))
    }

    /// Returns the other direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

impl From<RotorTurningDirection> for i8 {
    fn from(direction: RotorTurningDirection) -> Self {
        match direction {
            RotorTurningDirection::Clockwise => 1,
            RotorTurningDirection::CounterClockwise => -1,
        }
    }
}

impl TryFrom<i8> for RotorTurningDirection {
    type Error = RotorError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Clockwise),
            -1 => Ok(Self::CounterClockwise),
            other => Err(RotorError::InvalidTurningDirection(other)),
        }
    }
}
