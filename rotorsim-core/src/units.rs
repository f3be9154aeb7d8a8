//! Unit types that `uom` does not provide out of the box.

use uom::{
    si::{
        ISQ, Quantity, SI,
        angular_velocity::radian_per_second,
        energy::joule,
        f64::{AngularVelocity, Energy, Frequency, Torque},
        frequency::hertz,
        torque::newton_meter,
    },
    typenum::{N2, Z0},
};

/// Square of an angular speed, (rad/s)² in SI.
///
/// Radians are dimensionless, so this shares its dimension with a squared
/// frequency (1/s²).
pub type AngularSpeedSquared = Quantity<ISQ<Z0, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Squares an angular speed.
///
/// The value is carried through a `Frequency` in rad/s so the result has the
/// plain kind of [`AngularSpeedSquared`] rather than the angle kind of the input.
#[must_use]
pub fn angular_speed_squared(speed: AngularVelocity) -> AngularSpeedSquared {
    let omega = Frequency::new::<hertz>(speed.get::<radian_per_second>());
    omega * omega
}

/// Reinterprets a force-times-length product as a torque.
///
/// Torque and energy share the dimension N·m but are distinct kinds in `uom`,
/// so a moment computed from a product of quantities arrives as an `Energy`.
#[must_use]
pub fn torque_from_moment(moment: Energy) -> Torque {
    Torque::new::<newton_meter>(moment.get::<joule>())
}
