use uom::si::{angular_velocity::radian_per_second, force::newton, torque::newton_meter};

use super::{RotorEnvelope, RotorError, RotorParams};

/// A rotor's calibration together with its last computed envelope.
///
/// The model starts out uncomputed. [`recompute()`] derives the envelope from
/// the current calibration and may be called any number of times.
/// Edits made through [`params_mut()`] or [`set_params()`] do not trigger a
/// recomputation, and the previously derived envelope stays readable until the
/// owner recomputes.
///
/// Mutation requires `&mut self`, so a model shared with a simulation loop
/// must be fully configured and recomputed before it is shared.
///
/// # Example
///
/// ```
/// use rotorsim_components::rotor::{RotorError, RotorPerformanceModel};
///
/// let mut model = RotorPerformanceModel::default();
/// assert_eq!(model.envelope(), Err(RotorError::EnvelopeNotComputed));
///
/// let max_thrust = model.recompute().max_thrust;
/// assert_eq!(model.envelope().unwrap().max_thrust, max_thrust);
/// ```
///
/// [`recompute()`]: RotorPerformanceModel::recompute
/// [`params_mut()`]: RotorPerformanceModel::params_mut
/// [`set_params()`]: RotorPerformanceModel::set_params
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotorPerformanceModel {
    params: RotorParams,
    envelope: Option<RotorEnvelope>,
}

impl RotorPerformanceModel {
    /// Creates an uncomputed model with the given calibration.
    #[must_use]
    pub fn new(params: RotorParams) -> Self {
        Self {
            params,
            envelope: None,
        }
    }

    /// Creates a model with the given calibration and computes its envelope.
    #[must_use]
    pub fn computed(params: RotorParams) -> Self {
        let mut model = Self::new(params);
        model.recompute();
        model
    }

    /// Returns the current calibration.
    #[must_use]
    pub fn params(&self) -> &RotorParams {
        &self.params
    }

    /// Returns the calibration for editing.
    ///
    /// Call [`recompute()`](Self::recompute) after editing.
    pub fn params_mut(&mut self) -> &mut RotorParams {
        &mut self.params
    }

    /// Replaces the calibration.
    ///
    /// Call [`recompute()`](Self::recompute) afterwards.
    pub fn set_params(&mut self, params: RotorParams) {
        self.params = params;
    }

    /// Derives the envelope from the current calibration.
    ///
    /// Overwrites any previously derived envelope and returns the new one.
    /// Inputs are not validated; see [`RotorEnvelope::from_params`].
    pub fn recompute(&mut self) -> &RotorEnvelope {
        let envelope = RotorEnvelope::from_params(&self.params);

        log::debug!(
            "rotor envelope: max_rpm={} omega={:.3} rad/s thrust={:.6} N torque={:.6} N·m",
            self.params.max_rpm,
            envelope.max_angular_speed.get::<radian_per_second>(),
            envelope.max_thrust.get::<newton>(),
            envelope.max_torque.get::<newton_meter>(),
        );

        self.envelope.insert(envelope)
    }

    /// Returns the envelope from the last [`recompute()`](Self::recompute).
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::EnvelopeNotComputed`] if the model has never been
    /// recomputed.
    pub fn envelope(&self) -> Result<&RotorEnvelope, RotorError> {
        self.envelope.as_ref().ok_or(RotorError::EnvelopeNotComputed)
    }

    /// Returns `true` once [`recompute()`](Self::recompute) has been called.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.envelope.is_some()
    }
}
