/// The core trait for defining components in rotorsim.
///
/// A `Component` takes an input and produces an output. Components should be
/// deterministic, always producing the same result for a given input, so that
/// a model derived once during configuration can be trusted for the rest of a
/// simulation.
///
/// ## Implementing `Component`
///
/// Implement the [`call()`] method, which takes an input and returns either an
/// output or an error. Components that cannot fail should use
/// [`std::convert::Infallible`] as their error type.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use rotorsim_core::Component;
///
/// struct RpmToHertz;
///
/// impl Component for RpmToHertz {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, rpm: f64) -> Result<f64, Self::Error> {
///         Ok(rpm / 60.0)
///     }
/// }
///
/// assert_eq!(RpmToHertz.call(6000.0).unwrap(), 100.0);
/// ```
///
/// [`call()`]: Component::call
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
