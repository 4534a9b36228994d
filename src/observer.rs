//! Step observer trait for monitoring spring updates.

/// Trait for observing spring steps.
///
/// Implement this to trace which model ran on which axis, or to count
/// numerical fallbacks while tuning. All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after the model for `axis` was chosen, before it runs.
    fn on_model_selected(&mut self, _axis: usize, _model: &'static str) {}

    /// Called when a step on `axis` went non-finite and was snapped to rest.
    fn on_equilibrium_fallback(&mut self, _axis: usize) {}

    /// Called when the current-value clamp changed `axis`.
    fn on_clamped(&mut self, _axis: usize) {}

    /// Called once every axis of a step has been committed.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
