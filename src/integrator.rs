//! The integrator capability shared by every numerical model.

use crate::config::PhysicsParameters;
use crate::float::Float;
use crate::value::SpringValue;

/// What a single [`Integrator::update`] call did to the axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// `dt <= 0`: the state was left untouched.
    Skipped,
    /// Velocity and candidate value were advanced.
    Integrated,
    /// The step went non-finite and the axis was snapped to equilibrium.
    Equilibrium,
}

/// A numerical method that advances one axis by one step.
///
/// `update` writes `velocity` and `candidate_value` only. Committing the
/// candidate is the caller's job; the single exception is the non-finite
/// fallback, which goes through [`SpringValue::reach_equilibrium`].
pub trait Integrator<F: Float> {
    /// Advance `state` by `dt` seconds using its own force and drag.
    fn update(&self, dt: F, state: &mut SpringValue<F>, params: &PhysicsParameters<F>) -> StepOutcome;

    /// Stable identifier, also used as the registry key.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Whether this model should run for `params`.
    fn is_suitable(&self, params: &PhysicsParameters<F>) -> bool;
}

/// Write a step result, or fall back to equilibrium if it is not finite.
pub(crate) fn write_or_settle<F: Float>(
    state: &mut SpringValue<F>,
    candidate: F,
    velocity: F,
    model: &'static str,
) -> StepOutcome {
    if !candidate.is_finite() || !velocity.is_finite() {
        log::trace!(
            "{model}: non-finite step (candidate {candidate}, velocity {velocity}), settling (target {})",
            state.target
        );
        state.reach_equilibrium();
        return StepOutcome::Equilibrium;
    }
    state.candidate_value = candidate;
    state.velocity = velocity;
    StepOutcome::Integrated
}
