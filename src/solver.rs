//! Per-axis update driver: clamp, select, integrate, commit.

use crate::config::PhysicsParameters;
use crate::float::Float;
use crate::integrator::StepOutcome;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::selector::ModelRegistry;
use crate::value::SpringValue;

/// What the commit phase did to one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitOutcome {
    /// The candidate was copied into the current value.
    pub committed: bool,
    /// The current-value clamp changed the value.
    pub clamped: bool,
}

/// Drives axes through the model chosen for each step.
///
/// A step has two phases. Integration reads `current_value` and writes only
/// velocity and the candidate, so every axis of a composite spring can be
/// integrated before any of them is committed.
pub struct SpringSolver<F: Float + 'static> {
    registry: ModelRegistry<F>,
}

impl<F: Float + 'static> SpringSolver<F> {
    pub fn new() -> Self {
        Self::with_registry(ModelRegistry::with_defaults())
    }

    pub fn with_registry(registry: ModelRegistry<F>) -> Self {
        SpringSolver { registry }
    }

    pub fn registry(&self) -> &ModelRegistry<F> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ModelRegistry<F> {
        &mut self.registry
    }

    /// Phase one for a single axis.
    pub fn integrate_axis(
        &self,
        dt: F,
        state: &mut SpringValue<F>,
        params: &PhysicsParameters<F>,
    ) -> StepOutcome {
        self.integrate_observed(0, dt, state, params, &mut NoOpStepObserver)
    }

    /// Phase two for a single axis.
    pub fn commit_axis(&self, state: &mut SpringValue<F>) -> CommitOutcome {
        let committed = state.commit_candidate();
        let clamped = state.clamp_current_value();
        CommitOutcome { committed, clamped }
    }

    /// Both phases for a single axis. Nothing happens when `dt <= 0`.
    pub fn step_axis(
        &self,
        dt: F,
        state: &mut SpringValue<F>,
        params: &PhysicsParameters<F>,
    ) -> StepOutcome {
        let outcome = self.integrate_axis(dt, state, params);
        if outcome != StepOutcome::Skipped {
            self.commit_axis(state);
        }
        outcome
    }

    /// Step every axis: integrate all of them, then commit all of them.
    pub fn step_axes<O: StepObserver>(
        &self,
        dt: F,
        axes: &mut [SpringValue<F>],
        params: &PhysicsParameters<F>,
        observer: &mut O,
    ) {
        if !(dt > F::zero()) {
            return;
        }

        for (i, axis) in axes.iter_mut().enumerate() {
            self.integrate_observed(i, dt, axis, params, observer);
        }

        for (i, axis) in axes.iter_mut().enumerate() {
            if self.commit_axis(axis).clamped {
                observer.on_clamped(i);
            }
        }

        observer.on_step_complete();
    }

    fn integrate_observed<O: StepObserver>(
        &self,
        index: usize,
        dt: F,
        state: &mut SpringValue<F>,
        params: &PhysicsParameters<F>,
        observer: &mut O,
    ) -> StepOutcome {
        if !(dt > F::zero()) {
            return StepOutcome::Skipped;
        }

        state.clamp_target();

        let snapshot = params.for_axis(state);
        let model = self.registry.select(&snapshot);
        observer.on_model_selected(index, model.name());

        let outcome = model.update(dt, state, &snapshot);
        if outcome == StepOutcome::Equilibrium {
            log::debug!("axis {index} settled at {} after a non-finite step", state.target);
            observer.on_equilibrium_fallback(index);
        }
        outcome
    }
}

impl<F: Float + 'static> Default for SpringSolver<F> {
    fn default() -> Self {
        Self::new()
    }
}
