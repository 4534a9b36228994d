//! Multi-axis springs built from independent [`SpringValue`] axes.

use crate::config::PhysicsParameters;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::solver::SpringSolver;
use crate::validate::Validate;
use crate::value::SpringValue;

/// Cap on fixed sub-steps consumed by one [`CompositeSpring::update`] call.
/// Time beyond that is dropped so a long stall cannot snowball.
pub const MAX_FIXED_SUBSTEPS: usize = 8;

/// `N` spring axes driven together with one parameter snapshot.
///
/// Axes never read each other; each step integrates all of them and then
/// commits all of them.
#[derive(Clone, Debug)]
pub struct CompositeSpring<F: Float, const N: usize> {
    axes: [SpringValue<F>; N],
    params: PhysicsParameters<F>,
    accumulator: F,
}

impl<F: Float + 'static, const N: usize> CompositeSpring<F, N> {
    /// A spring at rest on `initial`. Fails if `params` does not validate.
    pub fn new(initial: [F; N], params: PhysicsParameters<F>) -> Result<Self, PhysicsError> {
        params.ensure_valid()?;
        Ok(CompositeSpring {
            axes: initial.map(|v| SpringValue::from_parameters(v, &params)),
            params,
            accumulator: F::zero(),
        })
    }

    /// Advance by a frame delta.
    ///
    /// With `use_fixed_update_rate` the delta is banked and spent in
    /// `fixed_time_step` slices; otherwise one step of `dt` runs.
    pub fn update<O: StepObserver>(&mut self, dt: F, solver: &SpringSolver<F>, observer: &mut O) {
        if !(dt > F::zero()) {
            return;
        }

        let integration = self.params.integration;
        if !integration.use_fixed_update_rate {
            self.step(dt, solver, observer);
            return;
        }

        let fixed = integration.fixed_time_step;
        self.accumulator = self.accumulator + dt;
        let mut steps = 0;
        while self.accumulator >= fixed {
            if steps == MAX_FIXED_SUBSTEPS {
                log::debug!(
                    "dropping {} s of spring time after {MAX_FIXED_SUBSTEPS} fixed steps",
                    self.accumulator
                );
                self.accumulator = F::zero();
                break;
            }
            self.step(fixed, solver, observer);
            self.accumulator = self.accumulator - fixed;
            steps += 1;
        }
    }

    fn step<O: StepObserver>(&mut self, dt: F, solver: &SpringSolver<F>, observer: &mut O) {
        for axis in self.axes.iter_mut() {
            if axis.operation_value != F::zero() {
                axis.velocity = axis.velocity + axis.operation_value;
                axis.operation_value = F::zero();
            }
        }
        solver.step_axes(dt, &mut self.axes, &self.params, observer);
    }

    pub fn value(&self) -> [F; N] {
        core::array::from_fn(|i| self.axes[i].current_value)
    }

    pub fn target(&self) -> [F; N] {
        core::array::from_fn(|i| self.axes[i].target)
    }

    pub fn velocity(&self) -> [F; N] {
        core::array::from_fn(|i| self.axes[i].velocity)
    }

    pub fn set_target(&mut self, target: [F; N]) {
        for (axis, t) in self.axes.iter_mut().zip(target) {
            axis.target = t;
        }
    }

    /// Teleport the current value, keeping velocity.
    pub fn set_value(&mut self, value: [F; N]) {
        for (axis, v) in self.axes.iter_mut().zip(value) {
            axis.current_value = v;
            axis.candidate_value = v;
        }
    }

    pub fn set_velocity(&mut self, velocity: [F; N]) {
        for (axis, v) in self.axes.iter_mut().zip(velocity) {
            axis.velocity = v;
        }
    }

    /// Stiffness for every axis.
    pub fn set_force(&mut self, force: F) {
        self.params.force = force;
        for axis in self.axes.iter_mut() {
            axis.force = force;
        }
    }

    /// Damping for every axis.
    pub fn set_drag(&mut self, drag: F) {
        self.params.drag = drag;
        for axis in self.axes.iter_mut() {
            axis.drag = drag;
        }
    }

    pub fn set_update_enabled(&mut self, enabled: bool) {
        for axis in self.axes.iter_mut() {
            axis.update_enabled = enabled;
        }
    }

    /// Queue a velocity kick, applied at the start of the next step.
    pub fn nudge(&mut self, impulse: [F; N]) {
        for (axis, kick) in self.axes.iter_mut().zip(impulse) {
            axis.operation_value = axis.operation_value + kick;
        }
    }

    pub fn reach_equilibrium(&mut self) {
        for axis in self.axes.iter_mut() {
            axis.reach_equilibrium();
            axis.operation_value = F::zero();
        }
        self.accumulator = F::zero();
    }

    pub fn reset(&mut self) {
        for axis in self.axes.iter_mut() {
            axis.reset();
        }
        self.accumulator = F::zero();
    }

    pub fn is_on_target(&self) -> bool {
        self.axes.iter().all(SpringValue::is_on_target)
    }

    pub fn is_close_to_stopping(&self) -> bool {
        self.axes.iter().all(SpringValue::is_close_to_stopping)
    }

    pub fn axis(&self, index: usize) -> &SpringValue<F> {
        &self.axes[index]
    }

    pub fn axis_mut(&mut self, index: usize) -> &mut SpringValue<F> {
        &mut self.axes[index]
    }

    pub fn axes(&self) -> &[SpringValue<F>; N] {
        &self.axes
    }

    pub fn parameters(&self) -> &PhysicsParameters<F> {
        &self.params
    }
}

pub type FloatSpring<F> = CompositeSpring<F, 1>;
pub type Vector2Spring<F> = CompositeSpring<F, 2>;
pub type Vector3Spring<F> = CompositeSpring<F, 3>;
pub type Vector4Spring<F> = CompositeSpring<F, 4>;
/// RGBA.
pub type ColorSpring<F> = CompositeSpring<F, 4>;
