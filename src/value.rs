//! Per-axis spring state.

use crate::config::PhysicsParameters;
use crate::float::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `|target - current|` below which an axis counts as on target.
pub const ON_TARGET_EPSILON: f32 = 1e-4;

/// Bound on both `|target - current|` and `|velocity|` for an axis that is
/// about to come to rest.
pub const CLOSE_TO_STOPPING_EPSILON: f32 = 1e-2;

/// One independently integrated scalar degree of freedom.
///
/// Integrators only write `velocity` and `candidate_value`; the candidate
/// becomes observable through [`SpringValue::commit_candidate`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpringValue<F: Float> {
    pub initial_value: F,
    pub current_value: F,
    pub candidate_value: F,
    pub velocity: F,
    pub target: F,
    pub force: F,
    pub drag: F,
    pub min_value: F,
    pub max_value: F,
    pub clamp_target: bool,
    pub clamp_current_value: bool,
    pub stop_on_current_value_clamp: bool,
    /// When false, commits are rejected and the axis stays frozen.
    pub update_enabled: bool,
    /// Scratch slot for composite operations such as nudges.
    pub operation_value: F,
}

impl<F: Float> SpringValue<F> {
    /// An axis at rest on `initial`, with default stiffness and no clamping.
    pub fn new(initial: F) -> Self {
        Self::from_parameters(initial, &PhysicsParameters::new())
    }

    /// An axis at rest on `initial`, taking stiffness, damping and clamping
    /// from `params`.
    pub fn from_parameters(initial: F, params: &PhysicsParameters<F>) -> Self {
        SpringValue {
            initial_value: initial,
            current_value: initial,
            candidate_value: initial,
            velocity: F::zero(),
            target: initial,
            force: params.force,
            drag: params.drag,
            min_value: params.clamping.min_value,
            max_value: params.clamping.max_value,
            clamp_target: params.clamping.clamp_target,
            clamp_current_value: params.clamping.clamp_current_value,
            stop_on_current_value_clamp: params.clamping.stop_on_clamp,
            update_enabled: true,
            operation_value: F::zero(),
        }
    }

    /// Snap to rest on the target.
    ///
    /// Also the recovery path for a step that produced non-finite numbers.
    /// A non-finite target cannot be rested on: the axis stops where it is
    /// instead (or on its initial value, or zero, if that is not finite
    /// either).
    pub fn reach_equilibrium(&mut self) {
        self.velocity = F::zero();
        let rest = if self.target.is_finite() {
            self.target
        } else if self.current_value.is_finite() {
            self.current_value
        } else if self.initial_value.is_finite() {
            self.initial_value
        } else {
            F::zero()
        };
        self.current_value = rest;
        self.candidate_value = rest;
    }

    /// Copy the candidate into the current value. Returns false if the axis
    /// is frozen.
    pub fn commit_candidate(&mut self) -> bool {
        if !self.update_enabled {
            return false;
        }
        self.current_value = self.candidate_value;
        true
    }

    /// Confine the target to the bounds if `clamp_target` is set. Returns
    /// whether the target moved.
    pub fn clamp_target(&mut self) -> bool {
        if !self.clamp_target {
            return false;
        }
        let clamped = self.target.clamp(self.min_value, self.max_value);
        let changed = clamped != self.target;
        self.target = clamped;
        changed
    }

    /// Confine the current value to the bounds if `clamp_current_value` is
    /// set, zeroing velocity on a hit when `stop_on_current_value_clamp` is
    /// set. Returns whether the current value moved.
    pub fn clamp_current_value(&mut self) -> bool {
        if !self.clamp_current_value {
            return false;
        }
        let clamped = self.current_value.clamp(self.min_value, self.max_value);
        if clamped == self.current_value {
            return false;
        }
        self.current_value = clamped;
        if self.stop_on_current_value_clamp {
            self.velocity = F::zero();
        }
        true
    }

    /// Back to the authoring-time value, at rest.
    pub fn reset(&mut self) {
        self.current_value = self.initial_value;
        self.candidate_value = self.initial_value;
        self.velocity = F::zero();
        self.operation_value = F::zero();
    }

    pub fn distance_to_target(&self) -> F {
        self.target - self.current_value
    }

    pub fn is_on_target(&self) -> bool {
        self.distance_to_target()
            .is_near_zero(F::from_f32(ON_TARGET_EPSILON))
    }

    pub fn is_close_to_stopping(&self) -> bool {
        let eps = F::from_f32(CLOSE_TO_STOPPING_EPSILON);
        self.distance_to_target().is_near_zero(eps) && self.velocity.is_near_zero(eps)
    }

    /// Velocity and current value are both finite.
    pub fn is_finite(&self) -> bool {
        self.velocity.is_finite() && self.current_value.is_finite()
    }
}

impl<F: Float> Default for SpringValue<F> {
    fn default() -> Self {
        Self::new(F::zero())
    }
}
