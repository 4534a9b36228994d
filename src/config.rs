//! Parameter bundles shared by the integrators, the selector and the solver.
//!
//! All bundles are plain `Copy` values: cloning one is a deep copy, so a
//! composite spring can keep its own snapshot without aliasing the caller's.

use crate::float::Float;
use crate::value::SpringValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings that steer which integrator runs and how time is stepped.
///
/// # Builder Pattern
/// ```
/// use springcore::config::IntegrationParameters;
///
/// let integration: IntegrationParameters<f32> = IntegrationParameters::new()
///     .with_force_threshold(500.0)
///     .with_fixed_update_rate(true)
///     .with_fixed_time_step(1.0 / 120.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IntegrationParameters<F: Float> {
    /// Stiffness above which the analytical integrator takes over. Default: 7500.
    pub force_threshold: F,
    /// Consume frame deltas in `fixed_time_step` sub-steps. Default: false.
    pub use_fixed_update_rate: bool,
    /// Sub-step length in seconds, must be positive. Default: 0.02.
    pub fixed_time_step: F,
    /// Run the analytical integrator regardless of stiffness. Default: false.
    pub always_use_analytical_solution: bool,
}

impl<F: Float> IntegrationParameters<F> {
    pub fn new() -> Self {
        IntegrationParameters {
            force_threshold: F::from_f32(7500.0),
            use_fixed_update_rate: false,
            fixed_time_step: F::from_f32(0.02),
            always_use_analytical_solution: false,
        }
    }

    pub fn with_force_threshold(mut self, force_threshold: F) -> Self {
        self.force_threshold = force_threshold;
        self
    }

    pub fn with_fixed_update_rate(mut self, enabled: bool) -> Self {
        self.use_fixed_update_rate = enabled;
        self
    }

    pub fn with_fixed_time_step(mut self, fixed_time_step: F) -> Self {
        self.fixed_time_step = fixed_time_step;
        self
    }

    pub fn with_always_analytical(mut self, enabled: bool) -> Self {
        self.always_use_analytical_solution = enabled;
        self
    }
}

impl<F: Float> Default for IntegrationParameters<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds and flags applied around each integration step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClampingParameters<F: Float> {
    /// Confine the target to `[min_value, max_value]` before integrating.
    pub clamp_target: bool,
    /// Confine the committed value to `[min_value, max_value]`.
    pub clamp_current_value: bool,
    /// Zero the velocity when the current-value clamp actually bites.
    pub stop_on_clamp: bool,
    pub min_value: F,
    pub max_value: F,
}

impl<F: Float> ClampingParameters<F> {
    pub fn new() -> Self {
        ClampingParameters {
            clamp_target: false,
            clamp_current_value: false,
            stop_on_clamp: false,
            min_value: F::zero(),
            max_value: F::one(),
        }
    }

    /// Set both bounds at once.
    pub fn with_bounds(mut self, min_value: F, max_value: F) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_clamp_target(mut self, enabled: bool) -> Self {
        self.clamp_target = enabled;
        self
    }

    pub fn with_clamp_current_value(mut self, enabled: bool) -> Self {
        self.clamp_current_value = enabled;
        self
    }

    pub fn with_stop_on_clamp(mut self, enabled: bool) -> Self {
        self.stop_on_clamp = enabled;
        self
    }
}

impl<F: Float> Default for ClampingParameters<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one axis update needs besides the axis state itself.
///
/// # Builder Pattern
/// ```
/// use springcore::config::{ClampingParameters, PhysicsParameters};
///
/// let params: PhysicsParameters<f32> = PhysicsParameters::new()
///     .with_force(300.0)
///     .with_drag(18.0)
///     .with_clamping(ClampingParameters::new().with_bounds(0.0, 1.0).with_clamp_target(true));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhysicsParameters<F: Float> {
    /// Default stiffness for new axes. Default: 150.
    pub force: F,
    /// Default damping for new axes. Default: 10.
    pub drag: F,
    pub integration: IntegrationParameters<F>,
    pub clamping: ClampingParameters<F>,
}

impl<F: Float> PhysicsParameters<F> {
    pub fn new() -> Self {
        PhysicsParameters {
            force: F::from_f32(150.0),
            drag: F::from_f32(10.0),
            integration: IntegrationParameters::new(),
            clamping: ClampingParameters::new(),
        }
    }

    pub fn with_force(mut self, force: F) -> Self {
        self.force = force;
        self
    }

    pub fn with_drag(mut self, drag: F) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_integration(mut self, integration: IntegrationParameters<F>) -> Self {
        self.integration = integration;
        self
    }

    pub fn with_clamping(mut self, clamping: ClampingParameters<F>) -> Self {
        self.clamping = clamping;
        self
    }

    /// Snapshot carrying the axis' own stiffness and damping.
    ///
    /// Model selection is fed this so it follows per-axis force changes made
    /// at runtime.
    pub fn for_axis(&self, state: &SpringValue<F>) -> Self {
        PhysicsParameters {
            force: state.force,
            drag: state.drag,
            ..*self
        }
    }
}

impl<F: Float> Default for PhysicsParameters<F> {
    fn default() -> Self {
        Self::new()
    }
}
