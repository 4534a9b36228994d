//! Closed-form damped harmonic oscillator.

use crate::config::PhysicsParameters;
use crate::float::Float;
use crate::integrator::{write_or_settle, Integrator, StepOutcome};
use crate::value::SpringValue;

/// Below this angular frequency the spring is treated as unable to move.
/// Also the half-width of the damping-ratio band treated as critical.
pub const ANALYTICAL_OMEGA_EPSILON: f32 = 1e-4;

/// Which closed-form branch a parameter set falls into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DampingRegime {
    /// `omega` below epsilon: position and velocity pass through.
    Static,
    Overdamped,
    Underdamped,
    CriticallyDamped,
}

impl DampingRegime {
    pub fn classify<F: Float>(omega: F, zeta: F) -> Self {
        let eps = F::from_f32(ANALYTICAL_OMEGA_EPSILON);
        if omega < eps {
            DampingRegime::Static
        } else if zeta > F::one() + eps {
            DampingRegime::Overdamped
        } else if zeta < F::one() - eps {
            DampingRegime::Underdamped
        } else {
            DampingRegime::CriticallyDamped
        }
    }
}

/// Linear map from `(offset, velocity)` at `t` to `(offset, velocity)` at
/// `t + dt`, where offset is `current - target`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnalyticalFactors<F: Float> {
    pub position_factor: F,
    pub velocity_factor: F,
    pub position_to_velocity_factor: F,
    pub velocity_decay_factor: F,
}

impl<F: Float> AnalyticalFactors<F> {
    pub fn identity() -> Self {
        AnalyticalFactors {
            position_factor: F::one(),
            velocity_factor: F::zero(),
            position_to_velocity_factor: F::zero(),
            velocity_decay_factor: F::one(),
        }
    }

    /// Factors for angular frequency `omega` and damping ratio `zeta`
    /// (negative ratios are treated as zero).
    pub fn compute(omega: F, zeta: F, dt: F) -> Self {
        let zeta = zeta.max(F::zero());
        match DampingRegime::classify(omega, zeta) {
            DampingRegime::Static => Self::identity(),
            DampingRegime::Overdamped => {
                let za = -omega * zeta;
                let zb = omega * (zeta * zeta - F::one()).sqrt();
                let z1 = za - zb;
                let z2 = za + zb;
                let e1 = (z1 * dt).exp();
                let e2 = (z2 * dt).exp();
                let inv_two_zb = F::half() / zb;

                let e1_over_two_zb = e1 * inv_two_zb;
                let e2_over_two_zb = e2 * inv_two_zb;
                let z1e1_over_two_zb = z1 * e1_over_two_zb;
                let z2e2_over_two_zb = z2 * e2_over_two_zb;

                AnalyticalFactors {
                    position_factor: e1_over_two_zb * z2 - z2e2_over_two_zb + e2,
                    velocity_factor: -e1_over_two_zb + e2_over_two_zb,
                    position_to_velocity_factor: (z1e1_over_two_zb - z2e2_over_two_zb + e2) * z2,
                    velocity_decay_factor: -z1e1_over_two_zb + z2e2_over_two_zb,
                }
            }
            DampingRegime::Underdamped => {
                let omega_zeta = omega * zeta;
                let alpha = omega * (F::one() - zeta * zeta).sqrt();
                let exp_term = (-omega_zeta * dt).exp();
                let cos_term = (alpha * dt).cos();
                let sin_term = (alpha * dt).sin();
                let inv_alpha = alpha.recip();

                let exp_sin = exp_term * sin_term;
                let exp_cos = exp_term * cos_term;
                let exp_omega_zeta_sin_over_alpha = exp_term * omega_zeta * sin_term * inv_alpha;

                AnalyticalFactors {
                    position_factor: exp_cos + exp_omega_zeta_sin_over_alpha,
                    velocity_factor: exp_sin * inv_alpha,
                    position_to_velocity_factor: -exp_sin * alpha
                        - omega_zeta * exp_omega_zeta_sin_over_alpha,
                    velocity_decay_factor: exp_cos - exp_omega_zeta_sin_over_alpha,
                }
            }
            DampingRegime::CriticallyDamped => {
                let exp_term = (-omega * dt).exp();
                let time_exp = dt * exp_term;
                let time_exp_freq = time_exp * omega;

                AnalyticalFactors {
                    position_factor: time_exp_freq + exp_term,
                    velocity_factor: time_exp,
                    position_to_velocity_factor: -omega * time_exp_freq,
                    velocity_decay_factor: -time_exp_freq + exp_term,
                }
            }
        }
    }

    /// Factors for a unit-mass spring with stiffness `force` and damping
    /// coefficient `drag`.
    pub fn for_spring(force: F, drag: F, dt: F) -> Self {
        let (omega, zeta) = omega_and_zeta(force, drag);
        Self::compute(omega, zeta, dt)
    }
}

/// `omega = sqrt(force)`, `zeta = drag / (2 * omega)`.
///
/// `zeta` is reported as zero when `omega` is too small to divide by; the
/// static branch ignores it anyway.
pub fn omega_and_zeta<F: Float>(force: F, drag: F) -> (F, F) {
    let omega = force.max(F::zero()).sqrt();
    if omega < F::from_f32(ANALYTICAL_OMEGA_EPSILON) {
        return (omega, F::zero());
    }
    (omega, drag / (F::two() * omega))
}

/// Exact integrator for the damped spring, unconditionally stable.
///
/// Preferred for very stiff springs where the iterative model would need
/// tiny time steps.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnalyticalIntegrator;

impl AnalyticalIntegrator {
    pub const NAME: &'static str = "analytical";
}

impl<F: Float> Integrator<F> for AnalyticalIntegrator {
    fn update(&self, dt: F, state: &mut SpringValue<F>, _params: &PhysicsParameters<F>) -> StepOutcome {
        if !(dt > F::zero()) {
            return StepOutcome::Skipped;
        }

        let factors = AnalyticalFactors::for_spring(state.force, state.drag, dt);
        let offset = state.current_value - state.target;
        let velocity = state.velocity;

        let candidate = offset * factors.position_factor
            + velocity * factors.velocity_factor
            + state.target;
        let new_velocity = offset * factors.position_to_velocity_factor
            + velocity * factors.velocity_decay_factor;

        write_or_settle(state, candidate, new_velocity, Self::NAME)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Closed-form damped oscillator: exact for any step, used above the force threshold"
    }

    fn is_suitable(&self, params: &PhysicsParameters<F>) -> bool {
        params.integration.always_use_analytical_solution
            || params.force > params.integration.force_threshold
    }
}
