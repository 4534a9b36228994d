//! Checks for physically meaningless parameters and state.
//!
//! Validation never fails a step. It only produces diagnostics; callers
//! decide whether to reject, auto-correct, or carry on.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{ClampingParameters, IntegrationParameters, PhysicsParameters};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::value::SpringValue;

/// Something that can report what is wrong with itself.
pub trait Validate {
    /// Human-readable diagnostics; empty when valid.
    fn validate(&self) -> Vec<String>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Raise the diagnostics as an error, for callers that refuse to run
    /// with a broken configuration.
    fn ensure_valid(&self) -> Result<(), PhysicsError> {
        let diagnostics = self.validate();
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(PhysicsError::InvalidParameters(diagnostics))
        }
    }
}

// Written as negated comparisons so NaN is reported too.

fn check_non_negative<F: Float>(out: &mut Vec<String>, what: &str, value: F) {
    if !(value >= F::zero()) {
        out.push(format!("{what} must be non-negative, got {value}"));
    }
}

fn check_finite<F: Float>(out: &mut Vec<String>, what: &str, value: F) {
    if !value.is_finite() {
        out.push(format!("{what} is not finite ({value})"));
    }
}

fn check_bounds<F: Float>(out: &mut Vec<String>, min_value: F, max_value: F) {
    if !(min_value <= max_value) {
        out.push(format!(
            "min value ({min_value}) must not be greater than max value ({max_value})"
        ));
    }
}

impl<F: Float> Validate for IntegrationParameters<F> {
    fn validate(&self) -> Vec<String> {
        let mut out = Vec::new();
        check_non_negative(&mut out, "force threshold", self.force_threshold);
        if !(self.fixed_time_step > F::zero()) {
            out.push(format!(
                "fixed time step must be positive, got {}",
                self.fixed_time_step
            ));
        }
        out
    }
}

impl<F: Float> Validate for ClampingParameters<F> {
    fn validate(&self) -> Vec<String> {
        let mut out = Vec::new();
        check_bounds(&mut out, self.min_value, self.max_value);
        out
    }
}

impl<F: Float> Validate for PhysicsParameters<F> {
    fn validate(&self) -> Vec<String> {
        let mut out = Vec::new();
        check_non_negative(&mut out, "force", self.force);
        check_non_negative(&mut out, "drag", self.drag);
        out.extend(self.integration.validate());
        out.extend(self.clamping.validate());
        out
    }
}

impl<F: Float> Validate for SpringValue<F> {
    fn validate(&self) -> Vec<String> {
        let mut out = Vec::new();
        check_non_negative(&mut out, "force", self.force);
        check_non_negative(&mut out, "drag", self.drag);
        check_bounds(&mut out, self.min_value, self.max_value);
        check_finite(&mut out, "target", self.target);
        check_finite(&mut out, "min value", self.min_value);
        check_finite(&mut out, "max value", self.max_value);
        if !self.current_value.is_finite() {
            out.push(format!("current value is not finite ({})", self.current_value));
        }
        if !self.velocity.is_finite() {
            out.push(format!("velocity is not finite ({})", self.velocity));
        }
        out
    }
}
