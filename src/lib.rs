//! Per-axis damped spring simulation for animating values toward a moving target.
//!
//! `springcore` integrates one scalar axis at a time (floats, vector and color
//! components) with configurable stiffness (`force`) and damping (`drag`).
//! Composite springs own one [`SpringValue`] per component and drive them all
//! through the same update contract.
//!
//! # Features
//!
//! - **Two integrators**: semi-implicit Euler for moderate stiffness, a
//!   closed-form solution (under/critically/over-damped) for stiff springs
//! - **Model selection**: per-step choice through a caller-owned [`ModelRegistry`]
//! - **Two-phase steps**: integrate into a candidate, then commit, so all axes
//!   of a composite can be integrated before any is observed
//! - **Self-healing**: a step that goes non-finite snaps the axis to its target
//! - **Validation**: diagnostics for negative force/drag, inverted bounds,
//!   non-positive fixed steps
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Example
//! ```
//! use springcore::{NoOpStepObserver, PhysicsParameters, SpringSolver, Vector2Spring};
//!
//! let solver = SpringSolver::<f32>::new();
//! let mut spring = Vector2Spring::new([0.0, 0.0], PhysicsParameters::new()).unwrap();
//! spring.set_target([10.0, 5.0]);
//! for _ in 0..600 {
//!     spring.update(1.0 / 60.0, &solver, &mut NoOpStepObserver);
//! }
//! assert!(spring.is_close_to_stopping());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod value;
pub mod config;
pub mod integrator;
pub mod semi_implicit;
pub mod analytical;
pub mod selector;
pub mod validate;
pub mod solver;
pub mod composite;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use value::{SpringValue, CLOSE_TO_STOPPING_EPSILON, ON_TARGET_EPSILON};
pub use config::{ClampingParameters, IntegrationParameters, PhysicsParameters};
pub use integrator::{Integrator, StepOutcome};
pub use semi_implicit::SemiImplicitIntegrator;
pub use analytical::{AnalyticalFactors, AnalyticalIntegrator, DampingRegime, ANALYTICAL_OMEGA_EPSILON};
pub use selector::{select_model, ModelHandle, ModelRegistry};
pub use validate::Validate;
pub use solver::{CommitOutcome, SpringSolver};
pub use composite::{
    ColorSpring, CompositeSpring, FloatSpring, Vector2Spring, Vector3Spring, Vector4Spring,
    MAX_FIXED_SUBSTEPS,
};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
