//! Error types for physics operations.
//!
//! Integrators never return these: a numerically failed step snaps the axis
//! to equilibrium instead. They exist for callers that want to refuse to run.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

/// Errors a caller may raise around the spring core.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Parameters or state failed validation; carries every diagnostic.
    #[error("invalid spring configuration: {}", .0.join("; "))]
    InvalidParameters(Vec<String>),
    /// A physics-layer failure with an optional underlying cause.
    #[error("{message}")]
    Simulation {
        message: String,
        #[source]
        source: Option<Box<dyn core::error::Error + Send + Sync>>,
    },
}

impl PhysicsError {
    pub fn simulation(message: impl Into<String>) -> Self {
        PhysicsError::Simulation {
            message: message.into(),
            source: None,
        }
    }

    pub fn simulation_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        PhysicsError::Simulation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The diagnostics behind an `InvalidParameters` error.
    pub fn diagnostics(&self) -> &[String] {
        match self {
            PhysicsError::InvalidParameters(diagnostics) => diagnostics,
            PhysicsError::Simulation { .. } => &[],
        }
    }
}
