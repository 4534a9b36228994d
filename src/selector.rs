//! Registry of integrators and the rule that picks one per step.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::analytical::AnalyticalIntegrator;
use crate::config::PhysicsParameters;
use crate::float::Float;
use crate::integrator::Integrator;
use crate::semi_implicit::SemiImplicitIntegrator;

/// Shared handle to a registered model.
pub type ModelHandle<F> = Arc<dyn Integrator<F> + Send + Sync>;

/// Caller-owned set of integrators the selector chooses from.
///
/// Registration order is priority order. Models are keyed by
/// [`Integrator::name`]; registering a name twice keeps the first.
pub struct ModelRegistry<F: Float + 'static> {
    models: Vec<ModelHandle<F>>,
}

impl<F: Float + 'static> ModelRegistry<F> {
    /// An empty registry. Selection still works: it falls back to
    /// [`select_model`].
    pub fn new() -> Self {
        ModelRegistry { models: Vec::new() }
    }

    /// Analytical first, then semi-implicit.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AnalyticalIntegrator));
        registry.register(Arc::new(SemiImplicitIntegrator));
        registry
    }

    /// Add a model. Returns false if one with the same name is already
    /// registered, in which case nothing changes.
    pub fn register(&mut self, model: ModelHandle<F>) -> bool {
        if self.contains(model.name()) {
            return false;
        }
        log::debug!("registered spring model {:?}", model.name());
        self.models.push(model);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.iter().any(|m| m.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&ModelHandle<F>> {
        self.models.iter().find(|m| m.name() == name)
    }

    pub fn models(&self) -> &[ModelHandle<F>] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Pick the model for one step.
    ///
    /// `always_use_analytical_solution` wins outright. Otherwise the first
    /// registered model that reports itself suitable runs; when none does
    /// (an empty registry, or a NaN force that fails every comparison) the
    /// built-in rule of [`select_model`] decides.
    pub fn select(&self, params: &PhysicsParameters<F>) -> &dyn Integrator<F> {
        if params.integration.always_use_analytical_solution {
            return &AnalyticalIntegrator;
        }
        let chosen = self
            .models
            .iter()
            .find(|m| m.is_suitable(params))
            .map(|m| &**m as &dyn Integrator<F>);
        match chosen {
            Some(model) => {
                log::trace!("force {} -> {}", params.force, model.name());
                model
            }
            None => {
                let model = select_model(params);
                log::trace!("force {}: no registered model suits, using {}", params.force, model.name());
                model
            }
        }
    }
}

impl<F: Float + 'static> Default for ModelRegistry<F> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// One-shot selection against the default models.
///
/// Same rule as [`ModelRegistry::select`] without needing a registry.
pub fn select_model<F: Float + 'static>(params: &PhysicsParameters<F>) -> &'static dyn Integrator<F> {
    if params.integration.always_use_analytical_solution
        || params.force > params.integration.force_threshold
    {
        &AnalyticalIntegrator
    } else {
        &SemiImplicitIntegrator
    }
}
