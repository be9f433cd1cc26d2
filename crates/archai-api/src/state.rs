use std::sync::Arc;

use archai_core::config::LayeredConfig;
use archai_core::formats::{BoundaryImporter, DxfBoundaryImporter};
use archai_core::{ComplianceEvaluator, MaterialEstimator};
use archai_llm::LayoutGenerator;
use archai_store::ProjectStore;

/// Shared state for all handlers
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub generator: LayoutGenerator,
    pub evaluator: ComplianceEvaluator,
    pub estimator: MaterialEstimator,
    pub importer: Arc<dyn BoundaryImporter>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        generator: LayoutGenerator,
        estimator: MaterialEstimator,
    ) -> Self {
        Self {
            store,
            generator,
            evaluator: ComplianceEvaluator::default(),
            estimator,
            importer: Arc::new(DxfBoundaryImporter),
        }
    }

    /// Wire the default pipeline from layered configuration
    ///
    /// Provider keys come from `GEMINI_API_KEY` and `OPENAI_API_KEY`.
    pub fn from_config(store: Arc<dyn ProjectStore>, config: &LayeredConfig) -> Self {
        Self::new(
            store,
            LayoutGenerator::from_env(config),
            MaterialEstimator::new(config.rates.value.clone()),
        )
    }
}
