use serde::Serialize;

use crate::orchestrate::Orchestrator;

/// Model catalog served by `/api/models`
#[derive(Debug, Serialize)]
pub struct ModelCatalog {
    pub image_models: Vec<String>,
    pub video_models: Vec<String>,
    pub effects: &'static [&'static str],
}

/// Enumerate the configured registries plus the static effects list
pub(crate) fn catalog(orchestrator: &Orchestrator) -> ModelCatalog {
    ModelCatalog {
        image_models: orchestrator.image_models(),
        video_models: orchestrator.video_models(),
        effects: videogen::EFFECT_PRESETS,
    }
}
