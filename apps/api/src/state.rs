use std::sync::Arc;

use tokio::sync::Mutex;

use crate::exercises::generator::ExerciseGenerator;
use crate::progression::store::ProgressStore;
use crate::view::ViewController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Sole owner of the in-memory `UserState` and the current mode.
    /// Never held across a model call.
    pub controller: Arc<Mutex<ViewController>>,
    pub store: ProgressStore,
    /// Pluggable generator. Default: GeminiExerciseGenerator.
    pub generator: Arc<dyn ExerciseGenerator>,
}

impl AppState {
    pub fn new(
        controller: ViewController,
        store: ProgressStore,
        generator: Arc<dyn ExerciseGenerator>,
    ) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            store,
            generator,
        }
    }
}
