use crate::client::Predictor;
use crate::config::Variant;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub variant: Variant,
    pub predictor: Arc<Predictor>,
}

impl AppState {
    pub fn new(variant: Variant, predictor: Predictor) -> Self {
        Self {
            variant,
            predictor: Arc::new(predictor),
        }
    }
}
