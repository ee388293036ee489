use crate::api::service::SolveService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SolveService>,
}

impl AppState {
    pub fn new(service: SolveService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
