use std::sync::Arc;

use crate::service::PostService;

/// Shared application state, cloned per request.
///
/// The service (and the store handle it owns) lives for the whole process;
/// handlers share it through `Arc` instead of any module-level global.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PostService>,
}

impl AppState {
    pub fn new(service: PostService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
