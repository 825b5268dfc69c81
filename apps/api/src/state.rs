use std::sync::Arc;

use presyohan_application::UserLookupService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserLookupService>,
}
