//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// Handler state.
///
/// The store is reached only through [`UrlService`], which holds it as a
/// trait object so tests can substitute any [`UrlRepository`].
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
}

impl AppState {
    /// Builds the state around a repository and the public base host.
    pub fn new(repository: Arc<dyn UrlRepository>, base_host: impl Into<String>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository, base_host)),
        }
    }
}
