pub mod filters;

use async_trait::async_trait;
use contracts::domain::a002_collection_request::CollectionRequest;
use contracts::shared::api::Page;

pub use filters::RequestFilters;

use super::api;
use crate::shared::api_utils::ApiContext;
use crate::shared::config::ListConfig;
use crate::shared::error::ClientError;
use crate::shared::list_controller::{ListController, PageSource};

/// Whose requests a list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    /// Coordinator queue
    All,
    /// Citizen history
    Mine,
}

pub struct RequestsSource {
    ctx: ApiContext,
    scope: RequestScope,
}

impl RequestsSource {
    pub fn new(ctx: ApiContext, scope: RequestScope) -> Self {
        Self { ctx, scope }
    }
}

#[async_trait(?Send)]
impl PageSource for RequestsSource {
    type Item = CollectionRequest;
    type Filters = RequestFilters;

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        _filters: &RequestFilters,
    ) -> Result<Page<CollectionRequest>, ClientError> {
        match self.scope {
            RequestScope::All => api::fetch_requests_page(&self.ctx, page, limit).await,
            RequestScope::Mine => api::fetch_my_requests_page(&self.ctx, page, limit).await,
        }
    }
}

pub type RequestsList = ListController<RequestsSource>;

pub fn create_state(ctx: ApiContext, scope: RequestScope, config: &ListConfig) -> RequestsList {
    ListController::new(RequestsSource::new(ctx, scope), config)
}
