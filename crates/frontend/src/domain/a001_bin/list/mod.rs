pub mod filters;

use async_trait::async_trait;
use contracts::domain::a001_bin::Bin;
use contracts::shared::api::Page;

pub use filters::BinFilters;

use super::api;
use crate::shared::api_utils::ApiContext;
use crate::shared::config::ListConfig;
use crate::shared::error::ClientError;
use crate::shared::list_controller::{ListController, PageSource};

/// `GET /bins` as a list source; filters stay on the client
pub struct BinsSource {
    ctx: ApiContext,
}

impl BinsSource {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }
}

#[async_trait(?Send)]
impl PageSource for BinsSource {
    type Item = Bin;
    type Filters = BinFilters;

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        _filters: &BinFilters,
    ) -> Result<Page<Bin>, ClientError> {
        api::fetch_bins_page(&self.ctx, page, limit).await
    }
}

pub type BinsList = ListController<BinsSource>;

pub fn create_state(ctx: ApiContext, config: &ListConfig) -> BinsList {
    ListController::new(BinsSource::new(ctx), config)
}
