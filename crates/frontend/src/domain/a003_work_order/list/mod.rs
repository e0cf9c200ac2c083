pub mod filters;

use async_trait::async_trait;
use contracts::domain::a003_work_order::WorkOrder;
use contracts::shared::api::Page;

pub use filters::WorkOrderFilters;

use super::api;
use crate::shared::api_utils::ApiContext;
use crate::shared::config::ListConfig;
use crate::shared::error::ClientError;
use crate::shared::list_controller::{ListController, PageSource};

pub struct WorkOrdersSource {
    ctx: ApiContext,
}

impl WorkOrdersSource {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }
}

#[async_trait(?Send)]
impl PageSource for WorkOrdersSource {
    type Item = WorkOrder;
    type Filters = WorkOrderFilters;

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        _filters: &WorkOrderFilters,
    ) -> Result<Page<WorkOrder>, ClientError> {
        api::fetch_work_orders_page(&self.ctx, page, limit).await
    }
}

pub type WorkOrdersList = ListController<WorkOrdersSource>;

pub fn create_state(ctx: ApiContext, config: &ListConfig) -> WorkOrdersList {
    ListController::new(WorkOrdersSource::new(ctx), config)
}
