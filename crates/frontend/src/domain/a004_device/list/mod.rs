pub mod filters;

use async_trait::async_trait;
use contracts::domain::a004_device::Device;
use contracts::shared::api::Page;

pub use filters::DeviceFilters;

use super::api;
use crate::shared::api_utils::ApiContext;
use crate::shared::config::ListConfig;
use crate::shared::error::ClientError;
use crate::shared::list_controller::{ListController, PageSource};

pub struct DevicesSource {
    ctx: ApiContext,
}

impl DevicesSource {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }
}

#[async_trait(?Send)]
impl PageSource for DevicesSource {
    type Item = Device;
    type Filters = DeviceFilters;

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        _filters: &DeviceFilters,
    ) -> Result<Page<Device>, ClientError> {
        api::fetch_devices_page(&self.ctx, page, limit).await
    }
}

pub type DevicesList = ListController<DevicesSource>;

pub fn create_state(ctx: ApiContext, config: &ListConfig) -> DevicesList {
    ListController::new(DevicesSource::new(ctx), config)
}
