use contracts::domain::a004_device::Device;
use contracts::shared::api::Page;

use crate::shared::api_utils::{path_segment, ApiContext, PageQuery};
use crate::shared::error::ClientError;

pub async fn fetch_devices_page(
    ctx: &ApiContext,
    page: u32,
    limit: u32,
) -> Result<Page<Device>, ClientError> {
    ctx.get_page("/devices", &PageQuery { page, limit }).await
}

pub async fn fetch_device(ctx: &ApiContext, device_id: &str) -> Result<Device, ClientError> {
    ctx.get_one(&format!("/devices/{}", path_segment(device_id)))
        .await
}
