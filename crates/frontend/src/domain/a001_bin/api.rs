use contracts::domain::a001_bin::{Bin, BinForm, UpdateBinDto};
use contracts::shared::api::Page;

use crate::shared::api_utils::{path_segment, ApiContext, PageQuery};
use crate::shared::error::ClientError;

/// One page of `GET /bins`. Only `{page, limit}` are sent: filtering of
/// this endpoint happens on the client.
pub async fn fetch_bins_page(
    ctx: &ApiContext,
    page: u32,
    limit: u32,
) -> Result<Page<Bin>, ClientError> {
    ctx.get_page("/bins", &PageQuery { page, limit }).await
}

pub async fn fetch_bin(ctx: &ApiContext, bin_id: &str) -> Result<Bin, ClientError> {
    ctx.get_one(&format!("/bins/{}", path_segment(bin_id))).await
}

/// Validate the form and create the bin. Nothing is sent when a rule fails.
pub async fn create_bin(ctx: &ApiContext, form: &BinForm) -> Result<Bin, ClientError> {
    let dto = form.to_create_dto()?;
    log::info!("Creating bin {}", dto.bin_id);
    ctx.post("/bins", &dto).await
}

pub async fn update_bin(
    ctx: &ApiContext,
    bin_id: &str,
    dto: &UpdateBinDto,
) -> Result<Bin, ClientError> {
    if dto.is_empty() {
        // nothing to change, return the current record
        return fetch_bin(ctx, bin_id).await;
    }
    ctx.patch(&format!("/bins/{}", path_segment(bin_id)), dto)
        .await
}
