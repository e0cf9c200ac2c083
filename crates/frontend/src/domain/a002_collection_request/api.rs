use chrono::{DateTime, NaiveDate, Utc};
use contracts::domain::a002_collection_request::{
    CollectionRequest, RequestAction, RequestDecisionDto, RequestForm,
};
use contracts::shared::api::Page;
use contracts::shared::validation::ValidationError;

use crate::shared::api_utils::{path_segment, ApiContext, PageQuery};
use crate::shared::error::ClientError;

const BASE: &str = "/collection-requests";

/// Coordinator view: every request, newest first as the server orders them
pub async fn fetch_requests_page(
    ctx: &ApiContext,
    page: u32,
    limit: u32,
) -> Result<Page<CollectionRequest>, ClientError> {
    ctx.get_page(BASE, &PageQuery { page, limit }).await
}

/// Citizen view: requests owned by the session user
pub async fn fetch_my_requests_page(
    ctx: &ApiContext,
    page: u32,
    limit: u32,
) -> Result<Page<CollectionRequest>, ClientError> {
    let path = format!("{}/user/{}", BASE, path_segment(&ctx.session().user_id));
    ctx.get_page(&path, &PageQuery { page, limit }).await
}

pub async fn fetch_request(
    ctx: &ApiContext,
    tracking_id: &str,
) -> Result<CollectionRequest, ClientError> {
    ctx.get_one(&format!("{}/{}", BASE, path_segment(tracking_id)))
        .await
}

/// Validate the citizen form against `today` and submit it
pub async fn create_request(
    ctx: &ApiContext,
    form: &RequestForm,
    today: NaiveDate,
) -> Result<CollectionRequest, ClientError> {
    let dto = form.to_create_dto(today)?;
    log::info!("Submitting {} pickup request", dto.waste_type);
    ctx.post(BASE, &dto).await
}

pub async fn approve_request(
    ctx: &ApiContext,
    request: &CollectionRequest,
) -> Result<CollectionRequest, ClientError> {
    apply_action(ctx, request, RequestAction::Approve, RequestDecisionDto::default()).await
}

/// A reason is mandatory when rejecting
pub async fn reject_request(
    ctx: &ApiContext,
    request: &CollectionRequest,
    reason: &str,
) -> Result<CollectionRequest, ClientError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ValidationError::new("reason", "Rejection reason is required").into());
    }
    let dto = RequestDecisionDto {
        reason: Some(reason.to_string()),
        scheduled_date: None,
    };
    apply_action(ctx, request, RequestAction::Reject, dto).await
}

pub async fn schedule_request(
    ctx: &ApiContext,
    request: &CollectionRequest,
    scheduled_date: DateTime<Utc>,
) -> Result<CollectionRequest, ClientError> {
    let dto = RequestDecisionDto {
        reason: None,
        scheduled_date: Some(scheduled_date),
    };
    apply_action(ctx, request, RequestAction::Schedule, dto).await
}

pub async fn cancel_request(
    ctx: &ApiContext,
    request: &CollectionRequest,
    reason: Option<&str>,
) -> Result<CollectionRequest, ClientError> {
    let dto = RequestDecisionDto {
        reason: reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string),
        scheduled_date: None,
    };
    apply_action(ctx, request, RequestAction::Cancel, dto).await
}

/// Checks the lifecycle locally before calling the action endpoint
pub fn check_action(
    request: &CollectionRequest,
    action: RequestAction,
) -> Result<(), ValidationError> {
    if request.status.can_transition_to(&action.target_status()) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "status",
            format!(
                "Cannot {} a request that is {}",
                action.label().to_lowercase(),
                request.status.display_name().to_lowercase()
            ),
        ))
    }
}

fn action_path(action: RequestAction) -> &'static str {
    match action {
        RequestAction::Approve => "approve",
        RequestAction::Reject => "reject",
        RequestAction::Schedule => "schedule",
        RequestAction::Cancel => "cancel",
    }
}

async fn apply_action(
    ctx: &ApiContext,
    request: &CollectionRequest,
    action: RequestAction,
    dto: RequestDecisionDto,
) -> Result<CollectionRequest, ClientError> {
    check_action(request, action)?;
    let path = format!(
        "{}/{}/{}",
        BASE,
        path_segment(&request.tracking_id),
        action_path(action)
    );
    log::info!("{} request {}", action.label(), request.tracking_id);
    ctx.patch(&path, &dto).await
}
