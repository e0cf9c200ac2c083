use contracts::domain::a003_work_order::{
    AssignWorkOrderDto, ResolveWorkOrderForm, UpdateWorkOrderStatusDto, WorkOrder,
    WorkOrderAction,
};
use contracts::shared::api::Page;
use contracts::shared::validation::ValidationError;
use serde::Serialize;

use crate::shared::api_utils::{path_segment, ApiContext};
use crate::shared::error::ClientError;

const BASE: &str = "/work-orders";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkOrdersQuery<'a> {
    page: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    technician_id: Option<&'a str>,
}

/// One page of work orders. Technician sessions only see their own.
pub async fn fetch_work_orders_page(
    ctx: &ApiContext,
    page: u32,
    limit: u32,
) -> Result<Page<WorkOrder>, ClientError> {
    let session = ctx.session();
    let query = WorkOrdersQuery {
        page,
        limit,
        technician_id: session
            .is_technician()
            .then_some(session.user_id.as_str()),
    };
    ctx.get_page(BASE, &query).await
}

pub async fn fetch_work_order(
    ctx: &ApiContext,
    work_order_id: &str,
) -> Result<WorkOrder, ClientError> {
    ctx.get_one(&format!("{}/{}", BASE, path_segment(work_order_id)))
        .await
}

/// Start or escalate. Resolving has its own call with a mandatory report.
pub async fn update_work_order_status(
    ctx: &ApiContext,
    order: &WorkOrder,
    action: WorkOrderAction,
    notes: Option<&str>,
) -> Result<WorkOrder, ClientError> {
    if action == WorkOrderAction::Resolve {
        return Err(
            ValidationError::new("status", "Use the resolve form to close a work order").into(),
        );
    }
    check_action(order, action)?;
    let dto = UpdateWorkOrderStatusDto {
        status: action.target_status(),
        notes: notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
    };
    log::info!("{} on work order {}", action.label(), order.work_order_id);
    ctx.patch(
        &format!("{}/{}/status", BASE, path_segment(&order.work_order_id)),
        &dto,
    )
    .await
}

pub async fn resolve_work_order(
    ctx: &ApiContext,
    order: &WorkOrder,
    form: &ResolveWorkOrderForm,
) -> Result<WorkOrder, ClientError> {
    check_action(order, WorkOrderAction::Resolve)?;
    let dto = form.to_dto()?;
    log::info!(
        "Resolving work order {} as {}",
        order.work_order_id,
        dto.action_taken
    );
    ctx.patch(
        &format!("{}/{}/resolve", BASE, path_segment(&order.work_order_id)),
        &dto,
    )
    .await
}

pub async fn assign_work_order(
    ctx: &ApiContext,
    work_order_id: &str,
    technician_id: &str,
) -> Result<WorkOrder, ClientError> {
    let technician_id = technician_id.trim();
    if technician_id.is_empty() {
        return Err(ValidationError::new("technicianId", "Technician is required").into());
    }
    let dto = AssignWorkOrderDto {
        technician_id: technician_id.to_string(),
    };
    ctx.patch(
        &format!("{}/{}/assign", BASE, path_segment(work_order_id)),
        &dto,
    )
    .await
}

/// An action is allowed only when the order currently offers it
pub fn check_action(order: &WorkOrder, action: WorkOrderAction) -> Result<(), ValidationError> {
    if order.available_actions().contains(&action) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "status",
            format!(
                "\"{}\" is not available for a {} work order",
                action.label(),
                order.display_status().label.to_lowercase()
            ),
        ))
    }
}
