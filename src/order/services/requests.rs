//! Remote request builders for order operations.

use super::DeskResult;
use crate::order::domain::{ContainerNumber, KanbanColumn, OrderDraft, OrderId};
use crate::remote::domain::{RemoteAction, RemoteError, RemoteRequest};
use chrono::NaiveDate;

fn with_draft(request: RemoteRequest, draft: &OrderDraft) -> DeskResult<RemoteRequest> {
    request
        .with_data(draft)
        .map_err(|err| RemoteError::InvalidPayload(err.to_string()).into())
}

pub(super) fn list_orders() -> RemoteRequest {
    RemoteRequest::new(RemoteAction::GetAllOrders)
}

pub(super) fn add_order(draft: &OrderDraft) -> DeskResult<RemoteRequest> {
    with_draft(RemoteRequest::new(RemoteAction::AddOrder), draft)
}

pub(super) fn edit_order(id: &OrderId, draft: &OrderDraft) -> DeskResult<RemoteRequest> {
    with_draft(
        RemoteRequest::new(RemoteAction::EditOrder).with_id(id.as_str()),
        draft,
    )
}

pub(super) fn close_order(id: &OrderId, finish: NaiveDate) -> RemoteRequest {
    RemoteRequest::new(RemoteAction::CloseOrder)
        .with_id(id.as_str())
        .with_field("finishDate", finish.format("%Y-%m-%d").to_string())
}

pub(super) fn delete_order(id: &OrderId) -> RemoteRequest {
    RemoteRequest::new(RemoteAction::DeleteOrder).with_id(id.as_str())
}

pub(super) fn update_kanban_status(id: &OrderId, column: KanbanColumn) -> RemoteRequest {
    RemoteRequest::new(RemoteAction::UpdateKanbanStatus)
        .with_id(id.as_str())
        .with_field("newStatus", column.status().as_str())
}

pub(super) fn add_container(number: &ContainerNumber) -> RemoteRequest {
    RemoteRequest::new(RemoteAction::AddNewContainer).with_field("containerNumber", number.as_str())
}

pub(super) fn container_history(number: &ContainerNumber) -> RemoteRequest {
    RemoteRequest::new(RemoteAction::GetContainerHistory)
        .with_field("containerNumber", number.as_str())
}
