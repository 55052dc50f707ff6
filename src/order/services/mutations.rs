//! Server-confirmed order mutations.

use super::{DeskResult, OrderDesk, requests};
use crate::order::{
    domain::{ContainerHistoryEntry, ContainerNumber, Order, OrderDraft, OrderId},
    ports::{Notifier, OrderStore, Severity},
};
use crate::remote::domain::RemoteError;
use chrono::NaiveDate;
use mockable::Clock;

/// Returns the name users know an order by.
pub(super) fn display_name(order: &Order) -> &str {
    order
        .document_number()
        .filter(|number| !number.trim().is_empty())
        .unwrap_or_else(|| order.id().as_str())
}

/// Rejects a server record that answers for a different order.
pub(super) fn ensure_same_record(expected: &OrderId, returned: &Order) -> DeskResult<()> {
    if returned.id() == expected {
        Ok(())
    } else {
        Err(RemoteError::InvalidPayload(format!(
            "server returned order {} for a change to {expected}",
            returned.id()
        ))
        .into())
    }
}

impl<S, N, C> OrderDesk<S, N, C>
where
    S: OrderStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates an order from `draft` and stores the server's record.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`](super::DeskError::Validation) without calling the server when a
    /// required field is blank, and [`DeskError::Remote`](super::DeskError::Remote) when the call
    /// fails.
    pub async fn add_order(&self, draft: &OrderDraft) -> DeskResult<Order> {
        self.try_add_order(draft)
            .await
            .inspect_err(|err| self.report(err))
    }

    async fn try_add_order(&self, draft: &OrderDraft) -> DeskResult<Order> {
        draft.validate()?;
        let created: Order = self
            .client
            .call_decoded(&requests::add_order(draft)?)
            .await?;
        self.commit(created.clone())?;
        self.notify(
            Severity::Success,
            format!("Order {} added", display_name(&created)),
        );
        Ok(created)
    }

    /// Overwrites order `id` with `draft` and stores the server's record.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`](super::DeskError::Validation), [`DeskError::NotFound`](super::DeskError::NotFound) or
    /// [`DeskError::RecordBusy`](super::DeskError::RecordBusy) before any call, and [`DeskError::Remote`](super::DeskError::Remote)
    /// when the call fails. The stored record is untouched on failure.
    pub async fn edit_order(&self, id: &OrderId, draft: &OrderDraft) -> DeskResult<Order> {
        self.try_edit_order(id, draft)
            .await
            .inspect_err(|err| self.report(err))
    }

    async fn try_edit_order(&self, id: &OrderId, draft: &OrderDraft) -> DeskResult<Order> {
        draft.validate()?;
        self.require(id)?;
        let _claim = self.busy.claim(id)?;
        let updated: Order = self
            .client
            .call_decoded(&requests::edit_order(id, draft)?)
            .await?;
        ensure_same_record(id, &updated)?;
        self.commit(updated.clone())?;
        self.notify(
            Severity::Success,
            format!("Order {} updated", display_name(&updated)),
        );
        Ok(updated)
    }

    /// Closes order `id` on `finish` and stores the server's record.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`](super::DeskError::Validation) for closed orders or a finish date
    /// before creation, [`DeskError::NotFound`](super::DeskError::NotFound), [`DeskError::RecordBusy`](super::DeskError::RecordBusy),
    /// or [`DeskError::Remote`](super::DeskError::Remote) when the call fails.
    pub async fn close_order(&self, id: &OrderId, finish: NaiveDate) -> DeskResult<Order> {
        self.try_close_order(id, finish)
            .await
            .inspect_err(|err| self.report(err))
    }

    async fn try_close_order(&self, id: &OrderId, finish: NaiveDate) -> DeskResult<Order> {
        self.require(id)?.ensure_can_close(finish)?;
        let _claim = self.busy.claim(id)?;
        let closed: Order = self
            .client
            .call_decoded(&requests::close_order(id, finish))
            .await?;
        ensure_same_record(id, &closed)?;
        self.commit(closed.clone())?;
        self.notify(
            Severity::Success,
            format!("Order {} closed", display_name(&closed)),
        );
        Ok(closed)
    }

    /// Deletes order `id` once the server confirms.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`](super::DeskError::NotFound), [`DeskError::RecordBusy`](super::DeskError::RecordBusy), or
    /// [`DeskError::Remote`](super::DeskError::Remote) when the call fails.
    pub async fn delete_order(&self, id: &OrderId) -> DeskResult<()> {
        self.try_delete_order(id)
            .await
            .inspect_err(|err| self.report(err))
    }

    async fn try_delete_order(&self, id: &OrderId) -> DeskResult<()> {
        let existing = self.require(id)?;
        let _claim = self.busy.claim(id)?;
        self.client.call(&requests::delete_order(id)).await?;
        self.store.remove(id)?;
        tracing::info!(order_id = %id, "removed order after server confirmation");
        self.notify(
            Severity::Success,
            format!("Order {} deleted", display_name(&existing)),
        );
        Ok(())
    }

    /// Registers a container number with the server.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`](super::DeskError::Validation) without calling the server when
    /// `number` is blank, and [`DeskError::Remote`](super::DeskError::Remote) when the call fails.
    pub async fn add_container(&self, number: &str) -> DeskResult<ContainerNumber> {
        self.try_add_container(number)
            .await
            .inspect_err(|err| self.report(err))
    }

    async fn try_add_container(&self, number: &str) -> DeskResult<ContainerNumber> {
        let container = ContainerNumber::new(number)?;
        self.client.call(&requests::add_container(&container)).await?;
        self.store.register_container(container.clone())?;
        tracing::info!(container = %container, "registered container");
        self.notify(Severity::Success, format!("Container {container} added"));
        Ok(container)
    }

    /// Fetches the order history of container `number`.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`](super::DeskError::Validation) without calling the server when
    /// `number` is blank, and [`DeskError::Remote`](super::DeskError::Remote) when the call fails.
    pub async fn container_history(&self, number: &str) -> DeskResult<Vec<ContainerHistoryEntry>> {
        self.try_container_history(number)
            .await
            .inspect_err(|err| self.report(err))
    }

    async fn try_container_history(&self, number: &str) -> DeskResult<Vec<ContainerHistoryEntry>> {
        let container = ContainerNumber::new(number)?;
        let entries: Option<Vec<ContainerHistoryEntry>> = self
            .client
            .call_decoded(&requests::container_history(&container))
            .await?;
        Ok(entries.unwrap_or_default())
    }
}

