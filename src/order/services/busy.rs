//! Per-record in-flight flags.

use super::{DeskError, DeskResult};
use crate::order::domain::{KanbanColumn, OrderId};
use crate::view::PendingMove;
use indexmap::IndexMap;
use std::sync::{Arc, Mutex};

/// Records with a remote change in flight, plus any unconfirmed board move.
#[derive(Debug, Clone, Default)]
pub(super) struct BusyRecords {
    entries: Arc<Mutex<IndexMap<OrderId, Option<KanbanColumn>>>>,
}

impl BusyRecords {
    /// Marks `id` busy, or fails when it already is.
    pub(super) fn claim(&self, id: &OrderId) -> DeskResult<RecordClaim> {
        let mut entries = self.entries.lock().map_err(DeskError::poisoned)?;
        if entries.contains_key(id) {
            tracing::info!(order_id = %id, "rejected change to busy order");
            return Err(DeskError::RecordBusy(id.clone()));
        }
        entries.insert(id.clone(), None);
        Ok(RecordClaim {
            entries: Arc::clone(&self.entries),
            id: id.clone(),
        })
    }

    /// Returns unconfirmed board moves in claim order.
    pub(super) fn pending_moves(&self) -> DeskResult<Vec<PendingMove>> {
        let entries = self.entries.lock().map_err(DeskError::poisoned)?;
        Ok(entries
            .iter()
            .filter_map(|(id, column)| {
                column.map(|target| PendingMove {
                    order_id: id.clone(),
                    column: target,
                })
            })
            .collect())
    }

    /// Returns `true` when `id` has a change in flight.
    pub(super) fn is_busy(&self, id: &OrderId) -> DeskResult<bool> {
        let entries = self.entries.lock().map_err(DeskError::poisoned)?;
        Ok(entries.contains_key(id))
    }
}

/// Exclusive right to change one order; released on drop.
#[derive(Debug)]
pub(super) struct RecordClaim {
    entries: Arc<Mutex<IndexMap<OrderId, Option<KanbanColumn>>>>,
    id: OrderId,
}

impl RecordClaim {
    /// Shows the claimed order in `column` until the claim ends.
    pub(super) fn show_in(&self, column: KanbanColumn) -> DeskResult<()> {
        let mut entries = self.entries.lock().map_err(DeskError::poisoned)?;
        entries.insert(self.id.clone(), Some(column));
        Ok(())
    }
}

impl Drop for RecordClaim {
    fn drop(&mut self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.shift_remove(&self.id);
        }
    }
}
