//! Edit session state for the order form.

use super::{Order, OrderDraft, OrderId};

/// What submitting the active edit session will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    /// Submitting creates a new order.
    Add,
    /// Submitting updates the identified order.
    Edit(OrderId),
    /// Submitting creates a new order cloned from `source`.
    Duplicate {
        /// Order the draft was cloned from.
        source: OrderId,
    },
}

impl EditMode {
    /// Returns the order that submission will overwrite, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&OrderId> {
        match self {
            Self::Edit(id) => Some(id),
            Self::Add | Self::Duplicate { .. } => None,
        }
    }
}

/// The single active order-form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    mode: EditMode,
    draft: OrderDraft,
}

impl EditSession {
    /// Starts a session for a brand new order.
    #[must_use]
    pub fn add() -> Self {
        Self {
            mode: EditMode::Add,
            draft: OrderDraft::new(),
        }
    }

    /// Starts a session editing `order`.
    #[must_use]
    pub fn edit(order: &Order) -> Self {
        Self {
            mode: EditMode::Edit(order.id().clone()),
            draft: OrderDraft::from_order(order),
        }
    }

    /// Starts a session cloning `source` into a new order.
    #[must_use]
    pub fn duplicate(source: &Order) -> Self {
        Self {
            mode: EditMode::Duplicate {
                source: source.id().clone(),
            },
            draft: OrderDraft::duplicate_of(source),
        }
    }

    /// Returns the session mode.
    #[must_use]
    pub const fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Returns the draft being edited.
    #[must_use]
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Returns the draft for in-place edits.
    pub const fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Consumes the session, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (EditMode, OrderDraft) {
        (self.mode, self.draft)
    }
}
