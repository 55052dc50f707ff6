//! Remote action names.

use super::ParseRemoteActionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation recognised by the remote system of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemoteAction {
    /// Fetch every order.
    GetAllOrders,
    /// Create an order from a draft.
    AddOrder,
    /// Overwrite an order from a draft.
    EditOrder,
    /// Delete an order.
    DeleteOrder,
    /// Close an order with a finish date.
    CloseOrder,
    /// Move an order to a board column.
    UpdateKanbanStatus,
    /// Register a container number.
    AddNewContainer,
    /// Fetch the order history of one container.
    GetContainerHistory,
}

impl RemoteAction {
    /// Returns the wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetAllOrders => "getAllOrders",
            Self::AddOrder => "addOrder",
            Self::EditOrder => "editOrder",
            Self::DeleteOrder => "deleteOrder",
            Self::CloseOrder => "closeOrder",
            Self::UpdateKanbanStatus => "updateKanbanStatus",
            Self::AddNewContainer => "addNewContainer",
            Self::GetContainerHistory => "getContainerHistory",
        }
    }
}

impl fmt::Display for RemoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RemoteAction {
    type Error = ParseRemoteActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "getAllOrders" => Ok(Self::GetAllOrders),
            "addOrder" => Ok(Self::AddOrder),
            "editOrder" => Ok(Self::EditOrder),
            "deleteOrder" => Ok(Self::DeleteOrder),
            "closeOrder" => Ok(Self::CloseOrder),
            "updateKanbanStatus" => Ok(Self::UpdateKanbanStatus),
            "addNewContainer" => Ok(Self::AddNewContainer),
            "getContainerHistory" => Ok(Self::GetContainerHistory),
            _ => Err(ParseRemoteActionError(value.to_owned())),
        }
    }
}
