//! Domain model for container-rental orders.
//!
//! The order domain models the order record, its closed status set, the
//! editable draft used by the order form, and the kanban transition rules.
//! All infrastructure concerns are kept outside the domain boundary.

mod container;
mod draft;
mod error;
mod ids;
mod order;
mod session;
mod status;
mod transition;

pub use container::ContainerHistoryEntry;
pub use draft::OrderDraft;
pub use error::{OrderDomainError, ParseActionTypeError, ParseOrderStatusError};
pub use ids::{
    CONTAINER_DELIMITER, ContainerNumber, OrderId, parse_container_list, split_delimited,
};
pub use order::Order;
pub use session::{EditMode, EditSession};
pub use status::{ActionType, OrderStatus};
pub use transition::{KanbanColumn, TransitionPlan};
