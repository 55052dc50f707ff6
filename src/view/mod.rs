//! View derivation engine.
//!
//! Every view here is a pure function of the stored orders and the table
//! state: the filtered and paginated table, the treatment board, the
//! autocomplete indexes, the headline counters, the container inventory and
//! the deadline alerts. Nothing in this module writes to the record store.

mod autocomplete;
mod config;
mod counters;
mod dashboard;
mod deadlines;
mod inventory;
mod kanban;
mod search;
mod state;
mod table;

pub use autocomplete::{AutocompleteIndex, SuggestField};
pub use config::ViewConfig;
pub use counters::DashboardCounters;
pub use dashboard::{DashboardView, DerivationInput};
pub use deadlines::{DeadlineAlert, upcoming_deadlines};
pub use inventory::{AvailableContainer, ContainerAvailability, ContainerInventory, InUseContainer};
pub use kanban::{KanbanBoard, KanbanCard, KanbanLane, PendingMove};
pub use search::{FieldHighlight, SearchField, highlight, match_ranges, matches_search};
pub use state::{
    ActionFilter, SortColumn, SortDirection, SortKey, StatusFilter, ViewIntent, ViewState,
};
pub use table::{TablePage, TableRow, compute_view, page_count, passes_filters, sort_rows};

#[cfg(test)]
mod tests;
