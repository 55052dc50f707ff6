//! Process-wide table view state and the user intents that change it.

use crate::order::domain::{ActionType, KanbanColumn, OrderId, OrderStatus};
use serde::{Deserialize, Serialize};

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// Document number.
    DocumentNumber,
    /// Customer name.
    Customer,
    /// Agent name.
    Agent,
    /// Site address.
    Address,
    /// Action type.
    ActionType,
    /// Joined container list.
    Containers,
    /// Creation date.
    CreatedOn,
    /// Expected finish date.
    ExpectedFinishOn,
    /// Actual finish date.
    FinishedOn,
    /// Status label.
    Status,
    /// Derived overdue-day count.
    OverdueDays,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    /// Column to sort by.
    pub column: SortColumn,
    /// Direction.
    pub direction: SortDirection,
}

impl Default for SortKey {
    fn default() -> Self {
        Self {
            column: SortColumn::CreatedOn,
            direction: SortDirection::Descending,
        }
    }
}

/// Status filter; `All` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    /// Only the given status passes.
    Only(OrderStatus),
}

/// Action filter; `All` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionFilter {
    /// Every action type passes.
    #[default]
    All,
    /// Only the given action type passes.
    Only(ActionType),
}

/// Presentation event consumed by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    /// The search box changed.
    SearchChanged(String),
    /// The status filter changed.
    StatusFilterChanged(StatusFilter),
    /// The action filter changed.
    ActionFilterChanged(ActionFilter),
    /// A column header was selected.
    SortRequested(SortColumn),
    /// Jump to the first page.
    FirstPage,
    /// Go back one page.
    PreviousPage,
    /// Go forward one page.
    NextPage,
    /// Jump to the last page.
    LastPage,
    /// Jump to a 1-based page.
    GoToPage(usize),
    /// A kanban card was dropped on a column.
    CardDropped {
        /// Dragged order.
        order_id: OrderId,
        /// Column the card was dropped on.
        column: KanbanColumn,
    },
}

/// Search, filter, sort and pagination state of the order table.
///
/// Every change to search, filters or sort resets the page to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    search: String,
    status_filter: StatusFilter,
    action_filter: ActionFilter,
    sort: SortKey,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_filter: StatusFilter::All,
            action_filter: ActionFilter::All,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ViewState {
    /// Creates the initial state: no filters, newest orders first, page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the status filter.
    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Returns the action filter.
    #[must_use]
    pub const fn action_filter(&self) -> ActionFilter {
        self.action_filter
    }

    /// Returns the sort key.
    #[must_use]
    pub const fn sort(&self) -> SortKey {
        self.sort
    }

    /// Returns the 1-based current page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Sets the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Sets the status filter.
    pub const fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.page = 1;
    }

    /// Sets the action filter.
    pub const fn set_action_filter(&mut self, filter: ActionFilter) {
        self.action_filter = filter;
        self.page = 1;
    }

    /// Sets the sort key explicitly.
    pub const fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.page = 1;
    }

    /// Selects `column`: flips direction when already active, otherwise
    /// sorts ascending by it.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        let direction = if self.sort.column == column {
            self.sort.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        self.set_sort(SortKey { column, direction });
    }

    /// Jumps to `page`, clamped to `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Jumps to page 1.
    pub const fn first_page(&mut self) {
        self.page = 1;
    }

    /// Goes back one page, stopping at 1.
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Goes forward one page, stopping at `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to_page(self.page.saturating_add(1), total_pages);
    }

    /// Jumps to `total_pages`.
    pub fn last_page(&mut self, total_pages: usize) {
        self.go_to_page(total_pages, total_pages);
    }

    /// Pulls the page back inside `[1, total_pages]` after the data shrank.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.go_to_page(self.page, total_pages);
    }

    /// Applies a table intent given the current page count.
    ///
    /// Returns `false` for intents that do not touch the table state, such
    /// as [`ViewIntent::CardDropped`].
    pub fn apply(&mut self, intent: &ViewIntent, total_pages: usize) -> bool {
        match intent {
            ViewIntent::SearchChanged(term) => self.set_search(term.clone()),
            ViewIntent::StatusFilterChanged(filter) => self.set_status_filter(*filter),
            ViewIntent::ActionFilterChanged(filter) => self.set_action_filter(*filter),
            ViewIntent::SortRequested(column) => self.toggle_sort(*column),
            ViewIntent::FirstPage => self.first_page(),
            ViewIntent::PreviousPage => self.previous_page(),
            ViewIntent::NextPage => self.next_page(total_pages),
            ViewIntent::LastPage => self.last_page(total_pages),
            ViewIntent::GoToPage(page) => self.go_to_page(*page, total_pages),
            ViewIntent::CardDropped { .. } => return false,
        }
        true
    }
}
