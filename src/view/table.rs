//! Filter, sort and paginate projection of the record store.

use super::{
    ActionFilter, FieldHighlight, SortColumn, SortDirection, SortKey, StatusFilter, ViewConfig,
    ViewState, highlight, matches_search,
};
use crate::order::domain::Order;
use chrono::NaiveDate;
use feruca::Collator;
use serde::Serialize;
use std::cmp::Ordering;

/// One table row with its derived display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Stored record.
    pub order: Order,
    /// Whole days past the expected finish date; zero unless overdue.
    pub overdue_days: u32,
    /// Presentation class of the status badge.
    pub display_class: &'static str,
    /// Human-readable status.
    pub status_label: &'static str,
    /// Containers joined for display.
    pub containers_text: String,
    /// Search matches per field.
    pub highlights: Vec<FieldHighlight>,
}

impl TableRow {
    /// Derives the display fields of `order` for `today`.
    #[must_use]
    pub fn derive(order: &Order, today: NaiveDate, search: &str) -> Self {
        Self {
            overdue_days: order.overdue_days(today),
            display_class: order.status().display_class(),
            status_label: order.status().label(),
            containers_text: order.containers_text(),
            highlights: highlight(order, search),
            order: order.clone(),
        }
    }
}

/// One page of the projected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    /// Rows on the current page.
    pub rows: Vec<TableRow>,
    /// Number of pages; at least 1.
    pub total_pages: usize,
    /// Number of records passing the filters.
    pub total_count: usize,
    /// 1-based page shown, after clamping.
    pub page: usize,
}

/// Returns `true` when `order` passes the search and both equality filters.
#[must_use]
pub fn passes_filters(order: &Order, state: &ViewState) -> bool {
    let status_ok = match state.status_filter() {
        StatusFilter::All => true,
        StatusFilter::Only(status) => order.status() == status,
    };
    let action_ok = match state.action_filter() {
        ActionFilter::All => true,
        ActionFilter::Only(action) => order.action_type() == action,
    };
    status_ok && action_ok && matches_search(order, state.search())
}

/// Unicode collation order; byte order breaks ties between collation-equal
/// strings so the sort stays total.
fn collate(collator: &mut Collator, left: Option<&str>, right: Option<&str>) -> Ordering {
    let left_text = left.unwrap_or_default();
    let right_text = right.unwrap_or_default();
    collator
        .collate(left_text, right_text)
        .then_with(|| left_text.cmp(right_text))
}

fn compare_rows(
    collator: &mut Collator,
    left: &TableRow,
    right: &TableRow,
    column: SortColumn,
) -> Ordering {
    let (a, b) = (&left.order, &right.order);
    match column {
        SortColumn::DocumentNumber => collate(collator, a.document_number(), b.document_number()),
        SortColumn::Customer => collate(collator, a.customer(), b.customer()),
        SortColumn::Agent => collate(collator, a.agent(), b.agent()),
        SortColumn::Address => collate(collator, a.address(), b.address()),
        SortColumn::ActionType => a.action_type().as_str().cmp(b.action_type().as_str()),
        SortColumn::Containers => {
            collate(collator, Some(&left.containers_text), Some(&right.containers_text))
        }
        SortColumn::CreatedOn => a.created_on().cmp(&b.created_on()),
        SortColumn::ExpectedFinishOn => a.expected_finish_on().cmp(&b.expected_finish_on()),
        SortColumn::FinishedOn => a.finished_on().cmp(&b.finished_on()),
        SortColumn::Status => collate(collator, Some(left.status_label), Some(right.status_label)),
        SortColumn::OverdueDays => left.overdue_days.cmp(&right.overdue_days),
    }
}

/// Stable sort of `rows` by `key`; equal keys keep their relative order.
pub fn sort_rows(rows: &mut [TableRow], key: SortKey) {
    let mut collator = Collator::default();
    rows.sort_by(|left, right| {
        let ordering = compare_rows(&mut collator, left, right, key.column);
        match key.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Returns the page count for `count` rows; never less than 1.
#[must_use]
pub fn page_count(count: usize, config: &ViewConfig) -> usize {
    count.div_ceil(config.page_size.get()).max(1)
}

/// Projects `orders` through search, filters, sort and pagination.
///
/// A page beyond the last one is clamped to the last page.
#[must_use]
pub fn compute_view(
    orders: &[Order],
    state: &ViewState,
    config: &ViewConfig,
    today: NaiveDate,
) -> TablePage {
    let mut rows: Vec<TableRow> = orders
        .iter()
        .filter(|order| passes_filters(order, state))
        .map(|order| TableRow::derive(order, today, state.search()))
        .collect();
    sort_rows(&mut rows, state.sort());

    let total_count = rows.len();
    let total_pages = page_count(total_count, config);
    let page = state.page().clamp(1, total_pages);
    let page_size = config.page_size.get();
    let offset = page.saturating_sub(1).saturating_mul(page_size);

    TablePage {
        rows: rows.into_iter().skip(offset).take(page_size).collect(),
        total_pages,
        total_count,
        page,
    }
}
