//! Case-insensitive full-text search and match highlighting.

use crate::order::domain::Order;
use serde::Serialize;
use std::ops::Range;

/// Field consulted by the full-text filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// Customer name.
    Customer,
    /// Document number.
    DocumentNumber,
    /// Site address.
    Address,
    /// Joined container list.
    Containers,
    /// Status label.
    Status,
    /// Notes.
    Notes,
}

impl SearchField {
    /// Searchable fields in display order.
    pub const ALL: [Self; 6] = [
        Self::Customer,
        Self::DocumentNumber,
        Self::Address,
        Self::Containers,
        Self::Status,
        Self::Notes,
    ];

    /// Returns the searchable text of this field on `order`.
    #[must_use]
    pub fn text(self, order: &Order) -> String {
        match self {
            Self::Customer => order.customer().unwrap_or_default().to_owned(),
            Self::DocumentNumber => order.document_number().unwrap_or_default().to_owned(),
            Self::Address => order.address().unwrap_or_default().to_owned(),
            Self::Containers => order.containers_text(),
            Self::Status => order.status().label().to_owned(),
            Self::Notes => order.notes().unwrap_or_default().to_owned(),
        }
    }
}

/// Byte ranges of one field matching the search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldHighlight {
    /// Field the ranges refer to.
    pub field: SearchField,
    /// Non-overlapping byte ranges into the field text.
    pub ranges: Vec<Range<usize>>,
}

fn chars_match(left: char, right: char) -> bool {
    left == right || left.to_lowercase().eq(right.to_lowercase())
}

/// Returns the byte length of `needle` matched at the start of `haystack`.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for expected in needle.chars() {
        let (_, actual) = hay.next()?;
        if !chars_match(actual, expected) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(offset, _)| offset))
}

/// Finds every non-overlapping case-insensitive occurrence of `term`.
///
/// An empty term matches nothing.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if term.is_empty() {
        return ranges;
    }
    let mut resume_at = 0;
    for (start, _) in text.char_indices() {
        if start < resume_at {
            continue;
        }
        let Some(tail) = text.get(start..) else {
            break;
        };
        if let Some(len) = match_len_at(tail, term) {
            let end = start.saturating_add(len);
            ranges.push(start..end);
            resume_at = end;
        }
    }
    ranges
}

/// Returns `true` when `term` is empty or any searchable field contains it.
///
/// The term is matched as typed; surrounding whitespace is part of it.
#[must_use]
pub fn matches_search(order: &Order, term: &str) -> bool {
    term.is_empty()
        || SearchField::ALL
            .iter()
            .any(|field| !match_ranges(&field.text(order), term).is_empty())
}

/// Returns highlight ranges for every searchable field containing `term`.
#[must_use]
pub fn highlight(order: &Order, term: &str) -> Vec<FieldHighlight> {
    if term.is_empty() {
        return Vec::new();
    }
    SearchField::ALL
        .iter()
        .filter_map(|field| {
            let ranges = match_ranges(&field.text(order), term);
            (!ranges.is_empty()).then_some(FieldHighlight {
                field: *field,
                ranges,
            })
        })
        .collect()
}
