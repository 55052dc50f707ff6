//! Distinct per-field value sets feeding form autocompletion.

use crate::order::domain::{ContainerNumber, Order, split_delimited};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Field with an autocomplete index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestField {
    /// Customer names.
    Customer,
    /// Agent names.
    Agent,
    /// Document numbers.
    DocumentNumber,
    /// Site addresses.
    Address,
    /// Container numbers.
    Container,
}

/// Autocomplete indexes rebuilt from the full record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteIndex {
    customers: IndexSet<String>,
    agents: IndexSet<String>,
    documents: IndexSet<String>,
    addresses: IndexSet<String>,
    containers: IndexSet<String>,
}

fn insert_text(set: &mut IndexSet<String>, value: Option<&str>) {
    if let Some(text) = value.map(str::trim).filter(|text| !text.is_empty()) {
        set.insert(text.to_owned());
    }
}

impl AutocompleteIndex {
    /// Builds every index from `orders` plus standalone `containers`.
    ///
    /// Container values are split on the list delimiter and trimmed before
    /// de-duplication.
    #[must_use]
    pub fn build(orders: &[Order], containers: &[ContainerNumber]) -> Self {
        let mut index = Self::default();
        for order in orders {
            insert_text(&mut index.customers, order.customer());
            insert_text(&mut index.agents, order.agent());
            insert_text(&mut index.documents, order.document_number());
            insert_text(&mut index.addresses, order.address());
            for number in order.containers() {
                for part in split_delimited(number.as_str()) {
                    index.containers.insert(part.to_owned());
                }
            }
        }
        for number in containers {
            insert_text(&mut index.containers, Some(number.as_str()));
        }
        index
    }

    /// Returns the distinct values of `field` in first-seen order.
    #[must_use]
    pub const fn values(&self, field: SuggestField) -> &IndexSet<String> {
        match field {
            SuggestField::Customer => &self.customers,
            SuggestField::Agent => &self.agents,
            SuggestField::DocumentNumber => &self.documents,
            SuggestField::Address => &self.addresses,
            SuggestField::Container => &self.containers,
        }
    }

    /// Returns up to `limit` values of `field` containing `input`,
    /// ignoring case. Blank input yields nothing.
    #[must_use]
    pub fn suggest(&self, field: SuggestField, input: &str, limit: usize) -> Vec<String> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.values(field)
            .iter()
            .filter(|value| value.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}
