//! View derivation settings.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Settings shared by every derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per table page.
    pub page_size: NonZeroUsize,
    /// Open orders due within this many days are flagged as upcoming.
    pub deadline_horizon_days: u32,
    /// Maximum number of autocomplete suggestions.
    pub suggestion_limit: usize,
}

const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(9);

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            deadline_horizon_days: 3,
            suggestion_limit: 5,
        }
    }
}

impl ViewConfig {
    /// Creates the default configuration with a custom page size.
    #[must_use]
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }
}
