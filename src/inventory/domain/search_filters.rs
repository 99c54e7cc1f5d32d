use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Filter criteria sent with `POST /api/components/search`.
///
/// Every field is optional and skipped when unset, so the server sees an
/// absent key rather than an empty string or a null bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    /// `true` keeps only zero-quantity items, `false` only stocked ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_zero_quantity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,
}

impl SearchFilters {
    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of constraints that will reach the server
    pub fn active_count(&self) -> usize {
        [
            self.categories.is_some(),
            self.min_quantity.is_some(),
            self.max_quantity.is_some(),
            self.storage.is_some(),
            self.show_zero_quantity.is_some(),
            self.min_date.is_some(),
            self.max_date.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}
