use crate::inventory::domain::SearchFilters;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// UI value selecting zero-quantity items only
const ZERO_QUANTITY_ONLY: &str = "zero";

/// UI value selecting stocked items only
const NONZERO_QUANTITY_ONLY: &str = "nonzero";

/// Date format accepted for the created-at bounds
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw search-form inputs, exactly as the user typed or selected them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    /// Checked category boxes
    pub categories: Vec<String>,
    pub min_quantity: String,
    pub max_quantity: String,
    pub storage: String,
    /// `""`, `"zero"` or `"nonzero"`
    pub zero_quantity: String,
    pub min_date: String,
    pub max_date: String,
}

/// FilterBuilder - Turns raw form inputs into server-side search filters
///
/// Empty or malformed inputs never reach the server: they become absent
/// fields rather than empty strings, `NaN`-like bounds or null values.
pub struct FilterBuilder;

impl FilterBuilder {
    /// Builds the filter object for `POST /api/components/search`
    ///
    /// # Arguments
    /// * `inputs` - Raw form inputs
    ///
    /// # Returns
    /// SearchFilters with only the constraints the user actually set
    pub fn build_filters(inputs: &FilterInputs) -> SearchFilters {
        SearchFilters {
            categories: Self::categories(&inputs.categories),
            min_quantity: Self::integer(&inputs.min_quantity),
            max_quantity: Self::integer(&inputs.max_quantity),
            storage: Self::text(&inputs.storage),
            show_zero_quantity: Self::zero_quantity(&inputs.zero_quantity),
            min_date: Self::date(&inputs.min_date),
            max_date: Self::date(&inputs.max_date),
        }
    }

    fn categories(selected: &[String]) -> Option<BTreeSet<String>> {
        let set: BTreeSet<String> = selected
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        if set.is_empty() {
            None
        } else {
            Some(set)
        }
    }

    fn integer(raw: &str) -> Option<i64> {
        raw.trim().parse::<i64>().ok()
    }

    fn text(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn zero_quantity(raw: &str) -> Option<bool> {
        match raw.trim() {
            ZERO_QUANTITY_ONLY => Some(true),
            NONZERO_QUANTITY_ONLY => Some(false),
            _ => None,
        }
    }

    fn date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
    }
}
