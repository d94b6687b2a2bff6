use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::model::{CategorizedInventory, CategoryMap, ItemType, Report, ReportMetadata};

/// Category for identifiers without a `/`.
pub const CATCH_ALL_CATEGORY: &str = "other";

/// Group identifiers by their first path segment, keeping input order per category.
pub fn categorize(identifiers: &[String]) -> CategoryMap {
    let mut categories = CategoryMap::new();
    for identifier in identifiers {
        let category = match identifier.split_once('/') {
            Some((head, _)) => head,
            None => CATCH_ALL_CATEGORY,
        };
        categories.entry(category.to_string()).or_default().push(identifier.clone());
    }
    categories
}

/// Collects per-type results and folds them into a [`Report`].
///
/// Results may be added in any order; the report is keyed by [`ItemType`] order.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    by_type: BTreeMap<ItemType, usize>,
    modules: CategorizedInventory,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the filtered identifiers of one type, replacing any earlier entry for it.
    pub fn add(&mut self, item_type: ItemType, identifiers: &[String]) {
        self.by_type.insert(item_type, identifiers.len());
        self.modules.insert(item_type, categorize(identifiers));
    }

    pub fn build(self) -> Report {
        self.build_at(Utc::now())
    }

    pub fn build_at(self, generated_at: DateTime<Utc>) -> Report {
        let total_modules = self.by_type.values().sum();
        Report {
            metadata: ReportMetadata {
                generated_at: format_timestamp(generated_at),
                total_modules,
                by_type: self.by_type,
            },
            modules: self.modules,
        }
    }
}

/// ISO-8601 with microseconds and a `Z` suffix, e.g. `2024-05-01T12:00:00.000000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
