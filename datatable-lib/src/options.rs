//! Table configuration.

use std::collections::BTreeMap;

use log::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;
use crate::filter::SearchMode;

/// Page sizes offered when none are configured.
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [10, 25, 50];

/// Describes the JSON blob attached to each rendered row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddedJson {
    /// Attribute suffix the renderer uses (`data-<prefix>`).
    pub prefix: String,
    /// Record keys copied into the blob.
    pub keys: Vec<String>,
}

impl EmbeddedJson {
    /// Returns `true` if no keys are configured.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Options recognized by a table.
///
/// Files use camelCase field names:
///
/// ```json
/// {
///   "pageSizes": [10, 25, 50],
///   "displayKeys": ["firstName", "lastName", "age"],
///   "searchableKeys": ["firstName"],
///   "rowAttributes": { "attcell": "n1" },
///   "embeddedJson": { "prefix": "user", "keys": ["id"] },
///   "theme": "dark",
///   "searchMode": "prefix"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Page-size choices; the first is the initial page size.
    pub page_sizes: Vec<usize>,
    /// Fields shown as columns, in order.
    pub display_keys: Vec<String>,
    /// Fields searched; falls back to `display_keys` when empty.
    pub searchable_keys: Vec<String>,
    /// Attributes applied to every rendered row.
    pub row_attributes: BTreeMap<String, String>,
    /// Per-row JSON blob description.
    pub embedded_json: EmbeddedJson,
    /// Opaque style tag handed to the renderer.
    pub theme: Option<String>,
    /// Search matching strategy.
    pub search_mode: SearchMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            display_keys: Vec::new(),
            searchable_keys: Vec::new(),
            row_attributes: BTreeMap::new(),
            embedded_json: EmbeddedJson::default(),
            theme: None,
            search_mode: SearchMode::default(),
        }
    }
}

impl TableOptions {
    /// Creates options for the given display keys with default page sizes.
    pub fn new<S: Into<String>>(display_keys: impl IntoIterator<Item = S>) -> Self {
        Self {
            display_keys: display_keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the page-size choices.
    pub fn with_page_sizes(mut self, page_sizes: impl IntoIterator<Item = usize>) -> Self {
        self.page_sizes = page_sizes.into_iter().collect();
        self
    }

    /// Sets the searchable keys.
    pub fn with_searchable_keys<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.searchable_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Sets the embedded JSON description.
    pub fn with_embedded_json<S: Into<String>>(
        mut self,
        prefix: impl Into<String>,
        keys: impl IntoIterator<Item = S>,
    ) -> Self {
        self.embedded_json = EmbeddedJson {
            prefix: prefix.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        };
        self
    }

    /// Adds an attribute applied to every rendered row.
    pub fn with_row_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.row_attributes.insert(name.into(), value.into());
        self
    }

    /// Keys used for search.
    pub fn search_keys(&self) -> &[String] {
        if self.searchable_keys.is_empty() {
            &self.display_keys
        } else {
            &self.searchable_keys
        }
    }

    /// The initial page size, if any page sizes are configured.
    pub fn default_page_size(&self) -> Option<usize> {
        self.page_sizes.first().copied()
    }

    /// Checks the page-size choices.
    pub fn validate(&self) -> Result<(), TableError> {
        validate_page_sizes(&self.page_sizes)
    }
}

/// Rejects an empty choice list or any size below 1.
pub fn validate_page_sizes(page_sizes: &[usize]) -> Result<(), TableError> {
    if page_sizes.is_empty() {
        warn!("Rejected table options: no page sizes");
        return Err(TableError::EmptyPageSizes);
    }
    if let Some(&size) = page_sizes.iter().find(|&&size| size == 0) {
        warn!("Rejected table options: page size {}", size);
        return Err(TableError::InvalidPageSize { size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TableOptions::default();
        assert_eq!(options.page_sizes, [10, 25, 50]);
        assert_eq!(options.default_page_size(), Some(10));
        assert_eq!(options.search_mode, SearchMode::Prefix);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_search_keys_fall_back_to_display_keys() {
        let options = TableOptions::new(["firstName", "age"]);
        assert_eq!(options.search_keys(), ["firstName", "age"]);

        let options = options.with_searchable_keys(["firstName"]);
        assert_eq!(options.search_keys(), ["firstName"]);
    }

    #[test]
    fn test_validate() {
        let empty = TableOptions::default().with_page_sizes(Vec::new());
        assert_eq!(empty.validate(), Err(TableError::EmptyPageSizes));

        let zero = TableOptions::default().with_page_sizes([5, 0]);
        assert_eq!(zero.validate(), Err(TableError::InvalidPageSize { size: 0 }));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "pageSizes": [5, 15],
            "displayKeys": ["firstName", "id"],
            "rowAttributes": { "attcell": "n1" },
            "embeddedJson": { "prefix": "user", "keys": ["id"] },
            "theme": "dark",
            "searchMode": "fuzzy"
        }"#;
        let options: TableOptions = serde_json::from_str(json).unwrap();

        assert_eq!(options.page_sizes, [5, 15]);
        assert_eq!(options.display_keys, ["firstName", "id"]);
        assert_eq!(options.row_attributes.get("attcell").map(String::as_str), Some("n1"));
        assert_eq!(options.embedded_json.prefix, "user");
        assert_eq!(options.theme.as_deref(), Some("dark"));
        assert_eq!(options.search_mode, SearchMode::Fuzzy);
        assert!(options.searchable_keys.is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let options: TableOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TableOptions::default());
    }
}
