//! Table configuration errors

/// Errors raised by table state operations.
///
/// Every variant is an invalid-argument failure: navigation never fails, it
/// clamps instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A page size below 1 was requested.
    #[error("Invalid page size {size}: must be at least 1")]
    InvalidPageSize { size: usize },

    /// The list of page-size choices is empty.
    #[error("No page sizes configured")]
    EmptyPageSizes,

    /// The requested page size is not one of the configured choices.
    #[error("Page size {size} is not one of the configured choices {choices:?}")]
    PageSizeNotConfigured { size: usize, choices: Vec<usize> },
}

impl TableError {
    /// Creates a new page size not configured error.
    pub fn not_configured(size: usize, choices: &[usize]) -> Self {
        Self::PageSizeNotConfigured {
            size,
            choices: choices.to_vec(),
        }
    }

    /// Returns `true` if this error stems from a malformed argument.
    ///
    /// All current variants do; hosts use this to decide whether to block
    /// the UI action rather than retry it.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidPageSize { .. } | Self::EmptyPageSizes | Self::PageSizeNotConfigured { .. }
        )
    }
}
