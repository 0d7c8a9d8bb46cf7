//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use notehub_core::types::PageRequest;

/// Query parameters for list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Rows per page (default: 50, max: 100).
    pub limit: Option<u64>,
    /// Zero-based row offset (default: 0).
    pub offset: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_params(self.limit, self.offset)
    }
}
