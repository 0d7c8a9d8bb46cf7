//! Offset pagination for list queries.

use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_LIMIT: u64 = 50;
/// Maximum number of rows per page.
pub const MAX_LIMIT: u64 = 100;

/// Limit/offset window over an ordered query.
///
/// The offset is zero-based. Re-issuing the same request re-runs the
/// query; there is no server-side cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of rows to return.
    pub limit: u64,
    /// Number of rows to skip.
    pub offset: u64,
}

impl PageRequest {
    /// Create a page request, clamping the limit into `1..=MAX_LIMIT`.
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset,
        }
    }

    /// Build from optional query parameters, applying defaults.
    pub fn from_params(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self::new(limit.unwrap_or(DEFAULT_LIMIT), offset.unwrap_or(0))
    }

    /// SQL `LIMIT` as the signed type PostgreSQL binds.
    pub fn sql_limit(&self) -> i64 {
        self.limit as i64
    }

    /// SQL `OFFSET`, saturated to the signed range.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
