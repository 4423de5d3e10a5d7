//! Pagination engine: page/limit parameters to offset windows.
//!
//! Policy: absent (or unparsable, handled by the HTTP layer's lenient query
//! deserialization) values fall back to the defaults; explicitly
//! out-of-range values (`page < 1`, `limit < 1`) are rejected rather than
//! clamped.

use postbox_types::error::MessageError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw pagination parameters as received from a client.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// A validated `(skip, limit)` window over the ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub limit: u64,
    pub skip: u64,
}

impl PageRequest {
    /// Resolve the request into a concrete window: `skip = (page-1) * limit`.
    pub fn window(self) -> Result<PageWindow, MessageError> {
        let page = resolve(self.page, DEFAULT_PAGE, "page")?;
        let limit = resolve(self.limit, DEFAULT_LIMIT, "limit")?;

        // Both factors are client-supplied; an unrepresentable window is a
        // client error, not a wrap-around.
        let skip = (page - 1).checked_mul(limit).ok_or_else(|| {
            MessageError::InvalidPagination(format!(
                "page window out of range: page {page}, limit {limit}"
            ))
        })?;

        Ok(PageWindow { page, limit, skip })
    }
}

fn resolve(value: Option<i64>, default: u64, name: &str) -> Result<u64, MessageError> {
    match value {
        None => Ok(default),
        Some(v) if v < 1 => Err(MessageError::InvalidPagination(format!(
            "{name} must be >= 1, got {v}"
        ))),
        Some(v) => Ok(v as u64),
    }
}

/// `ceil(total / limit)`; 0 when the collection is empty.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit)
}
