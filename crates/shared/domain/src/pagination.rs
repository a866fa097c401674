//! Pagination and ordering for user listings.

use serde::{Deserialize, Serialize};

/// Sort direction value that selects descending order; anything else is ascending
pub const ORDER_DESC: &str = "desc";

/// Pagination query parameters.
///
/// No defaults are applied here: a zeroed `Pageable` asks for an empty page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pageable {
    /// 1-based page number
    pub page: u64,
    pub size: u64,
    pub order: String,
    pub order_by: String,
}

impl Pageable {
    pub fn new(page: u64, size: u64, order: impl Into<String>, order_by: impl Into<String>) -> Self {
        Self {
            page,
            size,
            order: order.into(),
            order_by: order_by.into(),
        }
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }

    /// Number of records to take
    pub fn limit(&self) -> u64 {
        self.size
    }

    pub fn is_descending(&self) -> bool {
        self.order == ORDER_DESC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_one_based() {
        assert_eq!(Pageable::new(1, 10, "", "").offset(), 0);
        assert_eq!(Pageable::new(3, 10, "", "").offset(), 20);
    }

    #[test]
    fn test_page_zero_does_not_underflow() {
        let pageable = Pageable::default();
        assert_eq!(pageable.offset(), 0);
        assert_eq!(pageable.limit(), 0);
    }

    #[test]
    fn test_only_exact_desc_is_descending() {
        assert!(Pageable::new(1, 1, "desc", "email").is_descending());
        assert!(!Pageable::new(1, 1, "DESC", "email").is_descending());
        assert!(!Pageable::new(1, 1, "asc", "email").is_descending());
    }
}
