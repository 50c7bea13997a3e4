//! Pagination

use thiserror::Error;

/// Default page size for paginated listings.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page must be at least 1")]
    PageOutOfRange,

    #[error("per_page must be between 1 and {MAX_PER_PAGE}")]
    PerPageOutOfRange,
}

/// A validated request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Validate a page request, falling back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns an error when `page` is zero or `per_page` is outside `1..=MAX_PER_PAGE`.
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Result<Self, PaginationError> {
        let page = page.unwrap_or(1);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);

        if page == 0 {
            return Err(PaginationError::PageOutOfRange);
        }

        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(PaginationError::PerPageOutOfRange);
        }

        Ok(Self { page, per_page })
    }

    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn per_page(self) -> u32 {
        self.per_page
    }

    /// SQL `LIMIT` for this page.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.per_page)
    }

    /// SQL `OFFSET` for this page.
    #[must_use]
    pub fn offset(self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results with enough metadata to render pager controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total,
            total_pages: total.div_ceil(u64::from(request.per_page)),
        }
    }

    /// Convert every item while keeping the page metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_values_missing() -> TestResult {
        let request = PageRequest::new(None, None)?;

        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), DEFAULT_PER_PAGE);
        assert_eq!(request.offset(), 0);

        Ok(())
    }

    #[test]
    fn offset_skips_previous_pages() -> TestResult {
        let request = PageRequest::new(Some(3), Some(20))?;

        assert_eq!(request.limit(), 20);
        assert_eq!(request.offset(), 40);

        Ok(())
    }

    #[test]
    fn zero_page_is_rejected() {
        assert_eq!(
            PageRequest::new(Some(0), None),
            Err(PaginationError::PageOutOfRange)
        );
    }

    #[test]
    fn per_page_bounds_are_enforced() {
        assert_eq!(
            PageRequest::new(None, Some(0)),
            Err(PaginationError::PerPageOutOfRange)
        );
        assert_eq!(
            PageRequest::new(None, Some(MAX_PER_PAGE + 1)),
            Err(PaginationError::PerPageOutOfRange)
        );
        assert!(PageRequest::new(None, Some(MAX_PER_PAGE)).is_ok());
    }

    #[test]
    fn total_pages_rounds_up() -> TestResult {
        let request = PageRequest::new(Some(1), Some(10))?;

        assert_eq!(Page::<u8>::new(vec![], request, 0).total_pages, 0);
        assert_eq!(Page::<u8>::new(vec![], request, 10).total_pages, 1);
        assert_eq!(Page::<u8>::new(vec![], request, 11).total_pages, 2);

        Ok(())
    }
}
