//! Page query parsing helpers.

use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use showfloor_app::pagination::PageRequest;

pub(crate) trait PageQueryExt {
    fn into_page_request(self, per_page: Self) -> Result<PageRequest, StatusError>;
}

impl PageQueryExt for QueryParam<u32, false> {
    fn into_page_request(self, per_page: Self) -> Result<PageRequest, StatusError> {
        PageRequest::new(self.into_inner(), per_page.into_inner())
            .map_err(|error| StatusError::bad_request().brief(error.to_string()))
    }
}
