//! Error shortcuts for failures the client cannot fix.

use std::fmt::Display;

use salvo::{
    http::header::LOCATION,
    prelude::{Response, StatusCode, StatusError},
};
use tracing::error;

/// Turn an unexpected failure into a logged 500.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!(error = %error, "{context}");

            StatusError::internal_server_error().brief(context.to_string())
        })
    }
}

/// `201 Created` pointing at the new resource.
pub(crate) trait CreatedExt {
    fn created_at(&mut self, location: String) -> Result<&mut Self, StatusError>;
}

impl CreatedExt for Response {
    fn created_at(&mut self, location: String) -> Result<&mut Self, StatusError> {
        self.add_header(LOCATION, location, true)
            .or_500("failed to set location header")?
            .status_code(StatusCode::CREATED);

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_becomes_internal_error_with_context() {
        let result: Result<(), &str> = Err("disk full");

        let error = result.or_500("failed to render order report").err();

        assert_eq!(
            error.as_ref().map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
        assert_eq!(
            error.map(|error| error.brief),
            Some("failed to render order report".to_string())
        );
    }

    #[test]
    fn created_sets_status_and_location() -> Result<(), StatusError> {
        let mut res = Response::new();

        res.created_at("/admin/products/0195".to_string())?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            res.headers().get(LOCATION).and_then(|value| value.to_str().ok()),
            Some("/admin/products/0195")
        );

        Ok(())
    }

    #[test]
    fn invalid_location_is_internal_error() {
        let mut res = Response::new();

        let result = res.created_at("/admin/products/\n".to_string());

        assert!(result.is_err(), "control characters must not reach a header");
    }
}
