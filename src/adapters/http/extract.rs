//! Page-number extraction from the `page` query parameter.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::domain::catalog::RequestedPage;

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// The requested page, read from `?page=`.
///
/// Never rejects: a missing, malformed, zero, or negative page becomes page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam(pub RequestedPage);

#[async_trait]
impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<PageQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.page);

        Ok(PageParam(RequestedPage::parse(raw.as_deref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> RequestedPage {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let PageParam(page) = PageParam::from_request_parts(&mut parts, &()).await.unwrap();
        page
    }

    #[tokio::test]
    async fn reads_positive_page() {
        assert_eq!(extract("/podcast/all?page=3").await.get(), 3);
    }

    #[tokio::test]
    async fn defaults_to_first_page() {
        for uri in [
            "/podcast/all",
            "/podcast/all?page=",
            "/podcast/all?page=0",
            "/podcast/all?page=-3",
            "/podcast/all?page=abc",
            "/podcast/all?other=2",
        ] {
            assert_eq!(extract(uri).await, RequestedPage::FIRST, "uri: {}", uri);
        }
    }
}
