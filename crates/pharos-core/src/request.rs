//! The mutable in-progress request.

use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

/// The request being assembled before transport invocation.
///
/// Built once per call from a resolved endpoint, mutated by the request
/// builder's capability passes, then consumed by the transport. Header names
/// are unique with last write winning; query items live on the URL itself.
#[derive(Debug, Clone)]
pub struct DraftRequest {
    /// HTTP method.
    pub method: Method,
    /// Fully resolved request URL, including any query string.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Serialized request body, if any.
    pub body: Option<Bytes>,
}

impl DraftRequest {
    /// Creates a draft request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Returns the URL's query items in order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.example.com/v1/users?page=2").unwrap()
    }

    #[test]
    fn test_new_has_no_headers_or_body() {
        let draft = DraftRequest::new(Method::GET, base());
        assert!(draft.headers.is_empty());
        assert!(draft.body.is_none());
        assert_eq!(draft.url.path(), "/v1/users");
    }

    #[test]
    fn test_with_body_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "abc".parse().unwrap());

        let draft = DraftRequest::new(Method::POST, base())
            .with_headers(headers)
            .with_body(&b"{}"[..]);

        assert_eq!(draft.header("x-request-id"), Some("abc"));
        assert_eq!(draft.body.as_deref(), Some(&b"{}"[..]));
    }

    #[test]
    fn test_query_pairs_reads_url() {
        let draft = DraftRequest::new(Method::GET, base());
        assert_eq!(draft.query_pairs(), vec![("page".to_string(), "2".to_string())]);
    }
}
