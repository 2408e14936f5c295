//! Request assembly from capability-tagged payloads.
//!
//! The three passes run in a fixed order: headers, then body, then query.
//! The body pass stamps the content type after the headers pass has run, so
//! a payload that supplies a body is always labeled `application/json`
//! regardless of its own header contributions.

use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::{debug, warn};

use pharos_codec::JsonProfile;
use pharos_core::{DraftRequest, RequestData};

use crate::endpoint::Endpoint;
use crate::error::PharosResult;

/// Assembles the draft request for an endpoint from a request payload.
///
/// Each capability pass is a no-op for payloads that do not provide it; a
/// payload with no capabilities yields a draft carrying only the method and
/// resolved URL.
///
/// # Errors
///
/// Returns [`PharosError::Encoding`](crate::PharosError::Encoding) when the
/// body value fails to serialize. Header and query passes do not fail.
pub fn build_request<Q: RequestData>(
    endpoint: &Endpoint,
    data: &Q,
    profile: JsonProfile,
) -> PharosResult<DraftRequest> {
    let mut draft = DraftRequest::new(endpoint.method().clone(), endpoint.url());
    apply_headers(&mut draft, data);
    apply_body(&mut draft, data, profile)?;
    apply_query(&mut draft, data);
    Ok(draft)
}

fn apply_headers<Q: RequestData>(draft: &mut DraftRequest, data: &Q) {
    for (name, value) in data.headers() {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(name), Ok(value)) => {
                draft.headers.insert(name, value);
            }
            _ => warn!(name = %name, "skipping malformed header contribution"),
        }
    }
}

fn apply_body<Q: RequestData>(
    draft: &mut DraftRequest,
    data: &Q,
    profile: JsonProfile,
) -> PharosResult<()> {
    let Some(body) = data.body() else {
        return Ok(());
    };

    debug!(profile = ?profile, "encoding request body");
    let bytes = profile.encode(body)?;
    debug!(len = bytes.len(), "encoded request body");

    draft.body = Some(bytes.into());
    // Always after the headers pass: a contributed content-type must not
    // survive for a body-bearing request.
    draft
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(())
}

fn apply_query<Q: RequestData>(draft: &mut DraftRequest, data: &Q) {
    let pairs = data.query();
    if pairs.is_empty() {
        return;
    }
    if draft.url.cannot_be_a_base() {
        // Degrade gracefully: keep the URL and its query untouched.
        warn!(url = %draft.url, "url cannot carry query items; skipping query pass");
        return;
    }

    let mut serializer = draft.url.query_pairs_mut();
    serializer.clear();
    for (name, value) in &pairs {
        serializer.append_pair(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use serde::Serialize;
    use url::Url;

    use crate::registry::ConfigRegistry;

    #[derive(Serialize)]
    struct Note {
        text: String,
    }

    struct FullPayload {
        note: Note,
    }

    impl RequestData for FullPayload {
        type Body = Note;

        fn headers(&self) -> Vec<(String, String)> {
            vec![
                ("x-api-key".to_string(), "secret".to_string()),
                ("content-type".to_string(), "text/plain".to_string()),
            ]
        }

        fn query(&self) -> Vec<(String, String)> {
            vec![
                ("page".to_string(), "1".to_string()),
                ("sort".to_string(), "asc".to_string()),
            ]
        }

        fn body(&self) -> Option<&Note> {
            Some(&self.note)
        }
    }

    struct HeadersOnly;

    impl RequestData for HeadersOnly {
        type Body = ();

        fn headers(&self) -> Vec<(String, String)> {
            vec![("x-trace".to_string(), "on".to_string())]
        }
    }

    async fn endpoint(base: &str) -> Endpoint {
        let registry = ConfigRegistry::new();
        registry.register("svc", Url::parse(base).unwrap());
        Endpoint::resolve(&registry, "svc", Method::POST, "/notes")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_no_capabilities_leaves_draft_untouched() {
        let endpoint = endpoint("https://api.example.com").await;
        let draft = build_request(&endpoint, &pharos_core::Empty, JsonProfile::Plain).unwrap();

        assert!(draft.headers.is_empty());
        assert!(draft.body.is_none());
        assert!(draft.query_pairs().is_empty());
        assert_eq!(draft.url.as_str(), "https://api.example.com/notes");
    }

    #[tokio::test]
    async fn test_headers_only_payload() {
        let endpoint = endpoint("https://api.example.com").await;
        let draft = build_request(&endpoint, &HeadersOnly, JsonProfile::Plain).unwrap();

        assert_eq!(draft.header("x-trace"), Some("on"));
        assert_eq!(draft.headers.len(), 1);
        assert!(draft.body.is_none());
        assert!(draft.query_pairs().is_empty());
    }

    #[tokio::test]
    async fn test_body_pass_overrides_contributed_content_type() {
        let endpoint = endpoint("https://api.example.com").await;
        let payload = FullPayload {
            note: Note {
                text: "hi".to_string(),
            },
        };
        let draft = build_request(&endpoint, &payload, JsonProfile::Plain).unwrap();

        assert_eq!(draft.header("content-type"), Some("application/json"));
        assert_eq!(draft.header("x-api-key"), Some("secret"));
        assert_eq!(draft.body.as_deref(), Some(&br#"{"text":"hi"}"#[..]));
    }

    #[tokio::test]
    async fn test_query_pass_replaces_existing_query() {
        let endpoint = endpoint("https://api.example.com/?inherited=1").await;
        let payload = FullPayload {
            note: Note {
                text: "hi".to_string(),
            },
        };
        let draft = build_request(&endpoint, &payload, JsonProfile::Plain).unwrap();

        assert_eq!(
            draft.query_pairs(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("sort".to_string(), "asc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_header_contribution_is_skipped() {
        struct BadHeader;

        impl RequestData for BadHeader {
            type Body = ();

            fn headers(&self) -> Vec<(String, String)> {
                vec![
                    ("bad name".to_string(), "x".to_string()),
                    ("x-ok".to_string(), "1".to_string()),
                ]
            }
        }

        let endpoint = endpoint("https://api.example.com").await;
        let draft = build_request(&endpoint, &BadHeader, JsonProfile::Plain).unwrap();
        assert_eq!(draft.headers.len(), 1);
        assert_eq!(draft.header("x-ok"), Some("1"));
    }
}
