//! Encode and decode error types.

use thiserror::Error;

use crate::timestamp::MALFORMED_TIMESTAMP_PREFIX;

/// Maximum number of characters of raw payload attached to a decode error.
const SNIPPET_MAX_CHARS: usize = 1000;

/// Request body serialization failed.
#[derive(Debug, Error)]
#[error("JSON encoding failed: {source}")]
pub struct EncodeError {
    /// The underlying serializer failure.
    #[from]
    source: serde_json::Error,
}

/// Classification of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeKind {
    /// A required field was absent from the payload.
    MissingField,
    /// A field was present but held `null` where a value was required.
    MissingValue,
    /// A field held a value of the wrong type.
    TypeMismatch,
    /// The payload was not parseable at all, or a value was unreadable.
    CorruptedData,
    /// None of the above classifications applied.
    Unknown,
}

impl DecodeKind {
    /// Returns the kebab-case label for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing-field",
            Self::MissingValue => "missing-value",
            Self::TypeMismatch => "type-mismatch",
            Self::CorruptedData => "corrupted-data",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DecodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body failed to decode into the declared type.
///
/// Carries the dot-joined path of container keys and indices leading to the
/// failure, a human-readable description, and a truncated copy of the raw
/// payload for debugging.
#[derive(Debug, Error)]
#[error("JSON decoding failed ({kind}) at `{path}`: {description}")]
pub struct DecodeError {
    kind: DecodeKind,
    path: String,
    description: String,
    snippet: Option<String>,
}

impl DecodeError {
    /// Creates a decode error from its parts.
    #[must_use]
    pub fn new(
        kind: DecodeKind,
        path: impl Into<String>,
        description: impl Into<String>,
        snippet: Option<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            description: description.into(),
            snippet,
        }
    }

    /// Classifies a path-tracked deserializer failure.
    pub(crate) fn classify(
        err: &serde_path_to_error::Error<serde_json::Error>,
        raw: &[u8],
    ) -> Self {
        Self {
            kind: kind_of(err.inner()),
            path: err.path().to_string(),
            description: err.inner().to_string(),
            snippet: snippet_of(raw),
        }
    }

    /// Builds a corrupted-data error for a payload that never parsed.
    pub(crate) fn corrupted(err: &serde_json::Error, raw: &[u8]) -> Self {
        Self {
            kind: DecodeKind::CorruptedData,
            path: ".".to_string(),
            description: err.to_string(),
            snippet: snippet_of(raw),
        }
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> DecodeKind {
        self.kind
    }

    /// Returns the dot-joined path to the failing field.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the human-readable failure description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the truncated raw payload, if one was captured.
    #[must_use]
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }
}

fn snippet_of(raw: &[u8]) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let text = String::from_utf8_lossy(raw);
    Some(text.chars().take(SNIPPET_MAX_CHARS).collect())
}

fn kind_of(err: &serde_json::Error) -> DecodeKind {
    use serde_json::error::Category;

    match err.classify() {
        Category::Syntax | Category::Eof => DecodeKind::CorruptedData,
        Category::Io => DecodeKind::Unknown,
        Category::Data => {
            let message = err.to_string();
            if message.starts_with("missing field") {
                DecodeKind::MissingField
            } else if message.starts_with(MALFORMED_TIMESTAMP_PREFIX) {
                DecodeKind::CorruptedData
            } else if message.starts_with("invalid type: null") {
                DecodeKind::MissingValue
            } else if message.starts_with("invalid type")
                || message.starts_with("invalid value")
                || message.starts_with("invalid length")
            {
                DecodeKind::TypeMismatch
            } else {
                DecodeKind::Unknown
            }
        }
    }
}
