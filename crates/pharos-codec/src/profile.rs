//! The two interchangeable JSON coder profiles.
//!
//! A profile pairs an encoder and a decoder with matching rules, so a value
//! encoded with a profile always decodes with the same profile. The portable
//! profile rewrites wire keys to `snake_case` on the way out and back to the
//! declared casing on the way in by walking the JSON tree, which keeps the
//! payload types free of per-field rename annotations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DecodeError, EncodeError};

/// A paired JSON encode/decode strategy.
///
/// # Example
///
/// ```
/// use pharos_codec::JsonProfile;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Task {
///     #[serde(rename = "dueDate")]
///     due_date: String,
/// }
///
/// let task = Task { due_date: "2024-01-01".to_string() };
/// let wire = JsonProfile::Portable.encode(&task).unwrap();
/// assert_eq!(wire, br#"{"due_date":"2024-01-01"}"#.to_vec());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonProfile {
    /// Wire keys exactly as declared on the payload type.
    #[default]
    Plain,
    /// Wire keys in `snake_case`, translated back to the declared camelCase
    /// on decode. Keys already in `snake_case` pass through unchanged.
    Portable,
}

impl JsonProfile {
    /// Encodes a value to JSON bytes under this profile's rules.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when the value cannot be serialized.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::Plain => Ok(serde_json::to_vec(value)?),
            Self::Portable => {
                let tree = serde_json::to_value(value)?;
                Ok(serde_json::to_vec(&rewrite_keys(tree, &camel_to_snake))?)
            }
        }
    }

    /// Decodes JSON bytes into a typed value under this profile's rules.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] with the failure classification, the
    /// dot-joined field path, and a truncated payload snippet.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, DecodeError> {
        match self {
            Self::Plain => {
                let mut deserializer = serde_json::Deserializer::from_slice(bytes);
                serde_path_to_error::deserialize(&mut deserializer)
                    .map_err(|err| DecodeError::classify(&err, bytes))
            }
            Self::Portable => {
                let tree: Value = serde_json::from_slice(bytes)
                    .map_err(|err| DecodeError::corrupted(&err, bytes))?;
                serde_path_to_error::deserialize(rewrite_keys(tree, &snake_to_camel))
                    .map_err(|err| DecodeError::classify(&err, bytes))
            }
        }
    }
}

fn rewrite_keys(value: Value, rename: &impl Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (rename(&key), rewrite_keys(inner, rename)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rewrite_keys(item, rename))
                .collect(),
        ),
        other => other,
    }
}

/// Converts a camelCase key to snake_case.
///
/// Uppercase runs are kept together so `userID` becomes `user_id` and
/// `HTMLBody` becomes `html_body`. Keys without uppercase letters pass
/// through unchanged.
fn camel_to_snake(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let after_lower = i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let run_boundary = i > 0
                && chars[i - 1].is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if after_lower || run_boundary {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts a snake_case key back to camelCase.
///
/// Leading and trailing underscores are preserved. Keys without interior
/// underscores pass through unchanged.
fn snake_to_camel(key: &str) -> String {
    let leading = key.len() - key.trim_start_matches('_').len();
    let trailing = key.len() - key.trim_end_matches('_').len();
    if leading + trailing >= key.len() {
        return key.to_string();
    }

    let interior = &key[leading..key.len() - trailing];
    let mut segments = interior.split('_').filter(|segment| !segment.is_empty());
    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..leading]);
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut rest = segment.chars();
        if let Some(head) = rest.next() {
            out.push(head.to_ascii_uppercase());
            out.push_str(rest.as_str());
        }
    }
    out.push_str(&key[key.len() - trailing..]);
    out
}
