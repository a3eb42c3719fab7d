//! Normalize free-form agent names into repository-safe name components.
//!
//! A sanitized name contains only lowercase ASCII letters, digits and hyphens,
//! and never starts or ends with a hyphen. Input that cannot be reduced to such
//! a name is reported as [`SanitizeResult::Invalid`]; nothing here panics or
//! returns a propagated error.

use log::debug;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Reasons an agent name is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SanitizeError {
    #[error("agent name is required")]
    Required,
    #[error("agent name must contain at least one alphanumeric character")]
    NoAlphanumeric,
    // Shares its message with `NoAlphanumeric`; callers see the same text for both.
    #[error("agent name must contain at least one alphanumeric character")]
    BoundaryHyphen,
}

/// Outcome of sanitizing one agent name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizeResult {
    Valid { name: String },
    Invalid { error: SanitizeError },
}

impl SanitizeResult {
    fn invalid(error: SanitizeError) -> Self {
        SanitizeResult::Invalid { error }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, SanitizeResult::Valid { .. })
    }

    /// The sanitized name, if the input was accepted.
    pub fn name(&self) -> Option<&str> {
        match self {
            SanitizeResult::Valid { name } => Some(name),
            SanitizeResult::Invalid { .. } => None,
        }
    }

    /// The rejection reason, if the input was refused.
    pub fn error(&self) -> Option<&SanitizeError> {
        match self {
            SanitizeResult::Valid { .. } => None,
            SanitizeResult::Invalid { error } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<String, SanitizeError> {
        match self {
            SanitizeResult::Valid { name } => Ok(name),
            SanitizeResult::Invalid { error } => Err(error),
        }
    }
}

impl From<SanitizeResult> for Result<String, SanitizeError> {
    fn from(result: SanitizeResult) -> Self {
        result.into_result()
    }
}

impl Serialize for SanitizeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SanitizeResult", 2)?;
        match self {
            SanitizeResult::Valid { name } => {
                state.serialize_field("valid", &true)?;
                state.serialize_field("name", name)?;
            },
            SanitizeResult::Invalid { error } => {
                state.serialize_field("valid", &false)?;
                state.serialize_field("error", &error.to_string())?;
            },
        }
        state.end()
    }
}

/// Sanitize an agent name for use as a repository name component.
///
/// The input is lowercased, each run of whitespace becomes a single hyphen, and
/// every character outside `[a-z0-9-]` is dropped. The result must still hold at
/// least one letter or digit and may not begin or end with a hyphen.
///
/// ```
/// use agentkit_name::{SanitizeError, SanitizeResult, sanitize_name};
///
/// assert_eq!(
///     sanitize_name(Some("My Agent!!")),
///     SanitizeResult::Valid { name: "my-agent".into() }
/// );
/// assert_eq!(
///     sanitize_name(None),
///     SanitizeResult::Invalid { error: SanitizeError::Required }
/// );
/// ```
pub fn sanitize_name(input: Option<&str>) -> SanitizeResult {
    let Some(raw) = input.filter(|raw| !raw.is_empty()) else {
        return SanitizeResult::invalid(SanitizeError::Required);
    };

    let sanitized = normalize(raw);

    if sanitized.is_empty() || sanitized == "-" {
        debug!("rejected agent name {raw:?}: nothing left after normalizing");
        return SanitizeResult::invalid(SanitizeError::NoAlphanumeric);
    }

    if sanitized.starts_with('-') || sanitized.ends_with('-') {
        debug!("rejected agent name {raw:?}: normalized to {sanitized:?}");
        return SanitizeResult::invalid(SanitizeError::BoundaryHyphen);
    }

    SanitizeResult::Valid { name: sanitized }
}

/// Sanitize a dynamically typed value, such as a field read from JSON.
///
/// Anything other than a string is treated as a missing name.
pub fn sanitize_value(input: &Value) -> SanitizeResult {
    match input {
        Value::String(raw) => sanitize_name(Some(raw.as_str())),
        _ => SanitizeResult::invalid(SanitizeError::Required),
    }
}

/// Lowercase, collapse whitespace runs to `-`, then keep only `[a-z0-9-]`.
///
/// Whitespace is collapsed before stripping, so runs separated only by dropped
/// characters still produce one hyphen each.
fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if is_separator_space(ch) {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
        }
    }

    out
}

/// Whitespace as browsers and Node match it with `\s`: Unicode `White_Space`
/// without U+0085 NEL, plus the U+FEFF byte order mark.
fn is_separator_space(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}
