//! Agent name sanitizing shared by the agentkit command line and its callers.

pub mod sanitize;

pub use sanitize::{SanitizeError, SanitizeResult, sanitize_name, sanitize_value};
