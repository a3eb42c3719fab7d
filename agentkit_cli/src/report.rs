//! Console rendering of sanitizer outcomes.

use agentkit_name::{SanitizeError, SanitizeResult, sanitize_name};
use anyhow::Result;

use crate::console::Console;

/// One input name together with the sanitizer's verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReport {
    pub input: String,
    pub result: SanitizeResult,
}

impl NameReport {
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let result = sanitize_name(Some(input.as_str()));
        Self { input, result }
    }

    /// Render for a person at a terminal.
    pub fn render(&self, console: &Console) -> Vec<String> {
        match &self.result {
            SanitizeResult::Valid { name } if *name == self.input => vec![console.render_success(name)],
            SanitizeResult::Valid { name } => {
                vec![format!(
                    "{} {}",
                    console.render_success(name),
                    console.gray(&format!("(from {:?})", self.input))
                )]
            },
            SanitizeResult::Invalid { error } => {
                let items = [format!("received {:?}", self.input)];
                console.render_error_block(&error.to_string(), &items, hint_for(*error))
            },
        }
    }

    /// Render as one line of JSON, `{"valid": ..., "name"|"error": ...}`.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.result)?)
    }
}

/// Output lines for a batch of names and how many of them were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub lines: Vec<String>,
    pub rejected: usize,
}

impl BatchReport {
    pub fn all_valid(&self) -> bool {
        self.rejected == 0
    }
}

/// Sanitize every name in order, rendering styled lines or one JSON object per name.
pub fn render_all<S: AsRef<str>>(console: &Console, names: &[S], json: bool) -> Result<BatchReport> {
    let mut batch = BatchReport::default();
    for raw in names {
        let report = NameReport::new(raw.as_ref());
        if !report.result.is_valid() {
            batch.rejected += 1;
        }
        if json {
            batch.lines.push(report.render_json()?);
        } else {
            batch.lines.extend(report.render(console));
        }
    }
    Ok(batch)
}

fn hint_for(error: SanitizeError) -> &'static [&'static str] {
    match error {
        SanitizeError::Required => &["agentkit sanitize \"<agent name>\""],
        SanitizeError::NoAlphanumeric | SanitizeError::BoundaryHyphen => {
            &["use letters or digits, e.g. agentkit sanitize \"research bot\""]
        },
    }
}
