#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const AGENTKIT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod console;
pub(crate) mod icons;
pub mod palette;
pub mod report;
pub mod style;

// Re-exports for convenience
pub use console::{CheckStatus, Console};
pub use palette::Palette;
pub use report::{BatchReport, NameReport, render_all};
