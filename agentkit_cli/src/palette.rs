//! Semantic color palette for console output.
//!
//! Six slots, each bound to a single meaning. The defaults are the basic ANSI
//! colors; a TOML file can override any subset of them:
//!
//! ```toml
//! [palette]
//! success = "bright green"
//! skip = { r = 120, g = 120, b = 120 }
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use colored::Color;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while applying palette overrides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("unknown color '{name}' for palette slot '{slot}'")]
    UnknownColor { slot: &'static str, name: String },
}

/// A color as written in a palette file: a color name or an RGB table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(String),
    Rgb { r: u8, g: u8, b: u8 },
}

impl ColorSpec {
    fn resolve(&self, slot: &'static str) -> Result<Color, PaletteError> {
        match self {
            ColorSpec::Named(name) => Color::from_str(name).map_err(|()| PaletteError::UnknownColor {
                slot,
                name: name.clone(),
            }),
            ColorSpec::Rgb { r, g, b } => Ok(Color::TrueColor { r: *r, g: *g, b: *b }),
        }
    }
}

/// Optional per-slot overrides, as read from the `[palette]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    pub success: Option<ColorSpec>,
    pub error: Option<ColorSpec>,
    pub warn: Option<ColorSpec>,
    pub info: Option<ColorSpec>,
    pub action: Option<ColorSpec>,
    pub skip: Option<ColorSpec>,
}

#[derive(Debug, Default, Deserialize)]
struct PaletteFile {
    #[serde(default)]
    palette: PaletteOverrides,
}

/// Resolved colors for each semantic slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// success / ok
    pub success: Color,
    /// error / blocking
    pub error: Color,
    /// warning / attention
    pub warn: Color,
    /// info and headers
    pub info: Color,
    /// user action / commands to run
    pub action: Color,
    /// inactive / skipped
    pub skip: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            success: Color::Green,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Cyan,
            action: Color::Magenta,
            skip: Color::BrightBlack,
        }
    }
}

impl Palette {
    /// Load a palette from a TOML file, starting from the defaults.
    ///
    /// A missing file is not an error; the default palette is returned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no palette file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read palette file at {}", path.display()))?;
        let palette =
            Self::from_toml(&contents).with_context(|| format!("invalid palette file at {}", path.display()))?;
        info!("loaded palette from {}", path.display());
        Ok(palette)
    }

    /// Parse palette overrides from TOML text and apply them to the defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: PaletteFile = toml::from_str(contents).context("failed to parse palette TOML")?;
        let mut palette = Self::default();
        palette.apply(&file.palette)?;
        Ok(palette)
    }

    /// Replace every slot that has an override. Slots are left untouched on error.
    pub fn apply(&mut self, overrides: &PaletteOverrides) -> Result<(), PaletteError> {
        let mut next = *self;
        let slots = [
            ("success", &overrides.success, &mut next.success),
            ("error", &overrides.error, &mut next.error),
            ("warn", &overrides.warn, &mut next.warn),
            ("info", &overrides.info, &mut next.info),
            ("action", &overrides.action, &mut next.action),
            ("skip", &overrides.skip, &mut next.skip),
        ];
        for (slot, spec, color) in slots {
            if let Some(spec) = spec {
                *color = spec.resolve(slot)?;
            }
        }
        *self = next;
        Ok(())
    }
}
