//! Conjugation table configuration
//!
//! This module defines the TOML schema for conjugation tables and the
//! embedded default Japanese table.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Root conjugation table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjugationConfig {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Table metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One rule as written in the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub ending: String,
    #[serde(default)]
    pub base: String,
    /// Entity code (`v1`) or expanded tag (`Ichidan verb`)
    pub pos: String,
}

type CachedConfig = OnceLock<std::result::Result<ConjugationConfig, String>>;

static EMBEDDED: CachedConfig = OnceLock::new();

const EMBEDDED_TOML: &str = include_str!("../../configs/conjugations.toml");

const EMBEDDED_NAME: &str = "built-in conjugations.toml";

impl ConjugationConfig {
    /// Parse a table from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// The built-in Japanese conjugation table
    ///
    /// Parsed once; a malformed table is reported on every call.
    pub fn embedded() -> Result<&'static ConjugationConfig> {
        load_cached(&EMBEDDED, EMBEDDED_TOML)
    }
}

fn load_cached<'a>(cell: &'a CachedConfig, toml_str: &str) -> Result<&'a ConjugationConfig> {
    cell.get_or_init(|| {
        toml::from_str(toml_str).map_err(|e| {
            log::error!("{EMBEDDED_NAME} is malformed: {e}");
            e.to_string()
        })
    })
    .as_ref()
    .map_err(|error| Error::Configuration {
        path: EMBEDDED_NAME.to_string(),
        error: error.clone(),
    })
}
