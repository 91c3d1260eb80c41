use std::env;
use std::path::PathBuf;

use log::debug;

use crate::error::GlyphGenError;
use crate::tables::CldrTables;

/// Environment variable naming a JSON file that replaces the embedded tables.
pub const TABLES_ENV: &str = "GLYPHGEN_TABLES";

/// Runtime configuration for a generator run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Character-class tables file. `None` selects the embedded CLDR data.
    pub tables_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let tables_path = env::var_os(TABLES_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { tables_path }
    }

    /// Load the tables this configuration selects.
    pub fn load_tables(&self) -> Result<CldrTables, GlyphGenError> {
        match &self.tables_path {
            Some(path) => {
                debug!("loading character tables from {}", path.display());
                CldrTables::load(path)
            }
            None => {
                debug!("using embedded character tables");
                CldrTables::embedded()
            }
        }
    }
}
