//! Per-language character-class tables.
//!
//! The tables mirror the CLDR exemplar data: for every language code there
//! is an ordered list of alphabet entries, number entries and punctuation
//! entries. An entry may hold more than one character (digraphs such as
//! Czech `ch` or Dutch `ij`).

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::GlyphGenError;

/// Tables compiled into the binary.
const EMBEDDED_TABLES: &str = include_str!("../data/cldr_alphabets.json");

/// Borrowed view of the three character classes of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageCharacters<'a> {
    pub alphabet: &'a [String],
    pub numbers: &'a [String],
    pub punctuation: &'a [String],
}

/// Lookup interface used by the generator.
pub trait CharacterTables {
    /// Return the character classes of `code`.
    ///
    /// A class the language has no entry for is returned empty. Only a code
    /// unknown to every class is an error.
    fn lookup(&self, code: &str) -> Result<LanguageCharacters<'_>, GlyphGenError>;
}

/// CLDR-derived tables keyed by language code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CldrTables {
    #[serde(default)]
    pub alphabets: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub numbers: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub punctuation: BTreeMap<String, Vec<String>>,
}

impl CldrTables {
    /// Parse the tables shipped with the binary.
    pub fn embedded() -> Result<Self, GlyphGenError> {
        Self::from_json(EMBEDDED_TABLES)
    }

    pub fn from_json(json: &str) -> Result<Self, GlyphGenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read tables from a JSON file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GlyphGenError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All codes known to at least one class, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let codes: BTreeSet<&str> = self
            .alphabets
            .keys()
            .chain(self.numbers.keys())
            .chain(self.punctuation.keys())
            .map(String::as_str)
            .collect();
        codes.into_iter().collect()
    }
}

fn entries<'a>(map: &'a BTreeMap<String, Vec<String>>, code: &str) -> Option<&'a [String]> {
    map.get(code).map(Vec::as_slice)
}

impl CharacterTables for CldrTables {
    fn lookup(&self, code: &str) -> Result<LanguageCharacters<'_>, GlyphGenError> {
        let alphabet = entries(&self.alphabets, code);
        let numbers = entries(&self.numbers, code);
        let punctuation = entries(&self.punctuation, code);
        if alphabet.is_none() && numbers.is_none() && punctuation.is_none() {
            return Err(GlyphGenError::UnknownLanguage(code.to_string()));
        }
        Ok(LanguageCharacters {
            alphabet: alphabet.unwrap_or_default(),
            numbers: numbers.unwrap_or_default(),
            punctuation: punctuation.unwrap_or_default(),
        })
    }
}
