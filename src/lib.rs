//! Generate ImGui glyph-range registration code from CLDR character data.
//!
//! For each requested language the generator collects every letter (in both
//! cases), digit and punctuation mark the language uses and prints a C++
//! function that adds those code points to an `ImFontGlyphRangesBuilder`.

pub mod collect;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod io_utils;
pub mod tables;

pub use collect::{collect_code_points, CodePointSet};
pub use config::Config;
pub use error::GlyphGenError;
pub use format::{chunk_lines, function_name, hex_literal, GLYPHS_PER_LINE};
pub use generator::Generator;
pub use tables::{CharacterTables, CldrTables, LanguageCharacters};
