//! Emission of the ImGui glyph-range source file.
//!
//! The output is a C++ translation unit: a prologue with lint markers,
//! portability macros and the shared `AddGlyphs` helper, one static
//! function per requested language, and a closing lint marker.

use std::io::Write;

use log::debug;

use crate::collect::collect_code_points;
use crate::error::GlyphGenError;
use crate::format::{chunk_lines, function_name};
use crate::tables::CharacterTables;

/// Lint checks suppressed for the generated file.
const NOLINT_CHECKS: &str =
    "cata-static-declarations,readability-function-size,modernize-avoid-c-arrays";

/// Sample invocation recorded in the file header.
const EXAMPLE_INVOCATION: &str = "glyphgen en ar cs da de el es fr hu id is it nb nl pl pt ru sr tr uk_UA > src/cldr/imgui-glyph-ranges.cpp";

const PREPROCESSOR: &str = r#"#if defined(__GNUC__) or defined(__clang__)
#define NOINLINE __attribute__ ((noinline))
#else
#define NOINLINE __declspec(noinline)
#endif
#if defined(__clang__)
#define NOUNROLL _Pragma("clang loop unroll(disable)")
#elif defined(__GNUC__)
#define NOUNROLL #pragma GCC unroll 0
#else
#define NOUNROLL
#endif
"#;

const ADD_GLYPHS_HELPER: &str = "namespace {
NOINLINE void AddGlyphs( ImFontGlyphRangesBuilder *b, ImWchar const *glyphp, ImWchar const *end) {
  NOUNROLL
  for( ; glyphp != end; ++glyphp ) {
    b->AddChar(*glyphp);
  }
}
} // namespace
";

/// Writes glyph-range functions for languages found in `T`.
pub struct Generator<'t, T: CharacterTables> {
    tables: &'t T,
}

impl<'t, T: CharacterTables> Generator<'t, T> {
    pub fn new(tables: &'t T) -> Self {
        Self { tables }
    }

    /// Header comment, lint marker, macros and the shared helper.
    pub fn write_prologue<W: Write>(&self, w: &mut W) -> Result<(), GlyphGenError> {
        writeln!(w, "// generated by glyphgen; example:")?;
        writeln!(w, "//   {EXAMPLE_INVOCATION}")?;
        writeln!(w)?;
        writeln!(w, "// NOLINTBEGIN({NOLINT_CHECKS})")?;
        writeln!(w)?;
        writeln!(w, "{PREPROCESSOR}")?;
        write!(w, "{ADD_GLYPHS_HELPER}")?;
        Ok(())
    }

    /// Emit the registration function for a single language.
    pub fn write_language<W: Write>(&self, w: &mut W, code: &str) -> Result<(), GlyphGenError> {
        let chars = self.tables.lookup(code)?;
        let points = collect_code_points(&chars).into_sorted();
        debug!("{code}: {} code points", points.len());

        let name = function_name(code);
        if points.is_empty() {
            // C++ forbids zero-length arrays.
            writeln!(w, "static void {name}(ImFontGlyphRangesBuilder * /*b*/) {{")?;
            writeln!(w, "}}")?;
            return Ok(());
        }

        writeln!(w, "static void {name}(ImFontGlyphRangesBuilder *b) {{")?;
        writeln!(w, "  static constexpr ImWchar glyphs[] = {{")?;
        for line in chunk_lines(&points) {
            writeln!(w, "{line}")?;
        }
        writeln!(w, "  }};")?;
        writeln!(
            w,
            "  AddGlyphs(b, glyphs, glyphs + std::extent_v<decltype(glyphs)>);"
        )?;
        writeln!(w, "}}")?;
        Ok(())
    }

    pub fn write_epilogue<W: Write>(&self, w: &mut W) -> Result<(), GlyphGenError> {
        writeln!(w, "// NOLINTEND({NOLINT_CHECKS})")?;
        writeln!(w)?;
        Ok(())
    }

    /// Generate the complete file for `codes`, in order.
    ///
    /// Stops at the first unknown language. Functions already written stay
    /// in `w` and the epilogue is not emitted.
    pub fn generate<W, S>(&self, w: &mut W, codes: &[S]) -> Result<(), GlyphGenError>
    where
        W: Write,
        S: AsRef<str>,
    {
        self.write_prologue(w)?;
        for code in codes {
            self.write_language(w, code.as_ref())?;
        }
        self.write_epilogue(w)
    }
}
