/// Number of hexadecimal literals emitted per line of a glyph array.
pub const GLYPHS_PER_LINE: usize = 16;

/// Prefix of every generated per-language function.
pub const FUNCTION_PREFIX: &str = "AddGlyphRangesFromCLDRFor";

/// Render a code point as a lowercase `0x` literal.
pub fn hex_literal(point: u32) -> String {
    format!("{point:#x}")
}

/// Split sorted code points into array-body lines.
///
/// Every line but the last carries a trailing comma, so the lines
/// concatenated form a valid array initializer.
pub fn chunk_lines(points: &[u32]) -> Vec<String> {
    let mut lines: Vec<String> = points
        .chunks(GLYPHS_PER_LINE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&p| hex_literal(p))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    let last = lines.len().saturating_sub(1);
    for line in &mut lines[..last] {
        line.push(',');
    }
    lines
}

/// Name of the generated function for `code`.
pub fn function_name(code: &str) -> String {
    format!("{FUNCTION_PREFIX}{}", code.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literals_are_lowercase() {
        assert_eq!(hex_literal(0x61), "0x61");
        assert_eq!(hex_literal(0x1F600), "0x1f600");
        assert_eq!(hex_literal(0), "0x0");
    }

    #[test]
    fn short_input_is_one_line_without_comma() {
        assert_eq!(chunk_lines(&[0x2e, 0x30]), vec!["0x2e, 0x30".to_string()]);
    }

    #[test]
    fn exact_multiple_of_line_width() {
        let points: Vec<u32> = (0..32).collect();
        let lines = chunk_lines(&points);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("0xf,"));
        assert!(lines[1].starts_with("0x10, "));
        assert!(lines[1].ends_with("0x1f"));
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(chunk_lines(&[]).is_empty());
    }

    #[test]
    fn function_name_uppercases_code() {
        assert_eq!(function_name("uk_UA"), "AddGlyphRangesFromCLDRForUK_UA");
        assert_eq!(function_name("zh_Hant"), "AddGlyphRangesFromCLDRForZH_HANT");
    }
}
