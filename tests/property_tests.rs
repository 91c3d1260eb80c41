use std::collections::BTreeSet;

use glyphgen::{
    chunk_lines, collect_code_points, CharacterTables, CldrTables, Generator, LanguageCharacters,
    GLYPHS_PER_LINE,
};
use proptest::prelude::*;
use quickcheck::{quickcheck, TestResult};

fn parse_literal(s: &str) -> u32 {
    u32::from_str_radix(s.trim().trim_start_matches("0x"), 16).unwrap()
}

fn expected_points(chars: &LanguageCharacters<'_>) -> Vec<u32> {
    let mut set = BTreeSet::new();
    for entry in chars.alphabet {
        set.extend(entry.chars().map(u32::from));
        set.extend(entry.to_uppercase().chars().map(u32::from));
    }
    for entry in chars.numbers.iter().chain(chars.punctuation) {
        set.extend(entry.chars().map(u32::from));
    }
    set.into_iter().collect()
}

/// Code points listed in the single generated array of `text`.
fn emitted_points(text: &str) -> Vec<u32> {
    let Some(start) = text.find("glyphs[] = {\n") else {
        return Vec::new();
    };
    let start = start + "glyphs[] = {\n".len();
    let end = text[start..].find("  };").unwrap() + start;
    let body: Vec<&str> = text[start..end].lines().collect();
    body.join(" ").split(", ").map(parse_literal).collect()
}

fn embedded_languages() -> Vec<String> {
    CldrTables::embedded()
        .unwrap()
        .languages()
        .into_iter()
        .map(String::from)
        .collect()
}

proptest! {
    #[test]
    fn embedded_arrays_are_exact_and_ascending(code in prop::sample::select(embedded_languages())) {
        let tables = CldrTables::embedded().unwrap();
        let mut out = Vec::new();
        Generator::new(&tables).write_language(&mut out, &code).unwrap();
        let points = emitted_points(&String::from_utf8(out).unwrap());
        prop_assert!(points.windows(2).all(|w| w[0] < w[1]));
        let chars = tables.lookup(&code).unwrap();
        prop_assert_eq!(points, expected_points(&chars));
    }

    #[test]
    fn random_tables_collect_exact_set(
        alphabet in prop::collection::vec(any::<String>(), 0..6),
        numbers in prop::collection::vec(any::<String>(), 0..4),
        punctuation in prop::collection::vec(any::<String>(), 0..4),
    ) {
        let chars = LanguageCharacters {
            alphabet: &alphabet,
            numbers: &numbers,
            punctuation: &punctuation,
        };
        prop_assert_eq!(collect_code_points(&chars).into_sorted(), expected_points(&chars));
    }
}

fn chunking_law(points: Vec<u32>) -> TestResult {
    let sorted: Vec<u32> = points.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    if sorted.is_empty() {
        return TestResult::discard();
    }
    let lines = chunk_lines(&sorted);
    let (last, rest) = lines.split_last().unwrap();
    let commas = rest.iter().all(|l| l.ends_with(',')) && !last.ends_with(',');
    let widths = lines.iter().all(|l| l.split(", ").count() <= GLYPHS_PER_LINE);
    let rejoined: Vec<u32> = lines.join(" ").split(", ").map(parse_literal).collect();
    TestResult::from_bool(commas && widths && rejoined == sorted)
}

#[test]
fn chunk_lines_reassemble() {
    quickcheck(chunking_law as fn(Vec<u32>) -> TestResult);
}
