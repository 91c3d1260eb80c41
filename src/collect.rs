use std::collections::HashSet;

use crate::tables::LanguageCharacters;

/// Unique, unordered set of Unicode scalar values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePointSet {
    points: HashSet<u32>,
}

impl CodePointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every character of `entry`.
    pub fn extend_from_str(&mut self, entry: &str) {
        self.points.extend(entry.chars().map(u32::from));
    }

    pub fn contains(&self, ch: char) -> bool {
        self.points.contains(&u32::from(ch))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Materialize the set in ascending code-point order.
    pub fn into_sorted(self) -> Vec<u32> {
        let mut points: Vec<u32> = self.points.into_iter().collect();
        points.sort_unstable();
        points
    }
}

/// Gather every code point a language needs glyphs for.
///
/// Alphabet entries are added as-is and uppercased. Uppercasing works on the
/// whole entry, so `ß` contributes `S` and a digraph like `ij` contributes
/// `I` and `J`.
pub fn collect_code_points(chars: &LanguageCharacters<'_>) -> CodePointSet {
    let mut set = CodePointSet::new();
    for entry in chars.alphabet {
        set.extend_from_str(entry);
    }
    for entry in chars.alphabet {
        set.extend_from_str(&entry.to_uppercase());
    }
    for entry in chars.numbers {
        set.extend_from_str(entry);
    }
    for entry in chars.punctuation {
        set.extend_from_str(entry);
    }
    set
}
