//! Brazilian Portuguese string collation
//!
//! Orders strings the way a pt-BR reader expects in an index: accents and
//! case are ignored at first, so "Açafrão" sorts among the "A" words next to
//! "Acerola", and only break ties. Unaccented letters come before accented
//! ones and lowercase before uppercase.
//!
//! Text is compared in canonical decomposition (NFD), so precomposed and
//! decomposed spellings of the same name collate identically.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::plant::PlantRecord;

/// Secondary weight of a combining mark. Marks outside the common Latin
/// accents sort after them in code point order.
fn accent_weight(mark: char) -> u32 {
    match mark {
        '\u{301}' => 1, // acute
        '\u{300}' => 2, // grave
        '\u{302}' => 3, // circumflex
        '\u{303}' => 4, // tilde
        '\u{308}' => 5, // diaeresis
        '\u{30a}' => 6, // ring
        '\u{327}' => 7, // cedilla
        other => 8 + other as u32,
    }
}

/// Base letter of a character with its accents stripped, case preserved
pub fn base_letter(c: char) -> char {
    c.nfd().next().unwrap_or(c)
}

/// Three-level sort key: base letters, then accents, then case
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<char>,
    secondary: Vec<Vec<u32>>,
    tertiary: Vec<u8>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let mut primary = Vec::with_capacity(text.len());
        let mut secondary: Vec<Vec<u32>> = Vec::with_capacity(text.len());
        let mut tertiary = Vec::with_capacity(text.len());

        for c in text.trim().nfd() {
            if is_combining_mark(c) {
                if let Some(marks) = secondary.last_mut() {
                    marks.push(accent_weight(c));
                    continue;
                }
            }

            let expanded: &[char] = match c {
                'æ' | 'Æ' => &['a', 'e'],
                'œ' | 'Œ' => &['o', 'e'],
                'ß' => &['s', 's'],
                _ => &[],
            };
            let case = u8::from(c.is_uppercase());

            if expanded.is_empty() {
                for lower in c.to_lowercase() {
                    primary.push(lower);
                    secondary.push(Vec::new());
                    tertiary.push(case);
                }
            } else {
                for &part in expanded {
                    primary.push(part);
                    secondary.push(Vec::new());
                    tertiary.push(case);
                }
            }
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

/// Compare two strings with pt-BR collation
pub fn compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Sort records by common name; records with equal names keep their
/// relative input order
pub fn sort_by_common_name(records: &[PlantRecord]) -> Vec<&PlantRecord> {
    let mut keyed: Vec<(CollationKey, &PlantRecord)> = records
        .iter()
        .map(|record| (CollationKey::new(&record.common_name), record))
        .collect();
    // sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, record)| record).collect()
}
