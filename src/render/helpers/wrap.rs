//! Text wrapping
//!
//! Two flavours: `wrap_text` packs whole words by character count (titles,
//! labels, summary entries); `wrap_measured` packs by rendered width using
//! the builtin font metrics (body paragraphs).

use std::str::SplitWhitespace;

use printpdf::BuiltinFont;

use super::text_metrics::get_builtin_measurer;

/// Lines produced by [`wrap_text`].
///
/// A clone continues from the same position; clone before consuming to
/// walk the lines more than once.
#[derive(Debug, Clone)]
pub struct WrapLines<'a> {
    words: SplitWhitespace<'a>,
    pending: Option<&'a str>,
    width: usize,
}

impl<'a> Iterator for WrapLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.pending.take().or_else(|| self.words.next())?;
        let mut line = first.to_string();
        let mut len = first.chars().count();

        for word in self.words.by_ref() {
            let word_len = word.chars().count();
            if len + 1 + word_len <= self.width {
                line.push(' ');
                line.push_str(word);
                len += 1 + word_len;
            } else {
                self.pending = Some(word);
                break;
            }
        }

        Some(line)
    }
}

/// Greedily pack words into lines of at most `width` characters.
///
/// Words are joined by single spaces. A word longer than `width` gets a line
/// of its own and is never split. Blank input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> WrapLines<'_> {
    WrapLines {
        words: text.split_whitespace(),
        pending: None,
        width,
    }
}

/// Wrap text to a rendered width in mm.
///
/// Explicit newlines start new lines and blank lines are kept as empty
/// strings. A word wider than the line is split between characters.
pub fn wrap_measured(text: &str, max_width_mm: f32, font: BuiltinFont, font_size: f32) -> Vec<String> {
    let measurer = get_builtin_measurer(font);
    let fits = |s: &str| measurer.measure_width_mm(s, font_size) <= max_width_mm;

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !fits(word) {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                for c in word.chars() {
                    let mut candidate = current.clone();
                    candidate.push(c);
                    if !current.is_empty() && !fits(&candidate) {
                        lines.push(std::mem::take(&mut current));
                        current.push(c);
                    } else {
                        current = candidate;
                    }
                }
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{} {}", current, word);
            if fits(&candidate) {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
