//! Locale-aware title ordering.
//!
//! Approximates the root Unicode collation used by browsers. Titles are
//! decomposed (NFD) first, so precomposed and combining-mark spellings of the
//! same letter produce the same key. Three levels, compared in order:
//!
//! 1. primary: base letters, case and marks ignored; ligatures such as `æ`
//!    and `ß` expand to their letters; whitespace sorts before punctuation,
//!    punctuation before digits, digits before letters;
//! 2. secondary: unaccented before accented;
//! 3. tertiary: lowercase before uppercase.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(u8, char)>,
    secondary: Vec<bool>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let mut key = CollationKey {
            primary: Vec::with_capacity(text.len()),
            secondary: Vec::with_capacity(text.len()),
            tertiary: Vec::with_capacity(text.len()),
        };

        for c in text.nfd() {
            let upper = c.is_uppercase();
            for lower in c.to_lowercase() {
                if is_combining_mark(lower) {
                    key.mark_accent();
                    continue;
                }
                if let Some(letters) = expand_ligature(lower) {
                    for base in letters.chars() {
                        key.push(base, true, upper);
                    }
                    continue;
                }
                match strip_stroke(lower) {
                    Some(base) => key.push(base, true, upper),
                    None => key.push(lower, false, upper),
                }
            }
        }

        key
    }

    fn push(&mut self, base: char, accented: bool, upper: bool) {
        self.primary.push((class_of(base), base));
        self.secondary.push(accented);
        self.tertiary.push(upper);
    }

    // A mark with no preceding letter still counts at the secondary level.
    fn mark_accent(&mut self) {
        if self.primary.is_empty() || self.secondary.len() != self.primary.len() {
            self.secondary.push(true);
        } else if let Some(last) = self.secondary.last_mut() {
            *last = true;
        }
    }
}

/// Compare two strings the way titles are ordered on screen.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

fn class_of(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

fn expand_ligature(c: char) -> Option<&'static str> {
    let letters = match c {
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'ĳ' => "ij",
        'ﬀ' => "ff",
        'ﬁ' => "fi",
        'ﬂ' => "fl",
        _ => return None,
    };
    Some(letters)
}

// Letters with a stroke or bar have no canonical decomposition.
fn strip_stroke(c: char) -> Option<char> {
    let base = match c {
        'ƀ' => 'b',
        'đ' | 'ɖ' => 'd',
        'ǥ' => 'g',
        'ħ' => 'h',
        'ı' | 'ɨ' => 'i',
        'ł' | 'ŀ' | 'ƚ' => 'l',
        'ø' | 'ǿ' => 'o',
        'ŧ' => 't',
        'ƶ' => 'z',
        _ => return None,
    };
    Some(base)
}
