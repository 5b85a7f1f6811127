//! StringClassifier: partitions a string into character-class subsequences.
//!
//! Classification is total and ASCII-only. Decimal digits `0-9` and letters
//! `A-Z`/`a-z` are recognised; every other scalar value (including
//! non-ASCII letters and digits) is ignored. Order of appearance is kept in
//! every output sequence and nothing is deduplicated.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::error::CipherError;

/// Minimum length the interactive analysis expects of a sample string.
pub const MIN_SAMPLE_LEN: usize = 16;

/// Category of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII decimal digit, carrying its numeric value.
    Digit(u8),
    /// ASCII letter.
    Letter { uppercase: bool },
    /// Anything else.
    Other,
}

/// Classifies one character against the fixed ASCII ranges.
///
/// # Examples
///
/// ```
/// use caesar_toolkit::{classify_char, CharClass};
///
/// assert_eq!(classify_char('7'), CharClass::Digit(7));
/// assert_eq!(classify_char('Q'), CharClass::Letter { uppercase: true });
/// assert_eq!(classify_char('é'), CharClass::Other);
/// ```
pub fn classify_char(c: char) -> CharClass {
    match c {
        '0'..='9' => CharClass::Digit(c as u8 - b'0'),
        'A'..='Z' => CharClass::Letter { uppercase: true },
        'a'..='z' => CharClass::Letter { uppercase: false },
        _ => CharClass::Other,
    }
}

/// Result of [`classify`].
///
/// `even_digit_codes` runs parallel to `even_digits` and
/// `upper_letter_codes` to `upper_letters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub digits: String,
    pub letters: String,
    pub even_digits: String,
    pub even_digit_codes: Vec<u8>,
    pub upper_letters: String,
    pub upper_letter_codes: Vec<u8>,
}

impl Classification {
    /// Returns `true` when no character of the input was classified.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty() && self.letters.is_empty()
    }

    fn push(&mut self, c: char) {
        match classify_char(c) {
            CharClass::Digit(value) => {
                self.digits.push(c);
                if value % 2 == 0 {
                    self.even_digits.push(c);
                    self.even_digit_codes.push(c as u8);
                }
            }
            CharClass::Letter { uppercase } => {
                self.letters.push(c);
                if uppercase {
                    self.upper_letters.push(c);
                    self.upper_letter_codes.push(c as u8);
                }
            }
            CharClass::Other => {}
        }
    }
}

fn join_chars(s: &str) -> String {
    s.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_codes(codes: &[u8]) -> String {
    codes
        .iter()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number string: {}", self.digits)?;
        writeln!(f, "Letter string: {}", self.letters)?;
        writeln!(f, "Even numbers: {}", join_chars(&self.even_digits))?;
        writeln!(
            f,
            "ASCII code of even numbers: {}",
            join_codes(&self.even_digit_codes)
        )?;
        writeln!(f, "Uppercase letters: {}", join_chars(&self.upper_letters))?;
        writeln!(
            f,
            "ASCII code of uppercase letters: {}",
            join_codes(&self.upper_letter_codes)
        )
    }
}

/// Splits `text` into digit, letter, even-digit and uppercase subsequences.
///
/// Never fails; empty or fully unclassifiable input yields empty sequences.
///
/// # Examples
///
/// ```
/// use caesar_toolkit::classify;
///
/// let result = classify("a1B2-c");
/// assert_eq!(result.digits, "12");
/// assert_eq!(result.letters, "aBc");
/// assert_eq!(result.even_digits, "2");
/// assert_eq!(result.upper_letter_codes, vec![66]);
/// ```
pub fn classify(text: &str) -> Classification {
    let mut result = Classification::default();
    for c in text.chars() {
        result.push(c);
    }
    debug!(
        "classified {} digits, {} letters",
        result.digits.len(),
        result.letters.len()
    );
    result
}

/// Like [`classify`], but first requires `text` to hold at least `min_len`
/// characters.
///
/// # Errors
/// Returns [`CipherError::InputTooShort`] when the text is shorter than
/// `min_len` characters.
pub fn classify_sample(text: &str, min_len: usize) -> Result<Classification, CipherError> {
    let actual = text.chars().count();
    if actual < min_len {
        return Err(CipherError::InputTooShort {
            min: min_len,
            actual,
        });
    }
    Ok(classify(text))
}
