//! KeySearch: exhaustive enumeration of every non-identity shift.
//!
//! The search produces all 25 decodings in ascending key order and makes
//! no attempt to rank them; picking the readable one is left to the caller.

use std::fmt;

use log::trace;
use serde::Serialize;

use crate::key::CipherKey;
use crate::shift_cipher::decode;

/// Smallest key tried by [`brute_force`].
pub const FIRST_KEY: u8 = 1;

/// Largest key tried by [`brute_force`].
pub const LAST_KEY: u8 = 25;

/// One decoding attempt: the key tried and the resulting text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub key: u8,
    pub text: String,
}

impl Candidate {
    fn attempt(ciphertext: &str, key: u8) -> Self {
        let text = decode(ciphertext, CipherKey::from(key));
        trace!("key search: key {} -> {} bytes", key, text.len());
        Candidate { key, text }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key {}: {}", self.key, self.text)
    }
}

/// Ordered result of a key search: one [`Candidate`] per key in `1..=25`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeySearchResult {
    candidates: Vec<Candidate>,
}

impl KeySearchResult {
    /// Number of candidates (always 25).
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterates candidates in ascending key order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Returns the candidate for `key`, or `None` if `key` is outside `1..=25`.
    pub fn get(&self, key: u8) -> Option<&Candidate> {
        if !(FIRST_KEY..=LAST_KEY).contains(&key) {
            return None;
        }
        self.candidates.get(usize::from(key - FIRST_KEY))
    }

    /// Consumes the result, returning the candidates.
    pub fn into_vec(self) -> Vec<Candidate> {
        self.candidates
    }
}

impl<'a> IntoIterator for &'a KeySearchResult {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl fmt::Display for KeySearchResult {
    /// One `Key {k}: {text}` line per candidate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for candidate in &self.candidates {
            writeln!(f, "{}", candidate)?;
        }
        Ok(())
    }
}

/// Decodes `ciphertext` under every key in `1..=25`.
///
/// No filtering or early exit: the full candidate set is always returned,
/// even for empty input.
///
/// # Examples
///
/// ```
/// use caesar_toolkit::brute_force;
///
/// let result = brute_force("Khoor");
/// assert_eq!(result.len(), 25);
/// assert_eq!(result.get(3).unwrap().text, "Hello");
/// ```
#[cfg(not(feature = "parallel"))]
pub fn brute_force(ciphertext: &str) -> KeySearchResult {
    let candidates = (FIRST_KEY..=LAST_KEY)
        .map(|key| Candidate::attempt(ciphertext, key))
        .collect();
    KeySearchResult { candidates }
}

/// Decodes `ciphertext` under every key in `1..=25` on the rayon pool.
///
/// `collect` on an indexed parallel iterator keeps ascending key order.
#[cfg(feature = "parallel")]
pub fn brute_force(ciphertext: &str) -> KeySearchResult {
    use rayon::prelude::*;

    let candidates = (FIRST_KEY..=LAST_KEY)
        .into_par_iter()
        .map(|key| Candidate::attempt(ciphertext, key))
        .collect();
    KeySearchResult { candidates }
}
