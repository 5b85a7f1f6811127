//! ShiftCipher: Caesar shift over the 26-letter Latin alphabet.
//!
//! Each ASCII letter is moved `key` places along its own case's alphabet,
//! wrapping modulo 26. Everything else (digits, punctuation, whitespace,
//! non-ASCII scalars) passes through untouched.

use crate::key::CipherKey;

/// Alphabet base for an ASCII letter, `None` for any other character.
fn alphabet_base(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(b'A')
    } else if c.is_ascii_lowercase() {
        Some(b'a')
    } else {
        None
    }
}

/// Shifts a single character forward by `shift` places (`shift` in `[0, 25]`).
fn shift_char(c: char, shift: u8) -> char {
    match alphabet_base(c) {
        Some(base) => {
            let offset = c as u8 - base;
            (base + (offset + shift) % 26) as char
        }
        None => c,
    }
}

/// Encodes `text` by shifting every ASCII letter forward by `key`.
///
/// The key does not need to be normalized: negative keys shift backwards
/// and keys beyond 26 wrap.
///
/// # Examples
///
/// ```
/// use caesar_toolkit::{encode, CipherKey};
///
/// assert_eq!(encode("Hello, World!", CipherKey::new(3)), "Khoor, Zruog!");
/// assert_eq!(encode("abc", CipherKey::new(-1)), "zab");
/// ```
pub fn encode(text: &str, key: CipherKey) -> String {
    let shift = key.normalized();
    if shift == 0 {
        return text.to_owned();
    }
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Decodes `text` encoded with `key`; equivalent to `encode(text, -key)`.
///
/// # Examples
///
/// ```
/// use caesar_toolkit::{decode, CipherKey};
///
/// assert_eq!(decode("Khoor, Zruog!", CipherKey::new(3)), "Hello, World!");
/// ```
pub fn decode(text: &str, key: CipherKey) -> String {
    encode(text, key.inverse())
}

/// Caesar cipher bound to a default key.
///
/// [`CaesarCipher::new`] derives the key once with
/// [`derive_key`](crate::key::derive_key); the key is then reused for every
/// call that does not supply its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    key: CipherKey,
}

impl Default for CaesarCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl CaesarCipher {
    /// Creates a cipher holding the derived key.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesar_toolkit::CaesarCipher;
    ///
    /// let cipher = CaesarCipher::new();
    /// assert_eq!(cipher.key().value(), 13);
    /// ```
    pub fn new() -> Self {
        Self::with_key(CipherKey::derived())
    }

    /// Creates a cipher holding an explicit key.
    pub fn with_key(key: CipherKey) -> Self {
        CaesarCipher { key }
    }

    /// Returns the default key.
    pub fn key(&self) -> CipherKey {
        self.key
    }

    /// Encrypts `text` with `key`, or with the default key when `None`.
    pub fn encrypt(&self, text: &str, key: Option<CipherKey>) -> String {
        encode(text, key.unwrap_or(self.key))
    }

    /// Decrypts `text` with `key`, or with the default key when `None`.
    pub fn decrypt(&self, text: &str, key: Option<CipherKey>) -> String {
        decode(text, key.unwrap_or(self.key))
    }
}
