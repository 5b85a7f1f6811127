//! Classical Caesar shift cipher toolkit.
//!
//! Pure, stateless transforms over in-memory strings: a deterministic key
//! derivation, shift encoding/decoding over the 26-letter Latin alphabet,
//! exhaustive key search, and ASCII character classification. The crate
//! performs no console or file I/O; the `caesar` binary is the calling layer.
//!
//! # Architecture
//!
//! ```text
//! derive_key   (accumulate → converge, always 13)
//!     ↓ CipherKey
//! encode/decode (per-character shift, case preserved, mod 26)
//!     ↑ called 25 times
//! brute_force  (keys 1..=25, ascending, unscored)
//!
//! classify     (independent: digits / letters / even digits / uppercase)
//! ```
//!
//! # Examples
//!
//! Encode and decode with the derived key:
//!
//! ```
//! use caesar_toolkit::{decode, derive_key, encode, CipherKey};
//!
//! let key = CipherKey::new(derive_key());
//! let secret = encode("Attack at dawn", key);
//! assert_eq!(secret, "Nggnpx ng qnja");
//! assert_eq!(decode(&secret, key), "Attack at dawn");
//! ```
//!
//! Search every key and inspect the candidates:
//!
//! ```
//! use caesar_toolkit::brute_force;
//!
//! let result = brute_force("Khoor");
//! for candidate in &result {
//!     println!("{}", candidate);
//! }
//! assert_eq!(result.get(3).unwrap().text, "Hello");
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod classifier;
pub mod key;
pub mod key_search;
pub mod samples;
pub mod shift_cipher;

pub use classifier::{
    classify, classify_char, classify_sample, CharClass, Classification, MIN_SAMPLE_LEN,
};
pub use error::CipherError;
pub use key::{derive_key, CipherKey};
pub use key_search::{brute_force, Candidate, KeySearchResult};
pub use shift_cipher::{decode, encode, CaesarCipher};
