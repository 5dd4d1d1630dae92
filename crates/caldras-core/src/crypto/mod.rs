//! Cryptographic operations for Caldras.
//!
//! - **key**: Argon2id derivation of a note key from a password
//! - **cipher**: AES-256-GCM encryption of note bodies
//!
//! ## Security Model
//!
//! - One key per password: derivation uses a fixed application salt, so the
//!   same password always yields the same key across notes and sessions
//! - Every encryption draws a fresh random nonce; identical plaintexts do not
//!   produce identical blobs
//! - Decryption is authenticated: a wrong password or a damaged blob is
//!   rejected, never returned as garbage plaintext
//!
//! ## Threat Model
//!
//! We do NOT defend against anyone who can read the vault file: protected
//! records keep their password next to the ciphertext (see `vault::Note`).

pub mod cipher;
pub mod key;

pub use cipher::{decrypt, encrypt};
pub use key::{derive_key, DerivedKey};
