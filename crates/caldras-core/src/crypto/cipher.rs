//! Note body encryption with AES-256-GCM.
//!
//! Blob layout: `[version: 1 byte][nonce: 12 bytes][ciphertext || tag]`.
//! The blob is opaque to the vault; only this module reads or writes it.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use super::key::derive_key;
use crate::error::{CaldrasError, Result};

const BLOB_VERSION: u8 = 1;
const NONCE_LENGTH: usize = 12;
const TAG_LENGTH: usize = 16;
const HEADER_LENGTH: usize = 1 + NONCE_LENGTH;

/// Encrypt a note body under a password.
///
/// Each call draws a fresh nonce, so repeated encryptions of the same text
/// with the same password yield different blobs.
///
/// # Errors
///
/// Returns `CaldrasError::Crypto` if the OS random source or the cipher fails.
///
/// # Examples
///
/// ```
/// use caldras_core::crypto::{decrypt, encrypt};
///
/// let blob = encrypt("meet at dawn", "hunter2").unwrap();
/// assert_eq!(decrypt(&blob, "hunter2").unwrap(), "meet at dawn");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<Vec<u8>> {
    let key = derive_key(password)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let mut nonce = [0u8; NONCE_LENGTH];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| CaldrasError::Crypto(format!("Failed to draw nonce: {}", e)))?;

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|e| CaldrasError::Crypto(format!("Encryption failed: {}", e)))?;

    let mut blob = Vec::with_capacity(HEADER_LENGTH + sealed.len());
    blob.push(BLOB_VERSION);
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&sealed);
    Ok(blob)
}

/// Decrypt a note body produced by [`encrypt`].
///
/// # Errors
///
/// Returns `CaldrasError::Authentication` if the password is wrong, the blob
/// is truncated, tampered with, of an unknown version, or does not decode to
/// UTF-8. Nothing is returned on failure.
pub fn decrypt(blob: &[u8], password: &str) -> Result<String> {
    if blob.len() < HEADER_LENGTH + TAG_LENGTH || blob[0] != BLOB_VERSION {
        return Err(CaldrasError::Authentication);
    }
    let (nonce, sealed) = blob[1..].split_at(NONCE_LENGTH);

    let key = derive_key(password)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| CaldrasError::Authentication)?;

    String::from_utf8(plaintext).map_err(|_| CaldrasError::Authentication)
}
