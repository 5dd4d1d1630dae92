//! Key derivation using Argon2id.

use argon2::Argon2;
use zeroize::ZeroizeOnDrop;

use crate::error::{CaldrasError, Result};

/// Argon2id parameters.
///
/// - Memory: 19 MB (19 * 1024 KB)
/// - Iterations: 2
/// - Parallelism: 1
const ARGON2_MEMORY_KB: u32 = 19 * 1024;
const ARGON2_ITERATIONS: u32 = 2;
const ARGON2_PARALLELISM: u32 = 1;

/// Application-wide salt. There is no per-note salt: a password maps to
/// exactly one key.
const KEY_SALT: &[u8] = b"caldras/note-key/v1";

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// A note key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// Avoid storing or logging this value.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a note key from a password.
///
/// Deterministic: the same password always produces the same key. Any string
/// is accepted, including the empty string.
///
/// # Errors
///
/// Returns `CaldrasError::Crypto` only if the Argon2 parameters are rejected,
/// which cannot happen with the compiled-in constants.
///
/// # Examples
///
/// ```
/// use caldras_core::crypto::derive_key;
///
/// let a = derive_key("hunter2").unwrap();
/// let b = derive_key("hunter2").unwrap();
/// assert_eq!(a.as_bytes(), b.as_bytes());
/// ```
pub fn derive_key(password: &str) -> Result<DerivedKey> {
    let params = argon2::Params::new(
        ARGON2_MEMORY_KB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        Some(KEY_LENGTH),
    )
    .map_err(|e| CaldrasError::Crypto(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let mut key = [0u8; KEY_LENGTH];
    argon2
        .hash_password_into(password.as_bytes(), KEY_SALT, &mut key)
        .map_err(|e| CaldrasError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_deterministic() {
        let key1 = derive_key("test-password").unwrap();
        let key2 = derive_key("test-password").unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let key1 = derive_key("password-one").unwrap();
        let key2 = derive_key("password-two").unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_accepted() {
        let key1 = derive_key("").unwrap();
        let key2 = derive_key("").unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
        assert_ne!(key1.as_bytes(), &[0u8; KEY_LENGTH]);
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-password").unwrap();

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }

    #[test]
    fn test_derived_key_zeroizes_on_drop() {
        fn wipes_on_drop<T: ZeroizeOnDrop>(_: &T) {}

        let key = derive_key("test-password").unwrap();
        wipes_on_drop(&key);
    }
}
