//! Symmetric encryption with AES-256-GCM.
//!
//! The envelope is self-contained: a fresh 12-byte nonce is drawn per
//! encryption and prepended to the ciphertext, so decryption needs only the
//! key and the envelope.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{ExtensionError, ExtensionResult};

/// AES-256 key length in bytes.
pub const AES256_KEY_SIZE: usize = 32;

/// AES-GCM nonce length in bytes.
const NONCE_SIZE: usize = 12;

/// Encrypts `plaintext` under `key`, returning `nonce || ciphertext`.
///
/// The ciphertext carries the GCM authentication tag, so tampering is
/// detected at decryption time.
pub fn encrypt(plaintext: &[u8], key: &[u8; AES256_KEY_SIZE]) -> ExtensionResult<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| ExtensionError::crypto(format!("invalid key: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| ExtensionError::crypto(format!("encryption failed: {e}")))?;

    let mut envelope = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Decrypts an envelope produced by [`encrypt`] under the same key.
///
/// Fails with an invalid-argument error when the envelope is shorter than a
/// nonce, and with a crypto error when authentication fails (wrong key or
/// tampered data).
pub fn decrypt(envelope: &[u8], key: &[u8; AES256_KEY_SIZE]) -> ExtensionResult<Vec<u8>> {
    if envelope.len() < NONCE_SIZE {
        return Err(ExtensionError::invalid_argument(
            "ciphertext shorter than the nonce",
        ));
    }
    let (nonce_bytes, ciphertext) = envelope.split_at(NONCE_SIZE);

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| ExtensionError::crypto(format!("invalid key: {e}")))?;

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|e| ExtensionError::crypto(format!("decryption failed: {e}")))
}
