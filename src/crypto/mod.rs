//! Hashing and symmetric encryption helpers.

mod cipher;
mod hash;

pub use cipher::{decrypt, encrypt, AES256_KEY_SIZE};
pub use hash::{md5, sha256, sha512, HashExtensions};
