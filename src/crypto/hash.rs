//! Digest helpers delegating to the RustCrypto hash implementations.

use sha2::{Digest, Sha256, Sha512};

/// Computes the SHA-256 digest of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes the SHA-512 digest of the input data.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes the MD5 digest of the input data.
///
/// Kept for interoperability with legacy formats; not suitable for anything
/// security-sensitive.
pub fn md5(data: &[u8]) -> [u8; 16] {
    ::md5::compute(data).into()
}

/// Digest methods available on byte slices.
pub trait HashExtensions {
    fn sha256(&self) -> [u8; 32];

    fn sha512(&self) -> [u8; 64];

    fn md5(&self) -> [u8; 16];
}

impl<T: AsRef<[u8]> + ?Sized> HashExtensions for T {
    fn sha256(&self) -> [u8; 32] {
        sha256(self.as_ref())
    }

    fn sha512(&self) -> [u8; 64] {
        sha512(self.as_ref())
    }

    fn md5(&self) -> [u8; 16] {
        md5(self.as_ref())
    }
}
