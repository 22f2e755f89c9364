//! SHA-256 capability for checksum layers built on top of the codec.
//!
//! The codec itself never hashes. Components that need a digest take a [`Sha256Hook`] as an explicit
//! argument: [`Sha2`] for the `sha2` implementation, or any closure with the C-style
//! `(digest, input) -> bool` shape.

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

pub const DIGEST_LEN: usize = 32;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Digest buffer too small ({actual} bytes, {required} required)")]
    DigestBufferTooSmall { required: usize, actual: usize },
    #[error("Hash implementation failed")]
    Failed,
}

pub trait Sha256Hook {
    /// Writes the SHA-256 of `input` into the first [`DIGEST_LEN`] bytes of `digest`.
    fn sha256(&self, input: &[u8], digest: &mut [u8]) -> Result<(), Error>;
}

fn check_len(digest: &[u8]) -> Result<(), Error> {
    if digest.len() < DIGEST_LEN {
        return Err(Error::DigestBufferTooSmall {
            required: DIGEST_LEN,
            actual: digest.len(),
        });
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Sha2;

impl Sha256Hook for Sha2 {
    fn sha256(&self, input: &[u8], digest: &mut [u8]) -> Result<(), Error> {
        check_len(digest)?;
        digest[..DIGEST_LEN].copy_from_slice(&Sha256::digest(input));
        Ok(())
    }
}

impl<F> Sha256Hook for F
where
    F: Fn(&mut [u8], &[u8]) -> bool,
{
    fn sha256(&self, input: &[u8], digest: &mut [u8]) -> Result<(), Error> {
        check_len(digest)?;
        if self(digest, input) {
            Ok(())
        } else {
            debug!(len = input.len(), "sha256 hook reported failure");
            Err(Error::Failed)
        }
    }
}

pub fn double_sha256(hook: &impl Sha256Hook, input: impl AsRef<[u8]>) -> Result<[u8; DIGEST_LEN], Error> {
    let mut first = [0u8; DIGEST_LEN];
    hook.sha256(input.as_ref(), &mut first)?;
    let mut second = [0u8; DIGEST_LEN];
    hook.sha256(&first, &mut second)?;
    Ok(second)
}
