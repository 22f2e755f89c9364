use super::{words::Words, Alphabet, ALPHABET};
use crate::base_common::alphabet::InvalidDigit;
use std::ffi::CStr;
use thiserror::Error;
use tracing::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Invalid digit {character:#04x} at index {index}")]
    InvalidDigit { character: u8, index: usize },
    #[error("Output buffer too small ({required} bytes required)")]
    OutputTooSmall { required: usize },
    #[error("Decoded value does not fit in {capacity} bytes")]
    NumericOverflow { capacity: usize },
}

impl Error {
    /// Capacity that would let the same input decode, when the failure is a capacity shortfall.
    pub fn required_capacity(&self) -> Option<usize> {
        match *self {
            Error::OutputTooSmall { required } => Some(required),
            _ => None,
        }
    }
}

impl From<InvalidDigit> for Error {
    fn from(error: InvalidDigit) -> Self {
        Error::InvalidDigit {
            character: error.character,
            index: error.index,
        }
    }
}

/// Upper bound on the bytes needed for `digits` base58 digits: log(58) / log(256) < 0.733.
fn byte_estimate(digits: usize) -> usize {
    digits * 733 / 1000 + 1
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Splits off the run of zero symbols and folds the remaining digits into `words`.
    fn convert(&self, input: &[u8], mut words: Words) -> Result<(usize, Vec<u8>), Error> {
        let zero = self.alphabet.zero();
        let zeros = input.iter().take_while(|&&character| character == zero).count();
        for (index, &character) in input.iter().enumerate().skip(zeros) {
            let digit = self.alphabet.decode(character, index).map_err(|error| {
                debug!(character, index, "invalid base58 digit");
                Error::from(error)
            })?;
            words.mul_add(58, u32::from(digit)).map_err(|overflow| {
                debug!(capacity = overflow.capacity, "base58 value overflows fixed-width output");
                Error::NumericOverflow {
                    capacity: overflow.capacity,
                }
            })?;
        }
        Ok((zeros, words.significant_bytes()))
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let (zeros, magnitude) = self.convert(input, Words::unbounded(byte_estimate(input.len())))?;

        let required = zeros + magnitude.len();
        if output.len() < required {
            debug!(required, capacity = output.len(), "base58 decode output buffer too small");
            return Err(Error::OutputTooSmall { required });
        }
        output[..zeros].fill(0);
        output[zeros..required].copy_from_slice(&magnitude);
        Ok(required)
    }

    /// Decodes a NUL-terminated string; the terminator marks the end of the input.
    pub fn decode_cstr_into(&self, input: &CStr, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decode_into(input.to_bytes(), output)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; input.len()];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    /// Decodes into exactly `N` bytes, right-aligned and padded with zeros on the left.
    pub fn decode_array<const N: usize>(&self, input: impl AsRef<[u8]>) -> Result<[u8; N], Error> {
        let input = input.as_ref();
        let (zeros, magnitude) = self.convert(input, Words::bounded(N))?;

        let required = zeros + magnitude.len();
        if required > N {
            debug!(required, capacity = N, "base58 decode output array too small");
            return Err(Error::OutputTooSmall { required });
        }
        let mut output = [0u8; N];
        output[N - magnitude.len()..].copy_from_slice(&magnitude);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode_cstr_into(input: &CStr, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_cstr_into(input, output)
}

pub fn decode_array<const N: usize>(input: impl AsRef<[u8]>) -> Result<[u8; N], Error> {
    Decoder::default().decode_array(input)
}
