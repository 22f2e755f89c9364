use super::{Alphabet, ALPHABET};
use std::ffi::CString;
use thiserror::Error;
use tracing::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoding.
    #[error("Output buffer too small ({required} bytes required)")]
    OutputTooSmall { required: usize },
}

impl Error {
    pub fn required_capacity(&self) -> usize {
        match *self {
            Error::OutputTooSmall { required } => required,
        }
    }
}

/// Base58 digit values of `input`, most significant first, with the count of leading zero bytes split off.
fn to_digits(input: &[u8]) -> (usize, Vec<u8>) {
    let zeros = input.iter().take_while(|&&value| value == 0).count();
    // log(256) / log(58) is about 1.366; the buffer grows if the estimate ever falls short.
    let size = (input.len() - zeros) * 138 / 100 + 1;
    let mut buffer = vec![0u8; size];
    let mut high = buffer.len();
    for &value in &input[zeros..] {
        let mut carry = u32::from(value);
        let mut index = buffer.len();
        while carry > 0 || index > high {
            if index == 0 {
                buffer.insert(0, 0);
                high += 1;
                index += 1;
            }
            index -= 1;
            carry += u32::from(buffer[index]) << 8;
            buffer[index] = (carry % 58) as u8;
            carry /= 58;
        }
        high = index;
    }
    let start = buffer.iter().position(|&digit| digit != 0).unwrap_or(buffer.len());
    buffer.drain(..start);
    (zeros, buffer)
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    fn write(&self, zeros: usize, digits: &[u8], output: &mut [u8]) -> usize {
        output[..zeros].fill(self.alphabet.zero());
        for (symbol, &digit) in output[zeros..].iter_mut().zip(digits) {
            *symbol = self.alphabet.encode(digit);
        }
        zeros + digits.len()
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let (zeros, digits) = to_digits(input.as_ref());
        let required = zeros + digits.len();
        if output.len() < required {
            debug!(required, capacity = output.len(), "base58 encode output buffer too small");
            return Err(Error::OutputTooSmall { required });
        }
        Ok(self.write(zeros, &digits, output))
    }

    /// Like `encode_into` but NUL-terminates the output. The returned length and any
    /// reported requirement include the terminator.
    pub fn encode_cstr_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let (zeros, digits) = to_digits(input.as_ref());
        let required = zeros + digits.len() + 1;
        if output.len() < required {
            debug!(required, capacity = output.len(), "base58 encode output buffer too small");
            return Err(Error::OutputTooSmall { required });
        }
        let len = self.write(zeros, &digits, output);
        output[len] = 0;
        Ok(len + 1)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let (zeros, digits) = to_digits(input.as_ref());
        let mut output = String::with_capacity(zeros + digits.len());
        output.extend(std::iter::repeat(char::from(self.alphabet.zero())).take(zeros));
        output.extend(digits.into_iter().map(|digit| char::from(self.alphabet.encode(digit))));
        output
    }

    pub fn encode_cstring(&self, input: impl AsRef<[u8]>) -> CString {
        let (zeros, digits) = to_digits(input.as_ref());
        let mut output = vec![0u8; zeros + digits.len()];
        self.write(zeros, &digits, &mut output);
        // Alphabet symbols are printable ASCII, never NUL.
        CString::new(output).unwrap_or_default()
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode_cstr_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_cstr_into(input, output)
}

pub fn encode_cstring(input: impl AsRef<[u8]>) -> CString {
    Encoder::default().encode_cstring(input)
}
