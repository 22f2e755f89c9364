pub mod decode;
pub mod encode;
mod words;

pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_array, decode_cstr_into, decode_into, Decoder};
pub use encode::{encode, encode_cstr_into, encode_cstring, encode_into, Encoder};

/// Bitcoin ordering: digits, then letters, without `0`, `O`, `I` and `l`.
pub const ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
