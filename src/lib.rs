//! Base58 codec with the Bitcoin alphabet.
//!
//! Both directions are stateless: every call owns its working buffer and only the alphabet tables are shared.

pub mod base58;
pub mod base_common;
pub mod hash;

pub use base58::{
    decode, decode_array, decode_cstr_into, decode_into, encode, encode_cstr_into, encode_cstring, encode_into, Decoder, Encoder,
    ALPHABET,
};
pub use base_common::Alphabet;
