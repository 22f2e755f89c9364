use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Duplicate character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter { character: char, first: usize, second: usize },
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
    #[error("Non-printable character {character:#04x} at index {index}")]
    InvalidCharacter { character: u8, index: usize },
}

/// A byte that is not a digit of the alphabet. Bytes with the high bit set land here too.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("Invalid digit {character:#04x} at index {index}")]
pub struct InvalidDigit {
    pub character: u8,
    pub index: usize,
}

/// Ordered symbol table plus its inverse over the ASCII range.
#[derive(Clone, Debug)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if !character.is_ascii_graphic() {
                return Err(Error::InvalidCharacter { character, index });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Symbol for a digit value. `value` must be below `N`.
    pub const fn encode(&self, value: u8) -> u8 {
        self.encode[value as usize]
    }

    pub fn decode(&self, character: u8, index: usize) -> Result<u8, InvalidDigit> {
        self.decode
            .get(character as usize)
            .copied()
            .flatten()
            .ok_or(InvalidDigit { character, index })
    }

    /// The symbol standing for a leading zero byte.
    pub const fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}
