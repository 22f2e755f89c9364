//! Arbitrary-precision unsigned magnitude held as 32-bit words, most significant word first.

/// Raised when a bounded magnitude cannot hold the value in `capacity` bytes any more.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Overflow {
    pub capacity: usize,
}

pub struct Words {
    words: Vec<u32>,
    /// Byte width the magnitude may occupy, `None` if it grows freely.
    limit: Option<usize>,
}

impl Words {
    /// A zero magnitude that grows as digits are folded in. `bytes` is only a capacity hint.
    pub fn unbounded(bytes: usize) -> Self {
        Self {
            words: vec![0; (bytes + 3) / 4],
            limit: None,
        }
    }

    /// A zero magnitude that must fit in `bytes` bytes.
    pub fn bounded(bytes: usize) -> Self {
        Self {
            words: vec![0; (bytes + 3) / 4],
            limit: Some(bytes),
        }
    }

    /// `self = self * base + digit`.
    pub fn mul_add(&mut self, base: u32, digit: u32) -> Result<(), Overflow> {
        let mut carry = u64::from(digit);
        for word in self.words.iter_mut().rev() {
            let t = u64::from(*word) * u64::from(base) + carry;
            *word = t as u32;
            carry = t >> 32;
        }
        match self.limit {
            None => {
                if carry > 0 {
                    self.words.insert(0, carry as u32);
                }
                Ok(())
            }
            Some(bytes) => {
                if carry > 0 {
                    return Err(Overflow { capacity: bytes });
                }
                let partial = bytes % 4;
                match self.words.first() {
                    Some(&top) if partial != 0 && top >> (8 * partial) != 0 => Err(Overflow { capacity: bytes }),
                    _ => Ok(()),
                }
            }
        }
    }

    /// Big-endian bytes with every leading zero byte stripped.
    pub fn significant_bytes(&self) -> Vec<u8> {
        let bytes: Vec<u8> = self.words.iter().flat_map(|word| word.to_be_bytes()).collect();
        let start = bytes.iter().position(|&byte| byte != 0).unwrap_or(bytes.len());
        bytes[start..].to_vec()
    }
}
