use base58_codec::{base58, decode, decode_array, decode_into, encode, encode_cstr_into, encode_into, ALPHABET};
use proptest::prelude::*;

fn base58_string(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0..58u8, 0..max_len)
        .prop_map(|digits| digits.into_iter().map(|digit| char::from(ALPHABET.encode(digit))).collect())
}

proptest! {
    #[test]
    fn decode_inverts_encode(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(decode(encode(&bytes)), Ok(bytes));
    }

    #[test]
    fn encode_inverts_decode(input in base58_string(96)) {
        let bytes = decode(&input).unwrap();
        prop_assert_eq!(encode(bytes), input);
    }

    #[test]
    fn leading_zero_bytes_become_zero_symbols(k in 0..16usize, bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut prefixed = vec![0u8; k];
        prefixed.extend_from_slice(&bytes);
        prop_assert_eq!(encode(&prefixed), "1".repeat(k) + &encode(&bytes));
    }

    #[test]
    fn leading_zero_symbols_become_zero_bytes(k in 0..16usize, input in base58_string(64)) {
        let mut expected = vec![0u8; k];
        expected.extend_from_slice(&decode(&input).unwrap());
        prop_assert_eq!(decode("1".repeat(k) + &input), Ok(expected));
    }

    #[test]
    fn encode_capacity_probe(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut empty = [0u8; 0];
        let required = match encode_cstr_into(&bytes, &mut empty) {
            Err(base58::encode::Error::OutputTooSmall { required }) => required,
            other => return Err(TestCaseError::fail(format!("unexpected {:?}", other))),
        };
        let encoded = encode(&bytes);
        let mut output = vec![0u8; required];
        prop_assert_eq!(encode_cstr_into(&bytes, &mut output), Ok(required));
        prop_assert_eq!(&output[..required - 1], encoded.as_bytes());
        prop_assert_eq!(output[required - 1], 0);

        let mut output = vec![0u8; required - 1];
        prop_assert_eq!(encode_into(&bytes, &mut output), Ok(encoded.len()));
        if !bytes.is_empty() {
            let mut output = vec![0u8; required - 2];
            prop_assert_eq!(
                encode_into(&bytes, &mut output),
                Err(base58::encode::Error::OutputTooSmall { required: required - 1 })
            );
        }
    }

    #[test]
    fn decode_capacity_probe(input in base58_string(64).prop_filter("non-empty", |input| !input.is_empty())) {
        let mut empty = [0u8; 0];
        let required = decode_into(&input, &mut empty).unwrap_err().required_capacity().unwrap();
        let mut output = vec![0u8; required];
        prop_assert_eq!(decode_into(&input, &mut output), Ok(required));
        prop_assert_eq!(output, decode(&input).unwrap());
    }

    #[test]
    fn fixed_width_matches_slice_decode(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let encoded = encode(&bytes);
        let mut expected = [0u8; 32];
        expected[32 - bytes.len()..].copy_from_slice(&bytes);
        prop_assert_eq!(decode_array::<32>(&encoded), Ok(expected));
    }

    #[test]
    fn rejects_characters_outside_alphabet(
        prefix in base58_string(16),
        character in any::<u8>().prop_filter("not a digit", |&character| ALPHABET.decode(character, 0).is_err()),
        suffix in base58_string(16),
    ) {
        let mut input = prefix.into_bytes();
        let index = input.len();
        input.push(character);
        input.extend_from_slice(suffix.as_bytes());
        prop_assert_eq!(decode(&input), Err(base58::decode::Error::InvalidDigit { character, index }));
    }
}
