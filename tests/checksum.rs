use base58_codec::{decode, decode_array, encode, hash};

// Checksummed layers sit on top of the codec with the hash passed in explicitly.
fn checksum(hook: &impl hash::Sha256Hook, payload: &[u8]) -> [u8; 4] {
    let digest = hash::double_sha256(hook, payload).unwrap();
    [digest[0], digest[1], digest[2], digest[3]]
}

#[test]
fn bitcoin_address_checksum() {
    let address = decode("1BitcoinEaterAddressDontSendf59kuE").unwrap();
    assert_eq!(address.len(), 25);
    let (payload, check) = address.split_at(21);
    assert_eq!(payload, hex_literal::hex!("00759d6677091e973b9e9d99f19c68fbf43e3f05f9"));
    assert_eq!(checksum(&hash::Sha2, payload), check);
}

#[test]
fn corrupted_address_fails_checksum() {
    let address = decode("1BitcoinEaterAddressDontSendf59kuF").unwrap();
    let (payload, check) = address.split_at(21);
    assert_ne!(checksum(&hash::Sha2, payload), check);
}

#[test]
fn fixed_width_address() {
    let address: [u8; 25] = decode_array("1BitcoinEaterAddressDontSendf59kuE").unwrap();
    assert_eq!(checksum(&hash::Sha2, &address[..21]), address[21..]);
    assert_eq!(encode(address), "1BitcoinEaterAddressDontSendf59kuE");
}
