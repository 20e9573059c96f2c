//Trezor English reference vectors (entropy, phrase) plus a few generated
//for the 160 and 224 bit classes the reference set does not cover.

use btc_mnemonic::prelude::*;

const VECTORS: &[(&str, &str)] = &[
    (
        "00000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
    ),
    (
        "80808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
    ),
    (
        "ffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
    ),
    (
        "0000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon address",
    ),
    (
        "0102030405060708090a0b0c0d0e0f1011121314",
        "absurd avoid scissors anxiety gather lottery category door army half long cage bachelor another fatal",
    ),
    (
        "000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal will",
    ),
    (
        "808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter always",
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo when",
    ),
    (
        "00000000000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon admit",
    ),
    (
        "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c",
        "absurd avoid scissors anxiety gather lottery category door army half long cage bachelor another expect people blade school educate curtain shop",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth title",
    ),
    (
        "8080808080808080808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic bless",
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
    ),
    (
        "9e885d952ad362caeb4efe34a8e91bd2",
        "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
    ),
    (
        "c0ba5a8e914111210f2bd131f3d5e08d",
        "scheme spot photo card baby mountain device kick cradle pact join borrow",
    ),
    (
        "f585c11aec520db57dd353c69554b21a89b20fb0650966fa0a9d6f74fd989d8f",
        "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold",
    ),
];

#[test]
fn encode_reference_vectors() -> Result<(), MnemonicErr> {
    let list = Language::English.wordlist()?;
    for (entropy_hex, phrase) in VECTORS {
        let entropy = Entropy::from_hex(entropy_hex)?;
        assert_eq!(encode(entropy.as_bytes(), &list)?.join(" "), *phrase);
    }
    Ok(())
}

#[test]
fn decode_reference_vectors() -> Result<(), MnemonicErr> {
    let list = Language::English.wordlist()?;
    for (entropy_hex, phrase) in VECTORS {
        let words: Vec<&str> = phrase.split(' ').collect();
        assert_eq!(decode(&words, &list)?.to_hex(), *entropy_hex);
        assert!(validate(&words, &list));
    }
    Ok(())
}

#[test]
fn mnemonic_reference_vectors() -> Result<(), MnemonicErr> {
    let list = Language::English.wordlist()?;
    for (entropy_hex, phrase) in VECTORS {
        let mnemonic = Mnemonic::from_phrase(phrase, &list)?;
        assert_eq!(mnemonic.entropy().to_hex(), *entropy_hex);
        assert_eq!(mnemonic.entropy().phrase_length().map(|l| l.word_count()), Some(mnemonic.word_count()));
        assert_eq!(Mnemonic::from_entropy(Entropy::from_hex(entropy_hex)?, &list)?, mnemonic);
    }
    Ok(())
}

#[test]
fn unknown_word_is_reported() {
    let list = Language::English.wordlist().unwrap();
    let mut words: Vec<&str> = VECTORS[1].1.split(' ').collect();
    words[0] = "aaaaaaaaaa";
    assert_eq!(decode(&words, &list), Err(MnemonicErr::UnknownWord("aaaaaaaaaa".to_string())));
    assert!(!validate(&words, &list));
}

#[test]
fn every_length_class_encodes() {
    let list = Language::English.wordlist().unwrap();
    for bytes in 0..=40usize {
        let result = encode(&vec![0x5a; bytes], &list);
        match PhraseLength::from_entropy_bits(bytes * 8) {
            Some(length) => assert_eq!(result.unwrap().len(), length.word_count()),
            None => assert_eq!(result, Err(MnemonicErr::InvalidEntropyLength(bytes * 8))),
        }
    }
}

// Flips every bit of every word index (bit 0 = least significant) and returns
// the (word, bit) flips that still decode. Each of those must decode to
// different entropy; every other flip must be a checksum failure.
fn checksum_escapes(phrase: &str, list: &Wordlist) -> Vec<(usize, u32)> {
    let words: Vec<&str> = phrase.split(' ').collect();
    let original = decode(&words, list).unwrap();
    let mut escapes = Vec::new();
    for at in 0..words.len() {
        let index = list.index_of(words[at]).unwrap();
        for bit in 0..11u32 {
            let mut flipped = words.clone();
            flipped[at] = list.word_at(index ^ (1 << bit)).unwrap();
            match decode(&flipped, list) {
                Err(e) => assert_eq!(e, MnemonicErr::InvalidChecksum, "word {} bit {}", at, bit),
                Ok(other) => {
                    assert_ne!(other, original, "word {} bit {}", at, bit);
                    escapes.push((at, bit));
                }
            }
        }
    }
    escapes
}

#[test]
fn single_bit_flips_fail_the_checksum() {
    let list = Language::English.wordlist().unwrap();

    //24 words, 8 bit checksum: 3 of 264 flips land on a matching checksum
    assert_eq!(
        checksum_escapes(VECTORS[18].1, &list),
        vec![(7, 9), (10, 2), (12, 0)]
    );

    //12 words, 4 bit checksum: 6 of 132 flips land on a matching checksum
    assert_eq!(
        checksum_escapes(VECTORS[0].1, &list),
        vec![(0, 10), (1, 0), (1, 2), (2, 6), (6, 2), (8, 3)]
    );
}
