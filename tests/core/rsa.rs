// tests/core/rsa.rs
use chat_cipher::config::RsaConfig;
use chat_cipher::core::codec::{chunks_from_hex, chunks_to_hex};
use chat_cipher::core::rsa::*;
use chat_cipher::enums::ChunkEncoding;
use chat_cipher::error::CoreError;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::common;

#[test]
fn test_from_primes_textbook_pair() {
    // p = 104729, q = 104723: both prime, phi coprime with 65537
    let pair = KeyPair::from_primes(&BigUint::from(104_729u32), &BigUint::from(104_723u32)).unwrap();
    assert_eq!(pair.public.n, BigUint::from(104_729u64 * 104_723));
    assert_eq!(pair.public.e, BigUint::from(65_537u32));
    assert_eq!(pair.private.n, pair.public.n);

    let phi = BigUint::from(104_728u64 * 104_722);
    assert_eq!((&pair.public.e * &pair.private.d) % phi, BigUint::from(1u32));
}

#[test]
fn test_from_primes_rejects_non_coprime_exponent() {
    // 917519 - 1 = 65537 * 14, so e divides phi
    let err = KeyPair::from_primes(&BigUint::from(917_519u32), &BigUint::from(104_729u32))
        .unwrap_err();
    assert!(matches!(err, CoreError::NotCoprime));
}

#[test]
fn test_fixed_key_pair_properties() {
    let pair = common::key_pair_2048();
    assert_eq!(pair.public.n.bits(), 2048);
    assert_eq!(pair.public.modulus_len(), 256);
    assert_eq!(pair.public.e, BigUint::from(65_537u32));
}

#[test]
fn test_short_message_roundtrip() {
    common::setup();
    let pair = common::key_pair_2048();
    let chunks = encrypt("Hello, RSA!", &pair.public).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), "Hello, RSA!");
}

#[test]
fn test_multi_chunk_roundtrip() {
    let pair = common::key_pair_2048();
    let message = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    assert_eq!(message.len(), 900);

    let chunks = encrypt(&message, &pair.public).unwrap();
    assert_eq!(chunks.len(), 4); // 245 + 245 + 245 + 165
    assert!(chunks.iter().all(|c| c.len() <= 256));
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), message);
}

#[test]
fn test_chunks_never_split_a_character() {
    let pair = common::key_pair_2048();
    // 244 ASCII bytes then a 4-byte emoji straddling the 245-byte boundary
    let message = format!("{}🔐tail", "a".repeat(244));

    let chunks = encrypt(&message, &pair.public).unwrap();
    assert_eq!(chunks.len(), 2);

    let first = decrypt(&chunks[..1], &pair.private).unwrap();
    assert_eq!(first, "a".repeat(244));
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), message);
}

#[test]
fn test_multibyte_text_roundtrip() {
    let pair = common::key_pair_2048();
    let message = "Grüße aus Köln, 東京からこんにちは ✓ ".repeat(12);
    let chunks = encrypt(&message, &pair.public).unwrap();
    assert!(chunks.len() > 1);
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), message);
}

#[test]
fn test_fixed_width_encoding_pads_to_modulus() {
    let pair = common::key_pair_2048();
    let message = "x".repeat(600);

    let chunks = encrypt_with_encoding(&message, &pair.public, ChunkEncoding::FixedWidth).unwrap();
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.len() == 256));
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), message);
}

#[test]
fn test_minimal_encoding_strips_leading_zeros() {
    let pair = common::key_pair_2048();
    // m = 1 encrypts to 1 under any exponent
    let chunks = encrypt("\u{1}", &pair.public).unwrap();
    assert_eq!(chunks, vec![vec![1u8]]);

    let fixed = encrypt_with_encoding("\u{1}", &pair.public, ChunkEncoding::FixedWidth).unwrap();
    assert_eq!(fixed[0].len(), 256);
    assert_eq!(fixed[0][255], 1);
    assert_eq!(decrypt(&fixed, &pair.private).unwrap(), "\u{1}");
}

#[test]
fn test_empty_plaintext_is_rejected() {
    let pair = common::key_pair_512();
    assert!(matches!(
        encrypt("", &pair.public),
        Err(CoreError::EmptyPlaintext)
    ));
    assert!(matches!(
        encrypt_bytes(&[], &pair.public, ChunkEncoding::Minimal),
        Err(CoreError::EmptyPlaintext)
    ));
}

#[test]
fn test_message_over_limit_is_rejected() {
    let pair = common::key_pair_2048();
    let message = "m".repeat(245 * 1000 + 1);
    assert!(matches!(
        encrypt(&message, &pair.public),
        Err(CoreError::MessageTooLong {
            len: 245_001,
            max: 245_000
        })
    ));
}

#[test]
fn test_multibyte_message_at_byte_limit_is_accepted() {
    let pair = common::key_pair_2048();
    // 245,000 bytes of 4-byte characters: 244-byte chunks, more than 1000 of them
    let message = "🔐".repeat(61_250);
    assert_eq!(message.len(), 245_000);

    let chunks = encrypt(&message, &pair.public).unwrap();
    assert!(chunks.len() > 1000);
    assert_eq!(decrypt(&chunks[..1], &pair.private).unwrap(), "🔐".repeat(61));
    let tail = decrypt(&chunks[chunks.len() - 1..], &pair.private).unwrap();
    assert_eq!(tail.len() % 4, 0);

    let over = "🔐".repeat(61_251);
    assert!(matches!(
        encrypt(&over, &pair.public),
        Err(CoreError::MessageTooLong {
            len: 245_004,
            max: 245_000
        })
    ));
}

#[test]
fn test_chunk_wider_than_modulus_is_rejected() {
    // 512-bit modulus holds at most 63 arbitrary bytes
    let pair = common::key_pair_512();
    let message = "z".repeat(100);
    assert!(matches!(
        encrypt(&message, &pair.public),
        Err(CoreError::ChunkExceedsModulus { index: 0 })
    ));

    let short = "z".repeat(63);
    let chunks = encrypt(&short, &pair.public).unwrap();
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), short);
}

#[test]
fn test_empty_chunk_is_rejected() {
    let pair = common::key_pair_512();
    let mut chunks = encrypt("ok", &pair.public).unwrap();
    chunks.push(Vec::new());
    assert!(matches!(
        decrypt(&chunks, &pair.private),
        Err(CoreError::EmptyChunk { index: 1 })
    ));
}

#[test]
fn test_binary_roundtrip_drops_leading_zeros() {
    let pair = common::key_pair_2048();
    let payload = [0u8, 0, 7, 8, 9];
    let chunks = encrypt_bytes(&payload, &pair.public, ChunkEncoding::Minimal).unwrap();
    assert_eq!(decrypt_bytes(&chunks, &pair.private).unwrap(), vec![7, 8, 9]);
}

#[test]
fn test_hex_transport_roundtrip() {
    let pair = common::key_pair_2048();
    let chunks = encrypt("over the wire", &pair.public).unwrap();
    let wire = chunks_to_hex(&chunks);
    let received = chunks_from_hex(&wire).unwrap();
    assert_eq!(decrypt(&received, &pair.private).unwrap(), "over the wire");
}

#[test]
fn test_wrong_private_key_does_not_recover_plaintext() {
    let alice = common::key_pair_2048();
    let bob = common::key_pair_512();
    let chunks = encrypt("for alice only", &alice.public).unwrap();
    match decrypt(&chunks, &bob.private) {
        Ok(text) => assert_ne!(text, "for alice only"),
        Err(err) => assert!(matches!(err, CoreError::InvalidUtf8(_))),
    }
}

#[test]
fn test_key_text_form_roundtrip() {
    let pair = common::key_pair_512();
    let public_text = pair.public.to_string();
    let private_text = pair.private.to_string();

    assert!(public_text.ends_with(":10001"));
    assert_eq!(public_text.parse::<PublicKey>().unwrap(), pair.public);
    assert_eq!(private_text.parse::<PrivateKey>().unwrap(), pair.private);
}

#[test]
fn test_key_text_form_rejects_garbage() {
    for bad in ["", "abc", "abc:", ":abc", "xyz:10001"] {
        assert!(
            matches!(bad.parse::<PublicKey>(), Err(CoreError::InvalidKeyFormat(_))),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn test_degenerate_modulus_is_rejected() {
    for text in ["0:1", "1:1", "0:10001"] {
        assert!(matches!(
            text.parse::<PrivateKey>(),
            Err(CoreError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            text.parse::<PublicKey>(),
            Err(CoreError::InvalidKeyFormat(_))
        ));
    }

    // keys built directly bypass parsing
    let private = PrivateKey::new(BigUint::from(0u32), BigUint::from(1u32));
    assert!(matches!(
        decrypt(&[vec![1u8]], &private),
        Err(CoreError::InvalidKeyFormat(_))
    ));
    let public = PublicKey::new(BigUint::from(0u32), BigUint::from(65_537u32));
    assert!(matches!(
        encrypt("hi", &public),
        Err(CoreError::InvalidKeyFormat(_))
    ));
}

#[test]
fn test_from_primes_rejects_values_below_two() {
    for (p, q) in [(0u32, 7u32), (7, 1)] {
        assert!(matches!(
            KeyPair::from_primes(&BigUint::from(p), &BigUint::from(q)),
            Err(CoreError::InvalidKeyFormat(_))
        ));
    }
}

#[test]
fn test_keys_serialize_as_strings() {
    let pair = common::key_pair_512();
    let json = serde_json::to_string(&pair.public).unwrap();
    assert_eq!(json, format!("\"{}\"", pair.public));

    let back: PublicKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pair.public);

    let private: PrivateKey =
        serde_json::from_str(&serde_json::to_string(&pair.private).unwrap()).unwrap();
    assert_eq!(private, pair.private);
}

#[test]
fn test_private_key_debug_is_redacted() {
    let pair = common::key_pair_512();
    let debug = format!("{:?}", pair.private);
    assert!(debug.contains("redacted"));
    assert!(!debug.contains(&format!("{:x}", pair.private.d)));
}

#[test]
fn test_generate_key_pair_with_seeded_rng() {
    let mut rng = StdRng::seed_from_u64(2024);
    let pair = generate_key_pair_with(512, 24, &mut rng).unwrap();
    // product of two 256-bit primes
    assert!((511..=512).contains(&pair.public.n.bits()));

    let chunks = encrypt("seeded", &pair.public).unwrap();
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), "seeded");
}

#[test]
fn test_generated_pair_satisfies_rsa_invariants() {
    let mut rng = StdRng::seed_from_u64(77);
    let p = generate_large_prime_with(256, 24, &mut rng).unwrap();
    let mut q = generate_large_prime_with(256, 24, &mut rng).unwrap();
    while q == p {
        q = generate_large_prime_with(256, 24, &mut rng).unwrap();
    }
    let pair = KeyPair::from_primes(&p, &q).unwrap();
    let (n, e, d) = (&pair.public.n, &pair.public.e, &pair.private.d);

    assert_eq!(*n, &p * &q);
    let phi = (&p - 1u32) * (&q - 1u32);
    assert_eq!((e * d) % &phi, BigUint::from(1u32));

    for _ in 0..16 {
        // 63 random bytes stay below a modulus of at least 511 bits
        let mut buf = [0u8; 63];
        rng.fill_bytes(&mut buf);
        let m = BigUint::from_bytes_be(&buf);
        let c = mod_pow(&m, e, n);
        assert_eq!(mod_pow(&c, d, n), m);
    }
}

#[test]
fn test_smallest_key_size_generates() {
    let pair = generate_key_pair_with(6, 8, &mut StdRng::seed_from_u64(5)).unwrap();
    // 3-bit primes are 5 and 7
    assert_eq!(pair.public.n, BigUint::from(35u32));
}

#[test]
fn test_generate_key_pair_threaded_small() {
    let pair = generate_key_pair_threaded(256, 24).unwrap();
    let message = "tiny";
    let chunks = encrypt(message, &pair.public).unwrap();
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), message);
}

#[test]
fn test_generate_key_pair_rejects_bad_bit_lengths() {
    for bits in [0, 2, 3, 4, 5, 511] {
        assert!(matches!(
            generate_key_pair(bits),
            Err(CoreError::InvalidBitLength(b)) if b == bits
        ));
    }
}

#[test]
fn test_config_driven_encryption() {
    let pair = common::key_pair_2048();
    let config = RsaConfig {
        chunk_encoding: ChunkEncoding::FixedWidth,
        ..RsaConfig::default()
    };
    let chunks = encrypt_from_config("configured", &pair.public, &config).unwrap();
    assert_eq!(chunks[0].len(), 256);
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), "configured");
}

#[test]
#[ignore = "full-size key generation takes several seconds"]
fn test_generate_default_size_key_pair() {
    let pair = generate_key_pair(2048).unwrap();
    assert!(pair.public.n.bits() >= 2047);
    let chunks = encrypt(&"q".repeat(245), &pair.public).unwrap();
    assert_eq!(decrypt(&chunks, &pair.private).unwrap(), "q".repeat(245));
}
