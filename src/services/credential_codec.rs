//! AES-256-CBC encryption of the stored access token.
//!
//! Ciphertext is base64 text of the PKCS#7-padded blocks, which is what
//! OpenSSL produces for `aes-256-cbc` without raw output. The key is the
//! UTF-8 key material zero-padded or truncated to 32 bytes; the IV is the
//! first 16 bytes of the salt, zero-padded when shorter.

use aes::Aes256;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::KeyMaterial;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

fn fit<const N: usize>(material: &str) -> [u8; N] {
    let mut out = [0u8; N];
    let bytes = material.as_bytes();
    let len = bytes.len().min(N);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

/// Encrypt `plaintext` into base64 ciphertext.
pub fn encrypt(plaintext: &str, material: &KeyMaterial) -> String {
    let key = fit::<KEY_LEN>(material.encryption_key());
    let iv = fit::<IV_LEN>(material.salt());
    let ciphertext = Aes256CbcEnc::new(&key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    STANDARD.encode(ciphertext)
}

/// Decrypt base64 ciphertext.
///
/// Empty, undecodable, or wrongly keyed input yields an empty string, which
/// callers treat as "no token configured".
pub fn decrypt(ciphertext: &str, material: &KeyMaterial) -> String {
    let ciphertext = ciphertext.trim();
    if ciphertext.is_empty() {
        return String::new();
    }
    let Ok(bytes) = STANDARD.decode(ciphertext) else {
        return String::new();
    };

    let key = fit::<KEY_LEN>(material.encryption_key());
    let iv = fit::<IV_LEN>(material.salt());
    Aes256CbcDec::new(&key.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&bytes)
        .ok()
        .and_then(|plain| String::from_utf8(plain).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn material() -> KeyMaterial {
        KeyMaterial::new("test-encryption-key", "0123456789abcdef-extra")
    }

    // Produced with `openssl enc -aes-256-cbc -base64` using the same key and IV.
    const OPENSSL_CIPHERTEXT: &str = "hNQ05F7wVwBmjQ5Kk2bp7xyZi+achw7bqqlJK8Xf+CA=";

    #[test]
    fn matches_openssl_output() {
        assert_eq!(encrypt("ghp_exampletoken123", &material()), OPENSSL_CIPHERTEXT);
        assert_eq!(decrypt(OPENSSL_CIPHERTEXT, &material()), "ghp_exampletoken123");
    }

    #[test]
    fn long_key_and_short_salt_are_fitted() {
        let fallback =
            KeyMaterial::new("unexpected-missing-encryption-key", "unexpected-missing-salt");
        assert_eq!(
            encrypt("ghp_exampletoken123", &fallback),
            "5WCMri7DJHkZc61+VC68vGPzPFsUT3dYwPCYddwlw6s="
        );
    }

    #[test]
    fn empty_ciphertext_decrypts_to_empty() {
        assert_eq!(decrypt("", &material()), "");
        assert_eq!(decrypt("   ", &material()), "");
    }

    #[test]
    fn corrupt_ciphertext_decrypts_to_empty() {
        assert_eq!(decrypt("not base64!!", &material()), "");
        assert_eq!(decrypt("AAAA", &material()), "");
        let other = KeyMaterial::new("other-key", "0123456789abcdef");
        assert_eq!(decrypt(OPENSSL_CIPHERTEXT, &other), "");
    }

    #[test]
    fn ciphertext_is_not_plaintext() {
        let ciphertext = encrypt("ghp_exampletoken123", &material());
        assert!(!ciphertext.contains("ghp_"));
    }

    proptest! {
        #[test]
        fn decrypt_inverts_encrypt(
            plaintext in "\\PC{1,64}",
            key in "[ -~]{0,48}",
            salt in "[ -~]{0,24}",
        ) {
            let material = KeyMaterial::new(key, salt);
            let ciphertext = encrypt(&plaintext, &material);
            prop_assert_eq!(decrypt(&ciphertext, &material), plaintext);
        }
    }
}
