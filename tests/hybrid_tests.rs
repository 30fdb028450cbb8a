//!
//! 混合加密集成测试
//!

mod common;

use common::{exported_keys, unrelated_pair};
use rsa_keyfacade::{CryptoConfig, ErrorKind, HybridEnvelope, KeyFacade, PaddingScheme};

#[test]
fn test_envelope_json_transport_roundtrip() {
    let facade = KeyFacade::default();
    let (public_key, private_key) = exported_keys(&facade);
    let message = "多字节负载 🔐 invoice #42; ".repeat(200);

    let json = facade
        .seal(message.as_bytes(), &public_key, None)
        .unwrap()
        .to_json()
        .unwrap();
    let envelope = HybridEnvelope::from_json(&json).unwrap();

    assert_eq!(
        facade.open_to_string(&envelope, &private_key, None).unwrap(),
        message
    );
}

#[test]
fn test_envelope_carries_recipient_fingerprint() {
    let facade = KeyFacade::default();
    let (public_key, _) = exported_keys(&facade);

    let envelope = facade.seal(b"tagged", &public_key, None).unwrap();
    assert_eq!(
        envelope.key_id.as_deref(),
        Some(facade.fingerprint(&public_key).unwrap().as_str())
    );
}

#[test]
fn test_open_with_unrelated_key_fails() {
    let facade = KeyFacade::default();
    let (public_key, _) = exported_keys(&facade);
    let wrong_private = facade.export_private(unrelated_pair()).unwrap();

    let mut envelope = facade.seal(b"not for you", &public_key, None).unwrap();
    let err = facade.open(&envelope, &wrong_private, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecryptionFailed);

    // 去掉指纹后，失败发生在密钥块解密阶段，错误仍然相同
    envelope.key_id = None;
    let err = facade.open(&envelope, &wrong_private, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
}

#[test]
fn test_sealing_is_randomised() {
    let facade = KeyFacade::default();
    let (public_key, _) = exported_keys(&facade);

    let first = facade.seal(b"same", &public_key, None).unwrap();
    let second = facade.seal(b"same", &public_key, None).unwrap();
    assert_ne!(first.encrypted_key_block, second.encrypted_key_block);
    assert_ne!(first.cipher_data, second.cipher_data);
}

#[test]
fn test_envelope_requires_matching_padding() {
    let sealer = KeyFacade::new(CryptoConfig {
        padding: PaddingScheme::OaepSha1,
        ..Default::default()
    })
    .unwrap();
    let opener = KeyFacade::default();
    let (public_key, private_key) = exported_keys(&sealer);

    let envelope = sealer.seal(b"sha1 key block", &public_key, None).unwrap();
    assert_eq!(
        sealer.open(&envelope, &private_key, None).unwrap(),
        b"sha1 key block"
    );
    assert_eq!(
        opener.open(&envelope, &private_key, None).unwrap_err().kind(),
        ErrorKind::DecryptionFailed
    );
}

#[test]
fn test_seal_with_private_key_is_rejected() {
    let facade = KeyFacade::default();
    let (_, private_key) = exported_keys(&facade);

    let err = facade.seal(b"oops", &private_key, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedKey);
}

#[test]
fn test_garbage_base64_in_envelope_fails_uniformly() {
    let facade = KeyFacade::default();
    let (_, private_key) = exported_keys(&facade);

    let envelope = HybridEnvelope {
        encrypted_key_block: "***".to_string(),
        cipher_data: "***".to_string(),
        key_id: None,
    };
    let err = facade.open(&envelope, &private_key, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
}
