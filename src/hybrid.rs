//!
//! 混合加密：RSA 封装一次性 AES-256-GCM 密钥，AES-GCM 加密实际数据。
//!
//! 密钥块为 `key(32) || nonce(12)`，用门面配置的 RSA 填充方案加密；
//! 信封以 camelCase JSON 传输，与 `encryptedKeyBlock` / `cipherData` 负载形状一致。
//!
//! 只沿用字段形状：旧系统的 `key(32) || IV(16)` AES-CBC 负载无法用这里打开，
//! 这里生成的信封旧系统也无法解开。
//!

use crate::asymmetric::systems::traditional::RsaCryptoSystem;
use crate::asymmetric::traits::AsymmetricCryptographicSystem;
use crate::common::errors::{Error, Result};
use crate::common::utils::{constant_time_eq, from_base64, to_base64};
use crate::facade::{KeyFacade, decode_private, decode_public, public_key_fingerprint};
use crate::keys::EncodedKey;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rsa::RsaPublicKey;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

const AES_KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const KEY_BLOCK_LEN: usize = AES_KEY_LEN + NONCE_LEN;
/// AES-GCM 单个 nonce 下允许的最大明文长度（2^36 - 32 字节）
const GCM_MAX_PLAINTEXT_LEN: u64 = (1 << 36) - 32;

fn check_payload_len(len: usize) -> Result<()> {
    let max = usize::try_from(GCM_MAX_PLAINTEXT_LEN).unwrap_or(usize::MAX);
    if len > max {
        return Err(Error::PlaintextTooLarge { len, max });
    }
    Ok(())
}

/// 混合加密信封
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridEnvelope {
    /// RSA 加密后的密钥块（Base64）
    pub encrypted_key_block: String,
    /// AES-256-GCM 密文与认证标签（Base64）
    pub cipher_data: String,
    /// 接收方公钥指纹；缺省时不做匹配检查
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

impl HybridEnvelope {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::MalformedEnvelope(format!("serialization failed: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::MalformedEnvelope(format!("deserialization failed: {}", e)))
    }
}

impl KeyFacade {
    /// 为公钥持有者封装任意长度的数据
    pub fn seal(
        &self,
        plaintext: &[u8],
        public_key: &EncodedKey,
        additional_data: Option<&[u8]>,
    ) -> Result<HybridEnvelope> {
        let recipient = decode_public(public_key)?;
        check_payload_len(plaintext.len())?;

        // 1. 生成一次性的AES-256密钥与nonce
        let aes_key = Aes256Gcm::generate_key(&mut OsRng);
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        // 2. 用AES密钥加密实际数据
        let cipher = Aes256Gcm::new(&aes_key);
        let payload = Payload {
            msg: plaintext,
            aad: additional_data.unwrap_or_default(),
        };
        let cipher_data = cipher
            .encrypt(&nonce, payload)
            .map_err(|_| Error::PlaintextTooLarge {
                len: plaintext.len(),
                max: usize::try_from(GCM_MAX_PLAINTEXT_LEN).unwrap_or(usize::MAX),
            })?;

        // 3. 用RSA公钥加密密钥块
        let mut key_block = Zeroizing::new(Vec::with_capacity(KEY_BLOCK_LEN));
        key_block.extend_from_slice(aes_key.as_slice());
        key_block.extend_from_slice(nonce.as_slice());
        let encrypted_key_block =
            RsaCryptoSystem::encrypt(&recipient, &key_block, self.padding())?;

        debug!(
            plaintext_len = plaintext.len(),
            padding = self.padding().name(),
            "hybrid seal"
        );

        Ok(HybridEnvelope {
            encrypted_key_block: to_base64(&encrypted_key_block),
            cipher_data: to_base64(&cipher_data),
            key_id: Some(public_key_fingerprint(&recipient)?),
        })
    }

    /// 打开信封
    ///
    /// 私钥解析失败报告 `MalformedKey`；此后的任何失败（指纹不符、密钥块损坏、
    /// 认证失败）都只报告 `DecryptionFailed`。
    pub fn open(
        &self,
        envelope: &HybridEnvelope,
        private_key: &EncodedKey,
        additional_data: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let recipient = decode_private(private_key)?;

        if let Some(key_id) = &envelope.key_id {
            let expected = public_key_fingerprint(&RsaPublicKey::from(&recipient))?;
            if !constant_time_eq(key_id.to_lowercase().as_bytes(), expected.as_bytes()) {
                return Err(Error::DecryptionFailed);
            }
        }

        let encrypted_key_block =
            from_base64(&envelope.encrypted_key_block).map_err(|_| Error::DecryptionFailed)?;
        let cipher_data = from_base64(&envelope.cipher_data).map_err(|_| Error::DecryptionFailed)?;

        let key_block = Zeroizing::new(RsaCryptoSystem::decrypt(
            &recipient,
            &encrypted_key_block,
            self.padding(),
        )?);
        if key_block.len() != KEY_BLOCK_LEN {
            return Err(Error::DecryptionFailed);
        }
        let (aes_key, nonce) = key_block.split_at(AES_KEY_LEN);

        let cipher =
            Aes256Gcm::new_from_slice(aes_key).map_err(|_| Error::DecryptionFailed)?;
        let payload = Payload {
            msg: &cipher_data,
            aad: additional_data.unwrap_or_default(),
        };
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), payload)
            .map_err(|_| Error::DecryptionFailed)?;

        debug!(plaintext_len = plaintext.len(), "hybrid open");
        Ok(plaintext)
    }

    /// 打开信封并按 UTF-8 解码
    pub fn open_to_string(
        &self,
        envelope: &HybridEnvelope,
        private_key: &EncodedKey,
        additional_data: Option<&[u8]>,
    ) -> Result<String> {
        let plaintext = self.open(envelope, private_key, additional_data)?;
        Ok(String::from_utf8(plaintext)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::ErrorKind;
    use crate::keys::KeyPair;
    use std::sync::OnceLock;

    fn shared_pair() -> &'static KeyPair {
        static PAIR: OnceLock<KeyPair> = OnceLock::new();
        PAIR.get_or_init(|| KeyFacade::default().generate(2048).unwrap())
    }

    fn keys(facade: &KeyFacade) -> (EncodedKey, EncodedKey) {
        (
            facade.export_public(shared_pair()).unwrap(),
            facade.export_private(shared_pair()).unwrap(),
        )
    }

    #[test]
    fn test_seal_open_roundtrip_large_payload() {
        let facade = KeyFacade::default();
        let (public_key, private_key) = keys(&facade);
        let data = vec![0xAB; 64 * 1024];

        let envelope = facade.seal(&data, &public_key, None).unwrap();
        assert_eq!(facade.open(&envelope, &private_key, None).unwrap(), data);
    }

    #[test]
    fn test_open_with_wrong_aad_fails() {
        let facade = KeyFacade::default();
        let (public_key, private_key) = keys(&facade);

        let envelope = facade.seal(b"payload", &public_key, Some(b"aad-1")).unwrap();
        let err = facade.open(&envelope, &private_key, Some(b"aad-2")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
    }

    #[test]
    fn test_tampered_cipher_data_fails() {
        let facade = KeyFacade::default();
        let (public_key, private_key) = keys(&facade);

        let mut envelope = facade.seal(b"payload", &public_key, None).unwrap();
        let mut raw = from_base64(&envelope.cipher_data).unwrap();
        raw[0] ^= 0x01;
        envelope.cipher_data = to_base64(&raw);

        let err = facade.open(&envelope, &private_key, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
    }

    #[test]
    fn test_key_id_mismatch_fails_uniformly() {
        let facade = KeyFacade::default();
        let (public_key, private_key) = keys(&facade);

        let mut envelope = facade.seal(b"payload", &public_key, None).unwrap();
        envelope.key_id = Some("00".repeat(32));

        let err = facade.open(&envelope, &private_key, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
    }

    #[test]
    fn test_envelope_without_key_id_still_opens() {
        let facade = KeyFacade::default();
        let (public_key, private_key) = keys(&facade);

        let mut envelope = facade.seal(b"legacy shape", &public_key, None).unwrap();
        envelope.key_id = None;
        let json = envelope.to_json().unwrap();
        assert!(!json.contains("keyId"));

        let parsed = HybridEnvelope::from_json(&json).unwrap();
        assert_eq!(facade.open(&parsed, &private_key, None).unwrap(), b"legacy shape");
    }

    #[test]
    fn test_envelope_json_field_names() {
        let facade = KeyFacade::default();
        let (public_key, _) = keys(&facade);

        let json = facade.seal(b"x", &public_key, None).unwrap().to_json().unwrap();
        assert!(json.contains("\"encryptedKeyBlock\""));
        assert!(json.contains("\"cipherData\""));
        assert!(json.contains("\"keyId\""));
    }

    #[test]
    fn test_payload_len_limit() {
        assert!(check_payload_len(0).is_ok());
        assert!(check_payload_len(64 * 1024).is_ok());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_payload_over_gcm_limit_is_too_large() {
        let limit = GCM_MAX_PLAINTEXT_LEN as usize;
        assert!(check_payload_len(limit).is_ok());

        let err = check_payload_len(limit + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlaintextTooLarge);
        match err {
            Error::PlaintextTooLarge { len, max } => {
                assert_eq!(len, limit + 1);
                assert_eq!(max, limit);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_envelope_json() {
        let err = HybridEnvelope::from_json("{\"cipherData\": 1}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedEnvelope);
    }
}
