//! # KeyFacade
//!
//! 无状态的 RSA 密钥管理与加解密入口。门面只持有构造时给定的只读配置，
//! 每次调用所需的密钥都由调用方显式传入，可被任意多个线程同时使用。

use crate::asymmetric::padding::PaddingScheme;
use crate::asymmetric::systems::traditional::RsaCryptoSystem;
use crate::asymmetric::traits::AsymmetricCryptographicSystem;
use crate::common::config::{ConfigFile, CryptoConfig};
use crate::common::errors::Result;
use crate::keys::{Ciphertext, EncodedKey, KeyKind, KeyPair};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, warn};

/// RSA 密钥与加解密门面
#[derive(Debug, Clone, Default)]
pub struct KeyFacade {
    config: CryptoConfig,
}

impl KeyFacade {
    /// 使用给定配置创建门面，配置不自洽时返回 `Configuration` 错误
    pub fn new(config: CryptoConfig) -> Result<Self> {
        config.validate()?;
        if config.padding.is_legacy() {
            warn!(
                padding = config.padding.name(),
                "legacy RSA encryption padding selected; it is vulnerable to chosen-ciphertext attacks"
            );
        }
        Ok(Self { config })
    }

    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = ConfigFile::from_file(path)?;
        Self::new(file.crypto)
    }

    pub fn config(&self) -> &CryptoConfig {
        &self.config
    }

    pub fn padding(&self) -> PaddingScheme {
        self.config.padding
    }

    /// 生成一对新的 RSA 密钥
    pub fn generate(&self, key_size_bits: usize) -> Result<KeyPair> {
        debug!(key_size_bits, "generating RSA key pair");
        let (public_key, private_key) =
            RsaCryptoSystem::generate_keypair(&self.config, key_size_bits)?;
        Ok(KeyPair::new(public_key, private_key))
    }

    /// 按配置的默认位数生成密钥对
    pub fn generate_default(&self) -> Result<KeyPair> {
        self.generate(self.config.rsa_key_bits)
    }

    /// 导出公钥（SubjectPublicKeyInfo DER）
    pub fn export_public(&self, key_pair: &KeyPair) -> Result<EncodedKey> {
        let der = RsaCryptoSystem::export_public_key(key_pair.public_key())?;
        Ok(EncodedKey::from_der(KeyKind::Public, der))
    }

    /// 导出私钥（PKCS#8 DER）
    pub fn export_private(&self, key_pair: &KeyPair) -> Result<EncodedKey> {
        let mut der = RsaCryptoSystem::export_private_key(key_pair.private_key())?;
        Ok(EncodedKey::from_der(KeyKind::Private, std::mem::take(&mut der.0)))
    }

    /// 使用公钥加密
    pub fn encrypt(&self, plaintext: &[u8], public_key: &EncodedKey) -> Result<Ciphertext> {
        let key = decode_public(public_key)?;
        let ciphertext = RsaCryptoSystem::encrypt(&key, plaintext, self.config.padding)?;
        debug!(
            plaintext_len = plaintext.len(),
            padding = self.config.padding.name(),
            "RSA encrypt"
        );
        Ok(Ciphertext::from(ciphertext))
    }

    /// 使用私钥解密
    pub fn decrypt(&self, ciphertext: &Ciphertext, private_key: &EncodedKey) -> Result<Vec<u8>> {
        let key = decode_private(private_key)?;
        let plaintext = RsaCryptoSystem::decrypt(&key, ciphertext.as_bytes(), self.config.padding)?;
        debug!(ciphertext_len = ciphertext.len(), "RSA decrypt");
        Ok(plaintext)
    }

    /// 解密并按 UTF-8 解码为文本
    pub fn decrypt_to_string(
        &self,
        ciphertext: &Ciphertext,
        private_key: &EncodedKey,
    ) -> Result<String> {
        let plaintext = self.decrypt(ciphertext, private_key)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// 文本接口：明文字符串 + Base64 公钥 -> Base64 密文
    pub fn encrypt_text(&self, plaintext: &str, public_key_base64: &str) -> Result<String> {
        let public_key = EncodedKey::public_from_base64(public_key_base64)?;
        Ok(self.encrypt(plaintext.as_bytes(), &public_key)?.to_base64())
    }

    /// 文本接口：Base64 密文 + Base64 私钥 -> 明文字符串
    pub fn decrypt_text(&self, ciphertext_base64: &str, private_key_base64: &str) -> Result<String> {
        let private_key = EncodedKey::private_from_base64(private_key_base64)?;
        let ciphertext = Ciphertext::from_base64(ciphertext_base64)?;
        self.decrypt_to_string(&ciphertext, &private_key)
    }

    /// 该公钥在当前填充方案下可加密的最大明文长度
    pub fn max_plaintext_len(&self, public_key: &EncodedKey) -> Result<usize> {
        let key = decode_public(public_key)?;
        Ok(RsaCryptoSystem::max_plaintext_len(&key, self.config.padding))
    }

    /// 密钥指纹：SubjectPublicKeyInfo DER 的 SHA-256（小写十六进制）
    ///
    /// 私钥按其公钥部分计算，因此同一密钥对的两半指纹相同。
    pub fn fingerprint(&self, key: &EncodedKey) -> Result<String> {
        fingerprint(key)
    }
}

pub(crate) fn decode_public(key: &EncodedKey) -> Result<RsaPublicKey> {
    key.expect_kind(KeyKind::Public)?;
    RsaCryptoSystem::import_public_key(key.as_der())
}

pub(crate) fn decode_private(key: &EncodedKey) -> Result<RsaPrivateKey> {
    key.expect_kind(KeyKind::Private)?;
    RsaCryptoSystem::import_private_key(key.as_der())
}

pub(crate) fn fingerprint(key: &EncodedKey) -> Result<String> {
    // 先完整解析，确保只对合法密钥计算指纹
    match key.kind() {
        KeyKind::Public => public_key_fingerprint(&decode_public(key)?),
        KeyKind::Private => {
            let private_key = decode_private(key)?;
            public_key_fingerprint(&RsaPublicKey::from(&private_key))
        }
    }
}

pub(crate) fn public_key_fingerprint(public_key: &RsaPublicKey) -> Result<String> {
    let public_der = RsaCryptoSystem::export_public_key(public_key)?;
    Ok(hex::encode(Sha256::digest(&public_der)))
}
