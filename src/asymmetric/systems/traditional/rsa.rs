//! `RsaCryptoSystem` 提供了基于 RSA 的非对称加解密功能。
//! 公钥使用 X.509 SubjectPublicKeyInfo DER，私钥使用 PKCS#8 DER。

use crate::asymmetric::padding::{PaddingScheme, RsaPadding};
use crate::asymmetric::traits::AsymmetricCryptographicSystem;
use crate::common::config::CryptoConfig;
use crate::common::errors::Error;
use crate::common::utils::ZeroizingVec;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::rand_core::OsRng as RsaOsRng;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// RSA加密系统实现
pub struct RsaCryptoSystem;

impl RsaCryptoSystem {
    /// 将 DER 公钥渲染为 PEM（`PUBLIC KEY`）
    pub fn public_der_to_pem(der: &[u8]) -> Result<String, Error> {
        let public_key = Self::import_public_key(der)?;
        public_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| Error::MalformedKey(format!("RSA公钥导出PEM失败: {}", e)))
    }

    /// 将 DER 私钥渲染为 PEM（`PRIVATE KEY`）
    pub fn private_der_to_pem(der: &[u8]) -> Result<zeroize::Zeroizing<String>, Error> {
        let private_key = Self::import_private_key(der)?;
        private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| Error::MalformedKey(format!("RSA私钥导出PEM失败: {}", e)))
    }

    /// 解析 PEM 公钥并返回其 DER
    pub fn public_pem_to_der(pem: &str) -> Result<Vec<u8>, Error> {
        let public_key = RsaPublicKey::from_public_key_pem(pem.trim())
            .map_err(|e| Error::MalformedKey(format!("导入RSA公钥失败: {}", e)))?;
        Self::export_public_key(&public_key)
    }

    /// 解析 PEM 私钥并返回其 DER
    pub fn private_pem_to_der(pem: &str) -> Result<ZeroizingVec, Error> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(pem.trim())
            .map_err(|e| Error::MalformedKey(format!("导入RSA私钥失败: {}", e)))?;
        Self::export_private_key(&private_key)
    }
}

impl AsymmetricCryptographicSystem for RsaCryptoSystem {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;
    type Error = Error;

    fn generate_keypair(
        config: &CryptoConfig,
        bits: usize,
    ) -> Result<(Self::PublicKey, Self::PrivateKey), Self::Error> {
        config.check_key_bits(bits)?;
        let mut rsa_rng = RsaOsRng;

        let private_key = RsaPrivateKey::new(&mut rsa_rng, bits)
            .map_err(|e| Error::InvalidParameter(format!("生成RSA密钥失败: {}", e)))?;
        let public_key = RsaPublicKey::from(&private_key);

        Ok((public_key, private_key))
    }

    fn encrypt(
        public_key: &Self::PublicKey,
        plaintext: &[u8],
        padding: PaddingScheme,
    ) -> Result<Vec<u8>, Self::Error> {
        let max = Self::max_plaintext_len(public_key, padding);
        if plaintext.len() > max {
            return Err(Error::PlaintextTooLarge {
                len: plaintext.len(),
                max,
            });
        }

        let mut rng = RsaOsRng;
        let result = match RsaPadding::from(padding) {
            RsaPadding::Oaep(scheme) => public_key.encrypt(&mut rng, scheme, plaintext),
            RsaPadding::Pkcs1v15(scheme) => public_key.encrypt(&mut rng, scheme, plaintext),
        };

        result.map_err(|e| match e {
            rsa::Error::MessageTooLong => Error::PlaintextTooLarge {
                len: plaintext.len(),
                max,
            },
            other => Error::MalformedKey(format!("RSA加密失败: {}", other)),
        })
    }

    fn decrypt(
        private_key: &Self::PrivateKey,
        ciphertext: &[u8],
        padding: PaddingScheme,
    ) -> Result<Vec<u8>, Self::Error> {
        // 所有失败都折叠为同一个错误，不区分长度、填充或密钥不匹配
        if ciphertext.len() != private_key.size() {
            return Err(Error::DecryptionFailed);
        }

        let mut rng = RsaOsRng;
        let result = match RsaPadding::from(padding) {
            RsaPadding::Oaep(scheme) => private_key.decrypt_blinded(&mut rng, scheme, ciphertext),
            RsaPadding::Pkcs1v15(scheme) => {
                private_key.decrypt_blinded(&mut rng, scheme, ciphertext)
            }
        };

        result.map_err(|_| Error::DecryptionFailed)
    }

    fn max_plaintext_len(public_key: &Self::PublicKey, padding: PaddingScheme) -> usize {
        padding.max_plaintext_len(public_key.size())
    }

    fn export_public_key(public_key: &Self::PublicKey) -> Result<Vec<u8>, Self::Error> {
        let public_der = public_key
            .to_public_key_der()
            .map_err(|e| Error::MalformedKey(format!("导出RSA公钥DER失败: {}", e)))?;
        Ok(public_der.as_bytes().to_vec())
    }

    fn export_private_key(private_key: &Self::PrivateKey) -> Result<ZeroizingVec, Self::Error> {
        let private_der = private_key
            .to_pkcs8_der()
            .map_err(|e| Error::MalformedKey(format!("导出RSA私钥DER失败: {}", e)))?;
        Ok(ZeroizingVec(private_der.as_bytes().to_vec()))
    }

    fn import_public_key(der: &[u8]) -> Result<Self::PublicKey, Self::Error> {
        RsaPublicKey::from_public_key_der(der)
            .map_err(|e| Error::MalformedKey(format!("解析RSA公钥失败: {}", e)))
    }

    fn import_private_key(der: &[u8]) -> Result<Self::PrivateKey, Self::Error> {
        let private_key = RsaPrivateKey::from_pkcs8_der(der)
            .map_err(|e| Error::MalformedKey(format!("解析RSA私钥失败: {}", e)))?;
        private_key
            .validate()
            .map_err(|e| Error::MalformedKey(format!("RSA私钥校验失败: {}", e)))?;
        Ok(private_key)
    }
}
