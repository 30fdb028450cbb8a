//! RSA 加密填充方案
//!
//! 默认使用 OAEP-SHA256。OAEP-SHA1 与 PKCS#1 v1.5 仅为兼容旧系统保留：
//! PKCS#1 v1.5 加密填充易受选择密文攻击，不应作为新数据的默认选择。

use rsa::{Oaep, Pkcs1v15Encrypt};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::Sha256;

/// 可配置的填充策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaddingScheme {
    /// OAEP + SHA-256（MGF1-SHA256）
    #[default]
    OaepSha256,
    /// OAEP + SHA-1，单块 RSA 密文与 .NET 的 `RSAEncryptionPadding.OaepSHA1` 互通。
    ///
    /// 仅限 `encrypt` / `decrypt`；`HybridEnvelope` 的密钥块与数据格式不兼容旧的 AES-CBC 负载。
    OaepSha1,
    /// PKCS#1 v1.5，与 Java 的 `RSA/ECB/PKCS1Padding` 互通
    #[serde(rename = "pkcs1v15")]
    Pkcs1v15,
}

impl PaddingScheme {
    /// 填充占用的字节数
    pub fn overhead(&self) -> usize {
        match self {
            // 2 * hLen + 2
            PaddingScheme::OaepSha256 => 2 * 32 + 2,
            PaddingScheme::OaepSha1 => 2 * 20 + 2,
            PaddingScheme::Pkcs1v15 => 11,
        }
    }

    /// 给定模长（字节）时允许的最大明文长度
    pub fn max_plaintext_len(&self, modulus_bytes: usize) -> usize {
        modulus_bytes.saturating_sub(self.overhead())
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, PaddingScheme::Pkcs1v15)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaddingScheme::OaepSha256 => "OAEP-SHA256",
            PaddingScheme::OaepSha1 => "OAEP-SHA1",
            PaddingScheme::Pkcs1v15 => "PKCS1-v1_5",
        }
    }
}

/// 与 `rsa` crate 填充类型的桥接
pub(crate) enum RsaPadding {
    Oaep(Oaep),
    Pkcs1v15(Pkcs1v15Encrypt),
}

impl From<PaddingScheme> for RsaPadding {
    fn from(scheme: PaddingScheme) -> Self {
        match scheme {
            PaddingScheme::OaepSha256 => RsaPadding::Oaep(Oaep::new::<Sha256>()),
            PaddingScheme::OaepSha1 => RsaPadding::Oaep(Oaep::new::<Sha1>()),
            PaddingScheme::Pkcs1v15 => RsaPadding::Pkcs1v15(Pkcs1v15Encrypt),
        }
    }
}
