//! 定义了非对称加密系统的核心 Trait。
use crate::asymmetric::padding::PaddingScheme;
use crate::common::config::CryptoConfig;
use crate::common::utils::ZeroizingVec;
use std::fmt::Debug;

/// `AsymmetricCryptographicSystem` 定义了非对称加密算法必须实现的核心功能。
///
/// 所有方法都是无状态的关联函数：密钥总是显式传入，系统本身不保存任何密钥。
pub trait AsymmetricCryptographicSystem: Sized {
    /// 公钥类型
    type PublicKey: Clone + Debug + Send + Sync;

    /// 私钥类型
    type PrivateKey: Clone + Send + Sync;

    /// 错误类型
    type Error: std::error::Error + Send + Sync + 'static;

    /// 生成指定位数的密钥对，位数须满足 `config` 的限制
    fn generate_keypair(
        config: &CryptoConfig,
        bits: usize,
    ) -> Result<(Self::PublicKey, Self::PrivateKey), Self::Error>;

    /// 使用公钥加密单个数据块
    fn encrypt(
        public_key: &Self::PublicKey,
        plaintext: &[u8],
        padding: PaddingScheme,
    ) -> Result<Vec<u8>, Self::Error>;

    /// 使用私钥解密单个数据块
    fn decrypt(
        private_key: &Self::PrivateKey,
        ciphertext: &[u8],
        padding: PaddingScheme,
    ) -> Result<Vec<u8>, Self::Error>;

    /// 给定填充方案下该公钥能加密的最大明文长度
    fn max_plaintext_len(public_key: &Self::PublicKey, padding: PaddingScheme) -> usize;

    /// 将公钥导出为标准 DER 格式
    fn export_public_key(public_key: &Self::PublicKey) -> Result<Vec<u8>, Self::Error>;

    /// 将私钥导出为标准 DER 格式
    fn export_private_key(private_key: &Self::PrivateKey) -> Result<ZeroizingVec, Self::Error>;

    /// 从标准 DER 格式导入公钥
    fn import_public_key(der: &[u8]) -> Result<Self::PublicKey, Self::Error>;

    /// 从标准 DER 格式导入私钥
    fn import_private_key(der: &[u8]) -> Result<Self::PrivateKey, Self::Error>;
}
