//!
//! # 通用配置模块
//!
//! 包含门面所使用的加密参数。配置在构造 `KeyFacade` 时一次性给定，之后只读。
//!
use crate::asymmetric::padding::PaddingScheme;
use crate::common::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 安全下限：任何配置都不能生成小于此位数的 RSA 密钥
pub const RSA_SAFETY_FLOOR_BITS: usize = 2048;

/// `rsa` crate 解码时接受的最大模长
pub const RSA_MAX_SUPPORTED_BITS: usize = 4096;

/// 加密系统配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CryptoConfig {
    /// 默认 RSA 密钥位数
    #[serde(default = "default_rsa_key_bits")]
    pub rsa_key_bits: usize,
    /// 允许的最小密钥位数
    #[serde(default = "default_min_rsa_key_bits")]
    pub min_rsa_key_bits: usize,
    /// 允许的最大密钥位数
    #[serde(default = "default_max_rsa_key_bits")]
    pub max_rsa_key_bits: usize,
    /// 加密填充方案
    #[serde(default)]
    pub padding: PaddingScheme,
}

fn default_rsa_key_bits() -> usize {
    3072 // NIST建议的安全位数
}

fn default_min_rsa_key_bits() -> usize {
    RSA_SAFETY_FLOOR_BITS
}

fn default_max_rsa_key_bits() -> usize {
    RSA_MAX_SUPPORTED_BITS
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: default_rsa_key_bits(),
            min_rsa_key_bits: default_min_rsa_key_bits(),
            max_rsa_key_bits: default_max_rsa_key_bits(),
            padding: PaddingScheme::default(),
        }
    }
}

impl CryptoConfig {
    /// 检查配置本身是否自洽
    pub fn validate(&self) -> Result<()> {
        if self.min_rsa_key_bits < RSA_SAFETY_FLOOR_BITS {
            return Err(Error::Configuration(format!(
                "min_rsa_key_bits {} is below the safety floor of {} bits",
                self.min_rsa_key_bits, RSA_SAFETY_FLOOR_BITS
            )));
        }
        if self.max_rsa_key_bits > RSA_MAX_SUPPORTED_BITS {
            return Err(Error::Configuration(format!(
                "max_rsa_key_bits {} exceeds the supported maximum of {} bits",
                self.max_rsa_key_bits, RSA_MAX_SUPPORTED_BITS
            )));
        }
        if self.min_rsa_key_bits > self.max_rsa_key_bits {
            return Err(Error::Configuration(format!(
                "min_rsa_key_bits {} is greater than max_rsa_key_bits {}",
                self.min_rsa_key_bits, self.max_rsa_key_bits
            )));
        }
        self.check_key_bits(self.rsa_key_bits)
            .map_err(|e| Error::Configuration(format!("rsa_key_bits: {}", e)))
    }

    /// 检查请求的密钥位数是否受支持
    pub fn check_key_bits(&self, bits: usize) -> Result<()> {
        if bits < self.min_rsa_key_bits {
            return Err(Error::InvalidParameter(format!(
                "key size {} bits is below the minimum of {} bits",
                bits, self.min_rsa_key_bits
            )));
        }
        if bits > self.max_rsa_key_bits {
            return Err(Error::InvalidParameter(format!(
                "key size {} bits exceeds the maximum of {} bits",
                bits, self.max_rsa_key_bits
            )));
        }
        if bits % 8 != 0 {
            return Err(Error::InvalidParameter(format!(
                "key size {} bits is not a multiple of 8",
                bits
            )));
        }
        Ok(())
    }
}

/// 完整配置文件
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfigFile {
    /// 加密配置
    #[serde(default)]
    pub crypto: CryptoConfig,
}

impl ConfigFile {
    /// 从 JSON 文件加载并校验配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// 从 JSON 字符串解析并校验配置
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ConfigFile = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(format!("解析配置文件失败: {}", e)))?;
        config.crypto.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
