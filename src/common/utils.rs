//! 基础工具：Base64 编解码、ZeroizingVec、常量时间比较
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 将字节数组转换为Base64字符串
pub fn to_base64(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// 从Base64字符串解码为字节数组
///
/// 解码前去除 `\r`、`\n`、空格和制表符，容忍被折行或复制粘贴过的密钥文本。
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let normalized: String = encoded
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | ' ' | '\t'))
        .collect();
    BASE64.decode(normalized)
}

/// 安全地比较两个字节序列，防止时序攻击
///
/// 无论输入如何，此函数总是比较所有字节，但只有所有字节都匹配才返回true
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0;
    for (byte_a, byte_b) in a.iter().zip(b.iter()) {
        result |= byte_a ^ byte_b;
    }

    result == 0
}

/// 自动清零的字节向量，用于私钥等敏感数据
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ZeroizingVec(pub Vec<u8>);

impl std::ops::Deref for ZeroizingVec {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for ZeroizingVec {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for ZeroizingVec {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for ZeroizingVec {}

impl std::fmt::Debug for ZeroizingVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ZeroizingVec([REDACTED; {}])", self.0.len())
    }
}
