//!
//! 集成测试的通用辅助函数
//!
#![allow(dead_code)]

use rsa_keyfacade::{EncodedKey, KeyFacade, KeyPair};
use std::sync::OnceLock;

/// 2048 位密钥对在一个测试二进制内只生成一次
pub fn shared_pair() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| KeyFacade::default().generate(2048).unwrap())
}

/// 另一对与 `shared_pair` 无关的密钥
pub fn unrelated_pair() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| KeyFacade::default().generate(2048).unwrap())
}

/// 导出 `shared_pair` 的公私钥
pub fn exported_keys(facade: &KeyFacade) -> (EncodedKey, EncodedKey) {
    let pair = shared_pair();
    (
        facade.export_public(pair).unwrap(),
        facade.export_private(pair).unwrap(),
    )
}
