//! # Traditional Cryptographic Algorithm Module
//!
//! This module contains the RSA implementation of the `AsymmetricCryptographicSystem` trait.
//!
//! ---
//!
//! # 传统加密算法模块
//!
//! 本模块包含 RSA 的实现，提供符合 `AsymmetricCryptographicSystem` 特征的接口。

pub mod rsa;

pub use self::rsa::RsaCryptoSystem;
