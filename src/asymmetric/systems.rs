//! 算法系统集合
//!
//! 目前仅包含传统 RSA 实现
pub mod traditional;
