//! 非对称加密：填充方案、系统 Trait 与 RSA 实现

pub mod padding;
pub mod systems;
pub mod traits;

pub use self::padding::PaddingScheme;
pub use self::traits::AsymmetricCryptographicSystem;
