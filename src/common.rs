//! 通用模块，包含错误处理、配置和工具函数

pub mod config;
pub mod errors;
pub mod utils;

pub use self::config::{ConfigFile, CryptoConfig};
pub use self::errors::{Error, ErrorKind, Result};
pub use self::utils::constant_time_eq;
