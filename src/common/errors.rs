use thiserror::Error;

/// 门面所有操作共用的错误类型
///
/// 解密相关的失败统一归入 [`Error::DecryptionFailed`]，不携带任何内部原因，
/// 以免调用方借助错误差异构造填充预言（padding oracle）。
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("malformed key: {0}")]
    MalformedKey(String),

    #[error("plaintext too large: {len} bytes, at most {max} bytes allowed")]
    PlaintextTooLarge { len: usize, max: usize },

    #[error("decryption failed")]
    DecryptionFailed,

    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// 不带数据的错误标签，便于调用方按类别匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidParameter,
    MalformedKey,
    PlaintextTooLarge,
    DecryptionFailed,
    InvalidUtf8,
    MalformedEnvelope,
    Configuration,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Error::MalformedKey(_) => ErrorKind::MalformedKey,
            Error::PlaintextTooLarge { .. } => ErrorKind::PlaintextTooLarge,
            Error::DecryptionFailed => ErrorKind::DecryptionFailed,
            Error::InvalidUtf8(_) => ErrorKind::InvalidUtf8,
            Error::MalformedEnvelope(_) => ErrorKind::MalformedEnvelope,
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Configuration(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
