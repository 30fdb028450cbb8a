//! # rsa-keyfacade: Stateless RSA Key Management
//!
//! `rsa-keyfacade` wraps the audited [`rsa`] crate in a small, stateless facade:
//! generate a key pair, export it as Base64 text (SubjectPublicKeyInfo / PKCS#8 DER),
//! and encrypt or decrypt with the exported halves. Nothing is cached process-wide;
//! every operation takes the key it needs as a parameter.
//!
//! ## Core Concepts
//!
//! - **`KeyFacade`**: the entry point, holding only read-only configuration.
//! - **`KeyPair` / `EncodedKey` / `Ciphertext`**: immutable value types owned by the caller.
//! - **`PaddingScheme`**: OAEP-SHA256 by default; OAEP-SHA1 and PKCS#1 v1.5 for interoperability.
//! - **`HybridEnvelope`** (feature `hybrid`): RSA-wrapped AES-256-GCM for payloads of any size.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rsa_keyfacade::KeyFacade;
//!
//! fn main() -> rsa_keyfacade::Result<()> {
//!     let facade = KeyFacade::default();
//!     let pair = facade.generate(2048)?;
//!     let public_key = facade.export_public(&pair)?;
//!     let private_key = facade.export_private(&pair)?;
//!
//!     let ciphertext = facade.encrypt(b"hello world", &public_key)?;
//!     let plaintext = facade.decrypt(&ciphertext, &private_key)?;
//!
//!     assert_eq!(plaintext, b"hello world");
//!     Ok(())
//! }
//! ```

pub mod asymmetric;
pub mod common;
pub mod facade;
#[cfg(feature = "hybrid")]
pub mod hybrid;
pub mod keys;

pub use asymmetric::padding::PaddingScheme;
pub use common::config::{ConfigFile, CryptoConfig};
pub use common::errors::{Error, ErrorKind, Result};
pub use facade::KeyFacade;
#[cfg(feature = "hybrid")]
pub use hybrid::HybridEnvelope;
pub use keys::{Ciphertext, EncodedKey, KeyKind, KeyPair};

/// The version of the `rsa-keyfacade` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
