//! Error types for the extension SDK.
//!
//! The hook contract itself defines no error kinds; `create_extension`
//! cannot fail. The only fallible SDK operation is manifest validation.

use thiserror::Error;

/// Errors surfaced while validating an extension manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// Manifest name is empty.
    #[error("manifest name must not be empty")]
    MissingName,

    /// Manifest version is empty.
    #[error("manifest version must not be empty")]
    MissingVersion,

    /// Entrypoint does not follow the `module:function` form.
    #[error("invalid entrypoint '{0}': expected `module:function`")]
    InvalidEntrypoint(String),

    /// Declared wall-clock budget is zero.
    #[error("timeout_ms must be greater than zero")]
    ZeroTimeout,
}
