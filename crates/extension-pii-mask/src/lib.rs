//! PII masking extension for DecisionOS.
//!
//! Masks sensitive keys in decision payloads before they leave the tenant
//! boundary. Ships a `pre` scrubber, a masking `handler`, and a `post`
//! audit summarizer; each hook reads only its own invocation arguments.

pub mod hooks;

pub use hooks::{AuditSummaryHook, MaskHandler, ScrubHook};

use std::sync::Arc;

use decisionos_extension_sdk::prelude::*;

/// Mask token substituted for sensitive values.
pub const MASK_TOKEN: &str = "[REDACTED]";

/// Keys treated as sensitive by default.
pub const DEFAULT_DENY_KEYS: &[&str] = &["ssn", "email", "phone", "account_number"];

/// Builds the manifest for this extension.
pub fn manifest() -> ExtensionManifest {
    ExtensionManifest::new("pii-mask", "0.1.0")
        .with_permission("decisions:read")
        .with_config("mask_token", json!(MASK_TOKEN))
}

/// Assembles the finalized hook bundle for registration with a host.
pub fn hooks() -> ExtensionHooks {
    create_extension(
        ExtensionHooks::new(Arc::new(MaskHandler::new(DEFAULT_DENY_KEYS, MASK_TOKEN)))
            .with_pre(Arc::new(ScrubHook::new(DEFAULT_DENY_KEYS)))
            .with_post(Arc::new(AuditSummaryHook)),
    )
}
