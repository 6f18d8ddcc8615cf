//! # decisionos-extension-sdk
//!
//! SDK for authoring DecisionOS extensions.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use decisionos_extension_sdk::prelude::*;
//!
//! let handler = ClosureHook::shared_fn(|_config, _ctx| {
//!     config_map! { "ok" => json!(true) }
//! });
//!
//! let extension = create_extension(ExtensionHooks::new(handler));
//!
//! let manifest = ExtensionManifest::new("my-extension", "1.0.0")
//!     .with_permission("decisions:read");
//! manifest.validate()?;
//! ```
//!
//! The returned [`prelude::ExtensionHooks`] bundle and manifest are what a
//! DecisionOS host consumes; how the host loads, orders, and invokes the
//! hooks is outside this SDK.

/// Prelude for convenient imports.
pub mod prelude {
    pub use async_trait::async_trait;
    pub use serde_json::json;

    pub use decisionos_extension::config_map;
    pub use decisionos_extension::context::ExtensionContext;
    pub use decisionos_extension::error::ManifestError;
    pub use decisionos_extension::extension::{ExtensionHooks, create_extension};
    pub use decisionos_extension::hook::{
        ClosureHook, Hook, HookConfig, HookFuture, HookOutput,
    };
    pub use decisionos_extension::manifest::{ExtensionManifest, ResourceLimits};
}
