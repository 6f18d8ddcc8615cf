//! # decisionos-extension
//!
//! Extension contract for the DecisionOS platform. Provides:
//!
//! - The [`Hook`] trait implemented by every extension stage
//! - [`ExtensionContext`] handed to hooks at invocation time
//! - [`ExtensionHooks`] bundles with `pre`/`handler`/`post` slots
//! - [`create_extension`] as the authoring handoff point
//! - [`ExtensionManifest`] metadata shipped alongside the hooks
//!
//! The host runtime that loads extensions and invokes their hooks lives
//! outside this crate; nothing here schedules, orders, or chains hook
//! execution.

pub mod context;
pub mod error;
pub mod extension;
pub mod hook;
pub mod macros;
pub mod manifest;

pub use context::ExtensionContext;
pub use error::ManifestError;
pub use extension::{ExtensionHooks, create_extension};
pub use hook::{ClosureHook, Hook, HookConfig, HookFuture, HookOutput};
pub use manifest::{ExtensionManifest, ResourceLimits};
