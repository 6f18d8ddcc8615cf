//! The hook contract implemented by extension authors.
//!
//! A hook receives the invocation-time configuration and an
//! [`ExtensionContext`] from the host and produces a string-keyed output
//! map. Hooks that compute asynchronously implement [`Hook`] directly or
//! use [`ClosureHook::new`]; synchronous ones are adapted with
//! [`ClosureHook::from_fn`] and return a ready future.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::context::ExtensionContext;

/// Configuration map handed to a hook at invocation time.
///
/// Distinct from [`ExtensionContext::config`]; how the two maps relate is
/// decided by the host.
pub type HookConfig = HashMap<String, Value>;

/// Output map produced by a hook.
pub type HookOutput = HashMap<String, Value>;

/// Boxed future returned by closure-backed hooks.
pub type HookFuture<'a> = Pin<Box<dyn Future<Output = HookOutput> + Send + 'a>>;

/// Trait for extension hook implementations.
///
/// This crate only types the shape and never invokes a hook. Scheduling,
/// ordering, and cancellation belong to the host.
#[async_trait]
pub trait Hook: Send + Sync + std::fmt::Debug {
    /// Handles one hook invocation.
    async fn call(&self, config: &HookConfig, ctx: &ExtensionContext) -> HookOutput;
}

type HookFn =
    dyn for<'a> Fn(&'a HookConfig, &'a ExtensionContext) -> HookFuture<'a> + Send + Sync;

/// A closure-based hook for quick hook creation.
pub struct ClosureHook {
    /// Hook function.
    handler: Arc<HookFn>,
}

impl std::fmt::Debug for ClosureHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureHook")
            .field("handler", &"<closure>")
            .finish()
    }
}

impl ClosureHook {
    /// Creates a hook from an async closure.
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(&HookConfig, &ExtensionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookOutput> + Send + 'static,
    {
        Self {
            handler: Arc::new(move |config, ctx| {
                let fut = handler(config, ctx);
                Box::pin(fut)
            }),
        }
    }

    /// Creates a hook from a synchronous function.
    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(&HookConfig, &ExtensionContext) -> HookOutput + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(move |config, ctx| {
                let output = handler(config, ctx);
                Box::pin(std::future::ready(output))
            }),
        }
    }

    /// Wraps a synchronous function into an `Arc<dyn Hook>`.
    pub fn shared_fn<F>(handler: F) -> Arc<dyn Hook>
    where
        F: Fn(&HookConfig, &ExtensionContext) -> HookOutput + Send + Sync + 'static,
    {
        Arc::new(Self::from_fn(handler))
    }
}

#[async_trait]
impl Hook for ClosureHook {
    async fn call(&self, config: &HookConfig, ctx: &ExtensionContext) -> HookOutput {
        (self.handler)(config, ctx).await
    }
}
