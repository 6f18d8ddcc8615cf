//! Extension hook bundles and the authoring entry point.

use std::sync::Arc;

use crate::hook::Hook;

/// The bundle of hooks an extension hands to the DecisionOS host.
///
/// `handler` is the extension's primary logic and is always present;
/// `pre` and `post` are optional stages the host may run around it. This
/// crate attaches no ordering or data-flow semantics to the three slots;
/// whether `pre` output feeds `handler` input is a host decision.
#[derive(Debug, Clone)]
pub struct ExtensionHooks {
    /// Hook intended to run before the main handler.
    pub pre: Option<Arc<dyn Hook>>,
    /// The extension's primary hook.
    pub handler: Arc<dyn Hook>,
    /// Hook intended to run after the main handler.
    pub post: Option<Arc<dyn Hook>>,
}

impl ExtensionHooks {
    /// Creates a bundle containing only the mandatory handler.
    pub fn new(handler: Arc<dyn Hook>) -> Self {
        Self {
            pre: None,
            handler,
            post: None,
        }
    }

    /// Attaches a pre hook.
    pub fn with_pre(mut self, hook: Arc<dyn Hook>) -> Self {
        self.pre = Some(hook);
        self
    }

    /// Attaches a post hook.
    pub fn with_post(mut self, hook: Arc<dyn Hook>) -> Self {
        self.post = Some(hook);
        self
    }
}

/// Finalizes a hook bundle for handoff to the host.
///
/// Identity at the value level: the bundle is returned unchanged, nothing
/// is cloned or defaulted, and no contained hook is invoked. The mandatory
/// `handler` slot is already guaranteed by [`ExtensionHooks::new`], so
/// there is nothing to validate and the call cannot fail.
pub fn create_extension(hooks: ExtensionHooks) -> ExtensionHooks {
    hooks
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::context::ExtensionContext;
    use crate::hook::{ClosureHook, HookConfig, HookOutput};

    #[derive(Debug)]
    struct CountingHook {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Hook for CountingHook {
        async fn call(&self, _config: &HookConfig, _ctx: &ExtensionContext) -> HookOutput {
            self.calls.fetch_add(1, Ordering::SeqCst);
            HookOutput::new()
        }
    }

    #[test]
    fn test_identity_for_handler_only_bundle() {
        let handler = ClosureHook::shared_fn(|_, _| HookOutput::new());
        let bundle = ExtensionHooks::new(handler.clone());

        let result = create_extension(bundle);

        assert!(Arc::ptr_eq(&result.handler, &handler));
        assert!(result.pre.is_none());
        assert!(result.post.is_none());
    }

    #[test]
    fn test_identity_for_full_bundle() {
        let pre = ClosureHook::shared_fn(|_, _| HookOutput::new());
        let handler = ClosureHook::shared_fn(|_, _| HookOutput::new());
        let post = ClosureHook::shared_fn(|_, _| HookOutput::new());

        let result = create_extension(
            ExtensionHooks::new(handler.clone())
                .with_pre(pre.clone())
                .with_post(post.clone()),
        );

        assert!(Arc::ptr_eq(result.pre.as_ref().unwrap(), &pre));
        assert!(Arc::ptr_eq(&result.handler, &handler));
        assert!(Arc::ptr_eq(result.post.as_ref().unwrap(), &post));
    }

    #[test]
    fn test_create_extension_does_not_invoke_hooks() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler: Arc<dyn Hook> = Arc::new(CountingHook {
            calls: calls.clone(),
        });

        let _bundle = create_extension(ExtensionHooks::new(handler));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_handler_invocation_after_handoff() {
        let handler = ClosureHook::shared_fn(|_config, _ctx| {
            crate::config_map! { "ok" => serde_json::json!(true) }
        });
        let bundle = create_extension(ExtensionHooks::new(handler));

        let ctx = ExtensionContext::new("t1");
        let output = bundle.handler.call(&HookConfig::new(), &ctx).await;

        assert_eq!(output.get("ok"), Some(&serde_json::json!(true)));
    }
}
