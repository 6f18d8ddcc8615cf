//! Hook implementations for the PII masking extension.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing;

use decisionos_extension_sdk::prelude::{
    ExtensionContext, Hook, HookConfig, HookOutput, config_map,
};

/// Pre hook: drops denied keys from the invocation payload entirely.
#[derive(Debug)]
pub struct ScrubHook {
    /// Keys to drop.
    deny: Vec<String>,
}

impl ScrubHook {
    /// Creates a scrubber for the given denied keys.
    pub fn new(deny: &[&str]) -> Self {
        Self {
            deny: deny.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[async_trait]
impl Hook for ScrubHook {
    async fn call(&self, config: &HookConfig, ctx: &ExtensionContext) -> HookOutput {
        let mut out = HookOutput::new();
        let mut dropped = 0u64;
        for (key, value) in config {
            if self.deny.contains(key) {
                dropped += 1;
                continue;
            }
            out.insert(key.clone(), value.clone());
        }

        tracing::debug!(trace_id = %ctx.trace_id, dropped, "Scrubbed denied keys from payload");
        out
    }
}

/// Primary hook: replaces values of denied keys with a mask token.
///
/// Keys listed in the invocation context under `allow_keys` are exempt,
/// mirroring host-side masking allowlists.
#[derive(Debug)]
pub struct MaskHandler {
    /// Keys whose values get masked.
    deny: Vec<String>,
    /// Replacement token.
    mask: String,
}

impl MaskHandler {
    /// Creates a masking handler for the given denied keys.
    pub fn new(deny: &[&str], mask: &str) -> Self {
        Self {
            deny: deny.iter().map(|k| k.to_string()).collect(),
            mask: mask.to_string(),
        }
    }

    fn allowlist(ctx: &ExtensionContext) -> Vec<String> {
        ctx.get("allow_keys")
            .and_then(Value::as_array)
            .map(|keys| {
                keys.iter()
                    .filter_map(|k| k.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl Hook for MaskHandler {
    async fn call(&self, config: &HookConfig, ctx: &ExtensionContext) -> HookOutput {
        let allow = Self::allowlist(ctx);
        let mut payload = serde_json::Map::new();
        let mut masked = 0u64;
        for (key, value) in config {
            if self.deny.contains(key) && !allow.contains(key) {
                payload.insert(key.clone(), json!(self.mask));
                masked += 1;
            } else {
                payload.insert(key.clone(), value.clone());
            }
        }

        tracing::info!(trace_id = %ctx.trace_id, masked, "Masked sensitive values");

        config_map! {
            "payload" => Value::Object(payload),
            "masked_total" => json!(masked),
        }
    }
}

/// Post hook: summarizes the masking pass for audit trails.
#[derive(Debug)]
pub struct AuditSummaryHook;

#[async_trait]
impl Hook for AuditSummaryHook {
    async fn call(&self, config: &HookConfig, ctx: &ExtensionContext) -> HookOutput {
        let masked_total = config.get("masked_total").and_then(Value::as_u64).unwrap_or(0);

        tracing::debug!(trace_id = %ctx.trace_id, masked_total, "Recorded masking audit summary");

        config_map! {
            "extension" => json!("pii-mask"),
            "trace_id" => json!(ctx.trace_id),
            "masked_total" => json!(masked_total),
        }
    }
}
