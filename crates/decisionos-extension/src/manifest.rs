//! Extension manifest — metadata an author ships alongside their hooks.
//!
//! The manifest is what the host reads before it ever loads an extension:
//! identity, entrypoint, requested permissions, and declared resource
//! requests. Validation here is an author-side lint; the host applies its
//! own checks at install time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ManifestError;

/// Declared resource requests for an extension.
///
/// These are requests, not guarantees; enforcement happens host-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// CPU budget per invocation, in milliseconds.
    #[serde(default = "default_cpu_ms")]
    pub cpu_ms: u64,
    /// Memory ceiling, in megabytes.
    #[serde(default = "default_memory_mb", rename = "mem_mb")]
    pub memory_mb: u64,
    /// Scratch space ceiling, in megabytes.
    #[serde(default = "default_tmp_mb")]
    pub tmp_mb: u64,
    /// Wall-clock budget per invocation, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_cpu_ms() -> u64 {
    2000
}

fn default_memory_mb() -> u64 {
    256
}

fn default_tmp_mb() -> u64 {
    64
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            cpu_ms: default_cpu_ms(),
            memory_mb: default_memory_mb(),
            tmp_mb: default_tmp_mb(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Manifest describing an extension to the DecisionOS host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Unique extension name.
    pub name: String,
    /// Extension version string.
    pub version: String,
    /// Extension kind, e.g. `decision`.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Entrypoint in `module:function` form.
    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,
    /// Permissions the extension requests from the host.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Target runtime identifier.
    #[serde(default = "default_runtime")]
    pub runtime: String,
    /// Declared resource requests.
    #[serde(default)]
    pub resources: ResourceLimits,
    /// Network access declaration, consumed by the host's egress policy.
    #[serde(default)]
    pub network: HashMap<String, Value>,
    /// Secret names the extension needs scoped access to.
    #[serde(default)]
    pub secrets: Vec<String>,
    /// Host compatibility constraints.
    #[serde(default)]
    pub compat: HashMap<String, Value>,
    /// Default configuration passed to hooks at invocation time.
    #[serde(default)]
    pub config: HashMap<String, Value>,
}

fn default_kind() -> String {
    "decision".to_string()
}

fn default_entrypoint() -> String {
    "extension:handle".to_string()
}

fn default_runtime() -> String {
    "rust".to_string()
}

impl ExtensionManifest {
    /// Creates a manifest with default sections.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            kind: default_kind(),
            entrypoint: default_entrypoint(),
            permissions: Vec::new(),
            runtime: default_runtime(),
            resources: ResourceLimits::default(),
            network: HashMap::new(),
            secrets: Vec::new(),
            compat: HashMap::new(),
            config: HashMap::new(),
        }
    }

    /// Adds a requested permission.
    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permissions.push(permission.to_string());
        self
    }

    /// Adds a required secret name.
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.secrets.push(secret.to_string());
        self
    }

    /// Inserts a default config value.
    pub fn with_config(mut self, key: &str, value: Value) -> Self {
        self.config.insert(key.to_string(), value);
        self
    }

    /// Sets the declared resource requests.
    pub fn with_resources(mut self, resources: ResourceLimits) -> Self {
        self.resources = resources;
        self
    }

    /// Checks the manifest for author mistakes.
    ///
    /// Rejects empty identity fields, entrypoints not of the form
    /// `module:function`, and a zero wall-clock budget.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.name.trim().is_empty() {
            warn!("Manifest rejected: empty name");
            return Err(ManifestError::MissingName);
        }
        if self.version.trim().is_empty() {
            warn!(name = %self.name, "Manifest rejected: empty version");
            return Err(ManifestError::MissingVersion);
        }
        match self.entrypoint.split_once(':') {
            Some((module, function)) if !module.is_empty() && !function.is_empty() => {}
            _ => {
                warn!(
                    name = %self.name,
                    entrypoint = %self.entrypoint,
                    "Manifest rejected: malformed entrypoint"
                );
                return Err(ManifestError::InvalidEntrypoint(self.entrypoint.clone()));
            }
        }
        if self.resources.timeout_ms == 0 {
            warn!(name = %self.name, "Manifest rejected: zero timeout");
            return Err(ManifestError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_manifest_gets_defaults() {
        let manifest: ExtensionManifest =
            serde_json::from_value(serde_json::json!({"name": "demo", "version": "0.1.0"}))
                .unwrap();

        assert_eq!(manifest.kind, "decision");
        assert_eq!(manifest.entrypoint, "extension:handle");
        assert_eq!(manifest.runtime, "rust");
        assert_eq!(manifest.resources, ResourceLimits::default());
        assert!(manifest.permissions.is_empty());
    }

    #[test]
    fn test_resource_requests_deserialize_with_wire_names() {
        let manifest: ExtensionManifest = serde_json::from_value(serde_json::json!({
            "name": "demo",
            "version": "0.1.0",
            "resources": {"mem_mb": 512, "timeout_ms": 1000},
        }))
        .unwrap();

        assert_eq!(manifest.resources.memory_mb, 512);
        assert_eq!(manifest.resources.timeout_ms, 1000);
        assert_eq!(manifest.resources.cpu_ms, 2000);
    }

    #[test]
    fn test_validate_accepts_well_formed_manifest() {
        let manifest = ExtensionManifest::new("demo", "0.1.0")
            .with_permission("decisions:read")
            .with_secret("api_key");

        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let manifest = ExtensionManifest::new("", "0.1.0");
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::MissingName)
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_entrypoint() {
        let mut manifest = ExtensionManifest::new("demo", "0.1.0");
        manifest.entrypoint = "no-separator".to_string();

        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::InvalidEntrypoint(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let manifest = ExtensionManifest::new("demo", "0.1.0").with_resources(ResourceLimits {
            timeout_ms: 0,
            ..ResourceLimits::default()
        });

        assert!(matches!(manifest.validate(), Err(ManifestError::ZeroTimeout)));
    }
}
