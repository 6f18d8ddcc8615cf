//! Convenience macros for extension authoring.

/// Macro for building a string-keyed value map.
///
/// Produces the `HashMap<String, serde_json::Value>` shape used for hook
/// configs and outputs.
///
/// # Example
/// ```rust,ignore
/// let config = config_map! {
///     "mask_token" => json!("[REDACTED]"),
///     "max_depth" => json!(4),
/// };
/// ```
#[macro_export]
macro_rules! config_map {
    () => {
        ::std::collections::HashMap::<::std::string::String, ::serde_json::Value>::new()
    };
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map =
            ::std::collections::HashMap::<::std::string::String, ::serde_json::Value>::new();
        $(
            map.insert($key.to_string(), $value);
        )*
        map
    }};
}
