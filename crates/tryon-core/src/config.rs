//! Client Configuration
//!
//! Layered settings: defaults, then compile-time environment, then runtime
//! overrides injected by the host page. Empty values never override.

use serde::Deserialize;

/// One configuration layer; unset fields fall through to lower layers
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
    #[serde(default)]
    pub api_base: Option<String>,
}

impl ConfigLayer {
    /// Layer from `option_env!`-style values
    pub fn from_env(
        supabase_url: Option<&str>,
        supabase_anon_key: Option<&str>,
        api_base: Option<&str>,
    ) -> Self {
        Self {
            supabase_url: supabase_url.map(str::to_string),
            supabase_anon_key: supabase_anon_key.map(str::to_string),
            api_base: api_base.map(str::to_string),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Base URL the backend endpoints are resolved against
    pub api_base: String,
}

fn pick(layers: &[&ConfigLayer], field: fn(&ConfigLayer) -> &Option<String>) -> Option<String> {
    layers
        .iter()
        .rev()
        .filter_map(|l| field(*l).as_deref())
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

impl ClientConfig {
    /// Resolve `layers` (lowest precedence first). `origin` is the API base
    /// when no layer sets one.
    pub fn resolve(layers: &[&ConfigLayer], origin: &str) -> Self {
        Self {
            supabase_url: pick(layers, |l| &l.supabase_url).unwrap_or_default(),
            supabase_anon_key: pick(layers, |l| &l.supabase_anon_key).unwrap_or_default(),
            api_base: pick(layers, |l| &l.api_base).unwrap_or_else(|| origin.to_string()),
        }
    }

    /// Names of required settings that are still empty
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.supabase_url.is_empty() {
            missing.push("supabaseUrl");
        }
        if self.supabase_anon_key.is_empty() {
            missing.push("supabaseAnonKey");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_layer_wins_over_compile_time() {
        let compiled = ConfigLayer::from_env(Some("https://build.supabase.co"), Some("build-key"), None);
        let runtime: ConfigLayer =
            serde_json::from_str(r#"{"supabaseUrl":"https://live.supabase.co","apiBase":"https://api.example"}"#)
                .unwrap();

        let config = ClientConfig::resolve(&[&compiled, &runtime], "https://app.example");
        assert_eq!(config.supabase_url, "https://live.supabase.co");
        assert_eq!(config.supabase_anon_key, "build-key");
        assert_eq!(config.api_base, "https://api.example");
        assert!(config.missing().is_empty());
    }

    #[test]
    fn empty_values_do_not_override() {
        let compiled = ConfigLayer::from_env(Some("https://build.supabase.co"), None, Some("https://api.build"));
        let runtime = ConfigLayer {
            supabase_url: Some("  ".into()),
            api_base: Some(String::new()),
            ..Default::default()
        };

        let config = ClientConfig::resolve(&[&compiled, &runtime], "https://app.example");
        assert_eq!(config.supabase_url, "https://build.supabase.co");
        assert_eq!(config.api_base, "https://api.build");
    }

    #[test]
    fn api_base_defaults_to_origin() {
        let config = ClientConfig::resolve(&[&ConfigLayer::default()], "https://app.example");
        assert_eq!(config.api_base, "https://app.example");
        assert_eq!(config.missing(), vec!["supabaseUrl", "supabaseAnonKey"]);
    }
}
