use crate::genai::{DEFAULT_MODEL, GenAiClient};

/// Credentials baked in at build time. Every field is optional; features
/// whose credential is missing fall back to their offline behavior.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub maps_api_key: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl AppConfig {
    /// Build from raw environment values. Blank values count as unset.
    pub fn from_values(
        gemini_api_key: Option<&str>,
        gemini_model: Option<&str>,
        maps_api_key: Option<&str>,
    ) -> Self {
        Self {
            gemini_api_key: non_empty(gemini_api_key),
            gemini_model: non_empty(gemini_model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            maps_api_key: non_empty(maps_api_key),
        }
    }

    pub fn has_maps_key(&self) -> bool {
        self.maps_api_key.is_some()
    }

    pub fn genai_client(&self) -> GenAiClient {
        GenAiClient::new(self.gemini_api_key.clone(), &self.gemini_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_unset() {
        let config = AppConfig::from_values(Some("  "), None, Some(""));
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert!(!config.has_maps_key());
    }

    #[test]
    fn values_are_trimmed() {
        let config =
            AppConfig::from_values(Some(" key "), Some("gemini-pro"), Some("m"));
        assert_eq!(config.gemini_api_key.as_deref(), Some("key"));
        assert_eq!(config.gemini_model, "gemini-pro");
        assert!(config.has_maps_key());
    }
}
