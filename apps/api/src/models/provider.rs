use serde::{Deserialize, Serialize};

/// The fixed set of AI providers a user can configure. Iteration always
/// goes through [`AiProvider::ALL`] — never over runtime map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAi,
    Anthropic,
    Gemini,
}

impl AiProvider {
    pub const ALL: [AiProvider; 3] = [
        AiProvider::OpenAi,
        AiProvider::Anthropic,
        AiProvider::Gemini,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::Gemini => "gemini",
        }
    }

    pub fn parse(s: &str) -> Option<AiProvider> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Some(AiProvider::OpenAi),
            "anthropic" => Some(AiProvider::Anthropic),
            "gemini" => Some(AiProvider::Gemini),
            _ => None,
        }
    }
}

/// One provider's configuration record. Keys are stored but never used
/// to call out — recommendation enrichment is local static data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub enabled: bool,
}

/// Explicit per-provider settings, one field per known provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub openai: ProviderSettings,
    #[serde(default)]
    pub anthropic: ProviderSettings,
    #[serde(default)]
    pub gemini: ProviderSettings,
}

impl ProviderConfig {
    pub fn get(&self, provider: AiProvider) -> &ProviderSettings {
        match provider {
            AiProvider::OpenAi => &self.openai,
            AiProvider::Anthropic => &self.anthropic,
            AiProvider::Gemini => &self.gemini,
        }
    }

    pub fn set(&mut self, provider: AiProvider, settings: ProviderSettings) {
        match provider {
            AiProvider::OpenAi => self.openai = settings,
            AiProvider::Anthropic => self.anthropic = settings,
            AiProvider::Gemini => self.gemini = settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_all_known_providers() {
        for provider in AiProvider::ALL {
            assert_eq!(AiProvider::parse(provider.as_str()), Some(provider));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(AiProvider::parse("OpenAI"), Some(AiProvider::OpenAi));
        assert_eq!(AiProvider::parse(" Gemini "), Some(AiProvider::Gemini));
    }

    #[test]
    fn test_parse_rejects_unknown_provider() {
        assert_eq!(AiProvider::parse("mistral"), None);
        assert_eq!(AiProvider::parse(""), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut config = ProviderConfig::default();
        let settings = ProviderSettings {
            api_key: "sk-test".to_string(),
            enabled: true,
        };
        config.set(AiProvider::Anthropic, settings.clone());
        assert_eq!(config.get(AiProvider::Anthropic), &settings);
        assert_eq!(config.get(AiProvider::OpenAi), &ProviderSettings::default());
    }
}
