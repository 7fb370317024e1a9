//! Relay configuration, read from flags or the environment.

use clap::Parser;

use crate::completion::OpenAiConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "sms-relay")]
#[command(about = "Answer incoming text messages with a hosted language model")]
#[command(version)]
pub struct RelayConfig {
    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Root URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com")]
    pub base_url: String,

    /// Model used to answer questions
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seconds to wait for the completion API
    #[arg(long, env = "OPENAI_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl RelayConfig {
    pub fn completion_config(&self) -> OpenAiConfig {
        OpenAiConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_model(self.model.clone())
            .with_timeout(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_with_only_a_key() {
        let config = RelayConfig::try_parse_from(["sms-relay", "--api-key", "sk-test"]).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");

        let completion = config.completion_config();
        assert_eq!(completion.base_url, "https://api.openai.com");
        assert_eq!(completion.api_key, "sk-test");
        assert_eq!(completion.max_tokens, 300);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = RelayConfig::try_parse_from([
            "sms-relay",
            "--api-key",
            "k",
            "--port",
            "8080",
            "--base-url",
            "http://localhost:11434",
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.completion_config().base_url, "http://localhost:11434");
    }
}
