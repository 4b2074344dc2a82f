use std::{env, fmt, path::PathBuf, str::FromStr};

use secrecy::SecretString;

const DEV_SECRET_KEY: &str = "dev_secret_key_change_in_production";

/// Chat-completion providers the service knows how to talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    DeepInfra,
    GitHub,
    OpenRouter,
}

impl Provider {
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Provider::DeepInfra => "https://api.deepinfra.com/v1/openai/chat/completions",
            Provider::GitHub => "https://models.inference.ai.azure.com/chat/completions",
            Provider::OpenRouter => "https://openrouter.ai/api/v1/chat/completions",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::DeepInfra => "meta-llama/Meta-Llama-3-8B-Instruct",
            Provider::GitHub => "gpt-4o-mini",
            Provider::OpenRouter => "mistralai/mistral-7b-instruct",
        }
    }

    /// Environment variable holding the credential for this provider.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Provider::DeepInfra => "DEEPINFRA_API_KEY",
            Provider::GitHub => "GITHUB_TOKEN",
            Provider::OpenRouter => "OPENROUTER_API_KEY",
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deepinfra" => Ok(Provider::DeepInfra),
            "github" => Ok(Provider::GitHub),
            "openrouter" => Ok(Provider::OpenRouter),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::DeepInfra => write!(f, "deepinfra"),
            Provider::GitHub => write!(f, "github"),
            Provider::OpenRouter => write!(f, "openrouter"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub provider: Provider,
    pub api_key: Option<SecretString>,
    pub api_url: String,
    pub model: String,
    pub secret_key: SecretString,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub request_timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub fallback_content: bool,
    pub verify_answer_key: bool,
    pub status_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let provider = env::var("UPSKILLR_PROVIDER")
            .ok()
            .and_then(|p| match p.parse::<Provider>() {
                Ok(provider) => Some(provider),
                Err(e) => {
                    log::warn!("{}, falling back to deepinfra", e);
                    None
                }
            })
            .unwrap_or(Provider::DeepInfra);

        Self {
            provider,
            api_key: env::var(provider.api_key_var())
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            api_url: env::var("UPSKILLR_API_URL")
                .unwrap_or_else(|_| provider.default_endpoint().to_string()),
            model: env::var("UPSKILLR_MODEL")
                .unwrap_or_else(|_| provider.default_model().to_string()),
            secret_key: SecretString::from(
                env::var("UPSKILLR_SECRET_KEY").unwrap_or_else(|_| DEV_SECRET_KEY.to_string()),
            ),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_var("PORT").unwrap_or(5000),
            request_timeout_secs: parse_var("UPSKILLR_TIMEOUT_SECS").unwrap_or(20),
            max_tokens: parse_var("UPSKILLR_MAX_TOKENS").unwrap_or(500),
            temperature: parse_var("UPSKILLR_TEMPERATURE").unwrap_or(0.7),
            fallback_content: flag_var("UPSKILLR_FALLBACK_CONTENT"),
            verify_answer_key: flag_var("UPSKILLR_VERIFY_ANSWER_KEY"),
            status_file: env::var("UPSKILLR_STATUS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("last_success.txt")),
        }
    }

    /// Warns about configuration that is fine locally but wrong in production.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.secret_key.expose_secret() == DEV_SECRET_KEY {
            log::warn!("UPSKILLR_SECRET_KEY is using the development default");
        }
        if self.api_key.is_none() {
            log::warn!(
                "{} is not set, generation requests will report the service as unavailable",
                self.provider.api_key_var()
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            provider: Provider::DeepInfra,
            api_key: Some(SecretString::from("test-api-key".to_string())),
            api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            model: "test-model".to_string(),
            secret_key: SecretString::from("test_secret_key".to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            request_timeout_secs: 5,
            max_tokens: 500,
            temperature: 0.7,
            fallback_content: false,
            verify_answer_key: false,
            status_file: PathBuf::from("last_success.txt"),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn flag_var(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
