use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Resolved, session-immutable credentials for the completion endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct OpenAiSection {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct SecretsFile {
    openai: Option<OpenAiSection>,
}

/// Loads credentials from the secrets file. A missing or blank `api_key`
/// is an error; `base_url` and `model` fall back to the documented defaults.
pub fn load_credentials() -> Result<Credentials, String> {
    let path = secrets_path()?;
    let raw = fs::read_to_string(&path).map_err(|err| {
        format!(
            "No API key configured: failed to read secrets file '{}': {err}. \
             Create it with an [openai] section containing api_key.",
            path.display()
        )
    })?;
    credentials_from_str(&raw, &path.display().to_string())
}

/// Returns the configured model if the secrets file provides one, without
/// requiring an API key. Used by dry runs, which never dispatch.
pub fn configured_model() -> String {
    secrets_path()
        .ok()
        .and_then(|path| fs::read_to_string(path).ok())
        .and_then(|raw| toml::from_str::<SecretsFile>(&raw).ok())
        .and_then(|file| file.openai)
        .and_then(|section| section.model)
        .filter(|model| !model.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Validates the secrets file for `config check` and returns its path.
pub fn validate_secrets() -> Result<PathBuf, String> {
    let path = secrets_path()?;
    load_credentials()?;
    Ok(path)
}

fn credentials_from_str(raw: &str, origin: &str) -> Result<Credentials, String> {
    let file: SecretsFile = toml::from_str(raw)
        .map_err(|err| format!("Failed to parse secrets file '{origin}': {err}"))?;

    let section = file
        .openai
        .ok_or_else(|| format!("Secrets file '{origin}' does not contain an [openai] section."))?;

    let api_key = section
        .api_key
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            format!("Secrets file '{origin}' does not set a non-empty openai.api_key.")
        })?;

    Ok(Credentials {
        api_key,
        base_url: section
            .base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        model: section
            .model
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
    })
}

fn secrets_path() -> Result<PathBuf, String> {
    if let Ok(path) = env::var("CW_SECRETS") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let trimmed = xdg.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed).join("chatwiz").join("secrets.toml"));
        }
    }

    let home = env::var("HOME").map_err(|_| {
        "Cannot resolve secrets path: set CW_SECRETS or HOME/XDG_CONFIG_HOME.".to_string()
    })?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("chatwiz")
        .join("secrets.toml"))
}

#[cfg(test)]
mod tests {
    use super::{credentials_from_str, DEFAULT_BASE_URL, DEFAULT_MODEL};

    #[test]
    fn full_section_is_read_verbatim() {
        let creds = credentials_from_str(
            "[openai]\napi_key = \"sk-test\"\nbase_url = \"https://api.deepseek.com\"\nmodel = \"deepseek-chat\"\n",
            "test",
        )
        .expect("credentials should parse");
        assert_eq!(creds.api_key, "sk-test");
        assert_eq!(creds.base_url, "https://api.deepseek.com");
        assert_eq!(creds.model, "deepseek-chat");
    }

    #[test]
    fn base_url_and_model_default_when_absent() {
        let creds = credentials_from_str("[openai]\napi_key = \"sk-test\"\n", "test")
            .expect("credentials should parse");
        assert_eq!(creds.base_url, DEFAULT_BASE_URL);
        assert_eq!(creds.model, DEFAULT_MODEL);
    }

    #[test]
    fn missing_section_is_an_error() {
        let err = credentials_from_str("[other]\nkey = \"x\"\n", "test").unwrap_err();
        assert!(err.contains("[openai] section"));
    }

    #[test]
    fn blank_api_key_is_an_error() {
        let err = credentials_from_str("[openai]\napi_key = \"  \"\n", "test").unwrap_err();
        assert!(err.contains("api_key"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = credentials_from_str("[openai\napi_key = \"x\"", "test").unwrap_err();
        assert!(err.contains("Failed to parse secrets file"));
    }
}
