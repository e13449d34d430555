use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};

use dualchat::secret_store::{SecretStore, API_KEY_NAME};
use dualchat::{GeneratorBuilder, ResponseGenerator};

use crate::args::CliArgs;
use crate::config::{AppConfig, ProviderConfig};

const DEFAULT_KEY_ENVS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub(super) fn build_generator(
    args: &CliArgs,
    config: &AppConfig,
) -> anyhow::Result<ResponseGenerator> {
    let store = SecretStore::new()
        .map_err(|err| log::warn!("secret store unavailable: {err}"))
        .ok();
    let api_key = resolve_api_key(
        args.api_key.as_deref(),
        &config.provider,
        |name| std::env::var(name).ok(),
        store.as_ref(),
    )
    .context("no API key: pass --api-key, set GEMINI_API_KEY or run `dualchat key set <KEY>`")?;

    let mode = args.mode.unwrap_or(config.chat.default_mode);
    let mut builder = GeneratorBuilder::new()
        .api_key(api_key.expose_secret().as_str())
        .modes(config.modes.to_table())
        .fallback(config.chat.fallback.clone());
    if let Some(model) = &args.model {
        builder = builder.model(mode, model.as_str());
    }
    if let Some(url) = args.base_url.as_ref().or(config.provider.base_url.as_ref()) {
        builder = builder.base_url(url.as_str());
    }
    if let Some(timeout) = config.provider.timeout_seconds {
        builder = builder.timeout_seconds(timeout);
    }
    if let Some(system) = args
        .system
        .as_ref()
        .or(config.chat.system_instruction.as_ref())
    {
        builder = builder.system_instruction(system.as_str());
    }
    if config.retry.enabled {
        builder = builder.resilience(config.retry.policy.clone());
    }
    Ok(builder.build()?)
}

/// Flag, then config file, then environment, then the secret store.
pub(super) fn resolve_api_key(
    flag: Option<&str>,
    provider: &ProviderConfig,
    env: impl Fn(&str) -> Option<String>,
    store: Option<&SecretStore>,
) -> Option<SecretString> {
    let non_empty = |value: &str| !value.trim().is_empty();

    if let Some(key) = flag.filter(|k| non_empty(k)) {
        return Some(SecretString::new(key.to_string()));
    }
    if let Some(key) = provider.api_key.as_deref().filter(|k| non_empty(k)) {
        return Some(SecretString::new(key.to_string()));
    }
    let from_env = match &provider.api_key_env {
        Some(name) => env(name).filter(|k| non_empty(k)),
        None => DEFAULT_KEY_ENVS
            .iter()
            .find_map(|name| env(name).filter(|k| non_empty(k))),
    };
    if let Some(key) = from_env {
        return Some(SecretString::new(key));
    }
    store
        .and_then(|store| store.get_secret(API_KEY_NAME))
        .map(|secret| SecretString::new(secret.expose_secret().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn resolved(
        flag: Option<&str>,
        provider: &ProviderConfig,
        env: &[(&str, &str)],
        store: Option<&SecretStore>,
    ) -> Option<String> {
        resolve_api_key(flag, provider, env_of(env), store).map(|k| k.expose_secret().clone())
    }

    #[test]
    fn flag_beats_everything() {
        let provider = ProviderConfig {
            api_key: Some("from-config".into()),
            ..ProviderConfig::default()
        };
        let key = resolved(
            Some("from-flag"),
            &provider,
            &[("GEMINI_API_KEY", "from-env")],
            None,
        );
        assert_eq!(key.as_deref(), Some("from-flag"));
    }

    #[test]
    fn config_beats_env() {
        let provider = ProviderConfig {
            api_key: Some("from-config".into()),
            ..ProviderConfig::default()
        };
        let key = resolved(None, &provider, &[("GEMINI_API_KEY", "from-env")], None);
        assert_eq!(key.as_deref(), Some("from-config"));
    }

    #[test]
    fn env_falls_back_to_api_key() {
        let key = resolved(None, &ProviderConfig::default(), &[("API_KEY", "plain")], None);
        assert_eq!(key.as_deref(), Some("plain"));
    }

    #[test]
    fn blank_gemini_key_falls_through_to_api_key() {
        let key = resolved(
            None,
            &ProviderConfig::default(),
            &[("GEMINI_API_KEY", ""), ("API_KEY", "plain")],
            None,
        );
        assert_eq!(key.as_deref(), Some("plain"));
    }

    #[test]
    fn custom_env_name_replaces_defaults() {
        let provider = ProviderConfig {
            api_key_env: Some("MY_KEY".into()),
            ..ProviderConfig::default()
        };
        let key = resolved(
            None,
            &provider,
            &[("MY_KEY", "mine"), ("GEMINI_API_KEY", "other")],
            None,
        );
        assert_eq!(key.as_deref(), Some("mine"));
    }

    #[test]
    fn store_is_last_resort() {
        let dir = tempdir().unwrap();
        let mut store = SecretStore::open_at(dir.path().join("secrets.json")).unwrap();
        store.set(API_KEY_NAME, "stored").unwrap();

        let key = resolved(Some("  "), &ProviderConfig::default(), &[], Some(&store));
        assert_eq!(key.as_deref(), Some("stored"));
        assert_eq!(resolved(None, &ProviderConfig::default(), &[], None), None);
    }
}
