//! Build-time settings for the front-end.
//!
//! Values are baked in with `option_env!` when the wasm bundle is compiled;
//! everything has a default so a plain build works.

use thiserror::Error;

use crate::chatbot::ReplySource;

pub const CHAT_ENDPOINT_VAR: &str = "CAREERHUB_CHAT_ENDPOINT";
pub const AUTH_DELAY_VAR: &str = "CAREERHUB_AUTH_DELAY_MS";
pub const TYPING_DELAY_VAR: &str = "CAREERHUB_TYPING_DELAY_MS";
pub const WELCOME_DELAY_VAR: &str = "CAREERHUB_WELCOME_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { var: &'static str, value: String },

    #[error("{var} is set but empty")]
    EmptyEndpoint { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub reply_source: ReplySource,
    /// Simulated round trip for login and signup.
    pub auth_delay_ms: u32,
    /// How long the bot "types" before a canned reply.
    pub typing_delay_ms: u32,
    pub welcome_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            reply_source: ReplySource::Canned,
            auth_delay_ms: 1000,
            typing_delay_ms: 1500,
            welcome_delay_ms: 500,
        }
    }
}

impl AppConfig {
    /// Reads every setting through `lookup`, which returns the raw value of
    /// a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let reply_source = match lookup(CHAT_ENDPOINT_VAR) {
            Some(endpoint) if endpoint.trim().is_empty() => {
                return Err(ConfigError::EmptyEndpoint {
                    var: CHAT_ENDPOINT_VAR,
                })
            }
            Some(endpoint) => ReplySource::Remote {
                endpoint: endpoint.trim().to_string(),
            },
            None => ReplySource::Canned,
        };

        Ok(AppConfig {
            reply_source,
            auth_delay_ms: delay(&lookup, AUTH_DELAY_VAR, defaults.auth_delay_ms)?,
            typing_delay_ms: delay(&lookup, TYPING_DELAY_VAR, defaults.typing_delay_ms)?,
            welcome_delay_ms: delay(&lookup, WELCOME_DELAY_VAR, defaults.welcome_delay_ms)?,
        })
    }

    pub fn from_build_env() -> Result<Self, ConfigError> {
        AppConfig::from_lookup(|var| {
            let value = match var {
                CHAT_ENDPOINT_VAR => option_env!("CAREERHUB_CHAT_ENDPOINT"),
                AUTH_DELAY_VAR => option_env!("CAREERHUB_AUTH_DELAY_MS"),
                TYPING_DELAY_VAR => option_env!("CAREERHUB_TYPING_DELAY_MS"),
                WELCOME_DELAY_VAR => option_env!("CAREERHUB_WELCOME_DELAY_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

fn delay<F>(lookup: &F, var: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidDelay { var, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(from_pairs(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn endpoint_switches_to_remote() {
        let config = from_pairs(&[(CHAT_ENDPOINT_VAR, " http://localhost:5000/api/chat ")]).unwrap();
        assert_eq!(
            config.reply_source,
            ReplySource::Remote {
                endpoint: "http://localhost:5000/api/chat".into()
            }
        );
    }

    #[test]
    fn delays_parse() {
        let config = from_pairs(&[(AUTH_DELAY_VAR, "0"), (TYPING_DELAY_VAR, " 250")]).unwrap();
        assert_eq!(config.auth_delay_ms, 0);
        assert_eq!(config.typing_delay_ms, 250);
        assert_eq!(config.welcome_delay_ms, 500);
    }

    #[test]
    fn bad_values_are_errors() {
        assert_eq!(
            from_pairs(&[(WELCOME_DELAY_VAR, "soon")]),
            Err(ConfigError::InvalidDelay {
                var: WELCOME_DELAY_VAR,
                value: "soon".into()
            })
        );
        assert_eq!(
            from_pairs(&[(CHAT_ENDPOINT_VAR, "  ")]),
            Err(ConfigError::EmptyEndpoint {
                var: CHAT_ENDPOINT_VAR
            })
        );
    }
}
