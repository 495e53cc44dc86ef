use std::net::SocketAddr;
use std::path::PathBuf;

use crate::utils::locale::{Locale, LocalePolicy, LocaleSettings};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
pub const DEFAULT_MAIL_FROM: &str = "Hero&Framer Studio <info@landingpages.protoly.lat>";
pub const DEFAULT_MAIL_TO: &str = "criquelme@perceivoai.agency";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct MailSettings {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub resend_api_key: String,
    pub mail: MailSettings,
    pub locale: LocaleSettings,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let resend_api_key = non_empty("RESEND_API_KEY").ok_or(ConfigError::Missing("RESEND_API_KEY"))?;

        let bind_addr = non_empty("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let default_locale = match non_empty("DEFAULT_LOCALE") {
            Some(value) => value.parse::<Locale>().map_err(|e| ConfigError::Invalid {
                key: "DEFAULT_LOCALE",
                reason: e.to_string(),
            })?,
            None => Locale::Es,
        };

        let policy = match non_empty("LOCALE_POLICY") {
            Some(value) => value
                .parse::<LocalePolicy>()
                .map_err(|reason| ConfigError::Invalid {
                    key: "LOCALE_POLICY",
                    reason,
                })?,
            None => LocalePolicy::Redirect,
        };

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
            resend_api_key,
            mail: MailSettings {
                from: non_empty("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
                to: non_empty("MAIL_TO").unwrap_or_else(|| DEFAULT_MAIL_TO.to_string()),
            },
            locale: LocaleSettings {
                default: default_locale,
                policy,
                ..LocaleSettings::default()
            },
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_the_api_key_is_set() {
        let config = AppConfig::from_lookup(lookup(&[("RESEND_API_KEY", "re_test")])).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.mail.to, DEFAULT_MAIL_TO);
        assert_eq!(config.locale.default, Locale::Es);
        assert_eq!(config.locale.policy, LocalePolicy::Redirect);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn missing_api_key_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[("RESEND_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("RESEND_API_KEY")));
    }

    #[test]
    fn locale_overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "re_test"),
            ("DEFAULT_LOCALE", "pt"),
            ("LOCALE_POLICY", "rewrite"),
        ]))
        .unwrap();
        assert_eq!(config.locale.default, Locale::Pt);
        assert_eq!(config.locale.policy, LocalePolicy::Rewrite);
    }

    #[test]
    fn invalid_values_name_their_key() {
        let err = AppConfig::from_lookup(lookup(&[("RESEND_API_KEY", "re_test"), ("DEFAULT_LOCALE", "en")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DEFAULT_LOCALE", .. }));

        let err = AppConfig::from_lookup(lookup(&[("RESEND_API_KEY", "re_test"), ("BIND_ADDR", "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
    }
}
