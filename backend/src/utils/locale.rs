use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    Pt,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::Pt => "pt",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Locale::Es),
            "pt" => Ok(Locale::Pt),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// What to do with a request whose path has no locale prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalePolicy {
    /// Always answer with a redirect to `/{default}{path}`.
    Redirect,
    /// Redirect only `/`; every other path is served from `/{default}{path}`
    /// while the visible URL stays untouched.
    Rewrite,
}

impl FromStr for LocalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redirect" => Ok(LocalePolicy::Redirect),
            "rewrite" => Ok(LocalePolicy::Rewrite),
            other => Err(format!("unknown locale policy '{}', expected 'redirect' or 'rewrite'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocaleSettings {
    pub supported: Vec<Locale>,
    pub default: Locale,
    pub policy: LocalePolicy,
    /// Path prefixes that never get a locale (API, bundled assets, ...).
    pub excluded_prefixes: Vec<String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            supported: Locale::ALL.to_vec(),
            default: Locale::Es,
            policy: LocalePolicy::Redirect,
            excluded_prefixes: vec![
                "/api".to_string(),
                "/assets".to_string(),
                "/favicon.ico".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleAction {
    PassThrough,
    RedirectTo(String),
    RewriteTo(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDecision {
    pub request_path: String,
    pub detected_locale: Option<Locale>,
    pub action: LocaleAction,
}

impl LocaleDecision {
    /// Path the request ends up being served from.
    pub fn effective_path(&self) -> &str {
        match &self.action {
            LocaleAction::PassThrough => &self.request_path,
            LocaleAction::RedirectTo(path) | LocaleAction::RewriteTo(path) => path,
        }
    }
}

/// Returns the supported locale the path is prefixed with, if any.
pub fn detect_locale(path: &str, supported: &[Locale]) -> Option<Locale> {
    supported.iter().copied().find(|locale| {
        let prefix = format!("/{}", locale.code());
        path == prefix || path.starts_with(&format!("{}/", prefix))
    })
}

/// Extensions the frontend build emits; page slugs may still contain dots.
const ASSET_EXTENSIONS: &[&str] = &[
    "wasm", "js", "mjs", "css", "map", "ico", "png", "jpg", "jpeg", "webp", "gif", "svg",
    "woff", "woff2", "ttf", "txt", "xml", "json", "webmanifest",
];

fn is_asset(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .and_then(|segment| segment.rsplit_once('.'))
        .map_or(false, |(stem, ext)| {
            !stem.is_empty() && ASSET_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        })
}

fn is_excluded(path: &str, settings: &LocaleSettings) -> bool {
    let excluded_prefix = settings.excluded_prefixes.iter().any(|prefix| {
        path == prefix
            || path
                .strip_prefix(prefix.as_str())
                .map_or(false, |rest| rest.starts_with('/'))
    });
    excluded_prefix || is_asset(path)
}

pub fn resolve(path: &str, settings: &LocaleSettings) -> LocaleDecision {
    let request_path = if path.is_empty() { "/" } else { path };
    let detected_locale = detect_locale(request_path, &settings.supported);

    if detected_locale.is_some() || is_excluded(request_path, settings) {
        return LocaleDecision {
            request_path: request_path.to_string(),
            detected_locale,
            action: LocaleAction::PassThrough,
        };
    }

    let default = settings.default.code();
    let action = match settings.policy {
        LocalePolicy::Redirect => LocaleAction::RedirectTo(format!("/{}{}", default, request_path)),
        LocalePolicy::Rewrite if request_path == "/" => LocaleAction::RedirectTo(format!("/{}", default)),
        LocalePolicy::Rewrite => LocaleAction::RewriteTo(format!("/{}{}", default, request_path)),
    };

    LocaleDecision {
        request_path: request_path.to_string(),
        detected_locale: None,
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(default: Locale, policy: LocalePolicy) -> LocaleSettings {
        LocaleSettings {
            default,
            policy,
            ..LocaleSettings::default()
        }
    }

    #[test]
    fn prefixed_paths_pass_through() {
        let settings = LocaleSettings::default();
        for path in ["/es", "/es/", "/pt/servicios", "/pt"] {
            let decision = resolve(path, &settings);
            assert_eq!(decision.action, LocaleAction::PassThrough, "{}", path);
            assert!(decision.detected_locale.is_some());
        }
        assert_eq!(resolve("/pt/faq", &settings).detected_locale, Some(Locale::Pt));
    }

    #[test]
    fn lookalike_prefix_is_not_a_locale() {
        let decision = resolve("/espanol", &LocaleSettings::default());
        assert_eq!(decision.detected_locale, None);
        assert_eq!(decision.action, LocaleAction::RedirectTo("/es/espanol".to_string()));
    }

    #[test]
    fn redirect_policy_prefixes_the_default_only() {
        for default in Locale::ALL {
            let settings = settings(default, LocalePolicy::Redirect);
            for path in ["/", "/contacto", "/a/b/c"] {
                let decision = resolve(path, &settings);
                let expected = format!("/{}{}", default.code(), path);
                assert_eq!(decision.action, LocaleAction::RedirectTo(expected.clone()));
                assert_eq!(decision.effective_path(), expected);
            }
        }
    }

    #[test]
    fn rewrite_policy_redirects_root_and_rewrites_the_rest() {
        let settings = settings(Locale::Pt, LocalePolicy::Rewrite);
        assert_eq!(resolve("/", &settings).action, LocaleAction::RedirectTo("/pt".to_string()));
        assert_eq!(
            resolve("/portafolio", &settings).action,
            LocaleAction::RewriteTo("/pt/portafolio".to_string())
        );
    }

    #[test]
    fn resolving_the_effective_path_again_is_stable() {
        for policy in [LocalePolicy::Redirect, LocalePolicy::Rewrite] {
            let settings = settings(Locale::Es, policy);
            for path in ["/", "/precios", "/es/precios"] {
                let first = resolve(path, &settings);
                let second = resolve(first.effective_path(), &settings);
                assert_eq!(second.action, LocaleAction::PassThrough);
                assert_eq!(second.effective_path(), first.effective_path());
            }
        }
    }

    #[test]
    fn api_and_static_files_are_left_alone() {
        let settings = LocaleSettings::default();
        for path in ["/api", "/api/send-email", "/assets/logo.png", "/favicon.ico", "/frontend-9f3a.wasm"] {
            let decision = resolve(path, &settings);
            assert_eq!(decision.action, LocaleAction::PassThrough, "{}", path);
            assert_eq!(decision.detected_locale, None);
        }
        assert_eq!(resolve("/es/logo.png", &settings).detected_locale, Some(Locale::Es));
        assert_eq!(resolve("/pt/bundle.css", &settings).action, LocaleAction::PassThrough);
        // "/apis" only shares the letters with "/api".
        assert!(matches!(resolve("/apis", &settings).action, LocaleAction::RedirectTo(_)));
    }

    #[test]
    fn dotted_page_slugs_still_get_a_locale() {
        let settings = LocaleSettings::default();
        for path in ["/blog/jose.garcia", "/v1.2", "/.well-known"] {
            let decision = resolve(path, &settings);
            assert_eq!(decision.detected_locale, None);
            assert_eq!(decision.action, LocaleAction::RedirectTo(format!("/es{}", path)), "{}", path);
        }
        assert_eq!(resolve("/img/hero.WEBP", &settings).action, LocaleAction::PassThrough);
    }

    #[test]
    fn parses_locale_and_policy_names() {
        assert_eq!("pt".parse::<Locale>(), Ok(Locale::Pt));
        assert!("en".parse::<Locale>().is_err());
        assert_eq!("Rewrite".parse::<LocalePolicy>(), Ok(LocalePolicy::Rewrite));
        assert!("forward".parse::<LocalePolicy>().is_err());
    }
}
