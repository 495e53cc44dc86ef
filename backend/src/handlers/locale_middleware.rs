use std::sync::Arc;

use axum::{
    body::{self, Body},
    extract::State,
    http::{header, uri::PathAndQuery, Request, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, error, warn};

use crate::utils::locale::{self, Locale, LocaleAction, LocaleSettings};

/// Upper bound for a page document buffered to set its language.
const MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

static HTML_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<html\b[^>]*>").expect("html tag pattern is valid"));
static LANG_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\slang\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#).expect("lang pattern is valid"));

fn with_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path.to_string(),
    }
}

fn rewritten_uri(uri: &Uri, path: &str) -> Option<Uri> {
    let path_and_query = PathAndQuery::try_from(with_query(path, uri.query())).ok()?;
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    Uri::from_parts(parts).ok()
}

/// Sets the `lang` attribute of the `<html>` tag, adding it when missing.
///
/// The single page app reads it when the visible URL has no language segment.
pub fn set_document_lang(html: &str, locale: Locale) -> String {
    let Some(tag) = HTML_TAG_RE.find(html) else {
        return html.to_string();
    };
    let lang = format!(" lang=\"{}\"", locale.code());
    let new_tag = if LANG_ATTR_RE.is_match(tag.as_str()) {
        LANG_ATTR_RE.replace(tag.as_str(), lang.as_str()).into_owned()
    } else {
        format!("<html{}{}", lang, &tag.as_str()["<html".len()..])
    };
    format!("{}{}{}", &html[..tag.start()], new_tag, &html[tag.end()..])
}

async fn localize_document(response: Response, locale: Locale) -> Response {
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("text/html"));
    if !is_html {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match body::to_bytes(body, MAX_DOCUMENT_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to buffer page document: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let Ok(html) = std::str::from_utf8(&bytes) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(set_document_lang(html, locale)))
}

/// Makes sure every page request carries a language segment.
///
/// Has to wrap the whole router: a rewritten path must be visible to routing.
pub async fn resolve_locale(
    State(settings): State<Arc<LocaleSettings>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let decision = locale::resolve(request.uri().path(), &settings);

    match decision.action {
        LocaleAction::PassThrough => {
            let response = next.run(request).await;
            match decision.detected_locale {
                Some(locale) => localize_document(response, locale).await,
                None => response,
            }
        }
        LocaleAction::RedirectTo(path) => {
            let target = with_query(&path, request.uri().query());
            debug!("Redirecting {} to {}", decision.request_path, target);
            Redirect::temporary(&target).into_response()
        }
        LocaleAction::RewriteTo(path) => {
            match rewritten_uri(request.uri(), &path) {
                Some(uri) => {
                    debug!("Rewriting {} to {}", decision.request_path, path);
                    *request.uri_mut() = uri;
                }
                None => warn!("Could not rewrite {} to {}, serving it unchanged", decision.request_path, path),
            }
            let response = next.run(request).await;
            localize_document(response, settings.default).await
        }
    }
}
