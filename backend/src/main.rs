use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
    middleware,
};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::path::Path;
use std::sync::Arc;

mod handlers {
    pub mod email_dtos;
    pub mod email_handlers;
    pub mod locale_middleware;
}
mod api {
    pub mod resend_mailer;
}
mod config {
    pub mod app_config;
}
mod utils {
    pub mod email_template;
    pub mod locale;
}

use api::resend_mailer::{Mailer, ResendMailer};
use config::app_config::{AppConfig, MailSettings};
use handlers::email_handlers;
use handlers::locale_middleware;
use utils::locale::LocaleSettings;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    mailer: Arc<dyn Mailer>,
    mail: MailSettings,
}

pub fn build_app(state: Arc<AppState>, locale: LocaleSettings, static_dir: &Path) -> Router {
    // Unknown paths under a locale are client-side routes of the single page app.
    let spa = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    let routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/send-email", post(email_handlers::send_email))
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(tower_http::cors::Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state);

    // Layers added through Router::layer run after routing, so the locale
    // middleware wraps the finished router instead.
    let localized = middleware::from_fn_with_state(Arc::new(locale), locale_middleware::resolve_locale)
        .layer(routes);

    Router::new().fallback_service(localized)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let state = Arc::new(AppState {
        mailer: Arc::new(ResendMailer::new(&config.resend_api_key)),
        mail: config.mail.clone(),
    });

    info!(
        "Default locale '{}' with {:?} policy, serving {}",
        config.locale.default,
        config.locale.policy,
        config.static_dir.display()
    );
    let app = build_app(state, config.locale.clone(), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::resend_mailer::{MailError, MockMailer};
    use crate::utils::locale::{Locale, LocalePolicy};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX: &str = "<html><body>heroframer</body></html>";

    fn static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("heroframer-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        dir
    }

    fn app_with(mailer: MockMailer, policy: LocalePolicy, name: &str) -> Router {
        app_with_default(mailer, policy, Locale::Es, name)
    }

    fn app_with_default(mailer: MockMailer, policy: LocalePolicy, default: Locale, name: &str) -> Router {
        let state = Arc::new(AppState {
            mailer: Arc::new(mailer),
            mail: MailSettings {
                from: "studio@example.com".to_string(),
                to: "sales@example.com".to_string(),
            },
        });
        let locale = LocaleSettings {
            policy,
            default,
            ..LocaleSettings::default()
        };
        build_app(state, locale, &static_dir(name))
    }

    fn contact_body() -> Value {
        json!({
            "name": "Ana García",
            "email": "ana@example.com",
            "company": "Acme",
            "whatsapp": "+56 9 1234 5678",
            "plan": "grow",
            "message": "Necesito una landing"
        })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn text_body(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_skips_locale_handling() {
        let app = app_with(MockMailer::new(), LocalePolicy::Redirect, "health");
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unprefixed_page_redirects_to_default_locale() {
        let app = app_with(MockMailer::new(), LocalePolicy::Redirect, "redirect");
        let response = app
            .oneshot(Request::get("/precios?utm=ads").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/es/precios?utm=ads");
    }

    #[tokio::test]
    async fn prefixed_page_serves_the_app_shell() {
        let app = app_with(MockMailer::new(), LocalePolicy::Redirect, "prefixed");
        let response = app
            .oneshot(Request::get("/pt/servicos").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text_body(response).await, r#"<html lang="pt"><body>heroframer</body></html>"#);
    }

    #[tokio::test]
    async fn rewritten_page_is_served_in_the_configured_default() {
        let app = app_with_default(MockMailer::new(), LocalePolicy::Rewrite, Locale::Pt, "rewrite-pt");
        let response = app
            .oneshot(Request::get("/portafolio").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text_body(response).await.starts_with(r#"<html lang="pt">"#));
    }

    #[tokio::test]
    async fn rewrite_policy_serves_without_redirecting() {
        let app = app_with(MockMailer::new(), LocalePolicy::Rewrite, "rewrite");
        let response = app
            .clone()
            .oneshot(Request::get("/portafolio").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/es");
    }

    #[tokio::test]
    async fn send_email_reports_success() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.to == "sales@example.com"
                    && email.subject.contains("Ana García")
                    && email.html.contains("Acme")
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok("email_123".to_string()) }));

        let app = app_with(mailer, LocalePolicy::Redirect, "mail-ok");
        let response = app.oneshot(post_json("/api/send-email", &contact_body())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["result"]["id"], json!("email_123"));
    }

    #[tokio::test]
    async fn send_email_reports_provider_failure() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| Box::pin(async { Err(MailError::Provider("quota exceeded".to_string())) }));

        let app = app_with(mailer, LocalePolicy::Redirect, "mail-err");
        let response = app.oneshot(post_json("/api/send-email", &contact_body())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn invalid_contact_never_reaches_the_mailer() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(0);

        let mut body = contact_body();
        body["email"] = json!("not-an-email");

        let app = app_with(mailer, LocalePolicy::Redirect, "mail-invalid");
        let response = app.oneshot(post_json("/api/send-email", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["success"], json!(false));
    }
}
