use crate::form::dispatch::SubmissionStrategy;
use crate::i18n::Locale;

pub const DEFAULT_LOCALE: Locale = Locale::Es;

/// Destination of the contact deep link and the floating chat button.
pub const WHATSAPP_NUMBER: &str = "56930835236";

/// `trunk serve` runs apart from the backend; release builds are served by it.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""
}

/// Picked at build time: `CONTACT_STRATEGY=whatsapp trunk build --release`.
pub fn submission_strategy() -> SubmissionStrategy {
    option_env!("CONTACT_STRATEGY")
        .and_then(|value| value.parse().ok())
        .unwrap_or(SubmissionStrategy::Mail)
}
