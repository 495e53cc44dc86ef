use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::i18n::{t, Key, SiteSettings};

pub const CONSENT_KEY: &str = "cookiesAccepted";
const SHOW_DELAY_MS: u32 = 2_000;

/// Only an explicit accept counts; a reject is not remembered.
pub fn consent_given(stored: Option<&str>) -> bool {
    stored == Some("true")
}

fn stored_consent() -> Option<String> {
    window()?.local_storage().ok()??.get_item(CONSENT_KEY).ok()?
}

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let locale = use_context::<SiteSettings>().unwrap_or_default().locale;
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let timeout = (!consent_given(stored_consent().as_deref()))
                .then(|| Timeout::new(SHOW_DELAY_MS, move || visible.set(true)));
            move || drop(timeout)
        }, ());
    }

    let accept = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(Ok(Some(storage))) = window().map(|w| w.local_storage()) {
                if let Err(e) = storage.set_item(CONSENT_KEY, "true") {
                    log::warn!("Could not store cookie consent: {:?}", e);
                }
            }
            visible.set(false);
        })
    };

    let reject = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="cookie-consent">
            <p>
                { t(locale, Key::CookieText) }{ " " }
                <strong>{ t(locale, Key::CookiePolicy) }</strong>{ "." }
            </p>
            <div class="cookie-buttons">
                <button class="cookie-reject" onclick={reject}>{ t(locale, Key::CookieReject) }</button>
                <button class="cookie-accept" onclick={accept}>{ t(locale, Key::CookieAccept) }</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_stored_true_hides_the_banner() {
        assert!(consent_given(Some("true")));
        assert!(!consent_given(Some("false")));
        assert!(!consent_given(Some("TRUE")));
        assert!(!consent_given(None));
    }
}
