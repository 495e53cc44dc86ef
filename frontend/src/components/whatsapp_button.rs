use yew::prelude::*;

use crate::config;
use crate::i18n::{t, Key, SiteSettings};

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let locale = use_context::<SiteSettings>().unwrap_or_default().locale;
    let label = t(locale, Key::WhatsappAccessibility);

    html! {
        <a
            class="whatsapp-float"
            href={format!("https://wa.me/{}", config::WHATSAPP_NUMBER)}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={label}
            title={label}
        >
            <img src="/assets/whatsapp.svg" alt="WhatsApp" />
        </a>
    }
}
