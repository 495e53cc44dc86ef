use web_sys::window;
use yew::prelude::*;

use crate::i18n::{switch_locale_path, t, Key, Locale, SiteSettings};

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Plain links so the server sees the new prefix on navigation.
#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let active = use_context::<SiteSettings>().unwrap_or_default().locale;
    let path = current_path();

    html! {
        <div class="language-switcher" aria-label={t(active, Key::LanguageLabel)}>
            { for Locale::ALL.into_iter().map(|locale| {
                html! {
                    <a
                        href={switch_locale_path(&path, locale)}
                        hreflang={locale.code()}
                        class={classes!("language-option", (locale == active).then(|| "active"))}
                    >
                        { locale.native_name() }
                    </a>
                }
            }) }
        </div>
    }
}
