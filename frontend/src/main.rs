use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::window;

mod config;
mod i18n;
mod form {
    pub mod fields;
    pub mod plans;
    pub mod engine;
    pub mod dispatch;
}
mod components {
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod language_switcher;
    pub mod whatsapp_button;
}
mod pages {
    pub mod home;
}

use i18n::{Locale, SiteSettings};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:lang")]
    Localized { lang: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Locale for routes that do not carry a valid one in the route itself.
fn locale_from_window() -> Locale {
    let window = window();
    let path = window
        .as_ref()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let lang = window
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|element| element.get_attribute("lang"));
    i18n::page_locale(&path, lang.as_deref())
}

#[derive(Properties, PartialEq)]
struct LocalizedSiteProps {
    locale: Locale,
}

#[function_component(LocalizedSite)]
fn localized_site(props: &LocalizedSiteProps) -> Html {
    let settings = SiteSettings { locale: props.locale };

    {
        let lang = props.locale.code();
        use_effect_with_deps(move |lang| {
            if let Some(element) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = element.set_attribute("lang", lang);
            }
            || ()
        }, lang);
    }

    html! {
        <ContextProvider<SiteSettings> context={settings}>
            <Home />
        </ContextProvider<SiteSettings>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Localized { lang } => match Locale::from_code(&lang) {
            Some(locale) => {
                info!("Rendering Home page in {}", locale);
                html! { <LocalizedSite {locale} /> }
            }
            None => {
                info!("Unknown language prefix '{}'", lang);
                html! { <LocalizedSite locale={locale_from_window()} /> }
            }
        },
        Route::Root | Route::NotFound => {
            info!("Rendering Home page without a language prefix");
            html! { <LocalizedSite locale={locale_from_window()} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
