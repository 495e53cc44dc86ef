use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::cookie_consent::CookieConsent;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::form::plans;
use crate::i18n::{t, Key, SiteSettings};

/// First year shown in the copyright line.
const FOUNDED: i32 = 2024;

/// Only one answer is shown at a time; clicking the open question closes it.
fn toggle_faq(open: Option<usize>, index: usize) -> Option<usize> {
    (open != Some(index)).then_some(index)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = props.on_toggle.reform(|e: MouseEvent| e.prevent_default());

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} {onclick}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{ &props.answer }</p>
                </div>
            }
        </div>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    let locale = use_context::<SiteSettings>().unwrap_or_default().locale;
    let plans = plans::catalog(locale);

    html! {
        <section id="precios" class="pricing-section">
            <h2>{ t(locale, Key::PricingTitle) }</h2>
            <p>{ t(locale, Key::PricingSubtitle) }</p>
            <div class="pricing-grid">
                { for plans.iter().map(|plan| {
                    let popular = plan.id == plans::POPULAR_PLAN;
                    html! {
                        <div class={classes!("pricing-card", popular.then(|| "popular"))}>
                            if popular {
                                <div class="pricing-badge">{ t(locale, Key::PricingPopular) }</div>
                            }
                            <h3>{ plan.name }</h3>
                            <p class="plan-description">{ plan.description }</p>
                            <div class="plan-price">{ plan.price_label() }</div>
                            <ul class="plan-features">
                                { for plan.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                            </ul>
                            <a href="#contacto" class="pricing-cta">{ t(locale, Key::PricingSelect) }</a>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    let locale = use_context::<SiteSettings>().unwrap_or_default().locale;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href={format!("/{}", locale.code())} class="nav-logo">
                    {"Hero&Framer"}
                </a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <a href="#servicios" class="nav-link">{ t(locale, Key::NavServices) }</a>
                    <a href="#proceso" class="nav-link">{ t(locale, Key::NavProcess) }</a>
                    <a href="#faq" class="nav-link">{ t(locale, Key::NavFaq) }</a>
                    <a href="#contacto" class="nav-link">{ t(locale, Key::NavContact) }</a>
                    <LanguageSwitcher />
                    <a href="#contacto" class="nav-cta">{ t(locale, Key::NavConsultation) }</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let locale = use_context::<SiteSettings>().unwrap_or_default().locale;
    let year = chrono::Local::now().year();
    let open_faq = use_state(|| None::<usize>);

    let services = [
        (Key::ServiceDesignTitle, Key::ServiceDesignBody),
        (Key::ServiceCopyTitle, Key::ServiceCopyBody),
        (Key::ServiceOptimizeTitle, Key::ServiceOptimizeBody),
    ];
    let process = [
        Key::ProcessDiscover,
        Key::ProcessDesign,
        Key::ProcessBuild,
        Key::ProcessLaunch,
    ];
    let faqs = [
        (Key::FaqTimelineQuestion, Key::FaqTimelineAnswer),
        (Key::FaqOwnershipQuestion, Key::FaqOwnershipAnswer),
        (Key::FaqChangesQuestion, Key::FaqChangesAnswer),
    ];

    html! {
        <div class="landing-page">
            <Nav />

            <header class="hero">
                <h1>
                    { t(locale, Key::HeroTitle) }{ " " }
                    <span class="gradient-text">{ t(locale, Key::HeroHighlight) }</span>
                </h1>
                <p class="hero-subtitle">{ t(locale, Key::HeroSubtitle) }</p>
                <div class="hero-cta-group">
                    <a href="#contacto" class="hero-cta">{ t(locale, Key::HeroCtaPrimary) }</a>
                    <a href="#servicios" class="hero-cta secondary">{ t(locale, Key::HeroCtaSecondary) }</a>
                </div>
            </header>

            <section id="servicios" class="services-section">
                <h2>{ t(locale, Key::ServicesTitle) }</h2>
                <div class="services-grid">
                    { for services.iter().map(|(title, body)| html! {
                        <div class="service-card">
                            <h3>{ t(locale, *title) }</h3>
                            <p>{ t(locale, *body) }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="proceso" class="process-section">
                <h2>{ t(locale, Key::ProcessTitle) }</h2>
                <ol class="process-steps">
                    { for process.iter().enumerate().map(|(i, step)| html! {
                        <li class="process-step">
                            <span class="step-number">{ i + 1 }</span>
                            <span class="step-name">{ t(locale, *step) }</span>
                        </li>
                    }) }
                </ol>
            </section>

            <Pricing />

            <section id="faq" class="faq-section">
                <h2>{ t(locale, Key::FaqTitle) }</h2>
                <p>{ t(locale, Key::FaqSubtitle) }</p>
                { for faqs.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let open_faq = open_faq.clone();
                        Callback::from(move |_: ()| open_faq.set(toggle_faq(*open_faq, index)))
                    };
                    html! {
                        <FaqItem
                            question={t(locale, *question)}
                            answer={t(locale, *answer)}
                            open={*open_faq == Some(index)}
                            {on_toggle}
                        />
                    }
                }) }
            </section>

            <section id="contacto" class="contact-section">
                <h2>{ t(locale, Key::ContactTitle) }</h2>
                <p>{ t(locale, Key::ContactSubtitle) }</p>
                <ContactForm {locale} />
            </section>

            <footer class="footer">
                <p class="footer-tagline">{ t(locale, Key::FooterTagline) }</p>
                <p class="footer-copyright">
                    { format!("© {}-{} Hero&Framer Studio. {}", FOUNDED, year, t(locale, Key::FooterRights)) }
                </p>
            </footer>

            <WhatsAppButton />
            <CookieConsent />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_question_closes_the_other() {
        assert_eq!(toggle_faq(None, 1), Some(1));
        assert_eq!(toggle_faq(Some(1), 2), Some(2));
        assert_eq!(toggle_faq(Some(2), 2), None);
    }
}
