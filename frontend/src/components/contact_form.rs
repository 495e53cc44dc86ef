use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::form::dispatch::{self, ContactPayload, SubmissionError, SubmissionStrategy, DEEP_LINK_DELAY_MS};
use crate::form::engine::{Advance, FormEngine, SubmissionStatus};
use crate::form::fields::{contact_form, FieldKind, FormField};
use crate::form::plans::{self, Plan};
use crate::i18n::{t, Key, Locale};

const ERROR_VISIBLE_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub locale: Locale,
}

pub enum ContactFormMsg {
    Input(String),
    Next,
    Prev,
    Submitted(Result<(), SubmissionError>),
    ClearError(String),
    Reset,
}

pub struct ContactForm {
    engine: FormEngine,
    plans: Vec<Plan>,
    strategy: SubmissionStrategy,
    error_timeout: Option<Timeout>,
}

fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = window().ok_or_else(|| "no browser window".to_string())?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| format!("{:?}", e))?;
    Ok(())
}

impl ContactForm {
    fn schedule_error_clear(&mut self, ctx: &Context<Self>, id: String) {
        let link = ctx.link().clone();
        // Replacing the handle cancels a pending clear.
        self.error_timeout = Some(Timeout::new(ERROR_VISIBLE_MS, move || {
            link.send_message(ContactFormMsg::ClearError(id));
        }));
    }

    fn dispatch(&self, ctx: &Context<Self>, payload: ContactPayload) {
        match self.strategy {
            SubmissionStrategy::Mail => {
                ctx.link().send_future(async move {
                    ContactFormMsg::Submitted(dispatch::send_email(&payload).await)
                });
            }
            SubmissionStrategy::DeepLink => {
                let plan = plans::find(&self.plans, &payload.plan);
                let reference = window()
                    .and_then(|w| w.location().href().ok())
                    .unwrap_or_default();
                let message = dispatch::whatsapp_message(&payload, plan, &reference);
                let url = dispatch::whatsapp_url(config::WHATSAPP_NUMBER, &message);

                ctx.link().send_future(async move {
                    TimeoutFuture::new(DEEP_LINK_DELAY_MS).await;
                    ContactFormMsg::Submitted(dispatch::deep_link_outcome(open_in_new_tab(&url)))
                });
            }
        }
    }

    fn view_input(&self, ctx: &Context<Self>, field: &FormField, locale: Locale) -> Html {
        let value = self.engine.value(&field.id).to_string();
        let touched = self.engine.is_touched(&field.id).then(|| "touched");
        let placeholder = field.placeholder.map(|key| t(locale, key)).unwrap_or_default();
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                Some(ContactFormMsg::Next)
            } else {
                None
            }
        });

        match field.kind {
            FieldKind::TextArea => {
                let oninput = ctx.link().callback(|e: InputEvent| {
                    ContactFormMsg::Input(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                });
                html! {
                    <textarea
                        class={classes!("form-input", "form-textarea", touched)}
                        rows="4"
                        {value}
                        {placeholder}
                        {oninput}
                        {onkeydown}
                        autofocus=true
                    />
                }
            }
            FieldKind::SingleChoice => {
                html! {
                    <div class="plan-options">
                        { for self.plans.iter().map(|plan| {
                            let id = plan.id.to_string();
                            let selected = value == plan.id;
                            let onclick = ctx.link().callback(move |_| ContactFormMsg::Input(id.clone()));
                            html! {
                                <button
                                    type="button"
                                    class={classes!("plan-option", selected.then(|| "selected"))}
                                    {onclick}
                                >
                                    <span class="plan-name">{ plan.name }</span>
                                    <span class="plan-price">{ plan.price_label() }</span>
                                    <span class="plan-description">{ plan.description }</span>
                                    <ul class="plan-features">
                                        { for plan.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                                    </ul>
                                </button>
                            }
                        }) }
                    </div>
                }
            }
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let oninput = ctx.link().callback(|e: InputEvent| {
                    ContactFormMsg::Input(e.target_unchecked_into::<HtmlInputElement>().value())
                });
                html! {
                    <input
                        class={classes!("form-input", touched)}
                        type={field.kind.input_type()}
                        {value}
                        {placeholder}
                        {oninput}
                        {onkeydown}
                        autofocus=true
                    />
                }
            }
        }
    }

    fn view_completed(&self, ctx: &Context<Self>, locale: Locale) -> Html {
        let onclick = ctx.link().callback(|_| ContactFormMsg::Reset);
        html! {
            <div class="contact-form completed">
                <div class="success-icon">{ "✓" }</div>
                <h3>{ t(locale, Key::SuccessTitle) }</h3>
                <p>{ t(locale, Key::SuccessMessage) }</p>
                <button class="form-button secondary" {onclick}>
                    { t(locale, Key::ButtonReset) }
                </button>
            </div>
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let plans = plans::catalog(ctx.props().locale);
        Self {
            engine: FormEngine::new(contact_form(&plans)),
            plans,
            strategy: config::submission_strategy(),
            error_timeout: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // Plan ids do not depend on the language, so answers survive a switch.
        self.plans = plans::catalog(ctx.props().locale);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Input(value) => {
                let id = self.engine.current_field().id.clone();
                match self.engine.set_field_value(&id, value) {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("Ignoring input for {}: {}", id, e);
                        false
                    }
                }
            }
            ContactFormMsg::Next => {
                let id = self.engine.current_field().id.clone();
                match self.engine.confirm() {
                    Advance::Moved(step) => {
                        log::info!("Contact form moved to step {}", step + 1);
                        self.error_timeout = None;
                        true
                    }
                    Advance::Rejected(error) => {
                        log::info!("Step '{}' rejected: {}", id, error);
                        self.schedule_error_clear(ctx, id);
                        true
                    }
                    Advance::Submit(payload) => {
                        log::info!("Submitting contact form via {:?}", self.strategy);
                        self.dispatch(ctx, payload);
                        true
                    }
                    Advance::Ignored => false,
                }
            }
            ContactFormMsg::Prev => self.engine.go_prev(),
            ContactFormMsg::Submitted(outcome) => {
                self.engine.finish_submission(outcome);
                true
            }
            ContactFormMsg::ClearError(id) => {
                self.error_timeout = None;
                self.engine.dismiss_error(&id);
                true
            }
            ContactFormMsg::Reset => {
                self.error_timeout = None;
                self.engine.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;
        let status = self.engine.status();
        if status == SubmissionStatus::Completed {
            return self.view_completed(ctx, locale);
        }

        let field = self.engine.current_field();
        let submitting = status == SubmissionStatus::Submitting;
        let error = self
            .engine
            .error(&field.id)
            .and(field.error_message)
            .map(|key| t(locale, key));

        let onprev = ctx.link().callback(|_| ContactFormMsg::Prev);
        let onnext = ctx.link().callback(|_| ContactFormMsg::Next);
        let next_label = if submitting {
            Key::ButtonSubmitting
        } else if self.engine.is_last_step() {
            Key::ButtonSubmit
        } else {
            Key::ButtonNext
        };

        html! {
            <div class="contact-form">
                <div class="form-progress">
                    <div class="form-progress-bar" style={format!("width: {}%", self.engine.progress_percent())}></div>
                </div>
                <span class="form-step-counter">
                    { format!("{} / {}", self.engine.current_step() + 1, self.engine.step_count()) }
                </span>

                <label class="form-step-title">{ t(locale, field.title) }</label>
                { self.view_input(ctx, field, locale) }

                if let Some(message) = error {
                    <div class="form-error">{ message }</div>
                }
                if status == SubmissionStatus::Failed {
                    <div class="form-error">{ t(locale, Key::SubmitFailed) }</div>
                }

                <div class="form-buttons">
                    if self.engine.current_step() > 0 {
                        <button
                            type="button"
                            class="form-button secondary"
                            onclick={onprev}
                            disabled={submitting}
                        >
                            { t(locale, Key::ButtonPrev) }
                        </button>
                    }
                    <button
                        type="button"
                        class={classes!("form-button", "primary", submitting.then(|| "loading"))}
                        onclick={onnext}
                        disabled={!self.engine.can_confirm()}
                    >
                        { t(locale, next_label) }
                    </button>
                </div>
            </div>
        }
    }
}
