//! Delivery of a finished contact form.
//!
//! Two strategies exist: posting to the backend mail endpoint, or opening a
//! WhatsApp chat with the request already typed out. Neither retries and
//! neither keeps a copy of what was sent.

use std::collections::HashMap;
use std::str::FromStr;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config;
use crate::form::fields::{COMPANY, EMAIL, MESSAGE, NAME, PLAN, WHATSAPP};
use crate::form::plans::Plan;

/// Wait before the WhatsApp tab opens, long enough to show the sending state.
pub const DEEP_LINK_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStrategy {
    Mail,
    DeepLink,
}

impl FromStr for SubmissionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mail" | "email" => Ok(SubmissionStrategy::Mail),
            "whatsapp" | "deeplink" | "deep-link" => Ok(SubmissionStrategy::DeepLink),
            other => Err(format!("unknown submission strategy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub whatsapp: String,
    pub plan: String,
    pub message: String,
}

impl ContactPayload {
    pub fn from_values(values: &HashMap<String, String>) -> Self {
        let get = |id: &str| values.get(id).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            name: get(NAME),
            email: get(EMAIL),
            company: get(COMPANY),
            whatsapp: get(WHATSAPP),
            plan: get(PLAN),
            message: get(MESSAGE),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("email was not sent: {0}")]
    Rejected(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn describe(error: Option<Value>) -> String {
    match error {
        Some(Value::String(message)) => message,
        Some(other) => other.to_string(),
        None => "no reason given".to_string(),
    }
}

/// A 2xx status with `success: true` is the only successful outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmissionError> {
    let parsed = serde_json::from_str::<SendEmailResponse>(body);

    if !(200..300).contains(&status) {
        let reason = match parsed {
            Ok(response) => describe(response.error),
            Err(_) => format!("HTTP {}", status),
        };
        return Err(SubmissionError::Rejected(reason));
    }

    let response = parsed.map_err(|e| SubmissionError::Decode(e.to_string()))?;
    if response.success {
        Ok(())
    } else {
        Err(SubmissionError::Rejected(describe(response.error)))
    }
}

pub async fn send_email(payload: &ContactPayload) -> Result<(), SubmissionError> {
    let request = Request::post(&format!("{}/api/send-email", config::get_backend_url()))
        .json(payload)
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    interpret_response(status, &body)
}

pub fn whatsapp_message(payload: &ContactPayload, plan: Option<&Plan>, reference_url: &str) -> String {
    let mut customer = format!(
        "• Nombre: {}\n• Email: {}\n• Empresa: {}",
        payload.name, payload.email, payload.company
    );
    if !payload.whatsapp.is_empty() {
        customer.push_str(&format!("\n• WhatsApp: {}", payload.whatsapp));
    }

    let plan_block = match plan {
        Some(plan) => format!(
            "• Plan: {}\n• Precio: {}\n• Descripción: {}",
            plan.name,
            plan.price_label(),
            plan.description
        ),
        None => "• Plan: No especificado\n• Precio: No especificado\n• Descripción: No especificado".to_string(),
    };

    let message = if payload.message.is_empty() {
        "Sin mensaje adicional"
    } else {
        payload.message.as_str()
    };

    format!(
        "🚀 *SOLICITUD DE LANDING PAGE - HERO&FRAMER STUDIO*\n\n\
         👤 *DATOS DEL CLIENTE:*\n{}\n\n\
         📋 *PLAN SELECCIONADO:*\n{}\n\n\
         💬 *MENSAJE ADICIONAL:*\n{}\n\n\
         🌐 *ENLACE DE REFERENCIA:*\n{}\n\n\
         ---\n\
         *Solicitud generada desde Hero&Framer Studio*\n\
         *Landing Pages que Convierten*",
        customer, plan_block, message, reference_url
    )
}

pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

/// The deep link only hands the text over; nothing comes back to fail on.
/// A tab that could not be opened is logged and still counts as sent.
pub fn deep_link_outcome(opened: Result<(), String>) -> Result<(), SubmissionError> {
    if let Err(e) = opened {
        log::warn!("Could not open the WhatsApp link: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::plans;
    use crate::i18n::Locale;
    use pretty_assertions::assert_eq;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ana García".to_string(),
            email: "ana@example.com".to_string(),
            company: "Acme".to_string(),
            whatsapp: String::new(),
            plan: "grow".to_string(),
            message: "Necesito una landing & un formulario".to_string(),
        }
    }

    #[test]
    fn payload_is_built_from_trimmed_values() {
        let values: HashMap<String, String> = [
            (NAME, " Ana García "),
            (EMAIL, "ana@example.com"),
            (PLAN, "grow"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let payload = ContactPayload::from_values(&values);
        assert_eq!(payload.name, "Ana García");
        assert_eq!(payload.plan, "grow");
        assert_eq!(payload.company, "");
        assert_eq!(payload.message, "");
    }

    #[test]
    fn only_a_successful_2xx_response_counts() {
        assert_eq!(interpret_response(200, r#"{"success":true,"result":{"id":"x"}}"#), Ok(()));
        assert_eq!(
            interpret_response(200, r#"{"success":false,"error":"quota"}"#),
            Err(SubmissionError::Rejected("quota".to_string()))
        );
        assert_eq!(
            interpret_response(500, r#"{"success":false,"error":"down"}"#),
            Err(SubmissionError::Rejected("down".to_string()))
        );
        assert_eq!(
            interpret_response(502, "<html>Bad gateway</html>"),
            Err(SubmissionError::Rejected("HTTP 502".to_string()))
        );
        assert!(matches!(interpret_response(200, "ok"), Err(SubmissionError::Decode(_))));
    }

    #[test]
    fn message_names_the_selected_plan_once() {
        let plans = plans::catalog(Locale::Es);
        let message = whatsapp_message(&payload(), plans::find(&plans, "grow"), "https://heroframer.studio/es");

        assert_eq!(message.matches("Grow").count(), 1);
        assert_eq!(message.matches("$700").count(), 1);
        assert!(message.contains("• Nombre: Ana García"));
        assert!(message.contains("https://heroframer.studio/es"));
        assert!(message.ends_with("*Landing Pages que Convierten*"));
        assert!(!message.contains("• WhatsApp:"));
    }

    #[test]
    fn message_falls_back_when_details_are_missing() {
        let payload = ContactPayload {
            whatsapp: "+56 9 1234 5678".to_string(),
            message: String::new(),
            ..payload()
        };
        let message = whatsapp_message(&payload, None, "");
        assert!(message.contains("• WhatsApp: +56 9 1234 5678"));
        assert!(message.contains("• Plan: No especificado"));
        assert!(message.contains("Sin mensaje adicional"));
    }

    #[test]
    fn deep_link_text_is_percent_encoded() {
        let plans = plans::catalog(Locale::Es);
        let message = whatsapp_message(&payload(), plans::find(&plans, "grow"), "https://heroframer.studio/es?ref=1");
        let url = whatsapp_url("56930835236", &message);

        let text = url.strip_prefix("https://wa.me/56930835236?text=").unwrap();
        assert!(text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
        assert_eq!(urlencoding::decode(text).unwrap(), message);
    }

    #[test]
    fn deep_link_never_reports_failure() {
        assert_eq!(deep_link_outcome(Ok(())), Ok(()));
        assert_eq!(deep_link_outcome(Err("popup blocked".to_string())), Ok(()));
    }

    #[test]
    fn strategy_names_parse() {
        assert_eq!("whatsapp".parse::<SubmissionStrategy>(), Ok(SubmissionStrategy::DeepLink));
        assert_eq!("Mail".parse::<SubmissionStrategy>(), Ok(SubmissionStrategy::Mail));
        assert!("sms".parse::<SubmissionStrategy>().is_err());
    }
}
