use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    /// Same rules the contact form applies step by step in the browser.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err("El nombre debe tener al menos 2 caracteres".to_string());
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err("Por favor, introduce un correo válido".to_string());
        }
        if self.company.trim().chars().count() < MIN_NAME_CHARS {
            return Err("El nombre de la empresa es requerido".to_string());
        }
        if self.plan.trim().is_empty() {
            return Err("Por favor selecciona un plan".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl SendEmailResponse {
    pub fn sent(result: Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(Value::String(error.into())),
        }
    }
}
