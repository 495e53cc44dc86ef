use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::plans::Plan;
use crate::i18n::Key;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const COMPANY: &str = "company";
pub const WHATSAPP: &str = "whatsapp";
pub const PLAN: &str = "plan";
pub const MESSAGE: &str = "message";

pub const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    SingleChoice,
}

impl FieldKind {
    /// `type` attribute for kinds rendered as `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Text | FieldKind::TextArea | FieldKind::SingleChoice => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Any,
    MinLength(usize),
    Email,
    OneOf(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a value is required")]
    Required,
    #[error("at least {min} characters are required")]
    TooShort { min: usize },
    #[error("not a valid email address")]
    InvalidEmail,
    #[error("not one of the available options")]
    UnknownOption,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("a form needs at least one field")]
    Empty,
    #[error("field '{0}' is defined twice")]
    DuplicateField(String),
    #[error("no field named '{0}'")]
    UnknownField(String),
    #[error("the form is locked while it is being submitted")]
    Locked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
    pub rule: Rule,
    pub title: Key,
    pub placeholder: Option<Key>,
    /// Shown whenever `validate` reports an error for this field.
    pub error_message: Option<Key>,
}

impl FormField {
    pub fn validate(&self, value: &str) -> Option<ValidationError> {
        if !self.required {
            return None;
        }

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Some(ValidationError::Required);
        }

        match &self.rule {
            Rule::Any => None,
            Rule::MinLength(min) => {
                (trimmed.chars().count() < *min).then_some(ValidationError::TooShort { min: *min })
            }
            Rule::Email => (!EMAIL_RE.is_match(value)).then_some(ValidationError::InvalidEmail),
            Rule::OneOf(options) => {
                (!options.iter().any(|option| option == trimmed)).then_some(ValidationError::UnknownOption)
            }
        }
    }
}

/// Ordered steps of a form; the order is the order they are asked in.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefinition {
    fields: Vec<FormField>,
}

impl FormDefinition {
    pub fn new(fields: Vec<FormField>) -> Result<Self, FormError> {
        if fields.is_empty() {
            return Err(FormError::Empty);
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.id.as_str()) {
                return Err(FormError::DuplicateField(field.id.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn step_count(&self) -> usize {
        self.fields.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fields.iter().any(|field| field.id == id)
    }
}

fn field(id: &str, kind: FieldKind, rule: Option<Rule>, title: Key, placeholder: Option<Key>, error: Option<Key>) -> FormField {
    FormField {
        id: id.to_string(),
        kind,
        required: rule.is_some(),
        rule: rule.unwrap_or(Rule::Any),
        title,
        placeholder,
        error_message: error,
    }
}

/// The six-step contact form offered on the landing page.
pub fn contact_form(plans: &[Plan]) -> FormDefinition {
    let plan_ids = plans.iter().map(|plan| plan.id.to_string()).collect();

    FormDefinition {
        fields: vec![
            field(NAME, FieldKind::Text, Some(Rule::MinLength(MIN_NAME_CHARS)), Key::StepNameTitle, Some(Key::StepNamePlaceholder), Some(Key::ErrorName)),
            field(EMAIL, FieldKind::Email, Some(Rule::Email), Key::StepEmailTitle, Some(Key::StepEmailPlaceholder), Some(Key::ErrorEmail)),
            field(COMPANY, FieldKind::Text, Some(Rule::MinLength(MIN_NAME_CHARS)), Key::StepCompanyTitle, Some(Key::StepCompanyPlaceholder), Some(Key::ErrorCompany)),
            field(WHATSAPP, FieldKind::Tel, None, Key::StepWhatsappTitle, Some(Key::StepWhatsappPlaceholder), None),
            field(PLAN, FieldKind::SingleChoice, Some(Rule::OneOf(plan_ids)), Key::StepPlanTitle, None, Some(Key::ErrorPlan)),
            field(MESSAGE, FieldKind::TextArea, None, Key::StepMessageTitle, Some(Key::StepMessagePlaceholder), None),
        ],
    }
}
