use chrono::NaiveDate;
use contracts::domain::a001_lead::{LeadDraft, LeadDto, ENDPOINT};

use crate::shared::api::{ApiClient, ApiError};
use crate::shared::state::{FieldKind, FormField, FormState, SelectOption, ValidationError};

const SOURCE_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "Website", value: "Website" },
    SelectOption { label: "Phone", value: "Phone" },
    SelectOption { label: "Referral", value: "Referral" },
    SelectOption { label: "Partner", value: "Partner" },
    SelectOption { label: "Event", value: "Event" },
];

pub const INTAKE_FIELDS: &[FormField] = &[
    FormField { name: "name", label: "Name", kind: FieldKind::Text },
    FormField { name: "email", label: "Email", kind: FieldKind::Text },
    FormField { name: "phone", label: "Phone", kind: FieldKind::Text },
    FormField { name: "address", label: "Address", kind: FieldKind::Text },
    FormField { name: "source", label: "Source", kind: FieldKind::Select(SOURCE_OPTIONS) },
    FormField {
        name: "preferred_visit_date",
        label: "Preferred site visit",
        kind: FieldKind::Date,
    },
    FormField {
        name: "utility_bill",
        label: "Utility bill",
        kind: FieldKind::Upload { accept: ".pdf,.png,.jpg,.jpeg" },
    },
];

fn name_required(draft: &LeadDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::new("name", "Name is required"));
    }
    Ok(())
}

fn contact_required(draft: &LeadDraft) -> Result<(), ValidationError> {
    if draft.email.trim().is_empty() && draft.phone.trim().is_empty() {
        return Err(ValidationError::new("phone", "Enter an email or a phone number"));
    }
    Ok(())
}

fn email_shape(draft: &LeadDraft) -> Result<(), ValidationError> {
    let email = draft.email.trim();
    if email.is_empty() {
        return Ok(());
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::new("email", "Invalid email address")),
    }
}

fn visit_date_format(draft: &LeadDraft) -> Result<(), ValidationError> {
    let date = draft.preferred_visit_date.trim();
    if date.is_empty() || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("preferred_visit_date", "Use YYYY-MM-DD"))
}

pub fn intake_form() -> FormState<LeadDraft> {
    FormState::new(LeadDraft::default())
        .with_rule("name", name_required)
        .with_rule("email", email_shape)
        .with_rule("phone", contact_required)
        .with_rule("preferred_visit_date", visit_date_format)
}

pub fn field_value(draft: &LeadDraft, field: &str) -> String {
    match field {
        "name" => draft.name.clone(),
        "email" => draft.email.clone(),
        "phone" => draft.phone.clone(),
        "address" => draft.address.clone(),
        "source" => draft.source.clone(),
        "preferred_visit_date" => draft.preferred_visit_date.clone(),
        "utility_bill" => draft.utility_bill.clone(),
        _ => String::new(),
    }
}

pub fn set_field(draft: &mut LeadDraft, field: &str, value: String) {
    match field {
        "name" => draft.name = value,
        "email" => draft.email = value,
        "phone" => draft.phone = value,
        "address" => draft.address = value,
        "source" => draft.source = value,
        "preferred_visit_date" => draft.preferred_visit_date = value,
        // browsers report C:\fakepath\<name>
        "utility_bill" => {
            draft.utility_bill = value
                .rsplit(['\\', '/'])
                .next()
                .unwrap_or_default()
                .to_string()
        }
        _ => log::warn!("lead intake: unknown field {}", field),
    }
}

pub async fn submit_lead(api: &ApiClient, draft: &LeadDraft) -> Result<LeadDto, ApiError> {
    let body = serde_json::to_value(draft).map_err(|e| ApiError::Encode(e.to_string()))?;
    let created = api.create_record(ENDPOINT, body).await?;
    serde_json::from_value(created).map_err(|e| ApiError::Decode(e.to_string()))
}
