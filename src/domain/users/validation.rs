use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::users::balance::DEFAULT_BALANCE;
use crate::domain::users::user::UserChanges;

// Letters (including accented Latin), spaces, apostrophes, and hyphens.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ÿ\s'-]+$").expect("valid regex"));
// Local part of at least 3 chars, a domain label of at least 3, and a
// 2-3 letter top-level label.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]{3,}@[A-Za-z0-9-]{3,}\.[A-Za-z]{2,3}$").expect("valid regex")
});

const NAME_MAX_LEN: usize = 100;
const EMAIL_MIN_LEN: usize = 5;
const EMAIL_MAX_LEN: usize = 100;

const BLANK: &str = "can't be blank";
const INVALID_FORMAT: &str = "has invalid format";

/// Violated rules per field, in the order the fields were checked and
/// the rules applied. Serializes as a plain JSON object, which is what
/// the 422 body embeds under `errors`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field names in check order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.keys().copied().collect()
    }

    /// Messages recorded for one field; empty when the field passed.
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Incoming field-set for Create. Every key is optional so that a
/// missing required key surfaces as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct CreateUserFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub balance: Option<String>,
}

/// Incoming field-set for Update. Patch semantics: an absent key keeps
/// the stored value, and there is no password key at all.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub balance: Option<String>,
}

/// An accepted create field-set, coerced to stored form. The password
/// is still plaintext here; hashing is the create operation's next
/// step.
#[derive(Debug, Clone)]
pub struct ValidatedUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub balance: String,
}

/// Runs the create rule-set. Violations are collected, never
/// short-circuited; fields are checked in the fixed order name, email,
/// password, address, balance, so the same input always produces the
/// same error set in the same order.
pub fn validate_create(fields: &CreateUserFields) -> Result<ValidatedUser, FieldErrors> {
    let mut errors = FieldErrors::default();

    match fields.name.as_deref() {
        Some(name) if !name.is_empty() => name_rules(name, &mut errors),
        _ => errors.add("name", BLANK),
    }
    match fields.email.as_deref() {
        Some(email) if !email.is_empty() => email_rules(email, &mut errors),
        _ => errors.add("email", BLANK),
    }
    if fields.password.as_deref().unwrap_or("").is_empty() {
        errors.add("password", BLANK);
    }
    if fields.address.as_deref().unwrap_or("").is_empty() {
        errors.add("address", BLANK);
    }
    // Balance is opaque text with a default; there is no rule to run.

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidatedUser {
        name: fields.name.clone().unwrap_or_default(),
        email: fields.email.clone().unwrap_or_default(),
        password: fields.password.clone().unwrap_or_default(),
        address: fields.address.clone().unwrap_or_default(),
        balance: fields
            .balance
            .clone()
            .unwrap_or_else(|| DEFAULT_BALANCE.to_string()),
    })
}

/// Runs the update rule-set over the supplied keys only. A key that is
/// present but blank violates the required rule; a key that is absent
/// is left alone entirely.
pub fn validate_update(fields: &UpdateUserFields) -> Result<UserChanges, FieldErrors> {
    let mut errors = FieldErrors::default();

    if let Some(name) = fields.name.as_deref() {
        if name.is_empty() {
            errors.add("name", BLANK);
        } else {
            name_rules(name, &mut errors);
        }
    }
    if let Some(email) = fields.email.as_deref() {
        if email.is_empty() {
            errors.add("email", BLANK);
        } else {
            email_rules(email, &mut errors);
        }
    }
    if let Some(address) = fields.address.as_deref() {
        if address.is_empty() {
            errors.add("address", BLANK);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(UserChanges {
        name: fields.name.clone(),
        email: fields.email.clone(),
        address: fields.address.clone(),
        balance: fields.balance.clone(),
    })
}

fn name_rules(name: &str, errors: &mut FieldErrors) {
    if !NAME_RE.is_match(name) {
        errors.add("name", INVALID_FORMAT);
    }
    if name.chars().count() > NAME_MAX_LEN {
        errors.add(
            "name",
            format!("should be at most {NAME_MAX_LEN} character(s)"),
        );
    }
}

fn email_rules(email: &str, errors: &mut FieldErrors) {
    if !EMAIL_RE.is_match(email) {
        errors.add("email", INVALID_FORMAT);
    }
    let len = email.chars().count();
    if len < EMAIL_MIN_LEN {
        // The format pattern's own minimum is eight characters, so this
        // only ever fires alongside a format violation.
        errors.add(
            "email",
            format!("should be at least {EMAIL_MIN_LEN} character(s)"),
        );
    }
    if len > EMAIL_MAX_LEN {
        errors.add(
            "email",
            format!("should be at most {EMAIL_MAX_LEN} character(s)"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> CreateUserFields {
        CreateUserFields {
            name: Some("John Doe".into()),
            email: Some("john@example.com".into()),
            password: Some("password123".into()),
            address: Some("123 Main St".into()),
            balance: Some("123.45678".into()),
        }
    }

    #[test]
    fn accepts_a_complete_valid_field_set() {
        let accepted = validate_create(&full_fields()).expect("valid");
        assert_eq!(accepted.name, "John Doe");
        assert_eq!(accepted.email, "john@example.com");
        assert_eq!(accepted.password, "password123");
        assert_eq!(accepted.address, "123 Main St");
        assert_eq!(accepted.balance, "123.45678");
    }

    #[test]
    fn missing_balance_takes_the_default() {
        let mut fields = full_fields();
        fields.balance = None;
        let accepted = validate_create(&fields).expect("valid");
        assert_eq!(accepted.balance, DEFAULT_BALANCE);
    }

    #[test]
    fn empty_field_set_lists_every_required_field_in_order() {
        let errors = validate_create(&CreateUserFields::default()).unwrap_err();
        assert_eq!(errors.fields(), vec!["name", "email", "password", "address"]);
        for field in ["name", "email", "password", "address"] {
            assert_eq!(errors.messages(field), ["can't be blank"]);
        }
    }

    #[test]
    fn empty_strings_count_as_blank() {
        let fields = CreateUserFields {
            name: Some(String::new()),
            email: Some(String::new()),
            password: Some(String::new()),
            address: Some(String::new()),
            balance: None,
        };
        let errors = validate_create(&fields).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.messages("name"), ["can't be blank"]);
    }

    #[test]
    fn name_rejects_digits_and_symbols() {
        for bad in ["John3", "John_Doe", "John@Doe", "Jo#n"] {
            let mut fields = full_fields();
            fields.name = Some(bad.into());
            let errors = validate_create(&fields).unwrap_err();
            assert_eq!(errors.messages("name"), ["has invalid format"], "{bad}");
        }
    }

    #[test]
    fn name_accepts_accents_apostrophes_and_hyphens() {
        for good in ["José García", "O'Brien", "Anne-Marie", "Zoë"] {
            let mut fields = full_fields();
            fields.name = Some(good.into());
            assert!(validate_create(&fields).is_ok(), "{good}");
        }
    }

    #[test]
    fn name_over_one_hundred_chars_is_too_long() {
        let mut fields = full_fields();
        fields.name = Some("a".repeat(101));
        let errors = validate_create(&fields).unwrap_err();
        assert_eq!(
            errors.messages("name"),
            ["should be at most 100 character(s)"]
        );
    }

    #[test]
    fn name_collects_format_and_length_violations_together() {
        let mut fields = full_fields();
        fields.name = Some("7".repeat(120));
        let errors = validate_create(&fields).unwrap_err();
        assert_eq!(
            errors.messages("name"),
            ["has invalid format", "should be at most 100 character(s)"]
        );
    }

    #[test]
    fn email_rejects_short_labels() {
        // Local part and domain label must each be at least three chars.
        for bad in ["jo@example.com", "john@ex.com", "john@example.c"] {
            let mut fields = full_fields();
            fields.email = Some(bad.into());
            let errors = validate_create(&fields).unwrap_err();
            assert_eq!(errors.messages("email"), ["has invalid format"], "{bad}");
        }
    }

    #[test]
    fn email_rejects_long_top_level_labels() {
        let mut fields = full_fields();
        fields.email = Some("john@example.info".into());
        let errors = validate_create(&fields).unwrap_err();
        assert_eq!(errors.messages("email"), ["has invalid format"]);
    }

    #[test]
    fn email_lower_length_bound_only_fires_with_a_format_violation() {
        // No format-valid email can be shorter than five characters, so
        // the "at least" message never appears on its own.
        let mut fields = full_fields();
        fields.email = Some("a@b".into());
        let errors = validate_create(&fields).unwrap_err();
        assert_eq!(
            errors.messages("email"),
            ["has invalid format", "should be at least 5 character(s)"]
        );
    }

    #[test]
    fn email_over_one_hundred_chars_is_too_long() {
        let mut fields = full_fields();
        fields.email = Some(format!("{}@example.com", "a".repeat(95)));
        let errors = validate_create(&fields).unwrap_err();
        assert_eq!(
            errors.messages("email"),
            ["should be at most 100 character(s)"]
        );
    }

    #[test]
    fn update_ignores_omitted_keys() {
        let changes = validate_update(&UpdateUserFields::default()).expect("valid");
        assert!(changes.name.is_none());
        assert!(changes.email.is_none());
        assert!(changes.address.is_none());
        assert!(changes.balance.is_none());
    }

    #[test]
    fn update_flags_supplied_blank_keys_only() {
        let fields = UpdateUserFields {
            name: Some(String::new()),
            email: None,
            address: None,
            balance: None,
        };
        let errors = validate_update(&fields).unwrap_err();
        assert_eq!(errors.fields(), vec!["name"]);
        assert_eq!(errors.messages("name"), ["can't be blank"]);
    }

    #[test]
    fn update_validates_supplied_values() {
        let fields = UpdateUserFields {
            name: Some("Jane".into()),
            email: Some("not-an-email".into()),
            address: None,
            balance: None,
        };
        let errors = validate_update(&fields).unwrap_err();
        assert_eq!(errors.fields(), vec!["email"]);
        assert_eq!(errors.messages("email"), ["has invalid format"]);
    }

    #[test]
    fn update_passes_balance_through_unchecked() {
        let fields = UpdateUserFields {
            name: None,
            email: None,
            address: None,
            balance: Some("not numeric".into()),
        };
        let changes = validate_update(&fields).expect("valid");
        assert_eq!(changes.balance.as_deref(), Some("not numeric"));
    }
}
