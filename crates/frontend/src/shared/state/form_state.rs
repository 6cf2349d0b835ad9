//! Generic form state: values, per-field validation rules and the derived
//! touched / dirty / submitting flags.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type Rule<T> = fn(&T) -> Result<(), ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// How a form field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select(&'static [SelectOption]),
    Date,
    Upload { accept: &'static str },
    /// Rendered by the screen itself
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone)]
pub struct FormState<T> {
    initial: T,
    values: T,
    rules: Vec<(&'static str, Rule<T>)>,
    touched: BTreeSet<&'static str>,
    submitting: bool,
}

impl<T: Clone + PartialEq> FormState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            values: initial.clone(),
            initial,
            rules: Vec::new(),
            touched: BTreeSet::new(),
            submitting: false,
        }
    }

    pub fn with_rule(mut self, field: &'static str, rule: Rule<T>) -> Self {
        self.rules.push((field, rule));
        self
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    /// Edits one field and marks it touched
    pub fn update(&mut self, field: &'static str, edit: impl FnOnce(&mut T)) {
        edit(&mut self.values);
        self.touched.insert(field);
    }

    pub fn touch(&mut self, field: &'static str) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// All rule failures, first failure per field
    pub fn errors(&self) -> BTreeMap<&'static str, ValidationError> {
        let mut errors = BTreeMap::new();
        for (field, rule) in &self.rules {
            if errors.contains_key(field) {
                continue;
            }
            if let Err(e) = rule(&self.values) {
                errors.insert(*field, e);
            }
        }
        errors
    }

    /// Error to show next to a field: only once the user has touched it
    pub fn visible_error(&self, field: &'static str) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().remove(field).map(|e| e.message)
    }

    /// Marks every ruled field touched and, when valid, enters the submitting state
    pub fn begin_submit(&mut self) -> Result<T, Vec<ValidationError>> {
        if self.submitting {
            return Err(Vec::new());
        }
        for (field, _) in &self.rules {
            self.touched.insert(*field);
        }
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors.into_values().collect());
        }
        self.submitting = true;
        Ok(self.values.clone())
    }

    /// Successful submit makes the saved values the new baseline
    pub fn finish_submit(&mut self, saved: bool) {
        self.submitting = false;
        if saved {
            self.initial = self.values.clone();
            self.touched.clear();
        }
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Contact {
        name: String,
        email: String,
    }

    fn name_required(c: &Contact) -> Result<(), ValidationError> {
        if c.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Name is required"));
        }
        Ok(())
    }

    fn email_shape(c: &Contact) -> Result<(), ValidationError> {
        if !c.email.is_empty() && !c.email.contains('@') {
            return Err(ValidationError::new("email", "Invalid email"));
        }
        Ok(())
    }

    fn form() -> FormState<Contact> {
        FormState::new(Contact::default())
            .with_rule("name", name_required)
            .with_rule("email", email_shape)
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut f = form();
        assert_eq!(f.errors().len(), 1);
        assert_eq!(f.visible_error("name"), None);
        f.touch("name");
        assert_eq!(f.visible_error("name").as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_dirty_tracks_changes() {
        let mut f = form();
        assert!(!f.is_dirty());
        f.update("name", |c| c.name = "Ann".into());
        assert!(f.is_dirty());
        assert!(f.is_touched("name"));
        f.reset();
        assert!(!f.is_dirty());
    }

    #[test]
    fn test_submit_requires_valid_values() {
        let mut f = form();
        f.update("email", |c| c.email = "nope".into());
        let errors = f.begin_submit().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(!f.is_submitting());
        assert!(f.is_touched("name"));

        f.update("name", |c| c.name = "Ann".into());
        f.update("email", |c| c.email = "ann@example.com".into());
        let values = f.begin_submit().unwrap();
        assert_eq!(values.name, "Ann");
        assert!(f.is_submitting());
        assert!(f.begin_submit().is_err());

        f.finish_submit(true);
        assert!(!f.is_submitting());
        assert!(!f.is_dirty());
    }

    #[test]
    fn test_failed_submit_keeps_values_dirty() {
        let mut f = form();
        f.update("name", |c| c.name = "Ann".into());
        f.begin_submit().unwrap();
        f.finish_submit(false);
        assert!(f.is_dirty());
        assert!(!f.is_submitting());
    }
}
