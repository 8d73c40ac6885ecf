//! Contact form model. Every field is required; nothing else is checked.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// DOM id of the matching input.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("required field `{}` is empty", .0.id())]
    MissingField(ContactField),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    /// First missing field in form order, if any.
    pub fn validate(&self) -> Result<(), ContactError> {
        match self.missing_fields().first() {
            Some(field) => Err(ContactError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// Outcome of a submit attempt as the page shows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Acknowledged,
    Blocked(ContactField),
}

pub fn submit(form: &ContactForm) -> SubmitStatus {
    match form.validate() {
        Ok(()) => SubmitStatus::Acknowledged,
        Err(ContactError::MissingField(field)) => SubmitStatus::Blocked(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Just saying hi.".into(),
        }
    }

    #[test]
    fn complete_form_is_acknowledged() {
        assert_eq!(filled().validate(), Ok(()));
        assert_eq!(submit(&filled()), SubmitStatus::Acknowledged);
    }

    #[test]
    fn any_blank_field_blocks_submission() {
        for field in ContactField::ALL {
            let mut form = filled();
            form.set(field, String::new());
            assert_eq!(form.validate(), Err(ContactError::MissingField(field)));
            assert_eq!(submit(&form), SubmitStatus::Blocked(field));
        }
    }

    #[test]
    fn empty_form_reports_fields_in_order() {
        let form = ContactForm::default();
        assert_eq!(form.missing_fields(), ContactField::ALL.to_vec());
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "required field `name` is empty"
        );
    }

    #[test]
    fn email_format_is_not_checked() {
        let mut form = filled();
        form.email = "not-an-address".into();
        assert_eq!(submit(&form), SubmitStatus::Acknowledged);
    }
}
