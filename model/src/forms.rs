//! Client-side checks for the public forms. Messages are shown inline as-is.

use derive_more::Display;
use thiserror::Error;

use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter both email and password.")]
    MissingCredentials,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please fill in all fields.")]
    MissingSignupFields,
    #[error("{0} accounts cannot be created online.")]
    RoleNotSelfService(Role),
    #[error("Please fill in your name, email and message.")]
    MissingContactFields,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Name cannot be empty.")]
    EmptyName,
}

/// The same loose check the login form has always used: non-empty on both
/// sides of a single `@`, and a dot somewhere in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Checked on submit, before the simulated request starts.
    pub fn check_required(&self) -> Result<(), FormError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(())
    }

    /// Checked when the simulated request returns.
    pub fn check_response(&self) -> Result<(), FormError> {
        if self.email.contains('@') {
            Ok(())
        } else {
            Err(FormError::InvalidEmail)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignupForm {
    /// On success, the role the new dashboard session starts in.
    pub fn validate(&self) -> Result<Role, FormError> {
        if blank(&self.name) || blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingSignupFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        if !Role::SELF_SERVICE.contains(&self.role) {
            return Err(FormError::RoleNotSelfService(self.role));
        }
        Ok(self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ContactSubject {
    #[default]
    #[display("General Inquiry")]
    General,
    #[display("Technical Support")]
    Technical,
    #[display("Billing Issue")]
    Billing,
    #[display("Partnership Proposal")]
    Partnership,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::General,
        ContactSubject::Technical,
        ContactSubject::Billing,
        ContactSubject::Partnership,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.to_string() == label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(FormError::MissingContactFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// Newsletter and price-alert subscriptions only take an address.
pub fn validate_subscription(email: &str) -> Result<(), FormError> {
    if blank(email) {
        return Err(FormError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub full_name: String,
    pub email: String,
    pub sms_alerts: bool,
    pub email_alerts: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            full_name: "John Doe".into(),
            email: "john@example.com".into(),
            sms_alerts: true,
            email_alerts: false,
        }
    }
}

impl SettingsForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.full_name) {
            return Err(FormError::EmptyName);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check() {
        assert!(is_valid_email("jean@isukuhub.rw"));
        assert!(is_valid_email("  a.b@c.co  "));
        assert!(!is_valid_email("jean"));
        assert!(!is_valid_email("@isukuhub.rw"));
        assert!(!is_valid_email("jean@rw"));
        assert!(!is_valid_email("jean@@isukuhub.rw"));
        assert!(!is_valid_email("je an@isukuhub.rw"));
    }

    #[test]
    fn login_requires_both_fields_before_the_request() {
        let form = LoginForm {
            email: "jean@isukuhub.rw".into(),
            password: String::new(),
        };
        assert_eq!(form.check_required(), Err(FormError::MissingCredentials));
        assert_eq!(
            FormError::MissingCredentials.to_string(),
            "Please enter both email and password."
        );
    }

    #[test]
    fn login_rejects_an_address_without_at_after_the_request() {
        let form = LoginForm {
            email: "jean".into(),
            password: "secret".into(),
        };
        assert_eq!(form.check_required(), Ok(()));
        assert_eq!(form.check_response(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn signup_returns_the_chosen_role() {
        let mut form = SignupForm {
            name: "Aline".into(),
            email: "aline@example.com".into(),
            password: "pw".into(),
            role: Role::Recycler,
        };
        assert_eq!(form.validate(), Ok(Role::Recycler));

        form.role = Role::Official;
        assert!(matches!(
            form.validate(),
            Err(FormError::RoleNotSelfService(Role::Official))
        ));

        form.name = "  ".into();
        assert_eq!(
            form.validate().map_err(|e| e.to_string()),
            Err("Please fill in all fields.".to_string())
        );
    }

    #[test]
    fn contact_subjects_round_trip_through_labels() {
        for subject in ContactSubject::ALL {
            assert_eq!(
                ContactSubject::from_label(&subject.to_string()),
                Some(subject)
            );
        }
    }

    #[test]
    fn contact_needs_a_message() {
        let form = ContactForm {
            name: "Eric".into(),
            email: "eric@example.com".into(),
            subject: ContactSubject::Billing,
            message: "   ".into(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingContactFields));
    }

    #[test]
    fn settings_defaults_are_valid() {
        assert_eq!(SettingsForm::default().validate(), Ok(()));
        assert_eq!(validate_subscription(""), Err(FormError::MissingEmail));
    }
}
