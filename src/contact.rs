//! Contact form model and validation.
//!
//! The form reproduces browser-native constraint validation: `name` and
//! `email` are required, `email` must be email-shaped, and `message` must be
//! at least [`ContactForm::MIN_MESSAGE_LEN`] characters. Submission is gated
//! on [`ContactForm::is_valid`]; there is no transport behind it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Minimum message length, matching the original form's constraint.
    pub const MIN_MESSAGE_LEN: usize = 10;

    pub fn name_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Permissive email-shape check: a non-empty local part, one `@`, and a
    /// non-empty domain with no whitespace. Matches the loose validation a
    /// browser applies to `type=email`, not a full RFC parse.
    pub fn email_valid(&self) -> bool {
        match self.email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !self.email.chars().any(char::is_whitespace)
            }
            None => false,
        }
    }

    pub fn message_valid(&self) -> bool {
        self.message.chars().count() >= Self::MIN_MESSAGE_LEN
    }

    pub fn is_valid(&self) -> bool {
        self.name_valid() && self.email_valid() && self.message_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sai Bankar".into(),
            email: "sai@example.com".into(),
            message: "Let's build something immersive together.".into(),
        }
    }

    #[test]
    fn empty_form_is_invalid() {
        assert!(!ContactForm::default().is_valid());
    }

    #[test]
    fn filled_form_is_valid() {
        assert!(filled().is_valid());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut form = filled();
        form.name = "   ".into();
        assert!(!form.name_valid());
        assert!(!form.is_valid());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        let mut form = filled();
        for bad in ["", "no-at-sign", "@nodomain.com", "local@", "a b@c.com", "a@b@c"] {
            form.email = bad.into();
            assert!(!form.email_valid(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn permissive_emails_are_accepted() {
        let mut form = filled();
        // Native type=email accepts dotless domains.
        form.email = "a@b".into();
        assert!(form.email_valid());
    }

    #[test]
    fn short_message_is_rejected() {
        let mut form = filled();
        form.message = "too short".into();
        assert_eq!(form.message.chars().count(), 9);
        assert!(!form.message_valid());
        assert!(!form.is_valid());
    }

    #[test]
    fn ten_character_message_is_accepted() {
        let mut form = filled();
        form.message = "0123456789".into();
        assert!(form.message_valid());
    }
}
