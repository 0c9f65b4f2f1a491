use crate::domain::model::{ContactSubmission, FieldError, Purpose, Rating};
use crate::utils::validation::{validate_message, validate_sender_email};

/// 單一對話框期間的表單欄位狀態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    purpose: Purpose,
    sender_email: String,
    message: String,
    rating: Rating,
    hovered_rating: Rating,
}

impl ContactForm {
    pub fn new(purpose: Purpose) -> Self {
        Self {
            purpose,
            ..Self::default()
        }
    }

    pub fn purpose(&self) -> Purpose {
        self.purpose
    }

    pub fn sender_email(&self) -> &str {
        &self.sender_email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn set_sender_email(&mut self, value: impl Into<String>) {
        self.sender_email = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    /// Hover preview only; never changes the submitted rating.
    pub fn hover_rating(&mut self, rating: Option<Rating>) {
        self.hovered_rating = rating.unwrap_or(Rating::UNRATED);
    }

    pub fn displayed_rating(&self) -> Rating {
        if self.hovered_rating.is_rated() {
            self.hovered_rating
        } else {
            self.rating
        }
    }

    pub fn rating_label(&self) -> Option<String> {
        self.rating
            .is_rated()
            .then(|| format!("{}/{} stars", self.rating, Rating::MAX))
    }

    /// Placeholder text shown while the message field is still empty.
    pub fn message_hint(&self) -> Option<&'static str> {
        self.message
            .is_empty()
            .then(|| self.purpose.config().placeholder)
    }

    /// 所有目前適用的欄位錯誤，依欄位順序
    pub fn field_errors(&self) -> Vec<FieldError> {
        [
            validate_sender_email(&self.sender_email).err(),
            validate_message(&self.message).err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn validate(&self) -> Result<ContactSubmission, FieldError> {
        validate_sender_email(&self.sender_email)?;
        validate_message(&self.message)?;

        Ok(ContactSubmission {
            sender_email: self.sender_email.clone(),
            message: self.message.clone(),
            rating: self.rating,
            purpose: self.purpose,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.purpose);
    }

    pub fn is_empty(&self) -> bool {
        self.sender_email.is_empty() && self.message.is_empty() && !self.rating.is_rated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::new(Purpose::Collaboration);
        assert!(form.is_empty());
        assert_eq!(form.purpose(), Purpose::Collaboration);
        assert_eq!(form.rating(), Rating::UNRATED);
        assert_eq!(form.rating_label(), None);
    }

    #[test]
    fn test_field_errors_lists_every_field() {
        let mut form = ContactForm::new(Purpose::General);
        assert_eq!(
            form.field_errors(),
            vec![FieldError::InvalidEmail, FieldError::MessageTooShort]
        );

        form.set_sender_email("a@b.com");
        assert_eq!(form.field_errors(), vec![FieldError::MessageTooShort]);

        form.set_message("hello there");
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn test_message_hint_follows_purpose_until_typed() {
        let mut form = ContactForm::new(Purpose::Opportunities);
        assert_eq!(
            form.message_hint(),
            Some("Hi! I have an exciting opportunity that might interest you...")
        );

        form.set_message("Hello");
        assert_eq!(form.message_hint(), None);
    }

    #[test]
    fn test_validate_reports_email_first() {
        let mut form = ContactForm::new(Purpose::General);
        form.set_sender_email("not-an-email");
        form.set_message("short");
        assert_eq!(form.validate(), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_hover_does_not_change_rating() {
        let mut form = ContactForm::new(Purpose::General);
        form.set_rating(Rating::stars(2).unwrap());
        form.hover_rating(Rating::stars(4));

        assert_eq!(form.displayed_rating().value(), 4);
        assert_eq!(form.rating().value(), 2);

        form.hover_rating(None);
        assert_eq!(form.displayed_rating().value(), 2);
        assert_eq!(form.rating_label().as_deref(), Some("2/5 stars"));
    }

    #[test]
    fn test_reset_keeps_purpose() {
        let mut form = ContactForm::new(Purpose::Opportunities);
        form.set_sender_email("a@b.com");
        form.set_message("Let's talk about a role");
        form.set_rating(Rating::stars(5).unwrap());

        form.reset();

        assert!(form.is_empty());
        assert_eq!(form.purpose(), Purpose::Opportunities);
    }
}
