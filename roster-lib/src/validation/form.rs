//! Raw user form input.

use super::USER_CONSTRAINTS;
use crate::error::FieldValidationError;
use crate::error::ValidationError;
use crate::model::Gender;
use crate::model::User;
use crate::model::UserFields;

/// Unvalidated form values, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: String::new(),
            gender: Gender::default().to_string(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

impl UserForm {
    /// Blank form for creating a user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record, for editing.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            age: user.age.to_string(),
            gender: user.gender.to_string(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
        }
    }

    /// The age as an integer, if it parses.
    pub fn parsed_age(&self) -> Option<i64> {
        self.age.trim().parse().ok()
    }

    /// Runs every constraint and returns the first failure of each field.
    pub fn errors(&self) -> Vec<FieldValidationError> {
        let mut errors: Vec<FieldValidationError> = Vec::new();
        for constraint in USER_CONSTRAINTS {
            if errors.iter().any(|e| e.field == constraint.field) {
                continue;
            }
            if !(constraint.check)(self) {
                errors.push(FieldValidationError::new(constraint.field, constraint.message));
            }
        }
        errors
    }

    /// Validates the form and converts it into record fields.
    ///
    /// Names and email are trimmed; a blank phone becomes `None`.
    pub fn validate(&self) -> Result<UserFields, ValidationError> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        let (Some(age), Ok(gender)) = (
            self.parsed_age().and_then(|a| u32::try_from(a).ok()),
            self.gender.parse::<Gender>(),
        ) else {
            // unreachable while the age and gender constraints hold
            return Err(ValidationError::new(self.errors()));
        };

        let phone = self.phone.trim();
        Ok(UserFields {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            age,
            gender,
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use crate::validation::AGE;
    use crate::validation::EMAIL;
    use crate::validation::FIRST_NAME;
    use crate::validation::GENDER;
    use crate::validation::LAST_NAME;

    fn valid() -> UserForm {
        UserForm {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            age: "36".to_string(),
            gender: "female".to_string(),
            email: "ada@example.com".to_string(),
            phone: "  ".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let fields = valid().validate().unwrap();
        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.age, 36);
        assert_eq!(fields.gender, Gender::Female);
        assert_eq!(fields.phone, None);
    }

    #[test]
    fn test_blank_form_reports_each_field_once() {
        let err = UserForm::new().validate().unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec![FIRST_NAME, LAST_NAME, AGE, EMAIL]);
        assert_eq!(err.message_for(FIRST_NAME), Some("First name is required"));
        assert_eq!(err.message_for(AGE), Some("Age must be a whole number"));
        assert_eq!(err.first_field(), Some(FIRST_NAME));
    }

    #[test]
    fn test_age_bounds() {
        let mut form = valid();
        form.age = "17".to_string();
        assert_eq!(
            form.validate().unwrap_err().message_for(AGE),
            Some("Age must be at least 18")
        );

        form.age = "151".to_string();
        assert_eq!(
            form.validate().unwrap_err().message_for(AGE),
            Some("Age must be less than 150")
        );

        form.age = "18".to_string();
        assert!(form.validate().is_ok());
        form.age = "150".to_string();
        assert!(form.validate().is_ok());

        form.age = "20.5".to_string();
        assert_eq!(
            form.validate().unwrap_err().message_for(AGE),
            Some("Age must be a whole number")
        );
    }

    #[test]
    fn test_gender_and_email() {
        let mut form = valid();
        form.gender = "robot".to_string();
        form.email = "not-an-email".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.message_for(GENDER), Some("Invalid gender"));
        assert_eq!(err.message_for(EMAIL), Some("Invalid email address"));
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn test_from_user_roundtrips() {
        let fields = valid().validate().unwrap();
        let mut user = fields.with_id(UserId(4));
        user.phone = Some("555-0100".to_string());

        let form = UserForm::from_user(&user);
        assert_eq!(form.phone, "555-0100");
        assert_eq!(form.validate().unwrap(), user.fields());
    }
}
