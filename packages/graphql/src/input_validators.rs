use crate::validation::{FieldValidator, InputValidator, ValidationErrors, ValidationErrorsExt};

pub struct SignupUserInput<'a> {
    pub name: Option<&'a str>,
    pub email: &'a str,
}

impl InputValidator for SignupUserInput<'_> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_email(self.email, &mut errors);
        if let Some(name) = self.name {
            if name.len() > 255 {
                errors.add_error("name", "name must be at most 255 characters".to_string());
            }
        }

        errors.into_result()
    }
}

pub struct CreateDraftInput<'a> {
    pub title: &'a str,
    pub author_email: Option<&'a str>,
}

impl InputValidator for CreateDraftInput<'_> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(self.title, "title", &mut errors);
        if let Some(email) = self.author_email {
            FieldValidator::validate_email(email, &mut errors);
        }

        errors.into_result()
    }
}

pub struct FeedInput {
    pub skip: Option<i32>,
    pub take: Option<i32>,
}

impl InputValidator for FeedInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_non_negative(self.skip, "skip", &mut errors);
        FieldValidator::validate_non_negative(self.take, "take", &mut errors);

        errors.into_result()
    }
}
