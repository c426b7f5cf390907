use super::input_validator::{ValidationErrors, ValidationErrorsExt};

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_email(email: &str, errors: &mut ValidationErrors) {
        let email = email.trim();
        if email.is_empty() {
            errors.add_error("email", "Email cannot be empty".to_string());
            return;
        }

        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid {
            errors.add_error("email", "Email format is invalid".to_string());
        }
    }

    pub fn validate_required_string(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        if value.trim().is_empty() {
            errors.add_error(field_name, format!("{} cannot be empty", field_name));
        }
    }

    pub fn validate_non_negative(value: Option<i32>, field_name: &str, errors: &mut ValidationErrors) {
        if matches!(value, Some(v) if v < 0) {
            errors.add_error(field_name, format!("{} must not be negative", field_name));
        }
    }
}
