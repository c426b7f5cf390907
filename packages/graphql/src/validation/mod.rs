pub mod field_validators;
pub mod input_validator;

pub use field_validators::FieldValidator;
pub use input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
