use async_graphql::{Error, ErrorExtensions};
use repositories::RepositoryError;
use std::fmt;

use crate::validation::ValidationErrors;

/// A repository failure on its way out to the client.
#[derive(Debug)]
pub struct ApiError(pub RepositoryError);

impl ApiError {
    pub fn code(&self) -> &'static str {
        match &self.0 {
            RepositoryError::NotFound(_) => "NOT_FOUND",
            RepositoryError::Validation(_) => "BAD_USER_INPUT",
            RepositoryError::Conflict(_) => "CONFLICT",
            RepositoryError::Database(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError(e)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            // driver details stay in the logs
            RepositoryError::Database(_) => f.write_str("Internal server error"),
            other => write!(f, "{}", other),
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        if let RepositoryError::Database(e) = &self.0 {
            tracing::error!(error = %e, "database failure");
        }
        let code = self.code();
        Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", code))
    }
}

pub fn into_graphql_error(e: RepositoryError) -> Error {
    ApiError::from(e).extend()
}

pub fn validation_error(errors: ValidationErrors) -> Error {
    let message = errors
        .values()
        .flatten()
        .cloned()
        .collect::<Vec<String>>()
        .join(", ");
    tracing::warn!(%message, "rejected input");
    Error::new(message).extend_with(|_, ext| ext.set("code", "BAD_USER_INPUT"))
}
