use super::UserMutation;
use crate::errors::{into_graphql_error, validation_error};
use crate::input_validators::SignupUserInput;
use crate::types::user::User;
use crate::utilities::RequiresDatabase;
use crate::validation::InputValidator;
use async_graphql::{Context, Result};
use repositories::UserRepository;

pub(super) async fn signup_user(
    mutation: &UserMutation,
    ctx: &Context<'_>,
    name: Option<String>,
    email: String,
) -> Result<User> {
    let input = SignupUserInput {
        name: name.as_deref(),
        email: &email,
    };
    input.validate().map_err(validation_error)?;

    let db = mutation.database(ctx)?;

    match UserRepository::signup(db, name, email).await {
        Ok(user) => Ok(User::from(user)),
        Err(e) => {
            tracing::warn!(error = %e, "signup failed");
            Err(into_graphql_error(e))
        }
    }
}
