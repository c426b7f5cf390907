use crate::types::user::User;
use crate::utilities::RequiresDatabase;
use async_graphql::{Context, Object, Result};

mod signup_user;

#[derive(Default)]
pub struct UserMutation;

impl RequiresDatabase for UserMutation {}

#[Object]
impl UserMutation {
    /// Registers a new user
    async fn signup_user(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        email: String,
    ) -> Result<User> {
        signup_user::signup_user(self, ctx, name, email).await
    }
}
