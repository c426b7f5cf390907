use async_graphql::{Context, Object, Result};
use repositories::UserRepository;

use crate::errors::into_graphql_error;
use crate::types::user::User as UserType;
use crate::utilities::RequiresDatabase;

#[derive(Default)]
pub struct UserQueries;

impl RequiresDatabase for UserQueries {}

#[Object]
impl UserQueries {
    /// All registered users, ordered by email
    async fn all_users(&self, ctx: &Context<'_>) -> Result<Vec<UserType>> {
        let db = self.database(ctx)?;

        let users = UserRepository::all(db).await.map_err(into_graphql_error)?;
        Ok(users.into_iter().map(UserType::from).collect())
    }
}
