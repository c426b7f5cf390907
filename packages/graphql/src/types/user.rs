use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use repositories::PostRepository;

use crate::errors::into_graphql_error;
use crate::types::post::Post;
use crate::utilities::RequiresDatabase;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl RequiresDatabase for User {}

#[ComplexObject]
impl User {
    /// Everything this user has written, drafts included
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let db = self.database(ctx)?;

        let posts = PostRepository::posts_by_author(db, &self.id)
            .await
            .map_err(into_graphql_error)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

impl From<models::users::Model> for User {
    fn from(u: models::users::Model) -> Self {
        User {
            id: u.id,
            email: u.email,
            name: u.name,
        }
    }
}
