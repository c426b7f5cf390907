use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use chrono::{DateTime, Utc};
use repositories::PostRepository;

use crate::errors::into_graphql_error;
use crate::types::user::User;
use crate::utilities::RequiresDatabase;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Post {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub view_count: i32,
    #[graphql(skip)]
    pub author_id: Option<String>,
}

impl RequiresDatabase for Post {}

#[ComplexObject]
impl Post {
    /// The user who wrote this post, if any
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(author_id) = self.author_id.as_deref() else {
            return Ok(None);
        };
        let db = self.database(ctx)?;

        let author = PostRepository::author(db, author_id)
            .await
            .map_err(into_graphql_error)?;
        Ok(author.map(User::from))
    }
}

impl From<models::posts::Model> for Post {
    fn from(p: models::posts::Model) -> Self {
        Post {
            id: p.id,
            created_at: p.created_at,
            updated_at: p.updated_at,
            title: p.title,
            content: p.content,
            published: p.published,
            view_count: p.view_count,
            author_id: p.author_id,
        }
    }
}
