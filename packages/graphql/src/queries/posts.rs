use async_graphql::{Context, Object, Result};
use repositories::{FeedQuery, PostRepository, PostSortBy};

use crate::errors::{into_graphql_error, validation_error};
use crate::input_validators::FeedInput;
use crate::types::post::Post as PostType;
use crate::types::sort::PostOrderByUpdatedAtInput;
use crate::utilities::RequiresDatabase;
use crate::validation::InputValidator;

#[derive(Default)]
pub struct PostQueries;

impl RequiresDatabase for PostQueries {}

#[Object]
impl PostQueries {
    /// A single post, or null when the id is unknown
    async fn post_by_id(&self, ctx: &Context<'_>, id: String) -> Result<Option<PostType>> {
        let db = self.database(ctx)?;

        let post = PostRepository::get_post(db, &id)
            .await
            .map_err(into_graphql_error)?;
        Ok(post.map(PostType::from))
    }

    /// Published posts, optionally filtered by a search string matched
    /// against title and content
    async fn feed(
        &self,
        ctx: &Context<'_>,
        search_string: Option<String>,
        skip: Option<i32>,
        take: Option<i32>,
        order_by: Option<PostOrderByUpdatedAtInput>,
    ) -> Result<Vec<PostType>> {
        FeedInput { skip, take }.validate().map_err(validation_error)?;
        let db = self.database(ctx)?;

        let mut query = FeedQuery {
            search: search_string,
            skip: skip.map(|s| s as u64),
            take: take.map(|t| t as u64),
            ..Default::default()
        };
        if let Some(order_by) = order_by {
            query.sort_by = PostSortBy::UpdatedAt;
            query.sort_dir = order_by.updated_at.into();
        }

        let posts = PostRepository::feed(db, query)
            .await
            .map_err(into_graphql_error)?;
        Ok(posts.into_iter().map(PostType::from).collect())
    }

    /// Unpublished posts of a user, or null when the user does not exist
    async fn drafts_by_user(&self, ctx: &Context<'_>, id: String) -> Result<Option<Vec<PostType>>> {
        let db = self.database(ctx)?;

        let drafts = PostRepository::drafts_by_user(db, &id)
            .await
            .map_err(into_graphql_error)?;
        Ok(drafts.map(|posts| posts.into_iter().map(PostType::from).collect()))
    }
}
