use crate::types::post::Post as PostType;
use crate::utilities::RequiresDatabase;
use async_graphql::{Context, Object, Result};

mod create_draft;
mod delete_post;
mod increment_post_view_count;
mod toggle_publish_post;

#[derive(Default)]
pub struct PostMutation;

impl RequiresDatabase for PostMutation {}

#[Object]
impl PostMutation {
    /// Creates an unpublished post, optionally attributed to an existing user
    async fn create_draft(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: Option<String>,
        author_email: Option<String>,
    ) -> Result<Option<PostType>> {
        create_draft::create_draft(self, ctx, title, content, author_email).await
    }

    async fn increment_post_view_count(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> Result<Option<PostType>> {
        increment_post_view_count::increment_post_view_count(self, ctx, id).await
    }

    /// Publishes a draft, or turns a published post back into a draft
    async fn toggle_publish_post(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> Result<Option<PostType>> {
        toggle_publish_post::toggle_publish_post(self, ctx, id).await
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: String) -> Result<Option<PostType>> {
        delete_post::delete_post(self, ctx, id).await
    }
}
