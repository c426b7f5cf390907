use super::PostMutation;
use crate::errors::into_graphql_error;
use crate::types::post::Post as PostType;
use crate::utilities::RequiresDatabase;
use async_graphql::{Context, Result};
use repositories::PostRepository;

pub(super) async fn delete_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    id: String,
) -> Result<Option<PostType>> {
    let db = mutation.database(ctx)?;

    let post = PostRepository::delete_post(db, &id)
        .await
        .map_err(into_graphql_error)?;
    Ok(Some(PostType::from(post)))
}
