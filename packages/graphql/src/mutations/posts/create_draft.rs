use super::PostMutation;
use crate::errors::{into_graphql_error, validation_error};
use crate::input_validators::CreateDraftInput;
use crate::types::post::Post as PostType;
use crate::utilities::RequiresDatabase;
use crate::validation::InputValidator;
use async_graphql::{Context, Result};
use repositories::PostRepository;

pub(super) async fn create_draft(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    title: String,
    content: Option<String>,
    author_email: Option<String>,
) -> Result<Option<PostType>> {
    let input = CreateDraftInput {
        title: &title,
        author_email: author_email.as_deref(),
    };
    input.validate().map_err(validation_error)?;

    let db = mutation.database(ctx)?;

    match PostRepository::create_draft(db, title, content, author_email.as_deref()).await {
        Ok(p) => Ok(Some(PostType::from(p))),
        Err(e) => {
            tracing::warn!(error = %e, "failed to create draft");
            Err(into_graphql_error(e))
        }
    }
}
