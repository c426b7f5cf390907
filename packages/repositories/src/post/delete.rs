use data_access_objects::PostDao;
use models::posts;
use sea_orm::*;

use super::{not_found, PostRepository};
use crate::RepositoryError;

impl PostRepository {
    /// Deletes a post and hands back the row as it was before deletion.
    pub async fn delete_post(
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<posts::Model, RepositoryError> {
        let existing = PostDao::find_by_id(db, id).await?.ok_or_else(|| not_found(id))?;

        PostDao::delete(db, existing.clone().into_active_model()).await?;
        tracing::info!(post_id = %existing.id, "post deleted");

        Ok(existing)
    }
}
