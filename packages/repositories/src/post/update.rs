use data_access_objects::PostDao;
use models::posts;
use sea_orm::*;

use super::{not_found, PostRepository};
use crate::RepositoryError;

impl PostRepository {
    pub async fn increment_view_count(
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<posts::Model, RepositoryError> {
        let touched = PostDao::increment_view_count(db, id, chrono::Utc::now()).await?;
        if touched == 0 {
            return Err(not_found(id));
        }

        PostDao::find_by_id(db, id).await?.ok_or_else(|| not_found(id))
    }

    /// Flips the `published` flag of a post.
    pub async fn toggle_publish(
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<posts::Model, RepositoryError> {
        let existing = PostDao::find_by_id(db, id).await?.ok_or_else(|| not_found(id))?;
        let published = !existing.published;

        let mut am = existing.into_active_model();
        am.published = ActiveValue::set(published);
        am.updated_at = ActiveValue::set(chrono::Utc::now());

        let post = PostDao::update(db, am).await?;
        tracing::info!(post_id = %post.id, published, "post publication toggled");
        Ok(post)
    }
}
