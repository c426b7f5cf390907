use data_access_objects::{PostDao, UserDao};
use models::posts;
use sea_orm::*;
use uuid::Uuid;

use super::PostRepository;
use crate::RepositoryError;

impl PostRepository {
    /// Creates an unpublished post. When `author_email` is given it must
    /// belong to an existing user.
    pub async fn create_draft(
        db: &DatabaseConnection,
        title: String,
        content: Option<String>,
        author_email: Option<&str>,
    ) -> Result<posts::Model, RepositoryError> {
        if title.trim().is_empty() {
            return Err(RepositoryError::Validation("Title cannot be empty".to_string()));
        }

        let author_id = match author_email {
            Some(email) => {
                let author = UserDao::find_by_email(db, email.trim()).await?.ok_or_else(|| {
                    RepositoryError::NotFound(format!("No user found with email {}", email))
                })?;
                Some(author.id)
            }
            None => None,
        };

        let now = chrono::Utc::now();
        let model = posts::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4().to_string()),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
            title: ActiveValue::set(title),
            content: ActiveValue::set(content),
            published: ActiveValue::set(false),
            view_count: ActiveValue::set(0),
            author_id: ActiveValue::set(author_id),
        };

        let post = PostDao::insert(db, model).await?;
        tracing::info!(post_id = %post.id, "draft created");
        Ok(post)
    }
}
