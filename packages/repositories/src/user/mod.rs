use data_access_objects::UserDao;
use models::users::{ActiveModel, Model};
use sea_orm::*;
use uuid::Uuid;

use crate::RepositoryError;

pub struct UserRepository;

impl UserRepository {
    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Model>, RepositoryError> {
        Ok(UserDao::find_all(db).await?)
    }

    /// Registers a new user. Emails are unique; a second signup with the
    /// same address is a `Conflict`.
    pub async fn signup(
        db: &DatabaseConnection,
        name: Option<String>,
        email: String,
    ) -> Result<Model, RepositoryError> {
        let email = email.trim().to_string();
        if UserDao::find_by_email(db, &email).await?.is_some() {
            return Err(RepositoryError::Conflict(format!(
                "A user with email {} already exists",
                email
            )));
        }

        let model = ActiveModel {
            id: ActiveValue::set(Uuid::new_v4().to_string()),
            email: ActiveValue::set(email),
            name: ActiveValue::set(name.filter(|n| !n.trim().is_empty())),
        };
        let user = UserDao::insert(db, model).await?;
        tracing::info!(user_id = %user.id, "user signed up");
        Ok(user)
    }
}
