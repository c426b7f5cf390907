use models::prelude::Users;
use models::users::{ActiveModel, Column, Model};
use sea_orm::*;

pub struct UserDao;

impl UserDao {
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Users::find()
            .order_by_asc(Column::Email)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, DbErr> {
        Users::find_by_id(id.to_owned()).one(db).await
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        Users::find().filter(Column::Email.eq(email)).one(db).await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }
}
