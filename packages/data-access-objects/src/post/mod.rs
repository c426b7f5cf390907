use chrono::{DateTime, Utc};
use models::posts::{self, ActiveModel, Column, Entity, Model};
use models::prelude::Posts;
use sea_orm::sea_query::Expr;
use sea_orm::*;

pub struct PostDao;

impl PostDao {
    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id.to_owned()).one(db).await
    }

    /// Posts written by `author_id` in creation order, optionally restricted
    /// to a publication state.
    pub async fn find_by_author(
        db: &DatabaseConnection,
        author_id: &str,
        published: Option<bool>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut q = Posts::find().filter(Column::AuthorId.eq(author_id));

        if let Some(published) = published {
            q = q.filter(Column::Published.eq(published));
        }

        q.order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_published(
        db: &DatabaseConnection,
        filter: Option<Condition>,
        sort_col: Column,
        order: Order,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        let mut q = Posts::find().filter(Column::Published.eq(true));

        if let Some(cond) = filter {
            q = q.filter(cond);
        }

        q.order_by(sort_col, order.clone())
            .order_by(Column::Id, order)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn update(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.update(db).await
    }

    /// Adds one to `view_count` in a single statement. Returns the number of
    /// rows touched, zero when `id` does not exist.
    pub async fn increment_view_count(
        db: &DatabaseConnection,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let res = Posts::update_many()
            .col_expr(
                Column::ViewCount,
                Expr::col((posts::Entity, Column::ViewCount)).add(1),
            )
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete(db: &DatabaseConnection, model: ActiveModel) -> Result<DeleteResult, DbErr> {
        Entity::delete(model).exec(db).await
    }
}
