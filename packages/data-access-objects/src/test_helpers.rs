use models::{posts, users};
use sea_orm::*;
use uuid::Uuid;

pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    models::sync_schema(&db).await.expect("Failed to create tables");
    db
}

pub async fn create_test_user(db: &DatabaseConnection, email: &str) -> users::Model {
    let user = users::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4().to_string()),
        email: ActiveValue::Set(email.to_string()),
        name: ActiveValue::Set(None),
    };

    user.insert(db).await.expect("Failed to create test user")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author_id: Option<&str>,
    title: &str,
    published: bool,
) -> posts::Model {
    let now = chrono::Utc::now();
    let post = posts::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4().to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        title: ActiveValue::Set(title.to_string()),
        content: ActiveValue::Set(None),
        published: ActiveValue::Set(published),
        view_count: ActiveValue::Set(0),
        author_id: ActiveValue::Set(author_id.map(str::to_string)),
    };

    post.insert(db).await.expect("Failed to create test post")
}
