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

pub async fn create_test_user(db: &DatabaseConnection, prefix: &str) -> users::Model {
    let user = users::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4().to_string()),
        email: ActiveValue::Set(format!("{}_{}@example.com", prefix, Uuid::new_v4())),
        name: ActiveValue::Set(Some(prefix.to_string())),
    };

    user.insert(db).await.expect("Failed to create test user")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author_id: Option<&str>,
    title: &str,
    content: &str,
    published: bool,
) -> posts::Model {
    let now = chrono::Utc::now();
    let post = posts::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4().to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        title: ActiveValue::Set(title.to_string()),
        content: ActiveValue::Set(Some(content.to_string())),
        published: ActiveValue::Set(published),
        view_count: ActiveValue::Set(0),
        author_id: ActiveValue::Set(author_id.map(str::to_string)),
    };

    post.insert(db).await.expect("Failed to create test post")
}

pub async fn pause() {
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
}
