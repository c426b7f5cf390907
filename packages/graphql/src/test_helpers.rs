use async_graphql::{Request, Response};
use models::{posts, users};
use repositories::{PostRepository, UserRepository};
use sea_orm::*;

use crate::{build_schema, AppSchema, RequestContext};

pub type TestSchema = AppSchema;

pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    models::sync_schema(&db).await.expect("Failed to create tables");
    db
}

pub fn create_test_schema() -> TestSchema {
    build_schema()
}

pub async fn execute(schema: &TestSchema, db: &DatabaseConnection, query: &str) -> Response {
    schema
        .execute(Request::new(query).data(RequestContext::new(db.clone())))
        .await
}

/// `extensions.code` of the first error in the response.
pub fn error_code(res: &Response) -> Option<String> {
    let err = serde_json::to_value(res.errors.first()?).ok()?;
    err["extensions"]["code"].as_str().map(str::to_string)
}

pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
    name: Option<&str>,
) -> users::Model {
    UserRepository::signup(db, name.map(str::to_string), email.to_string())
        .await
        .expect("Failed to create test user")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author_email: Option<&str>,
    title: &str,
    published: bool,
) -> posts::Model {
    let post = PostRepository::create_draft(
        db,
        title.to_string(),
        Some(format!("content of {}", title)),
        author_email,
    )
    .await
    .expect("Failed to create test post");

    if published {
        PostRepository::toggle_publish(db, &post.id)
            .await
            .expect("Failed to publish test post")
    } else {
        post
    }
}
