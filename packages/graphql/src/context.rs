use sea_orm::DatabaseConnection;

/// Request-scoped dependencies handed to every resolver.
///
/// A fresh value is built for each incoming HTTP request; cloning the
/// connection only clones the pool handle.
#[derive(Clone, Debug)]
pub struct RequestContext {
    db: DatabaseConnection,
}

impl RequestContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
