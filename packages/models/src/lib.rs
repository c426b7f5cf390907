//! `SeaORM` entities for the blog schema.

pub mod prelude;

pub mod posts;
pub mod users;

mod sync;

pub use sync::sync_schema;
