pub mod error;
pub mod post;
pub mod user;

pub use error::RepositoryError;
pub use post::{FeedQuery, PostRepository, PostSortBy, SortDirection, MAX_PAGE_SIZE};
pub use user::UserRepository;

#[cfg(test)]
mod test_helpers;
