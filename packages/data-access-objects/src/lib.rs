pub mod post;
pub mod user;

pub use post::PostDao;
pub use user::UserDao;

#[cfg(test)]
mod test_helpers;
