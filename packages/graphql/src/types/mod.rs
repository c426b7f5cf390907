pub mod post;
pub mod sort;
pub mod user;
