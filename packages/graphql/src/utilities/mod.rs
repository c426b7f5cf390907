pub mod requires_database;

pub use requires_database::RequiresDatabase;
