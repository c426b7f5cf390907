use async_graphql::{EmptySubscription, Schema};

pub mod context;
pub mod errors;
pub mod input_validators;
pub mod mutations;
pub mod queries;
pub mod types;
pub mod utilities;
pub mod validation;

pub use context::RequestContext;

pub type AppSchema = Schema<queries::Queries, mutations::Mutations, EmptySubscription>;

/// Builds the executable schema. Resolvers expect a [`RequestContext`] to be
/// attached to every request.
pub fn build_schema() -> AppSchema {
    Schema::build(
        queries::Queries::default(),
        mutations::Mutations::default(),
        EmptySubscription,
    )
    .finish()
}

#[cfg(test)]
pub mod test_helpers;
