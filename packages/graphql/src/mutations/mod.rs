use async_graphql::MergedObject;
mod posts;
mod users;

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct Mutations(posts::PostMutation, users::UserMutation);
