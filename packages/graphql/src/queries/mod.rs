use async_graphql::MergedObject;
mod posts;
mod users;

#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct Queries(users::UserQueries, posts::PostQueries);
