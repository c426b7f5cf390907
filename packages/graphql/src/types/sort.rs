use async_graphql::{Enum, InputObject};
use repositories::SortDirection;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum SortOrder {
    #[graphql(name = "asc")]
    Asc,
    #[graphql(name = "desc")]
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Asc,
            SortOrder::Desc => SortDirection::Desc,
        }
    }
}

#[derive(InputObject, Copy, Clone, Debug)]
pub struct PostOrderByUpdatedAtInput {
    pub updated_at: SortOrder,
}
