use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;

use crate::context::RequestContext;

pub trait RequiresDatabase {
    fn database<'a>(&self, ctx: &Context<'a>) -> Result<&'a DatabaseConnection> {
        Ok(ctx.data::<RequestContext>()?.db())
    }
}
