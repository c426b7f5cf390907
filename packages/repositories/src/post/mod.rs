mod create;
mod delete;
mod read;
mod update;

use models::posts::Column;
use sea_orm::sea_query::{LikeExpr, SimpleExpr};
use sea_orm::*;

use crate::RepositoryError;

pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PostSortBy {
    #[default]
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Parameters of a feed lookup. Only published posts are ever returned.
#[derive(Clone, Debug, Default)]
pub struct FeedQuery {
    pub search: Option<String>,
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub sort_by: PostSortBy,
    pub sort_dir: SortDirection,
}

fn sort_column(sort_by: &PostSortBy) -> Column {
    match sort_by {
        PostSortBy::CreatedAt => Column::CreatedAt,
        PostSortBy::UpdatedAt => Column::UpdatedAt,
    }
}

fn sort_order(sort_dir: &SortDirection) -> Order {
    match sort_dir {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

const LIKE_ESCAPE: char = '\\';

/// Escapes `LIKE` metacharacters so `term` only matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn contains_literal(column: Column, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(term));
    column.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Matches posts whose title or content contains `search`. A blank search
/// string matches everything.
fn search_condition(search: Option<&str>) -> Option<Condition> {
    let term = search?;
    if term.is_empty() {
        return None;
    }
    Some(
        Condition::any()
            .add(contains_literal(Column::Title, term))
            .add(contains_literal(Column::Content, term)),
    )
}

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound(format!("No post found with id {}", id))
}

pub struct PostRepository;
