use data_access_objects::{PostDao, UserDao};
use models::{posts::Model, users};
use sea_orm::*;

use super::{
    search_condition, sort_column, sort_order, FeedQuery, PostRepository, MAX_PAGE_SIZE,
};
use crate::RepositoryError;

impl PostRepository {
    pub async fn get_post(
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<Option<Model>, RepositoryError> {
        Ok(PostDao::find_by_id(db, id).await?)
    }

    /// Published posts matching `query`. `take` is capped at `MAX_PAGE_SIZE`.
    pub async fn feed(
        db: &DatabaseConnection,
        query: FeedQuery,
    ) -> Result<Vec<Model>, RepositoryError> {
        let limit = query.take.unwrap_or(MAX_PAGE_SIZE).min(MAX_PAGE_SIZE);
        let offset = query.skip.unwrap_or(0);

        Ok(PostDao::find_published(
            db,
            search_condition(query.search.as_deref()),
            sort_column(&query.sort_by),
            sort_order(&query.sort_dir),
            offset,
            limit,
        )
        .await?)
    }

    /// Unpublished posts of a user, or `None` when the user does not exist.
    pub async fn drafts_by_user(
        db: &DatabaseConnection,
        user_id: &str,
    ) -> Result<Option<Vec<Model>>, RepositoryError> {
        if UserDao::find_by_id(db, user_id).await?.is_none() {
            return Ok(None);
        }
        Ok(Some(PostDao::find_by_author(db, user_id, Some(false)).await?))
    }

    pub async fn posts_by_author(
        db: &DatabaseConnection,
        author_id: &str,
    ) -> Result<Vec<Model>, RepositoryError> {
        Ok(PostDao::find_by_author(db, author_id, None).await?)
    }

    /// The author with `author_id`, or `None` when that user no longer exists.
    pub async fn author(
        db: &DatabaseConnection,
        author_id: &str,
    ) -> Result<Option<users::Model>, RepositoryError> {
        Ok(UserDao::find_by_id(db, author_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::test_helpers::*;

    // ============= feed tests =============

    #[tokio::test]
    async fn test_feed_only_published() {
        let db = setup_test_db().await;
        create_test_post(&db, None, "Draft", "c", false).await;
        create_test_post(&db, None, "Published", "c", true).await;

        let posts = PostRepository::feed(&db, FeedQuery::default()).await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Published");
    }

    #[tokio::test]
    async fn test_feed_search_matches_title_or_content() {
        let db = setup_test_db().await;
        create_test_post(&db, None, "Join the Prisma Slack", "chat", true).await;
        create_test_post(&db, None, "Follow us", "on Prisma twitter", true).await;
        create_test_post(&db, None, "Unrelated", "nothing here", true).await;
        create_test_post(&db, None, "Prisma draft", "hidden", false).await;

        let query = FeedQuery {
            search: Some("Prisma".into()),
            ..Default::default()
        };
        let posts = PostRepository::feed(&db, query).await.unwrap();
        let mut titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        titles.sort();

        assert_eq!(titles, ["Follow us", "Join the Prisma Slack"]);
    }

    #[tokio::test]
    async fn test_feed_search_wildcards_are_literal() {
        let db = setup_test_db().await;
        create_test_post(&db, None, "1000 tips", "plain", true).await;
        create_test_post(&db, None, "100% done", "plain", true).await;

        let percent = FeedQuery {
            search: Some("100%".into()),
            ..Default::default()
        };
        let posts = PostRepository::feed(&db, percent).await.unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["100% done"]);

        let underscore = FeedQuery {
            search: Some("_".into()),
            ..Default::default()
        };
        assert!(PostRepository::feed(&db, underscore).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feed_empty_search_returns_all_published() {
        let db = setup_test_db().await;
        create_test_post(&db, None, "One", "c", true).await;
        create_test_post(&db, None, "Two", "c", true).await;

        let query = FeedQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        let posts = PostRepository::feed(&db, query).await.unwrap();

        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn test_feed_default_order_newest_first() {
        let db = setup_test_db().await;
        create_test_post(&db, None, "First", "c", true).await;
        pause().await;
        create_test_post(&db, None, "Second", "c", true).await;
        pause().await;
        create_test_post(&db, None, "Third", "c", true).await;

        let posts = PostRepository::feed(&db, FeedQuery::default()).await.unwrap();

        assert_eq!(posts[0].title, "Third");
        assert_eq!(posts[1].title, "Second");
        assert_eq!(posts[2].title, "First");
    }

    #[tokio::test]
    async fn test_feed_skip_and_take() {
        let db = setup_test_db().await;
        for i in 0..5 {
            create_test_post(&db, None, &format!("Post {}", i), "c", true).await;
            pause().await;
        }

        let query = FeedQuery {
            skip: Some(1),
            take: Some(2),
            sort_dir: SortDirection::Asc,
            ..Default::default()
        };
        let posts = PostRepository::feed(&db, query).await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Post 1");
        assert_eq!(posts[1].title, "Post 2");
    }

    #[tokio::test]
    async fn test_feed_skip_past_end_is_empty() {
        let db = setup_test_db().await;
        create_test_post(&db, None, "Only", "c", true).await;

        let query = FeedQuery {
            skip: Some(5),
            ..Default::default()
        };

        assert!(PostRepository::feed(&db, query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feed_take_capped() {
        let db = setup_test_db().await;
        for i in 0..(MAX_PAGE_SIZE + 5) {
            create_test_post(&db, None, &format!("Post {}", i), "c", true).await;
        }

        let query = FeedQuery {
            take: Some(MAX_PAGE_SIZE * 2),
            ..Default::default()
        };
        let posts = PostRepository::feed(&db, query).await.unwrap();

        assert_eq!(posts.len() as u64, MAX_PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_feed_sort_by_updated_at() {
        let db = setup_test_db().await;
        let old = create_test_post(&db, None, "Old", "c", true).await;
        pause().await;
        create_test_post(&db, None, "New", "c", true).await;
        pause().await;
        PostRepository::increment_view_count(&db, &old.id).await.unwrap();

        let query = FeedQuery {
            sort_by: PostSortBy::UpdatedAt,
            sort_dir: SortDirection::Desc,
            ..Default::default()
        };
        let posts = PostRepository::feed(&db, query).await.unwrap();

        assert_eq!(posts[0].title, "Old");
    }

    // ============= drafts / relation tests =============

    #[tokio::test]
    async fn test_drafts_by_user_only_unpublished() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "drafts").await;
        let other = create_test_user(&db, "other").await;
        create_test_post(&db, Some(user.id.as_str()), "Draft", "c", false).await;
        create_test_post(&db, Some(user.id.as_str()), "Live", "c", true).await;
        create_test_post(&db, Some(other.id.as_str()), "Other draft", "c", false).await;

        let drafts = PostRepository::drafts_by_user(&db, &user.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Draft");
    }

    #[tokio::test]
    async fn test_drafts_by_unknown_user_is_none() {
        let db = setup_test_db().await;

        let drafts = PostRepository::drafts_by_user(&db, "missing").await.unwrap();

        assert!(drafts.is_none());
    }

    #[tokio::test]
    async fn test_posts_by_author_includes_drafts() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "writer").await;
        create_test_post(&db, Some(user.id.as_str()), "Draft", "c", false).await;
        create_test_post(&db, Some(user.id.as_str()), "Live", "c", true).await;

        let posts = PostRepository::posts_by_author(&db, &user.id).await.unwrap();

        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn test_author_resolves_user() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "owner").await;
        let post = create_test_post(&db, Some(user.id.as_str()), "Owned", "c", true).await;

        let author_id = post.author_id.as_deref().unwrap();
        let author = PostRepository::author(&db, author_id).await.unwrap().unwrap();

        assert_eq!(author.id, user.id);
    }

    #[tokio::test]
    async fn test_author_unknown_is_none() {
        let db = setup_test_db().await;

        assert!(PostRepository::author(&db, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_post_unknown_is_none() {
        let db = setup_test_db().await;

        assert!(PostRepository::get_post(&db, "missing").await.unwrap().is_none());
    }
}
