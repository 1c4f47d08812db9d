#[cfg(test)]
mod tests {
    use crate::database::entity::post::{self, PublishedStatus};
    use crate::database::entity::{tag, user};
    use crate::database::postgres_repo::{
        PostgresPostRepository, PostgresTagRepository, PostgresUserRepository,
    };
    use quill_core::domain::{Post, PostStatus, TagRef};
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, PostRepository, TagRepository, UserRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::json;

    fn post_model(id: i32, slug: &str, status: PublishedStatus) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            user_id: 1,
            title: "Test Post".to_owned(),
            slug: slug.to_owned(),
            description: "A description".to_owned(),
            body: json!({ "type": "doc", "content": [
                { "type": "paragraph", "content": [{ "type": "text", "text": "hello" }] }
            ]}),
            tags: json!([3, "1"]),
            reading_time: "0 min read".to_owned(),
            published: status,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn find_post_by_id_converts_to_domain() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(
                7,
                "test-post",
                PublishedStatus::Published,
            )]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(7).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.published, PostStatus::Published);
        assert_eq!(post.tags, vec![TagRef::Id(3), TagRef::Text("1".to_owned())]);
    }

    #[tokio::test]
    async fn find_post_by_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(
                1,
                "shipping-rust",
                PublishedStatus::Draft,
            )]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo.find_by_slug("shipping-rust").await.unwrap().unwrap();
        assert_eq!(post.slug, "shipping-rust");
        assert_eq!(post.published, PostStatus::Draft);
    }

    #[tokio::test]
    async fn missing_slug_yields_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.find_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn tag_catalog_preserves_query_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                tag::Model {
                    id: 1,
                    name: "React".to_owned(),
                    color: "blue".to_owned(),
                },
                tag::Model {
                    id: 3,
                    name: "Remix".to_owned(),
                    color: "red".to_owned(),
                },
            ]])
            .into_connection();

        let repo = PostgresTagRepository::new(db);

        let tags = repo.list_all().await.unwrap();
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["React", "Remix"]);
    }

    #[tokio::test]
    async fn find_user_by_username() {
        let now = chrono::Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: 1,
                username: "dave".to_owned(),
                password_hash: "hash".to_owned(),
                name: "Dave".to_owned(),
                profile_url: None,
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user = repo.find_by_username("dave").await.unwrap().unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "dave");
    }

    #[tokio::test]
    async fn duplicate_slug_insert_surfaces_as_constraint() {
        let dup = || {
            DbErr::Custom(
                "duplicate key value violates unique constraint \"posts_slug_key\"".to_owned(),
            )
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![dup()])
            .append_query_errors(vec![dup()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = Post::new(
            1,
            "Test Post".to_owned(),
            "test-post".to_owned(),
            "A description".to_owned(),
            json!({ "type": "doc" }),
            vec![],
            "0 min read".to_owned(),
            PostStatus::Draft,
        );

        let err = repo.save(post).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[test]
    fn unreadable_tag_column_degrades_to_empty_list() {
        let mut model = post_model(1, "slug", PublishedStatus::Published);
        model.tags = json!({ "not": "an array" });

        let post: Post = model.into();
        assert!(post.tags.is_empty());
    }
}
