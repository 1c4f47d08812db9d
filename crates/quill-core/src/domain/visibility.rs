//! Draft/published visibility rules, evaluated per listing or detail request.
//!
//! Every function here is a pure filter over already-fetched rows; the
//! repositories fetch, the handlers apply policy.

use super::post::{Post, PostStatus};

/// The requesting viewer, as far as visibility is concerned.
///
/// A single distinguished user id (the blog owner) is allowed to see drafts;
/// everyone else, authenticated or not, sees published posts only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    user_id: Option<i32>,
    admin_user_id: i32,
}

impl Viewer {
    pub fn anonymous(admin_user_id: i32) -> Self {
        Self {
            user_id: None,
            admin_user_id,
        }
    }

    pub fn user(user_id: i32, admin_user_id: i32) -> Self {
        Self {
            user_id: Some(user_id),
            admin_user_id,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user_id
    }

    /// Only the distinguished owner viewer sees drafts.
    pub fn sees_drafts(&self) -> bool {
        self.user_id == Some(self.admin_user_id)
    }
}

/// Whether a single post is visible to the viewer (detail requests).
pub fn can_view(post: &Post, viewer: &Viewer) -> bool {
    post.published == PostStatus::Published || viewer.sees_drafts()
}

/// Whether a user may mutate content owned by `owner_id`.
///
/// Mutations are owner-only. The draft-reading privilege of the owner viewer
/// does not extend to editing or deleting other authors' content.
pub fn can_modify(owner_id: i32, editor_id: i32) -> bool {
    owner_id == editor_id
}

/// Listing filter: published posts, plus drafts for the owner viewer.
pub fn filter_visible(posts: Vec<Post>, viewer: &Viewer) -> Vec<Post> {
    posts.into_iter().filter(|p| can_view(p, viewer)).collect()
}

/// Tag-filtered listing: the draft/published split applies first, then
/// membership of the tag id in the post's tag-ref list.
pub fn filter_by_tag(posts: Vec<Post>, tag_id: i32, viewer: &Viewer) -> Vec<Post> {
    filter_visible(posts, viewer)
        .into_iter()
        .filter(|p| p.has_tag(tag_id))
        .collect()
}

/// Full-text search over title and description, case-insensitive substring.
/// Restricted to published posts regardless of viewer.
pub fn search_published(posts: Vec<Post>, query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .into_iter()
        .filter(|p| p.published == PostStatus::Published)
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagRef;
    use serde_json::json;

    const ADMIN: i32 = 1;

    fn post(title: &str, status: PostStatus, tags: Vec<TagRef>) -> Post {
        Post::new(
            ADMIN,
            title.to_string(),
            title.to_lowercase().replace(' ', "-"),
            format!("about {title}"),
            json!({ "type": "doc" }),
            tags,
            "0 min read".to_string(),
            status,
        )
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            post("Shipping Rust", PostStatus::Published, vec![TagRef::Id(3)]),
            post("Secret Draft", PostStatus::Draft, vec![TagRef::Id(3)]),
            post("React Notes", PostStatus::Published, vec![TagRef::Id(1)]),
        ]
    }

    #[test]
    fn drafts_hidden_from_non_owners() {
        let anon = Viewer::anonymous(ADMIN);
        let other = Viewer::user(2, ADMIN);

        for viewer in [anon, other] {
            let visible = filter_visible(sample_posts(), &viewer);
            assert_eq!(visible.len(), 2);
            assert!(visible.iter().all(|p| p.published == PostStatus::Published));
        }
    }

    #[test]
    fn owner_sees_drafts() {
        let owner = Viewer::user(ADMIN, ADMIN);
        let visible = filter_visible(sample_posts(), &owner);

        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn tag_filter_applies_visibility_first() {
        let anon = Viewer::anonymous(ADMIN);
        let owner = Viewer::user(ADMIN, ADMIN);

        assert_eq!(filter_by_tag(sample_posts(), 3, &anon).len(), 1);
        assert_eq!(filter_by_tag(sample_posts(), 3, &owner).len(), 2);
    }

    #[test]
    fn search_never_surfaces_drafts() {
        // "Secret" appears only in the draft post
        let hits = search_published(sample_posts(), "secret");
        assert!(hits.is_empty());
    }

    #[test]
    fn search_matches_title_and_description_case_insensitively() {
        let by_title = search_published(sample_posts(), "SHIPPING");
        assert_eq!(by_title.len(), 1);

        let by_description = search_published(sample_posts(), "about react");
        assert_eq!(by_description.len(), 1);
    }

    #[test]
    fn only_the_owner_may_modify() {
        assert!(can_modify(2, 2));
        assert!(!can_modify(2, 3));
        // Seeing drafts is an owner-viewer privilege; editing is not.
        assert!(!can_modify(2, ADMIN));
    }

    #[test]
    fn draft_detail_hidden_from_non_owner() {
        let draft = post("Secret Draft", PostStatus::Draft, vec![]);

        assert!(!can_view(&draft, &Viewer::user(2, ADMIN)));
        assert!(can_view(&draft, &Viewer::user(ADMIN, ADMIN)));
    }
}
