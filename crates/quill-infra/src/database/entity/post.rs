//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use quill_core::domain::{PostStatus, TagRef};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// The document tree, stored verbatim.
    pub body: Json,
    /// Tag id references as the editor submitted them.
    pub tags: Json,
    pub reading_time: String,
    pub published: PublishedStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PublishedStatus {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "PUBLISHED")]
    Published,
}

impl From<PublishedStatus> for PostStatus {
    fn from(status: PublishedStatus) -> Self {
        match status {
            PublishedStatus::Draft => PostStatus::Draft,
            PublishedStatus::Published => PostStatus::Published,
        }
    }
}

impl From<PostStatus> for PublishedStatus {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => PublishedStatus::Draft,
            PostStatus::Published => PublishedStatus::Published,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        // Stored tag arrays predate the typed representation; anything
        // unreadable degrades to the empty list rather than failing the row.
        let tags: Vec<TagRef> = serde_json::from_value(model.tags).unwrap_or_default();

        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            body: model.body,
            tags,
            reading_time: model.reading_time,
            published: model.published.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        // Serializing plain structs into JSON values cannot fail.
        let tags = serde_json::to_value(&post.tags).unwrap_or_default();

        Self {
            id: if post.id == 0 { NotSet } else { Set(post.id) },
            user_id: Set(post.user_id),
            title: Set(post.title),
            slug: Set(post.slug),
            description: Set(post.description),
            body: Set(post.body),
            tags: Set(tags),
            reading_time: Set(post.reading_time),
            published: Set(post.published.into()),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
