//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub hashtag: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blogger_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            hashtag: model.hashtag,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<blogger_core::domain::Post> for ActiveModel {
    fn from(post: blogger_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            text: Set(post.text),
            hashtag: Set(post.hashtag),
            created_at: Set(post.created_at.into()),
        }
    }
}
