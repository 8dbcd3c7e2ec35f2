//! # 人物实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 人物实体，`name` 全局唯一
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub gender: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites_people::Entity")]
    FavoritesPeople,
}

impl Related<super::favorites_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritesPeople.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
