//! # 用户实体定义
//!
//! 用户基础信息表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 用户实体
///
/// `password` 只做存储，不参与任何登录逻辑，也不会出现在响应中。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites_people::Entity")]
    FavoritesPeople,
    #[sea_orm(has_many = "super::favorites_planets::Entity")]
    FavoritesPlanets,
}

impl Related<super::favorites_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritesPeople.def()
    }
}

impl Related<super::favorites_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritesPlanets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
