//! # 星球实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 星球实体，`name` 全局唯一
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub gravity: String,
    pub population: i32,
    pub climate: String,
    pub terrain: String,
    pub surface_water: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites_planets::Entity")]
    FavoritesPlanets,
}

impl Related<super::favorites_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritesPlanets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
