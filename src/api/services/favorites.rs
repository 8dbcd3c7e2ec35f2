//! # 收藏服务
//!
//! 管理 `favorites_planets` 与 `favorites_people` 两张关联表。
//!
//! 两张表的目标列（`planet_id` / `people_id`）都带有全局唯一约束：
//! 一个星球或人物在整个系统里只能有一条收藏记录，与收藏它的用户无关。
//! 表结构保持不变，重复收藏由唯一约束拦截，返回说明该约束的冲突信息。

use std::collections::{HashMap, HashSet};

use entity::{
    FavoritesPeople, FavoritesPlanets, People, Planets, User, favorites_people,
    favorites_planets, people, planets, user,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use serde::Deserialize;

use super::{PeopleService, PlanetsService, UsersService};
use crate::error::{ApiError, Context, Result};
use crate::not_found;

/// 新增收藏请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavoriteRequest {
    pub user_id: i32,
}

/// 更新收藏星球请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFavoritePlanetRequest {
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
}

/// 更新收藏人物请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFavoritePersonRequest {
    pub user_id: Option<i32>,
    pub people_id: Option<i32>,
}

/// 收藏星球记录及其关联行
#[derive(Debug, Clone)]
pub struct FavoritePlanetRow {
    pub favorite: favorites_planets::Model,
    pub user: Option<user::Model>,
    pub planet: Option<planets::Model>,
}

/// 收藏人物记录及其关联行
#[derive(Debug, Clone)]
pub struct FavoritePersonRow {
    pub favorite: favorites_people::Model,
    pub user: Option<user::Model>,
    pub person: Option<people::Model>,
}

/// 某个用户的全部收藏
#[derive(Debug, Clone, Default)]
pub struct UserFavorites {
    pub planets: Vec<FavoritePlanetRow>,
    pub people: Vec<FavoritePersonRow>,
}

/// 收藏服务
pub struct FavoritesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoritesService<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 列出某个用户收藏的星球与人物。用户不存在时返回空列表
    pub async fn list_for_user(&self, user_id: i32) -> Result<UserFavorites> {
        let owner = User::find_by_id(user_id)
            .one(self.db)
            .await
            .context("Failed to fetch favorites owner")?;

        let planets = FavoritesPlanets::find()
            .filter(favorites_planets::Column::UserId.eq(user_id))
            .order_by_asc(favorites_planets::Column::Id)
            .find_also_related(Planets)
            .all(self.db)
            .await
            .context("Failed to list favorite planets")?
            .into_iter()
            .map(|(favorite, planet)| FavoritePlanetRow {
                favorite,
                user: owner.clone(),
                planet,
            })
            .collect();

        let people = FavoritesPeople::find()
            .filter(favorites_people::Column::UserId.eq(user_id))
            .order_by_asc(favorites_people::Column::Id)
            .find_also_related(People)
            .all(self.db)
            .await
            .context("Failed to list favorite people")?
            .into_iter()
            .map(|(favorite, person)| FavoritePersonRow {
                favorite,
                user: owner.clone(),
                person,
            })
            .collect();

        Ok(UserFavorites { planets, people })
    }

    /// 列出全部收藏星球
    pub async fn list_planets(&self) -> Result<Vec<FavoritePlanetRow>> {
        let rows = FavoritesPlanets::find()
            .order_by_asc(favorites_planets::Column::Id)
            .find_also_related(Planets)
            .all(self.db)
            .await
            .context("Failed to list favorite planets")?;

        let users = self
            .load_users(rows.iter().filter_map(|(favorite, _)| favorite.user_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|(favorite, planet)| FavoritePlanetRow {
                user: favorite.user_id.and_then(|id| users.get(&id).cloned()),
                favorite,
                planet,
            })
            .collect())
    }

    /// 列出全部收藏人物
    pub async fn list_people(&self) -> Result<Vec<FavoritePersonRow>> {
        let rows = FavoritesPeople::find()
            .order_by_asc(favorites_people::Column::Id)
            .find_also_related(People)
            .all(self.db)
            .await
            .context("Failed to list favorite people")?;

        let users = self
            .load_users(rows.iter().filter_map(|(favorite, _)| favorite.user_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|(favorite, person)| FavoritePersonRow {
                user: favorite.user_id.and_then(|id| users.get(&id).cloned()),
                favorite,
                person,
            })
            .collect())
    }

    /// 按收藏记录主键获取收藏星球
    pub async fn get_planet(&self, id: i32) -> Result<FavoritePlanetRow> {
        let (favorite, planet) = FavoritesPlanets::find_by_id(id)
            .find_also_related(Planets)
            .one(self.db)
            .await
            .context("Failed to fetch favorite planet")?
            .ok_or_else(|| not_found!("favorite planet", id))?;

        let user = self.load_user(favorite.user_id).await?;
        Ok(FavoritePlanetRow {
            favorite,
            user,
            planet,
        })
    }

    /// 按收藏记录主键获取收藏人物
    pub async fn get_person(&self, id: i32) -> Result<FavoritePersonRow> {
        let (favorite, person) = FavoritesPeople::find_by_id(id)
            .find_also_related(People)
            .one(self.db)
            .await
            .context("Failed to fetch favorite person")?
            .ok_or_else(|| not_found!("favorite person", id))?;

        let user = self.load_user(favorite.user_id).await?;
        Ok(FavoritePersonRow {
            favorite,
            user,
            person,
        })
    }

    /// 收藏星球
    ///
    /// 用户和星球必须存在；星球已被任何用户收藏时返回冲突。
    pub async fn add_planet(
        &self,
        planet_id: i32,
        request: &CreateFavoriteRequest,
    ) -> Result<FavoritePlanetRow> {
        let user = UsersService::new(self.db).get(request.user_id).await?;
        let planet = PlanetsService::new(self.db).get(planet_id).await?;

        let favorite = favorites_planets::ActiveModel {
            id: NotSet,
            user_id: Set(Some(user.id)),
            planet_id: Set(Some(planet.id)),
        }
        .insert(self.db)
        .await
        .map_err(|err| {
            favorite_write_error(
                err,
                Target::Planet(planet_id),
                format!("Failed to favorite planet {planet_id}"),
            )
        })?;

        Ok(FavoritePlanetRow {
            favorite,
            user: Some(user),
            planet: Some(planet),
        })
    }

    /// 收藏人物
    ///
    /// 用户和人物必须存在；人物已被任何用户收藏时返回冲突。
    pub async fn add_person(
        &self,
        people_id: i32,
        request: &CreateFavoriteRequest,
    ) -> Result<FavoritePersonRow> {
        let user = UsersService::new(self.db).get(request.user_id).await?;
        let person = PeopleService::new(self.db).get(people_id).await?;

        let favorite = favorites_people::ActiveModel {
            id: NotSet,
            user_id: Set(Some(user.id)),
            people_id: Set(Some(person.id)),
        }
        .insert(self.db)
        .await
        .map_err(|err| {
            favorite_write_error(
                err,
                Target::Person(people_id),
                format!("Failed to favorite person {people_id}"),
            )
        })?;

        Ok(FavoritePersonRow {
            favorite,
            user: Some(user),
            person: Some(person),
        })
    }

    /// 更新收藏星球记录
    pub async fn update_planet(
        &self,
        id: i32,
        request: &UpdateFavoritePlanetRequest,
    ) -> Result<FavoritePlanetRow> {
        let favorite = FavoritesPlanets::find_by_id(id)
            .one(self.db)
            .await
            .context("Failed to fetch favorite planet")?
            .ok_or_else(|| not_found!("favorite planet", id))?;

        let planet_id = request.planet_id.or(favorite.planet_id);
        let mut model: favorites_planets::ActiveModel = favorite.into();
        if let Some(user_id) = request.user_id {
            model.user_id = Set(Some(user_id));
        }
        if let Some(planet_id) = request.planet_id {
            model.planet_id = Set(Some(planet_id));
        }

        if model.is_changed() {
            model.update(self.db).await.map_err(|err| {
                favorite_write_error(
                    err,
                    planet_id.map_or(Target::Unknown, Target::Planet),
                    format!("Failed to update favorite planet {id}"),
                )
            })?;
        }
        self.get_planet(id).await
    }

    /// 更新收藏人物记录
    pub async fn update_person(
        &self,
        id: i32,
        request: &UpdateFavoritePersonRequest,
    ) -> Result<FavoritePersonRow> {
        let favorite = FavoritesPeople::find_by_id(id)
            .one(self.db)
            .await
            .context("Failed to fetch favorite person")?
            .ok_or_else(|| not_found!("favorite person", id))?;

        let people_id = request.people_id.or(favorite.people_id);
        let mut model: favorites_people::ActiveModel = favorite.into();
        if let Some(user_id) = request.user_id {
            model.user_id = Set(Some(user_id));
        }
        if let Some(people_id) = request.people_id {
            model.people_id = Set(Some(people_id));
        }

        if model.is_changed() {
            model.update(self.db).await.map_err(|err| {
                favorite_write_error(
                    err,
                    people_id.map_or(Target::Unknown, Target::Person),
                    format!("Failed to update favorite person {id}"),
                )
            })?;
        }
        self.get_person(id).await
    }

    /// 按收藏记录主键删除收藏星球
    pub async fn delete_planet(&self, id: i32) -> Result<()> {
        let result = FavoritesPlanets::delete_by_id(id)
            .exec(self.db)
            .await
            .with_context(|| format!("Failed to delete favorite planet {id}"))?;

        if result.rows_affected == 0 {
            return Err(not_found!("favorite planet", id));
        }
        Ok(())
    }

    /// 按收藏记录主键删除收藏人物
    pub async fn delete_person(&self, id: i32) -> Result<()> {
        let result = FavoritesPeople::delete_by_id(id)
            .exec(self.db)
            .await
            .with_context(|| format!("Failed to delete favorite person {id}"))?;

        if result.rows_affected == 0 {
            return Err(not_found!("favorite person", id));
        }
        Ok(())
    }

    /// 取消收藏某个星球
    pub async fn remove_planet(&self, planet_id: i32) -> Result<()> {
        let result = FavoritesPlanets::delete_many()
            .filter(favorites_planets::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await
            .with_context(|| format!("Failed to remove favorite planet {planet_id}"))?;

        if result.rows_affected == 0 {
            return Err(not_found!("favorite planet", planet_id));
        }
        Ok(())
    }

    /// 取消收藏某个人物
    pub async fn remove_person(&self, people_id: i32) -> Result<()> {
        let result = FavoritesPeople::delete_many()
            .filter(favorites_people::Column::PeopleId.eq(people_id))
            .exec(self.db)
            .await
            .with_context(|| format!("Failed to remove favorite person {people_id}"))?;

        if result.rows_affected == 0 {
            return Err(not_found!("favorite person", people_id));
        }
        Ok(())
    }

    async fn load_user(&self, user_id: Option<i32>) -> Result<Option<user::Model>> {
        let Some(user_id) = user_id else {
            return Ok(None);
        };
        User::find_by_id(user_id)
            .one(self.db)
            .await
            .context("Failed to fetch favorite owner")
    }

    async fn load_users(
        &self,
        ids: impl Iterator<Item = i32>,
    ) -> Result<HashMap<i32, user::Model>> {
        let ids: HashSet<i32> = ids.collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = User::find()
            .filter(user::Column::Id.is_in(ids))
            .all(self.db)
            .await
            .context("Failed to fetch favorite owners")?;

        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}

/// 收藏写入的目标
#[derive(Debug, Clone, Copy)]
enum Target {
    Planet(i32),
    Person(i32),
    Unknown,
}

/// 目标列唯一约束冲突时返回说明全局唯一的冲突，其余错误附加上下文后照常转换
fn favorite_write_error(err: DbErr, target: Target, context: String) -> ApiError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        match target {
            Target::Planet(planet_id) => {
                return ApiError::conflict_with_source(
                    format!(
                        "星球 {planet_id} 已有收藏记录: favorites_planets.planet_id 全局唯一，每个星球只能被收藏一次"
                    ),
                    err,
                );
            }
            Target::Person(people_id) => {
                return ApiError::conflict_with_source(
                    format!(
                        "人物 {people_id} 已有收藏记录: favorites_people.people_id 全局唯一，每个人物只能被收藏一次"
                    ),
                    err,
                );
            }
            Target::Unknown => {}
        }
    }

    ApiError::Context {
        context,
        source: Box::new(err.into()),
    }
}
